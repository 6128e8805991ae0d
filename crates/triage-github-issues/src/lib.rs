//! Pure helpers for the GitHub issue responder bridge.
//! This crate provides the wire data types, the deterministic query
//! formatter, and the verdict reconciler consumed by the runtime crate.

pub mod github_types;
pub mod issue_reconcile;
pub mod query_render;
pub mod responder_types;
