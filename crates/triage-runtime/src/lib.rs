//! I/O layer for the triage bridge: GitHub API client, issue context
//! aggregation, responder gateway, and the sequential run pipeline.

pub mod api_client;
pub mod issue_context;
pub mod responder_gateway;
pub mod run;

pub use api_client::{GithubApiClient, RepoRef, TransportError};
pub use run::{run_triage, TriageRunConfig, TriageRunReport};
