use serde::{Deserialize, Serialize};

use crate::github_types::GithubIssue;
use crate::responder_types::BotResponse;

/// Fixed suffix appended to every responder-authored comment before posting.
pub const AI_DISCLAIMER: &str =
    "\n\n---\n*This is an AI-generated response and there are possibilities of errors.*";

/// The responder sometimes serializes an absent state reason as the literal
/// string "null" instead of omitting the field. Suspicious upstream quirk,
/// preserved as-is: the value is treated as absent.
const PLACEHOLDER_STATE_REASON: &str = "null";

/// Partial issue update. Only fields that differ from the current issue are
/// populated; an empty patch means no metadata write is needed and must
/// never be sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssuePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl IssuePatch {
    pub fn is_empty(&self) -> bool {
        self.state.is_none() && self.state_reason.is_none() && self.labels.is_none()
    }
}

/// Minimal mutation set derived from one verdict: an optional comment body
/// (disclaimer already appended) and an optional metadata patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueUpdatePlan {
    pub comment: Option<String>,
    pub patch: IssuePatch,
}

/// Compares the verdict against the issue's current state and keeps only
/// the changes worth writing:
/// - a state change is emitted only when the target differs from the current
///   state, so no-op writes never fire GitHub's state-change side effects;
/// - a state reason rides along only with a state change and only when it is
///   a real value;
/// - labels are forwarded only when non-empty, because GitHub reads an empty
///   label array as "remove all labels".
pub fn reconcile(issue: &GithubIssue, response: &BotResponse) -> IssueUpdatePlan {
    let comment = response
        .comment
        .as_deref()
        .map(|text| format!("{text}{AI_DISCLAIMER}"));

    let mut patch = IssuePatch::default();
    if let Some(status) = response.status.as_deref() {
        if status != issue.state {
            patch.state = Some(status.to_string());
            if let Some(reason) = response.state_reason.as_deref() {
                if reason != PLACEHOLDER_STATE_REASON {
                    patch.state_reason = Some(reason.to_string());
                }
            }
        }
    }
    if let Some(labels) = response.labels.as_ref() {
        if !labels.is_empty() {
            patch.labels = Some(labels.clone());
        }
    }

    IssueUpdatePlan { comment, patch }
}
