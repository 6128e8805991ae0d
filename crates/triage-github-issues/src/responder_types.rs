use serde::{Deserialize, Serialize};

/// Query payload posted to the responder service. Built fresh each run and
/// never persisted; field names follow the responder's camelCase wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponderQuery {
    pub custom_id: String,
    pub query_details: String,
    pub labels: Vec<ResponderLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponderLabel {
    pub id: u64,
    pub text: String,
    pub description: Option<String>,
}

/// Verdict returned by the responder. The payload is untrusted external
/// input: every field is optional and checked individually by the
/// reconciler, never assumed present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BotResponse {
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub state_reason: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default, rename = "completionCost")]
    pub completion_cost: Option<f64>,
}
