use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubUser {
    pub login: String,
}

/// Label as attached to one issue; only the name feeds the query text.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubIssueLabel {
    pub name: String,
}

/// Label catalog entry for the whole repository. Identity is `id`; the
/// description is forwarded to the responder for disambiguation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubLabel {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Issue snapshot as returned by the GitHub REST API. Fetched once per run
/// and never mutated in place; updates go out as separate requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubIssue {
    pub number: u64,
    pub state: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<GithubIssueLabel>,
    #[serde(default)]
    pub comments: u64,
    pub comments_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubComment {
    pub user: GithubUser,
    pub created_at: String,
    #[serde(default)]
    pub body: Option<String>,
}
