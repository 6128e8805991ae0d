use anyhow::Result;

use triage_github_issues::github_types::{GithubComment, GithubIssue, GithubLabel};

use crate::api_client::{GithubApiClient, RepoRef};

/// Complete context for one issue: the snapshot itself, its comments in
/// fetch order, and the repository's full label catalog.
#[derive(Debug, Clone)]
pub struct IssueContext {
    pub issue: GithubIssue,
    pub comments: Vec<GithubComment>,
    pub labels: Vec<GithubLabel>,
}

/// Up to three sequential reads. Comments are fetched only when the issue
/// reports a non-zero count, keeping the audit trail free of pointless
/// calls. Any failure aborts the whole run: the responder must see a
/// complete context or none at all.
pub async fn collect_issue_context(
    client: &GithubApiClient,
    repo: &RepoRef,
    issue_number: u64,
) -> Result<IssueContext> {
    let issue = client.fetch_issue(repo, issue_number).await?;
    let comments = if issue.comments > 0 {
        client.fetch_comments(&issue.comments_url).await?
    } else {
        Vec::new()
    };
    let labels = client.fetch_repo_labels(repo).await?;
    Ok(IssueContext {
        issue,
        comments,
        labels,
    })
}
