use anyhow::Result;

use triage_github_issues::issue_reconcile::reconcile;
use triage_github_issues::query_render::render_responder_query;

use crate::api_client::{GithubApiClient, RepoRef};
use crate::issue_context::collect_issue_context;
use crate::responder_gateway::ResponderGateway;

#[derive(Debug, Clone)]
pub struct TriageRunConfig {
    pub repo: RepoRef,
    pub issue_number: u64,
    pub github_api_base: String,
    pub gh_token: Option<String>,
    pub responder_base: String,
    pub org_id: String,
    pub bot_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriageRunReport {
    pub comment_posted: bool,
    pub patch_applied: bool,
    pub completion_cost: Option<f64>,
}

/// One stateless pass over one issue: collect context, render the query,
/// ask the responder, reconcile, apply writes. Strictly sequential; the
/// first failure aborts the rest of the pipeline. The comment post and the
/// metadata patch are independent writes with no rollback between them.
pub async fn run_triage(config: &TriageRunConfig) -> Result<TriageRunReport> {
    let client = GithubApiClient::new(&config.github_api_base, config.gh_token.as_deref())?;
    let gateway = ResponderGateway::new(&config.responder_base, &config.org_id, &config.bot_id)?;

    let context = collect_issue_context(&client, &config.repo, config.issue_number).await?;
    println!(
        "triage context: repo={} issue={} state={} comments={} catalog_labels={}",
        config.repo.as_slug(),
        config.issue_number,
        context.issue.state,
        context.comments.len(),
        context.labels.len()
    );

    let query = render_responder_query(&context.issue, &context.comments, &context.labels);
    let verdict = gateway.request_verdict(&query).await?;
    println!(
        "triage verdict: custom_id={} status={} has_comment={} labels={}",
        query.custom_id,
        verdict.status.as_deref().unwrap_or("-"),
        verdict.comment.is_some(),
        verdict.labels.as_ref().map(Vec::len).unwrap_or(0)
    );
    if let Some(cost) = verdict.completion_cost {
        println!(
            "triage cost: custom_id={} completion_cost={}",
            query.custom_id, cost
        );
    }

    let plan = reconcile(&context.issue, &verdict);
    let mut report = TriageRunReport {
        completion_cost: verdict.completion_cost,
        ..TriageRunReport::default()
    };
    if let Some(comment) = plan.comment.as_deref() {
        client
            .create_issue_comment(&config.repo, config.issue_number, comment)
            .await?;
        report.comment_posted = true;
    }
    if !plan.patch.is_empty() {
        client
            .update_issue(&config.repo, config.issue_number, &plan.patch)
            .await?;
        report.patch_applied = true;
    }
    Ok(report)
}
