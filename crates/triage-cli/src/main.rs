mod cli_args;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli_args::Cli;
use triage_runtime::{run_triage, RepoRef, TriageRunConfig};

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let repo = RepoRef::parse(&cli.repo)?;

    let config = TriageRunConfig {
        repo,
        issue_number: cli.ticket,
        github_api_base: cli.github_api_base,
        gh_token: cli.gh_token,
        responder_base: cli.responder_base,
        org_id: cli.org_id,
        bot_id: cli.bot_id,
    };
    let report = run_triage(&config).await?;
    println!(
        "triage run complete: repo={} issue={} comment_posted={} patch_applied={}",
        cli.repo, cli.ticket, report.comment_posted, report.patch_applied
    );
    Ok(())
}
