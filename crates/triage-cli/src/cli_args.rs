use clap::Parser;

fn parse_positive_u64(value: &str) -> Result<u64, String> {
    let parsed = value
        .parse::<u64>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

#[derive(Debug, Parser)]
#[command(
    name = "triage",
    about = "Bridge one GitHub issue to the responder bot and apply its verdict",
    version
)]
pub struct Cli {
    #[arg(
        long,
        value_parser = parse_positive_u64,
        help = "Issue number to triage"
    )]
    pub ticket: u64,

    #[arg(long, help = "Target repository in owner/name form")]
    pub repo: String,

    #[arg(
        long = "gh-token",
        env = "GITHUB_TOKEN",
        help = "GitHub token attached as a bearer credential to every GitHub call; GitHub calls go unauthenticated when omitted"
    )]
    pub gh_token: Option<String>,

    #[arg(long = "org-id", help = "Responder organization identifier")]
    pub org_id: String,

    #[arg(long = "bot-id", help = "Responder bot identifier")]
    pub bot_id: String,

    #[arg(
        long = "github-api-base",
        env = "TRIAGE_GITHUB_API_BASE",
        default_value = "https://api.github.com",
        help = "Base URL for the GitHub REST API"
    )]
    pub github_api_base: String,

    #[arg(
        long = "responder-base",
        env = "TRIAGE_RESPONDER_BASE",
        help = "Base URL for the responder bot service"
    )]
    pub responder_base: String,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    fn base_args() -> Vec<&'static str> {
        vec![
            "triage",
            "--ticket",
            "7",
            "--repo",
            "owner/repo",
            "--org-id",
            "org-1",
            "--bot-id",
            "bot-1",
            "--responder-base",
            "https://responder.example",
        ]
    }

    #[test]
    fn unit_cli_parses_required_flags() {
        let cli = Cli::try_parse_from(base_args()).expect("parse cli");
        assert_eq!(cli.ticket, 7);
        assert_eq!(cli.repo, "owner/repo");
        assert_eq!(cli.org_id, "org-1");
        assert_eq!(cli.bot_id, "bot-1");
        assert_eq!(cli.github_api_base, "https://api.github.com");
        assert!(cli.gh_token.is_none());
    }

    #[test]
    fn unit_cli_rejects_zero_ticket_number() {
        let mut args = base_args();
        args[2] = "0";
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn unit_cli_requires_repo_flag() {
        let args = vec![
            "triage",
            "--ticket",
            "7",
            "--org-id",
            "org-1",
            "--bot-id",
            "bot-1",
            "--responder-base",
            "https://responder.example",
        ];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
