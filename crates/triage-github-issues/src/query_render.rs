use chrono::{DateTime, SecondsFormat, Utc};

use crate::github_types::{GithubComment, GithubIssue, GithubLabel};
use crate::responder_types::{ResponderLabel, ResponderQuery};

const CUSTOM_ID_PREFIX: &str = "g_issue_";
const COMMENT_SEPARATOR: &str = "---------";

/// Stable identifier for one issue: prefix plus the issue number zero-padded
/// to five digits. Wider numbers render unpadded, never truncated, so the
/// identifier stays a pure function of the number.
pub fn custom_id(issue_number: u64) -> String {
    format!("{CUSTOM_ID_PREFIX}{issue_number:05}")
}

/// Renders the full responder query: one canonical text block plus the
/// repository label catalog. Deterministic and side-effect free; the only
/// normalization applied is the final leading/trailing trim.
pub fn render_responder_query(
    issue: &GithubIssue,
    comments: &[GithubComment],
    catalog: &[GithubLabel],
) -> ResponderQuery {
    let label_names = issue
        .labels
        .iter()
        .map(|label| label.name.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let rendered_comments = comments
        .iter()
        .map(render_comment)
        .collect::<Vec<_>>()
        .join(COMMENT_SEPARATOR);
    let comments_section = if rendered_comments.is_empty() {
        String::new()
    } else {
        format!("Comments: {rendered_comments}")
    };

    let query_details = format!(
        "\nIssue number:{} ({})\nTitle: {}\nLabels: {}\nDescription: {}\n{}\n",
        issue.number,
        issue.state,
        issue.title,
        label_names,
        issue.body.as_deref().unwrap_or_default(),
        comments_section
    )
    .trim()
    .to_string();

    ResponderQuery {
        custom_id: custom_id(issue.number),
        query_details,
        labels: catalog
            .iter()
            .map(|label| ResponderLabel {
                id: label.id,
                text: label.name.clone(),
                description: label.description.clone(),
            })
            .collect(),
    }
}

fn render_comment(comment: &GithubComment) -> String {
    format!(
        "* {} commented on {}:\n{}",
        comment.user.login,
        canonical_timestamp(&comment.created_at),
        comment.body.as_deref().unwrap_or_default()
    )
}

/// UTC ISO-8601 with millisecond precision. Unparseable input passes through
/// unchanged rather than failing the render.
fn canonical_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{custom_id, render_responder_query, COMMENT_SEPARATOR};
    use crate::github_types::{
        GithubComment, GithubIssue, GithubIssueLabel, GithubLabel, GithubUser,
    };
    use crate::responder_types::ResponderLabel;

    fn sample_issue(number: u64, state: &str, labels: &[&str]) -> GithubIssue {
        GithubIssue {
            number,
            state: state.to_string(),
            title: "Crash on startup".to_string(),
            body: Some("The binary aborts immediately.".to_string()),
            labels: labels
                .iter()
                .map(|name| GithubIssueLabel {
                    name: name.to_string(),
                })
                .collect(),
            comments: 0,
            comments_url: "https://api.github.com/repos/owner/repo/issues/7/comments".to_string(),
        }
    }

    fn sample_comment(login: &str, created_at: &str, body: &str) -> GithubComment {
        GithubComment {
            user: GithubUser {
                login: login.to_string(),
            },
            created_at: created_at.to_string(),
            body: Some(body.to_string()),
        }
    }

    #[test]
    fn unit_custom_id_pads_to_five_digits() {
        assert_eq!(custom_id(42), "g_issue_00042");
        assert_eq!(custom_id(7), "g_issue_00007");
    }

    #[test]
    fn unit_custom_id_leaves_wide_numbers_unpadded() {
        assert_eq!(custom_id(123456), "g_issue_123456");
    }

    #[test]
    fn unit_query_omits_comments_section_when_issue_has_none() {
        let query = render_responder_query(&sample_issue(7, "open", &["bug"]), &[], &[]);
        assert!(!query.query_details.contains("Comments:"));
        assert!(query.query_details.ends_with("Description: The binary aborts immediately."));
    }

    #[test]
    fn unit_query_text_follows_fixed_template_and_is_trimmed() {
        let query = render_responder_query(&sample_issue(7, "open", &["bug", "help wanted"]), &[], &[]);
        assert_eq!(
            query.query_details,
            "Issue number:7 (open)\nTitle: Crash on startup\nLabels: bug,help wanted\nDescription: The binary aborts immediately."
        );
        assert_eq!(query.custom_id, "g_issue_00007");
    }

    #[test]
    fn functional_query_renders_comment_blocks_in_fetch_order() {
        let comments = vec![
            sample_comment("alice", "2024-01-02T03:04:05Z", "first report"),
            sample_comment("bob", "2024-01-03T00:00:00Z", "second report"),
        ];
        let query = render_responder_query(&sample_issue(7, "open", &[]), &comments, &[]);
        let first = query
            .query_details
            .find("* alice commented on 2024-01-02T03:04:05.000Z:\nfirst report")
            .expect("first comment block");
        let second = query
            .query_details
            .find("* bob commented on 2024-01-03T00:00:00.000Z:\nsecond report")
            .expect("second comment block");
        assert!(first < second);
        assert_eq!(
            query.query_details.matches(COMMENT_SEPARATOR).count(),
            1,
            "two comments are joined by exactly one separator"
        );
        assert!(query.query_details.contains("Comments: * alice"));
    }

    #[test]
    fn unit_query_maps_full_catalog_to_responder_labels() {
        let catalog = vec![
            GithubLabel {
                id: 1,
                name: "bug".to_string(),
                description: Some("Something is broken".to_string()),
            },
            GithubLabel {
                id: 2,
                name: "docs".to_string(),
                description: None,
            },
        ];
        let query = render_responder_query(&sample_issue(7, "open", &["bug"]), &[], &catalog);
        assert_eq!(
            query.labels,
            vec![
                ResponderLabel {
                    id: 1,
                    text: "bug".to_string(),
                    description: Some("Something is broken".to_string()),
                },
                ResponderLabel {
                    id: 2,
                    text: "docs".to_string(),
                    description: None,
                },
            ]
        );
    }

    #[test]
    fn regression_unparseable_timestamp_passes_through_unchanged() {
        let comments = vec![sample_comment("alice", "not-a-timestamp", "report")];
        let query = render_responder_query(&sample_issue(7, "open", &[]), &comments, &[]);
        assert!(query
            .query_details
            .contains("* alice commented on not-a-timestamp:\nreport"));
    }

    #[test]
    fn unit_query_serializes_with_camel_case_wire_names() {
        let query = render_responder_query(&sample_issue(7, "open", &[]), &[], &[]);
        let value = serde_json::to_value(&query).expect("serialize query");
        assert_eq!(value["customId"], "g_issue_00007");
        assert!(value["queryDetails"].is_string());
        assert!(value["labels"].is_array());
    }
}
