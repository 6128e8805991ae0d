use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use triage_github_issues::github_types::{GithubComment, GithubIssue, GithubLabel};
use triage_github_issues::issue_reconcile::IssuePatch;

/// Non-success HTTP status from any outbound call. Carries the URL and the
/// status line so the operator log points at the failing request. No retry
/// is attempted anywhere: this is a one-shot CLI and the invoker owns retry
/// policy.
#[derive(Debug, Error)]
#[error("api call failed: url={url} status={status}")]
pub struct TransportError {
    pub url: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    owner: String,
    name: String,
}

impl RepoRef {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let Some((owner, name)) = trimmed.split_once('/') else {
            bail!("invalid --repo '{raw}', expected owner/name");
        };
        let owner = owner.trim();
        let name = name.trim();
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            bail!("invalid --repo '{raw}', expected owner/name");
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn as_slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// JSON-over-HTTP client for the GitHub REST API. The bearer credential is
/// attached only when a token is configured; timeouts are left to the
/// transport defaults.
#[derive(Clone)]
pub struct GithubApiClient {
    http: reqwest::Client,
    api_base: String,
}

impl GithubApiClient {
    pub fn new(api_base: &str, token: Option<&str>) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("triage-issue-bridge"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            reqwest::header::HeaderValue::from_static("2022-11-28"),
        );
        if let Some(token) = token {
            let auth_header = format!("Bearer {}", token.trim());
            headers.insert(
                reqwest::header::AUTHORIZATION,
                reqwest::header::HeaderValue::from_str(&auth_header)
                    .context("invalid github authorization header")?,
            );
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to create github api client")?;
        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub async fn fetch_issue(&self, repo: &RepoRef, issue_number: u64) -> Result<GithubIssue> {
        let url = format!(
            "{}/repos/{}/issues/{}",
            self.api_base,
            repo.as_slug(),
            issue_number
        );
        self.get_json(&url).await
    }

    /// Comments come from the absolute URL the issue itself reports.
    pub async fn fetch_comments(&self, comments_url: &str) -> Result<Vec<GithubComment>> {
        self.get_json(comments_url).await
    }

    pub async fn fetch_repo_labels(&self, repo: &RepoRef) -> Result<Vec<GithubLabel>> {
        let url = format!("{}/repos/{}/labels", self.api_base, repo.as_slug());
        self.get_json(&url).await
    }

    pub async fn create_issue_comment(
        &self,
        repo: &RepoRef,
        issue_number: u64,
        body: &str,
    ) -> Result<serde_json::Value> {
        let url = format!(
            "{}/repos/{}/issues/{}/comments",
            self.api_base,
            repo.as_slug(),
            issue_number
        );
        self.post_json(&url, &json!({ "body": body })).await
    }

    pub async fn update_issue(
        &self,
        repo: &RepoRef,
        issue_number: u64,
        patch: &IssuePatch,
    ) -> Result<serde_json::Value> {
        let url = format!(
            "{}/repos/{}/issues/{}",
            self.api_base,
            repo.as_slug(),
            issue_number
        );
        self.patch_json(&url, patch).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(%url, "github api request");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("failed to reach {url}"))?;
        decode_json_response(url, response).await
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!(%url, "github api request");
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("failed to reach {url}"))?;
        decode_json_response(url, response).await
    }

    pub async fn patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!(%url, "github api request");
        let response = self
            .http
            .patch(url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("failed to reach {url}"))?;
        decode_json_response(url, response).await
    }
}

pub(crate) async fn decode_json_response<T: DeserializeOwned>(
    url: &str,
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(TransportError {
            url: url.to_string(),
            status: status.to_string(),
        }
        .into());
    }
    response
        .json::<T>()
        .await
        .with_context(|| format!("failed to decode response body from {url}"))
}
