use anyhow::{Context, Result};

use triage_github_issues::responder_types::{BotResponse, ResponderQuery};

use crate::api_client::decode_json_response;

/// Gateway to the responder service. Runs on its own bare client: the
/// GitHub credential is scoped to GitHub calls and never attached here.
#[derive(Clone)]
pub struct ResponderGateway {
    http: reqwest::Client,
    base_url: String,
    org_id: String,
    bot_id: String,
}

impl ResponderGateway {
    pub fn new(base_url: &str, org_id: &str, bot_id: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("failed to create responder client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            org_id: org_id.to_string(),
            bot_id: bot_id.to_string(),
        })
    }

    /// Single POST, verdict parsed verbatim. No schema validation happens
    /// here; the reconciler checks each field defensively.
    pub async fn request_verdict(&self, query: &ResponderQuery) -> Result<BotResponse> {
        let url = format!(
            "{}/bot/{}/{}/responder/github",
            self.base_url, self.org_id, self.bot_id
        );
        tracing::debug!(%url, custom_id = %query.custom_id, "responder request");
        let response = self
            .http
            .post(&url)
            .json(query)
            .send()
            .await
            .with_context(|| format!("failed to reach {url}"))?;
        decode_json_response(&url, response).await
    }
}
