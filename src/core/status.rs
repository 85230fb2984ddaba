use crate::config::status::StatusConfig;
use crate::utils::error::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Thin client over the status-update endpoint. One call, no retries.
pub struct StatusClient {
    client: Client,
    config: StatusConfig,
}

#[derive(Debug, Serialize)]
struct StatusRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct PostedStatus {
    pub data: StatusData,
}

#[derive(Debug, Deserialize)]
pub struct StatusData {
    pub id: String,
    pub text: String,
}

impl StatusClient {
    pub fn new(config: StatusConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn post_status(&self, text: &str) -> Result<PostedStatus> {
        tracing::debug!("Posting status update to: {}", self.config.api_url);

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.bearer_token)
            .json(&StatusRequest { text })
            .send()
            .await?
            .error_for_status()?;

        let posted: PostedStatus = response.json().await?;
        tracing::debug!("Status created with id {}", posted.data.id);
        Ok(posted)
    }
}
