use crate::utils::error::{Result, ToolError};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};

pub const DEFAULT_API_URL: &str = "https://api.twitter.com/2/tweets";

/// Credentials and endpoint for the status-posting tool. Supplied through the
/// environment at startup, never hardcoded in source.
#[derive(Debug, Clone)]
pub struct StatusConfig {
    pub api_url: String,
    pub bearer_token: String,
}

impl StatusConfig {
    pub fn from_env() -> Result<Self> {
        let api_url =
            std::env::var("STATUS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let bearer_token =
            std::env::var("STATUS_BEARER_TOKEN").map_err(|_| ToolError::MissingConfigError {
                field: "STATUS_BEARER_TOKEN".to_string(),
            })?;

        Ok(Self {
            api_url,
            bearer_token,
        })
    }
}

impl Validate for StatusConfig {
    fn validate(&self) -> Result<()> {
        validate_url("STATUS_API_URL", &self.api_url)?;
        validate_non_empty_string("STATUS_BEARER_TOKEN", &self.bearer_token)?;
        Ok(())
    }
}
