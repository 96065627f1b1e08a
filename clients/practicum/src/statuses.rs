use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::PracticumClientConfig;
use crate::error::PracticumError;

/// Client for the Practicum homework statuses API.
pub struct PracticumClient {
    client: reqwest::Client,
    config: PracticumClientConfig,
}

impl PracticumClient {
    pub fn new(client: reqwest::Client, config: PracticumClientConfig) -> Self {
        Self { client, config }
    }

    pub fn endpoint(&self) -> &str {
        self.config.endpoint.as_str()
    }

    /// Requests the homework statuses changed since `from_date` (Unix seconds).
    ///
    /// The decoded body is returned as is; its shape is checked by the caller.
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value, PracticumError> {
        tracing::debug!(endpoint = %self.config.endpoint, from_date, "requesting homework statuses");
        let resp = self
            .client
            .get(self.config.endpoint.clone())
            .header(AUTHORIZATION, format!("OAuth {}", self.config.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(PracticumError::Request)?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(PracticumError::StatusNotOk {
                endpoint: self.config.endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(PracticumError::Request)?;
        serde_json::from_str(&body).map_err(PracticumError::Json)
    }
}
