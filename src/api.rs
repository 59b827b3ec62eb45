use crate::config::Config;
use crate::records::RecordInfo;
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from the admin API.
///
/// Transport problems and undecodable payloads surface as [`ApiError::Transport`];
/// non-2xx responses keep their status and body text so the operator sees what
/// the server said.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to reach admin API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Admin API error ({status}): {body}")]
    Status { status: StatusCode, body: String },
}

#[derive(Debug, Serialize)]
struct DeleteRecordRequest<'a> {
    path: &'a str,
    alt: &'a str,
    delete_master: &'a str,
}

/// Client for the content store's admin HTTP API.
#[derive(Debug, Clone)]
pub struct AdminClient {
    client: reqwest::Client,
    base_url: String,
}

impl AdminClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.server_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch deletion metadata for a record.
    pub async fn get_record_info(&self, path: &str) -> Result<RecordInfo, ApiError> {
        let url = format!("{}/recordinfo", self.base_url);
        debug!("Fetching record info for {}", path);

        let response = self
            .client
            .get(&url)
            .query(&[("path", path)])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let info: RecordInfo = response.json().await?;
        Ok(info)
    }

    /// Delete a record (or a single alternative of it).
    ///
    /// The wire contract encodes the master-record choice as the strings
    /// `"1"` and `"0"`. The response body is not consumed.
    pub async fn delete_record(
        &self,
        path: &str,
        alt: &str,
        delete_master: bool,
    ) -> Result<(), ApiError> {
        let url = format!("{}/deleterecord", self.base_url);
        let request = DeleteRecordRequest {
            path,
            alt,
            delete_master: if delete_master { "1" } else { "0" },
        };

        let response = self.client.post(&url).json(&request).send().await?;
        Self::check_status(response).await?;

        info!(
            "Deleted record {} (alt: {}, master: {})",
            path, alt, delete_master
        );
        Ok(())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}
