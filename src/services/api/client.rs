use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;

use super::{decode_output_response, decode_submit_response, ApiError, ConsoleApi};
use crate::config::ClientConfig;
use crate::console::snapshot::{CommandRequest, OutputSnapshot};

/// Native HTTP transport for the console endpoints.
#[derive(Clone)]
pub struct HttpConsoleApi {
    client: Client,
    output_url: String,
    input_url: String,
}

impl HttpConsoleApi {
    /// No client-side timeout: a request runs until the transport gives up.
    pub fn new(base_url: &str, config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("building HTTP client")?;
        let base = base_url.trim_end_matches('/');
        Ok(Self {
            client,
            output_url: format!("{}{}", base, config.output_path),
            input_url: format!("{}{}", base, config.input_path),
        })
    }
}

#[async_trait(?Send)]
impl ConsoleApi for HttpConsoleApi {
    async fn fetch_output(&self) -> Result<OutputSnapshot, ApiError> {
        let response = self
            .client
            .get(&self.output_url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(ApiError::network)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(ApiError::network)?;
        decode_output_response(status, &body)
    }

    async fn submit_command(&self, request: &CommandRequest) -> Result<(), ApiError> {
        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&self.input_url)
            .json(request)
            .send()
            .await
            .map_err(ApiError::network)?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        decode_submit_response(status, &body)
    }
}
