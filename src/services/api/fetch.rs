use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::RequestCache;

use super::{decode_output_response, decode_submit_response, ApiError, ConsoleApi};
use crate::config::ClientConfig;
use crate::console::snapshot::{CommandRequest, OutputSnapshot};

/// Browser transport over `fetch`, relative to the page origin.
pub struct FetchConsoleApi {
    output_path: String,
    input_path: String,
}

impl FetchConsoleApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            output_path: config.output_path.clone(),
            input_path: config.input_path.clone(),
        }
    }
}

#[async_trait(?Send)]
impl ConsoleApi for FetchConsoleApi {
    async fn fetch_output(&self) -> Result<OutputSnapshot, ApiError> {
        let response = Request::get(&self.output_path)
            .cache(RequestCache::NoStore)
            .send()
            .await
            .map_err(ApiError::network)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::network)?;
        decode_output_response(status, &body)
    }

    async fn submit_command(&self, request: &CommandRequest) -> Result<(), ApiError> {
        let response = Request::post(&self.input_path)
            .json(request)
            .map_err(ApiError::decode)?
            .send()
            .await
            .map_err(ApiError::network)?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        decode_submit_response(status, &body)
    }
}
