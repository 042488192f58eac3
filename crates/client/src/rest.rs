use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use types::{SimulationRequest, SimulationResponse};

use crate::{ClientError, SimulationService};

/// Path of the simulation endpoint, relative to the service root.
pub const SIMULATE_PATH: &str = "/api/simulate";

/// REST client for the simulation service.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Client using the transport's default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize(base_url.into()),
        }
    }

    /// Client that gives up on a request after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: normalize(base_url.into()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the simulation endpoint.
    pub fn simulate_url(&self) -> String {
        format!("{}{}", self.base_url, SIMULATE_PATH)
    }

    async fn handle_response(resp: reqwest::Response) -> Result<SimulationResponse, ClientError> {
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl SimulationService for RestClient {
    async fn simulate(
        &self,
        request: SimulationRequest,
    ) -> Result<SimulationResponse, ClientError> {
        let url = self.simulate_url();
        debug!(
            %url,
            cycles = request.cycles,
            initial_price = request.initial_price,
            "posting simulation request"
        );

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        Self::handle_response(resp).await
    }
}

fn normalize(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}
