//! Client for the DPS calculator endpoint.

use async_trait::async_trait;
use jx3calc_domain::SnapshotEnvelope;
use reqwest::Client;
use serde_json::Value;

use crate::infrastructure::http_client;
use crate::infrastructure::ports::{CalculatorPort, SubmitError};

/// Posts snapshots to the calculator with the `token` header.
#[derive(Clone)]
pub struct CalculatorClient {
    client: Client,
    url: String,
    token: String,
}

impl CalculatorClient {
    pub fn new(url: &str, token: &str, timeout_secs: u64) -> Self {
        Self {
            client: http_client(timeout_secs),
            url: url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }
}

/// The calculator answers with a JSON object; anything else is a failure.
fn parse_reply(body: &str) -> Result<Value, SubmitError> {
    let value: Value = serde_json::from_str(body).map_err(SubmitError::invalid)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(SubmitError::invalid(format!("expected a JSON object, got {body}")))
    }
}

#[async_trait]
impl CalculatorPort for CalculatorClient {
    async fn submit(&self, snapshot: &SnapshotEnvelope) -> Result<Value, SubmitError> {
        let response = self
            .client
            .post(&self.url)
            .header("token", &self.token)
            .json(snapshot)
            .send()
            .await
            .map_err(SubmitError::request)?;

        let status = response.status();
        let body = response.text().await.map_err(SubmitError::request)?;

        if !status.is_success() {
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        parse_reply(&body)
    }
}
