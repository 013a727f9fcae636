//! Client for the role summary endpoint.

use async_trait::async_trait;
use jx3calc_domain::RoleSummary;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::infrastructure::http_client;
use crate::infrastructure::ports::{FetchError, RoleDirectory};

const CODE_OK: i64 = 200;

#[derive(Debug, Deserialize)]
struct RoleResponse {
    code: i64,
    #[serde(default)]
    msg: String,
    #[serde(default)]
    data: Option<Map<String, Value>>,
}

/// Looks up a character's identity record by server and name.
#[derive(Clone)]
pub struct RoleApiClient {
    client: Client,
    url: String,
}

impl RoleApiClient {
    pub fn new(url: &str, timeout_secs: u64) -> Self {
        Self {
            client: http_client(timeout_secs),
            url: url.trim_end_matches('/').to_string(),
        }
    }
}

/// Non-200 codes and missing payloads both mean the role is unknown.
fn into_summary(response: RoleResponse) -> Option<RoleSummary> {
    if response.code != CODE_OK {
        tracing::debug!(code = response.code, msg = %response.msg, "Role lookup returned no role");
        return None;
    }
    response.data.map(RoleSummary::new)
}

#[async_trait]
impl RoleDirectory for RoleApiClient {
    async fn fetch_role_summary(
        &self,
        server: &str,
        name: &str,
    ) -> Result<Option<RoleSummary>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("server", server), ("name", name)])
            .send()
            .await
            .map_err(FetchError::request)?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body: RoleResponse = response.json().await.map_err(FetchError::invalid)?;
        Ok(into_summary(body))
    }
}
