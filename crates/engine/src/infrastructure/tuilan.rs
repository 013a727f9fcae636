//! Client for the role-equip endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::infrastructure::http_client;
use crate::infrastructure::ports::{EquipmentSource, FetchError};

#[derive(Debug, Serialize)]
struct RoleEquipQuery<'a> {
    zone: &'a str,
    server: &'a str,
    game_role_id: &'a str,
}

/// Fetches the raw role-equip blob.
#[derive(Clone)]
pub struct TuilanClient {
    client: Client,
    url: String,
    ticket: Option<String>,
}

impl TuilanClient {
    pub fn new(url: &str, ticket: Option<String>, timeout_secs: u64) -> Self {
        Self {
            client: http_client(timeout_secs),
            url: url.trim_end_matches('/').to_string(),
            ticket,
        }
    }
}

#[async_trait]
impl EquipmentSource for TuilanClient {
    async fn fetch_raw_equipment(
        &self,
        zone: &str,
        server: &str,
        role_id: &str,
    ) -> Result<Value, FetchError> {
        let query = RoleEquipQuery {
            zone,
            server,
            game_role_id: role_id,
        };

        let mut request = self.client.post(&self.url).json(&query);
        if let Some(ticket) = &self.ticket {
            request = request.header("token", ticket);
        }

        let response = request.send().await.map_err(FetchError::request)?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body: Value = response.json().await.map_err(FetchError::invalid)?;
        if body.get("data").map_or(true, Value::is_null) {
            return Err(FetchError::invalid("role-equip response has no data"));
        }

        tracing::debug!(server, role_id, "Fetched role equipment");
        Ok(body)
    }
}
