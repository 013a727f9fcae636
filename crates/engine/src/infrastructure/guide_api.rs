//! Client for the serendipity guide index.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::infrastructure::http_client;
use crate::infrastructure::ports::{FetchError, GuideIndex};

#[derive(Debug, Deserialize)]
struct GuideEntry {
    name: String,
    id: Value,
}

/// Wiki id of `serendipity`. On duplicate names the last entry wins.
fn find_guide(entries: &[GuideEntry], serendipity: &str) -> Option<String> {
    let entry = entries.iter().rfind(|entry| entry.name == serendipity)?;
    match &entry.id {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// Fetches the full guide list and searches it by serendipity name.
#[derive(Clone)]
pub struct GuideApiClient {
    client: Client,
    url: String,
}

impl GuideApiClient {
    pub fn new(url: &str, timeout_secs: u64) -> Self {
        Self {
            client: http_client(timeout_secs),
            url: url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl GuideIndex for GuideApiClient {
    async fn guide_id(&self, serendipity: &str) -> Result<Option<String>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::request)?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let entries: Vec<GuideEntry> = response.json().await.map_err(FetchError::invalid)?;
        Ok(find_guide(&entries, serendipity))
    }
}
