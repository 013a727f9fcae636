//! Client for the view service that renders event-data pages to images.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::infrastructure::http_client;
use crate::infrastructure::ports::{FetchError, ViewRenderer, ViewRequest};

const CODE_OK: i64 = 200;

#[derive(Debug, Deserialize)]
struct ViewResponse {
    code: i64,
    #[serde(default)]
    msg: String,
    #[serde(default)]
    data: Option<ViewData>,
}

#[derive(Debug, Deserialize)]
struct ViewData {
    #[serde(default)]
    url: String,
}

/// Identity sent with every view request.
#[derive(Debug, Clone, Default)]
pub struct ViewCredentials {
    pub token: Option<String>,
    /// Game-account ticket, only sent for per-character views.
    pub ticket: Option<String>,
    /// Bot name printed as the watermark on rendered images.
    pub nickname: String,
}

/// Path and view-specific query of one request.
#[derive(Debug, PartialEq, Eq)]
struct Endpoint {
    path: &'static str,
    params: Vec<(&'static str, String)>,
    ticket: bool,
}

fn endpoint(view: &ViewRequest) -> Endpoint {
    match view {
        ViewRequest::Serendipity { server, name } => Endpoint {
            path: "view/luck/adventure",
            params: vec![("server", server.clone()), ("name", name.clone())],
            ticket: true,
        },
        ViewRequest::ServerSerendipities {
            server,
            serendipity: None,
        } => Endpoint {
            path: "view/luck/collect",
            params: vec![("server", server.clone())],
            ticket: false,
        },
        ViewRequest::ServerSerendipities {
            server,
            serendipity: Some(name),
        } => Endpoint {
            path: "view/luck/statistical",
            params: vec![("server", server.clone()), ("name", name.clone())],
            ticket: true,
        },
        ViewRequest::GlobalSerendipity { name } => Endpoint {
            path: "view/luck/server/adventure",
            params: vec![("name", name.clone())],
            ticket: false,
        },
        ViewRequest::GlobalStatistics { name } => Endpoint {
            path: "view/luck/server/statistical",
            params: vec![("name", name.clone())],
            ticket: false,
        },
        ViewRequest::DungeonClears { server, name } => Endpoint {
            path: "view/role/teamCdList",
            params: vec![("server", server.clone()), ("name", name.clone())],
            ticket: true,
        },
    }
}

fn into_url(response: ViewResponse) -> Result<String, FetchError> {
    if response.code != CODE_OK {
        return Err(FetchError::invalid(format!(
            "view service answered {}: {}",
            response.code, response.msg
        )));
    }
    response
        .data
        .map(|data| data.url)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| FetchError::invalid("view response has no data.url"))
}

/// Renders serendipity and dungeon views.
#[derive(Clone)]
pub struct ViewApiClient {
    client: Client,
    url: String,
    credentials: ViewCredentials,
}

impl ViewApiClient {
    pub fn new(url: &str, credentials: ViewCredentials, timeout_secs: u64) -> Self {
        Self {
            client: http_client(timeout_secs),
            url: url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    fn query(&self, endpoint: &Endpoint) -> Vec<(&'static str, String)> {
        let mut query = endpoint.params.clone();
        if let Some(token) = &self.credentials.token {
            query.push(("token", token.clone()));
        }
        query.push(("nickname", self.credentials.nickname.clone()));
        if endpoint.ticket {
            if let Some(ticket) = &self.credentials.ticket {
                query.push(("ticket", ticket.clone()));
            }
        }
        query.push(("chrome", "1".to_string()));
        query
    }
}

#[async_trait]
impl ViewRenderer for ViewApiClient {
    async fn render(&self, view: &ViewRequest) -> Result<String, FetchError> {
        let endpoint = endpoint(view);
        tracing::debug!(path = endpoint.path, "Rendering view");

        let response = self
            .client
            .get(format!("{}/{}", self.url, endpoint.path))
            .query(&self.query(&endpoint))
            .send()
            .await
            .map_err(FetchError::request)?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body: ViewResponse = response.json().await.map_err(FetchError::invalid)?;
        into_url(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn parse(value: Value) -> ViewResponse {
        serde_json::from_value(value).unwrap()
    }

    fn client(ticket: Option<&str>) -> ViewApiClient {
        ViewApiClient::new(
            "https://view.example/",
            ViewCredentials {
                token: Some("tk".into()),
                ticket: ticket.map(str::to_string),
                nickname: "jx3calc".into(),
            },
            5,
        )
    }

    #[test]
    fn test_server_view_depends_on_serendipity() {
        let overview = endpoint(&ViewRequest::ServerSerendipities {
            server: "梦江南".into(),
            serendipity: None,
        });
        assert_eq!(overview.path, "view/luck/collect");
        assert!(!overview.ticket);

        let single = endpoint(&ViewRequest::ServerSerendipities {
            server: "梦江南".into(),
            serendipity: Some("阴阳两界".into()),
        });
        assert_eq!(single.path, "view/luck/statistical");
        assert_eq!(single.params[1], ("name", "阴阳两界".to_string()));
    }

    #[test]
    fn ticket_only_goes_to_character_views() {
        let client = client(Some("acct"));
        let character = client.query(&endpoint(&ViewRequest::DungeonClears {
            server: "梦江南".into(),
            name: "秦墨".into(),
        }));
        assert!(character.contains(&("ticket", "acct".to_string())));
        assert!(character.contains(&("nickname", "jx3calc".to_string())));
        assert_eq!(character.last(), Some(&("chrome", "1".to_string())));

        let global = client.query(&endpoint(&ViewRequest::GlobalStatistics {
            name: "阴阳两界".into(),
        }));
        assert!(global.iter().all(|(key, _)| *key != "ticket"));
        assert!(global.contains(&("token", "tk".to_string())));
    }

    #[test]
    fn missing_ticket_is_skipped() {
        let query = client(None).query(&endpoint(&ViewRequest::Serendipity {
            server: "梦江南".into(),
            name: "秦墨".into(),
        }));
        assert!(query.iter().all(|(key, _)| *key != "ticket"));
    }

    #[test]
    fn success_yields_image_url() {
        let url = into_url(parse(json!({
            "code": 200,
            "msg": "success",
            "data": {"url": "https://cdn.example/luck/1.png"}
        })))
        .unwrap();
        assert_eq!(url, "https://cdn.example/luck/1.png");
    }

    #[test]
    fn error_codes_and_empty_payloads_fail() {
        let err = into_url(parse(json!({"code": 400, "msg": "角色不存在", "data": {}}))).unwrap_err();
        assert!(err.to_string().contains("角色不存在"));
        assert!(into_url(parse(json!({"code": 200, "data": null}))).is_err());
        assert!(into_url(parse(json!({"code": 200, "data": {"url": ""}}))).is_err());
    }
}
