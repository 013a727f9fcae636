//! Serendipity (奇遇) records, server and global trigger views, and guides.

use std::sync::Arc;

use tracing::Instrument;

use super::{render, resolve_server, CharacterLookup, LookupError, ServerLookup};
use crate::infrastructure::correlation::CorrelationId;
use crate::infrastructure::ports::{GuideIndex, ServerResolver, ViewRenderer, ViewRequest};

/// Article prefix of serendipity guides on the community wiki.
pub const GUIDE_ARTICLE_BASE: &str = "https://jx3box.com/adventure/";

pub struct SerendipityLookup {
    servers: Arc<dyn ServerResolver>,
    views: Arc<dyn ViewRenderer>,
    guides: Arc<dyn GuideIndex>,
}

impl SerendipityLookup {
    pub fn new(
        servers: Arc<dyn ServerResolver>,
        views: Arc<dyn ViewRenderer>,
        guides: Arc<dyn GuideIndex>,
    ) -> Self {
        Self {
            servers,
            views,
            guides,
        }
    }

    /// Image of every serendipity `request.name` has triggered.
    pub async fn character(&self, request: CharacterLookup) -> Result<String, LookupError> {
        let span = CorrelationId::new().span("serendipity");
        async move {
            let server = resolve_server(
                self.servers.as_ref(),
                request.server.as_deref(),
                request.group.as_deref(),
            )?;
            let view = ViewRequest::Serendipity {
                server: server.server,
                name: request.name,
            };
            render(self.views.as_ref(), view).await
        }
        .instrument(span)
        .await
    }

    /// Image of recent triggers on one server.
    pub async fn server(&self, request: ServerLookup) -> Result<String, LookupError> {
        let span = CorrelationId::new().span("server_serendipity");
        async move {
            let server = resolve_server(
                self.servers.as_ref(),
                request.server.as_deref(),
                request.group.as_deref(),
            )?;
            let view = ViewRequest::ServerSerendipities {
                server: server.server,
                serendipity: request.serendipity,
            };
            render(self.views.as_ref(), view).await
        }
        .instrument(span)
        .await
    }

    /// Image of recent triggers of `serendipity` across all servers.
    pub async fn global(&self, serendipity: &str) -> Result<String, LookupError> {
        let view = ViewRequest::GlobalSerendipity {
            name: serendipity.to_string(),
        };
        render(self.views.as_ref(), view)
            .instrument(CorrelationId::new().span("global_serendipity"))
            .await
    }

    /// Image of per-server trigger counts of `serendipity`.
    pub async fn global_statistics(&self, serendipity: &str) -> Result<String, LookupError> {
        let view = ViewRequest::GlobalStatistics {
            name: serendipity.to_string(),
        };
        render(self.views.as_ref(), view)
            .instrument(CorrelationId::new().span("global_statistics"))
            .await
    }

    /// Wiki article URL of the guide for `serendipity`.
    pub async fn guide(&self, serendipity: &str) -> Result<String, LookupError> {
        let id = self
            .guides
            .guide_id(serendipity)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Guide index fetch failed"))?;

        let Some(id) = id else {
            tracing::warn!(serendipity, "Serendipity has no guide");
            return Err(LookupError::GuideNotFound(serendipity.to_string()));
        };
        Ok(format!("{GUIDE_ARTICLE_BASE}{id}"))
    }
}
