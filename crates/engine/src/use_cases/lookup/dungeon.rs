//! Weekly dungeon lockouts (副本) of one character.

use std::sync::Arc;

use tracing::Instrument;

use super::{render, resolve_server, CharacterLookup, LookupError};
use crate::infrastructure::correlation::CorrelationId;
use crate::infrastructure::ports::{ServerResolver, ViewRenderer, ViewRequest};

/// Resolve -> render the lockout view.
pub struct DungeonClears {
    servers: Arc<dyn ServerResolver>,
    views: Arc<dyn ViewRenderer>,
}

impl DungeonClears {
    pub fn new(servers: Arc<dyn ServerResolver>, views: Arc<dyn ViewRenderer>) -> Self {
        Self { servers, views }
    }

    pub async fn execute(&self, request: CharacterLookup) -> Result<String, LookupError> {
        let span = CorrelationId::new().span("dungeon_clears");
        async move {
            let server = resolve_server(
                self.servers.as_ref(),
                request.server.as_deref(),
                request.group.as_deref(),
            )?;
            let view = ViewRequest::DungeonClears {
                server: server.server,
                name: request.name,
            };
            render(self.views.as_ref(), view).await
        }
        .instrument(span)
        .await
    }
}
