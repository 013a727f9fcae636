//! Event-data lookups answered with rendered images.

mod dungeon;
mod error;
mod serendipity;

use std::sync::Arc;

pub use dungeon::DungeonClears;
pub use error::LookupError;
pub use serendipity::{SerendipityLookup, GUIDE_ARTICLE_BASE};

use crate::infrastructure::ports::{ResolvedServer, ServerResolver, ViewRenderer, ViewRequest};

/// A character on an explicit server or on the group's bound server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterLookup {
    pub server: Option<String>,
    pub name: String,
    pub group: Option<String>,
}

/// Recent serendipity triggers on a server; all of them when `serendipity`
/// is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerLookup {
    pub server: Option<String>,
    pub serendipity: Option<String>,
    pub group: Option<String>,
}

/// Container for lookup use cases.
pub struct LookupUseCases {
    pub serendipity: Arc<SerendipityLookup>,
    pub dungeon: Arc<DungeonClears>,
}

impl LookupUseCases {
    pub fn new(serendipity: Arc<SerendipityLookup>, dungeon: Arc<DungeonClears>) -> Self {
        Self {
            serendipity,
            dungeon,
        }
    }
}

fn resolve_server(
    servers: &dyn ServerResolver,
    alias: Option<&str>,
    group: Option<&str>,
) -> Result<ResolvedServer, LookupError> {
    servers.resolve(alias, group).ok_or_else(|| {
        tracing::warn!(alias = ?alias, group = ?group, "Server could not be resolved");
        LookupError::ServerUnresolved {
            alias: alias.map(str::to_string),
        }
    })
}

async fn render(views: &dyn ViewRenderer, view: ViewRequest) -> Result<String, LookupError> {
    let url = views
        .render(&view)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, view = ?view, "View rendering failed"))?;
    tracing::info!(view = ?view, "View rendered");
    Ok(url)
}
