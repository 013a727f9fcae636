//! Ports for the game-data services, the view renderer and the calculator.

use async_trait::async_trait;
use jx3calc_domain::{RoleSummary, SnapshotEnvelope};
use serde_json::Value;

use super::error::{FetchError, SubmitError};

// =============================================================================
// Game Data
// =============================================================================

/// Raw role-equip blob for one character.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EquipmentSource: Send + Sync {
    async fn fetch_raw_equipment(
        &self,
        zone: &str,
        server: &str,
        role_id: &str,
    ) -> Result<Value, FetchError>;
}

/// Role identity lookup. `Ok(None)` means the character does not exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleDirectory: Send + Sync {
    async fn fetch_role_summary(
        &self,
        server: &str,
        name: &str,
    ) -> Result<Option<RoleSummary>, FetchError>;
}

/// Kungfu id to display name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KungfuLookup: Send + Sync {
    async fn kungfu_name(&self, kungfu_id: &str) -> Option<String>;
}

/// A server name together with the zone it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedServer {
    pub server: String,
    pub zone: String,
}

/// Maps a server alias, or failing that the group's bound server, to a
/// canonical server.
pub trait ServerResolver: Send + Sync {
    fn resolve(&self, alias: Option<&str>, group: Option<&str>) -> Option<ResolvedServer>;
}

// =============================================================================
// Rendered Views
// =============================================================================

/// An event-data page the view service renders to an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRequest {
    /// Every serendipity one character has triggered.
    Serendipity { server: String, name: String },
    /// Recent triggers on one server, of one serendipity or of all of them.
    ServerSerendipities {
        server: String,
        serendipity: Option<String>,
    },
    /// Recent triggers of one serendipity across all servers.
    GlobalSerendipity { name: String },
    /// Per-server trigger counts of one serendipity.
    GlobalStatistics { name: String },
    /// A character's dungeon lockouts for the week.
    DungeonClears { server: String, name: String },
}

/// Renders a view and returns the URL of the resulting image.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViewRenderer: Send + Sync {
    async fn render(&self, view: &ViewRequest) -> Result<String, FetchError>;
}

/// Community wiki index of serendipity guides. `Ok(None)` means unlisted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuideIndex: Send + Sync {
    async fn guide_id(&self, serendipity: &str) -> Result<Option<String>, FetchError>;
}

// =============================================================================
// Calculator
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalculatorPort: Send + Sync {
    async fn submit(&self, snapshot: &SnapshotEnvelope) -> Result<Value, SubmitError>;
}
