//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Game-data fetches (role summary, role equipment, kungfu names)
//! - Server alias resolution
//! - Rendered event views and the serendipity guide index
//! - The calculator endpoint
//! - Clock (for testing)

mod error;
mod external;
mod testing;

pub use error::{FetchError, SubmitError};
pub use external::{
    CalculatorPort, EquipmentSource, GuideIndex, KungfuLookup, ResolvedServer, RoleDirectory,
    ServerResolver, ViewRenderer, ViewRequest,
};
pub use testing::ClockPort;

#[cfg(test)]
pub use external::{
    MockCalculatorPort, MockEquipmentSource, MockGuideIndex, MockKungfuLookup, MockRoleDirectory,
    MockViewRenderer,
};
