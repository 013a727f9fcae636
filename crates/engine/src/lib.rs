//! jx3calc engine library.
//!
//! Fetches a character's equipment from the game-data services, turns it
//! into the calculator's snapshot format and submits it. Also answers the
//! serendipity and dungeon triggers with rendered images.
//!
//! ## Structure
//!
//! - `use_cases/` - Snapshot assembly, submission, and rendered-view lookups
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - Chat command parsing and reply formatting
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures shared by the engine's unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::{App, Ports};
