//! API layer - chat trigger entry point.

pub mod command;

pub use command::{
    format_guide, format_lookup_reply, format_reply, parse_command, parse_trigger, usage_reply,
    Command, CommandError, Reply, LOOKUP_USAGE, MISSING_SERENDIPITY, USAGE,
};
