//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_CALCULATOR_URL: &str = "https://inkar-suki.codethink.cn/calculator";
pub const DEFAULT_EQUIP_URL: &str = "https://m.pvp.xoyo.com/mine/equip/get-role-equip";
pub const DEFAULT_VIEW_URL: &str = "https://www.jx3api.com";
pub const DEFAULT_GUIDE_URL: &str = "https://inkar-suki.codethink.cn/serendipity";
pub const DEFAULT_BOT_NAME: &str = "jx3calc";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Calculator endpoint the snapshot is posted to
    pub calculator_url: String,
    /// Secret sent in the `token` header of every submission
    pub calculator_token: String,

    /// Role-equip endpoint
    pub equip_url: String,
    /// Optional credential forwarded to the role-equip endpoint
    pub equip_ticket: Option<String>,

    /// Role summary endpoint
    pub role_url: String,

    /// Base URL of the view service rendering serendipity and dungeon images
    pub view_url: String,
    /// Optional view service token
    pub view_token: Option<String>,
    /// Optional game-account ticket for per-character views
    pub view_ticket: Option<String>,
    /// Name watermarked onto rendered images
    pub bot_name: String,
    /// Serendipity guide index
    pub guide_url: String,

    /// Per-request timeout for every outbound call
    pub http_timeout_secs: u64,

    /// JSON file of group id -> bound server name
    pub group_servers_path: Option<PathBuf>,

    /// Common enchant prefix used when no quality tier matches
    pub enchant_prefix: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Ok(Self {
            calculator_url: non_empty("JX3CALC_CALCULATOR_URL")
                .unwrap_or_else(|| DEFAULT_CALCULATOR_URL.to_string()),
            calculator_token: non_empty("JX3CALC_CALCULATOR_TOKEN")
                .context("JX3CALC_CALCULATOR_TOKEN environment variable is required")?,

            equip_url: non_empty("JX3CALC_EQUIP_URL")
                .unwrap_or_else(|| DEFAULT_EQUIP_URL.to_string()),
            equip_ticket: non_empty("JX3CALC_EQUIP_TICKET"),

            role_url: non_empty("JX3CALC_ROLE_URL")
                .context("JX3CALC_ROLE_URL environment variable is required")?,

            view_url: non_empty("JX3CALC_VIEW_URL").unwrap_or_else(|| DEFAULT_VIEW_URL.to_string()),
            view_token: non_empty("JX3CALC_VIEW_TOKEN"),
            view_ticket: non_empty("JX3CALC_VIEW_TICKET"),
            bot_name: non_empty("JX3CALC_BOT_NAME").unwrap_or_else(|| DEFAULT_BOT_NAME.to_string()),
            guide_url: non_empty("JX3CALC_GUIDE_URL")
                .unwrap_or_else(|| DEFAULT_GUIDE_URL.to_string()),

            http_timeout_secs: match non_empty("JX3CALC_HTTP_TIMEOUT_SECS") {
                Some(raw) => raw
                    .parse()
                    .context("JX3CALC_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
                None => DEFAULT_HTTP_TIMEOUT_SECS,
            },

            group_servers_path: non_empty("JX3CALC_GROUP_SERVERS").map(PathBuf::from),
            enchant_prefix: non_empty("JX3CALC_ENCHANT_PREFIX"),
        })
    }
}
