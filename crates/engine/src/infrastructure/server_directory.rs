//! Server names, zones, aliases and per-group server bindings.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::infrastructure::ports::{ResolvedServer, ServerResolver};

const ZONE_TELECOM: &str = "电信区";
const ZONE_DUAL_LINE: &str = "双线区";
const ZONE_BOUNDLESS: &str = "无界区";

/// Canonical server, its zone, and the nicknames players type for it.
const SERVERS: &[(&str, &str, &[&str])] = &[
    ("梦江南", ZONE_TELECOM, &["双梦", "如梦令", "枫泾古镇"]),
    ("唯我独尊", ZONE_TELECOM, &["唯满侠", "鹊桥仙"]),
    ("乾坤一掷", ZONE_TELECOM, &["华乾", "乾坤"]),
    ("幽月轮", ZONE_TELECOM, &["幽月", "六合一"]),
    ("剑胆琴心", ZONE_TELECOM, &["剑胆", "煎蛋"]),
    ("斗转星移", ZONE_TELECOM, &["姨妈", "斗转"]),
    ("绝代天骄", ZONE_TELECOM, &["绝代"]),
    ("长安城", ZONE_TELECOM, &["长安"]),
    ("龙争虎斗", ZONE_TELECOM, &["龙虎"]),
    ("蝶恋花", ZONE_TELECOM, &["蝶服"]),
    ("青梅煮酒", ZONE_TELECOM, &["青梅"]),
    ("破阵子", ZONE_DUAL_LINE, &["念破"]),
    ("天鹅坪", ZONE_DUAL_LINE, &["纵月"]),
    ("飞龙在天", ZONE_DUAL_LINE, &["飞龙"]),
    ("眉间雪", ZONE_BOUNDLESS, &[]),
    ("山海相逢", ZONE_BOUNDLESS, &["山海"]),
    ("有人赴约", ZONE_BOUNDLESS, &["有人"]),
];

/// Static server table plus the servers chat groups have bound.
pub struct ServerDirectory {
    zones: HashMap<String, String>,
    aliases: HashMap<String, String>,
    groups: HashMap<String, String>,
}

impl ServerDirectory {
    pub fn new(groups: HashMap<String, String>) -> Self {
        let mut zones = HashMap::new();
        let mut aliases = HashMap::new();
        for (server, zone, nicknames) in SERVERS {
            zones.insert(server.to_string(), zone.to_string());
            aliases.insert(server.to_string(), server.to_string());
            for nickname in *nicknames {
                aliases.insert(nickname.to_string(), server.to_string());
            }
        }
        Self {
            zones,
            aliases,
            groups,
        }
    }

    /// Loads group bindings from a JSON object of group id -> server.
    pub fn from_group_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading group servers from {}", path.display()))?;
        let groups: HashMap<String, String> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing group servers in {}", path.display()))?;
        tracing::info!(groups = groups.len(), path = %path.display(), "Loaded group server bindings");
        Ok(Self::new(groups))
    }

    fn lookup(&self, name: &str) -> Option<ResolvedServer> {
        let server = self.aliases.get(name.trim())?;
        let zone = self.zones.get(server)?;
        Some(ResolvedServer {
            server: server.clone(),
            zone: zone.clone(),
        })
    }
}

impl Default for ServerDirectory {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

impl ServerResolver for ServerDirectory {
    fn resolve(&self, alias: Option<&str>, group: Option<&str>) -> Option<ResolvedServer> {
        match alias.map(str::trim).filter(|a| !a.is_empty()) {
            Some(alias) => self.lookup(alias),
            None => {
                let bound = self.groups.get(group?)?;
                self.lookup(bound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn directory() -> ServerDirectory {
        ServerDirectory::new(HashMap::from([
            ("114514".to_string(), "双梦".to_string()),
            ("42".to_string(), "不存在".to_string()),
        ]))
    }

    #[test]
    fn resolves_canonical_and_alias() {
        let dir = directory();
        let expected = Some(ResolvedServer {
            server: "梦江南".into(),
            zone: "电信区".into(),
        });
        assert_eq!(dir.resolve(Some("梦江南"), None), expected);
        assert_eq!(dir.resolve(Some("双梦"), None), expected);
        assert_eq!(dir.resolve(Some("破阵子"), None).unwrap().zone, "双线区");
    }

    #[test]
    fn alias_wins_over_group() {
        let dir = directory();
        let resolved = dir.resolve(Some("飞龙"), Some("114514")).unwrap();
        assert_eq!(resolved.server, "飞龙在天");
    }

    #[test]
    fn falls_back_to_group_binding() {
        let dir = directory();
        assert_eq!(dir.resolve(None, Some("114514")).unwrap().server, "梦江南");
        assert_eq!(dir.resolve(Some("  "), Some("114514")).unwrap().server, "梦江南");
    }

    #[test]
    fn unresolvable_inputs() {
        let dir = directory();
        assert!(dir.resolve(Some("火星"), Some("114514")).is_none());
        assert!(dir.resolve(None, None).is_none());
        assert!(dir.resolve(None, Some("unbound")).is_none());
        assert!(dir.resolve(None, Some("42")).is_none());
    }

    #[test]
    fn test_loads_group_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"10086": "唯满侠"}}"#).unwrap();
        let dir = ServerDirectory::from_group_file(file.path()).unwrap();
        assert_eq!(dir.resolve(None, Some("10086")).unwrap().server, "唯我独尊");
    }

    #[test]
    fn bad_group_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(ServerDirectory::from_group_file(file.path()).is_err());
    }
}
