//! Static kungfu id table.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::infrastructure::ports::KungfuLookup;

const KUNGFUS: &[(&str, &str)] = &[
    ("10002", "洗髓经"),
    ("10003", "易筋经"),
    ("10014", "紫霞功"),
    ("10015", "太虚剑意"),
    ("10021", "花间游"),
    ("10026", "傲血战意"),
    ("10028", "离经易道"),
    ("10062", "铁牢律"),
    ("10080", "云裳心经"),
    ("10081", "冰心诀"),
    ("10144", "问水诀"),
    ("10145", "山居剑意"),
    ("10175", "毒经"),
    ("10176", "补天诀"),
    ("10224", "惊羽诀"),
    ("10225", "天罗诡道"),
    ("10242", "焚影圣诀"),
    ("10243", "明尊琉璃体"),
    ("10268", "笑尘诀"),
    ("10389", "铁骨衣"),
    ("10390", "分山劲"),
    ("10447", "莫问"),
    ("10448", "相知"),
    ("10464", "北傲诀"),
    ("10533", "凌海诀"),
    ("10585", "隐龙诀"),
    ("10615", "太玄经"),
    ("10626", "灵素"),
    ("10627", "无方"),
    ("10698", "孤锋诀"),
    ("10756", "山海心诀"),
];

/// In-memory kungfu id to name lookup.
pub struct KungfuTable {
    names: HashMap<String, String>,
}

impl KungfuTable {
    pub fn new() -> Self {
        Self::from_entries(KUNGFUS.iter().map(|(id, name)| (id.to_string(), name.to_string())))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            names: entries.into_iter().collect(),
        }
    }
}

impl Default for KungfuTable {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KungfuLookup for KungfuTable {
    async fn kungfu_name(&self, kungfu_id: &str) -> Option<String> {
        self.names.get(kungfu_id.trim()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_knows_cangjian() {
        let table = KungfuTable::new();
        assert_eq!(table.kungfu_name("10144").await.as_deref(), Some("问水诀"));
        assert_eq!(table.kungfu_name("10145").await.as_deref(), Some("山居剑意"));
    }

    #[tokio::test]
    async fn unknown_id_is_absent() {
        assert!(KungfuTable::new().kungfu_name("99999").await.is_none());
    }

    #[tokio::test]
    async fn custom_entries() {
        let table = KungfuTable::from_entries([("1".to_string(), "药宗".to_string())]);
        assert_eq!(table.kungfu_name(" 1 ").await.as_deref(), Some("药宗"));
    }
}
