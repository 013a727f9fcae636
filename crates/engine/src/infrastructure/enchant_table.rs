//! Quality-tier table for common enchant prefixes.

use jx3calc_domain::EnchantNaming;

/// Lowest equipment quality of each tier, highest first.
const TIERS: &[(u32, &str)] = &[
    (23300, "天堑奇旅"),
    (12450, "断浪"),
    (9400, "苍海"),
];

/// Picks the enchant prefix of the highest tier whose floor `quality` reaches.
pub struct EnchantTable {
    tiers: Vec<(u32, String)>,
    fallback: String,
}

impl EnchantTable {
    pub fn new(fallback: Option<String>) -> Self {
        Self {
            tiers: TIERS
                .iter()
                .map(|(floor, prefix)| (*floor, prefix.to_string()))
                .collect(),
            fallback: fallback.unwrap_or_default(),
        }
    }
}

impl Default for EnchantTable {
    fn default() -> Self {
        Self::new(None)
    }
}

impl EnchantNaming for EnchantTable {
    fn prefix(&self, quality: &str) -> String {
        let Ok(quality) = quality.trim().parse::<u32>() else {
            tracing::debug!(quality, "Unparseable quality, using fallback enchant prefix");
            return self.fallback.clone();
        };

        self.tiers
            .iter()
            .find(|(floor, _)| quality >= *floor)
            .map(|(_, prefix)| prefix.clone())
            .unwrap_or_else(|| self.fallback.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_highest_reached_tier() {
        let table = EnchantTable::default();
        assert_eq!(table.prefix("25000"), "天堑奇旅");
        assert_eq!(table.prefix("23300"), "天堑奇旅");
        assert_eq!(table.prefix("12450"), "断浪");
        assert_eq!(table.prefix("9999"), "苍海");
    }

    #[test]
    fn falls_back_below_lowest_tier() {
        assert_eq!(EnchantTable::default().prefix("100"), "");
        assert_eq!(
            EnchantTable::new(Some("天堑奇旅".into())).prefix("100"),
            "天堑奇旅"
        );
    }

    #[test]
    fn garbage_quality_uses_fallback() {
        assert_eq!(EnchantTable::new(Some("X".into())).prefix("n/a"), "X");
    }
}
