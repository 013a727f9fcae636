//! Equipment slot vocabulary as reported by the upstream equip API.
//!
//! Upstream identifies slots by Chinese display strings. These types give the
//! few strings the pipeline branches on a name, and keep the branching
//! exhaustive.

/// `Icon.Kind` of every weapon, including throwing pouches.
pub const KIND_WEAPON: &str = "武器";

/// `Icon.SubKind` of the throwing pouch (hidden weapon) slot.
pub const SUB_KIND_THROWING_POUCH: &str = "投掷囊";

/// `DetailType` (display class) of throwing pouch items.
pub const CLASS_THROWING: &str = "投掷";

/// `Icon.SubKind` of rings. Rings never carry five-elemental stones.
pub const SUB_KIND_RING: &str = "戒指";

/// `Icon.SubKind` of necklaces.
pub const SUB_KIND_NECKLACE: &str = "项链";

/// `Icon.SubKind` of waist pendants.
pub const SUB_KIND_PENDANT: &str = "腰坠";

/// Armor slots that receive a synthesized common enchant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArmorSlot {
    Hat,
    Top,
    Belt,
    Bracer,
    Shoes,
}

impl ArmorSlot {
    pub const ALL: [ArmorSlot; 5] = [
        ArmorSlot::Hat,
        ArmorSlot::Top,
        ArmorSlot::Belt,
        ArmorSlot::Bracer,
        ArmorSlot::Shoes,
    ];

    pub fn from_sub_kind(sub_kind: &str) -> Option<Self> {
        match sub_kind {
            "帽子" => Some(Self::Hat),
            "上衣" => Some(Self::Top),
            "腰带" => Some(Self::Belt),
            "护臂" => Some(Self::Bracer),
            "鞋" => Some(Self::Shoes),
            _ => None,
        }
    }

    pub fn sub_kind(self) -> &'static str {
        match self {
            Self::Hat => "帽子",
            Self::Top => "上衣",
            Self::Belt => "腰带",
            Self::Bracer => "护臂",
            Self::Shoes => "鞋",
        }
    }

    /// Single-character slot suffix used in common enchant names.
    pub fn enchant_suffix(self) -> char {
        match self {
            Self::Hat => '帽',
            Self::Top => '衣',
            Self::Belt => '腰',
            Self::Bracer => '腕',
            Self::Shoes => '鞋',
        }
    }
}

/// Accessory slots that the sequencer moves into a fixed trailing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accessory {
    Necklace,
    Pendant,
    Ring,
}

impl Accessory {
    pub fn from_sub_kind(sub_kind: &str) -> Option<Self> {
        match sub_kind {
            SUB_KIND_NECKLACE => Some(Self::Necklace),
            SUB_KIND_PENDANT => Some(Self::Pendant),
            SUB_KIND_RING => Some(Self::Ring),
            _ => None,
        }
    }

    /// Grouping priority; higher sorts earlier. Unlisted sub-kinds rank 0.
    pub fn priority(sub_kind: &str) -> u8 {
        match Self::from_sub_kind(sub_kind) {
            Some(Self::Necklace) => 4,
            Some(Self::Pendant) => 3,
            Some(Self::Ring) => 2,
            None => 0,
        }
    }

    /// Position in the canonical tail order; unlisted sub-kinds sort last.
    pub fn tail_position(sub_kind: &str) -> usize {
        match Self::from_sub_kind(sub_kind) {
            Some(Self::Necklace) => 0,
            Some(Self::Pendant) => 1,
            Some(Self::Ring) => 2,
            None => 3,
        }
    }
}
