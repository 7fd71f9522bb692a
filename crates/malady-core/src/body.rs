use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Body temperature bands, in the engine's integer temperature units.
pub mod temperature {
    /// Frostbite territory.
    pub const FREEZING: i32 = 500;
    /// Very cold.
    pub const VERY_COLD: i32 = 2000;
    /// Cold.
    pub const COLD: i32 = 3500;
    /// Comfortable.
    pub const NORM: i32 = 5000;
    /// Hot.
    pub const HOT: i32 = 6500;
    /// Very hot.
    pub const VERY_HOT: i32 = 8000;
    /// Heatstroke territory.
    pub const SCORCHING: i32 = 9500;
}

/// A localized subdivision of an actor. Region-scoped conditions attach here
/// independently of each other.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BodyRegion {
    /// Chest and abdomen.
    Torso,
    /// Skull and neck.
    Head,
    /// Eyes.
    Eyes,
    /// Mouth.
    Mouth,
    /// Left arm.
    ArmL,
    /// Right arm.
    ArmR,
    /// Left hand.
    HandL,
    /// Right hand.
    HandR,
    /// Left leg.
    LegL,
    /// Right leg.
    LegR,
    /// Left foot.
    FootL,
    /// Right foot.
    FootR,
}

impl BodyRegion {
    /// Dense index of this region, usable for per-region arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The stable key used in scenario files.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Parse a region key. Unknown keys degrade to the whole body (`None`)
    /// instead of failing.
    pub fn parse_or_whole(key: &str) -> Option<Self> {
        key.trim().to_lowercase().parse().ok()
    }

    /// Human-readable name used in labels.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Torso => "Torso",
            Self::Head => "Head",
            Self::Eyes => "Eyes",
            Self::Mouth => "Mouth",
            Self::ArmL => "Left Arm",
            Self::ArmR => "Right Arm",
            Self::HandL => "Left Hand",
            Self::HandR => "Right Hand",
            Self::LegL => "Left Leg",
            Self::LegR => "Right Leg",
            Self::FootL => "Left Foot",
            Self::FootR => "Right Foot",
        }
    }

    /// The hit-point pool that absorbs damage dealt to this region.
    pub fn hp_part(self) -> HpPart {
        match self {
            Self::Torso => HpPart::Torso,
            Self::Head | Self::Eyes | Self::Mouth => HpPart::Head,
            Self::ArmL | Self::HandL => HpPart::ArmL,
            Self::ArmR | Self::HandR => HpPart::ArmR,
            Self::LegL | Self::FootL => HpPart::LegL,
            Self::LegR | Self::FootR => HpPart::LegR,
        }
    }

    /// The six regions that carry their own hit points.
    pub fn main_regions() -> impl Iterator<Item = Self> {
        Self::iter().filter(|r| {
            matches!(
                r,
                Self::Torso | Self::Head | Self::ArmL | Self::ArmR | Self::LegL | Self::LegR
            )
        })
    }
}

impl fmt::Display for BodyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Hit-point pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumCount)]
#[serde(rename_all = "snake_case")]
pub enum HpPart {
    /// Head pool; reaching zero is fatal.
    Head,
    /// Torso pool; reaching zero is fatal.
    Torso,
    /// Left arm pool.
    ArmL,
    /// Right arm pool.
    ArmR,
    /// Left leg pool.
    LegL,
    /// Right leg pool.
    LegR,
}

impl HpPart {
    /// Dense index of this pool.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether emptying this pool kills the actor.
    pub fn is_vital(self) -> bool {
        matches!(self, Self::Head | Self::Torso)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_keys_roundtrip() {
        for region in BodyRegion::iter() {
            assert_eq!(BodyRegion::parse_or_whole(region.key()), Some(region));
        }
    }

    #[test]
    fn unknown_region_degrades_to_whole_body() {
        assert_eq!(BodyRegion::parse_or_whole("tail"), None);
        assert_eq!(BodyRegion::parse_or_whole(""), None);
        assert_eq!(BodyRegion::parse_or_whole(" Arm_L "), Some(BodyRegion::ArmL));
    }

    #[test]
    fn extremities_share_limb_hp() {
        assert_eq!(BodyRegion::HandL.hp_part(), HpPart::ArmL);
        assert_eq!(BodyRegion::FootR.hp_part(), HpPart::LegR);
        assert_eq!(BodyRegion::Eyes.hp_part(), HpPart::Head);
    }

    #[test]
    fn six_main_regions() {
        assert_eq!(BodyRegion::main_regions().count(), HpPart::COUNT);
    }
}
