use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::body::BodyRegion;
use crate::error::{MaladyError, MaladyResult};

/// How many instances of a kind an actor may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// At most one instance on the whole actor.
    Singleton,
    /// At most one instance per body region.
    PerRegion,
}

/// How a kind's duration moves between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decay {
    /// Loses one tick per tick; expires at zero.
    Countdown,
    /// Left untouched by the dispatcher; something else manages it.
    Held,
}

/// Every condition the engine knows about.
///
/// The string key (`snake_case`) is what scenario files use; the dense tag
/// (`kind as usize`) indexes the catalog.
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
#[allow(missing_docs)]
pub enum ConditionKind {
    CommonCold,
    Flu,
    Recover,
    Tapeworm,
    Bloodworms,
    Brainworm,
    Paincysts,
    Tetanus,
    Crushed,
    LyingDown,
    Sleep,
    AlarmClock,
    Formication,
    Bite,
    Drunk,
    Cig,
    High,
    WeedHigh,
    Datura,
    TookXanax,
    TookProzac,
    Adrenaline,
    Jetinjector,
    Asthma,
    Grack,
    Meth,
    Valium,
    Amigara,
    StemcellTreatment,
    Teleglow,
    Attention,
    Evil,
    Infected,
    AskedToTrain,
    AskedPersonalInfo,
    LackSleep,
    Grabbed,
}

impl ConditionKind {
    /// Dense integer tag.
    pub fn tag(self) -> usize {
        self as usize
    }

    /// Stable string key.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Look a kind up by its string key.
    pub fn from_key(key: &str) -> MaladyResult<Self> {
        key.trim()
            .parse()
            .map_err(|_| MaladyError::UnknownCondition(key.to_string()))
    }

    /// Every kind, in tag order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Whether the kind is keyed by region.
    pub fn scope(self) -> Scope {
        match self {
            Self::Bite | Self::Infected | Self::Recover | Self::Formication => Scope::PerRegion,
            _ => Scope::Singleton,
        }
    }

    /// How the dispatcher moves this kind's duration.
    pub fn decay(self) -> Decay {
        match self {
            Self::LackSleep => Decay::Held,
            _ => Decay::Countdown,
        }
    }

    /// Upper bound for intensity.
    pub fn max_intensity(self) -> i32 {
        match self {
            Self::Sleep => 24,
            Self::Formication => 3,
            _ => 1,
        }
    }

    /// Member of the bite, infected, recover chain.
    pub fn is_wound_chain(self) -> bool {
        self.wound_stage().is_some()
    }

    /// Position in the wound chain: bite, then infected, then recover.
    pub fn wound_stage(self) -> Option<u8> {
        match self {
            Self::Bite => Some(0),
            Self::Infected => Some(1),
            Self::Recover => Some(2),
            _ => None,
        }
    }

    /// Clamp an intensity into `1..=max_intensity`.
    pub fn clamp_intensity(self, intensity: i32) -> i32 {
        intensity.clamp(1, self.max_intensity())
    }
}

/// Identifies an instance within an actor's condition set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConditionKey {
    /// The kind.
    pub kind: ConditionKind,
    /// The region, or `None` for whole-body instances.
    pub region: Option<BodyRegion>,
}

impl ConditionKey {
    /// Build a key, dropping the region for singleton kinds.
    pub fn new(kind: ConditionKind, region: Option<BodyRegion>) -> Self {
        let region = match kind.scope() {
            Scope::Singleton => None,
            Scope::PerRegion => region,
        };
        Self { kind, region }
    }
}

/// A live condition on an actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionInstance {
    /// What kind of condition this is.
    pub kind: ConditionKind,
    /// Remaining ticks. Never negative.
    pub duration: i32,
    /// Severity or stack level, within `1..=kind.max_intensity()`.
    #[serde(default = "default_intensity")]
    pub intensity: i32,
    /// Region for region-scoped kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<BodyRegion>,
    /// Optional extra payload some kinds carry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aux: Option<u32>,
    #[serde(skip)]
    pub(crate) serial: u64,
}

fn default_intensity() -> i32 {
    1
}

impl ConditionInstance {
    /// A fresh instance with clamped intensity and non-negative duration.
    pub fn new(
        kind: ConditionKind,
        duration: i32,
        intensity: i32,
        region: Option<BodyRegion>,
    ) -> Self {
        let key = ConditionKey::new(kind, region);
        Self {
            kind,
            duration: duration.max(0),
            intensity: kind.clamp_intensity(intensity),
            region: key.region,
            aux: None,
            serial: 0,
        }
    }

    /// Key of this instance.
    pub fn key(&self) -> ConditionKey {
        ConditionKey {
            kind: self.kind,
            region: self.region,
        }
    }

    /// Identity of this particular insertion. A replaced instance gets a new
    /// serial even though its key is unchanged.
    pub fn serial(&self) -> u64 {
        self.serial
    }

    /// Shift intensity by `delta`, clamped.
    pub fn add_intensity(&mut self, delta: i32) {
        self.intensity = self
            .kind
            .clamp_intensity(self.intensity.saturating_add(delta));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn keys_are_stable() {
        assert_eq!(ConditionKind::CommonCold.key(), "common_cold");
        assert_eq!(ConditionKind::StemcellTreatment.key(), "stemcell_treatment");
        assert_eq!(ConditionKind::from_key("weed_high").ok(), Some(ConditionKind::WeedHigh));
        assert!(ConditionKind::from_key("lycanthropy").is_err());
    }

    #[test]
    fn tags_are_dense() {
        for (i, kind) in ConditionKind::all().enumerate() {
            assert_eq!(kind.tag(), i);
        }
        assert_eq!(ConditionKind::all().count(), ConditionKind::COUNT);
    }

    #[test]
    fn singleton_key_drops_region() {
        let key = ConditionKey::new(ConditionKind::Sleep, Some(BodyRegion::Head));
        assert_eq!(key.region, None);
        let key = ConditionKey::new(ConditionKind::Bite, Some(BodyRegion::ArmL));
        assert_eq!(key.region, Some(BodyRegion::ArmL));
    }

    #[test]
    fn new_instance_normalizes() {
        let inst = ConditionInstance::new(ConditionKind::Formication, -5, 9, None);
        assert_eq!(inst.duration, 0);
        assert_eq!(inst.intensity, 3);
    }

    proptest! {
        #[test]
        fn intensity_stays_in_bounds(start in -100i32..100, delta in proptest::num::i32::ANY) {
            for kind in ConditionKind::all() {
                let mut inst = ConditionInstance::new(kind, 10, start, None);
                inst.add_intensity(delta);
                prop_assert!(inst.intensity >= 1);
                prop_assert!(inst.intensity <= kind.max_intensity());
            }
        }
    }
}
