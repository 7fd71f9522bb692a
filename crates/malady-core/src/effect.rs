use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

/// Short-lived effects owned by a neighbouring effect system. Conditions only
/// add to their timers or check whether they are running.
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
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Effect {
    /// Hallucinating.
    Hallu,
    /// Seeing things at the edge of vision.
    Visuals,
    /// Blinded.
    Blind,
    /// Trembling.
    Shakes,
    /// Knocked to the ground.
    Downed,
    /// Stunned.
    Stunned,
    /// Covered in boomer bile.
    Boomered,
    /// Fungal spores taking hold.
    Fungus,
    /// Dosed with cold medicine.
    TookFlumed,
}
