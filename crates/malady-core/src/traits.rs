use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// A permanent actor trait that condition handlers consult.
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
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Trait {
    /// Sleeps for very long stretches when well fed.
    Hibernate,
    /// Hard to wake with light.
    HeavySleeper,
    /// Harder still to wake.
    HeavySleeper2,
    /// Strongly resists infection.
    InfResist,
    /// Immune to infection.
    InfImmune,
    /// Feels no pain from minor ailments.
    NoPain,
    /// Immune to parasites.
    ParaImmune,
    /// Digests parasites for nourishment.
    EatHealth,
    /// Heals only three turns in four.
    Flimsy,
    /// Heals only every other turn.
    Flimsy2,
    /// Heals only one turn in four.
    Flimsy3,
    /// Heals faster.
    FastHealer,
    /// Heals much faster.
    FastHealer2,
    /// Regenerates.
    Regen,
    /// Heals slower.
    SlowHealer,
    /// Gets tired faster, recovers faster while asleep.
    Sleepy,
    /// Barely needs sleep.
    Wakeful3,
    /// Photosynthesizes in sunlight.
    Chloromorph,
    /// Bonded to the mycus.
    MycusDefender,
    /// Immune to fungal infestation.
    MycusImmune,
    /// Prone to nausea.
    Nausea,
    /// Vomits easily.
    WeakStomach,
    /// Rarely vomits.
    StrongStomach,
    /// Struggles to fall asleep.
    Insomnia,
    /// Falls asleep easily.
    EasySleeper,
    /// Eats no meat.
    Vegetarian,
    /// Cannot stomach dairy.
    LactoseIntolerant,
}

/// Installed equipment that answers a yes/no question about the actor.
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
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Capability {
    /// Wakes the actor at a set time without an audible alarm.
    InternalChronometer,
    /// Supplies water, so thirst no longer grows while asleep.
    WaterRecycler,
    /// Carrying an artifact that turns the evil condition into its lesser form.
    EvilArtifact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_keys_are_snake_case() {
        let key: &'static str = Trait::HeavySleeper.into();
        assert_eq!(key, "heavy_sleeper");
        assert_eq!("inf_immune".parse::<Trait>().ok(), Some(Trait::InfImmune));
    }

    #[test]
    fn traits_deserialize_from_json() {
        let traits: Vec<Trait> = serde_json::from_str(r#"["para_immune", "fast_healer2"]"#)
            .expect("valid traits");
        assert_eq!(traits, vec![Trait::ParaImmune, Trait::FastHealer2]);
        let caps: Vec<Capability> =
            serde_json::from_str(r#"["water_recycler"]"#).expect("valid capabilities");
        assert_eq!(caps, vec![Capability::WaterRecycler]);
    }
}
