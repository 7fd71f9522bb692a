use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};

use crate::body::{BodyRegion, HpPart, temperature};
use crate::condition::ConditionKind;
use crate::conditions::ConditionSet;
use crate::effect::Effect;
use crate::error::{MaladyError, MaladyResult};
use crate::stats::{Attributes, StatBonusSet};
use crate::traits::{Capability, Trait};

/// A tile coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Position {
    /// Construct a position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// The simulated creature that carries conditions.
///
/// Every field has a sensible default so a scenario file only needs to
/// spell out what differs from a healthy, rested adult.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Actor {
    /// Display name.
    pub name: String,
    /// Attributes before condition bonuses.
    pub base: Attributes,
    /// Speed before condition bonuses.
    pub base_speed: i32,
    /// Attributes after the last tick's bonuses.
    pub effective: Attributes,
    /// Speed after the last tick's bonuses.
    pub speed: i32,

    /// Tiredness. Negative means well rested.
    pub fatigue: i32,
    /// Hunger. Below -60 means engorged.
    pub hunger: i32,
    /// Thirst.
    pub thirst: i32,
    /// Pain. Never negative.
    pub pain: i32,
    /// Stimulant level; negative for depressants.
    pub stim: i32,
    /// Focus.
    pub focus: i32,
    /// General health.
    pub health: i32,
    /// Drift applied to health over time.
    pub healthy_mod: i32,

    /// Action points for the current turn.
    pub moves: i32,
    /// Blocks left this turn.
    pub blocks_left: i32,
    /// Dodges left this turn.
    pub dodges_left: i32,

    /// Current hit points per pool.
    pub hp: [i32; HpPart::COUNT],
    /// Maximum hit points per pool.
    pub hp_max: [i32; HpPart::COUNT],
    /// Temperature per body region.
    pub temperature: [i32; BodyRegion::COUNT],
    /// Where the actor stands.
    pub position: Position,

    /// Permanent traits.
    pub traits: BTreeSet<Trait>,
    /// Installed equipment.
    pub capabilities: BTreeSet<Capability>,
    /// Remaining ticks of short-lived effects.
    pub effects: BTreeMap<Effect, i32>,
    /// Mutation category levels.
    pub mutation_categories: BTreeMap<String, i32>,
    /// Crossed a mutation threshold.
    pub crossed_threshold: bool,
    /// Non-player actor.
    pub is_npc: bool,

    /// Active conditions.
    pub conditions: ConditionSet,
}

impl Default for Actor {
    fn default() -> Self {
        let base = Attributes::default();
        Self {
            name: "You".to_string(),
            base,
            base_speed: 100,
            effective: base,
            speed: 100,
            fatigue: 0,
            hunger: 0,
            thirst: 0,
            pain: 0,
            stim: 0,
            focus: 100,
            health: 0,
            healthy_mod: 0,
            moves: 100,
            blocks_left: 1,
            dodges_left: 1,
            hp: [60; HpPart::COUNT],
            hp_max: [60; HpPart::COUNT],
            temperature: [temperature::NORM; BodyRegion::COUNT],
            position: Position::default(),
            traits: BTreeSet::new(),
            capabilities: BTreeSet::new(),
            effects: BTreeMap::new(),
            mutation_categories: BTreeMap::new(),
            crossed_threshold: false,
            is_npc: false,
            conditions: ConditionSet::new(),
        }
    }
}

impl Actor {
    /// A default actor with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a trait, builder style.
    pub fn with_trait(mut self, t: Trait) -> Self {
        self.traits.insert(t);
        self
    }

    /// Add a capability, builder style.
    pub fn with_capability(mut self, c: Capability) -> Self {
        self.capabilities.insert(c);
        self
    }

    /// Whether the actor has `t`.
    pub fn has_trait(&self, t: Trait) -> bool {
        self.traits.contains(&t)
    }

    /// Whether the actor has `c` installed.
    pub fn has_capability(&self, c: Capability) -> bool {
        self.capabilities.contains(&c)
    }

    /// Whether any condition of `kind` is active.
    pub fn has_condition(&self, kind: ConditionKind) -> bool {
        self.conditions.has(kind)
    }

    /// Whether the actor is asleep.
    pub fn is_asleep(&self) -> bool {
        self.conditions.has(ConditionKind::Sleep)
    }

    /// Remaining ticks of a short-lived effect, zero if absent.
    pub fn effect(&self, effect: Effect) -> i32 {
        self.effects.get(&effect).copied().unwrap_or(0)
    }

    /// Whether a short-lived effect is running.
    pub fn has_effect(&self, effect: Effect) -> bool {
        self.effect(effect) > 0
    }

    /// Extend a short-lived effect by `ticks`.
    pub fn add_effect(&mut self, effect: Effect, ticks: i32) {
        let entry = self.effects.entry(effect).or_insert(0);
        *entry = entry.saturating_add(ticks).max(0);
    }

    /// Hit points of one pool.
    pub fn hp(&self, part: HpPart) -> i32 {
        self.hp[part.index()]
    }

    /// Deal `amount` damage to every pool. Pools bottom out at zero.
    pub fn hurt_all(&mut self, amount: i32) {
        for part in HpPart::iter() {
            self.hurt(part, amount);
        }
    }

    /// Heal every pool by `amount`, up to its maximum.
    pub fn heal_all(&mut self, amount: i32) {
        for part in HpPart::iter() {
            let i = part.index();
            self.hp[i] = (self.hp[i] + amount).min(self.hp_max[i]);
        }
    }

    /// Change one pool by `delta`, kept within `0..=max`.
    pub fn heal(&mut self, part: HpPart, delta: i32) {
        let i = part.index();
        self.hp[i] = (self.hp[i] + delta).clamp(0, self.hp_max[i]);
    }

    fn hurt(&mut self, part: HpPart, amount: i32) {
        let i = part.index();
        self.hp[i] = (self.hp[i] - amount).max(0);
    }

    /// Damage the pool behind `region`.
    pub fn damage(&mut self, region: BodyRegion, amount: i32) {
        self.hurt(region.hp_part(), amount);
    }

    /// Shift pain by `delta`. Pain never drops below zero.
    pub fn mod_pain(&mut self, delta: i32) {
        self.pain = (self.pain + delta).max(0);
    }

    /// Dead once the head or torso pool is empty.
    pub fn is_dead(&self) -> bool {
        HpPart::iter().any(|p| p.is_vital() && self.hp(p) <= 0)
    }

    /// Highest mutation category level, zero if none.
    pub fn highest_mutation_level(&self) -> i32 {
        self.mutation_categories.values().copied().max().unwrap_or(0)
    }

    /// The dominant mutation category, if any.
    pub fn dominant_mutation(&self) -> Option<(&str, i32)> {
        self.mutation_categories
            .iter()
            .max_by_key(|(_, level)| **level)
            .map(|(name, level)| (name.as_str(), *level))
    }

    /// Recompute effective attributes and speed from a tick's bonus total.
    pub fn apply_bonuses(&mut self, bonus: &StatBonusSet) {
        self.effective = bonus.apply_to(&self.base);
        self.speed = bonus.apply_speed(self.base_speed);
    }

    /// Check that hit points are consistent.
    pub fn validate(&self) -> MaladyResult<()> {
        for part in HpPart::iter() {
            let (current, max) = (self.hp[part.index()], self.hp_max[part.index()]);
            if max <= 0 || current < 0 || current > max {
                return Err(MaladyError::InvalidHitPoints {
                    part: format!("{part:?}"),
                    current,
                    max,
                });
            }
        }
        if self.base_speed <= 0 {
            return Err(MaladyError::Validation(format!(
                "base speed must be positive, got {}",
                self.base_speed
            )));
        }
        Ok(())
    }
}
