use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::condition::ConditionKind;

/// The four primary attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    /// Strength.
    pub strength: i32,
    /// Dexterity.
    pub dexterity: i32,
    /// Intelligence.
    pub intelligence: i32,
    /// Perception.
    pub perception: i32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self::uniform(8)
    }
}

impl Attributes {
    /// All four attributes set to `value`.
    pub fn uniform(value: i32) -> Self {
        Self {
            strength: value,
            dexterity: value,
            intelligence: value,
            perception: value,
        }
    }
}

/// Why an attack is more likely to miss this tick, and how heavily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissReason {
    /// The condition responsible.
    pub source: ConditionKind,
    /// Relative weight when picking a miss message.
    pub weight: i32,
}

/// Transient per-tick attribute deltas.
///
/// One set is built per handler invocation and the sets are summed into the
/// tick total, which is applied once and then discarded. Nothing here is
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatBonusSet {
    /// Strength delta.
    pub strength: i32,
    /// Dexterity delta.
    pub dexterity: i32,
    /// Intelligence delta.
    pub intelligence: i32,
    /// Perception delta.
    pub perception: i32,
    /// Speed delta.
    pub speed: i32,
    /// Miss reasons recorded alongside dexterity penalties.
    pub miss_reasons: Vec<MissReason>,
}

impl StatBonusSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add to all four attributes at once.
    pub fn add_all(&mut self, str_: i32, dex: i32, int: i32, per: i32) {
        self.strength += str_;
        self.dexterity += dex;
        self.intelligence += int;
        self.perception += per;
    }

    /// Lower dexterity by `amount` and record a miss reason of equal weight.
    pub fn hinder_dexterity(&mut self, source: ConditionKind, amount: i32) {
        self.dexterity -= amount;
        self.miss_reasons.push(MissReason {
            source,
            weight: amount,
        });
    }

    /// `true` when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.strength == 0
            && self.dexterity == 0
            && self.intelligence == 0
            && self.perception == 0
            && self.speed == 0
            && self.miss_reasons.is_empty()
    }

    /// Effective attributes: `max(0, base + bonus)` per attribute.
    pub fn apply_to(&self, base: &Attributes) -> Attributes {
        Attributes {
            strength: (base.strength + self.strength).max(0),
            dexterity: (base.dexterity + self.dexterity).max(0),
            intelligence: (base.intelligence + self.intelligence).max(0),
            perception: (base.perception + self.perception).max(0),
        }
    }

    /// Effective speed: `max(1, base + bonus)`.
    pub fn apply_speed(&self, base_speed: i32) -> i32 {
        (base_speed + self.speed).max(1)
    }
}

impl AddAssign<StatBonusSet> for StatBonusSet {
    fn add_assign(&mut self, rhs: StatBonusSet) {
        self.strength += rhs.strength;
        self.dexterity += rhs.dexterity;
        self.intelligence += rhs.intelligence;
        self.perception += rhs.perception;
        self.speed += rhs.speed;
        self.miss_reasons.extend(rhs.miss_reasons);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_attributes_floor_at_zero() {
        let mut bonus = StatBonusSet::new();
        bonus.add_all(-20, 2, 0, -1);
        let eff = bonus.apply_to(&Attributes::default());
        assert_eq!(eff.strength, 0);
        assert_eq!(eff.dexterity, 10);
        assert_eq!(eff.intelligence, 8);
        assert_eq!(eff.perception, 7);
    }

    #[test]
    fn speed_never_below_one() {
        let bonus = StatBonusSet {
            speed: -500,
            ..Default::default()
        };
        assert_eq!(bonus.apply_speed(100), 1);
        assert_eq!(StatBonusSet::new().apply_speed(100), 100);
    }

    #[test]
    fn sets_sum() {
        let mut total = StatBonusSet::new();
        let mut a = StatBonusSet::new();
        a.hinder_dexterity(ConditionKind::Flu, 2);
        let mut b = StatBonusSet::new();
        b.hinder_dexterity(ConditionKind::CommonCold, 1);
        b.speed = 5;
        total += a;
        total += b;
        assert_eq!(total.dexterity, -3);
        assert_eq!(total.speed, 5);
        assert_eq!(total.miss_reasons.len(), 2);
        assert!(!total.is_empty());
        assert!(StatBonusSet::new().is_empty());
    }
}
