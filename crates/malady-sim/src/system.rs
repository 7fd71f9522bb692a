use std::any::Any;

use malady_core::{Actor, StatBonusSet};
use tracing::trace;

use crate::context::TickContext;
use crate::engine;
use crate::error::SimResult;

/// A simulation subsystem that runs each tick.
///
/// Systems are executed in registration order. Each receives the actor and
/// a context giving access to the world, clock, RNG, catalog and event log.
pub trait System: std::fmt::Debug {
    /// Human-readable name for this system.
    fn name(&self) -> &str;

    /// Called once per tick.
    fn tick(&mut self, actor: &mut Actor, ctx: &mut TickContext<'_>) -> SimResult<()>;

    /// Support downcasting to concrete types.
    fn as_any(&self) -> &dyn Any;

    /// Support downcasting to concrete types.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Runs the condition dispatcher and keeps the last tick's bonus total.
#[derive(Debug, Default)]
pub struct ConditionSystem {
    last_bonus: StatBonusSet,
}

impl ConditionSystem {
    /// A fresh system.
    pub fn new() -> Self {
        Self::default()
    }

    /// The bonus total computed on the most recent tick.
    pub fn last_bonus(&self) -> &StatBonusSet {
        &self.last_bonus
    }
}

impl System for ConditionSystem {
    fn name(&self) -> &str {
        "conditions"
    }

    fn tick(&mut self, actor: &mut Actor, ctx: &mut TickContext<'_>) -> SimResult<()> {
        self.last_bonus = engine::tick(actor, ctx);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Counts down the short effect timers conditions hand out.
#[derive(Debug, Default)]
pub struct EffectSystem;

impl System for EffectSystem {
    fn name(&self) -> &str {
        "effects"
    }

    fn tick(&mut self, actor: &mut Actor, _ctx: &mut TickContext<'_>) -> SimResult<()> {
        actor.effects.retain(|effect, ticks| {
            *ticks -= 1;
            if *ticks <= 0 {
                trace!(?effect, "effect wore off");
            }
            *ticks > 0
        });
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use malady_core::{ConditionKind, Effect, InflictMode};

    use super::*;
    use crate::handlers::testing::Bench;
    use crate::rng::FixedRoller;

    #[test]
    fn effect_timers_run_out() {
        let mut bench = Bench::new(FixedRoller::High, 7);
        let mut actor = Actor::new("Test");
        actor.add_effect(Effect::Blind, 2);
        actor.add_effect(Effect::Hallu, 1);
        let mut system = EffectSystem;
        system.tick(&mut actor, &mut bench.ctx()).expect("tick");
        assert_eq!(actor.effect(Effect::Blind), 1);
        assert!(!actor.has_effect(Effect::Hallu));
    }

    #[test]
    fn condition_system_keeps_the_last_bonus() {
        let mut bench = Bench::new(FixedRoller::High, 7);
        let mut actor = Actor::new("Test");
        actor.conditions.inflict(ConditionKind::Grack, 10, 1, None, InflictMode::Merge);
        let mut system = ConditionSystem::new();
        system.tick(&mut actor, &mut bench.ctx()).expect("tick");
        assert_eq!(system.last_bonus().strength, 500);
        assert_eq!(system.name(), "conditions");
    }
}
