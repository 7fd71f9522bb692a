//! Diseases and parasites.

use malady_core::{Actor, BodyRegion, ConditionInstance, ConditionKind, Effect, StatBonusSet, Trait};

use crate::context::TickContext;
use crate::event::Tone;
use crate::handler::{ConditionHandler, Lifecycle};
use crate::ops;

/// Thirst and fatigue creep shared by colds and flu.
fn respiratory_drain(actor: &mut Actor, ctx: &TickContext<'_>) {
    if ctx.every(300) {
        actor.thirst += 1;
    }
    if ctx.every(50) {
        actor.fatigue += 1;
    }
}

/// Strength, intelligence and dexterity loss, softened by cold medicine.
pub struct CommonCold;

impl ConditionHandler for CommonCold {
    fn tick(
        &self,
        actor: &mut Actor,
        _inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        respiratory_drain(actor, ctx);
        let medicated = actor.has_effect(Effect::TookFlumed);
        if medicated {
            bonus.add_all(-1, 0, -1, 0);
        } else {
            bonus.add_all(-3, 0, -2, -1);
            bonus.hinder_dexterity(ConditionKind::CommonCold, 1);
            if ctx.rng.one_in(300) {
                ops::cough(actor, ctx);
            }
        }
        Lifecycle::Active
    }
}

/// A worse cold that can also make the actor throw up.
pub struct Flu;

impl ConditionHandler for Flu {
    fn tick(
        &self,
        actor: &mut Actor,
        _inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        respiratory_drain(actor, ctx);
        let medicated = actor.has_effect(Effect::TookFlumed);
        if medicated {
            bonus.add_all(-2, 0, -1, 0);
        } else {
            bonus.add_all(-4, 0, -2, -1);
            bonus.hinder_dexterity(ConditionKind::Flu, 2);
            if actor.pain < 15 {
                actor.mod_pain(1);
            }
            if ctx.rng.one_in(300) {
                ops::cough(actor, ctx);
            }
        }
        if (!medicated || ctx.rng.one_in(2))
            && (ctx.rng.one_in(3600) || ops::will_vomit_default(actor, ctx.rng))
        {
            ops::vomit(actor, ctx);
        }
        Lifecycle::Active
    }
}

/// Steals food now and then.
pub struct Tapeworm;

impl ConditionHandler for Tapeworm {
    fn tick(
        &self,
        actor: &mut Actor,
        _inst: &mut ConditionInstance,
        _bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        if actor.has_trait(Trait::ParaImmune) || actor.has_trait(Trait::EatHealth) {
            return Lifecycle::Expired;
        }
        if ctx.rng.one_in(512) {
            actor.hunger += 1;
        }
        Lifecycle::Active
    }
}

/// Slowly erodes long-term health.
pub struct Bloodworms;

impl ConditionHandler for Bloodworms {
    fn tick(
        &self,
        actor: &mut Actor,
        _inst: &mut ConditionInstance,
        _bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        if actor.has_trait(Trait::ParaImmune) {
            return Lifecycle::Expired;
        }
        if ctx.rng.one_in(512) {
            actor.healthy_mod -= 10;
        }
        Lifecycle::Active
    }
}

/// Headaches, head damage and failing eyesight.
pub struct Brainworm;

impl ConditionHandler for Brainworm {
    fn tick(
        &self,
        actor: &mut Actor,
        _inst: &mut ConditionInstance,
        _bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        if actor.has_trait(Trait::ParaImmune) {
            return Lifecycle::Expired;
        }
        if ctx.rng.one_in(512) && !actor.has_trait(Trait::NoPain) {
            ctx.message(Tone::Bad, "Your head hurts.");
            let pain = ctx.rng.range(2, 8);
            actor.mod_pain(pain);
        }
        if ctx.rng.one_in(1024) {
            actor.healthy_mod -= 10;
            let dmg = ctx.rng.range(0, 1);
            actor.damage(BodyRegion::Head, dmg);
            if !actor.has_effect(Effect::Visuals) {
                ctx.message(Tone::Bad, "Your vision is getting fuzzy.");
                let ticks = ctx.rng.range(10, 600);
                actor.add_effect(Effect::Visuals, ticks);
            }
        }
        if ctx.rng.one_in(4096) {
            actor.healthy_mod -= 10;
            let dmg = ctx.rng.range(1, 2);
            actor.damage(BodyRegion::Head, dmg);
            if !actor.has_effect(Effect::Blind) {
                ctx.message(Tone::Bad, "Your vision goes black!");
                let ticks = ctx.rng.range(5, 20);
                actor.add_effect(Effect::Blind, ticks);
            }
        }
        Lifecycle::Active
    }
}

/// Aching joints and tiredness.
pub struct Paincysts;

impl ConditionHandler for Paincysts {
    fn tick(
        &self,
        actor: &mut Actor,
        _inst: &mut ConditionInstance,
        _bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        if actor.has_trait(Trait::ParaImmune) {
            return Lifecycle::Expired;
        }
        if ctx.rng.one_in(256) && !actor.has_trait(Trait::NoPain) {
            ctx.message(Tone::Bad, "Your joints ache.");
            let pain = ctx.rng.range(1, 4);
            actor.mod_pain(pain);
        }
        if ctx.rng.one_in(256) {
            actor.fatigue += 1;
        }
        Lifecycle::Active
    }
}

/// Locked muscles and spasms, held off by valium.
pub struct Tetanus;

impl ConditionHandler for Tetanus {
    fn tick(
        &self,
        actor: &mut Actor,
        _inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        if actor.has_trait(Trait::InfImmune) {
            return Lifecycle::Expired;
        }
        if actor.has_condition(ConditionKind::Valium) {
            return Lifecycle::Active;
        }
        bonus.hinder_dexterity(ConditionKind::Tetanus, 4);
        if ctx.rng.one_in(512) {
            ctx.message(Tone::Bad, "Your muscles spasm.");
            let downed = ctx.rng.range(1, 4);
            actor.add_effect(Effect::Downed, downed);
            let stunned = ctx.rng.range(1, 4);
            actor.add_effect(Effect::Stunned, stunned);
            if ctx.rng.one_in(10) {
                let pain = ctx.rng.range(1, 10);
                actor.mod_pain(pain);
            }
        }
        Lifecycle::Active
    }
}

/// Being crushed under rubble.
pub struct Crushed;

impl ConditionHandler for Crushed {
    fn tick(
        &self,
        actor: &mut Actor,
        _inst: &mut ConditionInstance,
        _bonus: &mut StatBonusSet,
        _ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        actor.hurt_all(10);
        Lifecycle::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::Bench;
    use crate::rng::FixedRoller;

    #[test]
    fn cold_penalties_without_medicine() {
        let mut bench = Bench::new(FixedRoller::High, 7);
        let mut actor = Actor::new("Test");
        let (bonus, life) = bench.run(&CommonCold, &mut actor, ConditionKind::CommonCold, 100);
        assert_eq!(life, Lifecycle::Active);
        assert_eq!((bonus.strength, bonus.dexterity, bonus.intelligence, bonus.perception), (-3, -1, -2, -1));
        assert_eq!(bonus.miss_reasons.len(), 1);
    }

    #[test]
    fn cold_medicine_softens_and_stops_coughing() {
        let mut bench = Bench::new(FixedRoller::Low, 7);
        let mut actor = Actor::new("Test");
        actor.add_effect(Effect::TookFlumed, 100);
        let (bonus, _) = bench.run(&CommonCold, &mut actor, ConditionKind::CommonCold, 100);
        assert_eq!((bonus.strength, bonus.dexterity, bonus.intelligence), (-1, 0, -1));
        assert!(bench.world.sounds().is_empty());
    }

    #[test]
    fn cold_drains_on_gates() {
        let mut bench = Bench::new(FixedRoller::High, 300);
        let mut actor = Actor::new("Test");
        bench.run(&CommonCold, &mut actor, ConditionKind::CommonCold, 100);
        assert_eq!(actor.thirst, 1);
        assert_eq!(actor.fatigue, 1);
    }

    #[test]
    fn flu_pain_is_capped() {
        let mut bench = Bench::new(FixedRoller::High, 7);
        let mut actor = Actor::new("Test");
        actor.pain = 15;
        let (bonus, _) = bench.run(&Flu, &mut actor, ConditionKind::Flu, 100);
        assert_eq!(actor.pain, 15);
        assert_eq!(bonus.strength, -4);
        actor.pain = 3;
        bench.run(&Flu, &mut actor, ConditionKind::Flu, 100);
        assert_eq!(actor.pain, 4);
    }

    #[test]
    fn parasites_leave_immune_hosts() {
        let mut bench = Bench::new(FixedRoller::Low, 7);
        let mut immune = Actor::new("Test").with_trait(Trait::ParaImmune);
        let parasites: [(&dyn ConditionHandler, ConditionKind); 4] = [
            (&Tapeworm, ConditionKind::Tapeworm),
            (&Bloodworms, ConditionKind::Bloodworms),
            (&Brainworm, ConditionKind::Brainworm),
            (&Paincysts, ConditionKind::Paincysts),
        ];
        for (handler, kind) in parasites {
            let (_, life) = bench.run(handler, &mut immune, kind, 1000);
            assert_eq!(life, Lifecycle::Expired, "{kind:?}");
        }
        assert_eq!(immune.pain, 0);
        let mut eater = Actor::new("Test").with_trait(Trait::EatHealth);
        let (_, life) = bench.run(&Tapeworm, &mut eater, ConditionKind::Tapeworm, 1000);
        assert_eq!(life, Lifecycle::Expired);
    }

    #[test]
    fn brainworm_events_fire_when_forced() {
        let mut bench = Bench::new(FixedRoller::Low, 7);
        let mut actor = Actor::new("Test");
        bench.run(&Brainworm, &mut actor, ConditionKind::Brainworm, 1000);
        assert_eq!(actor.pain, 2);
        assert_eq!(actor.healthy_mod, -20);
        assert_eq!(actor.effect(Effect::Visuals), 10);
        assert_eq!(actor.effect(Effect::Blind), 5);
        assert_eq!(actor.hp(malady_core::HpPart::Head), 59);
    }

    #[test]
    fn tetanus_short_circuits() {
        let mut bench = Bench::new(FixedRoller::Low, 7);
        let mut immune = Actor::new("Test").with_trait(Trait::InfImmune);
        let (bonus, life) = bench.run(&Tetanus, &mut immune, ConditionKind::Tetanus, 1000);
        assert_eq!(life, Lifecycle::Expired);
        assert!(bonus.is_empty());

        let mut actor = Actor::new("Test");
        let (bonus, _) = bench.run(&Tetanus, &mut actor, ConditionKind::Tetanus, 1000);
        assert_eq!(bonus.dexterity, -4);
        assert!(actor.has_effect(Effect::Downed));
        assert_eq!(actor.pain, 1);
    }
}
