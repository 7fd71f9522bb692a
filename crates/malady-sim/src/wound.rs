//! The wound chain: a deep bite that can turn infected, and the long
//! recovery after an infection breaks.
//!
//! Each stage is regional and the three stages are mutually exclusive on a
//! region. A bite left alone becomes infected; an infection left alone is
//! fatal. Recovery rolls happen once every ten turns.

use malady_core::{Actor, ConditionInstance, ConditionKind, StatBonusSet, Trait};

use crate::context::TickContext;
use crate::event::Tone;
use crate::handler::{ConditionHandler, Lifecycle};
use crate::handlers::{label_region, prose_region};
use crate::ops;

/// Duration a fresh bite starts with.
pub const BITE_DURATION: i32 = 3601;
/// Duration an infection starts with.
pub const INFECTED_DURATION: i32 = 14401;

const BITE_RECOVERY_ODDS: i32 = 108_000;
const INFECTED_RECOVERY_ODDS: i32 = 864_000;
const INFECTED_HEAVY: i32 = 8401;
const INFECTED_FEVER: i32 = 3601;

/// Whether this turn gets a recovery roll.
fn recovery_turn(ctx: &TickContext<'_>) -> bool {
    ctx.turn() % 10 == 1
}

fn infection_resistance(actor: &Actor) -> i32 {
    if actor.has_trait(Trait::InfResist) { 1000 } else { 0 }
}

fn feel_better(actor: &Actor, inst: &ConditionInstance, ctx: &mut TickContext<'_>) {
    if !actor.is_npc {
        ctx.message(
            Tone::Good,
            format!(
                "Your {} wound begins to feel better.",
                prose_region(inst.region, "bite")
            ),
        );
    }
}

/// Wake a sleeping actor without ending their rest for any other reason.
fn jolt_awake(actor: &mut Actor, ctx: &mut TickContext<'_>) -> bool {
    if actor.is_asleep() {
        ops::wake_up(actor, ctx);
        true
    } else {
        false
    }
}

/// Pain ticks up by one while below `cap`.
fn ache(actor: &mut Actor, cap: i32) {
    if actor.pain < cap {
        actor.mod_pain(1);
    }
}

/// The severe phase shared by late infection and early recovery.
fn collapse(actor: &mut Actor, ctx: &mut TickContext<'_>, pain_cap: i32) {
    if ctx.rng.one_in(100) {
        let text = if jolt_awake(actor, ctx) {
            "You feel terribly weak, standing up is nearly impossible."
        } else {
            "You can barely remain standing."
        };
        ctx.message(Tone::Warning, text);
        ops::vomit(actor, ctx);
        ache(actor, pain_cap);
    }
}

fn maybe_pass_out(actor: &mut Actor, ctx: &mut TickContext<'_>) {
    if !actor.is_asleep() && ctx.rng.one_in(100) {
        ctx.message(Tone::Bad, "You pass out.");
        ops::fall_asleep(actor, ctx, 60);
    }
}

/// A deep bite. Turns infected when it runs out.
pub struct Bite;

impl Bite {
    fn recovery_factor(actor: &Actor) -> i32 {
        let recovering = actor
            .conditions
            .longest_duration(ConditionKind::Recover)
            .map_or(0, |d| (d / 720).min(100));
        (100 - recovering + infection_resistance(actor) + actor.health / 10).max(0)
    }
}

impl ConditionHandler for Bite {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        let immune = actor.has_trait(Trait::InfImmune);
        if recovery_turn(ctx)
            && (immune || ctx.rng.x_in_y(Self::recovery_factor(actor), BITE_RECOVERY_ODDS))
        {
            feel_better(actor, inst, ctx);
            let age = BITE_DURATION - inst.duration;
            if age > 2400 && !immune {
                return Lifecycle::heal_into(ConditionKind::Recover, 2 * age - 4800);
            }
            return Lifecycle::Expired;
        }

        let site = prose_region(inst.region, "bite");
        if inst.duration > 2401 {
            if ctx.rng.one_in(300) && !actor.has_trait(Trait::NoPain) {
                ctx.message(Tone::Bad, format!("Your {site} wound really hurts."));
            }
        } else if inst.duration > 1 {
            if ctx.rng.one_in(100) && !actor.has_trait(Trait::NoPain) {
                jolt_awake(actor, ctx);
                ctx.message(Tone::Bad, format!("Your {site} wound feels swollen and painful."));
                ache(actor, 10);
            }
            bonus.hinder_dexterity(ConditionKind::Bite, 1);
        } else {
            return Lifecycle::progress(ConditionKind::Infected, INFECTED_DURATION);
        }
        Lifecycle::Active
    }

    fn label(&self, inst: &ConditionInstance, actor: &Actor) -> Option<String> {
        let stage = if inst.duration > 2401 || actor.has_trait(Trait::InfImmune) {
            "Bite - "
        } else {
            "Painful Bite - "
        };
        Some(format!("{stage}{}", label_region(inst.region)))
    }
}

/// An infected wound. Fatal if it runs its course.
pub struct Infected;

impl Infected {
    fn recovery_duration(duration: i32) -> i32 {
        let elapsed = INFECTED_DURATION - duration + 3600;
        if duration > INFECTED_HEAVY {
            3 * elapsed - 4800
        } else {
            4 * elapsed - 4800
        }
    }
}

impl ConditionHandler for Infected {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        if recovery_turn(ctx) {
            if actor.has_trait(Trait::InfImmune) {
                feel_better(actor, inst, ctx);
                return Lifecycle::Expired;
            }
            let factor = 100 + actor.health / 10 + infection_resistance(actor);
            if ctx.rng.x_in_y(factor, INFECTED_RECOVERY_ODDS) {
                feel_better(actor, inst, ctx);
                return Lifecycle::heal_into(
                    ConditionKind::Recover,
                    Self::recovery_duration(inst.duration),
                );
            }
        }

        let site = prose_region(inst.region, "bite");
        let d = inst.duration;
        if d > INFECTED_HEAVY {
            if ctx.rng.one_in(100) && !actor.has_trait(Trait::NoPain) {
                jolt_awake(actor, ctx);
                ctx.message(Tone::Bad, format!("Your {site} wound is incredibly painful."));
                ache(actor, 30);
            }
            bonus.strength -= 1;
            bonus.hinder_dexterity(ConditionKind::Infected, 1);
        } else if d > INFECTED_FEVER {
            if ctx.rng.one_in(100) {
                jolt_awake(actor, ctx);
                ctx.message(
                    Tone::Bad,
                    format!(
                        "You feel feverish and nauseous, your {site} wound has begun to turn green."
                    ),
                );
                ops::vomit(actor, ctx);
                ache(actor, 50);
            }
            bonus.strength -= 2;
            bonus.hinder_dexterity(ConditionKind::Infected, 2);
        } else if d > 1 {
            collapse(actor, ctx, 100);
            bonus.strength -= 3;
            bonus.hinder_dexterity(ConditionKind::Infected, 3);
            maybe_pass_out(actor, ctx);
        } else {
            jolt_awake(actor, ctx);
            ctx.message(Tone::Bad, "You succumb to the infection.");
            if !actor.is_npc {
                ctx.memorial("Succumbed to the infection.");
            }
            actor.hurt_all(500);
        }
        Lifecycle::Active
    }

    fn label(&self, inst: &ConditionInstance, _actor: &Actor) -> Option<String> {
        let stage = match inst.duration {
            d if d > INFECTED_HEAVY => "Infected - ",
            d if d > INFECTED_FEVER => "Badly Infected - ",
            _ => "Pus Filled - ",
        };
        Some(format!("{stage}{}", label_region(inst.region)))
    }
}

/// Recovery after an infection. Running out means the wound has healed.
pub struct Recover;

impl ConditionHandler for Recover {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        let no_pain = actor.has_trait(Trait::NoPain);
        match inst.duration {
            d if d > 52_800 => {
                collapse(actor, ctx, 80);
                bonus.strength -= 3;
                bonus.hinder_dexterity(ConditionKind::Recover, 3);
                maybe_pass_out(actor, ctx);
            }
            d if d > 33_600 => {
                if ctx.rng.one_in(100) {
                    jolt_awake(actor, ctx);
                    ctx.message(Tone::Bad, "You feel feverish and nauseous.");
                    ops::vomit(actor, ctx);
                    ache(actor, 40);
                }
                bonus.strength -= 2;
                bonus.hinder_dexterity(ConditionKind::Recover, 2);
            }
            d if d > 9600 => {
                if ctx.rng.one_in(100) && !no_pain {
                    jolt_awake(actor, ctx);
                    ctx.message(Tone::Bad, "Your healing wound is incredibly painful.");
                    ache(actor, 24);
                }
                bonus.strength -= 1;
                bonus.hinder_dexterity(ConditionKind::Recover, 1);
            }
            _ => {
                if ctx.rng.one_in(100) && !no_pain {
                    jolt_awake(actor, ctx);
                    ctx.message(Tone::Bad, "Your healing wound feels swollen and painful.");
                    ache(actor, 8);
                }
                bonus.hinder_dexterity(ConditionKind::Recover, 1);
            }
        }
        Lifecycle::Active
    }
}
