//! Afflictions that are neither diseases nor substances: itching skin,
//! stem cells, the attention of things from elsewhere, exhaustion and
//! grapples.

use std::fmt::Write as _;

use malady_core::{
    Actor, BodyRegion, Capability, ConditionInstance, ConditionKind, Effect, HpPart, StatBonusSet,
    Trait,
};
use strum::IntoEnumIterator;

use crate::context::TickContext;
use crate::event::{SimEventKind, Tone};
use crate::handler::{ConditionHandler, Lifecycle};
use crate::handlers::{label_region, prose_region};
use crate::ops;
use crate::world::MonsterGroup;

/// Summon a nether creature within four tiles of the actor. Gives up after
/// ten tries at finding a free tile.
fn open_portal(actor: &Actor, ctx: &mut TickContext<'_>) -> bool {
    for _ in 0..10 {
        let dx = ctx.rng.range(-4, 4);
        let dy = ctx.rng.range(-4, 4);
        let at = actor.position.offset(dx, dy);
        if at == actor.position || ctx.world.is_occupied(at) {
            continue;
        }
        if !ctx.world.spawn_monster(MonsterGroup::Nether, at) {
            continue;
        }
        ctx.emit(
            SimEventKind::Spawned {
                group: MonsterGroup::Nether,
                at,
            },
            format!("nether creature at ({}, {})", at.x, at.y),
        );
        if ctx.world.can_see(at) {
            ctx.world.cancel_activity();
            ctx.message(
                Tone::Warning,
                "A portal opens nearby, and a monster crawls through!",
            );
        }
        return true;
    }
    false
}

/// Itching that escalates to bugs under the skin.
pub struct Formication;

impl ConditionHandler for Formication {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        bonus.add_all(-(inst.intensity / 3), 0, -inst.intensity, 0);
        let resist = 100 + 50 * actor.effective.intelligence;
        if ctx.rng.x_in_y(inst.intensity, resist) {
            let part = prose_region(inst.region, "skin");
            if !actor.is_npc {
                ctx.message(Tone::Warning, format!("You start scratching your {part}!"));
                ctx.world.cancel_activity();
            } else if ctx.world.can_see(actor.position) {
                ctx.message(
                    Tone::Neutral,
                    format!("{} starts scratching their {part}!", actor.name),
                );
            }
            actor.moves -= 150;
            actor.damage(inst.region.unwrap_or(BodyRegion::Torso), 1);
        }
        Lifecycle::Active
    }

    fn label(&self, inst: &ConditionInstance, _actor: &Actor) -> Option<String> {
        let severity = match inst.intensity {
            1 => "Itchy skin - ",
            2 => "Writhing skin - ",
            _ => "Bugs in skin - ",
        };
        Some(format!("{severity}{}", label_region(inst.region)))
    }

    fn description(&self, inst: &ConditionInstance) -> Option<String> {
        let mut out = String::from(
            "You stop to scratch yourself frequently; high intelligence helps you resist\n\
             this urge.\n",
        );
        let _ = write!(out, "Intelligence - {};   ", inst.intensity);
        let str_pen = inst.intensity / 3;
        if str_pen > 0 {
            let _ = write!(out, "Strength - {str_pen};   ");
        }
        Some(out)
    }
}

/// Slowly pulls every limb towards a middling hit-point level.
pub struct StemcellTreatment;

impl ConditionHandler for StemcellTreatment {
    fn tick(
        &self,
        actor: &mut Actor,
        _inst: &mut ConditionInstance,
        _bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        for part in HpPart::iter() {
            if !ctx.rng.one_in(6) {
                continue;
            }
            let hp = actor.hp(part);
            if hp < ctx.rng.range(0, 40) {
                ctx.message(Tone::Good, "Your bones feel like rubber as they melt and remend.");
                let amount = ctx.rng.range(1, 8);
                actor.heal(part, amount);
            } else if hp > ctx.rng.range(10, 2000) {
                ctx.message(Tone::Bad, "Your bones feel like they're crumbling.");
                let amount = ctx.rng.range(0, 8);
                actor.heal(part, -amount);
            }
        }
        Lifecycle::Active
    }

    fn on_gain(&self, actor: &Actor, ctx: &mut TickContext<'_>) {
        if !actor.is_npc && !actor.has_trait(Trait::NoPain) {
            ctx.message(Tone::Bad, "It is excruciating.");
        }
    }
}

/// Residual teleport energy. The longer it lasts, the stranger it gets.
/// Only the player is affected.
pub struct Teleglow;

impl ConditionHandler for Teleglow {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        _bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        if actor.is_npc {
            return Lifecycle::Active;
        }
        let d = inst.duration;
        let mut fades = false;

        if d > 6000 {
            if ctx.rng.one_in(1000 - (d - 6000) / 10) {
                ctx.message(Tone::Neutral, "Glowing lights surround you, and you teleport.");
                ctx.memorial("Spontaneous teleport.");
                let from = actor.position;
                let to = ctx.world.teleport(from);
                actor.position = to;
                ctx.emit(
                    SimEventKind::Teleported { from, to },
                    format!("({}, {}) -> ({}, {})", from.x, from.y, to.x, to.y),
                );
                fades |= ctx.rng.one_in(10);
            }
            if !actor.is_asleep() && ctx.rng.one_in(1200 - (d - 6000) / 5) && ctx.rng.one_in(20) {
                ctx.message(Tone::Bad, "You pass out.");
                ops::fall_asleep(actor, ctx, 1200);
                fades |= ctx.rng.one_in(6);
            }
        }
        if d > 3600 {
            if ctx.rng.one_in(4000 - (d - 3600) / 4) && open_portal(actor, ctx) {
                fades |= ctx.rng.one_in(2);
            }
            if ctx.rng.one_in(3500 - (d - 3600) / 4) {
                ctx.message(Tone::Bad, "You shudder suddenly.");
                ctx.world.mutate(actor);
                fades |= ctx.rng.one_in(4);
            }
        }
        if d > 2400 {
            if ctx.rng.one_in(10000 - d) && !actor.has_condition(ConditionKind::Valium) {
                let ticks = ctx.rng.range(40, 80);
                actor.add_effect(Effect::Shakes, ticks);
            }
            if ctx.rng.one_in(12000 - d) {
                ctx.message(Tone::Bad, "Your vision is filled with bright lights...");
                let ticks = ctx.rng.range(10, 20);
                actor.add_effect(Effect::Blind, ticks);
                fades |= ctx.rng.one_in(8);
            }
            if ctx.rng.one_in(5000) && !actor.has_effect(Effect::Hallu) {
                actor.add_effect(Effect::Hallu, 3600);
                fades |= ctx.rng.one_in(5);
            }
        }
        if ctx.rng.one_in(4000) {
            ctx.message(Tone::Bad, "You're suddenly covered in ectoplasm.");
            actor.add_effect(Effect::Boomered, 100);
            fades |= ctx.rng.one_in(4);
        }
        if ctx.rng.one_in(10000) {
            if actor.has_trait(Trait::MycusImmune) {
                ctx.message(Tone::Info, "We have many colonists awaiting passage.");
            } else {
                actor.add_effect(Effect::Fungus, 1);
            }
            fades = true;
        }

        if fades { Lifecycle::Expired } else { Lifecycle::Active }
    }
}

/// Something out there has noticed the actor.
pub struct Attention;

impl ConditionHandler for Attention {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        _bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        let odds = 100_000 / inst.duration.max(1);
        if ctx.rng.one_in(odds)
            && ctx.rng.one_in(odds)
            && ctx.rng.one_in(250)
            && open_portal(actor, ctx)
        {
            inst.duration /= 4;
        }
        Lifecycle::Active
    }
}

/// Corruption from an evil artifact. Carrying the artifact rather than
/// bonding with it gives a milder, partly beneficial form.
pub struct Evil;

impl Evil {
    fn capped(duration: i32, cap_at: i32, divisor: i32) -> i32 {
        if duration > cap_at { 10 } else { duration / divisor }
    }
}

impl ConditionHandler for Evil {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        _ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        let d = inst.duration;
        if actor.has_capability(Capability::EvilArtifact) {
            bonus.strength += Self::capped(d, 4500, 450);
            if d < 600 {
                bonus.dexterity += 1;
            } else {
                let dex_pen = if d > 3600 { 10 } else { (d - 600) / 300 };
                bonus.hinder_dexterity(ConditionKind::Evil, dex_pen);
            }
            bonus.intelligence -= if d > 3000 { 10 } else { (d - 500) / 250 };
            bonus.perception -= if d > 4800 { 10 } else { (d - 800) / 400 };
        } else {
            bonus.strength -= Self::capped(d, 5000, 500);
            bonus.hinder_dexterity(ConditionKind::Evil, Self::capped(d, 6000, 600));
            bonus.intelligence -= Self::capped(d, 4500, 450);
            bonus.perception -= Self::capped(d, 4000, 400);
        }
        Lifecycle::Active
    }
}

/// Held until the actor gets some sleep.
pub struct LackSleep;

impl ConditionHandler for LackSleep {
    fn tick(
        &self,
        _actor: &mut Actor,
        _inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        _ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        bonus.add_all(-1, 0, -2, -2);
        bonus.hinder_dexterity(ConditionKind::LackSleep, 1);
        Lifecycle::Active
    }

    fn speed_modifier(&self, _inst: &ConditionInstance) -> i32 {
        -5
    }
}

/// A grapple. Costs blocks and all dodges, then lets go.
pub struct Grabbed;

impl ConditionHandler for Grabbed {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        _bonus: &mut StatBonusSet,
        _ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        actor.blocks_left -= inst.intensity;
        actor.dodges_left = 0;
        Lifecycle::Expired
    }

    fn speed_modifier(&self, _inst: &ConditionInstance) -> i32 {
        -25
    }
}
