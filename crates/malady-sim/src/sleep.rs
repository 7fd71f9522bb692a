//! Sleep: lying down, the per-tick regulator while asleep, and the alarm.
//!
//! The regulator keeps its recovery counter in the sleep instance's
//! intensity. The counter climbs by one on every recovery gate and makes
//! later fatigue rolls less generous.

use malady_core::body::temperature;
use malady_core::{
    Actor, BodyRegion, Capability, ConditionInstance, ConditionKind, StatBonusSet, Trait,
};
use strum::IntoEnumIterator;

use crate::context::TickContext;
use crate::event::{SimEventKind, Tone};
use crate::handler::{ConditionHandler, Lifecycle};
use crate::ops;

/// A full night.
pub const NIGHT_DURATION: i32 = 6000;
/// Ten days of hibernation.
pub const HIBERNATION_DURATION: i32 = 144_000;

const HIBERNATION_GATE: u64 = 350;
const SLEEP_GATE: u64 = 50;
const ENGORGED: i32 = -60;

/// Whether the actor manages to drift off this turn.
pub fn can_fall_asleep(actor: &Actor, ctx: &mut TickContext<'_>) -> bool {
    let mut sleepy = ctx.world.sleep_comfort(actor.position);
    if actor.has_trait(Trait::Insomnia) {
        sleepy -= 8;
    }
    if actor.has_trait(Trait::EasySleeper) {
        sleepy += 8;
    }
    if actor.fatigue < 192 {
        sleepy -= 192_i32.saturating_sub(actor.fatigue) / 4;
    } else {
        sleepy += (actor.fatigue - 192) / 16;
    }
    sleepy += ctx.rng.range(-8, 8);
    sleepy -= 2 * actor.stim;
    sleepy > 0
}

/// Waiting to fall asleep.
pub struct LyingDown;

impl ConditionHandler for LyingDown {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        _bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        actor.moves = 0;
        if actor.is_asleep() {
            return Lifecycle::Expired;
        }
        if can_fall_asleep(actor, ctx) {
            if !actor.is_npc {
                ctx.message(Tone::Neutral, "You fall asleep.");
            }
            if actor.has_trait(Trait::Hibernate) && actor.hunger < ENGORGED {
                if !actor.is_npc {
                    ctx.memorial("Entered hibernation.");
                }
                ops::fall_asleep(actor, ctx, HIBERNATION_DURATION);
            } else {
                ops::fall_asleep(actor, ctx, NIGHT_DURATION);
            }
            return Lifecycle::Expired;
        }
        if inst.duration == 1 && !actor.is_npc {
            ctx.message(Tone::Neutral, "You try to sleep, but can't...");
        }
        Lifecycle::Active
    }
}

/// Fatigue recovery, healing and the reasons to wake up.
pub struct SleepRegulator;

impl SleepRegulator {
    /// Fatigue, healing and the rested check.
    fn recover(
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        ctx: &mut TickContext<'_>,
        hibernating: bool,
    ) {
        inst.add_intensity(1);
        let chance = 25 - inst.intensity;
        if actor.fatigue > 0 {
            actor.fatigue -= 1 + i32::from(ctx.rng.one_in(chance));
            if !hibernating {
                if actor.has_trait(Trait::Sleepy) {
                    actor.fatigue -= 1 + i32::from(ctx.rng.one_in(chance)) / 2;
                }
                if actor.has_trait(Trait::Wakeful3) {
                    actor.fatigue -= 2 + i32::from(ctx.rng.one_in(chance)) / 2;
                }
            }
        }
        Self::heal(actor, ctx);

        if actor.fatigue <= 0 && actor.fatigue > -20 {
            actor.fatigue = -25;
            ctx.message(Tone::Good, "You feel well rested.");
            let residual = ctx.rng.dice(3, 100);
            inst.duration = inst.duration.min(residual);
            if hibernating {
                ctx.memorial("Awoke from hibernation.");
            }
        }
    }

    fn heal(actor: &mut Actor, ctx: &mut TickContext<'_>) {
        let flimsy = [Trait::Flimsy, Trait::Flimsy2, Trait::Flimsy3]
            .iter()
            .any(|t| actor.has_trait(*t));
        let allowed = !flimsy
            || (actor.has_trait(Trait::Flimsy) && ctx.rng.x_in_y(3, 4))
            || (actor.has_trait(Trait::Flimsy2) && ctx.rng.one_in(2))
            || (actor.has_trait(Trait::Flimsy3) && ctx.rng.one_in(4));
        if !allowed {
            return;
        }
        let bonus = if actor.has_trait(Trait::FastHealer) {
            100
        } else if actor.has_trait(Trait::FastHealer2) {
            150
        } else if actor.has_trait(Trait::Regen) {
            200
        } else if actor.has_trait(Trait::SlowHealer) {
            13
        } else {
            25
        };
        let chance = actor.health / 4 + bonus;
        if chance >= 100 {
            actor.heal_all(chance / 100);
        }
        if ctx.rng.x_in_y(chance % 100, 100) {
            actor.heal_all(1);
        }
    }

    fn metabolise(actor: &mut Actor, ctx: &mut TickContext<'_>) {
        let recycler = actor.has_capability(Capability::WaterRecycler);
        let engorged = actor.hunger < ENGORGED;
        let normal_rate = ctx.every(100) && !engorged;
        let slow_rate = ctx.every(70) && engorged;
        if !recycler && (normal_rate || slow_rate) {
            actor.hunger -= 1;
            actor.thirst -= 1;
        }
        if ctx.every(100)
            && actor.has_trait(Trait::Chloromorph)
            && ctx.world.is_in_sunlight(actor.position)
        {
            if actor.hunger >= -30 {
                actor.hunger -= 5;
            }
            if actor.thirst >= -30 {
                actor.thirst -= 5;
            }
        }
    }

    /// Dream strength from mutation progress, `0` for none.
    pub fn dream_strength(actor: &Actor) -> i32 {
        if actor.crossed_threshold {
            return 4;
        }
        match actor.highest_mutation_level() {
            l if l >= 50 => 3,
            l if l >= 35 => 2,
            l if l >= 20 => 1,
            _ => 0,
        }
    }

    fn dream(actor: &Actor, ctx: &mut TickContext<'_>) {
        let strength = Self::dream_strength(actor);
        if strength == 0 || !ctx.every(3600 / strength as u64) || !ctx.rng.one_in(3) {
            return;
        }
        let Some((category, _)) = actor.dominant_mutation() else {
            return;
        };
        if let Some(text) = ctx.world.category_dream(category, strength) {
            ctx.emit(SimEventKind::Dream, text);
        }
    }

    fn light_wakes(actor: &Actor, ctx: &mut TickContext<'_>) -> bool {
        let light = ctx.world.light_level(actor.position);
        let drowsiness = ctx.rng.range(0, actor.fatigue.saturating_mul(10).saturating_abs());
        let tiredness = ctx.rng.range(5, 200).saturating_add(drowsiness);
        let too_bright = if actor.has_trait(Trait::Hibernate) {
            tiredness.saturating_mul(5) < light
        } else if actor.has_trait(Trait::HeavySleeper2) {
            tiredness.saturating_mul(5) < light.saturating_mul(4)
        } else {
            tiredness < light
        };
        if too_bright && (actor.fatigue < 10 || ctx.rng.one_in(actor.fatigue / 2)) {
            ctx.message(Tone::Neutral, "The light wakes you up.");
            return true;
        }
        false
    }

    fn temperature_wakes(actor: &Actor, ctx: &mut TickContext<'_>) -> bool {
        let half = actor.fatigue / 2;
        for region in BodyRegion::iter() {
            let temp = actor.temperature[region.index()];
            if temp < temperature::VERY_COLD - half {
                if ctx.rng.one_in(5000) {
                    ctx.message(Tone::Neutral, "You toss and turn trying to keep warm.");
                }
                if temp < temperature::FREEZING - half || ctx.rng.one_in(temp + 5000) {
                    ctx.message(Tone::Bad, "The cold wakes you up.");
                    return true;
                }
            } else if temp > temperature::VERY_HOT + half {
                if ctx.rng.one_in(5000) {
                    ctx.message(Tone::Neutral, "You toss and turn in the heat.");
                }
                if temp > temperature::SCORCHING + half || ctx.rng.one_in(15_000 - temp) {
                    ctx.message(Tone::Bad, "The heat wakes you up.");
                    return true;
                }
            }
        }
        false
    }
}

impl ConditionHandler for SleepRegulator {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        _bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        actor.moves = 0;

        let hibernating = ctx.every(HIBERNATION_GATE)
            && actor.has_trait(Trait::Hibernate)
            && actor.hunger < ENGORGED
            && actor.thirst < 80;
        if hibernating || ctx.every(SLEEP_GATE) {
            Self::recover(actor, inst, ctx, hibernating);
        }

        Self::metabolise(actor, ctx);
        Self::dream(actor, ctx);

        if Self::light_wakes(actor, ctx) || Self::temperature_wakes(actor, ctx) {
            return Lifecycle::Expired;
        }
        Lifecycle::Active
    }
}

/// A wake-up alarm that goes off as it runs out.
pub struct AlarmClock;

impl AlarmClock {
    const SNOOZE: Lifecycle = Lifecycle::Transition {
        next: ConditionKind::AlarmClock,
        duration: 100,
        intensity: 1,
        healed: false,
    };

    fn chronometer_dice(actor: &Actor) -> i32 {
        if actor.has_trait(Trait::HeavySleeper2) {
            6
        } else if actor.has_trait(Trait::HeavySleeper) {
            3
        } else {
            2
        }
    }
}

impl ConditionHandler for AlarmClock {
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        _bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle {
        if !actor.is_asleep() {
            if actor.has_condition(ConditionKind::LyingDown) {
                return Lifecycle::Active;
            }
            return Lifecycle::Expired;
        }
        if inst.duration != 1 {
            return Lifecycle::Active;
        }
        if actor.has_capability(Capability::InternalChronometer) {
            if ctx.rng.dice(Self::chronometer_dice(actor), 15) < 20 {
                ops::cure(actor, ctx, ConditionKind::Sleep, None);
                ctx.message(Tone::Neutral, "Your internal chronometer wakes you up.");
                return Lifecycle::Expired;
            }
            return Self::SNOOZE;
        }
        if !ctx.world.sound(actor.position, 12, "beep-beep-beep!") {
            return Self::SNOOZE;
        }
        ops::wake_up(actor, ctx);
        ctx.message(Tone::Neutral, "You turn off your alarm-clock.");
        Lifecycle::Expired
    }
}
