//! Inbound operations on an actor's conditions, and the side effects that
//! several handlers share.

use malady_core::{Actor, BodyRegion, ConditionInstance, ConditionKind, InflictMode, Inflicted, Trait};
use tracing::debug;

use crate::context::TickContext;
use crate::event::{SimEventKind, Tone};
use crate::rng::Roller;

/// A request to add a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Infliction {
    /// What to add.
    pub kind: ConditionKind,
    /// Initial duration.
    pub duration: i32,
    /// Initial intensity.
    pub intensity: i32,
    /// Target region; ignored for singleton kinds.
    pub region: Option<BodyRegion>,
    /// Merge into or replace an existing instance.
    pub mode: InflictMode,
}

impl Infliction {
    /// Whole-body, intensity 1, merging.
    pub fn new(kind: ConditionKind, duration: i32) -> Self {
        Self {
            kind,
            duration,
            intensity: 1,
            region: None,
            mode: InflictMode::Merge,
        }
    }

    /// Set the intensity.
    pub fn intensity(mut self, intensity: i32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Target a region.
    pub fn on(mut self, region: Option<BodyRegion>) -> Self {
        self.region = region;
        self
    }

    /// Overwrite instead of merging.
    pub fn replacing(mut self) -> Self {
        self.mode = InflictMode::Replace;
        self
    }
}

/// Add a condition. New conditions announce themselves through the catalog.
pub fn inflict(actor: &mut Actor, ctx: &mut TickContext<'_>, req: Infliction) -> Inflicted {
    let outcome = actor
        .conditions
        .inflict(req.kind, req.duration, req.intensity, req.region, req.mode);
    match outcome {
        Inflicted::Added => announce_gain(actor, ctx, req.kind, req.region),
        Inflicted::Superseded => {
            debug!(kind = req.kind.key(), region = ?req.region, "later wound stage present");
        }
        Inflicted::Merged | Inflicted::Replaced => {}
    }
    outcome
}

fn announce_gain(
    actor: &Actor,
    ctx: &mut TickContext<'_>,
    kind: ConditionKind,
    region: Option<BodyRegion>,
) {
    let catalog = ctx.catalog;
    let region = actor.conditions.get(kind, region).and_then(|i| i.region);
    ctx.emit(SimEventKind::Gained { kind, region }, catalog.name(kind));
    let descriptor = catalog.descriptor(kind);
    if !actor.is_npc {
        if let Some((tone, text)) = descriptor.gain_message {
            ctx.message(tone, text);
        }
        if let Some(memorial) = descriptor.gain_memorial {
            ctx.memorial(memorial);
        }
    }
    if let Some(handler) = catalog.handler(kind) {
        handler.on_gain(actor, ctx);
    }
}

/// Remove one condition. Returns `false` if it was not active.
pub fn cure(
    actor: &mut Actor,
    ctx: &mut TickContext<'_>,
    kind: ConditionKind,
    region: Option<BodyRegion>,
) -> bool {
    match actor.conditions.remove(kind, region) {
        Some(inst) => {
            announce_removal(actor, ctx, &inst);
            true
        }
        None => false,
    }
}

/// Remove every instance of `kind`, on every region. Returns how many went.
pub fn cure_all(actor: &mut Actor, ctx: &mut TickContext<'_>, kind: ConditionKind) -> usize {
    let removed = actor.conditions.remove_kind(kind);
    for inst in &removed {
        announce_removal(actor, ctx, inst);
    }
    removed.len()
}

/// Look up an active condition.
pub fn query(
    actor: &Actor,
    kind: ConditionKind,
    region: Option<BodyRegion>,
) -> Option<&ConditionInstance> {
    actor.conditions.get(kind, region)
}

/// Emit the end message and removal memorial for an instance that just left.
pub(crate) fn announce_removal(actor: &Actor, ctx: &mut TickContext<'_>, inst: &ConditionInstance) {
    debug!(kind = inst.kind.key(), region = ?inst.region, "condition removed");
    let catalog = ctx.catalog;
    ctx.emit(
        SimEventKind::Lost {
            kind: inst.kind,
            region: inst.region,
        },
        catalog.name(inst.kind),
    );
    if actor.is_npc {
        return;
    }
    let descriptor = catalog.descriptor(inst.kind);
    if let Some(text) = descriptor.end_message {
        ctx.message(Tone::Neutral, text);
    }
    if let Some(memorial) = descriptor.removal_memorial {
        ctx.memorial(memorial);
    }
}

/// Wake the actor: ends sleep and lying down.
pub fn wake_up(actor: &mut Actor, ctx: &mut TickContext<'_>) {
    cure(actor, ctx, ConditionKind::Sleep, None);
    cure(actor, ctx, ConditionKind::LyingDown, None);
}

/// Put the actor to sleep for `duration` ticks. Does nothing to a sleeper,
/// whose night keeps its length.
pub fn fall_asleep(actor: &mut Actor, ctx: &mut TickContext<'_>, duration: i32) -> bool {
    if actor.is_asleep() {
        return false;
    }
    inflict(actor, ctx, Infliction::new(ConditionKind::Sleep, duration));
    true
}

/// Throw up.
pub fn vomit(actor: &mut Actor, ctx: &mut TickContext<'_>) {
    if actor.is_npc {
        ctx.message(Tone::Neutral, format!("{} throws up heavily!", actor.name));
    } else {
        ctx.message(Tone::Bad, "You throw up heavily!");
    }
    actor.hunger += ctx.rng.range(30, 50);
    actor.thirst += ctx.rng.range(30, 50);
    actor.moves -= 100;
}

/// Whether a weak stomach turns this tick. Lower `chance` means more
/// likely.
pub fn will_vomit(actor: &Actor, rng: &mut dyn Roller, chance: i32) -> bool {
    let drunk = actor.has_condition(ConditionKind::Drunk);
    let antiemetic = actor.has_condition(ConditionKind::WeedHigh);
    let nausea = actor.has_trait(Trait::Nausea) && rng.one_in(chance * 2);
    let upset = actor.has_trait(Trait::WeakStomach) && rng.one_in(chance * 3);
    let suppressed = (actor.has_trait(Trait::StrongStomach) && rng.one_in(2))
        || (antiemetic && !drunk && !rng.one_in(chance));
    (nausea || upset) && !suppressed
}

/// [`will_vomit`] at the default odds.
pub fn will_vomit_default(actor: &Actor, rng: &mut dyn Roller) -> bool {
    will_vomit(actor, rng, 1000)
}

/// Cough loudly enough for neighbours to hear.
pub fn cough(actor: &mut Actor, ctx: &mut TickContext<'_>) {
    if actor.is_npc {
        ctx.message(Tone::Neutral, format!("{} coughs heavily.", actor.name));
    } else {
        ctx.message(Tone::Bad, "You cough heavily.");
    }
    ctx.world.sound(actor.position, 4, "a hacking cough.");
}
