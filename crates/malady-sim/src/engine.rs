use malady_core::{Actor, ConditionInstance, Decay, SnapshotEntry, StatBonusSet};
use tracing::{debug, trace};

use crate::context::TickContext;
use crate::event::SimEventKind;
use crate::handler::Lifecycle;
use crate::ops::{self, Infliction};

/// Advance every condition on `actor` by one tick and recompute its
/// effective attributes. Returns the tick's summed bonus.
///
/// Iteration walks a snapshot of keys taken up front, so handlers may add or
/// remove conditions freely. Instances added during the tick are first
/// processed on the next one. A dead actor is left untouched.
pub fn tick(actor: &mut Actor, ctx: &mut TickContext<'_>) -> StatBonusSet {
    let mut total = StatBonusSet::new();
    if actor.is_dead() {
        return total;
    }
    let catalog = ctx.catalog;

    for entry in actor.conditions.snapshot() {
        let Some(mut inst) = actor.conditions.checkout(&entry) else {
            trace!(kind = entry.key.kind.key(), "skipping condition removed mid-tick");
            continue;
        };

        let mut bonus = StatBonusSet::new();
        let lifecycle = match catalog.handler(inst.kind) {
            Some(handler) => handler.tick(actor, &mut inst, &mut bonus, ctx),
            None => Lifecycle::Active,
        };
        total += bonus;

        if actor.is_dead() {
            actor.conditions.commit(inst.clone());
            debug!(kind = inst.kind.key(), "actor died");
            ctx.emit(
                SimEventKind::Died {
                    cause: inst.kind.key().to_string(),
                },
                format!("{} died of {}.", actor.name, catalog.name(inst.kind)),
            );
            break;
        }

        settle(actor, ctx, &entry, inst, lifecycle);
    }

    for inst in actor.conditions.iter() {
        total.speed += catalog.speed_modifier(inst);
    }
    actor.apply_bonuses(&total);
    total
}

fn settle(
    actor: &mut Actor,
    ctx: &mut TickContext<'_>,
    entry: &SnapshotEntry,
    mut inst: ConditionInstance,
    lifecycle: Lifecycle,
) {
    match lifecycle {
        Lifecycle::Active => match inst.kind.decay() {
            Decay::Held => {
                actor.conditions.commit(inst);
            }
            Decay::Countdown => {
                inst.duration = (inst.duration - 1).max(0);
                if inst.duration > 0 {
                    actor.conditions.commit(inst);
                } else if let Some(gone) = actor.conditions.remove_entry(entry) {
                    ops::announce_removal(actor, ctx, &gone);
                }
            }
        },
        Lifecycle::Expired => {
            if let Some(gone) = actor.conditions.remove_entry(entry) {
                ops::announce_removal(actor, ctx, &gone);
            }
        }
        Lifecycle::Transition {
            next,
            duration,
            intensity,
            healed,
        } => {
            if actor.conditions.remove_entry(entry).is_none() {
                return;
            }
            debug!(
                from = inst.kind.key(),
                to = next.key(),
                region = ?inst.region,
                duration,
                "condition transition"
            );
            ctx.emit(
                SimEventKind::Transitioned {
                    from: inst.kind,
                    to: next,
                    region: inst.region,
                },
                format!("{} -> {}", inst.kind.key(), next.key()),
            );
            if healed
                && !actor.is_npc
                && let Some(memorial) = ctx.catalog.descriptor(inst.kind).removal_memorial
            {
                ctx.memorial(memorial);
            }
            if duration > 0 {
                ops::inflict(
                    actor,
                    ctx,
                    Infliction::new(next, duration)
                        .intensity(intensity)
                        .on(inst.region),
                );
            }
        }
    }
}
