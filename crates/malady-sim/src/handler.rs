use malady_core::{Actor, ConditionInstance, ConditionKind, StatBonusSet};

use crate::context::TickContext;

/// What should happen to an instance after its handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Keep it; the dispatcher applies the kind's decay.
    Active,
    /// Remove it now. The end message and removal memorial fire.
    Expired,
    /// Remove it and put `next` on the same region.
    Transition {
        /// The successor kind.
        next: ConditionKind,
        /// Initial duration of the successor.
        duration: i32,
        /// Initial intensity of the successor.
        intensity: i32,
        /// Whether the source was healed rather than having worsened. Healed
        /// sources still record their removal memorial.
        healed: bool,
    },
}

impl Lifecycle {
    /// The condition worsens into `next`.
    pub fn progress(next: ConditionKind, duration: i32) -> Self {
        Self::Transition {
            next,
            duration,
            intensity: 1,
            healed: false,
        }
    }

    /// The condition is healed, leaving `next` behind.
    pub fn heal_into(next: ConditionKind, duration: i32) -> Self {
        Self::Transition {
            next,
            duration,
            intensity: 1,
            healed: true,
        }
    }
}

/// Per-kind behaviour.
///
/// `tick` may read and write the actor freely, including inflicting or
/// curing other conditions; it must not touch `inst` through the actor,
/// since `inst` is a checked-out copy that the dispatcher writes back.
pub trait ConditionHandler: Send + Sync {
    /// Run one tick.
    fn tick(
        &self,
        actor: &mut Actor,
        inst: &mut ConditionInstance,
        bonus: &mut StatBonusSet,
        ctx: &mut TickContext<'_>,
    ) -> Lifecycle;

    /// Status label, at most 26 characters. `None` uses the catalog name.
    fn label(&self, _inst: &ConditionInstance, _actor: &Actor) -> Option<String> {
        None
    }

    /// Longer description with the current numbers filled in.
    fn description(&self, _inst: &ConditionInstance) -> Option<String> {
        None
    }

    /// Speed delta while active.
    fn speed_modifier(&self, _inst: &ConditionInstance) -> i32 {
        0
    }

    /// Extra reaction when the condition is first gained, after the
    /// catalog's gain message.
    fn on_gain(&self, _actor: &Actor, _ctx: &mut TickContext<'_>) {}
}
