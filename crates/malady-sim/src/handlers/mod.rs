//! Built-in condition handlers, grouped by what causes the condition.
//!
//! The wound chain and the sleep family are large enough to live in their own
//! modules ([`crate::wound`], [`crate::sleep`]); everything else is here.

pub mod affliction;
pub mod illness;
pub mod substance;

use malady_core::{BodyRegion, ConditionKind};

use crate::handler::ConditionHandler;
use crate::{sleep, wound};

/// The built-in handler for `kind`, or `None` for kinds that only carry
/// catalog text.
pub fn builtin(kind: ConditionKind) -> Option<Box<dyn ConditionHandler>> {
    use ConditionKind as K;
    let handler: Box<dyn ConditionHandler> = match kind {
        K::CommonCold => Box::new(illness::CommonCold),
        K::Flu => Box::new(illness::Flu),
        K::Tapeworm => Box::new(illness::Tapeworm),
        K::Bloodworms => Box::new(illness::Bloodworms),
        K::Brainworm => Box::new(illness::Brainworm),
        K::Paincysts => Box::new(illness::Paincysts),
        K::Tetanus => Box::new(illness::Tetanus),
        K::Crushed => Box::new(illness::Crushed),

        K::Drunk => Box::new(substance::Drunk),
        K::Cig => Box::new(substance::Cig),
        K::High => Box::new(substance::High),
        K::WeedHigh => Box::new(substance::WeedHigh),
        K::Datura => Box::new(substance::Datura),
        K::TookXanax | K::Valium => Box::new(substance::Sedative),
        K::Adrenaline => Box::new(substance::Adrenaline),
        K::Jetinjector => Box::new(substance::Jetinjector),
        K::Asthma => Box::new(substance::Asthma),
        K::Grack => Box::new(substance::Grack),
        K::Meth => Box::new(substance::Meth),

        K::Formication => Box::new(affliction::Formication),
        K::StemcellTreatment => Box::new(affliction::StemcellTreatment),
        K::Teleglow => Box::new(affliction::Teleglow),
        K::Attention => Box::new(affliction::Attention),
        K::Evil => Box::new(affliction::Evil),
        K::LackSleep => Box::new(affliction::LackSleep),
        K::Grabbed => Box::new(affliction::Grabbed),

        K::LyingDown => Box::new(sleep::LyingDown),
        K::Sleep => Box::new(sleep::SleepRegulator),
        K::AlarmClock => Box::new(sleep::AlarmClock),

        K::Bite => Box::new(wound::Bite),
        K::Infected => Box::new(wound::Infected),
        K::Recover => Box::new(wound::Recover),

        K::TookProzac | K::Amigara | K::AskedToTrain | K::AskedPersonalInfo => return None,
    };
    Some(handler)
}

/// Region name as it appears at the end of a status label. Only the six
/// main regions are named.
pub(crate) fn label_region(region: Option<BodyRegion>) -> &'static str {
    region
        .filter(|r| BodyRegion::main_regions().any(|m| m == *r))
        .map_or("", BodyRegion::display_name)
}

/// Region name as it appears inside a sentence.
pub(crate) fn prose_region(region: Option<BodyRegion>, whole: &str) -> String {
    region.map_or_else(|| whole.to_string(), |r| r.display_name().to_lowercase())
}

#[cfg(test)]
pub(crate) mod testing {
    use malady_core::{Actor, ConditionInstance, ConditionKind, StatBonusSet};

    use crate::catalog::Catalog;
    use crate::clock::SimClock;
    use crate::context::TickContext;
    use crate::event::EventLog;
    use crate::handler::{ConditionHandler, Lifecycle};
    use crate::rng::FixedRoller;
    use crate::world::StaticWorld;

    /// Runs a single handler outside the dispatcher.
    pub(crate) struct Bench {
        pub rng: FixedRoller,
        pub world: StaticWorld,
        pub events: EventLog,
        pub clock: SimClock,
    }

    impl Bench {
        pub fn new(rng: FixedRoller, turn: u64) -> Self {
            Self {
                rng,
                world: StaticWorld::new(),
                events: EventLog::new(0),
                clock: SimClock::new(turn),
            }
        }

        pub fn ctx(&mut self) -> TickContext<'_> {
            TickContext {
                rng: &mut self.rng,
                world: &mut self.world,
                events: &mut self.events,
                clock: &self.clock,
                catalog: Catalog::global(),
            }
        }

        pub fn run(
            &mut self,
            handler: &dyn ConditionHandler,
            actor: &mut Actor,
            kind: ConditionKind,
            duration: i32,
        ) -> (StatBonusSet, Lifecycle) {
            self.run_inst(handler, actor, ConditionInstance::new(kind, duration, 1, None))
        }

        pub fn run_inst(
            &mut self,
            handler: &dyn ConditionHandler,
            actor: &mut Actor,
            mut inst: ConditionInstance,
        ) -> (StatBonusSet, Lifecycle) {
            let mut bonus = StatBonusSet::new();
            let life = handler.tick(actor, &mut inst, &mut bonus, &mut self.ctx());
            (bonus, life)
        }
    }
}
