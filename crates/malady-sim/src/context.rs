use crate::catalog::Catalog;
use crate::clock::SimClock;
use crate::event::{EventLog, SimEvent, SimEventKind, Tone};
use crate::rng::Roller;
use crate::world::World;

/// Everything a handler may touch besides the actor itself.
pub struct TickContext<'a> {
    /// Random source.
    pub rng: &'a mut dyn Roller,
    /// Surroundings.
    pub world: &'a mut dyn World,
    /// Where messages and state changes are recorded.
    pub events: &'a mut EventLog,
    /// Current tick and turn.
    pub clock: &'a SimClock,
    /// Names, text and handlers per kind.
    pub catalog: &'a Catalog,
}

impl TickContext<'_> {
    /// Emit a simulation event at the current tick.
    pub fn emit(&mut self, kind: SimEventKind, description: impl Into<String>) {
        self.events
            .push(SimEvent::new(self.clock.tick(), kind, description));
    }

    /// Emit a message for the actor.
    pub fn message(&mut self, tone: Tone, text: impl Into<String>) {
        self.emit(SimEventKind::Message { tone }, text);
    }

    /// Record a memorial line.
    pub fn memorial(&mut self, text: impl Into<String>) {
        self.emit(SimEventKind::Memorial, text);
    }

    /// The absolute game turn.
    pub fn turn(&self) -> u64 {
        self.clock.turn()
    }

    /// `true` on turns that are a multiple of `period`.
    pub fn every(&self, period: u64) -> bool {
        self.clock.every(period)
    }
}
