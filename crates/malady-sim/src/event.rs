use malady_core::{BodyRegion, ConditionKind, Position};

use crate::world::MonsterGroup;

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Plain narration.
    Neutral,
    /// Something went well.
    Good,
    /// Something went badly.
    Bad,
    /// Something needs attention.
    Warning,
    /// Background information.
    Info,
}

/// What kind of simulation event occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEventKind {
    /// A message for the actor.
    Message {
        /// Presentation hint.
        tone: Tone,
    },
    /// A line for the actor's memorial log.
    Memorial,

    // Lifecycle
    /// A condition was added.
    Gained {
        /// The new condition.
        kind: ConditionKind,
        /// Where it took hold.
        region: Option<BodyRegion>,
    },
    /// A condition ended or was cured.
    Lost {
        /// The removed condition.
        kind: ConditionKind,
        /// Where it was.
        region: Option<BodyRegion>,
    },
    /// A condition turned into its successor.
    Transitioned {
        /// The condition that ended.
        from: ConditionKind,
        /// The condition that replaced it.
        to: ConditionKind,
        /// The region both live on.
        region: Option<BodyRegion>,
    },
    /// The actor died.
    Died {
        /// The cause of death.
        cause: String,
    },

    // World
    /// A monster was summoned.
    Spawned {
        /// Which group.
        group: MonsterGroup,
        /// Where it appeared.
        at: Position,
    },
    /// The actor was moved.
    Teleported {
        /// Old position.
        from: Position,
        /// New position.
        to: Position,
    },
    /// The actor dreamt.
    Dream,
}

impl SimEventKind {
    /// Check whether a given condition kind is involved in this event.
    pub fn concerns(&self, condition: ConditionKind) -> bool {
        match self {
            Self::Gained { kind, .. } | Self::Lost { kind, .. } => *kind == condition,
            Self::Transitioned { from, to, .. } => *from == condition || *to == condition,
            _ => false,
        }
    }
}

/// A record of something that happened during simulation.
#[derive(Debug, Clone)]
pub struct SimEvent {
    /// The simulation tick when this event occurred.
    pub tick: u64,
    /// The specific kind of event that occurred.
    pub kind: SimEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl SimEvent {
    /// Create a new simulation event with the given tick, kind, and description.
    pub fn new(tick: u64, kind: SimEventKind, description: impl Into<String>) -> Self {
        Self {
            tick,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during a simulation run.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<SimEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Return all events that occurred at the given tick.
    pub fn events_at_tick(&self, tick: u64) -> Vec<&SimEvent> {
        self.events.iter().filter(|e| e.tick == tick).collect()
    }

    /// Return all lifecycle events involving the given condition kind.
    pub fn events_for_condition(&self, kind: ConditionKind) -> Vec<&SimEvent> {
        self.events.iter().filter(|e| e.kind.concerns(kind)).collect()
    }

    /// Whether any message has exactly this text.
    pub fn contains_message(&self, text: &str) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e.kind, SimEventKind::Message { .. }) && e.description == text)
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(tick: u64, text: &str) -> SimEvent {
        SimEvent::new(tick, SimEventKind::Message { tone: Tone::Neutral }, text)
    }

    #[test]
    fn event_log_push_and_query() {
        let mut log = EventLog::new(0);
        log.push(SimEvent::new(
            1,
            SimEventKind::Gained {
                kind: ConditionKind::Flu,
                region: None,
            },
            "flu",
        ));
        assert_eq!(log.len(), 1);
        assert_eq!(log.events_at_tick(1).len(), 1);
        assert_eq!(log.events_for_condition(ConditionKind::Flu).len(), 1);
        assert!(log.events_for_condition(ConditionKind::Drunk).is_empty());
    }

    #[test]
    fn event_log_max_events_trims() {
        let mut log = EventLog::new(2);
        for i in 0..5 {
            log.push(message(i, "tick"));
        }
        assert_eq!(log.len(), 2);
        // Oldest events were dropped, newest remain
        assert_eq!(log.events()[0].tick, 3);
        assert_eq!(log.events()[1].tick, 4);
    }

    #[test]
    fn transition_concerns_both_ends() {
        let kind = SimEventKind::Transitioned {
            from: ConditionKind::Bite,
            to: ConditionKind::Infected,
            region: Some(BodyRegion::ArmL),
        };
        assert!(kind.concerns(ConditionKind::Bite));
        assert!(kind.concerns(ConditionKind::Infected));
        assert!(!kind.concerns(ConditionKind::Recover));
        assert!(!SimEventKind::Memorial.concerns(ConditionKind::Bite));
    }

    #[test]
    fn contains_message_ignores_memorials() {
        let mut log = EventLog::new(0);
        log.push(SimEvent::new(1, SimEventKind::Memorial, "Died of infection."));
        log.push(message(1, "You wake up."));
        assert!(log.contains_message("You wake up."));
        assert!(!log.contains_message("Died of infection."));
        log.clear();
        assert!(log.is_empty());
    }
}
