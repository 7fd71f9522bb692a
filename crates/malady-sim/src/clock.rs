/// Tracks simulation time: ticks elapsed since the run began, and the
/// absolute game turn that periodic gates are keyed on.
#[derive(Debug, Clone)]
pub struct SimClock {
    tick: u64,
    start_turn: u64,
}

impl SimClock {
    /// Create a new clock at tick 0, positioned at `start_turn`.
    pub fn new(start_turn: u64) -> Self {
        Self {
            tick: 0,
            start_turn,
        }
    }

    /// Advance the clock by one tick. Returns the new tick number.
    pub fn advance(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Return the current tick number.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// The absolute game turn.
    pub fn turn(&self) -> u64 {
        self.start_turn + self.tick
    }

    /// `true` on turns that are a multiple of `period`. A zero period never
    /// fires.
    pub fn every(&self, period: u64) -> bool {
        period != 0 && self.turn() % period == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_initial_state() {
        let clock = SimClock::new(0);
        assert_eq!(clock.tick(), 0);
        assert_eq!(clock.turn(), 0);
    }

    #[test]
    fn clock_advance_moves_turn() {
        let mut clock = SimClock::new(49);
        assert!(!clock.every(50));
        assert_eq!(clock.advance(), 1);
        assert_eq!(clock.turn(), 50);
        assert!(clock.every(50));
        assert!(!clock.every(0));
    }
}
