use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The random source handlers draw from.
///
/// Only [`Roller::range`] is required; the probability helpers are defined
/// in terms of it, so a test double that pins `range` pins every outcome.
pub trait Roller {
    /// Uniform integer in `lo..=hi`. Bounds may be given in either order.
    fn range(&mut self, lo: i32, hi: i32) -> i32;

    /// `true` with probability `1/n`. Always `true` for `n <= 1`.
    fn one_in(&mut self, n: i32) -> bool {
        n <= 1 || self.range(1, n) == 1
    }

    /// `true` with probability `x/y`. Always `true` for `x >= y`, never for
    /// `x <= 0`.
    fn x_in_y(&mut self, x: i32, y: i32) -> bool {
        if x >= y {
            return true;
        }
        x > 0 && self.range(1, y) <= x
    }

    /// Sum of `count` dice with `sides` faces each.
    fn dice(&mut self, count: i32, sides: i32) -> i32 {
        if sides < 1 {
            return 0;
        }
        (0..count).map(|_| self.range(1, sides)).sum()
    }
}

fn ordered(lo: i32, hi: i32) -> (i32, i32) {
    if lo <= hi { (lo, hi) } else { (hi, lo) }
}

/// A deterministic [`Roller`] over a seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededRoller(StdRng);

impl SeededRoller {
    /// Seed a new roller.
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Roller for SeededRoller {
    fn range(&mut self, lo: i32, hi: i32) -> i32 {
        let (lo, hi) = ordered(lo, hi);
        self.0.random_range(lo..=hi)
    }
}

/// A [`Roller`] that always lands on one end of the range.
///
/// `Low` makes every `one_in` and positive `x_in_y` succeed; `High` makes
/// them fail whenever failure is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedRoller {
    /// Always the lower bound.
    Low,
    /// Always the upper bound.
    High,
}

impl Roller for FixedRoller {
    fn range(&mut self, lo: i32, hi: i32) -> i32 {
        let (lo, hi) = ordered(lo, hi);
        match self {
            Self::Low => lo,
            Self::High => hi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_roller_is_deterministic() {
        let mut a = SeededRoller::new(42);
        let mut b = SeededRoller::new(42);
        let xs: Vec<i32> = (0..20).map(|_| a.range(1, 100)).collect();
        let ys: Vec<i32> = (0..20).map(|_| b.range(1, 100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn range_stays_in_bounds_either_order() {
        let mut rng = SeededRoller::new(7);
        for _ in 0..500 {
            let v = rng.range(10, -4);
            assert!((-4..=10).contains(&v));
        }
    }

    #[test]
    fn one_in_degenerate_denominators_are_certain() {
        let mut rng = FixedRoller::High;
        assert!(rng.one_in(1));
        assert!(rng.one_in(0));
        assert!(rng.one_in(-50));
        assert!(!rng.one_in(2));
    }

    #[test]
    fn x_in_y_edges() {
        let mut low = FixedRoller::Low;
        let mut high = FixedRoller::High;
        assert!(high.x_in_y(5, 5));
        assert!(!low.x_in_y(0, 100));
        assert!(low.x_in_y(1, 100));
        assert!(!high.x_in_y(99, 100));
    }

    #[test]
    fn dice_sum_bounds() {
        assert_eq!(FixedRoller::Low.dice(3, 100), 3);
        assert_eq!(FixedRoller::High.dice(3, 100), 300);
        assert_eq!(FixedRoller::High.dice(2, 0), 0);
        let mut rng = SeededRoller::new(1);
        for _ in 0..100 {
            let v = rng.dice(2, 6);
            assert!((2..=12).contains(&v));
        }
    }

    #[test]
    fn one_in_frequency_is_plausible() {
        let mut rng = SeededRoller::new(99);
        let hits = (0..10_000).filter(|_| rng.one_in(10)).count();
        assert!((700..1300).contains(&hits), "hits = {hits}");
    }
}
