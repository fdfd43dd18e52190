//! Injectable random number source.
//!
//! Every random draw in the pipeline goes through [`RandomSource`], so callers
//! choose the generator: `rand::thread_rng()` in production, a seeded
//! `StdRng` for reproducible runs, or [`ScriptedRandom`] to dictate each draw.

use rand::Rng;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns an integer in `min..=max`.
    ///
    /// When `max <= min` the range is degenerate and `min` is returned.
    fn between(&mut self, min: i64, max: i64) -> i64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn between(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        self.gen_range(min..=max)
    }
}

/// Replays a fixed sequence of values.
///
/// Each draw takes the next scripted value and clamps it into the requested
/// range. Once the script runs out, the last value repeats; an empty script
/// always yields the lower bound.
///
/// # Example
///
/// ```
/// use attendance_scheduler::scheduling::{RandomSource, ScriptedRandom};
///
/// let mut rng = ScriptedRandom::new([10, 500]);
/// assert_eq!(rng.between(0, 30), 10);
/// assert_eq!(rng.between(0, 30), 30); // clamped
/// assert_eq!(rng.between(0, 30), 30); // last value repeats
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: Vec<i64>,
    position: usize,
}

impl ScriptedRandom {
    /// Creates a source that replays `values` in order.
    pub fn new<I: IntoIterator<Item = i64>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
            position: 0,
        }
    }

    /// A source whose every draw is the lower bound of the requested range.
    pub fn lowest() -> Self {
        Self::new([i64::MIN])
    }

    /// A source whose every draw is the upper bound of the requested range.
    pub fn highest() -> Self {
        Self::new([i64::MAX])
    }
}

impl RandomSource for ScriptedRandom {
    fn between(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let value = match self.values.get(self.position) {
            Some(v) => {
                self.position += 1;
                *v
            }
            None => self.values.last().copied().unwrap_or(min),
        };
        value.clamp(min, max)
    }
}
