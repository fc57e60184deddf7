//! # Reply Pool Selection
//!
//! File: cli/src/bot/select.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Greetings, jokes, and the fallback replies each come from a small fixed
//! pool. Which entry is used is decided by a `Selector`, so tests can swap the
//! random choice for a scripted one.
//!
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses an index into a pool of `len` entries.
///
/// Implementations must return a value in `0..len` whenever `len > 0`.
pub trait Selector {
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Uniform selection backed by `StdRng`.
#[derive(Debug)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Seeds from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible selection, used by `--seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Selector for RandomSelector {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Picks one entry of `pool`, or `None` when the pool is empty.
pub fn pick_uniform<'a, T, S>(selector: &mut S, pool: &'a [T]) -> Option<&'a T>
where
    S: Selector + ?Sized,
{
    if pool.is_empty() {
        return None;
    }
    pool.get(selector.pick_index(pool.len()))
}

/// Replays a fixed list of indices, wrapping around. Test helper.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedSelector {
    picks: Vec<usize>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedSelector {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, cursor: 0 }
    }
}

#[cfg(test)]
impl Selector for ScriptedSelector {
    fn pick_index(&mut self, len: usize) -> usize {
        let pick = self.picks.get(self.cursor).copied().unwrap_or(0);
        self.cursor = (self.cursor + 1) % self.picks.len().max(1);
        pick % len.max(1)
    }
}
