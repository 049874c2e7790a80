//! Randomness seam for the turn engine.
//!
//! Every draw the engine makes goes through [`Dice`], so a session can run on
//! OS entropy while tests substitute seeded generators or [`ScriptedDice`].
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use std::collections::VecDeque;

/// Source of the three kinds of draw the engine needs.
pub trait Dice {
    /// Uniform integer in `low..=high`.
    fn int(&mut self, low: i32, high: i32) -> i32;

    /// Uniform real in `low..=high`.
    fn real(&mut self, low: f64, high: f64) -> f64;

    /// `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
}

impl<R> Dice for R
where
    R: Rng + ?Sized,
{
    fn int(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.gen_range(low..=high)
    }

    fn real(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.gen_range(low..=high)
    }

    fn chance(&mut self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        self.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

/// Generator used by interactive sessions.
pub type SessionRng = CountingRng<SmallRng>;

impl CountingRng<SmallRng> {
    /// Seed from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::wrap(SmallRng::from_entropy())
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::wrap(SmallRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> CountingRng<R> {
    pub const fn wrap(rng: R) -> Self {
        Self { rng, draws: 0 }
    }

    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: RngCore> RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

/// Dice that replay queued outcomes, one queue per draw kind.
///
/// Queued values are clamped into the requested range. An exhausted queue
/// answers with the lowest value of the range (or `false` for chances).
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    ints: VecDeque<i32>,
    reals: VecDeque<f64>,
    chances: VecDeque<bool>,
}

impl ScriptedDice {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ints(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.ints.extend(values);
        self
    }

    #[must_use]
    pub fn with_reals(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.reals.extend(values);
        self
    }

    #[must_use]
    pub fn with_chances(mut self, values: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(values);
        self
    }

    /// Whether every queued outcome has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.ints.is_empty() && self.reals.is_empty() && self.chances.is_empty()
    }
}

impl Dice for ScriptedDice {
    fn int(&mut self, low: i32, high: i32) -> i32 {
        self.ints
            .pop_front()
            .map_or(low, |value| value.clamp(low, high.max(low)))
    }

    fn real(&mut self, low: f64, high: f64) -> f64 {
        self.reals
            .pop_front()
            .map_or(low, |value| value.clamp(low, high.max(low)))
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}
