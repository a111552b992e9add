//! RNG oracle for deterministic random number generation.
//!
//! Every probabilistic decision of a fight (turn-order coin flip, critical
//! variance, alteration decay, monster action choice) draws from an
//! [`RngOracle`]. Nothing in the crate reads ambient randomness, so a fight
//! replays exactly from its seed.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed,
//! they must produce the same sequence of random numbers.

/// Random stream consumed by the fight rules.
pub trait RngOracle: Send {
    /// Draw the next uniform u32 value from the stream.
    fn next_u32(&mut self) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32()) % span) as u32
    }

    /// Signed variant of [`RngOracle::range`], inclusive on both ends.
    fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min)) as u64 + 1;
        (i64::from(min) + (u64::from(self.next_u32()) % span) as i64) as i32
    }

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&mut self) -> u32 {
        self.range(1, 100)
    }

    /// Biased boolean draw: true with `percent`% probability.
    ///
    /// `0` never succeeds and anything at or above `100` always succeeds.
    fn chance(&mut self, percent: u32) -> bool {
        if percent == 0 {
            return false;
        }
        if percent >= 100 {
            return true;
        }
        self.roll_d100() <= percent
    }

    /// Fair boolean draw.
    fn coin_flip(&mut self) -> bool {
        self.chance(50)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 32-bit output from 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same sequence
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a stream from a seed.
    ///
    /// The seed is avalanched first so that neighbouring seeds (0, 1, 2...)
    /// do not produce correlated first draws.
    pub fn new(seed: u64) -> Self {
        let mut hash = seed ^ 0x9e3779b97f4a7c15;
        hash ^= hash >> 33;
        hash = hash.wrapping_mul(0xff51afd7ed558ccd);
        hash ^= hash >> 33;
        Self { state: hash }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// Replays a fixed list of raw draws in a loop.
///
/// Used to pin a specific branch of a probabilistic rule in tests and
/// balance tools. An empty sequence always yields `0`.
#[derive(Clone, Debug, Default)]
pub struct SequenceRng {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// A stream whose every `chance()` roll succeeds (`roll_d100() == 1`).
    pub fn always_lucky() -> Self {
        Self::new([0])
    }

    /// A stream whose every `chance()` roll below 100% fails (`roll_d100() == 100`).
    pub fn never_lucky() -> Self {
        Self::new([99])
    }
}

impl RngOracle for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
