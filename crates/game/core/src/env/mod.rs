//! External sources consumed by the fight rules.
//!
//! Randomness is the only environment input of a fight: fighters and
//! configuration are passed explicitly, and every draw goes through
//! [`RngOracle`] so a duel can be replayed from its seed.
mod rng;

pub use rng::{PcgRng, RngOracle, SequenceRng};
