//! Combat resolution functions.
//!
//! Pure helpers used by fight actions and alterations. Randomness is only
//! consumed by [`apply_secondary_effects`], through the caller's [`RngOracle`].
//!
//! [`RngOracle`]: crate::env::RngOracle

pub mod damage;

pub use damage::{
    AttackInfo, AttackStatus, StatPair, StatsInfo, apply_secondary_effects, get_attack_damage,
    get_attack_status, interval_value,
};
