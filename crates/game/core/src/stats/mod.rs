//! Stat model of a fighter.
//!
//! # Architecture
//!
//! ```text
//! [ BaseStats (persistent input) ]
//!      ↓  ModifierLedger::reduce
//! [ Effective stats (computed) ]      [ fight points / breath (stored) ]
//! ```
//!
//! ## Principles
//!
//! 1. **Single reducer**: effective values only come from `base + ledger`
//! 2. **Attribution**: every temporary change records its origin
//! 3. **Clamped currents**: fight points and breath never leave their bounds

pub mod core;
pub mod modifiers;

pub use core::{BaseStats, StatKind, StatSet, StatSnapshot};
pub use modifiers::{ModifierLedger, ModifierOperation, ModifierOrigin, StatModifier};
