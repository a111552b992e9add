//! Deterministic duel rules shared by the runtime and offline tools.
//!
//! `fight-core` defines the canonical fight rules (fighters, actions,
//! alterations, damage formula) and exposes pure APIs with no I/O. All fight
//! state mutation flows through [`engine::Fight`], and randomness is always
//! drawn from a caller-provided [`env::RngOracle`].
pub mod action;
pub mod alteration;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod fighter;
pub mod stats;

pub use action::{
    ActionContext, ActionOutcome, ActionResult, FailReason, FightAction, FightActionId,
    SideEffect, Target,
};
pub use alteration::{AlterationEffect, AlterationId, AlterationOutcome, FightAlteration};
pub use combat::{AttackInfo, AttackStatus, StatPair, StatsInfo};
pub use config::{AlterationTuning, DamageTuning, FightConfig};
pub use engine::{
    ConsumedPotion, Fight, FightResult, FightStart, FightState, PendingAction, TurnRecord,
    TurnStart, Winner,
};
pub use env::{PcgRng, RngOracle, SequenceRng};
pub use error::{ErrorSeverity, FightError, GameError};
pub use fighter::{
    FightPotion, Fighter, FighterId, FighterKind, FighterStatus, MonsterAttack, PotionNature,
};
pub use stats::{
    BaseStats, ModifierLedger, ModifierOperation, ModifierOrigin, StatKind, StatModifier, StatSet,
    StatSnapshot,
};
