//! Common error infrastructure for fight-core.
//!
//! Game-rule refusals (an early counter-attack, an action without enough
//! breath) are not errors: they resolve to narrated no-op outcomes. The types
//! here cover misuse of the fight state machine by the caller.
//!
//! # Design Principles
//!
//! - **Type Safety**: each failure has its own variant with the ids involved
//! - **Severity Classification**: errors are categorized for recovery strategies

use crate::action::FightActionId;
use crate::fighter::FighterId;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: action submitted for the wrong fighter, unknown action id
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: executing a turn after the fight finished
    Internal,

    /// Fight state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all fight-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and assertions in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors surfaced by the [`Fight`](crate::engine::Fight) state machine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FightError {
    #[error("fight has already been started")]
    AlreadyStarted,

    #[error("fight is not running")]
    NotRunning,

    #[error("fighter {provided:?} tried to act while {expected:?} is playing")]
    ActorMismatch {
        expected: FighterId,
        provided: FighterId,
    },

    #[error("unknown fight action `{0}`")]
    UnknownAction(String),

    #[error("fighter {0:?} is not part of this fight")]
    UnknownFighter(FighterId),

    #[error("fighter {fighter:?} cannot use {action}")]
    ActionUnavailable {
        fighter: FighterId,
        action: FightActionId,
    },
}

impl GameError for FightError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyStarted | Self::NotRunning => ErrorSeverity::Internal,
            Self::ActorMismatch { .. }
            | Self::UnknownAction(_)
            | Self::UnknownFighter(_)
            | Self::ActionUnavailable { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyStarted => "FIGHT_ALREADY_STARTED",
            Self::NotRunning => "FIGHT_NOT_RUNNING",
            Self::ActorMismatch { .. } => "FIGHT_ACTOR_MISMATCH",
            Self::UnknownAction(_) => "FIGHT_UNKNOWN_ACTION",
            Self::UnknownFighter(_) => "FIGHT_UNKNOWN_FIGHTER",
            Self::ActionUnavailable { .. } => "FIGHT_ACTION_UNAVAILABLE",
        }
    }
}
