//! Unified error types surfaced by the runtime API.
//!
//! Wraps rule violations from `fight-core` and failures of the external
//! collaborators so clients can bubble them up with consistent context.
use fight_core::{ErrorSeverity, FightError, FighterId, GameError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Fight(#[from] FightError),

    #[error("fighter {fighter} is already blocked ({reason})")]
    FighterBusy {
        fighter: FighterId,
        reason: BlockingReason,
    },

    #[error("action provider failed: {0}")]
    Provider(String),

    #[error("fight view failed: {0}")]
    View(String),

    #[error("mission tracker failed: {0}")]
    Mission(String),

    #[error("background worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Fight(err) => err.severity(),
            Self::FighterBusy { .. } => ErrorSeverity::Validation,
            Self::Provider(_) | Self::View(_) | Self::Mission(_) => ErrorSeverity::Internal,
            Self::WorkerJoin(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Fight(err) => err.error_code(),
            Self::FighterBusy { .. } => "RUNTIME_FIGHTER_BUSY",
            Self::Provider(_) => "RUNTIME_PROVIDER_FAILED",
            Self::View(_) => "RUNTIME_VIEW_FAILED",
            Self::Mission(_) => "RUNTIME_MISSION_FAILED",
            Self::WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
        }
    }
}

/// Why a fighter is blocked from joining other activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockingReason {
    Fight,
}

impl std::fmt::Display for BlockingReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BlockingReason::Fight => "fight",
        };
        write!(f, "{}", label)
    }
}
