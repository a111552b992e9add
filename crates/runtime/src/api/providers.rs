//! Asynchronous abstraction for sourcing a fighter's next action.
//!
//! Runtime users plug in [`ActionProvider`] implementations so fights can run
//! with human input (a chat menu, a terminal prompt), scripted fixtures, or
//! automatic play. The controller bounds every call with the collector
//! timeout and falls back to the configured default action.
use async_trait::async_trait;
use fight_core::{Fight, FightActionId, Fighter};

use super::errors::Result;

/// Trait for choosing the action of a fighter whose turn awaits input.
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Choose an action for `fighter` given a read-only view of the fight.
    ///
    /// Returning an action the fighter cannot use, an error, or not returning
    /// before the collector timeout all resolve to the default action.
    async fn select_fight_action(&self, fighter: &Fighter, fight: &Fight)
    -> Result<FightActionId>;
}

/// Provider that never answers with a real move.
///
/// Useful for tests or as a fallback: every turn resolves to the default
/// "no response" action.
pub struct IdleActionProvider;

#[async_trait]
impl ActionProvider for IdleActionProvider {
    async fn select_fight_action(
        &self,
        _fighter: &Fighter,
        fight: &Fight,
    ) -> Result<FightActionId> {
        Ok(fight.config().default_action)
    }
}
