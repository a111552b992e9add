//! Presentation port for fights.
//!
//! The chat platform, a terminal, or a test recorder implement [`FightView`].
//! Every call is best-effort: the controller logs failures and keeps going.
use async_trait::async_trait;
use fight_core::{Fight, Fighter};

use super::errors::Result;

#[async_trait]
pub trait FightView: Send + Sync {
    /// Announces the two fighters before the first turn.
    async fn introduce_fight(&self, first: &Fighter, second: &Fighter) -> Result<()>;

    /// Renders both fighters' current stats at the start of a turn.
    async fn display_fight_status(&self, fight: &Fight) -> Result<()>;

    /// Appends one line to the fight history.
    async fn update_history(&self, emoji: &str, actor_mention: &str, narration: &str)
    -> Result<()>;

    /// Closes the fight. The loser is passed first so the winner is
    /// announced last; on a draw the order carries no meaning.
    async fn outro_fight(&self, loser: &Fighter, winner: &Fighter, is_draw: bool) -> Result<()>;
}

/// View that discards everything.
pub struct NullView;

#[async_trait]
impl FightView for NullView {
    async fn introduce_fight(&self, _first: &Fighter, _second: &Fighter) -> Result<()> {
        Ok(())
    }

    async fn display_fight_status(&self, _fight: &Fight) -> Result<()> {
        Ok(())
    }

    async fn update_history(
        &self,
        _emoji: &str,
        _actor_mention: &str,
        _narration: &str,
    ) -> Result<()> {
        Ok(())
    }

    async fn outro_fight(&self, _loser: &Fighter, _winner: &Fighter, _is_draw: bool) -> Result<()> {
        Ok(())
    }
}
