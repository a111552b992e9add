//! Event types for different topics.

use fight_core::{AlterationOutcome, ConsumedPotion, FightResult, FighterId, TurnRecord};
use serde::{Deserialize, Serialize};

/// Fight lifecycle events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FightEvent {
    /// Turn order decided and potions consumed.
    Started {
        /// Fighters in turn order: `fighters[0]` acts on turn 1.
        fighters: [FighterId; 2],
        friendly: bool,
        coin_flip: Option<bool>,
        consumed_potions: Vec<ConsumedPotion>,
    },

    /// The fight reached its terminal state.
    Ended {
        fighters: [FighterId; 2],
        result: FightResult,
    },
}

/// Per-turn events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TurnEvent {
    /// An alteration ran at the start of its owner's turn.
    AlterationTriggered {
        turn: u32,
        fighter: FighterId,
        outcome: AlterationOutcome,
    },

    /// An action (or a lost turn) was resolved.
    Resolved {
        record: TurnRecord,
        /// English rendering of the outcome, as sent to the view.
        narration: String,
    },
}
