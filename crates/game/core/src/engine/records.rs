//! Values reported by the [`Fight`](super::Fight) state machine.

use crate::action::{ActionOutcome, FailReason, FightActionId};
use crate::alteration::AlterationOutcome;
use crate::fighter::{FightPotion, FighterId};

/// Lifecycle of a fight. `Finished` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FightState {
    NotStarted,
    Running,
    Finished,
}

/// Winner of a finished fight, as a position in the fighter array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    Fighter(usize),
    Draw,
}

impl Winner {
    /// Index reported for a draw.
    pub const DRAW_SENTINEL: u8 = 2;

    /// `0` or `1` for a fighter, [`Self::DRAW_SENTINEL`] for a draw.
    pub fn index(self) -> u8 {
        match self {
            Self::Fighter(index) => index as u8,
            Self::Draw => Self::DRAW_SENTINEL,
        }
    }

    pub fn is_draw(self) -> bool {
        matches!(self, Self::Draw)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FightResult {
    pub winner: Winner,
    /// Value of the turn counter when the fight ended.
    pub turns: u32,
}

/// Potion drunk by a fighter at fight start; the caller removes it from the inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumedPotion {
    pub fighter: FighterId,
    pub potion: FightPotion,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FightStart {
    /// Fighter acting on turn 1.
    pub first: FighterId,
    /// Result of the tie-break draw, when both fighters were equally fast.
    pub coin_flip: Option<bool>,
    pub consumed_potions: Vec<ConsumedPotion>,
}

/// What must happen next for the playing fighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PendingAction {
    /// The action is known and can be executed right away.
    Queued(FightActionId),
    /// A human fighter has to choose.
    AwaitInput,
    /// The fighter loses its turn.
    Forfeit(FailReason),
    /// The start of the turn ended the fight.
    FightOver(FightResult),
}

/// Start of a turn: alteration resolution and the pending action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnStart {
    pub turn: u32,
    pub actor: FighterId,
    pub alteration: Option<AlterationOutcome>,
    pub pending: PendingAction,
}

/// A resolved turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnRecord {
    pub turn: u32,
    pub actor: FighterId,
    pub outcome: ActionOutcome,
    /// Set when this turn ended the fight.
    pub ended: Option<FightResult>,
}
