//! Fight state machine.
//!
//! [`Fight`] owns both fighters, the turn counter and the lifecycle state. It
//! is synchronous and performs no I/O: the runtime drives it, collects human
//! input in between calls and forwards the returned records to the view.
//!
//! ```text
//! NotStarted --start()--> Running --(end condition / end())--> Finished
//!                          |   ^
//!              begin_turn()|   |execute_action() / forfeit_turn()
//!                          v   |
//!                       TurnStart
//! ```
//!
//! On turn `t`, `fighters[(t - 1) % 2]` plays and `fighters[t % 2]` defends.

mod records;
mod turns;

pub use records::{
    ConsumedPotion, FightResult, FightStart, FightState, PendingAction, TurnRecord, TurnStart,
    Winner,
};

use core::cmp::Ordering;

use crate::config::FightConfig;
use crate::env::RngOracle;
use crate::error::FightError;
use crate::fighter::{Fighter, FighterId, FighterStatus};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fight {
    fighters: [Fighter; 2],
    turn: u32,
    state: FightState,
    friendly: bool,
    config: FightConfig,
    result: Option<FightResult>,
    /// Start of the current turn, once resolved by `begin_turn`.
    turn_start: Option<TurnStart>,
}

impl Fight {
    /// Creates a fight that has not started yet.
    ///
    /// `friendly` fights keep potions in the inventory and report
    /// friendly-fight missions instead of ranked ones.
    pub fn new(first: Fighter, second: Fighter, friendly: bool, config: FightConfig) -> Self {
        Self {
            fighters: [first, second],
            turn: 1,
            state: FightState::NotStarted,
            friendly,
            config,
            result: None,
            turn_start: None,
        }
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn state(&self) -> FightState {
        self.state
    }

    pub fn is_friendly(&self) -> bool {
        self.friendly
    }

    pub fn config(&self) -> &FightConfig {
        &self.config
    }

    pub fn fighters(&self) -> &[Fighter; 2] {
        &self.fighters
    }

    pub fn fighter(&self, id: FighterId) -> Option<&Fighter> {
        self.fighters.iter().find(|fighter| fighter.id() == id)
    }

    pub fn fighter_mut(&mut self, id: FighterId) -> Option<&mut Fighter> {
        self.fighters.iter_mut().find(|fighter| fighter.id() == id)
    }

    /// Result of the fight, once finished.
    pub fn result(&self) -> Option<FightResult> {
        self.result
    }

    fn playing_index(&self) -> usize {
        ((self.turn - 1) % 2) as usize
    }

    /// Fighter acting this turn. Only defined while the fight is running.
    pub fn playing_fighter(&self) -> Option<&Fighter> {
        (self.state == FightState::Running).then(|| &self.fighters[self.playing_index()])
    }

    /// Fighter receiving this turn's action. Only defined while the fight is running.
    pub fn defending_fighter(&self) -> Option<&Fighter> {
        (self.state == FightState::Running).then(|| &self.fighters[1 - self.playing_index()])
    }

    /// Starts the fight: drinks potions, locks stat baselines and decides
    /// the turn order.
    ///
    /// The strictly faster fighter plays first; an exact speed tie is settled
    /// by a fair coin flip.
    pub fn start(&mut self, rng: &mut dyn RngOracle) -> Result<FightStart, FightError> {
        if self.state != FightState::NotStarted {
            return Err(FightError::AlreadyStarted);
        }

        let mut consumed_potions = Vec::new();
        for fighter in &mut self.fighters {
            if let Some(potion) = fighter.consume_potion_if_needed(self.friendly) {
                consumed_potions.push(ConsumedPotion {
                    fighter: fighter.id(),
                    potion,
                });
            }
            fighter.stats.lock_baseline();
        }

        let first_speed = self.fighters[0].stats.speed();
        let second_speed = self.fighters[1].stats.speed();
        let coin_flip = match second_speed.cmp(&first_speed) {
            Ordering::Greater => {
                self.invert_fighters();
                None
            }
            Ordering::Less => None,
            Ordering::Equal => {
                let flip = rng.coin_flip();
                if flip {
                    self.invert_fighters();
                }
                Some(flip)
            }
        };

        self.fighters[0].set_status(FighterStatus::Attacker);
        self.fighters[1].set_status(FighterStatus::Defender);
        self.turn = 1;
        self.state = FightState::Running;

        Ok(FightStart {
            first: self.fighters[0].id(),
            coin_flip,
            consumed_potions,
        })
    }

    fn invert_fighters(&mut self) {
        self.fighters.swap(0, 1);
    }

    /// Whether an end condition is met: turn cap, a dead or invalid fighter,
    /// or a fight that is no longer running.
    pub fn has_ended(&self) -> bool {
        self.turn >= self.config.max_turns
            || self.fighters.iter().any(Fighter::is_dead_or_bug)
            || self.state != FightState::Running
    }

    /// Finishes the fight and computes the winner. Calling it again returns
    /// the stored result.
    pub fn end(&mut self) -> FightResult {
        if let Some(result) = self.result {
            return result;
        }
        let result = FightResult {
            winner: self.compute_winner(),
            turns: self.turn,
        };
        self.state = FightState::Finished;
        self.result = Some(result);
        result
    }

    /// Dead fighters lose; only a double knockout is a draw.
    ///
    /// When both are still standing, the higher share of remaining fight
    /// points wins, then the higher remaining fight points, then the fighter
    /// that played first.
    fn compute_winner(&self) -> Winner {
        let [first, second] = &self.fighters;
        match (first.is_dead_or_bug(), second.is_dead_or_bug()) {
            (true, true) => Winner::Draw,
            (false, true) => Winner::Fighter(0),
            (true, false) => Winner::Fighter(1),
            (false, false) => {
                let by_ratio = first
                    .stats
                    .remaining_ratio()
                    .total_cmp(&second.stats.remaining_ratio());
                let by_points = first.stats.fight_points().cmp(&second.stats.fight_points());
                match by_ratio.then(by_points) {
                    Ordering::Less => Winner::Fighter(1),
                    Ordering::Greater | Ordering::Equal => Winner::Fighter(0),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
