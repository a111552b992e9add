use crate::action::{ActionContext, ActionOutcome, FailReason, FightActionId};
use crate::env::RngOracle;
use crate::error::FightError;
use crate::fighter::{Fighter, FighterId};

use super::{Fight, FightState, PendingAction, TurnRecord, TurnStart};

/// Splits the fighter array into (acting, other).
fn pair_mut(fighters: &mut [Fighter; 2], acting: usize) -> (&mut Fighter, &mut Fighter) {
    let [first, second] = fighters;
    if acting == 0 {
        (first, second)
    } else {
        (second, first)
    }
}

/// Turn resolution methods for Fight.
impl Fight {
    /// Prepares the playing fighter's turn.
    ///
    /// Triggers its alteration, then reports what it is going to do: a queued
    /// or planned action, a request for input, a lost turn, or the end of the
    /// fight when the alteration (or a prior state) ended it.
    ///
    /// The turn start is resolved once: calling it again before the turn is
    /// executed or forfeited returns the same [`TurnStart`] without
    /// re-triggering the alteration.
    pub fn begin_turn(&mut self, rng: &mut dyn RngOracle) -> Result<TurnStart, FightError> {
        self.ensure_running()?;

        let turn = self.turn;
        if let Some(start) = &self.turn_start
            && start.turn == turn
        {
            return Ok(start.clone());
        }

        let acting = self.playing_index();
        let actor = self.fighters[acting].id();

        let alteration = {
            let (victim, opponent) = pair_mut(&mut self.fighters, acting);
            let mut ctx = ActionContext::new(turn, &self.config, rng);
            victim.trigger_alteration(opponent, &mut ctx)
        };

        let pending = if self.has_ended() {
            PendingAction::FightOver(self.end())
        } else if alteration.is_some_and(|outcome| outcome.prevents_action()) {
            PendingAction::Forfeit(FailReason::Paralyzed)
        } else {
            let fighter = &mut self.fighters[acting];
            match fighter.take_next_action() {
                Some(action) => PendingAction::Queued(action),
                None if fighter.is_player() => PendingAction::AwaitInput,
                None => PendingAction::Queued(
                    fighter
                        .plan_action(rng)
                        .unwrap_or(self.config.default_action),
                ),
            }
        };

        let start = TurnStart {
            turn,
            actor,
            alteration,
            pending,
        };
        self.turn_start = Some(start.clone());
        Ok(start)
    }

    /// Resolves `action` for the playing fighter.
    ///
    /// # Errors
    ///
    /// - [`FightError::NotRunning`] outside of a running fight
    /// - [`FightError::ActorMismatch`] when `actor` is not the playing fighter
    /// - [`FightError::ActionUnavailable`] when the fighter cannot pick `action`
    ///
    /// Missing breath is not an error: the turn resolves to an
    /// out-of-breath narration.
    pub fn execute_action(
        &mut self,
        actor: FighterId,
        action: FightActionId,
        rng: &mut dyn RngOracle,
    ) -> Result<TurnRecord, FightError> {
        let acting = self.validate_actor(actor)?;
        if !self.fighters[acting].can_use(action) {
            return Err(FightError::ActionUnavailable {
                fighter: actor,
                action,
            });
        }

        let turn = self.turn;
        let (sender, receiver) = pair_mut(&mut self.fighters, acting);
        let outcome = if sender.stats.spend_breath(action.action().breath_cost()) {
            let mut ctx = ActionContext::new(turn, &self.config, rng);
            action.action().use_action(sender, receiver, &mut ctx)
        } else {
            ActionOutcome::failed(action, FailReason::OutOfBreath)
        };

        Ok(self.finish_turn(acting, action, outcome))
    }

    /// Resolves the playing fighter's turn without an action.
    pub fn forfeit_turn(
        &mut self,
        actor: FighterId,
        reason: FailReason,
    ) -> Result<TurnRecord, FightError> {
        let acting = self.validate_actor(actor)?;
        let outcome = ActionOutcome::failed(FightActionId::None, reason);
        Ok(self.finish_turn(acting, FightActionId::None, outcome))
    }

    fn finish_turn(
        &mut self,
        acting: usize,
        action: FightActionId,
        outcome: ActionOutcome,
    ) -> TurnRecord {
        let turn = self.turn;
        let fighter = &mut self.fighters[acting];
        let actor = fighter.id();
        fighter.record_action(action);
        fighter.stats.regenerate_breath();

        self.turn += 1;
        self.turn_start = None;
        let ended = self.has_ended().then(|| self.end());

        TurnRecord {
            turn,
            actor,
            outcome,
            ended,
        }
    }

    fn ensure_running(&self) -> Result<(), FightError> {
        if self.state == FightState::Running {
            Ok(())
        } else {
            Err(FightError::NotRunning)
        }
    }

    fn validate_actor(&self, actor: FighterId) -> Result<usize, FightError> {
        self.ensure_running()?;
        if self.fighter(actor).is_none() {
            return Err(FightError::UnknownFighter(actor));
        }
        let acting = self.playing_index();
        let expected = self.fighters[acting].id();
        if expected != actor {
            return Err(FightError::ActorMismatch {
                expected,
                provided: actor,
            });
        }
        Ok(acting)
    }
}
