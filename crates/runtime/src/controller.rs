//! Asynchronous driver for a single fight.
//!
//! [`FightController`] owns one [`Fight`] and walks it through its lifecycle:
//! start, one turn per loop iteration, end. Rules stay in `fight-core`; the
//! controller only adds what needs I/O: collecting human input under a
//! timeout, narrating to the view, publishing events, blocking the fighters
//! and queuing mission progress.
//!
//! ```text
//! start_fight -> prepare_next_turn -+- Queued -----> execute_fight_action -+
//!                     ^             +- AwaitInput -> collect_action -------+
//!                     |             +- Forfeit ----> lost turn ------------+
//!                     |             +- FightOver ---------------> end_fight
//!                     +---------------- not ended ---------------------------+
//! ```

use std::sync::Arc;
use std::time::Duration;

use fight_core::{
    AlterationOutcome, Fight, FightActionId, FightError, FightResult, FightStart, FightState,
    Fighter, FighterId, PcgRng, PendingAction, PotionNature, TurnRecord, Winner,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::{
    ActionProvider, BlockingRegistry, FightLease, FightView, MissionKey, MissionParams,
    MissionUpdate, Result,
};
use crate::events::{EventBus, FightEvent, TurnEvent};

/// Collaborators shared by every fight of a runtime.
#[derive(Clone)]
pub(crate) struct Collaborators {
    pub view: Arc<dyn FightView>,
    pub provider: Arc<dyn ActionProvider>,
    pub registry: Arc<dyn BlockingRegistry>,
    pub events: EventBus,
    pub missions: mpsc::Sender<MissionUpdate>,
    pub collector_timeout: Duration,
}

pub struct FightController {
    fight: Fight,
    rng: PcgRng,
    collaborators: Collaborators,
    lease: Option<FightLease>,
    closed: bool,
}

impl FightController {
    pub(crate) fn new(fight: Fight, rng: PcgRng, collaborators: Collaborators) -> Self {
        Self {
            fight,
            rng,
            collaborators,
            lease: None,
            closed: false,
        }
    }

    pub fn fight(&self) -> &Fight {
        &self.fight
    }

    /// Consumes the controller, releasing any lease still held.
    pub fn into_fight(mut self) -> Fight {
        self.release_lease();
        self.fight
    }

    /// Starts the fight.
    ///
    /// Blocks the player fighters first: when one of them is already in a
    /// fight, nothing is blocked and the fight stays unstarted.
    pub async fn start_fight(&mut self) -> Result<FightStart> {
        if self.fight.state() != FightState::NotStarted {
            return Err(FightError::AlreadyStarted.into());
        }

        let players: Vec<FighterId> = self
            .fight
            .fighters()
            .iter()
            .filter(|fighter| fighter.is_player())
            .map(Fighter::id)
            .collect();
        let lease = FightLease::acquire(Arc::clone(&self.collaborators.registry), players)?;

        let start = self.fight.start(&mut self.rng)?;
        self.lease = Some(lease);

        let [first, second] = self.fight.fighters();
        info!(
            "Fight started: {} vs {} (first: {}, friendly: {}, coin flip: {:?})",
            first.name(),
            second.name(),
            start.first,
            self.fight.is_friendly(),
            start.coin_flip
        );

        if let Err(e) = self.collaborators.view.introduce_fight(first, second).await {
            warn!("Failed to introduce fight: {}", e);
        }
        for consumed in &start.consumed_potions {
            let narration = format!(
                "drinks a {} potion (+{})",
                potion_label(consumed.potion.nature),
                consumed.potion.power
            );
            self.narrate("🧪", consumed.fighter, &narration).await;
        }

        self.collaborators.events.publish(FightEvent::Started {
            fighters: [first.id(), second.id()],
            friendly: self.fight.is_friendly(),
            coin_flip: start.coin_flip,
            consumed_potions: start.consumed_potions.clone(),
        });

        Ok(start)
    }

    /// Plays the next turn.
    ///
    /// Returns the fight result once the turn ended the fight (or the start
    /// of the turn found it over); [`Self::end_fight`] is then due.
    pub async fn prepare_next_turn(&mut self) -> Result<Option<FightResult>> {
        if let Err(e) = self
            .collaborators
            .view
            .display_fight_status(&self.fight)
            .await
        {
            warn!("Failed to display fight status: {}", e);
        }

        let start = self.fight.begin_turn(&mut self.rng)?;
        debug!("Turn {} begins for fighter {}", start.turn, start.actor);

        if let Some(outcome) = start.alteration {
            self.narrate_alteration(start.turn, start.actor, outcome)
                .await;
        }

        match start.pending {
            PendingAction::FightOver(result) => Ok(Some(result)),
            PendingAction::Forfeit(reason) => {
                let record = self.fight.forfeit_turn(start.actor, reason)?;
                Ok(self.record_turn(record).await)
            }
            PendingAction::Queued(action) => {
                let action = self.usable_or_fallback(start.actor, action);
                self.execute_fight_action(start.actor, action).await
            }
            PendingAction::AwaitInput => {
                let action = self.collect_action(start.actor).await;
                self.execute_fight_action(start.actor, action).await
            }
        }
    }

    /// Resolves `action` for the playing fighter and narrates it.
    ///
    /// Returns the fight result when this turn ended the fight.
    pub async fn execute_fight_action(
        &mut self,
        actor: FighterId,
        action: FightActionId,
    ) -> Result<Option<FightResult>> {
        let record = self.fight.execute_action(actor, action, &mut self.rng)?;
        Ok(self.record_turn(record).await)
    }

    /// Asks the provider for the playing fighter's action.
    ///
    /// Never fails: a timeout, a provider error, or an action the fighter
    /// cannot use all fall back to the configured default action.
    async fn collect_action(&self, actor: FighterId) -> FightActionId {
        let fallback = self.usable_or_fallback(actor, self.fight.config().default_action);
        let Some(fighter) = self.fight.fighter(actor) else {
            return fallback;
        };

        let selection = self
            .collaborators
            .provider
            .select_fight_action(fighter, &self.fight);
        match tokio::time::timeout(self.collaborators.collector_timeout, selection).await {
            Ok(Ok(action)) if fighter.can_use(action) => action,
            Ok(Ok(action)) => {
                warn!(
                    "Fighter {} picked unavailable action {}, using {}",
                    actor, action, fallback
                );
                fallback
            }
            Ok(Err(e)) => {
                warn!(
                    "Action provider failed for fighter {}: {}, using {}",
                    actor, e, fallback
                );
                fallback
            }
            Err(_) => {
                warn!(
                    "Fighter {} did not choose an action within {:?}, using {}",
                    actor, self.collaborators.collector_timeout, fallback
                );
                fallback
            }
        }
    }

    /// Keeps `action` when the fighter may use it, otherwise the configured
    /// default action, and `none` when even that one is unavailable.
    fn usable_or_fallback(&self, actor: FighterId, action: FightActionId) -> FightActionId {
        let usable = |candidate: FightActionId| {
            self.fight
                .fighter(actor)
                .is_some_and(|fighter| fighter.can_use(candidate))
        };
        let default_action = self.fight.config().default_action;
        if usable(action) {
            action
        } else if usable(default_action) {
            default_action
        } else {
            FightActionId::None
        }
    }

    /// Finishes the fight: releases the blocked fighters, announces the
    /// winner and queues mission progress.
    ///
    /// Only the first call has side effects; later calls return the stored
    /// result.
    pub async fn end_fight(&mut self) -> FightResult {
        let result = self.fight.end();
        if self.closed {
            return result;
        }
        self.closed = true;
        self.release_lease();

        let fighters = self.fight.fighters();
        let (winner, loser) = match result.winner {
            Winner::Fighter(index) => (&fighters[index], &fighters[1 - index]),
            Winner::Draw => (&fighters[0], &fighters[1]),
        };
        info!(
            "Fight ended; winner: {} ({} fp) loser: {} ({} fp) turns: {} draw: {}",
            winner.name(),
            winner.stats.fight_points(),
            loser.name(),
            loser.stats.fight_points(),
            result.turns,
            result.winner.is_draw()
        );

        if let Err(e) = self
            .collaborators
            .view
            .outro_fight(loser, winner, result.winner.is_draw())
            .await
        {
            warn!("Failed to send fight outro: {}", e);
        }

        self.queue_missions(result);

        self.collaborators.events.publish(FightEvent::Ended {
            fighters: [fighters[0].id(), fighters[1].id()],
            result,
        });

        result
    }

    /// Runs the fight to completion, starting it if needed.
    pub async fn run(&mut self) -> Result<FightResult> {
        if self.fight.state() == FightState::NotStarted {
            self.start_fight().await?;
        }
        while self.fight.state() == FightState::Running {
            if self.prepare_next_turn().await?.is_some() {
                break;
            }
        }
        Ok(self.end_fight().await)
    }

    fn queue_missions(&self, result: FightResult) {
        let fight_mission = if self.fight.is_friendly() {
            MissionKey::FriendlyFight
        } else {
            MissionKey::RankedFight
        };

        let mut updates = Vec::new();
        for (index, fighter) in self.fight.fighters().iter().enumerate() {
            if !fighter.is_player() {
                continue;
            }
            for mission in [fight_mission, MissionKey::AnyFight] {
                updates.push(MissionUpdate {
                    fighter: fighter.id(),
                    mission,
                    params: MissionParams::default(),
                });
            }
            if result.winner == Winner::Fighter(index) {
                let percent = (fighter.stats.remaining_ratio() * 100.0).round() as u32;
                updates.push(MissionUpdate {
                    fighter: fighter.id(),
                    mission: MissionKey::FightHealthPercent,
                    params: MissionParams::remaining_percent(percent),
                });
            }
        }

        for update in updates {
            if let Err(e) = self.collaborators.missions.try_send(update) {
                warn!(
                    "Dropping mission {} for fighter {}: {}",
                    update.mission.as_str(),
                    update.fighter,
                    e
                );
            }
        }
    }

    async fn record_turn(&mut self, record: TurnRecord) -> Option<FightResult> {
        let narration = record.outcome.to_string();
        if record.outcome.is_failure() {
            debug!(
                "Turn {} fizzled for fighter {}: {}",
                record.turn, record.actor, narration
            );
        } else {
            debug!(
                "Turn {} resolved for fighter {}: {}",
                record.turn, record.actor, narration
            );
        }
        self.narrate(record.outcome.action.action().emoji(), record.actor, &narration)
            .await;

        let ended = record.ended;
        self.collaborators
            .events
            .publish(TurnEvent::Resolved { record, narration });
        ended
    }

    async fn narrate_alteration(&self, turn: u32, fighter: FighterId, outcome: AlterationOutcome) {
        debug!("Alteration {} triggered on fighter {}", outcome.alteration, fighter);
        self.narrate(
            outcome.alteration.alteration().emoji(),
            fighter,
            &outcome.to_string(),
        )
        .await;
        self.collaborators
            .events
            .publish(TurnEvent::AlterationTriggered {
                turn,
                fighter,
                outcome,
            });
    }

    async fn narrate(&self, emoji: &str, fighter: FighterId, narration: &str) {
        let mention = self
            .fight
            .fighter(fighter)
            .map_or_else(|| fighter.to_string(), Fighter::mention);
        if let Err(e) = self
            .collaborators
            .view
            .update_history(emoji, &mention, narration)
            .await
        {
            warn!("Failed to update fight history: {}", e);
        }
    }

    fn release_lease(&mut self) {
        if let Some(mut lease) = self.lease.take() {
            lease.release();
        }
    }
}

fn potion_label(nature: PotionNature) -> &'static str {
    match nature {
        PotionNature::Attack => "attack",
        PotionNature::Defense => "defense",
        PotionNature::Speed => "speed",
    }
}
