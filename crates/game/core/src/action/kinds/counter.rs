use crate::action::{
    ActionContext, ActionOutcome, ActionResult, FailReason, FightAction, FightActionId,
};
use crate::combat::StatsInfo;
use crate::fighter::Fighter;

use super::attack_vs_defense;

/// Replays the receiver's last action back at it.
///
/// Fails without effect on the first turn, when the receiver has not acted,
/// or when its last action is listed as uncounterable. A counter-attack is
/// never replayed, whatever the configuration lists.
pub struct CounterAttack;

impl FightAction for CounterAttack {
    fn id(&self) -> FightActionId {
        FightActionId::CounterAttack
    }

    fn emoji(&self) -> &'static str {
        "🔄"
    }

    fn breath_cost(&self) -> u32 {
        3
    }

    fn stats_info(&self, sender: &Fighter, receiver: &Fighter) -> StatsInfo {
        attack_vs_defense(sender, receiver)
    }

    fn use_action(
        &self,
        sender: &mut Fighter,
        receiver: &mut Fighter,
        ctx: &mut ActionContext<'_>,
    ) -> ActionOutcome {
        if ctx.turn <= 1 {
            return ActionOutcome::failed(self.id(), FailReason::TooEarly);
        }
        let Some(last) = receiver.last_fight_action_used() else {
            return ActionOutcome::failed(self.id(), FailReason::NothingToCounter);
        };
        if last == self.id() || !ctx.config.is_counterable(last) {
            return ActionOutcome::failed(self.id(), FailReason::Uncounterable);
        }

        let replayed = last.action().use_action(sender, receiver, ctx);
        ActionOutcome::new(self.id(), ActionResult::Countered(Box::new(replayed)))
    }
}
