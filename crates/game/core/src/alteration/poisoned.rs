use crate::action::ActionContext;
use crate::combat::{AttackInfo, StatPair, StatsInfo};
use crate::fighter::Fighter;

use super::{AlterationEffect, AlterationId, AlterationOutcome, FightAlteration, inflict};

/// Light damage every turn, with an even chance to wear off from the second turn.
pub struct Poisoned;

impl Poisoned {
    pub const ATTACK: AttackInfo = AttackInfo::new(10, 25, 45);
}

impl FightAlteration for Poisoned {
    fn id(&self) -> AlterationId {
        AlterationId::Poisoned
    }

    fn emoji(&self) -> &'static str {
        "🧪"
    }

    fn trigger(
        &self,
        victim: &mut Fighter,
        opponent: &Fighter,
        ctx: &mut ActionContext<'_>,
    ) -> AlterationOutcome {
        if victim.alteration_turn() > 1
            && ctx.rng.chance(ctx.config.alterations.poison_removal_percent)
        {
            return AlterationOutcome::new(self.id(), AlterationEffect::Healed, true);
        }

        let stats = StatsInfo::new(vec![StatPair::new(
            opponent.stats.attack(),
            f64::from(victim.stats.defense()),
            1.0,
        )]);
        let effect = inflict(victim, opponent, Self::ATTACK, &stats, ctx);
        AlterationOutcome::new(self.id(), effect, false)
    }
}
