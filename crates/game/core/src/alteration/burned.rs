use crate::action::ActionContext;
use crate::combat::{AttackInfo, StatPair, StatsInfo};
use crate::fighter::Fighter;

use super::{AlterationEffect, AlterationId, AlterationOutcome, FightAlteration, inflict};

/// Deals fire damage every turn until it heals.
///
/// The burn cannot heal on the turn it is first triggered.
pub struct Burned;

impl Burned {
    pub const ATTACK: AttackInfo = AttackInfo::new(5, 50, 65);

    fn stats_info(victim: &Fighter, opponent: &Fighter) -> StatsInfo {
        StatsInfo::new(vec![StatPair::new(
            opponent.stats.attack(),
            f64::from(victim.stats.defense()) / 4.0,
            1.0,
        )])
    }
}

impl FightAlteration for Burned {
    fn id(&self) -> AlterationId {
        AlterationId::Burned
    }

    fn emoji(&self) -> &'static str {
        "🔥"
    }

    fn trigger(
        &self,
        victim: &mut Fighter,
        opponent: &Fighter,
        ctx: &mut ActionContext<'_>,
    ) -> AlterationOutcome {
        if victim.alteration_turn() > 1
            && ctx.rng.chance(ctx.config.alterations.burn_removal_percent)
        {
            return AlterationOutcome::new(self.id(), AlterationEffect::Healed, true);
        }

        let stats = Self::stats_info(victim, opponent);
        let effect = inflict(victim, opponent, Self::ATTACK, &stats, ctx);
        AlterationOutcome::new(self.id(), effect, false)
    }
}
