use crate::action::{
    ActionContext, ActionOutcome, ActionResult, FightAction, FightActionId, Target,
};
use crate::alteration::AlterationId;
use crate::combat::{AttackInfo, StatPair, StatsInfo};
use crate::fighter::Fighter;

use super::{Variance, afflict, attack_vs_defense, strike};

/// Hit that may set the receiver on fire.
pub struct FireAttack;

impl FireAttack {
    pub const BURN_PERCENT: u32 = 40;
}

impl FightAction for FireAttack {
    fn id(&self) -> FightActionId {
        FightActionId::FireAttack
    }

    fn emoji(&self) -> &'static str {
        "🔥"
    }

    fn breath_cost(&self) -> u32 {
        4
    }

    fn attack_info(&self) -> AttackInfo {
        AttackInfo::new(25, 55, 85)
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
        let stats = self.stats_info(sender, receiver);
        let result = strike(
            sender,
            receiver,
            self.attack_info(),
            &stats,
            Variance::new(20, 10),
            ctx,
        );
        let mut outcome = ActionOutcome::new(self.id(), result);
        if ctx.rng.chance(Self::BURN_PERCENT) {
            outcome = outcome.with_side_effect(afflict(
                receiver,
                Target::Receiver,
                AlterationId::Burned,
                ctx,
            ));
        }
        outcome
    }
}

/// Weak hit that may poison the receiver.
pub struct PoisonousAttack;

impl PoisonousAttack {
    pub const POISON_PERCENT: u32 = 50;
}

impl FightAction for PoisonousAttack {
    fn id(&self) -> FightActionId {
        FightActionId::PoisonousAttack
    }

    fn emoji(&self) -> &'static str {
        "🧪"
    }

    fn breath_cost(&self) -> u32 {
        3
    }

    fn attack_info(&self) -> AttackInfo {
        AttackInfo::new(20, 45, 70)
    }

    fn stats_info(&self, sender: &Fighter, receiver: &Fighter) -> StatsInfo {
        StatsInfo::new(vec![
            StatPair::new(sender.stats.attack(), f64::from(receiver.stats.defense()), 0.6),
            StatPair::new(sender.stats.speed(), f64::from(receiver.stats.speed()), 0.4),
        ])
    }

    fn use_action(
        &self,
        sender: &mut Fighter,
        receiver: &mut Fighter,
        ctx: &mut ActionContext<'_>,
    ) -> ActionOutcome {
        let stats = self.stats_info(sender, receiver);
        let result = strike(
            sender,
            receiver,
            self.attack_info(),
            &stats,
            Variance::new(20, 10),
            ctx,
        );
        let mut outcome = ActionOutcome::new(self.id(), result);
        if ctx.rng.chance(Self::POISON_PERCENT) {
            outcome = outcome.with_side_effect(afflict(
                receiver,
                Target::Receiver,
                AlterationId::Poisoned,
                ctx,
            ));
        }
        outcome
    }
}

/// Curses the receiver. The damage comes later, when the curse releases.
pub struct CursedAttack;

impl FightAction for CursedAttack {
    fn id(&self) -> FightActionId {
        FightActionId::CursedAttack
    }

    fn emoji(&self) -> &'static str {
        "👻"
    }

    fn breath_cost(&self) -> u32 {
        4
    }

    fn stats_info(&self, sender: &Fighter, receiver: &Fighter) -> StatsInfo {
        attack_vs_defense(sender, receiver)
    }

    fn use_action(
        &self,
        _sender: &mut Fighter,
        receiver: &mut Fighter,
        ctx: &mut ActionContext<'_>,
    ) -> ActionOutcome {
        ActionOutcome::new(self.id(), ActionResult::Effect).with_side_effect(afflict(
            receiver,
            Target::Receiver,
            AlterationId::Cursed,
            ctx,
        ))
    }
}
