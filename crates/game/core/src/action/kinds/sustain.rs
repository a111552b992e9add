use crate::action::{
    ActionContext, ActionOutcome, ActionResult, FightAction, FightActionId, SideEffect, Target,
};
use crate::alteration::AlterationId;
use crate::combat::{AttackInfo, StatPair, StatsInfo};
use crate::fighter::Fighter;
use crate::stats::{ModifierOrigin, StatKind, StatModifier};

use super::{Variance, afflict, strike};

/// Hit that heals the sender by half of the damage dealt.
///
/// The receiver's defense barely matters against it.
pub struct EnergeticAttack;

impl FightAction for EnergeticAttack {
    fn id(&self) -> FightActionId {
        FightActionId::EnergeticAttack
    }

    fn emoji(&self) -> &'static str {
        "⚡"
    }

    fn breath_cost(&self) -> u32 {
        5
    }

    fn attack_info(&self) -> AttackInfo {
        AttackInfo::new(30, 60, 90)
    }

    fn stats_info(&self, sender: &Fighter, receiver: &Fighter) -> StatsInfo {
        StatsInfo::new(vec![
            StatPair::new(
                sender.stats.attack(),
                f64::from(receiver.stats.defense()) * 0.2,
                0.75,
            ),
            StatPair::new(sender.stats.speed(), f64::from(receiver.stats.speed()), 0.25),
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
            Variance::new(35, 5),
            ctx,
        );
        let outcome = ActionOutcome::new(self.id(), result);

        let healed = sender.stats.heal(outcome.damage() / 2);
        if healed == 0 {
            return outcome;
        }
        outcome.with_side_effect(SideEffect::Heal {
            target: Target::Sender,
            amount: healed,
        })
    }
}

/// Devastating hit that will most likely paralyze the sender.
pub struct SabotageAttack;

impl SabotageAttack {
    pub const SELF_PARALYSIS_PERCENT: u32 = 90;
}

impl FightAction for SabotageAttack {
    fn id(&self) -> FightActionId {
        FightActionId::SabotageAttack
    }

    fn emoji(&self) -> &'static str {
        "💣"
    }

    fn breath_cost(&self) -> u32 {
        5
    }

    fn attack_info(&self) -> AttackInfo {
        AttackInfo::new(55, 80, 160)
    }

    fn stats_info(&self, sender: &Fighter, receiver: &Fighter) -> StatsInfo {
        StatsInfo::new(vec![
            StatPair::new(sender.stats.attack(), f64::from(receiver.stats.attack()), 0.75),
            StatPair::new(sender.stats.speed(), f64::from(receiver.stats.speed()), 0.25),
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
            Variance::new(15, 5),
            ctx,
        );
        let mut outcome = ActionOutcome::new(self.id(), result);
        if ctx.rng.chance(Self::SELF_PARALYSIS_PERCENT) {
            outcome = outcome.with_side_effect(afflict(
                sender,
                Target::Sender,
                AlterationId::Paralyzed,
                ctx,
            ));
        }
        outcome
    }
}

/// Raises the sender's defense by 20% for the rest of the fight.
pub struct DefenseBuff;

impl DefenseBuff {
    pub const DEFENSE_FACTOR: f64 = 1.2;
}

impl FightAction for DefenseBuff {
    fn id(&self) -> FightActionId {
        FightActionId::DefenseBuff
    }

    fn emoji(&self) -> &'static str {
        "🛡️"
    }

    fn breath_cost(&self) -> u32 {
        3
    }

    fn stats_info(&self, sender: &Fighter, receiver: &Fighter) -> StatsInfo {
        StatsInfo::new(vec![StatPair::new(
            sender.stats.defense(),
            f64::from(receiver.stats.attack()),
            1.0,
        )])
    }

    fn use_action(
        &self,
        sender: &mut Fighter,
        _receiver: &mut Fighter,
        _ctx: &mut ActionContext<'_>,
    ) -> ActionOutcome {
        sender.stats.apply_modifier(StatModifier::multiplication(
            ModifierOrigin::Action(self.id()),
            StatKind::Defense,
            Self::DEFENSE_FACTOR,
        ));
        ActionOutcome::new(self.id(), ActionResult::Effect).with_side_effect(
            SideEffect::StatChange {
                target: Target::Sender,
                stat: StatKind::Defense,
                percent: 20,
            },
        )
    }
}
