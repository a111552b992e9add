use crate::action::{ActionContext, ActionOutcome, FailReason, FightAction, FightActionId};
use crate::combat::{AttackInfo, StatPair, StatsInfo};
use crate::fighter::Fighter;

use super::{Variance, attack_vs_defense, strike};

pub struct SimpleAttack;

impl FightAction for SimpleAttack {
    fn id(&self) -> FightActionId {
        FightActionId::SimpleAttack
    }

    fn emoji(&self) -> &'static str {
        "⚔️"
    }

    fn breath_cost(&self) -> u32 {
        2
    }

    fn attack_info(&self) -> AttackInfo {
        AttackInfo::new(20, 60, 80)
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
        ActionOutcome::new(self.id(), result)
    }
}

/// Cheap hit where speed matters more than strength.
pub struct QuickAttack;

impl FightAction for QuickAttack {
    fn id(&self) -> FightActionId {
        FightActionId::QuickAttack
    }

    fn emoji(&self) -> &'static str {
        "💨"
    }

    fn breath_cost(&self) -> u32 {
        1
    }

    fn attack_info(&self) -> AttackInfo {
        AttackInfo::new(10, 30, 60)
    }

    fn stats_info(&self, sender: &Fighter, receiver: &Fighter) -> StatsInfo {
        StatsInfo::new(vec![
            StatPair::new(sender.stats.attack(), f64::from(receiver.stats.defense()), 0.3),
            StatPair::new(sender.stats.speed(), f64::from(receiver.stats.speed()), 0.7),
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
            Variance::new(25, 5),
            ctx,
        );
        ActionOutcome::new(self.id(), result)
    }
}

/// Strong, breath-hungry hit that a fast defender can partly dodge.
pub struct HeavyAttack;

impl FightAction for HeavyAttack {
    fn id(&self) -> FightActionId {
        FightActionId::HeavyAttack
    }

    fn emoji(&self) -> &'static str {
        "🪓"
    }

    fn breath_cost(&self) -> u32 {
        6
    }

    fn attack_info(&self) -> AttackInfo {
        AttackInfo::new(40, 95, 140)
    }

    fn stats_info(&self, sender: &Fighter, receiver: &Fighter) -> StatsInfo {
        StatsInfo::new(vec![
            StatPair::new(sender.stats.attack(), f64::from(receiver.stats.defense()), 0.8),
            StatPair::new(sender.stats.speed(), f64::from(receiver.stats.speed()), 0.2),
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
            Variance::new(15, 15),
            ctx,
        );
        ActionOutcome::new(self.id(), result)
    }
}

/// Resolved when a fighter does not choose in time.
pub struct NoAction;

impl FightAction for NoAction {
    fn id(&self) -> FightActionId {
        FightActionId::None
    }

    fn emoji(&self) -> &'static str {
        "⏳"
    }

    fn breath_cost(&self) -> u32 {
        0
    }

    fn stats_info(&self, sender: &Fighter, receiver: &Fighter) -> StatsInfo {
        attack_vs_defense(sender, receiver)
    }

    fn use_action(
        &self,
        _sender: &mut Fighter,
        _receiver: &mut Fighter,
        _ctx: &mut ActionContext<'_>,
    ) -> ActionOutcome {
        ActionOutcome::failed(self.id(), FailReason::NoResponse)
    }
}
