use crate::action::{
    ActionContext, ActionOutcome, ActionResult, FightAction, FightActionId, SideEffect, Target,
};
use crate::combat::{AttackInfo, StatsInfo};
use crate::fighter::Fighter;
use crate::stats::{ModifierOrigin, StatKind, StatModifier};

use super::{Variance, attack_vs_defense, strike};

/// Lowers `stat` of `fighter` by `percent` of its current value.
fn chill(
    fighter: &mut Fighter,
    action: FightActionId,
    stat: StatKind,
    percent: u32,
) -> SideEffect {
    let current = f64::from(fighter.stats.get(stat));
    fighter.stats.apply_modifier(StatModifier::addition(
        ModifierOrigin::Action(action),
        stat,
        -current * f64::from(percent) / 100.0,
    ));
    SideEffect::StatChange {
        target: Target::Receiver,
        stat,
        percent: -(percent as i32),
    }
}

/// Light hit that slows the receiver down.
pub struct FreezingTouch;

impl FreezingTouch {
    pub const SPEED_LOSS_PERCENT: u32 = 15;
}

impl FightAction for FreezingTouch {
    fn id(&self) -> FightActionId {
        FightActionId::FreezingTouch
    }

    fn emoji(&self) -> &'static str {
        "❄️"
    }

    fn breath_cost(&self) -> u32 {
        3
    }

    fn attack_info(&self) -> AttackInfo {
        AttackInfo::new(10, 50, 60)
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
            Variance::new(10, 5),
            ctx,
        );
        let slowed = chill(receiver, self.id(), StatKind::Speed, Self::SPEED_LOSS_PERCENT);
        ActionOutcome::new(self.id(), result).with_side_effect(slowed)
    }
}

/// Weakens the receiver's defense and speed.
pub struct Blizzard;

impl Blizzard {
    pub const LOSS_PERCENT: u32 = 10;
}

impl FightAction for Blizzard {
    fn id(&self) -> FightActionId {
        FightActionId::Blizzard
    }

    fn emoji(&self) -> &'static str {
        "🌨️"
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
        _ctx: &mut ActionContext<'_>,
    ) -> ActionOutcome {
        let defense = chill(receiver, self.id(), StatKind::Defense, Self::LOSS_PERCENT);
        let speed = chill(receiver, self.id(), StatKind::Speed, Self::LOSS_PERCENT);
        ActionOutcome::new(self.id(), ActionResult::Effect)
            .with_side_effect(defense)
            .with_side_effect(speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FightConfig;
    use crate::env::SequenceRng;
    use crate::fighter::test_support::{monster, player};

    #[test]
    fn freezing_touch_slows_with_an_addition() {
        let config = FightConfig::default();
        let mut sender = player(1, 10, 90, 40, 40, 500);
        let mut receiver = monster(2, 50, 60, 80, 500);

        let mut rng = SequenceRng::never_lucky();
        let mut ctx = ActionContext::new(2, &config, &mut rng);
        let outcome = FreezingTouch.use_action(&mut sender, &mut receiver, &mut ctx);

        assert!(outcome.damage() >= 10);
        assert_eq!(receiver.stats.speed(), 68);
        let entry = receiver.stats.ledger().entries()[0];
        assert_eq!(entry.operation, crate::stats::ModifierOperation::Addition);
    }

    #[test]
    fn blizzard_stacks() {
        let config = FightConfig::default();
        let mut sender = player(1, 10, 90, 40, 40, 500);
        let mut receiver = monster(2, 50, 100, 50, 500);

        let mut rng = SequenceRng::never_lucky();
        let mut ctx = ActionContext::new(2, &config, &mut rng);
        Blizzard.use_action(&mut sender, &mut receiver, &mut ctx);
        assert_eq!((receiver.stats.defense(), receiver.stats.speed()), (90, 45));

        Blizzard.use_action(&mut sender, &mut receiver, &mut ctx);
        assert_eq!((receiver.stats.defense(), receiver.stats.speed()), (81, 41));
        assert_eq!(receiver.stats.ledger().replay(StatKind::Defense, 100), vec![100, 90, 81]);
    }
}
