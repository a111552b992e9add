use crate::action::ActionContext;
use crate::config::AlterationTuning;
use crate::fighter::Fighter;
use crate::stats::{ModifierOrigin, StatKind, StatModifier};

use super::{AlterationEffect, AlterationId, AlterationOutcome, FightAlteration};

/// Slows the victim down and may cost it its action.
///
/// The speed modifier is attributed to the alteration and reverted when the
/// paralysis wears off.
pub struct Paralyzed;

impl FightAlteration for Paralyzed {
    fn id(&self) -> AlterationId {
        AlterationId::Paralyzed
    }

    fn emoji(&self) -> &'static str {
        "⚡"
    }

    fn on_attach(&self, victim: &mut Fighter, tuning: &AlterationTuning) {
        victim.stats.apply_modifier(StatModifier::multiplication(
            ModifierOrigin::Alteration(AlterationId::Paralyzed),
            StatKind::Speed,
            tuning.paralysis_speed_factor,
        ));
    }

    fn trigger(
        &self,
        victim: &mut Fighter,
        _opponent: &Fighter,
        ctx: &mut ActionContext<'_>,
    ) -> AlterationOutcome {
        let config = ctx.config;
        let tuning = &config.alterations;
        if victim.alteration_turn() > tuning.paralysis_max_turns {
            return AlterationOutcome::new(self.id(), AlterationEffect::Healed, true);
        }
        if ctx.rng.chance(tuning.paralysis_skip_percent) {
            return AlterationOutcome::new(self.id(), AlterationEffect::ActionLost, false);
        }
        AlterationOutcome::new(self.id(), AlterationEffect::Pending, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FightConfig;
    use crate::env::SequenceRng;
    use crate::fighter::test_support::{monster, player};

    #[test]
    fn paralysis_wears_off_and_restores_speed() {
        let config = FightConfig::default();
        let mut victim = player(1, 10, 50, 40, 60, 500);
        let opponent = monster(2, 60, 30, 30, 300);
        victim.new_alteration(AlterationId::Paralyzed, &config.alterations);
        assert_eq!(victim.stats.speed(), 30);

        let mut rng = SequenceRng::always_lucky();
        let mut ctx = ActionContext::new(2, &config, &mut rng);
        for _ in 0..config.alterations.paralysis_max_turns {
            let outcome = victim.trigger_alteration(&opponent, &mut ctx);
            assert!(outcome.is_some_and(|o| o.prevents_action()));
        }

        let outcome = victim.trigger_alteration(&opponent, &mut ctx);
        assert!(outcome.is_some_and(|o| o.removed && !o.prevents_action()));
        assert_eq!(victim.stats.speed(), 60);
        assert_eq!(victim.current_alteration(), None);
    }
}
