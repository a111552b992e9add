use crate::action::ActionContext;
use crate::combat::{
    AttackInfo, StatPair, StatsInfo, get_attack_damage, get_attack_status, interval_value,
};
use crate::fighter::Fighter;

use super::{AlterationEffect, AlterationId, AlterationOutcome, FightAlteration};

/// Harmless while it lasts, then releases a single hit that grows with the
/// time spent cursed and with how late in the fight it happens.
pub struct Cursed;

impl Cursed {
    pub const ATTACK: AttackInfo = AttackInfo::new(60, 95, 135);

    /// Damage released by a curse that lasted `elapsed` turns, on fight turn `turn`.
    ///
    /// The lateness bonus scales the damage already raised by the duration.
    pub fn release_damage(base: u32, elapsed: u32, turn: u32, max_turns: u32) -> u32 {
        let mut damage = f64::from(base);
        let duration_ratio = (f64::from(elapsed) - 2.0) / 3.0;
        let lateness_ratio = if max_turns == 0 {
            1.0
        } else {
            f64::from(turn) / f64::from(max_turns)
        };

        damage += interval_value(0.0, 2.0 * damage, duration_ratio);
        damage += interval_value(0.0, damage, lateness_ratio);
        damage.round() as u32
    }
}

impl FightAlteration for Cursed {
    fn id(&self) -> AlterationId {
        AlterationId::Cursed
    }

    fn emoji(&self) -> &'static str {
        "👻"
    }

    fn trigger(
        &self,
        victim: &mut Fighter,
        opponent: &Fighter,
        ctx: &mut ActionContext<'_>,
    ) -> AlterationOutcome {
        let config = ctx.config;
        let tuning = &config.alterations;
        let elapsed = victim.alteration_turn();

        let releases = elapsed > tuning.curse_max_turns
            || (elapsed > tuning.curse_grace_turns && ctx.rng.chance(tuning.curse_removal_percent));
        if !releases {
            return AlterationOutcome::new(self.id(), AlterationEffect::Pending, false);
        }

        let stats = StatsInfo::new(vec![StatPair::new(
            opponent.stats.attack(),
            f64::from(victim.stats.defense()),
            1.0,
        )]);
        let base = get_attack_damage(
            &stats,
            opponent.damage_level(),
            Self::ATTACK,
            &ctx.config.damage,
        );
        let initial = Self::release_damage(base, elapsed, ctx.turn, ctx.config.max_turns);
        let damage = victim.stats.damage(initial);

        AlterationOutcome::new(
            self.id(),
            AlterationEffect::Damage {
                damage,
                status: get_attack_status(damage, initial, ctx.config.damage.status_threshold),
            },
            true,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FightConfig;
    use crate::env::SequenceRng;
    use crate::fighter::test_support::{monster, player};

    #[test]
    fn release_damage_grows_with_duration_and_turn() {
        let early = Cursed::release_damage(100, 2, 0, 24);
        assert_eq!(early, 100);
        assert!(Cursed::release_damage(100, 5, 0, 24) > Cursed::release_damage(100, 3, 0, 24));
        assert!(Cursed::release_damage(100, 3, 20, 24) > Cursed::release_damage(100, 3, 2, 24));
        // Both ratios saturate: tripled by duration, then doubled by lateness.
        assert_eq!(Cursed::release_damage(100, 9, 40, 24), 600);
        assert_eq!(Cursed::release_damage(100, 5, 24, 24), 600);
    }

    #[test]
    fn lateness_bonus_compounds_on_duration_bonus() {
        // Full duration bonus (+200), then half of the raised damage (+150).
        assert_eq!(Cursed::release_damage(100, 5, 0, 24), 300);
        assert_eq!(Cursed::release_damage(100, 5, 12, 24), 450);
    }

    #[test]
    fn curse_is_silent_during_grace_and_releases_at_cap() {
        let config = FightConfig::default();
        let mut victim = player(1, 10, 50, 40, 30, 10_000);
        let opponent = monster(2, 60, 30, 30, 300);
        victim.new_alteration(AlterationId::Cursed, &config.alterations);

        // Never lucky: only the hard cap releases the curse.
        let mut rng = SequenceRng::never_lucky();
        let mut ctx = ActionContext::new(6, &config, &mut rng);

        for expected_turn in 1..=config.alterations.curse_max_turns {
            let outcome = victim.trigger_alteration(&opponent, &mut ctx);
            assert_eq!(outcome.map(|o| o.effect), Some(AlterationEffect::Pending));
            assert_eq!(victim.alteration_turn(), expected_turn);
        }
        assert_eq!(victim.stats.fight_points(), 10_000);

        let outcome = victim.trigger_alteration(&opponent, &mut ctx);
        let outcome = outcome.expect("curse is attached");
        assert!(outcome.removed);
        assert!(matches!(outcome.effect, AlterationEffect::Damage { damage, .. } if damage > 0));
        assert_eq!(victim.current_alteration(), None);
        assert_eq!(victim.alteration_turn(), 0);
    }

    #[test]
    fn lucky_roll_releases_after_grace() {
        let config = FightConfig::default();
        let mut victim = player(1, 10, 50, 40, 30, 10_000);
        let opponent = monster(2, 60, 30, 30, 300);
        victim.new_alteration(AlterationId::Cursed, &config.alterations);

        let mut rng = SequenceRng::always_lucky();
        let mut ctx = ActionContext::new(4, &config, &mut rng);
        for _ in 0..config.alterations.curse_grace_turns {
            let outcome = victim.trigger_alteration(&opponent, &mut ctx);
            assert_eq!(outcome.map(|o| o.removed), Some(false));
        }
        let outcome = victim.trigger_alteration(&opponent, &mut ctx);
        assert_eq!(outcome.map(|o| o.removed), Some(true));
    }
}
