//! Damage formula shared by every attacking action and alteration.

use crate::config::DamageTuning;
use crate::env::RngOracle;

// ============================================================================
// Inputs
// ============================================================================

/// Damage band declared by an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackInfo {
    pub min_damage: u32,
    pub average_damage: u32,
    pub max_damage: u32,
}

impl AttackInfo {
    pub const fn new(min_damage: u32, average_damage: u32, max_damage: u32) -> Self {
        Self {
            min_damage,
            average_damage,
            max_damage,
        }
    }

    /// Band of an action that never deals damage.
    pub const fn none() -> Self {
        Self::new(0, 0, 0)
    }
}

/// One attacker stat compared against one defender stat.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatPair {
    pub attacker: f64,
    pub defender: f64,
    /// Share of this comparison in the final score.
    pub weight: f64,
}

impl StatPair {
    pub fn new(attacker: u32, defender: f64, weight: f64) -> Self {
        Self {
            attacker: f64::from(attacker),
            defender,
            weight,
        }
    }

    /// Normalized advantage of the attacker in `[-1, 1]`.
    fn score(&self) -> f64 {
        let attacker = self.attacker.max(0.0);
        let defender = self.defender.max(0.0);
        let total = attacker + defender;
        if total == 0.0 {
            return 0.0;
        }
        (attacker - defender) / total
    }
}

/// Stat comparisons declared by an action.
///
/// Weights of a registered action sum to `1.0`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsInfo {
    pub pairs: Vec<StatPair>,
}

impl StatsInfo {
    pub fn new(pairs: Vec<StatPair>) -> Self {
        Self { pairs }
    }

    pub fn total_weight(&self) -> f64 {
        self.pairs.iter().map(|pair| pair.weight).sum()
    }
}

// ============================================================================
// Formula
// ============================================================================

/// Linear interpolation between `min` and `max`, with `ratio` clamped to `[0, 1]`.
pub fn interval_value(min: f64, max: f64, ratio: f64) -> f64 {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    min + (max - min) * ratio
}

/// Computes the damage of an attack before random variance.
///
/// # Formula
///
/// ```text
/// s_i = (a_i - d_i) / (a_i + d_i)               per stat pair, in [-1, 1]
/// S   = Σ w_i · s_i + level_weight · L / (L + level_half_point)
/// m   = 1 + clamp(S, -1, 1)                     in [0, 2]
///
/// m <= 1: damage = min + (avg - min) · m
/// m  > 1: damage = avg + (max - avg) · (m - 1)
/// ```
///
/// The level shift only applies when `level` is provided (player fighters).
///
/// # Returns
///
/// A value within `[min_damage, max_damage]`. The function is pure.
pub fn get_attack_damage(
    stats: &StatsInfo,
    level: Option<u32>,
    attack: AttackInfo,
    tuning: &DamageTuning,
) -> u32 {
    let weighted: f64 = stats
        .pairs
        .iter()
        .map(|pair| pair.weight * pair.score())
        .sum();

    let level_shift = level.map_or(0.0, |level| {
        let level = f64::from(level);
        let denominator = level + tuning.level_half_point;
        if denominator <= 0.0 {
            0.0
        } else {
            tuning.level_weight * level / denominator
        }
    });

    let multiplier = 1.0 + (weighted + level_shift).clamp(-1.0, 1.0);

    let min = f64::from(attack.min_damage);
    let average = f64::from(attack.average_damage.max(attack.min_damage));
    let max = f64::from(attack.max_damage.max(attack.average_damage));

    let damage = if multiplier <= 1.0 {
        interval_value(min, average, multiplier)
    } else {
        interval_value(average, max, multiplier - 1.0)
    };

    damage.max(0.0).round() as u32
}

/// Applies random variance to a computed damage.
///
/// With `critical_percent`% probability the damage is scaled by a uniform
/// integer percent drawn in `[-variance_percent, +variance_percent]`;
/// otherwise it is returned unchanged.
pub fn apply_secondary_effects(
    damage: u32,
    critical_percent: u32,
    variance_percent: u32,
    rng: &mut dyn RngOracle,
) -> u32 {
    if !rng.chance(critical_percent) {
        return damage;
    }
    let spread = variance_percent.min(100) as i32;
    let shift = rng.range_i32(-spread, spread);
    let scaled = f64::from(damage) * (100.0 + f64::from(shift)) / 100.0;
    scaled.max(0.0).round() as u32
}

// ============================================================================
// Narration status
// ============================================================================

/// How a hit compares to its pre-variance value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "camelCase")]
pub enum AttackStatus {
    Critical,
    Normal,
    Weak,
    Missed,
}

/// Classifies a hit for narration.
pub fn get_attack_status(actual: u32, initial: u32, threshold: f64) -> AttackStatus {
    if actual == 0 && initial > 0 {
        return AttackStatus::Missed;
    }
    if initial == 0 {
        return AttackStatus::Normal;
    }
    let ratio = f64::from(actual) / f64::from(initial);
    if ratio >= 1.0 + threshold {
        AttackStatus::Critical
    } else if ratio <= 1.0 - threshold {
        AttackStatus::Weak
    } else {
        AttackStatus::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    fn attack_vs_defense(attack: u32, defense: f64) -> StatsInfo {
        StatsInfo::new(vec![StatPair::new(attack, defense, 1.0)])
    }

    #[test]
    fn equal_stats_hit_the_average() {
        let damage = get_attack_damage(
            &attack_vs_defense(80, 80.0),
            None,
            AttackInfo::new(20, 60, 80),
            &DamageTuning::default(),
        );
        assert_eq!(damage, 60);
    }

    #[test]
    fn zero_defense_stays_within_band() {
        let band = AttackInfo::new(30, 60, 90);
        let tuning = DamageTuning::default();
        for attack in [0, 1, 10, 150, 10_000] {
            for level in [None, Some(1), Some(200)] {
                let stats = attack_vs_defense(attack, 0.0);
                let damage = get_attack_damage(&stats, level, band, &tuning);
                assert!((30..=90).contains(&damage), "attack {attack}: {damage}");
            }
        }
        // Overwhelming attacker reaches the maximum.
        let damage = get_attack_damage(&attack_vs_defense(500, 0.0), None, band, &tuning);
        assert_eq!(damage, 90);
    }

    #[test]
    fn formula_is_pure() {
        let stats = StatsInfo::new(vec![
            StatPair::new(120, 40.0 * 0.2, 0.75),
            StatPair::new(35, 60.0, 0.25),
        ]);
        let band = AttackInfo::new(30, 60, 90);
        let tuning = DamageTuning::default();
        let first = get_attack_damage(&stats, Some(12), band, &tuning);
        for _ in 0..10 {
            assert_eq!(get_attack_damage(&stats, Some(12), band, &tuning), first);
        }
    }

    #[test]
    fn player_level_raises_damage() {
        let stats = attack_vs_defense(50, 50.0);
        let band = AttackInfo::new(20, 60, 80);
        let tuning = DamageTuning::default();
        let monster = get_attack_damage(&stats, None, band, &tuning);
        let player = get_attack_damage(&stats, Some(50), band, &tuning);
        assert!(player > monster);
    }

    #[test]
    fn secondary_effects_stay_in_variance() {
        let mut rng = PcgRng::new(99);
        for _ in 0..500 {
            let damage = apply_secondary_effects(100, 100, 5, &mut rng);
            assert!((95..=105).contains(&damage));
        }
        assert_eq!(apply_secondary_effects(100, 0, 50, &mut rng), 100);
    }

    #[test]
    fn secondary_effects_replay_from_seed() {
        let mut a = PcgRng::new(5);
        let mut b = PcgRng::new(5);
        let left: Vec<u32> = (0..32)
            .map(|_| apply_secondary_effects(80, 35, 5, &mut a))
            .collect();
        let right: Vec<u32> = (0..32)
            .map(|_| apply_secondary_effects(80, 35, 5, &mut b))
            .collect();
        assert_eq!(left, right);
    }

    #[test]
    fn attack_status_thresholds() {
        assert_eq!(get_attack_status(0, 40, 0.02), AttackStatus::Missed);
        assert_eq!(get_attack_status(103, 100, 0.02), AttackStatus::Critical);
        assert_eq!(get_attack_status(97, 100, 0.02), AttackStatus::Weak);
        assert_eq!(get_attack_status(100, 100, 0.02), AttackStatus::Normal);
        assert_eq!(get_attack_status(0, 0, 0.02), AttackStatus::Normal);
    }

    #[test]
    fn interval_value_clamps_ratio() {
        assert_eq!(interval_value(0.0, 10.0, -1.0), 0.0);
        assert_eq!(interval_value(0.0, 10.0, 0.5), 5.0);
        assert_eq!(interval_value(0.0, 10.0, 3.0), 10.0);
    }
}
