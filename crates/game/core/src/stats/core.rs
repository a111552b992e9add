//! Stat set owned by a fighter for the duration of a fight.
//!
//! Base values come from the caller (player record, monster template) and are
//! never mutated. Fight points and breath are the only stored current values;
//! every other stat is recomputed from the base through the modifier ledger.

use super::modifiers::{ModifierLedger, ModifierOrigin, StatModifier};

/// Stats that can be targeted by a modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "camelCase")]
pub enum StatKind {
    Attack,
    Defense,
    Speed,
    MaxFightPoint,
    MaxBreath,
    BreathRegen,
}

/// Persistent inputs of a fighter's stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub max_fight_point: u32,
    /// Breath available on the first turn.
    pub breath: u32,
    pub max_breath: u32,
    pub breath_regen: u32,
}

impl BaseStats {
    pub const fn new(attack: u32, defense: u32, speed: u32, max_fight_point: u32) -> Self {
        Self {
            attack,
            defense,
            speed,
            max_fight_point,
            breath: 4,
            max_breath: 10,
            breath_regen: 2,
        }
    }

    pub const fn with_breath(mut self, breath: u32, max_breath: u32, breath_regen: u32) -> Self {
        self.breath = breath;
        self.max_breath = max_breath;
        self.breath_regen = breath_regen;
        self
    }

    fn get(&self, stat: StatKind) -> u32 {
        match stat {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
            StatKind::MaxFightPoint => self.max_fight_point,
            StatKind::MaxBreath => self.max_breath,
            StatKind::BreathRegen => self.breath_regen,
        }
    }
}

/// Effective values captured at a point in time (e.g. fight start).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatSnapshot {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub fight_points: u32,
    pub max_fight_point: u32,
    pub breath: u32,
    pub max_breath: u32,
    pub breath_regen: u32,
}

/// Mutable stats of a fighter during a fight.
///
/// # Invariants
///
/// - `fight_points` stays within `[0, max_fight_point()]`
/// - `breath` stays within `[0, max_breath()]`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatSet {
    base: BaseStats,
    fight_points: u32,
    breath: u32,
    ledger: ModifierLedger,
    baseline: Option<StatSnapshot>,
}

impl StatSet {
    /// Creates a stat set at full fight points.
    pub fn new(base: BaseStats) -> Self {
        Self {
            base,
            fight_points: base.max_fight_point,
            breath: base.breath.min(base.max_breath),
            ledger: ModifierLedger::new(),
            baseline: None,
        }
    }

    /// Creates a stat set with explicit current fight points (wounded fighters).
    pub fn with_fight_points(base: BaseStats, fight_points: u32) -> Self {
        let mut stats = Self::new(base);
        stats.fight_points = fight_points.min(base.max_fight_point);
        stats
    }

    pub fn base(&self) -> &BaseStats {
        &self.base
    }

    /// Effective value of a modifiable stat.
    pub fn get(&self, stat: StatKind) -> u32 {
        self.ledger.reduce(stat, self.base.get(stat))
    }

    pub fn attack(&self) -> u32 {
        self.get(StatKind::Attack)
    }

    pub fn defense(&self) -> u32 {
        self.get(StatKind::Defense)
    }

    pub fn speed(&self) -> u32 {
        self.get(StatKind::Speed)
    }

    pub fn max_fight_point(&self) -> u32 {
        self.get(StatKind::MaxFightPoint)
    }

    pub fn max_breath(&self) -> u32 {
        self.get(StatKind::MaxBreath)
    }

    pub fn breath_regen(&self) -> u32 {
        self.get(StatKind::BreathRegen)
    }

    pub fn fight_points(&self) -> u32 {
        self.fight_points
    }

    pub fn breath(&self) -> u32 {
        self.breath
    }

    /// Remaining fight points as a fraction of the maximum, in `[0, 1]`.
    pub fn remaining_ratio(&self) -> f64 {
        let max = self.max_fight_point();
        if max == 0 {
            return 0.0;
        }
        f64::from(self.fight_points) / f64::from(max)
    }

    /// Removes up to `amount` fight points and returns how many were removed.
    pub fn damage(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.fight_points);
        self.fight_points -= removed;
        removed
    }

    /// Restores up to `amount` fight points and returns how many were restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_fight_point().saturating_sub(self.fight_points));
        self.fight_points += restored;
        restored
    }

    /// Spends breath for an action. Returns false (and spends nothing) if short.
    pub fn spend_breath(&mut self, cost: u32) -> bool {
        if cost > self.breath {
            return false;
        }
        self.breath -= cost;
        true
    }

    /// Adds the per-turn breath regeneration, clamped to the maximum.
    pub fn regenerate_breath(&mut self) -> u32 {
        let gained = self
            .breath_regen()
            .min(self.max_breath().saturating_sub(self.breath));
        self.breath += gained;
        gained
    }

    pub fn ledger(&self) -> &ModifierLedger {
        &self.ledger
    }

    /// Records a modifier and re-applies the current-value invariants.
    pub fn apply_modifier(&mut self, modifier: StatModifier) {
        self.ledger.push(modifier);
        self.clamp_current();
    }

    /// Removes every modifier from `origin`, returning them.
    pub fn revert_origin(&mut self, origin: ModifierOrigin) -> Vec<StatModifier> {
        let reverted = self.ledger.revert_origin(origin);
        self.clamp_current();
        reverted
    }

    /// Freezes the effective values at fight start for later comparison.
    pub fn lock_baseline(&mut self) {
        self.baseline = Some(self.snapshot());
    }

    pub fn baseline(&self) -> Option<&StatSnapshot> {
        self.baseline.as_ref()
    }

    pub fn snapshot(&self) -> StatSnapshot {
        StatSnapshot {
            attack: self.attack(),
            defense: self.defense(),
            speed: self.speed(),
            fight_points: self.fight_points,
            max_fight_point: self.max_fight_point(),
            breath: self.breath,
            max_breath: self.max_breath(),
            breath_regen: self.breath_regen(),
        }
    }

    fn clamp_current(&mut self) {
        self.fight_points = self.fight_points.min(self.max_fight_point());
        self.breath = self.breath.min(self.max_breath());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::FightActionId;

    fn stats() -> StatSet {
        StatSet::new(BaseStats::new(100, 50, 40, 300).with_breath(3, 6, 2))
    }

    #[test]
    fn fight_points_are_clamped() {
        let mut stats = stats();
        assert_eq!(stats.damage(120), 120);
        assert_eq!(stats.fight_points(), 180);

        assert_eq!(stats.heal(500), 120);
        assert_eq!(stats.fight_points(), 300);

        assert_eq!(stats.damage(1_000), 300);
        assert_eq!(stats.fight_points(), 0);
    }

    #[test]
    fn lowering_max_fight_point_clamps_current() {
        let mut stats = stats();
        stats.apply_modifier(StatModifier::addition(
            ModifierOrigin::Action(FightActionId::Blizzard),
            StatKind::MaxFightPoint,
            -100.0,
        ));
        assert_eq!(stats.max_fight_point(), 200);
        assert_eq!(stats.fight_points(), 200);
    }

    #[test]
    fn breath_is_spent_and_regenerated() {
        let mut stats = stats();
        assert!(!stats.spend_breath(4));
        assert_eq!(stats.breath(), 3);
        assert!(stats.spend_breath(3));
        assert_eq!(stats.breath(), 0);

        assert_eq!(stats.regenerate_breath(), 2);
        assert_eq!(stats.regenerate_breath(), 2);
        assert_eq!(stats.regenerate_breath(), 2);
        assert_eq!(stats.regenerate_breath(), 0);
        assert_eq!(stats.breath(), 6);
    }

    #[test]
    fn baseline_is_frozen_at_lock_time() {
        let mut stats = stats();
        stats.lock_baseline();
        stats.apply_modifier(StatModifier::addition(
            ModifierOrigin::Action(FightActionId::Blizzard),
            StatKind::Defense,
            -5.0,
        ));
        assert_eq!(stats.defense(), 45);
        assert_eq!(stats.baseline().map(|b| b.defense), Some(50));
    }
}
