//! Modifier ledger - temporary stat adjustments with attribution.
//!
//! Every adjustment applied during a fight is recorded with its origin,
//! operation and value. Effective stats are never stored: they are recomputed
//! from the base value through [`ModifierLedger::reduce`].
//!
//! Formula: effective = round(max(0, (base + Σ additions) × Π multiplications))

use crate::action::FightActionId;
use crate::alteration::AlterationId;

use super::core::StatKind;

/// What caused a modifier to be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierOrigin {
    /// Applied by a fight action (buffs and debuffs).
    Action(FightActionId),
    /// Applied while an alteration is attached; reverted on removal.
    Alteration(AlterationId),
    /// Pre-fight consumable.
    Potion,
}

/// How a modifier combines with the base value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierOperation {
    /// Added to the base before multiplications (may be negative).
    Addition,
    /// Multiplies the sum of base and additions.
    Multiplication,
}

/// A single recorded stat adjustment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifier {
    pub origin: ModifierOrigin,
    pub stat: StatKind,
    pub operation: ModifierOperation,
    pub value: f64,
}

impl StatModifier {
    pub fn addition(origin: ModifierOrigin, stat: StatKind, value: f64) -> Self {
        Self {
            origin,
            stat,
            operation: ModifierOperation::Addition,
            value,
        }
    }

    pub fn multiplication(origin: ModifierOrigin, stat: StatKind, value: f64) -> Self {
        Self {
            origin,
            stat,
            operation: ModifierOperation::Multiplication,
            value,
        }
    }
}

/// Append-only record of the modifiers applied to one fighter.
///
/// Entries are only removed through [`ModifierLedger::revert_origin`], which
/// hands the removed entries back to the caller.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifierLedger {
    entries: Vec<StatModifier>,
}

impl ModifierLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, modifier: StatModifier) {
        self.entries.push(modifier);
    }

    /// All modifiers in application order.
    pub fn entries(&self) -> &[StatModifier] {
        &self.entries
    }

    /// Modifiers affecting one stat, in application order.
    pub fn for_stat(&self, stat: StatKind) -> impl Iterator<Item = &StatModifier> {
        self.entries.iter().filter(move |m| m.stat == stat)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Applies every modifier of `stat` to `base`.
    pub fn reduce(&self, stat: StatKind, base: u32) -> u32 {
        Self::reduce_entries(self.for_stat(stat), base)
    }

    /// Effective value of `stat` after each of its modifiers, in order.
    ///
    /// The first element is the base value with no modifier applied.
    pub fn replay(&self, stat: StatKind, base: u32) -> Vec<u32> {
        let relevant: Vec<&StatModifier> = self.for_stat(stat).collect();
        (0..=relevant.len())
            .map(|applied| Self::reduce_entries(relevant[..applied].iter().copied(), base))
            .collect()
    }

    /// Removes every modifier applied by `origin` and returns them.
    pub fn revert_origin(&mut self, origin: ModifierOrigin) -> Vec<StatModifier> {
        let (reverted, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|m| m.origin == origin);
        self.entries = kept;
        reverted
    }

    fn reduce_entries<'a>(entries: impl Iterator<Item = &'a StatModifier>, base: u32) -> u32 {
        let (additions, multiplier) =
            entries.fold((0.0_f64, 1.0_f64), |(add, mul), m| match m.operation {
                ModifierOperation::Addition => (add + m.value, mul),
                ModifierOperation::Multiplication => (add, mul * m.value),
            });

        let value = (f64::from(base) + additions) * multiplier;
        value.max(0.0).round() as u32
    }
}
