//! Alterations: recurring status effects attached to a fighter.
//!
//! A fighter holds at most one alteration. It is triggered once at the start
//! of each of its owner's turns and decides on its own when it wears off.
//! Probabilities and caps come from [`AlterationTuning`].
//!
//! [`AlterationTuning`]: crate::config::AlterationTuning

mod burned;
mod cursed;
mod paralyzed;
mod poisoned;

pub use burned::Burned;
pub use cursed::Cursed;
pub use paralyzed::Paralyzed;
pub use poisoned::Poisoned;

use core::fmt;

use crate::action::ActionContext;
use crate::combat::{AttackInfo, AttackStatus, StatsInfo, get_attack_damage, get_attack_status};
use crate::config::AlterationTuning;
use crate::fighter::Fighter;

/// Stable identifier of an alteration.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[strum(serialize_all = "camelCase")]
pub enum AlterationId {
    Burned,
    Cursed,
    Poisoned,
    Paralyzed,
}

impl AlterationId {
    pub fn alteration(self) -> &'static dyn FightAlteration {
        match self {
            Self::Burned => &Burned,
            Self::Cursed => &Cursed,
            Self::Poisoned => &Poisoned,
            Self::Paralyzed => &Paralyzed,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// What an alteration did on a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlterationEffect {
    /// Fight points removed from the victim.
    Damage { damage: u32, status: AttackStatus },
    /// The alteration wore off without further effect.
    Healed,
    /// Nothing happened this turn.
    Pending,
    /// The victim loses its action this turn.
    ActionLost,
}

/// Narration of one alteration trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlterationOutcome {
    pub alteration: AlterationId,
    pub effect: AlterationEffect,
    /// The alteration was detached after this trigger.
    pub removed: bool,
}

impl AlterationOutcome {
    pub fn new(alteration: AlterationId, effect: AlterationEffect, removed: bool) -> Self {
        Self {
            alteration,
            effect,
            removed,
        }
    }

    pub fn prevents_action(&self) -> bool {
        matches!(self.effect, AlterationEffect::ActionLost)
    }
}

impl fmt::Display for AlterationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.effect {
            AlterationEffect::Damage { damage, .. } => {
                write!(f, "suffers {damage} damage from being {}", self.alteration)?
            }
            AlterationEffect::Healed => write!(f, "is no longer {}", self.alteration)?,
            AlterationEffect::Pending => write!(f, "is still {}", self.alteration)?,
            AlterationEffect::ActionLost => write!(f, "is {} and loses the turn", self.alteration)?,
        }
        if self.removed && !matches!(self.effect, AlterationEffect::Healed) {
            write!(f, ", then recovers")?;
        }
        Ok(())
    }
}

/// Behavior of an alteration.
pub trait FightAlteration: Sync {
    fn id(&self) -> AlterationId;

    fn emoji(&self) -> &'static str;

    /// Called once when the alteration is attached.
    fn on_attach(&self, _victim: &mut Fighter, _tuning: &AlterationTuning) {}

    /// Resolves one turn. `victim.alteration_turn()` already counts this turn.
    ///
    /// Setting `removed` in the outcome detaches the alteration afterwards.
    fn trigger(
        &self,
        victim: &mut Fighter,
        opponent: &Fighter,
        ctx: &mut ActionContext<'_>,
    ) -> AlterationOutcome;
}

/// Applies formula damage on behalf of the opponent who inflicted the alteration.
fn inflict(
    victim: &mut Fighter,
    opponent: &Fighter,
    attack: AttackInfo,
    stats: &StatsInfo,
    ctx: &ActionContext<'_>,
) -> AlterationEffect {
    let initial = get_attack_damage(stats, opponent.damage_level(), attack, &ctx.config.damage);
    let damage = victim.stats.damage(initial);
    AlterationEffect::Damage {
        damage,
        status: get_attack_status(damage, initial, ctx.config.damage.status_threshold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn table_resolves_matching_ids() {
        for id in AlterationId::iter() {
            assert_eq!(id.alteration().id(), id);
        }
        assert_eq!(AlterationId::from_str("cursed"), Ok(AlterationId::Cursed));
    }

    #[test]
    fn narration_reads_naturally() {
        let outcome = AlterationOutcome::new(
            AlterationId::Burned,
            AlterationEffect::Damage {
                damage: 12,
                status: AttackStatus::Normal,
            },
            false,
        );
        assert_eq!(outcome.to_string(), "suffers 12 damage from being burned");

        let healed = AlterationOutcome::new(AlterationId::Poisoned, AlterationEffect::Healed, true);
        assert_eq!(healed.to_string(), "is no longer poisoned");
    }
}
