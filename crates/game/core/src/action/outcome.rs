//! Structured narration of a resolved action.
//!
//! Outcomes carry everything the history line needs. [`core::fmt::Display`]
//! renders plain English; localized rendering belongs to the view.

use core::fmt;

use crate::alteration::AlterationId;
use crate::combat::AttackStatus;
use crate::stats::StatKind;

use super::FightActionId;

/// Which side of the action a side effect lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    Sender,
    Receiver,
}

/// Why an action resolved to a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailReason {
    /// Counter-attack on the first turn.
    TooEarly,
    /// The opponent's last action cannot be countered.
    Uncounterable,
    /// The opponent has not acted yet.
    NothingToCounter,
    OutOfBreath,
    /// The fighter did not pick an action in time.
    NoResponse,
    /// The fighter lost its action to paralysis.
    Paralyzed,
}

/// Main effect of an action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    /// Fight points removed from the receiver.
    Damage { damage: u32, status: AttackStatus },
    /// The action only produced side effects.
    Effect,
    Failed(FailReason),
    /// A counter-attack replayed the opponent's last action.
    Countered(Box<ActionOutcome>),
}

/// Secondary consequence of an action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SideEffect {
    Heal {
        target: Target,
        amount: u32,
    },
    StatChange {
        target: Target,
        stat: StatKind,
        percent: i32,
    },
    /// An alteration was requested; `active` is the one the target ends up with.
    NewAlteration {
        target: Target,
        requested: AlterationId,
        active: AlterationId,
    },
}

/// Result of [`FightAction::use_action`](super::FightAction::use_action).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub action: FightActionId,
    pub result: ActionResult,
    pub side_effects: Vec<SideEffect>,
}

impl ActionOutcome {
    pub fn new(action: FightActionId, result: ActionResult) -> Self {
        Self {
            action,
            result,
            side_effects: Vec::new(),
        }
    }

    pub fn failed(action: FightActionId, reason: FailReason) -> Self {
        Self::new(action, ActionResult::Failed(reason))
    }

    pub fn with_side_effect(mut self, effect: SideEffect) -> Self {
        self.side_effects.push(effect);
        self
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.result, ActionResult::Failed(_))
    }

    /// Damage dealt to the receiver, including through a counter-attack.
    pub fn damage(&self) -> u32 {
        match &self.result {
            ActionResult::Damage { damage, .. } => *damage,
            ActionResult::Countered(inner) => inner.damage(),
            _ => 0,
        }
    }
}

fn side(target: Target) -> &'static str {
    match target {
        Target::Sender => "their",
        Target::Receiver => "the opponent's",
    }
}

impl fmt::Display for FailReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::TooEarly => "tries to counter, but there is nothing to counter yet",
            Self::Uncounterable => "tries to counter, but that move cannot be countered",
            Self::NothingToCounter => "tries to counter, but the opponent has not attacked",
            Self::OutOfBreath => "is out of breath and cannot act",
            Self::NoResponse => "did not respond and stays still",
            Self::Paralyzed => "is paralyzed and cannot move",
        };
        f.write_str(text)
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            ActionResult::Damage { damage, status } => {
                write!(f, "uses {} and deals {damage} damage", self.action)?;
                match status {
                    AttackStatus::Critical => f.write_str(" (critical hit!)")?,
                    AttackStatus::Weak => f.write_str(" (weak hit)")?,
                    AttackStatus::Missed => f.write_str(" (missed)")?,
                    AttackStatus::Normal => {}
                }
            }
            ActionResult::Effect => write!(f, "uses {}", self.action)?,
            ActionResult::Failed(reason) => write!(f, "{reason}")?,
            ActionResult::Countered(inner) => write!(f, "counters and {inner}")?,
        }

        for effect in &self.side_effects {
            match effect {
                SideEffect::Heal { amount, .. } => write!(f, ", recovers {amount} fight points")?,
                SideEffect::StatChange {
                    target,
                    stat,
                    percent,
                } => {
                    let verb = if *percent >= 0 { "raises" } else { "lowers" };
                    write!(f, ", {verb} {} {stat} by {}%", side(*target), percent.abs())?;
                }
                SideEffect::NewAlteration {
                    target,
                    requested,
                    active,
                } => {
                    let who = match target {
                        Target::Sender => "becomes",
                        Target::Receiver => "leaves the opponent",
                    };
                    if requested == active {
                        write!(f, ", {who} {requested}")?;
                    } else {
                        let holder = match target {
                            Target::Sender => "they are",
                            Target::Receiver => "the opponent is",
                        };
                        write!(f, ", but {holder} already {active}")?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narration_mentions_damage_and_effects() {
        let outcome = ActionOutcome::new(
            FightActionId::EnergeticAttack,
            ActionResult::Damage {
                damage: 42,
                status: AttackStatus::Critical,
            },
        )
        .with_side_effect(SideEffect::Heal {
            target: Target::Sender,
            amount: 21,
        });

        assert_eq!(
            outcome.to_string(),
            "uses energeticAttack and deals 42 damage (critical hit!), recovers 21 fight points"
        );
    }

    #[test]
    fn counter_damage_is_reported() {
        let inner = ActionOutcome::new(
            FightActionId::SimpleAttack,
            ActionResult::Damage {
                damage: 30,
                status: AttackStatus::Normal,
            },
        );
        let outcome = ActionOutcome::new(
            FightActionId::CounterAttack,
            ActionResult::Countered(Box::new(inner)),
        );
        assert_eq!(outcome.damage(), 30);
        assert!(outcome.to_string().starts_with("counters and uses simpleAttack"));
    }
}
