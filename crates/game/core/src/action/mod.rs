//! Fight actions.
//!
//! Every action is a stateless strategy implementing [`FightAction`]. The set
//! is closed: [`FightActionId`] is the stable, camelCase identifier used in
//! logs, events and inputs, and [`FightActionId::action`] resolves it through
//! a static table.
//!
//! # Module Structure
//!
//! - `outcome`: structured narration returned by an action
//! - `kinds`: one implementation per action

pub mod kinds;
pub mod outcome;

pub use outcome::{ActionOutcome, ActionResult, FailReason, SideEffect, Target};

use crate::combat::{AttackInfo, StatsInfo};
use crate::config::FightConfig;
use crate::env::RngOracle;
use crate::error::FightError;
use crate::fighter::Fighter;

/// Stable identifier of a fight action.
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
pub enum FightActionId {
    SimpleAttack,
    QuickAttack,
    HeavyAttack,
    FireAttack,
    PoisonousAttack,
    CursedAttack,
    EnergeticAttack,
    SabotageAttack,
    DefenseBuff,
    FreezingTouch,
    Blizzard,
    CounterAttack,
    None,
}

impl FightActionId {
    /// Resolves the implementation of this action.
    pub fn action(self) -> &'static dyn FightAction {
        match self {
            Self::SimpleAttack => &kinds::SimpleAttack,
            Self::QuickAttack => &kinds::QuickAttack,
            Self::HeavyAttack => &kinds::HeavyAttack,
            Self::FireAttack => &kinds::FireAttack,
            Self::PoisonousAttack => &kinds::PoisonousAttack,
            Self::CursedAttack => &kinds::CursedAttack,
            Self::EnergeticAttack => &kinds::EnergeticAttack,
            Self::SabotageAttack => &kinds::SabotageAttack,
            Self::DefenseBuff => &kinds::DefenseBuff,
            Self::FreezingTouch => &kinds::FreezingTouch,
            Self::Blizzard => &kinds::Blizzard,
            Self::CounterAttack => &kinds::CounterAttack,
            Self::None => &kinds::NoAction,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Parses a stable action id such as `"heavyAttack"`.
    ///
    /// # Errors
    ///
    /// [`FightError::UnknownAction`] when `id` names no action.
    pub fn from_id(id: &str) -> Result<Self, FightError> {
        id.parse().map_err(|_| FightError::UnknownAction(id.to_string()))
    }
}

/// Inputs shared by every action and alteration resolution.
pub struct ActionContext<'a> {
    /// Turn being resolved (starts at 1).
    pub turn: u32,
    pub config: &'a FightConfig,
    pub rng: &'a mut dyn RngOracle,
}

impl<'a> ActionContext<'a> {
    pub fn new(turn: u32, config: &'a FightConfig, rng: &'a mut dyn RngOracle) -> Self {
        Self { turn, config, rng }
    }
}

/// Strategy implemented by every fight action.
pub trait FightAction: Sync {
    fn id(&self) -> FightActionId;

    /// Symbol prefixed to the history line of this action.
    fn emoji(&self) -> &'static str;

    /// Breath spent by the sender before the action resolves.
    fn breath_cost(&self) -> u32;

    fn attack_info(&self) -> AttackInfo {
        AttackInfo::none()
    }

    /// Stat comparisons used by the damage formula. Weights sum to `1.0`.
    fn stats_info(&self, sender: &Fighter, receiver: &Fighter) -> StatsInfo;

    /// Resolves the action. Game-rule refusals are reported as
    /// [`ActionResult::Failed`] and leave both fighters untouched.
    fn use_action(
        &self,
        sender: &mut Fighter,
        receiver: &mut Fighter,
        ctx: &mut ActionContext<'_>,
    ) -> ActionOutcome;
}
