//! Implementations of every [`FightActionId`](super::FightActionId).

mod basic;
mod counter;
mod elemental;
mod frost;
mod sustain;

pub use basic::{HeavyAttack, NoAction, QuickAttack, SimpleAttack};
pub use counter::CounterAttack;
pub use elemental::{CursedAttack, FireAttack, PoisonousAttack};
pub use frost::{Blizzard, FreezingTouch};
pub use sustain::{DefenseBuff, EnergeticAttack, SabotageAttack};

use crate::alteration::AlterationId;
use crate::combat::{
    AttackInfo, StatPair, StatsInfo, apply_secondary_effects, get_attack_damage,
    get_attack_status,
};
use crate::fighter::Fighter;

use super::{ActionContext, ActionResult, SideEffect, Target};

/// Chance and spread of the random variance applied to a hit.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Variance {
    pub critical_percent: u32,
    pub spread_percent: u32,
}

impl Variance {
    pub(crate) const fn new(critical_percent: u32, spread_percent: u32) -> Self {
        Self {
            critical_percent,
            spread_percent,
        }
    }
}

/// Attack against defense, the default comparison of a plain hit.
pub(crate) fn attack_vs_defense(sender: &Fighter, receiver: &Fighter) -> StatsInfo {
    StatsInfo::new(vec![StatPair::new(
        sender.stats.attack(),
        f64::from(receiver.stats.defense()),
        1.0,
    )])
}

/// Resolves a damaging hit from `sender` on `receiver`.
pub(crate) fn strike(
    sender: &Fighter,
    receiver: &mut Fighter,
    attack: AttackInfo,
    stats: &StatsInfo,
    variance: Variance,
    ctx: &mut ActionContext<'_>,
) -> ActionResult {
    let initial = get_attack_damage(stats, sender.damage_level(), attack, &ctx.config.damage);
    let rolled = apply_secondary_effects(
        initial,
        variance.critical_percent,
        variance.spread_percent,
        ctx.rng,
    );
    let damage = receiver.stats.damage(rolled);
    let status = get_attack_status(rolled, initial, ctx.config.damage.status_threshold);
    ActionResult::Damage { damage, status }
}

/// Attaches `alteration` to `fighter` and reports which one ends up active.
pub(crate) fn afflict(
    fighter: &mut Fighter,
    target: Target,
    alteration: AlterationId,
    ctx: &ActionContext<'_>,
) -> SideEffect {
    let active = fighter.new_alteration(alteration, &ctx.config.alterations);
    SideEffect::NewAlteration {
        target,
        requested: alteration,
        active,
    }
}
