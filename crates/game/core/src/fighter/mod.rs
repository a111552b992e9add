//! Fight participants.
//!
//! A [`Fighter`] wraps one [`StatSet`] together with the per-fight state the
//! rules need: the alteration slot, the queued action and the history of
//! actions used. Player and monster fighters only differ by [`FighterKind`].

use crate::action::{ActionContext, FightActionId};
use crate::alteration::{AlterationId, AlterationOutcome};
use crate::config::AlterationTuning;
use crate::env::RngOracle;
use crate::stats::{ModifierOrigin, StatKind, StatModifier, StatSet};

/// Identity of a fighter (user id for players, template id for monsters).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterId(pub u64);

impl core::fmt::Display for FighterId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a fighter, fixed once the turn order is decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FighterStatus {
    /// Plays on odd turns.
    Attacker,
    /// Plays on even turns.
    Defender,
}

/// Stat boosted by a fight potion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PotionNature {
    Attack,
    Defense,
    Speed,
}

impl PotionNature {
    pub fn stat(self) -> StatKind {
        match self {
            Self::Attack => StatKind::Attack,
            Self::Defense => StatKind::Defense,
            Self::Speed => StatKind::Speed,
        }
    }
}

/// Pre-fight consumable equipped by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FightPotion {
    pub nature: PotionNature,
    /// Flat bonus added to the boosted stat.
    pub power: u32,
}

/// Entry of a monster's weighted attack table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterAttack {
    pub action: FightActionId,
    pub weight: u32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FighterKind {
    Player {
        level: u32,
        potion: Option<FightPotion>,
    },
    Monster {
        level: u32,
        attack_table: Vec<MonsterAttack>,
    },
}

/// A combat participant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    id: FighterId,
    name: String,
    kind: FighterKind,
    pub stats: StatSet,
    status: FighterStatus,
    alteration_turn: u32,
    current_alteration: Option<AlterationId>,
    fight_actions_history: Vec<FightActionId>,
    next_fight_action: Option<FightActionId>,
    available_actions: Vec<FightActionId>,
}

impl Fighter {
    pub fn player(
        id: FighterId,
        name: impl Into<String>,
        level: u32,
        stats: StatSet,
        available_actions: Vec<FightActionId>,
    ) -> Self {
        Self::new(
            id,
            name.into(),
            FighterKind::Player {
                level,
                potion: None,
            },
            stats,
            available_actions,
        )
    }

    /// Creates a monster; its available actions are the entries of its table.
    pub fn monster(
        id: FighterId,
        name: impl Into<String>,
        level: u32,
        stats: StatSet,
        attack_table: Vec<MonsterAttack>,
    ) -> Self {
        let available_actions = attack_table.iter().map(|entry| entry.action).collect();
        Self::new(
            id,
            name.into(),
            FighterKind::Monster {
                level,
                attack_table,
            },
            stats,
            available_actions,
        )
    }

    fn new(
        id: FighterId,
        name: String,
        kind: FighterKind,
        stats: StatSet,
        available_actions: Vec<FightActionId>,
    ) -> Self {
        Self {
            id,
            name,
            kind,
            stats,
            status: FighterStatus::Attacker,
            alteration_turn: 0,
            current_alteration: None,
            fight_actions_history: Vec::new(),
            next_fight_action: None,
            available_actions,
        }
    }

    /// Equips a fight potion. Ignored for monsters.
    pub fn with_potion(mut self, equipped: FightPotion) -> Self {
        if let FighterKind::Player { potion, .. } = &mut self.kind {
            *potion = Some(equipped);
        }
        self
    }

    pub fn id(&self) -> FighterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FighterKind {
        &self.kind
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, FighterKind::Player { .. })
    }

    pub fn level(&self) -> u32 {
        match self.kind {
            FighterKind::Player { level, .. } | FighterKind::Monster { level, .. } => level,
        }
    }

    /// Level fed to the damage formula. Monsters get no level shift.
    pub fn damage_level(&self) -> Option<u32> {
        match self.kind {
            FighterKind::Player { level, .. } => Some(level),
            FighterKind::Monster { .. } => None,
        }
    }

    /// How the fighter is referred to in the history.
    pub fn mention(&self) -> String {
        match self.kind {
            FighterKind::Player { .. } => format!("<@{}>", self.id),
            FighterKind::Monster { .. } => self.name.clone(),
        }
    }

    pub fn status(&self) -> FighterStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: FighterStatus) {
        self.status = status;
    }

    pub fn is_dead(&self) -> bool {
        self.stats.fight_points() == 0
    }

    /// Dead, or in a state the rules cannot continue with.
    pub fn is_dead_or_bug(&self) -> bool {
        self.is_dead() || self.stats.max_fight_point() == 0
    }

    // ===== actions =====

    pub fn available_actions(&self) -> &[FightActionId] {
        &self.available_actions
    }

    /// Whether the fighter may pick `action`. The idle action is always allowed.
    pub fn can_use(&self, action: FightActionId) -> bool {
        action == FightActionId::None || self.available_actions.contains(&action)
    }

    /// Whether the fighter can currently pay for `action`.
    pub fn can_afford(&self, action: FightActionId) -> bool {
        action.action().breath_cost() <= self.stats.breath()
    }

    pub fn fight_actions_history(&self) -> &[FightActionId] {
        &self.fight_actions_history
    }

    pub fn last_fight_action_used(&self) -> Option<FightActionId> {
        self.fight_actions_history.last().copied()
    }

    pub(crate) fn record_action(&mut self, action: FightActionId) {
        self.fight_actions_history.push(action);
    }

    pub fn next_fight_action(&self) -> Option<FightActionId> {
        self.next_fight_action
    }

    /// Queues an action that will be executed without asking on the next turn.
    pub fn queue_action(&mut self, action: FightActionId) {
        self.next_fight_action = Some(action);
    }

    pub(crate) fn take_next_action(&mut self) -> Option<FightActionId> {
        self.next_fight_action.take()
    }

    /// Picks a monster action from the weighted table among affordable entries.
    ///
    /// Returns `None` for players, or when nothing is affordable.
    pub fn plan_action(&self, rng: &mut dyn RngOracle) -> Option<FightActionId> {
        let FighterKind::Monster { attack_table, .. } = &self.kind else {
            return None;
        };

        let candidates: Vec<&MonsterAttack> = attack_table
            .iter()
            .filter(|entry| entry.weight > 0 && self.can_afford(entry.action))
            .collect();
        let total: u32 = candidates.iter().map(|entry| entry.weight).sum();
        if total == 0 {
            return None;
        }

        let mut roll = rng.range(1, total);
        for entry in candidates {
            if roll <= entry.weight {
                return Some(entry.action);
            }
            roll -= entry.weight;
        }
        None
    }

    // ===== pre-fight =====

    /// Drinks the equipped potion in ranked fights and returns it.
    ///
    /// Friendly fights never consume potions.
    pub fn consume_potion_if_needed(&mut self, friendly: bool) -> Option<FightPotion> {
        if friendly {
            return None;
        }
        let FighterKind::Player { potion, .. } = &mut self.kind else {
            return None;
        };
        let consumed = potion.take()?;
        self.stats.apply_modifier(StatModifier::addition(
            ModifierOrigin::Potion,
            consumed.nature.stat(),
            f64::from(consumed.power),
        ));
        Some(consumed)
    }

    // ===== alterations =====

    pub fn current_alteration(&self) -> Option<AlterationId> {
        self.current_alteration
    }

    /// Consecutive turns spent under the current alteration.
    pub fn alteration_turn(&self) -> u32 {
        self.alteration_turn
    }

    /// Attaches an alteration unless one is already active.
    ///
    /// Returns the alteration active after the call.
    pub fn new_alteration(
        &mut self,
        alteration: AlterationId,
        tuning: &AlterationTuning,
    ) -> AlterationId {
        if let Some(active) = self.current_alteration {
            return active;
        }
        self.current_alteration = Some(alteration);
        self.alteration_turn = 0;
        alteration.alteration().on_attach(self, tuning);
        alteration
    }

    /// Detaches the current alteration and reverts its stat modifiers.
    pub fn remove_alteration(&mut self) -> Option<AlterationId> {
        let removed = self.current_alteration.take()?;
        self.stats.revert_origin(ModifierOrigin::Alteration(removed));
        self.alteration_turn = 0;
        Some(removed)
    }

    /// Runs the current alteration for one turn.
    pub(crate) fn trigger_alteration(
        &mut self,
        opponent: &Fighter,
        ctx: &mut ActionContext<'_>,
    ) -> Option<AlterationOutcome> {
        let alteration = self.current_alteration?;
        self.alteration_turn += 1;
        let outcome = alteration.alteration().trigger(self, opponent, ctx);
        if outcome.removed {
            self.remove_alteration();
        }
        Some(outcome)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::stats::BaseStats;
    use strum::IntoEnumIterator;

    pub(crate) fn player(
        id: u64,
        level: u32,
        attack: u32,
        defense: u32,
        speed: u32,
        fight_points: u32,
    ) -> Fighter {
        Fighter::player(
            FighterId(id),
            format!("player-{id}"),
            level,
            StatSet::new(
                BaseStats::new(attack, defense, speed, fight_points).with_breath(10, 20, 3),
            ),
            FightActionId::iter().collect(),
        )
    }

    pub(crate) fn monster(
        id: u64,
        attack: u32,
        defense: u32,
        speed: u32,
        fight_points: u32,
    ) -> Fighter {
        Fighter::monster(
            FighterId(id),
            format!("monster-{id}"),
            10,
            StatSet::new(
                BaseStats::new(attack, defense, speed, fight_points).with_breath(10, 20, 3),
            ),
            vec![
                MonsterAttack {
                    action: FightActionId::SimpleAttack,
                    weight: 3,
                },
                MonsterAttack {
                    action: FightActionId::HeavyAttack,
                    weight: 1,
                },
            ],
        )
    }
}
