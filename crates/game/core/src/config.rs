use crate::action::FightActionId;

/// Fight rules and tunable balance parameters.
///
/// Alteration probabilities and damage scaling are game-balance values, so they
/// live here instead of being hard-coded in the alteration implementations.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FightConfig {
    /// The fight ends once the turn counter reaches this value.
    pub max_turns: u32,
    /// Action resolved when a human fighter does not answer in time.
    pub default_action: FightActionId,
    /// Actions a counter-attack refuses to replay.
    pub uncounterable_actions: Vec<FightActionId>,
    pub alterations: AlterationTuning,
    pub damage: DamageTuning,
}

impl FightConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_TURNS: u32 = 24;

    pub fn new() -> Self {
        Self {
            max_turns: Self::DEFAULT_MAX_TURNS,
            default_action: FightActionId::None,
            uncounterable_actions: vec![
                FightActionId::CounterAttack,
                FightActionId::None,
                FightActionId::DefenseBuff,
            ],
            alterations: AlterationTuning::default(),
            damage: DamageTuning::default(),
        }
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns.max(2);
        self
    }

    pub fn with_default_action(mut self, action: FightActionId) -> Self {
        self.default_action = action;
        self
    }

    pub fn with_alterations(mut self, alterations: AlterationTuning) -> Self {
        self.alterations = alterations;
        self
    }

    pub fn is_counterable(&self, action: FightActionId) -> bool {
        !self.uncounterable_actions.contains(&action)
    }
}

impl Default for FightConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Removal curves and caps for the alterations.
///
/// Percentages are integer chances in `0..=100`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlterationTuning {
    /// Chance for a burn to heal on each turn after the first.
    pub burn_removal_percent: u32,
    /// Chance for a poison to wear off on each turn after the first.
    pub poison_removal_percent: u32,
    /// Chance for a curse to release once the grace period is over.
    pub curse_removal_percent: u32,
    /// Turns during which a curse cannot release early.
    pub curse_grace_turns: u32,
    /// A curse always releases once it has been active for more turns than this.
    pub curse_max_turns: u32,
    /// Chance for a paralyzed fighter to lose its action.
    pub paralysis_skip_percent: u32,
    /// Paralysis wears off once it has been active for more turns than this.
    pub paralysis_max_turns: u32,
    /// Speed multiplier applied for the duration of a paralysis.
    pub paralysis_speed_factor: f64,
}

impl Default for AlterationTuning {
    fn default() -> Self {
        Self {
            burn_removal_percent: 70,
            poison_removal_percent: 50,
            curse_removal_percent: 25,
            curse_grace_turns: 2,
            curse_max_turns: 4,
            paralysis_skip_percent: 50,
            paralysis_max_turns: 2,
            paralysis_speed_factor: 0.5,
        }
    }
}

/// Parameters of the damage formula that are not carried by the actions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageTuning {
    /// Maximum score shift granted by a player's level.
    pub level_weight: f64,
    /// Level at which a player gets half of `level_weight`.
    pub level_half_point: f64,
    /// Distance from a ratio of 1 at which a hit is narrated as critical or weak.
    pub status_threshold: f64,
}

impl Default for DamageTuning {
    fn default() -> Self {
        Self {
            level_weight: 0.2,
            level_half_point: 50.0,
            status_threshold: 0.02,
        }
    }
}
