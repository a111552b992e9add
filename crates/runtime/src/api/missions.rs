//! Mission progress port.
//!
//! Fights only report progress; the bookkeeping lives behind
//! [`MissionTracker`]. Updates are queued and applied by a background worker,
//! so a slow or failing tracker never delays a fight.
use async_trait::async_trait;
use fight_core::FighterId;
use serde::{Deserialize, Serialize};

use super::errors::Result;

/// Missions a fight can progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MissionKey {
    FriendlyFight,
    RankedFight,
    AnyFight,
    /// Reported for the winner only, with the share of fight points left.
    FightHealthPercent,
}

impl MissionKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FriendlyFight => "friendlyFight",
            Self::RankedFight => "rankedFight",
            Self::AnyFight => "anyFight",
            Self::FightHealthPercent => "fightHealthPercent",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionParams {
    /// Remaining fight points, as a percentage of the maximum.
    pub remaining_percent: Option<u32>,
}

impl MissionParams {
    pub fn remaining_percent(percent: u32) -> Self {
        Self {
            remaining_percent: Some(percent),
        }
    }
}

/// One queued progress report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionUpdate {
    pub fighter: FighterId,
    pub mission: MissionKey,
    pub params: MissionParams,
}

#[async_trait]
pub trait MissionTracker: Send + Sync {
    async fn update(
        &self,
        fighter: FighterId,
        mission: MissionKey,
        params: MissionParams,
    ) -> Result<()>;
}

/// Tracker that accepts and drops every update.
pub struct NoopMissionTracker;

#[async_trait]
impl MissionTracker for NoopMissionTracker {
    async fn update(
        &self,
        _fighter: FighterId,
        _mission: MissionKey,
        _params: MissionParams,
    ) -> Result<()> {
        Ok(())
    }
}
