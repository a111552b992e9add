//! Mission worker applying queued progress reports.
//!
//! Fights push [`MissionUpdate`]s into a bounded queue and move on; this
//! worker drains the queue and forwards each update to the tracker. Tracker
//! failures are logged and dropped.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::{MissionTracker, MissionUpdate};

pub struct MissionWorker {
    tracker: Arc<dyn MissionTracker>,
    update_rx: mpsc::Receiver<MissionUpdate>,
}

impl MissionWorker {
    pub fn new(tracker: Arc<dyn MissionTracker>, update_rx: mpsc::Receiver<MissionUpdate>) -> Self {
        Self { tracker, update_rx }
    }

    /// Main worker loop. Returns once every sender is dropped and the queue
    /// is empty.
    pub async fn run(mut self) {
        info!("MissionWorker started");

        let mut applied = 0usize;
        while let Some(update) = self.update_rx.recv().await {
            match self
                .tracker
                .update(update.fighter, update.mission, update.params)
                .await
            {
                Ok(()) => {
                    applied += 1;
                    debug!(
                        "Mission {} updated for fighter {}",
                        update.mission.as_str(),
                        update.fighter
                    );
                }
                Err(e) => {
                    warn!(
                        "Failed to update mission {} for fighter {}: {}",
                        update.mission.as_str(),
                        update.fighter,
                        e
                    );
                }
            }
        }

        info!("Mission queue closed, MissionWorker stopping ({} applied)", applied);
    }
}
