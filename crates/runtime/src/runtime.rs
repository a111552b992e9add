//! High-level runtime orchestrator.
//!
//! The runtime owns the shared collaborators and the mission worker, and
//! hands out one [`FightController`] per fight through a builder-based API.

use std::env;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use fight_core::{Fight, FightConfig, Fighter, PcgRng};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::api::{
    ActionProvider, BlockingRegistry, FightView, IdleActionProvider, InMemoryBlockingRegistry,
    MissionTracker, NoopMissionTracker, NullView, Result, RuntimeError,
};
use crate::controller::{Collaborators, FightController};
use crate::events::{Event, EventBus, Topic};
use crate::workers::MissionWorker;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub fight: FightConfig,
    /// How long a human fighter may take to choose an action.
    pub collector_timeout: Duration,
    pub event_buffer_size: usize,
    pub mission_queue_size: usize,
    /// Fixed seed for reproducible fights; drawn from system entropy when unset.
    pub seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            fight: FightConfig::default(),
            collector_timeout: Duration::from_secs(30),
            event_buffer_size: 100,
            mission_queue_size: 64,
            seed: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FIGHT_MAX_TURNS` - Turn cap per fight (default: 24)
    /// - `FIGHT_COLLECTOR_TIMEOUT_SECS` - Input timeout in seconds (default: 30)
    /// - `FIGHT_SEED` - RNG seed (default: random)
    /// - `FIGHT_EVENT_BUFFER` - Event bus capacity per topic (default: 100)
    /// - `FIGHT_MISSION_QUEUE` - Mission update queue size (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(max_turns) = read_env::<u32>("FIGHT_MAX_TURNS") {
            config.fight = config.fight.with_max_turns(max_turns);
        }

        if let Some(secs) = read_env::<u64>("FIGHT_COLLECTOR_TIMEOUT_SECS") {
            config.collector_timeout = Duration::from_secs(secs.max(1));
        }

        config.seed = read_env::<u64>("FIGHT_SEED");

        if let Some(capacity) = read_env::<usize>("FIGHT_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        if let Some(capacity) = read_env::<usize>("FIGHT_MISSION_QUEUE") {
            config.mission_queue_size = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Main runtime that hosts fights.
///
/// Design: fights run on the caller's task through [`FightController`];
/// the runtime only owns what outlives a fight (collaborators, event bus,
/// mission worker).
pub struct FightRuntime {
    config: RuntimeConfig,
    collaborators: Collaborators,
    fights_created: AtomicU64,
    mission_worker_handle: JoinHandle<()>,
}

impl FightRuntime {
    /// Create a new runtime builder
    pub fn builder() -> FightRuntimeBuilder {
        FightRuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Get a handle to the event bus
    pub fn events(&self) -> EventBus {
        self.collaborators.events.clone()
    }

    /// Subscribe to one event topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.collaborators.events.subscribe(topic)
    }

    /// Prepares a fight between two fighters without starting it.
    pub fn controller(&self, first: Fighter, second: Fighter, friendly: bool) -> FightController {
        let fight = Fight::new(first, second, friendly, self.config.fight.clone());
        FightController::new(fight, self.next_rng(), self.collaborators.clone())
    }

    /// Runs a whole fight and returns it in its finished state.
    pub async fn run_fight(
        &self,
        first: Fighter,
        second: Fighter,
        friendly: bool,
    ) -> Result<Fight> {
        let mut controller = self.controller(first, second, friendly);
        controller.run().await?;
        Ok(controller.into_fight())
    }

    /// Each fight gets its own stream; with a fixed seed, the n-th fight of
    /// the runtime always draws the same numbers.
    fn next_rng(&self) -> PcgRng {
        let index = self.fights_created.fetch_add(1, Ordering::Relaxed);
        let seed = match self.config.seed {
            Some(seed) => seed.wrapping_add(index),
            None => rand::random(),
        };
        PcgRng::new(seed)
    }

    /// Shutdown the runtime gracefully
    ///
    /// Waits for queued mission updates to be applied. Controllers still
    /// alive keep the queue open, so drop them first.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.collaborators);

        self.mission_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`FightRuntime`] with flexible configuration.
pub struct FightRuntimeBuilder {
    config: RuntimeConfig,
    view: Option<Arc<dyn FightView>>,
    provider: Option<Arc<dyn ActionProvider>>,
    mission_tracker: Option<Arc<dyn MissionTracker>>,
    blocking_registry: Option<Arc<dyn BlockingRegistry>>,
}

impl FightRuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            view: None,
            provider: None,
            mission_tracker: None,
            blocking_registry: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the fight view (default: discards everything)
    pub fn view(mut self, view: impl FightView + 'static) -> Self {
        self.view = Some(Arc::new(view));
        self
    }

    /// Set the provider of human fighters' actions (default: never answers)
    pub fn provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Set the mission tracker (default: drops updates)
    pub fn mission_tracker(mut self, tracker: impl MissionTracker + 'static) -> Self {
        self.mission_tracker = Some(Arc::new(tracker));
        self
    }

    /// Share a blocking registry with the rest of the application
    /// (default: a private in-memory registry)
    pub fn blocking_registry(mut self, registry: Arc<dyn BlockingRegistry>) -> Self {
        self.blocking_registry = Some(registry);
        self
    }

    /// Build the runtime and spawn its mission worker.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn build(self) -> FightRuntime {
        let (mission_tx, mission_rx) = mpsc::channel(self.config.mission_queue_size.max(1));
        let tracker = self
            .mission_tracker
            .unwrap_or_else(|| Arc::new(NoopMissionTracker));
        let mission_worker_handle = tokio::spawn(MissionWorker::new(tracker, mission_rx).run());

        let collaborators = Collaborators {
            view: self.view.unwrap_or_else(|| Arc::new(NullView)),
            provider: self
                .provider
                .unwrap_or_else(|| Arc::new(IdleActionProvider)),
            registry: self
                .blocking_registry
                .unwrap_or_else(|| Arc::new(InMemoryBlockingRegistry::new())),
            events: EventBus::with_capacity(self.config.event_buffer_size),
            missions: mission_tx,
            collector_timeout: self.config.collector_timeout,
        };

        tracing::debug!(
            "Fight runtime built (max turns: {}, collector timeout: {:?}, seeded: {})",
            self.config.fight.max_turns,
            self.config.collector_timeout,
            self.config.seed.is_some()
        );

        FightRuntime {
            config: self.config,
            collaborators,
            fights_created: AtomicU64::new(0),
            mission_worker_handle,
        }
    }
}
