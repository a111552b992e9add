//! Runtime orchestration for duels.
//!
//! This crate wires the pure fight rules of `fight-core` to the outside
//! world: human input under a timeout, presentation, mission progress and
//! participant blocking. Consumers build a [`FightRuntime`], create one
//! [`FightController`] per fight and subscribe to events on the
//! [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, its builder and configuration
//! - [`controller`] drives a single fight through its lifecycle
//! - [`api`] exposes the error type and the collaborator ports
//! - [`events`] provides topic-based event bus for flexible event routing
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod controller;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{
    ActionProvider, BlockingReason, BlockingRegistry, FightLease, FightView, IdleActionProvider,
    InMemoryBlockingRegistry, MissionKey, MissionParams, MissionTracker, MissionUpdate,
    NoopMissionTracker, NullView, Result, RuntimeError,
};
pub use controller::FightController;
pub use events::{Event, EventBus, FightEvent, Topic, TurnEvent};
pub use runtime::{FightRuntime, FightRuntimeBuilder, RuntimeConfig};
