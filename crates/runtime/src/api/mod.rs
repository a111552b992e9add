//! Public runtime API surface.
//!
//! Re-exports the error type and the collaborator ports a fight talks to:
//! action providers, the view, mission tracking and participant blocking.
mod blocking;
mod errors;
mod missions;
mod providers;
mod view;

pub use blocking::{BlockingRegistry, FightLease, InMemoryBlockingRegistry};
pub use errors::{BlockingReason, Result, RuntimeError};
pub use missions::{MissionKey, MissionParams, MissionTracker, MissionUpdate, NoopMissionTracker};
pub use providers::{ActionProvider, IdleActionProvider};
pub use view::{FightView, NullView};
