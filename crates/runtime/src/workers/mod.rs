//! Worker tasks that back the runtime orchestration.
//!
//! Fights run on the caller's task; workers only take over the
//! fire-and-forget side effects (mission progress).

mod missions;

pub use missions::MissionWorker;
