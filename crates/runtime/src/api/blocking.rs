//! Participant blocking.
//!
//! A fighter in a fight must not join another one. The controller takes a
//! [`FightLease`] when the fight starts and gives it back when it ends; the
//! lease also releases on drop so an aborted fight never leaves a fighter
//! blocked.
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use fight_core::FighterId;

use super::errors::{BlockingReason, Result, RuntimeError};

pub trait BlockingRegistry: Send + Sync {
    /// Blocks `fighter`.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::FighterBusy`] when the fighter is already blocked.
    fn block(&self, fighter: FighterId, reason: BlockingReason) -> Result<()>;

    /// Unblocks `fighter`. Unblocking a free fighter is a no-op.
    fn unblock(&self, fighter: FighterId);

    fn is_blocked(&self, fighter: FighterId) -> bool;
}

/// Process-local registry.
#[derive(Debug, Default)]
pub struct InMemoryBlockingRegistry {
    blocked: Mutex<HashMap<FighterId, BlockingReason>>,
}

impl InMemoryBlockingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<FighterId, BlockingReason>> {
        // The map stays consistent even if a holder panicked.
        self.blocked.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BlockingRegistry for InMemoryBlockingRegistry {
    fn block(&self, fighter: FighterId, reason: BlockingReason) -> Result<()> {
        let mut blocked = self.entries();
        if let Some(&current) = blocked.get(&fighter) {
            return Err(RuntimeError::FighterBusy {
                fighter,
                reason: current,
            });
        }
        blocked.insert(fighter, reason);
        Ok(())
    }

    fn unblock(&self, fighter: FighterId) {
        self.entries().remove(&fighter);
    }

    fn is_blocked(&self, fighter: FighterId) -> bool {
        self.entries().contains_key(&fighter)
    }
}

/// Blocks a set of fighters for the duration of a fight.
pub struct FightLease {
    registry: Arc<dyn BlockingRegistry>,
    fighters: Vec<FighterId>,
}

impl FightLease {
    /// Blocks every fighter in `fighters`, or none of them.
    ///
    /// When one fighter is already busy, the fighters blocked so far are
    /// unblocked again before the error is returned.
    pub fn acquire(
        registry: Arc<dyn BlockingRegistry>,
        fighters: impl IntoIterator<Item = FighterId>,
    ) -> Result<Self> {
        let mut lease = Self {
            registry,
            fighters: Vec::new(),
        };
        for fighter in fighters {
            // Dropping `lease` on error unblocks the ones already acquired.
            lease.registry.block(fighter, BlockingReason::Fight)?;
            lease.fighters.push(fighter);
        }
        Ok(lease)
    }

    pub fn fighters(&self) -> &[FighterId] {
        &self.fighters
    }

    /// Unblocks the leased fighters. Later calls do nothing.
    pub fn release(&mut self) {
        for fighter in self.fighters.drain(..) {
            self.registry.unblock(fighter);
            tracing::debug!("Fighter {} unblocked", fighter);
        }
    }
}

impl Drop for FightLease {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for FightLease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FightLease")
            .field("fighters", &self.fighters)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_acquisition_releases_partial_lease() {
        let registry = Arc::new(InMemoryBlockingRegistry::new());
        registry.block(FighterId(2), BlockingReason::Fight).unwrap();

        let result = FightLease::acquire(registry.clone(), [FighterId(1), FighterId(2)]);

        assert!(matches!(
            result,
            Err(RuntimeError::FighterBusy {
                fighter: FighterId(2),
                ..
            })
        ));
        assert!(!registry.is_blocked(FighterId(1)));
        assert!(registry.is_blocked(FighterId(2)));
    }

    #[test]
    fn release_is_idempotent_and_drop_releases() {
        let registry = Arc::new(InMemoryBlockingRegistry::new());

        let mut lease = FightLease::acquire(registry.clone(), [FighterId(1)]).unwrap();
        assert!(registry.is_blocked(FighterId(1)));
        lease.release();
        lease.release();
        assert!(!registry.is_blocked(FighterId(1)));

        // Someone else blocks the fighter; the spent lease must not unblock it.
        registry.block(FighterId(1), BlockingReason::Fight).unwrap();
        drop(lease);
        assert!(registry.is_blocked(FighterId(1)));
        registry.unblock(FighterId(1));

        {
            let _lease = FightLease::acquire(registry.clone(), [FighterId(3)]).unwrap();
            assert!(registry.is_blocked(FighterId(3)));
        }
        assert!(!registry.is_blocked(FighterId(3)));
    }
}
