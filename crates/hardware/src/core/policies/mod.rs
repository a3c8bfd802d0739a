//! Page replacement policies.
//!
//! A policy tracks the identifiers resident in exactly one container (the
//! page table or the translation cache) and picks which of them to evict
//! when that container is full. Each container owns its own instance.

use std::collections::HashMap;

use crate::config::PolicyKind;
use crate::core::types::{PhysicalFrameId, VirtualPageId};
use crate::error::{MmuError, Result};

pub use self::clock::ClockPolicy;
pub use self::lru::RecencyPolicy;

mod clock;
mod lru;

/// The interface every replacement algorithm implements.
pub trait ReplacementPolicy {
    /// Short lowercase name, used in logs and reports.
    fn name(&self) -> &'static str;

    /// Registers a newly resident identifier. Tracking an identifier twice
    /// is an invariant violation.
    fn track(&mut self, id: VirtualPageId) -> Result<()>;

    /// Records a fresh reference to a resident identifier.
    fn touch(&mut self, id: &VirtualPageId) -> Result<()>;

    /// Chooses a victim and forgets it.
    fn select_victim(&mut self) -> Result<VirtualPageId>;

    fn contains(&self, id: &VirtualPageId) -> bool;

    /// Resident identifiers, next eviction candidate first.
    fn tracked(&self) -> Vec<VirtualPageId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evicts one identifier and returns it together with the frame the
    /// caller's mapping associates with it. The mapping is not modified.
    fn evict(
        &mut self,
        residents: &HashMap<VirtualPageId, PhysicalFrameId>,
    ) -> Result<(VirtualPageId, PhysicalFrameId)> {
        let victim = self.select_victim()?;
        match residents.get(&victim) {
            Some(&frame) => Ok((victim, frame)),
            None => Err(MmuError::PolicyInvariantViolation(format!(
                "{} policy chose victim {} which is not in the mapping",
                self.name(),
                victim
            ))),
        }
    }
}

impl PolicyKind {
    /// Builds a fresh, empty policy of this kind.
    pub fn build(self) -> Box<dyn ReplacementPolicy> {
        match self {
            PolicyKind::Recency => Box::new(RecencyPolicy::new()),
            PolicyKind::Clock => Box::new(ClockPolicy::new()),
        }
    }
}

fn already_tracked(policy: &str, id: &VirtualPageId) -> MmuError {
    MmuError::PolicyInvariantViolation(format!("{} policy already tracks {}", policy, id))
}

fn not_tracked(policy: &str, id: &VirtualPageId) -> MmuError {
    MmuError::PolicyInvariantViolation(format!("{} policy does not track {}", policy, id))
}

fn nothing_to_evict(policy: &str) -> MmuError {
    MmuError::PolicyInvariantViolation(format!("{} policy asked to evict with no residents", policy))
}
