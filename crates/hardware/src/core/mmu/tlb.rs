//! Translation cache.
//!
//! A small fully associative page -> frame cache consulted before the page
//! table. It runs its own replacement policy; dropping an entry here never
//! touches the page table.

use std::collections::HashMap;

use log::{debug, trace};

use crate::config::PolicyKind;
use crate::core::policies::ReplacementPolicy;
use crate::core::types::{PhysicalFrameId, VirtualPageId};
use crate::error::{MmuError, Result};

pub struct TranslationCache {
    entries: HashMap<VirtualPageId, PhysicalFrameId>,
    capacity: usize,
    policy: Box<dyn ReplacementPolicy>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl TranslationCache {
    pub fn new(capacity: usize, policy: PolicyKind) -> Result<Self> {
        Self::with_policy(capacity, policy.build())
    }

    pub fn with_policy(capacity: usize, policy: Box<dyn ReplacementPolicy>) -> Result<Self> {
        if capacity == 0 {
            return Err(MmuError::CapacityMisconfiguration {
                component: "translation cache",
            });
        }
        Ok(Self {
            entries: HashMap::with_capacity(capacity),
            capacity,
            policy,
            hits: 0,
            misses: 0,
            evictions: 0,
        })
    }

    /// Looks `page` up, counting a hit or a miss.
    pub fn lookup(&mut self, page: &VirtualPageId) -> Result<Option<PhysicalFrameId>> {
        match self.entries.get(page) {
            Some(&frame) => {
                self.policy.touch(page)?;
                self.hits += 1;
                trace!("tlb hit: {} -> {}", page, frame);
                Ok(Some(frame))
            }
            None => {
                self.misses += 1;
                Ok(None)
            }
        }
    }

    /// Caches `page -> frame`, evicting an entry first when full.
    /// Only valid after a miss on `page`.
    pub fn install(&mut self, page: VirtualPageId, frame: PhysicalFrameId) -> Result<()> {
        if self.entries.contains_key(&page) {
            return Err(MmuError::PolicyInvariantViolation(format!(
                "page {} is already cached",
                page
            )));
        }

        if self.entries.len() >= self.capacity {
            let (victim, _) = self.policy.evict(&self.entries)?;
            self.entries.remove(&victim);
            self.evictions += 1;
            debug!("tlb evicts {} for {}", victim, page);
        }

        self.policy.track(page.clone())?;
        debug!("tlb install: {} -> {}", page, frame);
        self.entries.insert(page, frame);
        Ok(())
    }

    pub fn contains(&self, page: &VirtualPageId) -> bool {
        self.entries.contains_key(page)
    }

    pub fn entries(&self) -> &HashMap<VirtualPageId, PhysicalFrameId> {
        &self.entries
    }

    pub fn policy(&self) -> &dyn ReplacementPolicy {
        self.policy.as_ref()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn evictions(&self) -> u64 {
        self.evictions
    }
}
