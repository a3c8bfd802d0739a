//! Page table with on-demand frame allocation.
//!
//! Resident pages map to frames drawn from a fixed pool. Once the pool is
//! exhausted, a fault evicts the policy's victim and reuses its frame. Every
//! fault counts as one backing-store fetch.

use std::collections::HashMap;

use log::{debug, trace};

use crate::config::PolicyKind;
use crate::core::policies::ReplacementPolicy;
use crate::core::types::{PhysicalFrameId, VirtualPageId};
use crate::error::{MmuError, Result};

pub struct PageTable {
    mapping: HashMap<VirtualPageId, PhysicalFrameId>,
    free_frames: Vec<PhysicalFrameId>,
    capacity: usize,
    policy: Box<dyn ReplacementPolicy>,
    backing_store_fetches: u64,
    evictions: u64,
}

impl PageTable {
    pub fn new(capacity: usize, policy: PolicyKind) -> Result<Self> {
        Self::with_policy(capacity, policy.build())
    }

    /// Builds a table over `capacity` frames using an arbitrary policy.
    /// The policy must be empty.
    pub fn with_policy(capacity: usize, policy: Box<dyn ReplacementPolicy>) -> Result<Self> {
        if capacity == 0 {
            return Err(MmuError::CapacityMisconfiguration {
                component: "page table",
            });
        }
        // Frames are handed out from the back of the pool.
        let free_frames = (0..capacity as u64).map(PhysicalFrameId::new).collect();
        Ok(Self {
            mapping: HashMap::with_capacity(capacity),
            free_frames,
            capacity,
            policy,
            backing_store_fetches: 0,
            evictions: 0,
        })
    }

    /// Returns the frame holding `page`, faulting it in if necessary.
    ///
    /// A fault is counted as a backing-store fetch only once the page is
    /// mapped; on error the claimed frame goes back to the free pool.
    pub fn resolve(&mut self, page: &VirtualPageId) -> Result<PhysicalFrameId> {
        if let Some(&frame) = self.mapping.get(page) {
            self.policy.touch(page)?;
            trace!("page table hit: {} -> {}", page, frame);
            return Ok(frame);
        }

        let frame = match self.free_frames.pop() {
            Some(frame) => {
                debug!("page fault: {} -> free {}", page, frame);
                frame
            }
            None => {
                let (victim, frame) = self.policy.evict(&self.mapping)?;
                self.mapping.remove(&victim);
                self.evictions += 1;
                debug!(
                    "page fault: {} evicts {} ({} policy), reusing {}",
                    page,
                    victim,
                    self.policy.name(),
                    frame
                );
                frame
            }
        };

        if let Err(e) = self.policy.track(page.clone()) {
            self.free_frames.push(frame);
            return Err(e);
        }
        self.mapping.insert(page.clone(), frame);
        self.backing_store_fetches += 1;
        Ok(frame)
    }

    pub fn lookup(&self, page: &VirtualPageId) -> Option<PhysicalFrameId> {
        self.mapping.get(page).copied()
    }

    pub fn mapping(&self) -> &HashMap<VirtualPageId, PhysicalFrameId> {
        &self.mapping
    }

    pub fn free_frames(&self) -> &[PhysicalFrameId] {
        &self.free_frames
    }

    pub fn policy(&self) -> &dyn ReplacementPolicy {
        self.policy.as_ref()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    pub fn backing_store_fetches(&self) -> u64 {
        self.backing_store_fetches
    }

    pub fn evictions(&self) -> u64 {
        self.evictions
    }
}
