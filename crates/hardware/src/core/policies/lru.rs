//! Least Recently Used (LRU) Replacement Policy.
//!
//! Evicts the identifier whose last reference (track or touch) is oldest.
//! Every reference stamps the identifier with a monotonically increasing
//! counter; the ordered stamp map is the usage stack, lowest stamp at the
//! LRU end.
//!
//! # Performance
//!
//! - `track()` / `touch()`: O(log N)
//! - `select_victim()`: O(log N)
//! - `contains()`: O(1)

use std::collections::{BTreeMap, HashMap};

use super::{ReplacementPolicy, already_tracked, not_tracked, nothing_to_evict};
use crate::core::types::VirtualPageId;
use crate::error::Result;

/// LRU policy state.
#[derive(Debug, Default)]
pub struct RecencyPolicy {
    /// Stamp -> id. First entry is LRU, last entry is MRU.
    order: BTreeMap<u64, VirtualPageId>,
    stamps: HashMap<VirtualPageId, u64>,
    next_stamp: u64,
}

impl RecencyPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    fn stamp(&mut self) -> u64 {
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        stamp
    }
}

impl ReplacementPolicy for RecencyPolicy {
    fn name(&self) -> &'static str {
        "recency"
    }

    fn track(&mut self, id: VirtualPageId) -> Result<()> {
        if self.stamps.contains_key(&id) {
            return Err(already_tracked(self.name(), &id));
        }
        let stamp = self.stamp();
        self.order.insert(stamp, id.clone());
        self.stamps.insert(id, stamp);
        Ok(())
    }

    /// Moves `id` to the MRU position, keeping the relative order of the rest.
    fn touch(&mut self, id: &VirtualPageId) -> Result<()> {
        if !self.stamps.contains_key(id) {
            return Err(not_tracked(self.name(), id));
        }
        let fresh = self.stamp();
        if let Some(old) = self.stamps.insert(id.clone(), fresh) {
            if let Some(entry) = self.order.remove(&old) {
                self.order.insert(fresh, entry);
            }
        }
        Ok(())
    }

    fn select_victim(&mut self) -> Result<VirtualPageId> {
        let (_, victim) = self
            .order
            .pop_first()
            .ok_or_else(|| nothing_to_evict(self.name()))?;
        self.stamps.remove(&victim);
        Ok(victim)
    }

    fn contains(&self, id: &VirtualPageId) -> bool {
        self.stamps.contains_key(id)
    }

    fn tracked(&self) -> Vec<VirtualPageId> {
        self.order.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.stamps.len()
    }
}
