//! Clock (second chance) Replacement Policy.
//!
//! Identifiers sit on a ring in arrival order with the hand at the oldest
//! one. On eviction the hand inspects entries in turn: a clear reference bit
//! means the entry is the victim; a set bit is cleared and the entry goes to
//! the back of the ring. Newly tracked identifiers join the back with their
//! bit set, and `touch` sets the bit without moving the entry.
//!
//! One full sweep clears every bit it passes, so a victim is always found
//! within two sweeps of the resident set.

use std::collections::{BTreeMap, HashMap};

use super::{ReplacementPolicy, already_tracked, not_tracked, nothing_to_evict};
use crate::core::types::VirtualPageId;
use crate::error::Result;

#[derive(Clone, Copy, Debug)]
struct Slot {
    position: u64,
    referenced: bool,
}

/// Second chance policy state.
#[derive(Debug, Default)]
pub struct ClockPolicy {
    /// Position -> id. The first entry is under the hand.
    ring: BTreeMap<u64, VirtualPageId>,
    slots: HashMap<VirtualPageId, Slot>,
    next_position: u64,
}

impl ClockPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference bit of `id`, if tracked.
    pub fn reference_bit(&self, id: &VirtualPageId) -> Option<bool> {
        self.slots.get(id).map(|slot| slot.referenced)
    }

    fn push_back(&mut self, id: VirtualPageId, referenced: bool) {
        let position = self.next_position;
        self.next_position += 1;
        self.ring.insert(position, id.clone());
        self.slots.insert(
            id,
            Slot {
                position,
                referenced,
            },
        );
    }
}

impl ReplacementPolicy for ClockPolicy {
    fn name(&self) -> &'static str {
        "clock"
    }

    fn track(&mut self, id: VirtualPageId) -> Result<()> {
        if self.slots.contains_key(&id) {
            return Err(already_tracked(self.name(), &id));
        }
        self.push_back(id, true);
        Ok(())
    }

    fn touch(&mut self, id: &VirtualPageId) -> Result<()> {
        let name = self.name();
        match self.slots.get_mut(id) {
            Some(slot) => {
                slot.referenced = true;
                Ok(())
            }
            None => Err(not_tracked(name, id)),
        }
    }

    fn select_victim(&mut self) -> Result<VirtualPageId> {
        if self.ring.is_empty() {
            return Err(nothing_to_evict(self.name()));
        }

        let sweep_limit = 2 * self.ring.len();
        for _ in 0..sweep_limit {
            let Some((_, id)) = self.ring.pop_first() else {
                break;
            };
            let referenced = self.slots.get(&id).is_some_and(|slot| slot.referenced);
            if !referenced {
                self.slots.remove(&id);
                return Ok(id);
            }
            self.push_back(id, false);
        }

        // Unreachable with a consistent ring; fall back to FIFO order.
        let (_, victim) = self
            .ring
            .pop_first()
            .ok_or_else(|| nothing_to_evict(self.name()))?;
        self.slots.remove(&victim);
        Ok(victim)
    }

    fn contains(&self, id: &VirtualPageId) -> bool {
        self.slots.contains_key(id)
    }

    fn tracked(&self) -> Vec<VirtualPageId> {
        self.ring.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.slots.len()
    }
}
