//! Common test helpers.

use std::collections::{BTreeSet, HashMap};

use pagesim::config::{Config, PolicyKind};
use pagesim::core::policies::ReplacementPolicy;
use pagesim::core::{PhysicalFrameId, VirtualPageId};

/// Routes library logs to the test harness; honours `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn page(id: &str) -> VirtualPageId {
    VirtualPageId::new(id)
}

pub fn config(frames: usize, tlb_entries: usize, policy: PolicyKind) -> Config {
    let mut config = Config::default().with_policy(policy);
    config.page_table.capacity = frames;
    config.tlb.capacity = tlb_entries;
    config
}

/// Asserts that `policy` tracks exactly the keys of `mapping`.
pub fn assert_bijective(
    policy: &dyn ReplacementPolicy,
    mapping: &HashMap<VirtualPageId, PhysicalFrameId>,
) {
    let tracked: BTreeSet<VirtualPageId> = policy.tracked().into_iter().collect();
    let mapped: BTreeSet<VirtualPageId> = mapping.keys().cloned().collect();
    assert_eq!(tracked, mapped);
    assert_eq!(policy.len(), mapping.len());
}
