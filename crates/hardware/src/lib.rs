//! Virtual-to-physical address translation simulator.
//!
//! Replays a stream of textual virtual addresses through a small translation
//! cache backed by a fixed-capacity page table, counting backing-store
//! fetches and cache hits/misses under a configurable replacement policy.

pub mod config;
pub mod core;
pub mod error;
pub mod sim;
pub mod stats;

pub use self::config::{Config, PolicyKind};
pub use self::core::mmu::AddressTranslator;
pub use self::error::{MmuError, Result};
pub use self::stats::SimStats;
