//! Simulator configuration.
//!
//! Defaults reproduce the reference machine: 64 physical frames, a 16-entry
//! translation cache, recency replacement for both, and a 5-character page
//! identifier split.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MmuError, Result};

/// Total physical frames in the reference configuration.
pub const PAGE_TABLE_CAPACITY: usize = 64;
/// Translation cache entries in the reference configuration.
pub const CACHE_CAPACITY: usize = 16;
/// Leading characters of an address that form the page identifier.
pub const PAGE_ID_SPLIT_WIDTH: usize = 5;
/// Frame size used when reporting a frame's base address.
pub const FRAME_SIZE: u64 = 4096;

/// Replacement algorithm selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Least recently used.
    #[default]
    #[serde(alias = "lru")]
    Recency,
    /// Second chance.
    #[serde(alias = "second-chance")]
    Clock,
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Recency => write!(f, "recency"),
            PolicyKind::Clock => write!(f, "clock"),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = MmuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recency" | "lru" => Ok(PolicyKind::Recency),
            "clock" | "second-chance" | "secondchance" => Ok(PolicyKind::Clock),
            other => Err(MmuError::InvalidConfig(format!(
                "unknown replacement policy '{}' (expected recency or clock)",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageTableConfig {
    pub capacity: usize,
    pub policy: PolicyKind,
}

impl Default for PageTableConfig {
    fn default() -> Self {
        Self {
            capacity: PAGE_TABLE_CAPACITY,
            policy: PolicyKind::Recency,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlbConfig {
    pub capacity: usize,
    pub policy: PolicyKind,
}

impl Default for TlbConfig {
    fn default() -> Self {
        Self {
            capacity: CACHE_CAPACITY,
            policy: PolicyKind::Recency,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressConfig {
    pub split_width: usize,
    pub frame_size: u64,
}

impl Default for AddressConfig {
    fn default() -> Self {
        Self {
            split_width: PAGE_ID_SPLIT_WIDTH,
            frame_size: FRAME_SIZE,
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub page_table: PageTableConfig,
    pub tlb: TlbConfig,
    pub address: AddressConfig,
}

impl Config {
    /// Loads a JSON configuration file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Selects the same policy for both the page table and the cache.
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.page_table.policy = policy;
        self.tlb.policy = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_table.capacity == 0 {
            return Err(MmuError::CapacityMisconfiguration {
                component: "page table",
            });
        }
        if self.tlb.capacity == 0 {
            return Err(MmuError::CapacityMisconfiguration {
                component: "translation cache",
            });
        }
        if self.address.split_width == 0 {
            return Err(MmuError::InvalidConfig(
                "address split width must be at least 1".to_string(),
            ));
        }
        if self.address.frame_size == 0 {
            return Err(MmuError::InvalidConfig(
                "frame size must be at least 1 byte".to_string(),
            ));
        }
        let last_frame = self.page_table.capacity as u64 - 1;
        if last_frame.checked_mul(self.address.frame_size).is_none() {
            return Err(MmuError::InvalidConfig(format!(
                "{} frames of {} bytes exceed the 64-bit physical address space",
                self.page_table.capacity, self.address.frame_size
            )));
        }
        Ok(())
    }
}
