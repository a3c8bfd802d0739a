//! Address translation front end.
//!
//! Splits a textual virtual address into page identifier and offset, then
//! resolves the page through the translation cache, falling back to the page
//! table on a miss and refilling the cache with the result.

use log::debug;

use crate::config::Config;
use crate::core::types::{Translation, VirtualPageId};
use crate::error::{MmuError, Result};
use crate::stats::SimStats;

use self::page_table::PageTable;
use self::tlb::TranslationCache;

pub mod page_table;
pub mod tlb;

/// Splits `address` after `width` characters into (page id, offset).
///
/// Accepts hex digits with an optional `0x`/`0X` prefix; the prefix counts
/// toward `width`. The offset may be empty.
pub fn split_address(address: &str, width: usize) -> Result<(VirtualPageId, &str)> {
    if address.is_empty() {
        return Err(MmuError::invalid_address(address, "empty address"));
    }

    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);
    if digits.is_empty() {
        return Err(MmuError::invalid_address(address, "no digits after prefix"));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(MmuError::invalid_address(
            address,
            format!("unexpected character '{}'", bad),
        ));
    }

    // Everything is ASCII from here, so byte and char positions agree.
    if address.len() < width {
        return Err(MmuError::invalid_address(
            address,
            format!(
                "{} characters, page identifier needs {}",
                address.len(),
                width
            ),
        ));
    }

    let (page, offset) = address.split_at(width);
    Ok((VirtualPageId::new(page), offset))
}

/// Translation cache in front of a page table.
pub struct AddressTranslator {
    pub tlb: TranslationCache,
    pub page_table: PageTable,
    split_width: usize,
    addresses: u64,
}

impl AddressTranslator {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        debug!(
            "translator: {} frames ({}), {} tlb entries ({}), split width {}",
            config.page_table.capacity,
            config.page_table.policy,
            config.tlb.capacity,
            config.tlb.policy,
            config.address.split_width
        );
        Ok(Self {
            tlb: TranslationCache::new(config.tlb.capacity, config.tlb.policy)?,
            page_table: PageTable::new(config.page_table.capacity, config.page_table.policy)?,
            split_width: config.address.split_width,
            addresses: 0,
        })
    }

    /// Assembles a translator from prebuilt parts.
    pub fn from_parts(tlb: TranslationCache, page_table: PageTable, split_width: usize) -> Self {
        Self {
            tlb,
            page_table,
            split_width,
            addresses: 0,
        }
    }

    /// Translates one address. A malformed address is rejected before any
    /// state changes.
    pub fn translate(&mut self, address: &str) -> Result<Translation> {
        let (page, offset) = split_address(address, self.split_width)?;
        self.addresses += 1;

        if let Some(frame) = self.tlb.lookup(&page)? {
            return Ok(Translation {
                frame,
                offset: offset.to_string(),
                cache_hit: true,
            });
        }

        let frame = self.page_table.resolve(&page)?;
        self.tlb.install(page, frame)?;
        Ok(Translation {
            frame,
            offset: offset.to_string(),
            cache_hit: false,
        })
    }

    pub fn split_width(&self) -> usize {
        self.split_width
    }

    /// Snapshot of the counters so far.
    pub fn stats(&self) -> SimStats {
        SimStats {
            addresses: self.addresses,
            backing_store_fetches: self.page_table.backing_store_fetches(),
            page_table_evictions: self.page_table.evictions(),
            cache_hits: self.tlb.hits(),
            cache_misses: self.tlb.misses(),
            cache_evictions: self.tlb.evictions(),
            skipped_addresses: 0,
        }
    }
}
