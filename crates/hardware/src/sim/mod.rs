//! Trace replay.

pub mod generator;
pub mod trace;

use log::warn;

use crate::core::mmu::AddressTranslator;
use crate::core::types::Translation;
use crate::error::{MmuError, Result};
use crate::stats::SimStats;

/// How a replay treats malformed addresses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReplayMode {
    /// Stop at the first error of any kind.
    Strict,
    /// Skip malformed addresses; stop on anything else.
    #[default]
    Lenient,
}

/// Feeds `addresses` through `translator` in order and returns the final
/// counters.
pub fn replay<I, S>(
    translator: &mut AddressTranslator,
    addresses: I,
    mode: ReplayMode,
) -> Result<SimStats>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    replay_with(translator, addresses, mode, |_, _| {})
}

/// Like [`replay`], calling `observer` after every successful translation.
pub fn replay_with<I, S, F>(
    translator: &mut AddressTranslator,
    addresses: I,
    mode: ReplayMode,
    mut observer: F,
) -> Result<SimStats>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str, &Translation),
{
    let mut skipped = 0;
    for address in addresses {
        let address = address.as_ref();
        match translator.translate(address) {
            Ok(translation) => observer(address, &translation),
            Err(e @ MmuError::InvalidAddressFormat { .. }) if mode == ReplayMode::Lenient => {
                warn!("skipping address: {}", e);
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    let mut stats = translator.stats();
    stats.skipped_addresses = skipped;
    Ok(stats)
}
