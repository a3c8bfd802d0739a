//! Address trace ingestion.
//!
//! A trace holds one access per line; the first whitespace-separated column
//! is the virtual address and any further columns (access kind, etc.) are
//! ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::Result;

pub fn parse_trace<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut addresses = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(address) = line.split_whitespace().next() {
            addresses.push(address.to_string());
        }
    }
    Ok(addresses)
}

pub fn read_trace(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let addresses = parse_trace(BufReader::new(file))?;
    info!("loaded {} addresses from {}", addresses.len(), path.display());
    Ok(addresses)
}
