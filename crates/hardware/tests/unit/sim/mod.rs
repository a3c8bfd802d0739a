//! # Simulation Unit Tests
//!
//! Trace ingestion, synthetic address generation and replay.

/// Trace parsing from readers and files.
pub mod trace;
