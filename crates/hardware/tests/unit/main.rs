//! # Unit Tests
//!
//! Component-level tests for the translation pipeline, grouped by module.

/// Shared helpers for building pages, configurations and invariant checks.
pub mod common;


/// Page table, translation cache and address translator.
pub mod mmu;


/// Trace ingestion, synthetic addresses and replay.
pub mod sim;
