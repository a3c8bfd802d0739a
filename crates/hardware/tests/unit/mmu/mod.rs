//! # MMU Unit Tests
