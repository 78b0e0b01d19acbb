//! Quiver Test Harness - end-to-end scenarios and benchmarks
//!
//! This crate exercises the toolkit crates together:
//! - shared record fixtures for cross-crate scenarios
//! - end-to-end scenario tests (queries, merges, decorators, transforms)
//! - criterion benchmarks under `benches/`

pub mod scenarios;

pub use scenarios::*;
