//! Common utilities for the taoxml crates.
//!
//! This crate provides shared infrastructure used by the parser and the CLI:
//! - **Warning System** - colored, deduplicated diagnostics on stderr
//! - **Positions** - mapping byte offsets back to line/column pairs

pub mod position;
pub mod warning;

pub use position::Position;
