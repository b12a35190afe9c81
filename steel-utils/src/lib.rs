//! # Steel Utils
//!
//! Small shared types and the logging bootstrap used across the Steel light crates.

mod types;

pub mod logger;

pub use types::BlockStateId;
