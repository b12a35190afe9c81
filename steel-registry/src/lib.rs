//! # Steel Registry
//!
//! Block property tables consumed by the light engine.

pub mod blocks;

pub use blocks::{BlockLightEntry, BlockLightLookup, BlockRegistry, RegistryError};

/// Shared behaviour of every registry.
pub trait RegistryExt {
    /// Prevents any further registration. Lookups keep working.
    fn freeze(&mut self);
}
