//! Light-relevant block properties and the lookup capability the light engine consumes.

pub mod registry;
pub mod vanilla;

use std::sync::Arc;

use serde::Deserialize;
use steel_utils::BlockStateId;

pub use registry::{BlockRegistry, RegistryError};

/// Highest light level a block can emit or receive.
pub const MAX_LIGHT_LEVEL: u8 = 15;

/// The smallest light loss a block can cause. Light always loses at least one level per step.
pub const MIN_OPACITY: u8 = 1;

/// Opacity of a block that no light passes through.
pub const FULL_OPACITY: u8 = 16;

/// Light properties of a single block state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlockLightEntry {
    /// The state these properties belong to.
    pub id: BlockStateId,
    /// Registry name, e.g. `minecraft:torch`.
    pub name: String,
    /// Light lost when entering this block, in `1..=16`.
    pub opacity: u8,
    /// Light emitted by this block, in `0..=15`.
    #[serde(default)]
    pub luminance: u8,
}

impl BlockLightEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(id: BlockStateId, name: impl Into<String>, opacity: u8, luminance: u8) -> Self {
        Self {
            id,
            name: name.into(),
            opacity,
            luminance,
        }
    }

    /// Returns true if no light can pass through this block.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.opacity >= FULL_OPACITY
    }
}

/// Resolves the light properties of block states.
///
/// Implementations must be total over every state the sections they are used with can contain.
/// Returning `None` means the state is unknown; the light engine treats that as a hard error
/// rather than guessing.
pub trait BlockLightLookup {
    /// Light lost when entering a block in this state, in `1..=16`.
    fn opacity(&self, state: BlockStateId) -> Option<u8>;

    /// Light emitted by a block in this state, in `0..=15`.
    fn luminance(&self, state: BlockStateId) -> Option<u8>;

    /// Resolves both values at once. Returns `None` if either is unknown.
    fn light_properties(&self, state: BlockStateId) -> Option<(u8, u8)> {
        Some((self.opacity(state)?, self.luminance(state)?))
    }
}

impl<T: BlockLightLookup + ?Sized> BlockLightLookup for &T {
    fn opacity(&self, state: BlockStateId) -> Option<u8> {
        (**self).opacity(state)
    }

    fn luminance(&self, state: BlockStateId) -> Option<u8> {
        (**self).luminance(state)
    }

    fn light_properties(&self, state: BlockStateId) -> Option<(u8, u8)> {
        (**self).light_properties(state)
    }
}

impl<T: BlockLightLookup + ?Sized> BlockLightLookup for Arc<T> {
    fn opacity(&self, state: BlockStateId) -> Option<u8> {
        (**self).opacity(state)
    }

    fn luminance(&self, state: BlockStateId) -> Option<u8> {
        (**self).luminance(state)
    }

    fn light_properties(&self, state: BlockStateId) -> Option<(u8, u8)> {
        (**self).light_properties(state)
    }
}
