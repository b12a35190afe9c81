//! A compact built-in table covering the blocks the light engine cares about most.
//!
//! State ids here are local to this table (assigned in registration order), not the ids of a
//! particular game version. Servers load the real table through [`BlockRegistry::from_json`].
#![allow(missing_docs)]

use steel_utils::BlockStateId;

use super::{BlockLightEntry, BlockRegistry, FULL_OPACITY, MIN_OPACITY};
use crate::RegistryExt;

pub const AIR: BlockStateId = BlockStateId(0);
pub const STONE: BlockStateId = BlockStateId(1);
pub const DIRT: BlockStateId = BlockStateId(2);
pub const GLASS: BlockStateId = BlockStateId(3);
pub const WATER: BlockStateId = BlockStateId(4);
pub const OAK_LEAVES: BlockStateId = BlockStateId(5);
pub const TORCH: BlockStateId = BlockStateId(6);
pub const GLOWSTONE: BlockStateId = BlockStateId(7);
pub const SEA_LANTERN: BlockStateId = BlockStateId(8);
pub const LANTERN: BlockStateId = BlockStateId(9);
pub const REDSTONE_TORCH: BlockStateId = BlockStateId(10);
pub const MAGMA_BLOCK: BlockStateId = BlockStateId(11);

const ENTRIES: [(BlockStateId, &str, u8, u8); 12] = [
    (AIR, "minecraft:air", MIN_OPACITY, 0),
    (STONE, "minecraft:stone", FULL_OPACITY, 0),
    (DIRT, "minecraft:dirt", FULL_OPACITY, 0),
    (GLASS, "minecraft:glass", MIN_OPACITY, 0),
    (WATER, "minecraft:water", 2, 0),
    (OAK_LEAVES, "minecraft:oak_leaves", MIN_OPACITY, 0),
    (TORCH, "minecraft:torch", MIN_OPACITY, 14),
    (GLOWSTONE, "minecraft:glowstone", FULL_OPACITY, 15),
    (SEA_LANTERN, "minecraft:sea_lantern", FULL_OPACITY, 15),
    (LANTERN, "minecraft:lantern", MIN_OPACITY, 15),
    (REDSTONE_TORCH, "minecraft:redstone_torch", MIN_OPACITY, 7),
    (MAGMA_BLOCK, "minecraft:magma_block", FULL_OPACITY, 3),
];

/// Builds a frozen registry holding the built-in table.
#[must_use]
pub fn registry() -> BlockRegistry {
    let mut registry = BlockRegistry::new();
    for (id, name, opacity, luminance) in ENTRIES {
        registry.insert(BlockLightEntry::new(id, name, opacity, luminance));
    }
    registry.freeze();
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlockLightLookup;

    #[test]
    fn test_vanilla_table() {
        let registry = registry();
        assert_eq!(registry.len(), ENTRIES.len());
        assert!(registry.is_frozen());
        assert_eq!(registry.light_properties(AIR), Some((1, 0)));
        assert_eq!(registry.light_properties(TORCH), Some((1, 14)));
        assert_eq!(registry.light_properties(GLOWSTONE), Some((16, 15)));
        assert_eq!(registry.get_by_name("minecraft:stone"), Some(STONE));
    }
}
