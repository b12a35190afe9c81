use rustc_hash::FxHashMap;
use steel_utils::BlockStateId;
use thiserror::Error;

use super::{BlockLightEntry, BlockLightLookup, FULL_OPACITY, MAX_LIGHT_LEVEL, MIN_OPACITY};
use crate::RegistryExt;

/// Errors raised while building a [`BlockRegistry`].
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The JSON table could not be parsed.
    #[error("failed to parse block light table: {0}")]
    Parse(#[from] serde_json::Error),
    /// An opacity outside `1..=16`.
    #[error("block {name} ({id}) has opacity {opacity}, expected 1..=16")]
    InvalidOpacity {
        /// The offending state.
        id: BlockStateId,
        /// Its registry name.
        name: String,
        /// The rejected value.
        opacity: u8,
    },
    /// A luminance above 15.
    #[error("block {name} ({id}) has luminance {luminance}, expected 0..=15")]
    InvalidLuminance {
        /// The offending state.
        id: BlockStateId,
        /// Its registry name.
        name: String,
        /// The rejected value.
        luminance: u8,
    },
    /// The same state id was registered twice.
    #[error("block state {0} is already registered")]
    Duplicate(BlockStateId),
    /// The same name was registered under two state ids.
    #[error("block name {name} is already registered as {existing}")]
    DuplicateName {
        /// The repeated name.
        name: String,
        /// The state id already holding it.
        existing: BlockStateId,
    },
    /// Registration was attempted after [`RegistryExt::freeze`].
    #[error("cannot register block {0} after the registry is frozen")]
    Frozen(String),
}

/// Hash-map backed table of block light properties, keyed by state id.
#[derive(Debug, Clone)]
pub struct BlockRegistry {
    by_id: FxHashMap<BlockStateId, BlockLightEntry>,
    by_name: FxHashMap<String, BlockStateId>,
    allows_registering: bool,
}

impl BlockRegistry {
    /// Creates an empty, unfrozen registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_id: FxHashMap::default(),
            by_name: FxHashMap::default(),
            allows_registering: true,
        }
    }

    /// Parses a JSON array of [`BlockLightEntry`] objects into a frozen registry.
    ///
    /// ```json
    /// [{ "id": 0, "name": "minecraft:air", "opacity": 1 },
    ///  { "id": 7, "name": "minecraft:torch", "opacity": 1, "luminance": 14 }]
    /// ```
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let entries: Vec<BlockLightEntry> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for entry in entries {
            registry.register(entry)?;
        }
        registry.freeze();
        log::debug!("Loaded {} block light entries", registry.len());
        Ok(registry)
    }

    /// Adds an entry after validating its ranges.
    pub fn register(&mut self, entry: BlockLightEntry) -> Result<(), RegistryError> {
        if !self.allows_registering {
            return Err(RegistryError::Frozen(entry.name));
        }
        if !(MIN_OPACITY..=FULL_OPACITY).contains(&entry.opacity) {
            return Err(RegistryError::InvalidOpacity {
                id: entry.id,
                name: entry.name,
                opacity: entry.opacity,
            });
        }
        if entry.luminance > MAX_LIGHT_LEVEL {
            return Err(RegistryError::InvalidLuminance {
                id: entry.id,
                name: entry.name,
                luminance: entry.luminance,
            });
        }
        if self.by_id.contains_key(&entry.id) {
            return Err(RegistryError::Duplicate(entry.id));
        }
        if let Some(&existing) = self.by_name.get(&entry.name) {
            return Err(RegistryError::DuplicateName {
                name: entry.name,
                existing,
            });
        }

        self.by_name.insert(entry.name.clone(), entry.id);
        self.by_id.insert(entry.id, entry);
        Ok(())
    }

    /// Inserts a pre-validated entry, bypassing the checks in [`Self::register`].
    pub(crate) fn insert(&mut self, entry: BlockLightEntry) {
        debug_assert!((MIN_OPACITY..=FULL_OPACITY).contains(&entry.opacity));
        debug_assert!(entry.luminance <= MAX_LIGHT_LEVEL);
        debug_assert!(!self.by_id.contains_key(&entry.id) && !self.by_name.contains_key(&entry.name));
        self.by_name.insert(entry.name.clone(), entry.id);
        self.by_id.insert(entry.id, entry);
    }

    /// Looks up an entry by state id.
    #[must_use]
    pub fn get(&self, id: BlockStateId) -> Option<&BlockLightEntry> {
        self.by_id.get(&id)
    }

    /// Looks up a state id by registry name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<BlockStateId> {
        self.by_name.get(name).copied()
    }

    /// Number of registered states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Returns true once the registry no longer accepts entries.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        !self.allows_registering
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryExt for BlockRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}

impl BlockLightLookup for BlockRegistry {
    fn opacity(&self, state: BlockStateId) -> Option<u8> {
        self.get(state).map(|entry| entry.opacity)
    }

    fn luminance(&self, state: BlockStateId) -> Option<u8> {
        self.get(state).map(|entry| entry.luminance)
    }

    fn light_properties(&self, state: BlockStateId) -> Option<(u8, u8)> {
        self.get(state).map(|entry| (entry.opacity, entry.luminance))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = BlockRegistry::new();
        registry
            .register(BlockLightEntry::new(BlockStateId(3), "minecraft:torch", 1, 14))
            .unwrap();

        assert_eq!(registry.opacity(BlockStateId(3)), Some(1));
        assert_eq!(registry.luminance(BlockStateId(3)), Some(14));
        assert_eq!(registry.light_properties(BlockStateId(3)), Some((1, 14)));
        assert_eq!(registry.get_by_name("minecraft:torch"), Some(BlockStateId(3)));
        assert_eq!(registry.opacity(BlockStateId(4)), None);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let mut registry = BlockRegistry::new();
        assert!(matches!(
            registry.register(BlockLightEntry::new(BlockStateId(1), "bad", 0, 0)),
            Err(RegistryError::InvalidOpacity { opacity: 0, .. })
        ));
        assert!(matches!(
            registry.register(BlockLightEntry::new(BlockStateId(1), "bad", 17, 0)),
            Err(RegistryError::InvalidOpacity { opacity: 17, .. })
        ));
        assert!(matches!(
            registry.register(BlockLightEntry::new(BlockStateId(1), "bad", 1, 16)),
            Err(RegistryError::InvalidLuminance { luminance: 16, .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_rejects_duplicates_and_frozen() {
        let mut registry = BlockRegistry::new();
        registry
            .register(BlockLightEntry::new(BlockStateId(0), "minecraft:air", 1, 0))
            .unwrap();
        assert!(matches!(
            registry.register(BlockLightEntry::new(BlockStateId(0), "minecraft:cave_air", 1, 0)),
            Err(RegistryError::Duplicate(BlockStateId(0)))
        ));

        assert!(matches!(
            registry.register(BlockLightEntry::new(BlockStateId(5), "minecraft:air", 1, 0)),
            Err(RegistryError::DuplicateName { existing: BlockStateId(0), .. })
        ));
        assert_eq!(registry.get_by_name("minecraft:air"), Some(BlockStateId(0)));
        assert_eq!(registry.len(), 1);

        registry.freeze();
        assert!(registry.is_frozen());
        assert!(matches!(
            registry.register(BlockLightEntry::new(BlockStateId(1), "minecraft:stone", 16, 0)),
            Err(RegistryError::Frozen(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let registry = BlockRegistry::from_json(
            r#"[
                { "id": 0, "name": "minecraft:air", "opacity": 1 },
                { "id": 1, "name": "minecraft:stone", "opacity": 16 },
                { "id": 2, "name": "minecraft:glowstone", "opacity": 16, "luminance": 15 }
            ]"#,
        )
        .unwrap();

        assert!(registry.is_frozen());
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.light_properties(BlockStateId(0)), Some((1, 0)));
        assert!(registry.get(BlockStateId(1)).unwrap().is_opaque());
        assert_eq!(registry.luminance(BlockStateId(2)), Some(15));
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            BlockRegistry::from_json("not json"),
            Err(RegistryError::Parse(_))
        ));
        assert!(matches!(
            BlockRegistry::from_json(r#"[{ "id": 0, "name": "x", "opacity": 20 }]"#),
            Err(RegistryError::InvalidOpacity { .. })
        ));
    }
}
