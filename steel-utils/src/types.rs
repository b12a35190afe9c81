// Wrapper types making it harder to accidentaly use the wrong underlying type.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A raw block state id. Using the registry this id can be derived into a block and it's current properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockStateId(pub u16);

impl BlockStateId {
    /// The state id of plain air in the vanilla registry.
    pub const AIR: BlockStateId = BlockStateId(0);

    /// Returns true if this is the air state.
    #[must_use]
    pub const fn is_air(self) -> bool {
        self.0 == Self::AIR.0
    }
}

impl Default for BlockStateId {
    fn default() -> Self {
        Self::AIR
    }
}

impl Display for BlockStateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u16> for BlockStateId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air() {
        assert!(BlockStateId::AIR.is_air());
        assert!(BlockStateId::default().is_air());
        assert!(!BlockStateId(1).is_air());
    }

    #[test]
    fn test_display() {
        assert_eq!(BlockStateId(42).to_string(), "#42");
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_serde_transparent() {
        let id: BlockStateId = serde_json::from_str("17").unwrap();
        assert_eq!(id, BlockStateId(17));
        assert_eq!(serde_json::to_string(&id).unwrap(), "17");
    }
}
