//! `QueueEntry` bit-packing for block light propagation.
//!
//! The `QueueEntry` packs everything the flood-fill needs about one queued voxel into a u32:
//! - Bits 0-11: Voxel index within the section (0-4095)
//! - Bits 12-15: Light level (0-15)
//! - Bits 16-21: Direction flags (6 directions)

use super::direction::Direction;

/// A queue entry that encodes light propagation information in a bit-packed u32.
///
/// Bit layout:
/// ```text
/// Bit Position:  31......22  21 20 19 18 17 16  15 14 13 12  11 ........ 0
///                |  Unused | D  D  D  D  D  D | L  L  L  L | I ... I     |
///                          |                 |             +-> Voxel index (12 bits)
///                          |                 +---------------> Light level (4 bits)
///                          +---------------------------------> Direction flags (6 bits)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueueEntry(u32);

impl QueueEntry {
    /// Mask for the voxel index (bits 0-11)
    const INDEX_MASK: u32 = 0xFFF;

    /// Shift of the light level
    const LEVEL_SHIFT: u32 = 12;

    /// Mask for light level once shifted down
    const LEVEL_MASK: u32 = 0x0F;

    /// Shift of the first direction flag
    const DIRECTION_SHIFT: u32 = 16;

    /// Mask for all direction flags (bits 16-21)
    const DIRECTIONS_MASK: u32 = 0x3F << Self::DIRECTION_SHIFT;

    #[inline]
    const fn direction_bit(dir: Direction) -> u32 {
        1 << (dir as u32 + Self::DIRECTION_SHIFT)
    }

    #[inline]
    fn pack(index: usize, level: u8, flags: u32) -> Self {
        debug_assert!(index < 4096, "Voxel index must be 0-4095");
        debug_assert!(level <= 15, "Light level must be 0-15");
        Self(
            (index as u32 & Self::INDEX_MASK)
                | ((u32::from(level) & Self::LEVEL_MASK) << Self::LEVEL_SHIFT)
                | flags,
        )
    }

    /// Gets the voxel index of this entry.
    #[must_use]
    #[inline]
    pub fn index(self) -> usize {
        (self.0 & Self::INDEX_MASK) as usize
    }

    /// Gets the light level from this queue entry (0-15).
    #[must_use]
    #[inline]
    pub fn level(self) -> u8 {
        ((self.0 >> Self::LEVEL_SHIFT) & Self::LEVEL_MASK) as u8
    }

    /// Checks if light should propagate in the given direction.
    #[must_use]
    #[inline]
    pub fn should_propagate(self, dir: Direction) -> bool {
        (self.0 & Self::direction_bit(dir)) != 0
    }

    /// Creates a queue entry for an emitting block, spreading in all directions.
    #[must_use]
    pub fn increase_from_emission(index: usize, level: u8) -> Self {
        Self::pack(index, level, Self::DIRECTIONS_MASK)
    }

    /// Creates a queue entry spreading in all directions except one.
    ///
    /// Light that arrived travelling in direction `d` skips `d.opposite()`, since the voxel it
    /// came from is already brighter.
    #[must_use]
    pub fn increase_skip_one_direction(index: usize, level: u8, skip_dir: Direction) -> Self {
        Self::pack(
            index,
            level,
            Self::DIRECTIONS_MASK & !Self::direction_bit(skip_dir),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_level_extraction() {
        let entry = QueueEntry::increase_from_emission(4095, 12);
        assert_eq!(entry.index(), 4095);
        assert_eq!(entry.level(), 12);

        let entry = QueueEntry::increase_skip_one_direction(0, 15, Direction::Up);
        assert_eq!(entry.index(), 0);
        assert_eq!(entry.level(), 15);
    }

    #[test]
    fn test_emission_spreads_everywhere() {
        let entry = QueueEntry::increase_from_emission(100, 14);
        for dir in Direction::ALL {
            assert!(entry.should_propagate(dir));
        }
    }

    #[test]
    fn test_skip_one_direction() {
        let entry = QueueEntry::increase_skip_one_direction(2080, 8, Direction::Up);
        assert!(entry.should_propagate(Direction::Down));
        assert!(!entry.should_propagate(Direction::Up));
        assert!(entry.should_propagate(Direction::North));
        assert!(entry.should_propagate(Direction::South));
        assert!(entry.should_propagate(Direction::West));
        assert!(entry.should_propagate(Direction::East));
        assert_eq!(entry.level(), 8);
        assert_eq!(entry.index(), 2080);
    }
}
