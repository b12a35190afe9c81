//! Light grid for a single section.
//!
//! The engine works on one byte per voxel. Packets and saves use 4-bit values packed two per
//! byte, so for a 16x16x16 section that is 2048 bytes (4096 blocks / 2).

use std::fmt::{self, Debug};

/// Number of voxels in a section.
pub const SECTION_VOLUME: usize = 4096;

/// The number of bytes needed to store light data for a 16x16x16 section.
/// 16*16*16 blocks = 4096 blocks, at 4 bits per block = 2048 bytes
pub const LIGHT_ARRAY_SIZE: usize = 2048;

/// Highest light level.
pub const MAX_LIGHT: u8 = 15;

/// One light level (0-15) per voxel, indexed `y * 256 + z * 16 + x`.
#[derive(Clone, PartialEq, Eq)]
pub struct LightGrid {
    data: Box<[u8; SECTION_VOLUME]>,
}

impl LightGrid {
    /// Creates a fully dark grid.
    #[must_use]
    pub fn new_empty() -> Self {
        Self {
            data: Box::new([0; SECTION_VOLUME]),
        }
    }

    /// Flat index of a position.
    #[must_use]
    #[inline]
    pub const fn index(x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < 16 && y < 16 && z < 16, "Coordinates must be 0-15");
        (y << 8) | (z << 4) | x
    }

    /// Splits a flat index back into `(x, y, z)`.
    #[must_use]
    #[inline]
    pub const fn coords(index: usize) -> (usize, usize, usize) {
        (index & 15, index >> 8, (index >> 4) & 15)
    }

    /// Gets the light level at the given position.
    #[must_use]
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> u8 {
        self.data[Self::index(x, y, z)]
    }

    /// Sets the light level at the given position.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, light_level: u8) {
        self.set_index(Self::index(x, y, z), light_level);
    }

    #[inline]
    pub(crate) fn get_index(&self, index: usize) -> u8 {
        self.data[index]
    }

    #[inline]
    pub(crate) fn set_index(&mut self, index: usize, light_level: u8) {
        debug_assert!(light_level <= MAX_LIGHT, "Light level must be 0-15");
        self.data[index] = light_level;
    }

    /// All light values in index order.
    #[must_use]
    pub fn as_array(&self) -> &[u8; SECTION_VOLUME] {
        &self.data
    }

    /// Returns true if every voxel is dark.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.data.iter().all(|&level| level == 0)
    }

    /// Returns the nibble-packed form used by light packets.
    ///
    /// Even indices go to the low nibble, odd indices to the high nibble.
    #[must_use]
    pub fn to_packet_data(&self) -> Vec<u8> {
        self.data
            .chunks_exact(2)
            .map(|pair| (pair[0] & 0x0F) | ((pair[1] & 0x0F) << 4))
            .collect()
    }
}

impl Default for LightGrid {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl Debug for LightGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lit = self.data.iter().filter(|&&level| level > 0).count();
        let max = self.data.iter().copied().max().unwrap_or(0);
        f.debug_struct("LightGrid")
            .field("lit", &lit)
            .field("max", &max)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let grid = LightGrid::new_empty();
        assert!(grid.is_dark());
        assert_eq!(grid.get(0, 0, 0), 0);
        assert_eq!(grid.get(15, 15, 15), 0);
    }

    #[test]
    fn test_get_set() {
        let mut grid = LightGrid::new_empty();

        grid.set(0, 0, 0, 15);
        grid.set(1, 0, 0, 14);
        grid.set(0, 1, 0, 7);
        grid.set(15, 15, 15, 1);

        assert_eq!(grid.get(0, 0, 0), 15);
        assert_eq!(grid.get(1, 0, 0), 14);
        assert_eq!(grid.get(0, 1, 0), 7);
        assert_eq!(grid.get(15, 15, 15), 1);
        assert_eq!(grid.get(8, 8, 8), 0); // Unchanged
        assert!(!grid.is_dark());
    }

    #[test]
    fn test_index_layout() {
        assert_eq!(LightGrid::index(1, 0, 0), 1);
        assert_eq!(LightGrid::index(0, 0, 1), 16);
        assert_eq!(LightGrid::index(0, 1, 0), 256);
        assert_eq!(LightGrid::coords(LightGrid::index(3, 9, 12)), (3, 9, 12));
    }

    #[test]
    fn test_packed_nibbles() {
        let mut grid = LightGrid::new_empty();

        // Two adjacent blocks share a byte
        grid.set(0, 0, 0, 5);
        grid.set(1, 0, 0, 10);
        grid.set(15, 15, 15, 3);

        let packed = grid.to_packet_data();
        assert_eq!(packed.len(), LIGHT_ARRAY_SIZE);
        assert_eq!(packed[0], 0xA5);
        assert_eq!(packed[LIGHT_ARRAY_SIZE - 1], 0x30);
    }
}
