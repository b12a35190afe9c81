//! Paletted storage for the 16x16x16 block states of a section.
//!
//! Values are stored as indices into a small local palette, bit-packed into `u64`s. Entries never
//! straddle two longs: a long holds `64 / bits` entries and any leftover high bits stay zero.

use std::fmt::Debug;

use steel_utils::BlockStateId;
use thiserror::Error;

/// Reads the block state of any voxel in a section.
///
/// Coordinates must be in `0..16`. Anything else is a caller bug.
pub trait BlockStateSource {
    /// Returns the block state at the given section-relative position.
    fn state_at(&self, x: usize, y: usize, z: usize) -> BlockStateId;
}

impl<S: BlockStateSource + ?Sized> BlockStateSource for &S {
    fn state_at(&self, x: usize, y: usize, z: usize) -> BlockStateId {
        (**self).state_at(x, y, z)
    }
}

/// Errors raised when decoding raw palette data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    /// The palette had no entries.
    #[error("palette is empty")]
    EmptyPalette,
    /// The bit width cannot address the palette or is outside `1..=12`.
    #[error("{bits} bits per entry cannot index a palette of {palette_len} entries")]
    BitsOutOfRange {
        /// Declared bits per entry.
        bits: u8,
        /// Number of palette entries.
        palette_len: usize,
    },
    /// The packed array has the wrong number of longs for the bit width.
    #[error("expected {expected} longs of packed data, got {actual}")]
    DataLength {
        /// Longs required by the bit width.
        expected: usize,
        /// Longs supplied.
        actual: usize,
    },
    /// A packed entry points past the end of the palette.
    #[error("entry {position} references palette index {index}, palette has {palette_len} entries")]
    IndexOutOfPalette {
        /// Voxel index of the bad entry.
        position: usize,
        /// The out-of-range palette index.
        index: usize,
        /// Number of palette entries.
        palette_len: usize,
    },
}

/// Block states of a section.
pub type BlockPalette = PalettedContainer<BlockStateId>;

/// A cube of `SIZE`³ values stored either as one value or as a packed palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PalettedContainer<T> {
    /// Every position holds the same value.
    Homogeneous(T),
    /// Positions hold different values.
    Heterogeneous(Box<HeterogeneousPalette<T>>),
}

/// Palette plus packed indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeterogeneousPalette<T> {
    palette: Vec<T>,
    bits: u8,
    data: Box<[u64]>,
}

impl<T> HeterogeneousPalette<T> {
    /// Smallest bit width used when growing a palette.
    const MIN_BITS: u8 = 4;
    /// Largest bit width accepted. A section never holds more than 4096 distinct values.
    const MAX_BITS: u8 = 12;

    fn bits_for(palette_len: usize) -> u8 {
        let needed = usize::BITS - (palette_len.max(2) - 1).leading_zeros();
        (needed as u8).max(Self::MIN_BITS)
    }

    const fn longs_for(bits: u8) -> usize {
        let per_long = 64 / bits as usize;
        PalettedContainer::<T>::VOLUME.div_ceil(per_long)
    }

    #[inline]
    fn read(&self, index: usize) -> usize {
        let per_long = 64 / self.bits as usize;
        let mask = (1u64 << self.bits) - 1;
        let shift = (index % per_long) * self.bits as usize;
        ((self.data[index / per_long] >> shift) & mask) as usize
    }

    #[inline]
    fn write(&mut self, index: usize, palette_index: usize) {
        let per_long = 64 / self.bits as usize;
        let mask = (1u64 << self.bits) - 1;
        let shift = (index % per_long) * self.bits as usize;
        let long = &mut self.data[index / per_long];
        *long = (*long & !(mask << shift)) | (((palette_index as u64) & mask) << shift);
    }
}

impl<T: Copy> HeterogeneousPalette<T> {
    /// Drops palette entries referenced by no position except `skip`, making room for one more.
    ///
    /// Kept entries stay in their original order. The bit width never shrinks and only grows if
    /// the live entries plus one no longer fit.
    fn compact(&mut self, skip: usize) {
        let mut used = vec![false; self.palette.len()];
        for position in 0..PalettedContainer::<T>::VOLUME {
            if position != skip {
                used[self.read(position)] = true;
            }
        }

        let mut remap = vec![0; self.palette.len()];
        let mut palette = Vec::with_capacity(self.palette.len());
        for (old, value) in self.palette.iter().enumerate() {
            if used[old] {
                remap[old] = palette.len();
                palette.push(*value);
            }
        }

        let bits = self.bits.max(Self::bits_for(palette.len() + 1));
        let mut compacted = Self {
            palette,
            bits,
            data: vec![0; Self::longs_for(bits)].into_boxed_slice(),
        };
        for position in 0..PalettedContainer::<T>::VOLUME {
            if position != skip {
                compacted.write(position, remap[self.read(position)]);
            }
        }
        *self = compacted;
    }
}

impl<T> PalettedContainer<T> {
    /// Edge length of the cube.
    pub const SIZE: usize = 16;
    /// Number of positions in the cube.
    pub const VOLUME: usize = Self::SIZE * Self::SIZE * Self::SIZE;

    /// Flat index of a position: `y * 256 + z * 16 + x`.
    ///
    /// # Panics
    /// If any coordinate is outside `0..16`.
    #[must_use]
    #[inline]
    pub fn index(x: usize, y: usize, z: usize) -> usize {
        assert!(
            x < Self::SIZE && y < Self::SIZE && z < Self::SIZE,
            "section coordinates out of range: ({x}, {y}, {z})"
        );
        (y << 8) | (z << 4) | x
    }

    /// The distinct values this container may hold.
    #[must_use]
    pub fn palette(&self) -> &[T] {
        match self {
            Self::Homogeneous(value) => std::slice::from_ref(value),
            Self::Heterogeneous(data) => &data.palette,
        }
    }

    /// Bits used per packed entry, 0 for a homogeneous container.
    #[must_use]
    pub fn bits_per_entry(&self) -> u8 {
        match self {
            Self::Homogeneous(_) => 0,
            Self::Heterogeneous(data) => data.bits,
        }
    }
}

impl<T: Copy + Eq + Debug> PalettedContainer<T> {
    /// Gets the value at a position.
    #[must_use]
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> T {
        debug_assert!(x < Self::SIZE && y < Self::SIZE && z < Self::SIZE);
        match self {
            Self::Homogeneous(value) => *value,
            Self::Heterogeneous(data) => data.palette[data.read(Self::index(x, y, z))],
        }
    }

    /// Sets the value at a position.
    ///
    /// New values are appended to the palette. Once the palette fills its bit width, values no
    /// longer referenced are dropped before the width grows.
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: T) {
        let index = Self::index(x, y, z);
        match self {
            Self::Homogeneous(current) => {
                if *current == value {
                    return;
                }
                let bits = HeterogeneousPalette::<T>::MIN_BITS;
                let mut data = HeterogeneousPalette {
                    palette: vec![*current, value],
                    bits,
                    data: vec![0; HeterogeneousPalette::<T>::longs_for(bits)].into_boxed_slice(),
                };
                data.write(index, 1);
                *self = Self::Heterogeneous(Box::new(data));
            }
            Self::Heterogeneous(data) => {
                if let Some(i) = data.palette.iter().position(|v| *v == value) {
                    data.write(index, i);
                    return;
                }
                if data.palette.len() >= 1 << data.bits {
                    data.compact(index);
                }
                data.palette.push(value);
                data.write(index, data.palette.len() - 1);
            }
        }
    }

    /// Builds a container by evaluating `f` at every position.
    pub fn from_fn(mut f: impl FnMut(usize, usize, usize) -> T) -> Self {
        let mut palette: Vec<T> = Vec::new();
        let mut indices = Vec::with_capacity(Self::VOLUME);
        for y in 0..Self::SIZE {
            for z in 0..Self::SIZE {
                for x in 0..Self::SIZE {
                    let value = f(x, y, z);
                    let palette_index = if let Some(i) = palette.iter().position(|v| *v == value) {
                        i
                    } else {
                        palette.push(value);
                        palette.len() - 1
                    };
                    indices.push(palette_index);
                }
            }
        }

        if palette.len() == 1 {
            return Self::Homogeneous(palette[0]);
        }

        let bits = HeterogeneousPalette::<T>::bits_for(palette.len());
        let mut data = HeterogeneousPalette {
            palette,
            bits,
            data: vec![0; HeterogeneousPalette::<T>::longs_for(bits)].into_boxed_slice(),
        };
        for (index, palette_index) in indices.into_iter().enumerate() {
            data.write(index, palette_index);
        }
        Self::Heterogeneous(Box::new(data))
    }

    /// Decodes a palette and its packed index array.
    ///
    /// A single-entry palette with no data is homogeneous. Otherwise `bits` must be in `1..=12`
    /// and able to address the whole palette, `data` must hold exactly the longs needed for 4096
    /// entries, and every entry must reference an existing palette slot.
    pub fn from_raw(palette: Vec<T>, bits: u8, data: Vec<u64>) -> Result<Self, PaletteError> {
        if palette.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if palette.len() == 1 && data.is_empty() {
            return Ok(Self::Homogeneous(palette[0]));
        }
        if bits == 0
            || bits > HeterogeneousPalette::<T>::MAX_BITS
            || palette.len() > 1 << bits
        {
            return Err(PaletteError::BitsOutOfRange {
                bits,
                palette_len: palette.len(),
            });
        }

        let expected = HeterogeneousPalette::<T>::longs_for(bits);
        if data.len() != expected {
            return Err(PaletteError::DataLength {
                expected,
                actual: data.len(),
            });
        }

        let container = HeterogeneousPalette {
            palette,
            bits,
            data: data.into_boxed_slice(),
        };
        for position in 0..Self::VOLUME {
            let index = container.read(position);
            if index >= container.palette.len() {
                return Err(PaletteError::IndexOutOfPalette {
                    position,
                    index,
                    palette_len: container.palette.len(),
                });
            }
        }
        Ok(Self::Heterogeneous(Box::new(container)))
    }

    /// The packed longs, empty for a homogeneous container.
    #[must_use]
    pub fn raw_data(&self) -> &[u64] {
        match self {
            Self::Homogeneous(_) => &[],
            Self::Heterogeneous(data) => &data.data,
        }
    }
}

impl BlockPalette {
    /// Number of positions that are not air.
    #[must_use]
    pub fn non_empty_block_count(&self) -> u16 {
        match self {
            Self::Homogeneous(state) => {
                if state.is_air() {
                    0
                } else {
                    Self::VOLUME as u16
                }
            }
            Self::Heterogeneous(data) => (0..Self::VOLUME)
                .filter(|&index| !data.palette[data.read(index)].is_air())
                .count() as u16,
        }
    }
}

impl Default for BlockPalette {
    fn default() -> Self {
        Self::Homogeneous(BlockStateId::AIR)
    }
}

impl BlockStateSource for BlockPalette {
    #[inline]
    fn state_at(&self, x: usize, y: usize, z: usize) -> BlockStateId {
        self.get(x, y, z)
    }
}
