use crate::light_storage::{LightGrid, SECTION_VOLUME};

use super::{
    border::{Border, Borders},
    direction::Direction,
};

/// Block light of one section: the full grid plus its six face borders.
///
/// Built once by the engine and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLightResult {
    grid: LightGrid,
    borders: Borders,
}

impl BlockLightResult {
    pub(crate) fn new(grid: LightGrid) -> Self {
        let borders = Borders::extract(&grid);
        Self { grid, borders }
    }

    /// All 4096 light values, indexed `y * 256 + z * 16 + x`.
    #[must_use]
    pub fn light(&self) -> &[u8; SECTION_VOLUME] {
        self.grid.as_array()
    }

    /// The light grid.
    #[must_use]
    pub fn grid(&self) -> &LightGrid {
        &self.grid
    }

    /// Light value at a section-relative position.
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> u8 {
        self.grid.get(x, y, z)
    }

    /// The border on `side`.
    #[must_use]
    pub fn border(&self, side: Direction) -> &Border {
        self.borders.get(side)
    }

    /// All six borders.
    #[must_use]
    pub fn borders(&self) -> &Borders {
        &self.borders
    }
}
