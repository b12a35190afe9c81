//! Face slices of a light grid, handed between neighbouring sections.
//!
//! A border is addressed by `(u, v)`, stored at `u + v * 16`. `u` runs along the lower-numbered
//! of the face's two in-plane axes and `v` along the other:
//!
//! | Face            | u | v |
//! |-----------------|---|---|
//! | `Down`, `Up`    | x | z |
//! | `North`, `South`| x | y |
//! | `West`, `East`  | y | z |
//!
//! Opposite faces share a convention, so the `Up` border of one section and the `Down` border
//! of the section above describe the same column of the shared face at the same index.

use crate::light_storage::{LightGrid, MAX_LIGHT};

use super::direction::Direction;

/// Number of light values on one face.
pub const BORDER_SIZE: usize = 256;

/// Light values of one 16x16 section face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    light: Box<[u8; BORDER_SIZE]>,
}

impl Border {
    /// A fully dark border.
    #[must_use]
    pub fn new_empty() -> Self {
        Self {
            light: Box::new([0; BORDER_SIZE]),
        }
    }

    /// Wraps raw values, clamping anything above 15.
    #[must_use]
    pub fn from_array(mut light: [u8; BORDER_SIZE]) -> Self {
        for level in &mut light {
            *level = (*level).min(MAX_LIGHT);
        }
        Self {
            light: Box::new(light),
        }
    }

    /// Copies the plane of `grid` lying on `face`.
    #[must_use]
    pub fn extract(grid: &LightGrid, face: Direction) -> Self {
        let mut border = Self::new_empty();
        for v in 0..16 {
            for u in 0..16 {
                let (x, y, z) = face.face_position(u, v);
                border.light[u + v * 16] = grid.get(x, y, z);
            }
        }
        border
    }

    /// Light value at `(u, v)`.
    #[must_use]
    #[inline]
    pub fn get(&self, u: usize, v: usize) -> u8 {
        debug_assert!(u < 16 && v < 16, "Border coordinates must be 0-15");
        self.light[u + v * 16]
    }

    /// All values, indexed `u + v * 16`.
    #[must_use]
    pub fn as_array(&self) -> &[u8; BORDER_SIZE] {
        &self.light
    }

    /// Returns true if every value is 0.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.light.iter().all(|&level| level == 0)
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::new_empty()
    }
}

/// The six borders of a section, one per [`Direction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Borders {
    faces: [Border; 6],
}

impl Borders {
    /// Slices all six faces of `grid`.
    #[must_use]
    pub fn extract(grid: &LightGrid) -> Self {
        Self {
            faces: Direction::ALL.map(|face| Border::extract(grid, face)),
        }
    }

    /// The border on `face`.
    #[must_use]
    #[inline]
    pub fn get(&self, face: Direction) -> &Border {
        &self.faces[face as usize]
    }

    /// Iterates faces in [`Direction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &Border)> {
        Direction::ALL.into_iter().zip(self.faces.iter())
    }
}

/// Light entering a section through its faces, as reported by its neighbours.
///
/// The border stored for `face` is what the neighbour on that side reported for the shared
/// face, i.e. its `face.opposite()` border.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingLight {
    faces: [Option<Border>; 6],
}

impl IncomingLight {
    /// No light from any side.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Sets the light entering through `face`.
    #[must_use]
    pub fn with_face(mut self, face: Direction, border: Border) -> Self {
        self.faces[face as usize] = Some(border);
        self
    }

    /// Takes the light entering through `face` from the neighbour's computed borders.
    #[must_use]
    pub fn with_neighbor(self, face: Direction, neighbor: &Borders) -> Self {
        self.with_face(face, neighbor.get(face.opposite()).clone())
    }

    /// The light entering through `face`, if any.
    #[must_use]
    pub fn get(&self, face: Direction) -> Option<&Border> {
        self.faces[face as usize].as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_orientation() {
        let mut grid = LightGrid::new_empty();
        // Distinct values on each face so any axis mix-up shows.
        grid.set(2, 0, 5, 1); // Down: u = x, v = z
        grid.set(2, 15, 5, 2); // Up
        grid.set(2, 5, 0, 3); // North: u = x, v = y
        grid.set(2, 5, 15, 4); // South
        grid.set(0, 2, 5, 5); // West: u = y, v = z
        grid.set(15, 2, 5, 6); // East

        let borders = Borders::extract(&grid);
        for (face, expected) in Direction::ALL.into_iter().zip(1..) {
            let border = borders.get(face);
            assert_eq!(border.get(2, 5), expected, "{face:?}");
            assert_eq!(border.as_array()[2 + 5 * 16], expected);
            assert_eq!(
                border.as_array().iter().filter(|&&l| l > 0).count(),
                1,
                "{face:?}"
            );
        }
    }

    #[test]
    fn test_from_array_clamps() {
        let mut raw = [0u8; BORDER_SIZE];
        raw[0] = 200;
        raw[1] = 7;
        let border = Border::from_array(raw);
        assert_eq!(border.get(0, 0), 15);
        assert_eq!(border.get(1, 0), 7);
    }

    #[test]
    fn test_incoming_from_neighbor() {
        let mut grid = LightGrid::new_empty();
        grid.set(4, 15, 9, 11);
        let below = Borders::extract(&grid);

        // The section above receives the lower section's Up face through its Down face.
        let incoming = IncomingLight::none().with_neighbor(Direction::Down, &below);
        assert_eq!(incoming.get(Direction::Down).map(|b| b.get(4, 9)), Some(11));
        assert!(incoming.get(Direction::Up).is_none());
    }
}
