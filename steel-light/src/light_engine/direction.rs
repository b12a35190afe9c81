//! Cardinal directions, doubling as the six faces of a section.

use crate::light_storage::LightGrid;

/// Six cardinal directions for light propagation.
///
/// The ordinal values (0-5) match Minecraft's Java implementation and are critical
/// for `QueueEntry` bit manipulation (direction flags use bits 16-21). The same enum names the
/// six faces of a section: `Down` is the `y = 0` face, `East` the `x = 15` face, and so on.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Downward (-Y direction) - ordinal 0
    Down = 0,
    /// Upward (+Y direction) - ordinal 1
    Up = 1,
    /// North (-Z direction) - ordinal 2
    North = 2,
    /// South (+Z direction) - ordinal 3
    South = 3,
    /// West (-X direction) - ordinal 4
    West = 4,
    /// East (+X direction) - ordinal 5
    East = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
    Z,
}

impl Direction {
    /// All six directions in array form for iteration.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    const fn axis(self) -> Axis {
        match self {
            Self::Down | Self::Up => Axis::Y,
            Self::North | Self::South => Axis::Z,
            Self::West | Self::East => Axis::X,
        }
    }

    /// Section-relative position of the voxel at `(u, v)` on this face.
    ///
    /// `u` runs along the lower-numbered in-plane axis. Opposite faces share the same `(u, v)`
    /// axes, so two sections line up the borders of a shared face index for index.
    #[must_use]
    pub const fn face_position(self, u: usize, v: usize) -> (usize, usize, usize) {
        let depth = if matches!(self, Self::Up | Self::South | Self::East) {
            15
        } else {
            0
        };
        match self.axis() {
            Axis::X => (depth, u, v),
            Axis::Y => (u, depth, v),
            Axis::Z => (u, v, depth),
        }
    }

    /// Index of the neighbouring voxel inside the section, or `None` if moving this way leaves
    /// the section.
    #[must_use]
    #[inline]
    pub const fn relative_index(self, index: usize) -> Option<usize> {
        let (x, y, z) = LightGrid::coords(index);
        let on_edge = match self {
            Self::Down => y == 0,
            Self::Up => y == 15,
            Self::North => z == 0,
            Self::South => z == 15,
            Self::West => x == 0,
            Self::East => x == 15,
        };
        if on_edge {
            return None;
        }
        Some(match self {
            Self::Down => index - 256,
            Self::Up => index + 256,
            Self::North => index - 16,
            Self::South => index + 16,
            Self::West => index - 1,
            Self::East => index + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals() {
        assert_eq!(Direction::Down as u8, 0);
        assert_eq!(Direction::Up as u8, 1);
        assert_eq!(Direction::North as u8, 2);
        assert_eq!(Direction::South as u8, 3);
        assert_eq!(Direction::West as u8, 4);
        assert_eq!(Direction::East as u8, 5);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::West.opposite(), Direction::East);
    }

    fn offset(dir: Direction) -> (i32, i32, i32) {
        match dir {
            Direction::Down => (0, -1, 0),
            Direction::Up => (0, 1, 0),
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::West => (-1, 0, 0),
            Direction::East => (1, 0, 0),
        }
    }

    #[test]
    fn test_relative_index_matches_offset() {
        for index in 0..4096 {
            let (x, y, z) = LightGrid::coords(index);
            for dir in Direction::ALL {
                let (dx, dy, dz) = offset(dir);
                let (nx, ny, nz) = (x as i32 + dx, y as i32 + dy, z as i32 + dz);
                let inside = (0..16).contains(&nx) && (0..16).contains(&ny) && (0..16).contains(&nz);
                let expected = inside
                    .then(|| LightGrid::index(nx as usize, ny as usize, nz as usize));
                assert_eq!(dir.relative_index(index), expected, "{dir:?} from {index}");
            }
        }
    }

    #[test]
    fn test_opposite_faces_share_plane_coordinates() {
        for dir in Direction::ALL {
            let (dx, dy, dz) = offset(dir);
            for v in 0..16 {
                for u in 0..16 {
                    let (ax, ay, az) = dir.face_position(u, v);
                    let (bx, by, bz) = dir.opposite().face_position(u, v);
                    // Only the coordinate along the face normal differs.
                    assert_eq!(dx == 0, ax == bx, "{dir:?}");
                    assert_eq!(dy == 0, ay == by, "{dir:?}");
                    assert_eq!(dz == 0, az == bz, "{dir:?}");
                }
            }
        }
    }

    #[test]
    fn test_face_position() {
        assert_eq!(Direction::Down.face_position(3, 7), (3, 0, 7));
        assert_eq!(Direction::Up.face_position(3, 7), (3, 15, 7));
        assert_eq!(Direction::North.face_position(3, 7), (3, 7, 0));
        assert_eq!(Direction::South.face_position(3, 7), (3, 7, 15));
        assert_eq!(Direction::West.face_position(3, 7), (0, 3, 7));
        assert_eq!(Direction::East.face_position(3, 7), (15, 3, 7));
    }
}
