use serde::{Deserialize, Serialize};

use super::constants::{GALAXY_SIZE, SECTOR_SIZE};
use super::errors::{GameError, GameResult};

/// A position within the 8x8 galaxy (quadrant coordinates).
/// Values range 0-7. (0,0) is upper-left, (7,7) is lower-right.
/// X increases left-to-right, Y increases top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuadrantPosition {
    pub x: i32,
    pub y: i32,
}

/// A position within an 8x8 sector grid.
/// Values range 0-7, same orientation as [`QuadrantPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectorPosition {
    pub x: i32,
    pub y: i32,
}

impl QuadrantPosition {
    pub fn new(x: i32, y: i32) -> Self {
        QuadrantPosition { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        (0..GALAXY_SIZE as i32).contains(&self.x) && (0..GALAXY_SIZE as i32).contains(&self.y)
    }

    /// Fail fast unless both components are in 0-7.
    pub fn validate(self) -> GameResult<Self> {
        check_axis("quadrant x", self.x, GALAXY_SIZE)?;
        check_axis("quadrant y", self.y, GALAXY_SIZE)?;
        Ok(self)
    }

    /// The quadrant `(dx, dy)` away, which may lie outside the galaxy.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        QuadrantPosition {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Every quadrant in row-major order.
    pub fn all() -> impl Iterator<Item = QuadrantPosition> {
        (0..GALAXY_SIZE as i32).flat_map(|y| (0..GALAXY_SIZE as i32).map(move |x| QuadrantPosition { x, y }))
    }
}

impl SectorPosition {
    pub fn new(x: i32, y: i32) -> Self {
        SectorPosition { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        (0..SECTOR_SIZE as i32).contains(&self.x) && (0..SECTOR_SIZE as i32).contains(&self.y)
    }

    pub fn validate(self) -> GameResult<Self> {
        check_axis("sector x", self.x, SECTOR_SIZE)?;
        check_axis("sector y", self.y, SECTOR_SIZE)?;
        Ok(self)
    }

    /// Every sector of a quadrant in row-major order.
    pub fn all() -> impl Iterator<Item = SectorPosition> {
        (0..SECTOR_SIZE as i32).flat_map(|y| (0..SECTOR_SIZE as i32).map(move |x| SectorPosition { x, y }))
    }
}

fn check_axis(axis: &'static str, value: i32, size: usize) -> GameResult<()> {
    if (0..size as i32).contains(&value) {
        Ok(())
    } else {
        Err(GameError::CoordinateOutOfRange { axis, value })
    }
}
