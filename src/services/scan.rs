//! Sensor scans
//!
//! Read-only views of the galaxy around the ship, ready for a presenter to
//! draw. Nothing here mutates the galaxy.

use crate::models::constants::{EntityKind, SECTOR_SIZE};
use crate::models::galaxy::Galaxy;
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::models::quadrant::QuadrantSummary;

/// Text shown for a long-range cell that lies outside the galaxy.
pub const OUT_OF_BOUNDS_CELL: &str = "000";

/// Every sector of the ship's current quadrant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortRangeScan {
    pub quadrant: QuadrantPosition,
    pub ship_sector: SectorPosition,
    /// Sector contents, 0-based: grid[y][x].
    pub grid: [[EntityKind; SECTOR_SIZE]; SECTOR_SIZE],
}

impl ShortRangeScan {
    /// Contents of one sector, `None` outside the quadrant.
    pub fn get(&self, pos: SectorPosition) -> Option<EntityKind> {
        if !pos.in_bounds() {
            return None;
        }
        Some(self.grid[pos.y as usize][pos.x as usize])
    }
}

/// Quadrant summaries for the 3x3 block centred on the ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongRangeScan {
    pub center: QuadrantPosition,
    /// cells[row][col], row 0 is the quadrant row above the ship.
    /// `None` marks quadrants beyond the galaxy edge.
    pub cells: [[Option<QuadrantSummary>; 3]; 3],
}

impl LongRangeScan {
    /// Three-digit text for one cell, "000" outside the galaxy.
    /// Rows and columns past the 3x3 block read the same way.
    pub fn cell_text(&self, row: usize, col: usize) -> String {
        match self.cells.get(row).and_then(|r| r.get(col)).copied().flatten() {
            Some(summary) => summary.to_string(),
            None => OUT_OF_BOUNDS_CELL.to_string(),
        }
    }
}

/// Short Range Sensor Scan: the ship's quadrant, sector by sector.
pub fn short_range_scan(galaxy: &Galaxy) -> ShortRangeScan {
    let ship = galaxy.ship();
    let quadrant = galaxy.ship_quadrant();
    let mut grid = [[EntityKind::Empty; SECTOR_SIZE]; SECTOR_SIZE];
    for entity in quadrant.iter() {
        let s = entity.sector();
        grid[s.y as usize][s.x as usize] = entity.kind();
    }
    ShortRangeScan {
        quadrant: ship.quadrant(),
        ship_sector: ship.sector(),
        grid,
    }
}

/// Long Range Sensor Scan: summaries of the ship's quadrant and its
/// neighbours. Quadrants past the galaxy edge are never queried.
pub fn long_range_scan(galaxy: &Galaxy) -> LongRangeScan {
    let center = galaxy.ship().quadrant();
    let mut cells = [[None; 3]; 3];
    for (row, dy) in (-1..=1).enumerate() {
        for (col, dx) in (-1..=1).enumerate() {
            cells[row][col] = galaxy.quadrant_summary(center.offset(dx, dy)).ok();
        }
    }
    LongRangeScan { center, cells }
}
