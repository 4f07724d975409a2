use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{EntityKind, SECTOR_SIZE};
use super::entity::Entity;
use super::errors::GameResult;
use super::position::{QuadrantPosition, SectorPosition};

/// Per-kind tallies for one quadrant, as shown by a long-range scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantSummary {
    pub stars: usize,
    pub hostiles: usize,
    pub stations: usize,
}

impl QuadrantSummary {
    /// The 3-digit encoded value: stars*100 + hostiles*10 + stations.
    pub fn encoded(&self) -> usize {
        self.stars * 100 + self.hostiles * 10 + self.stations
    }
}

/// Renders as three digits in (stars, hostiles, stations) order, e.g. "210".
impl fmt::Display for QuadrantSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.stars, self.hostiles, self.stations)
    }
}

/// The 8x8 sector grid of one quadrant. Internal 0-based indexing: sectors[y][x].
#[derive(Debug, Clone)]
pub struct Quadrant {
    position: QuadrantPosition,
    sectors: [[Entity; SECTOR_SIZE]; SECTOR_SIZE],
}

impl Quadrant {
    /// Create a quadrant with every sector holding an empty entity tagged
    /// with this quadrant's address and its own sector address.
    pub fn new(position: QuadrantPosition) -> Self {
        let sectors = std::array::from_fn(|y| {
            std::array::from_fn(|x| Entity::empty(position, SectorPosition::new(x as i32, y as i32)))
        });
        Quadrant { position, sectors }
    }

    pub fn position(&self) -> QuadrantPosition {
        self.position
    }

    /// Get the entity at a 0-based sector position.
    pub fn get(&self, pos: SectorPosition) -> GameResult<&Entity> {
        Ok(self.slot(pos.validate()?))
    }

    pub(crate) fn slot(&self, pos: SectorPosition) -> &Entity {
        &self.sectors[pos.y as usize][pos.x as usize]
    }

    pub(crate) fn set(&mut self, pos: SectorPosition, entity: Entity) {
        self.sectors[pos.y as usize][pos.x as usize] = entity;
    }

    pub(crate) fn clear(&mut self, pos: SectorPosition) {
        self.set(pos, Entity::empty(self.position, pos));
    }

    /// Out-of-range positions are never empty.
    pub fn is_empty(&self, pos: SectorPosition) -> bool {
        pos.in_bounds() && self.slot(pos).is_empty()
    }

    /// All 64 sectors in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.sectors.iter().flatten()
    }

    pub fn rows(&self) -> &[[Entity; SECTOR_SIZE]; SECTOR_SIZE] {
        &self.sectors
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.iter().filter(|e| e.kind() == kind).count()
    }

    /// Tally stars, hostiles and stations in a single pass.
    pub fn summary(&self) -> QuadrantSummary {
        let mut summary = QuadrantSummary::default();
        for entity in self.iter() {
            match entity.kind() {
                EntityKind::Star => summary.stars += 1,
                EntityKind::Hostile => summary.hostiles += 1,
                EntityKind::ResupplyStation => summary.stations += 1,
                EntityKind::Ship | EntityKind::Empty => {}
            }
        }
        summary
    }
}
