use super::constants::{DEFAULT_ENERGY, DEFAULT_SCANNED, DEFAULT_STATUS, EntityKind};
use super::position::{QuadrantPosition, SectorPosition};

/// A single occupant of a sector slot.
///
/// The kind is fixed at construction. Coordinates only change when the
/// galaxy moves the entity, so "placing" and "moving" share one primitive:
/// update the coordinates, then write the entity into its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    kind: EntityKind,
    quadrant: QuadrantPosition,
    sector: SectorPosition,
    pub energy: i32,
    pub status: i32,
    pub scanned: i32,
}

impl Entity {
    pub fn new(kind: EntityKind, quadrant: QuadrantPosition, sector: SectorPosition) -> Self {
        Entity {
            kind,
            quadrant,
            sector,
            energy: DEFAULT_ENERGY,
            status: DEFAULT_STATUS,
            scanned: DEFAULT_SCANNED,
        }
    }

    pub fn empty(quadrant: QuadrantPosition, sector: SectorPosition) -> Self {
        Self::new(EntityKind::Empty, quadrant, sector)
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn quadrant(&self) -> QuadrantPosition {
        self.quadrant
    }

    pub fn sector(&self) -> SectorPosition {
        self.sector
    }

    pub fn is_empty(&self) -> bool {
        self.kind == EntityKind::Empty
    }

    pub(crate) fn relocate(&mut self, quadrant: QuadrantPosition, sector: SectorPosition) {
        self.quadrant = quadrant;
        self.sector = sector;
    }
}
