use serde::{Deserialize, Serialize};

pub const GALAXY_SIZE: usize = 8;
pub const SECTOR_SIZE: usize = 8;

/// Total number of sector slots across the whole galaxy.
pub const TOTAL_SECTORS: usize = GALAXY_SIZE * GALAXY_SIZE * SECTOR_SIZE * SECTOR_SIZE;

pub const DEFAULT_STARS: usize = 256;
pub const DEFAULT_HOSTILES: usize = 30;
pub const DEFAULT_STATIONS: usize = 3;

/// Maximum entities of a single kind placed into one quadrant.
/// Kept at or below 9 so quadrant summaries stay one digit per field.
pub const MAX_PER_QUADRANT: usize = 9;
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 100_000;

/// Default attribute values for freshly created entities.
pub const DEFAULT_ENERGY: i32 = -1;
pub const DEFAULT_STATUS: i32 = 1;
pub const DEFAULT_SCANNED: i32 = 1;

pub const SNAPSHOT_VERSION: u32 = 1;

/// What occupies a sector slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Empty = 0,
    Ship = 1,
    Hostile = 2,
    ResupplyStation = 3,
    Star = 4,
}

impl EntityKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            EntityKind::Empty => "   ",
            EntityKind::Ship => "<*>",
            EntityKind::Hostile => "+K+",
            EntityKind::ResupplyStation => ">!<",
            EntityKind::Star => " * ",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Empty => "EMPTY",
            EntityKind::Ship => "SHIP",
            EntityKind::Hostile => "HOSTILE",
            EntityKind::ResupplyStation => "RESUPPLY STATION",
            EntityKind::Star => "STAR",
        }
    }

    /// Kinds scattered at generation time, in placement order.
    pub const POPULATED: [EntityKind; 3] = [
        EntityKind::Star,
        EntityKind::Hostile,
        EntityKind::ResupplyStation,
    ];
}
