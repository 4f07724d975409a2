//! Versioned save format for a galaxy.
//!
//! A snapshot is a flat list of every non-empty entity plus the index of the
//! ship within that list. It does not depend on the in-memory grid layout,
//! so the grid can change shape internally without breaking saved games.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::models::constants::{EntityKind, MAX_PER_QUADRANT, SNAPSHOT_VERSION};
use crate::models::entity::Entity;
use crate::models::errors::{GameError, GameResult};
use crate::models::position::{QuadrantPosition, SectorPosition};

use super::Galaxy;

/// One placed entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub kind: EntityKind,
    pub quadrant: QuadrantPosition,
    pub sector: SectorPosition,
    pub energy: i32,
    pub status: i32,
    pub scanned: i32,
}

impl From<&Entity> for EntityRecord {
    fn from(entity: &Entity) -> Self {
        EntityRecord {
            kind: entity.kind(),
            quadrant: entity.quadrant(),
            sector: entity.sector(),
            energy: entity.energy,
            status: entity.status,
            scanned: entity.scanned,
        }
    }
}

impl EntityRecord {
    fn to_entity(&self) -> Entity {
        let mut entity = Entity::new(self.kind, self.quadrant, self.sector);
        entity.energy = self.energy;
        entity.status = self.status;
        entity.scanned = self.scanned;
        entity
    }
}

/// Serializable snapshot of a galaxy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalaxySnapshot {
    /// Save format version
    pub version: u32,
    /// Every non-empty entity, in grid order
    pub entities: Vec<EntityRecord>,
    /// Position of the ship within `entities`
    pub ship_index: usize,
    /// Moves made by the session that wrote the save; 0 for a bare galaxy
    #[serde(default)]
    pub turns: u32,
}

impl GalaxySnapshot {
    pub fn to_json(&self) -> GameResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> GameResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Galaxy {
    pub fn snapshot(&self) -> GalaxySnapshot {
        let entities: Vec<EntityRecord> = self
            .entities()
            .filter(|e| !e.is_empty())
            .map(EntityRecord::from)
            .collect();
        let ship_index = entities
            .iter()
            .position(|r| r.kind == EntityKind::Ship)
            .unwrap_or_default();
        GalaxySnapshot {
            version: SNAPSHOT_VERSION,
            entities,
            ship_index,
            turns: 0,
        }
    }

    /// Rebuild a galaxy from a snapshot, checking it is self-consistent first.
    pub fn from_snapshot(snapshot: &GalaxySnapshot) -> GameResult<Self> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(GameError::SnapshotVersion {
                expected: SNAPSHOT_VERSION,
                found: snapshot.version,
            });
        }

        let ship = snapshot.entities.get(snapshot.ship_index).ok_or_else(|| {
            GameError::Snapshot(format!(
                "ship index {} is out of range for {} entities",
                snapshot.ship_index,
                snapshot.entities.len()
            ))
        })?;
        if ship.kind != EntityKind::Ship {
            return Err(GameError::Snapshot(format!(
                "entity {} is a {}, not the ship",
                snapshot.ship_index,
                ship.kind.name()
            )));
        }

        let mut occupied = HashSet::new();
        let mut per_quadrant: HashMap<_, usize> = HashMap::new();
        for (i, record) in snapshot.entities.iter().enumerate() {
            record.quadrant.validate()?;
            record.sector.validate()?;
            match record.kind {
                EntityKind::Empty => {
                    return Err(GameError::Snapshot(format!("entity {} is empty", i)));
                }
                EntityKind::Ship if i != snapshot.ship_index => {
                    return Err(GameError::Snapshot(format!("entity {} is a second ship", i)));
                }
                _ => {}
            }
            if !occupied.insert((record.quadrant, record.sector)) {
                return Err(GameError::Snapshot(format!(
                    "entity {} shares sector {},{} of quadrant {},{}",
                    i, record.sector.x, record.sector.y, record.quadrant.x, record.quadrant.y
                )));
            }
            if record.kind != EntityKind::Ship {
                let count = per_quadrant.entry((record.quadrant, record.kind)).or_default();
                *count += 1;
                if *count > MAX_PER_QUADRANT {
                    return Err(GameError::Snapshot(format!(
                        "quadrant {},{} holds more than {} of kind {}",
                        record.quadrant.x,
                        record.quadrant.y,
                        MAX_PER_QUADRANT,
                        record.kind.name()
                    )));
                }
            }
        }

        let mut galaxy = Galaxy::with_ship(ship.quadrant, ship.sector)?;
        for record in &snapshot.entities {
            galaxy.put(record.to_entity());
        }
        Ok(galaxy)
    }

    pub fn to_json(&self) -> GameResult<String> {
        self.snapshot().to_json()
    }

    pub fn from_json(json: &str) -> GameResult<Self> {
        Self::from_snapshot(&GalaxySnapshot::from_json(json)?)
    }
}
