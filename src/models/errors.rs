use std::fmt;

use super::constants::EntityKind;
use super::position::{QuadrantPosition, SectorPosition};

/// Game-specific error types
#[derive(Debug)]
pub enum GameError {
    /// A quadrant or sector coordinate fell outside 0-7
    CoordinateOutOfRange { axis: &'static str, value: i32 },
    /// Placement target already holds an entity
    SectorOccupied { quadrant: QuadrantPosition, sector: SectorPosition },
    /// Quadrant already holds the most entities of one kind it may hold
    QuadrantFull { quadrant: QuadrantPosition, kind: EntityKind },
    /// Rejection sampling gave up without finding a free sector
    NoFreeSector { attempts: usize },
    /// Galaxy configuration cannot produce a valid galaxy
    InvalidConfig(String),
    /// A snapshot is structurally inconsistent
    Snapshot(String),
    /// A snapshot was written by an incompatible format version
    SnapshotVersion { expected: u32, found: u32 },
    /// JSON encoding or decoding failed
    Serialization(serde_json::Error),
    /// Failed to parse user input
    ParseError(String),
    /// Invalid input provided by user
    InvalidInput(String),
    /// I/O error occurred
    IoError(std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::CoordinateOutOfRange { axis, value } => {
                write!(f, "Coordinate out of range: {} = {} (expected 0-7)", axis, value)
            }
            GameError::SectorOccupied { quadrant, sector } => write!(
                f,
                "Sector {},{} of quadrant {},{} is already occupied",
                sector.x, sector.y, quadrant.x, quadrant.y
            ),
            GameError::QuadrantFull { quadrant, kind } => write!(
                f,
                "Quadrant {},{} cannot hold another {}",
                quadrant.x,
                quadrant.y,
                kind.name()
            ),
            GameError::NoFreeSector { attempts } => {
                write!(f, "No free sector available after {} attempts", attempts)
            }
            GameError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            GameError::Snapshot(msg) => write!(f, "Invalid snapshot: {}", msg),
            GameError::SnapshotVersion { expected, found } => {
                write!(
                    f,
                    "Snapshot version mismatch: expected {}, found {}",
                    expected, found
                )
            }
            GameError::Serialization(err) => write!(f, "Serialization error: {}", err),
            GameError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            GameError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            GameError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Serialization(err) => Some(err),
            GameError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::IoError(err)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Serialization(err)
    }
}

impl From<std::num::ParseIntError> for GameError {
    fn from(err: std::num::ParseIntError) -> Self {
        GameError::ParseError(err.to_string())
    }
}
