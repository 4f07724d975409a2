//! Star map engine
//!
//! The galaxy model behind a turn-based space exploration game.
//!
//! # Overview
//!
//! A galaxy is an 8x8 grid of quadrants, each an 8x8 grid of sectors. It
//! holds one player ship plus randomly scattered stars, hostiles and
//! resupply stations. This library places those entities, moves the ship,
//! and answers the scan queries a front end needs to draw the map.
//!
//! # Modules
//!
//! - [`models`] - Galaxy, quadrants, entities, config, snapshots
//! - [`game_engine`] - Per-player session owning a galaxy and its RNG
//! - [`services`] - Navigation, sensor scans and the command loop
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Text presenters for scans and moves
//! - [`cli`] - Argument parsing and logging for the binary
//!
//! # Example
//!
//! ```rust
//! use starmap::{Session, QuadrantPosition, SectorPosition};
//!
//! let mut session = Session::new(42).unwrap();
//! session
//!     .move_ship(QuadrantPosition::new(3, 4), SectorPosition::new(0, 0))
//!     .unwrap();
//! assert_eq!(session.galaxy().ship().quadrant(), QuadrantPosition::new(3, 4));
//! println!("{}", session.long_range_scan().cell_text(1, 1));
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::Session;
pub use models::config::GalaxyConfig;
pub use models::constants::EntityKind;
pub use models::entity::Entity;
pub use models::errors::{GameError, GameResult};
pub use models::galaxy::{EntityRecord, Galaxy, GalaxySnapshot};
pub use models::position::{QuadrantPosition, SectorPosition};
pub use models::quadrant::{Quadrant, QuadrantSummary};
pub use services::scan::{LongRangeScan, ShortRangeScan};
