//! Domain models
//!
//! The galaxy, its quadrants and the entities placed in their sectors.
//! Models are plain data plus the placement, movement and query rules that
//! keep the grid consistent.

pub mod config;
pub mod constants;
pub mod entity;
pub mod errors;
pub mod galaxy;
pub mod position;
pub mod quadrant;
