//! Game services
//!
//! Operations the command loop runs against a session: navigation, sensor
//! scans, and the loop itself.

pub mod game;
pub mod navigation;
pub mod scan;
