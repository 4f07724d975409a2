//! Command-line entry support: argument parsing and log setup.

pub mod args;
pub mod logger;
