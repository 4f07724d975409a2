//! User interface and presentation
//!
//! Presenters turn scan views and move results into terminal text, keeping
//! formatting out of the galaxy model.

pub mod presenters;
