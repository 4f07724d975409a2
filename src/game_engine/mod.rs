//! Game session
//!
//! A session owns one galaxy and the random number generator threaded
//! through every move for that game. Sessions share nothing, so serving
//! several players only means holding several sessions.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::config::GalaxyConfig;
use crate::models::errors::GameResult;
use crate::models::galaxy::{Galaxy, GalaxySnapshot};
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::services::scan::{self, LongRangeScan, ShortRangeScan};

/// One player's game: a galaxy, its RNG, and a count of completed moves.
pub struct Session {
    galaxy: Galaxy,
    rng: StdRng,
    turns: u32,
}

impl Session {
    /// Creates a session with a standard galaxy generated from `seed`
    pub fn new(seed: u64) -> GameResult<Self> {
        Self::with_config(&GalaxyConfig::default(), seed)
    }

    /// Creates a session with a custom population
    ///
    /// # Arguments
    ///
    /// * `config` - Population counts and placement limits
    /// * `seed` - Seed for both generation and later move fallbacks
    pub fn with_config(config: &GalaxyConfig, seed: u64) -> GameResult<Self> {
        info!("starting session with seed {}", seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let galaxy = Galaxy::generate(config, &mut rng)?;
        Ok(Self {
            galaxy,
            rng,
            turns: 0,
        })
    }

    /// Resumes a session from a JSON save, turn count included. The RNG is
    /// reseeded from `seed` because generator state is not part of the save
    /// format.
    pub fn restore(json: &str, seed: u64) -> GameResult<Self> {
        let snapshot = GalaxySnapshot::from_json(json)?;
        let galaxy = Galaxy::from_snapshot(&snapshot)?;
        info!("restored session at turn {} with seed {}", snapshot.turns, seed);
        Ok(Self {
            galaxy,
            rng: StdRng::seed_from_u64(seed),
            turns: snapshot.turns,
        })
    }

    /// Serializes the galaxy and turn count as a JSON snapshot
    pub fn save(&self) -> GameResult<String> {
        let mut snapshot = self.galaxy.snapshot();
        snapshot.turns = self.turns;
        snapshot.to_json()
    }

    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    /// Number of successful moves made in this session
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Moves the ship and counts the turn. Returns the sector actually
    /// reached, which differs from `sector` when that sector was occupied.
    pub fn move_ship(
        &mut self,
        quadrant: QuadrantPosition,
        sector: SectorPosition,
    ) -> GameResult<SectorPosition> {
        let landed = self.galaxy.move_ship(quadrant, sector, &mut self.rng)?;
        self.turns += 1;
        Ok(landed)
    }

    pub fn short_range_scan(&self) -> ShortRangeScan {
        scan::short_range_scan(&self.galaxy)
    }

    pub fn long_range_scan(&self) -> LongRangeScan {
        scan::long_range_scan(&self.galaxy)
    }
}
