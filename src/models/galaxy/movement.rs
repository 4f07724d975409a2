use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::errors::{GameError, GameResult};
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::models::quadrant::Quadrant;

use super::Galaxy;

impl Galaxy {
    /// Move the ship to the given quadrant and sector.
    ///
    /// If the requested sector is occupied, the ship lands on a random empty
    /// sector of the same target quadrant instead; the quadrant itself is
    /// never changed. The vacated slot is reset to an empty entity.
    ///
    /// Returns the sector the ship actually landed on. Coordinates must be
    /// in 0-7; anything else fails before the galaxy is touched.
    pub fn move_ship<R: Rng + ?Sized>(
        &mut self,
        quadrant: QuadrantPosition,
        sector: SectorPosition,
        rng: &mut R,
    ) -> GameResult<SectorPosition> {
        let quadrant = quadrant.validate()?;
        let sector = sector.validate()?;

        let target = self.quadrant_at(quadrant);
        let destination = if target.is_empty(sector) {
            sector
        } else {
            let fallback = random_empty_sector(target, rng)?;
            info!(
                "sector {},{} of quadrant {},{} is occupied, diverting to {},{}",
                sector.x, sector.y, quadrant.x, quadrant.y, fallback.x, fallback.y
            );
            fallback
        };

        let (origin_q, origin_s) = (self.ship_quadrant, self.ship_sector);
        let mut ship = *self.ship();
        self.quadrant_mut(origin_q).clear(origin_s);
        ship.relocate(quadrant, destination);
        self.quadrant_mut(quadrant).set(destination, ship);
        self.ship_quadrant = quadrant;
        self.ship_sector = destination;

        debug!(
            "ship moved to quadrant {},{} sector {},{}",
            quadrant.x, quadrant.y, destination.x, destination.y
        );
        Ok(destination)
    }
}

/// Pick uniformly among the quadrant's empty sectors.
fn random_empty_sector<R: Rng + ?Sized>(
    quadrant: &Quadrant,
    rng: &mut R,
) -> GameResult<SectorPosition> {
    let free: Vec<SectorPosition> = quadrant
        .iter()
        .filter(|e| e.is_empty())
        .map(|e| e.sector())
        .collect();
    free.choose(rng)
        .copied()
        .ok_or(GameError::NoFreeSector { attempts: 0 })
}
