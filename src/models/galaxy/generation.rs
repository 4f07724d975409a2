use log::{debug, info};
use rand::Rng;

use crate::models::config::GalaxyConfig;
use crate::models::constants::{EntityKind, GALAXY_SIZE, SECTOR_SIZE};
use crate::models::entity::Entity;
use crate::models::errors::{GameError, GameResult};
use crate::models::position::{QuadrantPosition, SectorPosition};

use super::Galaxy;

/// Draw a uniformly random quadrant and sector: quadrant x, quadrant y,
/// sector x, sector y, in that order.
pub(super) fn random_location<R: Rng + ?Sized>(rng: &mut R) -> (QuadrantPosition, SectorPosition) {
    let quadrant = QuadrantPosition {
        x: rng.gen_range(0..GALAXY_SIZE as i32),
        y: rng.gen_range(0..GALAXY_SIZE as i32),
    };
    let sector = SectorPosition {
        x: rng.gen_range(0..SECTOR_SIZE as i32),
        y: rng.gen_range(0..SECTOR_SIZE as i32),
    };
    (quadrant, sector)
}

/// Build a galaxy: the ship first, then stars, hostiles and resupply stations.
pub(super) fn generate<R: Rng + ?Sized>(config: &GalaxyConfig, rng: &mut R) -> GameResult<Galaxy> {
    config.validate()?;
    debug!("generating galaxy with {:?}", config);

    let (quadrant, sector) = random_location(rng);
    let mut galaxy = Galaxy::with_ship(quadrant, sector)?;

    for kind in EntityKind::POPULATED {
        for _ in 0..config.population(kind) {
            let candidate = find_placement(&galaxy, kind, config, rng)?;
            galaxy.put(candidate);
        }
    }

    info!(
        "galaxy ready: ship at quadrant {},{} sector {},{}; {} stars, {} hostiles, {} stations",
        quadrant.x,
        quadrant.y,
        sector.x,
        sector.y,
        config.stars,
        config.hostiles,
        config.stations
    );
    Ok(galaxy)
}

/// Rejection-sample a location for a new entity of `kind`. A candidate is
/// accepted when its sector is empty and its quadrant still has room under
/// the per-quadrant cap for that kind.
fn find_placement<R: Rng + ?Sized>(
    galaxy: &Galaxy,
    kind: EntityKind,
    config: &GalaxyConfig,
    rng: &mut R,
) -> GameResult<Entity> {
    for _ in 0..config.max_placement_attempts {
        let (quadrant, sector) = random_location(rng);
        let candidate = Entity::new(kind, quadrant, sector);
        if galaxy.is_sector_empty(&candidate)
            && galaxy.quadrant_at(quadrant).count(kind) < config.per_quadrant_cap
        {
            return Ok(candidate);
        }
    }
    Err(GameError::NoFreeSector {
        attempts: config.max_placement_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_location_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let (q, s) = random_location(&mut rng);
            assert!(q.in_bounds());
            assert!(s.in_bounds());
        }
    }

    #[test]
    fn tight_cap_is_honoured() {
        let config = GalaxyConfig {
            stars: 64,
            hostiles: 64,
            stations: 0,
            per_quadrant_cap: 1,
            ..GalaxyConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let galaxy = generate(&config, &mut rng).unwrap();
        for q in QuadrantPosition::all() {
            assert_eq!(galaxy.quadrant(q).unwrap().count(EntityKind::Star), 1);
            assert_eq!(galaxy.quadrant(q).unwrap().count(EntityKind::Hostile), 1);
        }
    }

    #[test]
    fn exhausted_attempts_fail_with_no_free_sector() {
        // One draw per star into 64 quadrants with room for one star each:
        // every draw must hit a fresh quadrant, which no seed realistically does.
        let config = GalaxyConfig {
            stars: 64,
            per_quadrant_cap: 1,
            max_placement_attempts: 1,
            ..GalaxyConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        assert!(matches!(
            generate(&config, &mut rng),
            Err(GameError::NoFreeSector { attempts: 1 })
        ));
    }

    #[test]
    fn invalid_config_is_rejected_before_any_sampling() {
        let config = GalaxyConfig {
            per_quadrant_cap: 0,
            ..GalaxyConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate(&config, &mut rng),
            Err(GameError::InvalidConfig(_))
        ));
    }
}
