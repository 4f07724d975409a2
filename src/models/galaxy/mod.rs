//! Galaxy model
//!
//! Represents the game universe: 8x8 quadrants of 8x8 sectors holding the
//! ship, stars, hostiles and resupply stations.
//!
//! The sector grid is the only source of truth. Per-kind registries such as
//! [`Galaxy::stars`] are derived from it on demand, so there is no second
//! list that can drift out of step with the grid.

mod generation;
mod movement;
mod snapshot;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use super::config::GalaxyConfig;
use super::constants::{EntityKind, GALAXY_SIZE, MAX_PER_QUADRANT};
use super::entity::Entity;
use super::errors::{GameError, GameResult};
use super::position::{QuadrantPosition, SectorPosition};
use super::quadrant::{Quadrant, QuadrantSummary};

pub use snapshot::{EntityRecord, GalaxySnapshot};

/// Top-level map state for one game session.
#[derive(Clone)]
pub struct Galaxy {
    /// 64 quadrants in row-major order: index y * 8 + x. Held on the heap
    /// so a galaxy can be moved around by value on small thread stacks.
    quadrants: Vec<Quadrant>,
    ship_quadrant: QuadrantPosition,
    ship_sector: SectorPosition,
}

impl Galaxy {
    /// Create and populate a standard galaxy from a seed.
    /// The same seed always yields the same layout.
    pub fn new(seed: u64) -> GameResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(&GalaxyConfig::default(), &mut rng)
    }

    /// Create and populate a galaxy, drawing all randomness from `rng`.
    ///
    /// The ship is placed first, then stars, hostiles and resupply stations
    /// by rejection sampling: a random quadrant and sector is accepted only
    /// if the sector is empty and the quadrant holds fewer than
    /// `config.per_quadrant_cap` entities of that kind.
    pub fn generate<R: Rng + ?Sized>(config: &GalaxyConfig, rng: &mut R) -> GameResult<Self> {
        generation::generate(config, rng)
    }

    /// An otherwise empty galaxy holding only the ship.
    pub fn with_ship(quadrant: QuadrantPosition, sector: SectorPosition) -> GameResult<Self> {
        let quadrant = quadrant.validate()?;
        let sector = sector.validate()?;
        let mut galaxy = Galaxy {
            quadrants: QuadrantPosition::all().map(Quadrant::new).collect(),
            ship_quadrant: quadrant,
            ship_sector: sector,
        };
        galaxy.put(Entity::new(EntityKind::Ship, quadrant, sector));
        Ok(galaxy)
    }

    /// Place a new stationary entity on an empty sector.
    ///
    /// A quadrant never holds more than nine entities of one kind, so
    /// summaries always stay three digits.
    pub fn place(
        &mut self,
        kind: EntityKind,
        quadrant: QuadrantPosition,
        sector: SectorPosition,
    ) -> GameResult<()> {
        if matches!(kind, EntityKind::Ship | EntityKind::Empty) {
            return Err(GameError::InvalidInput(format!(
                "cannot place {}; only stars, hostiles and stations",
                kind.name()
            )));
        }
        let entity = Entity::new(kind, quadrant.validate()?, sector.validate()?);
        if !self.is_sector_empty(&entity) {
            return Err(GameError::SectorOccupied { quadrant, sector });
        }
        if self.quadrant_at(quadrant).count(kind) >= MAX_PER_QUADRANT {
            return Err(GameError::QuadrantFull { quadrant, kind });
        }
        self.put(entity);
        Ok(())
    }

    /// Write an entity into the slot named by its own coordinates.
    fn put(&mut self, entity: Entity) {
        self.quadrant_mut(entity.quadrant())
            .set(entity.sector(), entity);
    }

    fn index(pos: QuadrantPosition) -> usize {
        pos.y as usize * GALAXY_SIZE + pos.x as usize
    }

    /// Unchecked lookup for positions already known to be in bounds.
    fn quadrant_at(&self, pos: QuadrantPosition) -> &Quadrant {
        &self.quadrants[Self::index(pos)]
    }

    fn quadrant_mut(&mut self, pos: QuadrantPosition) -> &mut Quadrant {
        &mut self.quadrants[Self::index(pos)]
    }

    // ========== Accessor Methods ==========

    /// The player's ship
    pub fn ship(&self) -> &Entity {
        self.quadrant_at(self.ship_quadrant).slot(self.ship_sector)
    }

    /// The quadrant the ship is currently in
    pub fn ship_quadrant(&self) -> &Quadrant {
        self.quadrant_at(self.ship_quadrant)
    }

    /// Get a quadrant by position
    pub fn quadrant(&self, pos: QuadrantPosition) -> GameResult<&Quadrant> {
        Ok(self.quadrant_at(pos.validate()?))
    }

    /// All 64 quadrants in row-major order
    pub fn quadrants(&self) -> impl Iterator<Item = &Quadrant> {
        self.quadrants.iter()
    }

    /// Every sector slot in the galaxy, empty ones included
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.quadrants().flat_map(|q| q.iter())
    }

    /// Look up a single sector slot
    pub fn entity_at(&self, quadrant: QuadrantPosition, sector: SectorPosition) -> GameResult<&Entity> {
        Ok(self.quadrant_at(quadrant.validate()?).slot(sector.validate()?))
    }

    /// Every entity of the given kind, in grid order
    pub fn entities_of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.entities().filter(move |e| e.kind() == kind)
    }

    pub fn stars(&self) -> impl Iterator<Item = &Entity> {
        self.entities_of_kind(EntityKind::Star)
    }

    pub fn hostiles(&self) -> impl Iterator<Item = &Entity> {
        self.entities_of_kind(EntityKind::Hostile)
    }

    pub fn stations(&self) -> impl Iterator<Item = &Entity> {
        self.entities_of_kind(EntityKind::ResupplyStation)
    }

    /// Galaxy-wide count of one kind
    pub fn population(&self, kind: EntityKind) -> usize {
        self.entities_of_kind(kind).count()
    }

    // ========== End Accessor Methods ==========

    // ========== Queries ==========

    /// Count the entities of `kind` in one quadrant.
    pub fn count_of_kind_in_quadrant(
        &self,
        kind: EntityKind,
        quadrant: QuadrantPosition,
    ) -> GameResult<usize> {
        Ok(self.quadrant_at(quadrant.validate()?).count(kind))
    }

    /// Star, hostile and station counts for one quadrant; displays as "210" etc.
    pub fn quadrant_summary(&self, quadrant: QuadrantPosition) -> GameResult<QuadrantSummary> {
        Ok(self.quadrant_at(quadrant.validate()?).summary())
    }

    /// Whether the slot at the entity's own recorded coordinates is empty.
    /// The entity does not need to be in the grid; placement uses this to
    /// vet candidates. Out-of-range coordinates count as not empty.
    pub fn is_sector_empty(&self, entity: &Entity) -> bool {
        let (q, s) = (entity.quadrant(), entity.sector());
        q.in_bounds() && s.in_bounds() && self.quadrant_at(q).is_empty(s)
    }
}

// Custom Debug that doesn't dump all 4096 sectors
impl fmt::Debug for Galaxy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Galaxy")
            .field("ship_quadrant", &self.ship_quadrant)
            .field("ship_sector", &self.ship_sector)
            .field("stars", &self.population(EntityKind::Star))
            .field("hostiles", &self.population(EntityKind::Hostile))
            .field("stations", &self.population(EntityKind::ResupplyStation))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::{
        DEFAULT_HOSTILES, DEFAULT_STARS, DEFAULT_STATIONS, MAX_PER_QUADRANT, SECTOR_SIZE,
    };

    // ========== Galaxy initialization tests ==========

    #[test]
    fn every_slot_is_tagged_with_its_own_coordinates() {
        let galaxy = Galaxy::new(42).unwrap();
        assert_eq!(galaxy.entities().count(), 4096);
        for y in 0..GALAXY_SIZE {
            for x in 0..GALAXY_SIZE {
                let qpos = QuadrantPosition::new(x as i32, y as i32);
                let quadrant = galaxy.quadrant(qpos).unwrap();
                assert_eq!(quadrant.position(), qpos);
                for (sy, row) in quadrant.rows().iter().enumerate() {
                    for (sx, entity) in row.iter().enumerate() {
                        assert_eq!(entity.quadrant(), qpos);
                        assert_eq!(entity.sector(), SectorPosition::new(sx as i32, sy as i32));
                    }
                }
            }
        }
    }

    #[test]
    fn new_galaxy_has_standard_population() {
        let galaxy = Galaxy::new(0).unwrap();
        assert_eq!(galaxy.population(EntityKind::Ship), 1);
        assert_eq!(galaxy.stars().count(), DEFAULT_STARS);
        assert_eq!(galaxy.hostiles().count(), DEFAULT_HOSTILES);
        assert_eq!(galaxy.stations().count(), DEFAULT_STATIONS);
        assert_eq!(
            galaxy.population(EntityKind::Empty),
            4096 - 1 - DEFAULT_STARS - DEFAULT_HOSTILES - DEFAULT_STATIONS
        );
    }

    #[test]
    fn no_quadrant_exceeds_cap() {
        for seed in 0..10 {
            let galaxy = Galaxy::new(seed).unwrap();
            for q in QuadrantPosition::all() {
                for kind in EntityKind::POPULATED {
                    let n = galaxy.count_of_kind_in_quadrant(kind, q).unwrap();
                    assert!(
                        n <= MAX_PER_QUADRANT,
                        "seed {}: {} {:?} in quadrant {:?}",
                        seed,
                        n,
                        kind,
                        q
                    );
                }
            }
        }
    }

    #[test]
    fn ship_reference_matches_grid() {
        let galaxy = Galaxy::new(7).unwrap();
        let ship = galaxy.ship();
        assert_eq!(ship.kind(), EntityKind::Ship);
        let slot = galaxy.entity_at(ship.quadrant(), ship.sector()).unwrap();
        assert_eq!(slot, ship);
    }

    #[test]
    fn deterministic_with_same_seed() {
        let g1 = Galaxy::new(123).unwrap();
        let g2 = Galaxy::new(123).unwrap();
        assert_eq!(g1.snapshot(), g2.snapshot());
    }

    #[test]
    fn different_seeds_produce_different_galaxies() {
        let g1 = Galaxy::new(1).unwrap();
        let g2 = Galaxy::new(2).unwrap();
        assert_ne!(g1.snapshot(), g2.snapshot());
    }

    // ========== Query tests ==========

    #[test]
    fn quadrant_summary_worked_example() {
        let mut galaxy =
            Galaxy::with_ship(QuadrantPosition::new(0, 0), SectorPosition::new(7, 7)).unwrap();
        let q = QuadrantPosition::new(4, 4);
        galaxy.place(EntityKind::Star, q, SectorPosition::new(0, 0)).unwrap();
        galaxy.place(EntityKind::Star, q, SectorPosition::new(1, 1)).unwrap();
        galaxy.place(EntityKind::Hostile, q, SectorPosition::new(2, 2)).unwrap();

        assert_eq!(galaxy.quadrant_summary(q).unwrap().to_string(), "210");
    }

    #[test]
    fn ship_quadrant_summary_excludes_ship() {
        let galaxy =
            Galaxy::with_ship(QuadrantPosition::new(3, 3), SectorPosition::new(3, 3)).unwrap();
        assert_eq!(
            galaxy.quadrant_summary(QuadrantPosition::new(3, 3)).unwrap().to_string(),
            "000"
        );
    }

    #[test]
    fn count_of_kind_tracks_placement() {
        let mut galaxy =
            Galaxy::with_ship(QuadrantPosition::new(0, 0), SectorPosition::new(0, 0)).unwrap();
        let q = QuadrantPosition::new(2, 5);
        assert_eq!(galaxy.count_of_kind_in_quadrant(EntityKind::Hostile, q).unwrap(), 0);

        galaxy.place(EntityKind::Hostile, q, SectorPosition::new(6, 1)).unwrap();

        assert_eq!(galaxy.count_of_kind_in_quadrant(EntityKind::Hostile, q).unwrap(), 1);
    }

    #[test]
    fn queries_reject_out_of_range_quadrants() {
        let galaxy = Galaxy::new(5).unwrap();
        let bad = QuadrantPosition::new(0, 8);
        assert!(matches!(
            galaxy.quadrant_summary(bad),
            Err(GameError::CoordinateOutOfRange { .. })
        ));
        assert!(galaxy.count_of_kind_in_quadrant(EntityKind::Star, bad).is_err());
        assert!(galaxy
            .entity_at(QuadrantPosition::new(0, 0), SectorPosition::new(SECTOR_SIZE as i32, 0))
            .is_err());
    }

    #[test]
    fn is_sector_empty_checks_candidate_coordinates() {
        let galaxy =
            Galaxy::with_ship(QuadrantPosition::new(1, 2), SectorPosition::new(3, 4)).unwrap();
        let on_ship = Entity::new(
            EntityKind::Star,
            QuadrantPosition::new(1, 2),
            SectorPosition::new(3, 4),
        );
        let elsewhere = Entity::new(
            EntityKind::Star,
            QuadrantPosition::new(1, 2),
            SectorPosition::new(4, 4),
        );
        let outside = Entity::new(
            EntityKind::Star,
            QuadrantPosition::new(9, 2),
            SectorPosition::new(4, 4),
        );
        assert!(!galaxy.is_sector_empty(&on_ship));
        assert!(galaxy.is_sector_empty(&elsewhere));
        assert!(!galaxy.is_sector_empty(&outside));
    }

    // ========== Placement tests ==========

    #[test]
    fn place_rejects_occupied_sector() {
        let mut galaxy =
            Galaxy::with_ship(QuadrantPosition::new(1, 1), SectorPosition::new(1, 1)).unwrap();
        let err = galaxy
            .place(EntityKind::Star, QuadrantPosition::new(1, 1), SectorPosition::new(1, 1))
            .unwrap_err();
        assert!(matches!(err, GameError::SectorOccupied { .. }));
        assert_eq!(galaxy.population(EntityKind::Star), 0);
    }

    #[test]
    fn place_rejects_ship_and_empty_kinds() {
        let mut galaxy =
            Galaxy::with_ship(QuadrantPosition::new(1, 1), SectorPosition::new(1, 1)).unwrap();
        for kind in [EntityKind::Ship, EntityKind::Empty] {
            assert!(matches!(
                galaxy.place(kind, QuadrantPosition::new(2, 2), SectorPosition::new(2, 2)),
                Err(GameError::InvalidInput(_))
            ));
        }
        assert_eq!(galaxy.population(EntityKind::Ship), 1);
    }

    #[test]
    fn place_stops_at_nine_of_a_kind_per_quadrant() {
        let mut galaxy =
            Galaxy::with_ship(QuadrantPosition::new(0, 0), SectorPosition::new(0, 0)).unwrap();
        let q = QuadrantPosition::new(3, 3);
        let mut sectors = SectorPosition::all();
        for s in sectors.by_ref().take(MAX_PER_QUADRANT) {
            galaxy.place(EntityKind::Star, q, s).unwrap();
        }

        let tenth = sectors.next().unwrap();
        assert!(matches!(
            galaxy.place(EntityKind::Star, q, tenth),
            Err(GameError::QuadrantFull { kind: EntityKind::Star, .. })
        ));
        assert_eq!(galaxy.quadrant_summary(q).unwrap().to_string(), "900");

        // Other kinds still fit.
        galaxy.place(EntityKind::Hostile, q, tenth).unwrap();
        assert_eq!(galaxy.quadrant_summary(q).unwrap().to_string(), "910");
    }

    #[test]
    fn quadrant_lookup_rejects_out_of_range() {
        let galaxy =
            Galaxy::with_ship(QuadrantPosition::new(0, 0), SectorPosition::new(0, 0)).unwrap();
        assert!(matches!(
            galaxy.quadrant(QuadrantPosition::new(8, 0)),
            Err(GameError::CoordinateOutOfRange { axis: "quadrant x", value: 8 })
        ));
        assert_eq!(
            galaxy.quadrant(QuadrantPosition::new(7, 7)).unwrap().position(),
            QuadrantPosition::new(7, 7)
        );
    }

    #[test]
    fn registries_are_views_over_the_grid() {
        let mut galaxy =
            Galaxy::with_ship(QuadrantPosition::new(0, 0), SectorPosition::new(0, 0)).unwrap();
        galaxy
            .place(EntityKind::ResupplyStation, QuadrantPosition::new(7, 0), SectorPosition::new(5, 5))
            .unwrap();
        let stations: Vec<_> = galaxy.stations().collect();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].quadrant(), QuadrantPosition::new(7, 0));
        assert_eq!(stations[0].sector(), SectorPosition::new(5, 5));
    }

    #[test]
    fn debug_output_is_compact() {
        let galaxy = Galaxy::new(3).unwrap();
        let text = format!("{:?}", galaxy);
        assert!(text.contains("stars: 256"));
        assert!(text.len() < 300);
    }
}
