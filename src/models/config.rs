//! Galaxy population settings.
//!
//! Defaults reproduce the standard galaxy: 256 stars, 30 hostiles and
//! 3 resupply stations, at most 9 of any kind per quadrant.

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_HOSTILES, DEFAULT_MAX_PLACEMENT_ATTEMPTS, DEFAULT_STARS, DEFAULT_STATIONS,
    EntityKind, GALAXY_SIZE, MAX_PER_QUADRANT, TOTAL_SECTORS,
};
use super::errors::{GameError, GameResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    pub stars: usize,
    pub hostiles: usize,
    pub stations: usize,
    /// Placement refuses a quadrant once it holds this many of a kind.
    pub per_quadrant_cap: usize,
    /// Upper bound on rejection-sampling draws for a single placement.
    pub max_placement_attempts: usize,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        GalaxyConfig {
            stars: DEFAULT_STARS,
            hostiles: DEFAULT_HOSTILES,
            stations: DEFAULT_STATIONS,
            per_quadrant_cap: MAX_PER_QUADRANT,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GalaxyConfig {
    /// Number of entities of `kind` to scatter at generation.
    pub fn population(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Star => self.stars,
            EntityKind::Hostile => self.hostiles,
            EntityKind::ResupplyStation => self.stations,
            EntityKind::Ship => 1,
            EntityKind::Empty => 0,
        }
    }

    /// Reject settings that could never be satisfied or that would break
    /// single-digit quadrant summaries.
    pub fn validate(&self) -> GameResult<()> {
        if self.per_quadrant_cap == 0 || self.per_quadrant_cap > MAX_PER_QUADRANT {
            return Err(GameError::InvalidConfig(format!(
                "per_quadrant_cap must be between 1 and {}, got {}",
                MAX_PER_QUADRANT, self.per_quadrant_cap
            )));
        }
        if self.max_placement_attempts == 0 {
            return Err(GameError::InvalidConfig(
                "max_placement_attempts must be positive".to_string(),
            ));
        }

        let capacity = GALAXY_SIZE * GALAXY_SIZE * self.per_quadrant_cap;
        for kind in EntityKind::POPULATED {
            let wanted = self.population(kind);
            if wanted > capacity {
                return Err(GameError::InvalidConfig(format!(
                    "{} {}s exceed the per-quadrant capacity of {}",
                    wanted,
                    kind.name().to_lowercase(),
                    capacity
                )));
            }
        }

        let total = 1 + self.stars + self.hostiles + self.stations;
        if total > TOTAL_SECTORS {
            return Err(GameError::InvalidConfig(format!(
                "{} entities do not fit in {} sectors",
                total, TOTAL_SECTORS
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> GameResult<Self> {
        let config: GalaxyConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GalaxyConfig::default();
        assert_eq!(config.stars, 256);
        assert_eq!(config.hostiles, 30);
        assert_eq!(config.stations, 3);
        assert_eq!(config.per_quadrant_cap, 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn cap_above_nine_is_rejected() {
        let config = GalaxyConfig {
            per_quadrant_cap: 10,
            ..GalaxyConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn population_beyond_capacity_is_rejected() {
        let config = GalaxyConfig {
            hostiles: 64 * 2 + 1,
            per_quadrant_cap: 2,
            ..GalaxyConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_attempts_is_rejected() {
        let config = GalaxyConfig {
            max_placement_attempts: 0,
            ..GalaxyConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = GalaxyConfig::from_json(r#"{ "hostiles": 12 }"#).unwrap();
        assert_eq!(config.hostiles, 12);
        assert_eq!(config.stars, 256);
        assert_eq!(config.stations, 3);
    }

    #[test]
    fn invalid_json_config_is_rejected() {
        assert!(matches!(
            GalaxyConfig::from_json(r#"{ "per_quadrant_cap": 0 }"#),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(matches!(
            GalaxyConfig::from_json("not json"),
            Err(GameError::Serialization(_))
        ));
    }
}
