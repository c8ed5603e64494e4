use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite catalog location (`sqlite:path`); in-memory catalog when unset
    pub database_url: Option<String>,
    /// JSON catalog used to seed an empty catalog; bundled catalog when unset
    pub catalog_seed_path: Option<String>,
    pub route_generator: RouteGeneratorConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteGeneratorConfig {
    /// Maximum number of matching places taken into a generated route
    pub max_route_places: usize,

    /// Dwell time per stop, in minutes
    pub sightseeing_minutes_per_place: f64,

    /// Walking speed (km/h) when the `active` format tag is selected
    pub walking_speed_active_kmh: f64,

    /// Walking speed (km/h) when the `leisurely` format tag is selected
    pub walking_speed_leisurely_kmh: f64,

    /// Walking speed (km/h) for any other or no format tag
    pub walking_speed_default_kmh: f64,
}

impl Default for RouteGeneratorConfig {
    fn default() -> Self {
        Self {
            max_route_places: DEFAULT_MAX_ROUTE_PLACES,
            sightseeing_minutes_per_place: DEFAULT_SIGHTSEEING_MINUTES_PER_PLACE,
            walking_speed_active_kmh: DEFAULT_WALKING_SPEED_ACTIVE_KMH,
            walking_speed_leisurely_kmh: DEFAULT_WALKING_SPEED_LEISURELY_KMH,
            walking_speed_default_kmh: DEFAULT_WALKING_SPEED_KMH,
        }
    }
}

impl RouteGeneratorConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let config = Self {
            max_route_places: env::var("ROUTE_MAX_PLACES")
                .unwrap_or_else(|_| defaults.max_route_places.to_string())
                .parse()
                .map_err(|_| "Invalid ROUTE_MAX_PLACES")?,

            sightseeing_minutes_per_place: env::var("ROUTE_SIGHTSEEING_MINUTES_PER_PLACE")
                .unwrap_or_else(|_| defaults.sightseeing_minutes_per_place.to_string())
                .parse()
                .map_err(|_| "Invalid ROUTE_SIGHTSEEING_MINUTES_PER_PLACE")?,

            walking_speed_active_kmh: env::var("ROUTE_WALKING_SPEED_ACTIVE_KMH")
                .unwrap_or_else(|_| defaults.walking_speed_active_kmh.to_string())
                .parse()
                .map_err(|_| "Invalid ROUTE_WALKING_SPEED_ACTIVE_KMH")?,

            walking_speed_leisurely_kmh: env::var("ROUTE_WALKING_SPEED_LEISURELY_KMH")
                .unwrap_or_else(|_| defaults.walking_speed_leisurely_kmh.to_string())
                .parse()
                .map_err(|_| "Invalid ROUTE_WALKING_SPEED_LEISURELY_KMH")?,

            walking_speed_default_kmh: env::var("ROUTE_WALKING_SPEED_DEFAULT_KMH")
                .unwrap_or_else(|_| defaults.walking_speed_default_kmh.to_string())
                .parse()
                .map_err(|_| "Invalid ROUTE_WALKING_SPEED_DEFAULT_KMH")?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_route_places == 0 {
            return Err("ROUTE_MAX_PLACES must be at least 1".to_string());
        }
        if self.sightseeing_minutes_per_place.is_nan() || self.sightseeing_minutes_per_place < 0.0 {
            return Err("ROUTE_SIGHTSEEING_MINUTES_PER_PLACE must not be negative".to_string());
        }
        let speeds = [
            ("ROUTE_WALKING_SPEED_ACTIVE_KMH", self.walking_speed_active_kmh),
            ("ROUTE_WALKING_SPEED_LEISURELY_KMH", self.walking_speed_leisurely_kmh),
            ("ROUTE_WALKING_SPEED_DEFAULT_KMH", self.walking_speed_default_kmh),
        ];
        for (name, speed) in speeds {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(format!("{} must be a positive number", name));
            }
        }
        Ok(())
    }

    /// Walking speed for the given format tag id.
    pub fn walking_speed_kmh(&self, format_tag_id: Option<&str>) -> f64 {
        match format_tag_id {
            Some(FORMAT_TAG_ACTIVE) => self.walking_speed_active_kmh,
            Some(FORMAT_TAG_LEISURELY) => self.walking_speed_leisurely_kmh,
            _ => self.walking_speed_default_kmh,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            database_url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            catalog_seed_path: env::var("CATALOG_SEED_PATH").ok().filter(|s| !s.is_empty()),
            route_generator: RouteGeneratorConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
