//! Stable application-wide constants.
//!
//! Values here are structural invariants, algorithm coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! Knobs that are worth tuning per deployment live in
//! [`RouteGeneratorConfig`](crate::config::RouteGeneratorConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3001";

// --- Geodesy ---

/// Mean Earth radius used by the haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// --- Route generation defaults (overridable via ROUTE_* env vars) ---

/// Upper bound on places in a generated route. Matches are truncated in
/// catalog order before optimization.
pub const DEFAULT_MAX_ROUTE_PLACES: usize = 8;
/// Dwell time spent at every stop of a route.
pub const DEFAULT_SIGHTSEEING_MINUTES_PER_PLACE: f64 = 20.0;
/// Walking speed for routes built with the `active` format tag.
pub const DEFAULT_WALKING_SPEED_ACTIVE_KMH: f64 = 5.0;
/// Walking speed for routes built with the `leisurely` format tag.
pub const DEFAULT_WALKING_SPEED_LEISURELY_KMH: f64 = 3.0;
/// Walking speed when no (or another) format tag is selected.
pub const DEFAULT_WALKING_SPEED_KMH: f64 = 4.0;

// --- Format tag identifiers that change the walking speed ---

pub const FORMAT_TAG_ACTIVE: &str = "active";
pub const FORMAT_TAG_LEISURELY: &str = "leisurely";

// --- Difficulty bands ---
// Both thresholds belong to the medium band: exactly 2 km and exactly 5 km
// are classified as medium.

/// Routes strictly shorter than this are easy.
pub const DIFFICULTY_EASY_BELOW_KM: f64 = 2.0;
/// Routes strictly longer than this are hard.
pub const DIFFICULTY_HARD_ABOVE_KM: f64 = 5.0;
