pub mod coordinates;
pub mod distance;
pub mod place;
pub mod route;
pub mod tag;
pub mod user;

pub use coordinates::Coordinates;
pub use distance::DistanceKm;
pub use place::{BusinessInfo, Place, PlaceCategory};
pub use route::{Difficulty, PredefinedRoute, PredefinedRouteRecord, Route};
pub use tag::{Tag, TagCategory};
pub use user::UserStats;
