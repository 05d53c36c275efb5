//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod location;
mod route;
mod travel_mode;

pub use coordinate::{Coordinate, InvalidCoordinates};
pub use location::Location;
pub use route::{Route, RouteRequest};
pub use travel_mode::TravelMode;
