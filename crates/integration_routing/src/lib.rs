#![forbid(unsafe_code)]
//! Routing integration for Mappy
//!
//! Computes routes between two coordinates using an OSRM-compatible
//! HTTP service. The caller's [`domain::TravelMode`] is mapped onto the
//! provider's profile token with [`map_profile`] before the request is made.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::{Coordinate, RouteRequest, TravelMode};
//! use integration_routing::{OsrmRouteClient, RouteClient, RoutingConfig};
//!
//! let client = OsrmRouteClient::new(&RoutingConfig::default())?;
//! let request = RouteRequest::new(
//!     Coordinate::new(6.524, 3.379)?,
//!     Coordinate::new(6.600, 3.350)?,
//!     TravelMode::Walking,
//! );
//! let route = client.get_route(&request).await?;
//! println!("{} m in {} s", route.distance_meters, route.duration_seconds);
//! ```

mod client;
mod config;
mod error;
mod profile;

pub use client::{OsrmRouteClient, RouteClient};
pub use config::RoutingConfig;
pub use error::RoutingError;
pub use profile::{DEFAULT_PROFILE, map_profile, profile_for_name};
