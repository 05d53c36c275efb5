#![forbid(unsafe_code)]
//! Geocoding integration for Mappy
//!
//! Resolves free-text place queries to a canonical [`domain::Location`] by
//! trying several independent providers in a fixed priority order:
//!
//! 1. [Nominatim](https://nominatim.openstreetmap.org) ([`NominatimProvider`])
//! 2. [Photon](https://photon.komoot.io) ([`PhotonProvider`])
//! 3. [LocationIQ](https://locationiq.com) ([`LocationIqProvider`], only with an access token)
//!
//! # Architecture
//!
//! Every provider implements [`GeocodingProvider`] and maps its own response
//! shape into a `Location`, reporting any failure as "no result". The
//! [`GeocodeResolver`] is written once against that trait: it takes a single
//! [`RateLimiter`] slot per query, then falls back provider by provider
//! until one succeeds.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodeResolver, GeocodingConfig};
//!
//! let resolver = GeocodeResolver::from_config(&GeocodingConfig::default())?;
//! let location = resolver.resolve("Lagos, Nigeria").await?;
//! println!("{} at {}, {}", location.display_name(), location.latitude(), location.longitude());
//! ```

mod config;
mod error;
mod locationiq;
mod nominatim;
mod photon;
mod provider;
mod rate_limiter;
mod resolver;

pub use config::{
    GeocodingConfig, LocationIqConfig, MAX_RESULTS_CAP, NominatimConfig, PhotonConfig,
};
pub use error::{GeocodingError, ProviderError};
pub use locationiq::LocationIqProvider;
pub use nominatim::NominatimProvider;
pub use photon::PhotonProvider;
pub use provider::GeocodingProvider;
pub use rate_limiter::RateLimiter;
pub use resolver::GeocodeResolver;
