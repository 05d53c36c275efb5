//! Domain layer for Mappy
//!
//! Canonical value objects shared by the geocoding and routing integrations.
//! This layer performs no I/O and defines the ubiquitous language.

pub mod value_objects;

pub use value_objects::*;
