//! Infrastructure layer - configuration, logging and service wiring
//!
//! Loads [`AppConfig`] from `config.toml` and `MAPPY_*` environment
//! variables, installs the tracing subscriber and builds the shared
//! geocoding and routing services.

pub mod config;
pub mod services;
pub mod telemetry;

pub use config::{AppConfig, ENV_PREFIX, ENV_SEPARATOR};
pub use services::{Services, ServicesError};
pub use telemetry::{TelemetryConfig, TelemetryError, init_logging};
