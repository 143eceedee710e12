//! Core library for the `galosh` CLI.
//!
//! This crate defines:
//! - Query validation (signed coordinates, time zone, day offset)
//! - Abstraction over the forecast provider
//! - Daily precipitation models and the one-line outlook
//!
//! It is used by `galosh-cli`, but can also be reused by other binaries or services.

pub mod error;
pub mod model;
pub mod provider;
pub mod query;
pub mod report;
pub mod timezone;

pub use error::Error;
pub use model::{Daily, Forecast};
pub use provider::{ForecastProvider, open_meteo::OpenMeteoProvider};
pub use query::{Coordinates, Query};
pub use timezone::{SystemTimezone, TimezoneResolver};
