use std::fmt::Debug;

use async_trait::async_trait;

use crate::{error::Error, model::Forecast, query::Query};

pub mod open_meteo;

/// A source of daily forecasts.
///
/// There is a single concrete implementation talking to Open-Meteo; the trait
/// is the seam that lets the CLI run against a canned forecast in tests.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn daily_forecast(&self, query: &Query) -> Result<Forecast, Error>;
}
