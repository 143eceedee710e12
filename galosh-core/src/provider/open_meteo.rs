use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{error::Error, model::Forecast, query::Query};

use super::ForecastProvider;

/// Open-Meteo forecast API base URL.
const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// The daily metric requested from the API.
const DAILY_METRIC: &str = "precipitation_hours";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self::with_base_url(OPEN_METEO_API_BASE.to_string())
    }

    /// Point the provider at a different endpoint, e.g. a local mock server.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            http: Client::new(),
        }
    }
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn daily_forecast(&self, query: &Query) -> Result<Forecast, Error> {
        let url = format!("{}/forecast", self.base_url);

        debug!(
            latitude = query.coordinates.latitude,
            longitude = query.coordinates.longitude,
            timezone = %query.timezone,
            "requesting daily forecast"
        );

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", query.coordinates.latitude.to_string()),
                ("longitude", query.coordinates.longitude.to_string()),
                ("timezone", query.timezone.clone()),
                ("daily", DAILY_METRIC.to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(Error::Api {
                status,
                body: truncate_body(&body),
            });
        }

        let forecast = Forecast::from_json(&body)?;
        debug!(days = forecast.days(), first = ?forecast.date_for(0), "parsed daily forecast");

        Ok(forecast)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
