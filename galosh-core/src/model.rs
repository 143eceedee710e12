use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;

/// A daily forecast as returned by the provider.
///
/// Keeps the raw JSON payload alongside the parsed fields so `--json` echoes
/// the response exactly as received, unknown fields included.
#[derive(Debug, Clone)]
pub struct Forecast {
    raw: Value,
    daily: Daily,
}

/// The `daily` block of a forecast response.
#[derive(Debug, Clone, Deserialize)]
pub struct Daily {
    /// Calendar dates the daily arrays are indexed by; index 0 is today.
    #[serde(default)]
    pub time: Vec<NaiveDate>,

    /// Hours with measurable precipitation per day. `None` where the
    /// provider has no value for a day.
    pub precipitation_hours: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct ForecastBody {
    daily: Daily,
}

impl Forecast {
    pub fn from_json(body: &str) -> Result<Self, Error> {
        let raw: Value = serde_json::from_str(body)?;
        let parsed = ForecastBody::deserialize(&raw)?;

        Ok(Self {
            raw,
            daily: parsed.daily,
        })
    }

    /// Number of days the forecast covers.
    pub fn days(&self) -> usize {
        self.daily.precipitation_hours.len()
    }

    /// The calendar date `days_ahead` days from today, when the provider
    /// reported one.
    pub fn date_for(&self, days_ahead: u32) -> Option<NaiveDate> {
        self.daily.time.get(days_ahead as usize).copied()
    }

    /// Precipitation hours `days_ahead` days from today.
    ///
    /// Indexing past the end of the forecast, or hitting a day the provider
    /// returned no value for, is an error rather than "no rain".
    pub fn precipitation_hours(&self, days_ahead: u32) -> Result<f64, Error> {
        match self.daily.precipitation_hours.get(days_ahead as usize) {
            Some(Some(hours)) => Ok(*hours),
            Some(None) => Err(Error::MissingPrecipitation { days: days_ahead }),
            None => Err(Error::DayOutOfRange {
                days: days_ahead,
                available: self.days(),
            }),
        }
    }

    /// The payload as received, pretty-printed.
    pub fn to_pretty_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(&self.raw)?)
    }
}
