use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the core library.
///
/// None of these are recovered locally: every variant is fatal to the single
/// run and is reported to the user by the binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("provide exactly one latitude: either north (-n) or south (-s)")]
    LatitudeSelection,

    #[error("provide exactly one longitude: either east (-e) or west (-w)")]
    LongitudeSelection,

    #[error("latitude {0} is outside the valid range -90..=90")]
    LatitudeRange(f64),

    #[error("longitude {0} is outside the valid range -180..=180")]
    LongitudeRange(f64),

    #[error("failed to reach the forecast service")]
    Network(#[from] reqwest::Error),

    #[error("forecast request failed with status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("could not parse the forecast response")]
    Parse(#[from] serde_json::Error),

    #[error("the forecast covers {available} days; day {days} is out of range")]
    DayOutOfRange { days: u32, available: usize },

    #[error("the forecast has no precipitation value for {days} days ahead")]
    MissingPrecipitation { days: u32 },
}
