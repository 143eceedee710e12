use anyhow::Result;
use clap::Parser;
use galosh_core::{
    Coordinates, OpenMeteoProvider, Query, SystemTimezone, TimezoneResolver,
    provider::ForecastProvider,
    report, timezone,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "galosh",
    version,
    about = "Will it rain? Daily precipitation outlook from Open-Meteo",
    override_usage = "galosh [OPTIONS] -[n|s] <LATITUDE> -[e|w] <LONGITUDE> [-z <TIME_ZONE>]"
)]
pub struct Cli {
    /// Latitude in degrees, northern hemisphere.
    #[arg(short = 'n', long, value_name = "LATITUDE", allow_negative_numbers = true)]
    pub latitude_north: Option<f64>,

    /// Latitude in degrees, southern hemisphere.
    #[arg(short = 's', long, value_name = "LATITUDE", allow_negative_numbers = true)]
    pub latitude_south: Option<f64>,

    /// Longitude in degrees, eastern hemisphere.
    #[arg(short = 'e', long, value_name = "LONGITUDE", allow_negative_numbers = true)]
    pub longitude_east: Option<f64>,

    /// Longitude in degrees, western hemisphere.
    #[arg(short = 'w', long, value_name = "LONGITUDE", allow_negative_numbers = true)]
    pub longitude_west: Option<f64>,

    /// IANA zone name, e.g. "Europe/Rome"; detected from the host when omitted.
    #[arg(short = 'z', long, value_name = "TIME_ZONE")]
    pub timezone: Option<String>,

    /// Day to forecast: 0 is today.
    #[arg(short = 'd', long, value_name = "N", default_value_t = 1)]
    pub day: u32,

    /// Echo the raw forecast response as pretty JSON instead of a sentence.
    #[arg(short = 'j', long)]
    pub json: bool,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let provider = OpenMeteoProvider::new();
        let output = self.execute(&provider, &SystemTimezone).await?;
        println!("{output}");

        Ok(())
    }

    /// Validate, fetch, and render. Split from `run` so tests can inject a
    /// canned provider and a fixed time zone.
    async fn execute(
        &self,
        provider: &dyn ForecastProvider,
        resolver: &dyn TimezoneResolver,
    ) -> Result<String> {
        let query = self.to_query(resolver)?;
        let forecast = provider.daily_forecast(&query).await?;

        let output = if self.json {
            forecast.to_pretty_json()?
        } else {
            report::daily_outlook(&forecast, self.day)?
        };

        Ok(output)
    }

    fn to_query(&self, resolver: &dyn TimezoneResolver) -> Result<Query, galosh_core::Error> {
        let coordinates = Coordinates::resolve(
            self.latitude_north,
            self.latitude_south,
            self.longitude_east,
            self.longitude_west,
        )?;

        Ok(Query {
            coordinates,
            timezone: timezone::effective_timezone(self.timezone.clone(), resolver),
            days_ahead: self.day,
        })
    }
}
