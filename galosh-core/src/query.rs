use crate::error::Error;

/// A geographic point with signed coordinates: north and east are positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Derive signed coordinates from the four hemisphere flags.
    ///
    /// Exactly one of `north`/`south` and exactly one of `east`/`west` must
    /// be supplied; southern and western values are negated.
    pub fn resolve(
        north: Option<f64>,
        south: Option<f64>,
        east: Option<f64>,
        west: Option<f64>,
    ) -> Result<Self, Error> {
        let latitude = match (north, south) {
            (Some(north), None) => north,
            (None, Some(south)) => -south,
            _ => return Err(Error::LatitudeSelection),
        };

        let longitude = match (east, west) {
            (Some(east), None) => east,
            (None, Some(west)) => -west,
            _ => return Err(Error::LongitudeSelection),
        };

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::LatitudeRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::LongitudeRange(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// A validated forecast query, ready to be sent to a provider.
#[derive(Debug, Clone)]
pub struct Query {
    pub coordinates: Coordinates,

    /// IANA zone name, e.g. "Europe/Rome".
    pub timezone: String,

    /// Day offset to forecast: 0 is today, 1 tomorrow.
    pub days_ahead: u32,
}
