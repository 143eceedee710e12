use crate::{error::Error, model::Forecast};

/// Render the one-line outlook for `days_ahead` days from today.
///
/// A day counts as rainy when it has any hours of measurable precipitation.
pub fn daily_outlook(forecast: &Forecast, days_ahead: u32) -> Result<String, Error> {
    let hours = forecast.precipitation_hours(days_ahead)?;
    let sky = if hours > 0.0 { "rainy" } else { "sunny" };

    let mut message = format!("It should be {sky}");
    match days_ahead {
        0 => message.push_str(" today."),
        1 => message.push_str(" tomorrow."),
        days => message.push_str(&format!(" in {days} days.")),
    }

    Ok(message)
}
