//! Forecast request parameters
//!
//! Parses the final path segment of `/forecast/{lat},{lon},{time}` into
//! a validated query. Latitude and longitude are kept as the raw
//! decimal strings from the path since they are forwarded verbatim to
//! the upstream URL; the time field is resolved to a UTC instant.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::errors::DomainError;

/// Numeric time values at or above this threshold are treated as
/// literal Unix epoch seconds rather than a calendar datetime.
const EPOCH_LITERAL_MIN: i64 = 1_600_000_000;

/// Language used when the query string carries none.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A parsed and validated forecast request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastQuery {
    latitude: String,
    longitude: String,
    start: DateTime<Utc>,
    language: String,
}

impl ForecastQuery {
    /// Parse the comma-separated path slug plus an optional language.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotEnoughArguments`] if the slug has fewer
    /// than three fields, and [`DomainError::InvalidTimeParameter`] if
    /// the time field cannot be resolved to an instant.
    pub fn from_path_slug(slug: &str, language: Option<&str>) -> Result<Self, DomainError> {
        let fields: Vec<&str> = slug.split(',').collect();
        if fields.len() < 2 {
            return Err(DomainError::NotEnoughArguments);
        }
        let time = fields.get(2).ok_or(DomainError::NotEnoughArguments)?;
        let start = parse_time(time)?;

        Ok(Self {
            latitude: fields[0].to_string(),
            longitude: fields[1].to_string(),
            start,
            language: language
                .filter(|l| !l.is_empty())
                .unwrap_or(DEFAULT_LANGUAGE)
                .to_string(),
        })
    }

    /// Latitude exactly as it appeared in the path
    #[must_use]
    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    /// Longitude exactly as it appeared in the path
    #[must_use]
    pub fn longitude(&self) -> &str {
        &self.longitude
    }

    /// The requested instant, resolved to UTC
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Response language
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Latitude as degrees, if it parses as a decimal
    #[must_use]
    pub fn latitude_degrees(&self) -> Option<f64> {
        self.latitude.trim().parse().ok()
    }

    /// Longitude as degrees, if it parses as a decimal
    #[must_use]
    pub fn longitude_degrees(&self) -> Option<f64> {
        self.longitude.trim().parse().ok()
    }
}

/// Resolve the raw time field to a UTC instant.
///
/// Integer-like values at or above [`EPOCH_LITERAL_MIN`] are epoch
/// seconds; everything else goes through the calendar formats.
fn parse_time(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    if let Ok(epoch) = raw.parse::<i64>() {
        if epoch >= EPOCH_LITERAL_MIN {
            return DateTime::from_timestamp(epoch, 0).ok_or(DomainError::InvalidTimeParameter);
        }
    }
    parse_calendar(raw).ok_or(DomainError::InvalidTimeParameter)
}

/// Parse a calendar/ISO datetime, most specific format first.
fn parse_calendar(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| Utc.from_utc_datetime(&dt));
    }
    None
}
