//! Local-day windowing
//!
//! Computes the [00:00, 24:00) interval of the request location's local
//! day, expressed as absolute UTC instants. The local calendar date is
//! found by shifting the requested instant by the zone's UTC offset;
//! local midnight is then reassembled through an explicit `±HH:MM`
//! offset suffix and parsed back into an instant.

use chrono::{DateTime, TimeDelta, Utc};

use crate::errors::DomainError;

/// Exact length of the window in seconds.
pub const DAY_SECONDS: i64 = 86_400;

/// One local day at a fixed UTC offset, as absolute UTC instants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalDayWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    offset_hours: f64,
}

impl LocalDayWindow {
    /// Compute the local-day window containing `instant` at the given
    /// UTC offset (possibly fractional, e.g. 5.75 for Kathmandu).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidWindow`] if the shifted instant is
    /// out of range or the reassembled midnight timestamp fails to
    /// parse; neither happens for offsets from the zone dataset.
    pub fn containing(instant: DateTime<Utc>, offset_hours: f64) -> Result<Self, DomainError> {
        #[allow(clippy::cast_possible_truncation)]
        let shift_secs = (offset_hours * 3600.0) as i64;
        let local_date = DateTime::from_timestamp(instant.timestamp() + shift_secs, 0)
            .ok_or_else(|| DomainError::InvalidWindow("shifted instant out of range".to_string()))?
            .date_naive();

        let midnight = format!("{local_date}T00:00:00{}", offset_suffix(offset_hours));
        let start = DateTime::parse_from_rfc3339(&midnight)
            .map_err(|e| DomainError::InvalidWindow(format!("{midnight}: {e}")))?
            .with_timezone(&Utc);

        Ok(Self {
            start,
            end: start + TimeDelta::seconds(DAY_SECONDS),
            offset_hours,
        })
    }

    /// Local midnight as an absolute UTC instant
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exactly 24 hours after [`Self::start`]
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// The UTC offset the window was computed for, in hours
    #[must_use]
    pub const fn offset_hours(&self) -> f64 {
        self.offset_hours
    }
}

/// Format a fractional UTC offset as a `±HH:MM` suffix.
///
/// The hour digits come from `ceil` on the negative branch and `floor`
/// on the positive branch; for every offset in the zone dataset both
/// reduce to truncation toward zero, so the branches agree in practice.
fn offset_suffix(offset_hours: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let minutes = ((offset_hours.abs() % 1.0) * 60.0).round() as u32;
    if offset_hours < 0.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let hours = offset_hours.ceil().abs() as u32;
        format!("-{hours:02}:{minutes:02}")
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let hours = offset_hours.floor() as u32;
        format!("+{hours:02}:{minutes:02}")
    }
}
