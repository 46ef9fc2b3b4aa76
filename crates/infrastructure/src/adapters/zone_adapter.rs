//! Zone resolver - maps coordinates to `Etc/GMT` zones and zone names
//! to their current UTC offset.

use application::ports::ZoneResolverPort;
use chrono::{Offset, Utc};
use chrono_tz::Tz;
use tracing::debug;

/// Coordinate-to-zone resolver based on longitude bands.
///
/// Picks the `Etc/GMT` zone whose nominal offset is nearest to
/// `longitude / 15`. These zones carry no DST rules, so the mapping is
/// stable year-round. Offsets for arbitrary IANA names are answered
/// from the bundled tz database at the current instant.
#[derive(Debug, Clone, Copy, Default)]
pub struct GmtZoneResolver;

impl GmtZoneResolver {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ZoneResolverPort for GmtZoneResolver {
    fn zone_name(&self, _latitude: f64, longitude: f64) -> Option<String> {
        if !(-180.0..=180.0).contains(&longitude) {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let band = (longitude / 15.0).round() as i32;
        // Etc/GMT zone names carry the POSIX sign convention, which is
        // inverted relative to the UTC offset: Etc/GMT-5 is UTC+5.
        let name = match band {
            0 => "Etc/GMT".to_string(),
            b if b > 0 => format!("Etc/GMT-{b}"),
            b => format!("Etc/GMT+{}", -b),
        };
        debug!(longitude, zone = %name, "Resolved coordinate to zone");
        Some(name)
    }

    fn utc_offset_hours(&self, zone: &str) -> Option<f64> {
        let tz: Tz = zone.parse().ok()?;
        let seconds = Utc::now().with_timezone(&tz).offset().fix().local_minus_utc();
        Some(f64::from(seconds) / 3600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_longitude_bands_to_etc_gmt_names() {
        let resolver = GmtZoneResolver::new();
        assert_eq!(resolver.zone_name(0.0, 0.0).as_deref(), Some("Etc/GMT"));
        // 75E is UTC+5, spelled Etc/GMT-5 in POSIX convention.
        assert_eq!(resolver.zone_name(20.0, 75.0).as_deref(), Some("Etc/GMT-5"));
        assert_eq!(
            resolver.zone_name(40.7, -74.0).as_deref(),
            Some("Etc/GMT+5")
        );
        assert_eq!(
            resolver.zone_name(-33.9, 151.2).as_deref(),
            Some("Etc/GMT-10")
        );
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        let resolver = GmtZoneResolver::new();
        assert!(resolver.zone_name(0.0, 500.0).is_none());
    }

    #[test]
    fn offsets_for_fixed_zones() {
        let resolver = GmtZoneResolver::new();
        assert_eq!(resolver.utc_offset_hours("Etc/GMT"), Some(0.0));
        assert_eq!(resolver.utc_offset_hours("Etc/GMT-5"), Some(5.0));
        assert_eq!(resolver.utc_offset_hours("Etc/GMT+9"), Some(-9.0));
    }

    #[test]
    fn unknown_zone_yields_no_offset() {
        let resolver = GmtZoneResolver::new();
        assert!(resolver.utc_offset_hours("Mars/Olympus_Mons").is_none());
    }

    #[test]
    fn named_zones_resolve_to_plausible_offsets() {
        let resolver = GmtZoneResolver::new();
        let offset = resolver.utc_offset_hours("America/New_York").unwrap();
        // EST or EDT depending on the date the test runs.
        assert!(offset == -5.0 || offset == -4.0);
        // Kathmandu keeps a fractional offset year-round.
        assert_eq!(resolver.utc_offset_hours("Asia/Kathmandu"), Some(5.75));
    }
}
