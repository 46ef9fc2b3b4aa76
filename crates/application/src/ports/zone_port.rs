//! Zone resolver port
//!
//! Interface onto the coordinate→timezone dataset and the zone→offset
//! table. Both lookups may miss; the caller falls back to offset 0 and
//! the fixed fallback zone.

#[cfg(test)]
use mockall::automock;

/// Port for timezone resolution
#[cfg_attr(test, automock)]
pub trait ZoneResolverPort: Send + Sync {
    /// IANA-style zone identifier for a coordinate, if known
    fn zone_name(&self, latitude: f64, longitude: f64) -> Option<String>;

    /// Current UTC offset of a zone in hours, possibly fractional
    /// (e.g. 5.75 for Asia/Kathmandu)
    fn utc_offset_hours(&self, zone: &str) -> Option<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ZoneResolverPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ZoneResolverPort>();
    }
}
