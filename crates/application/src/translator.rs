//! WeatherKit to Dark Sky translation
//!
//! Pure mapping from the provider-agnostic hourly payload to the Dark
//! Sky response shape. No side effects, no I/O; translation either
//! fully succeeds or the request fails upstream of this module.

use domain::{
    Flags, ForecastResponse, HourlyBlock, HourlyPoint, NEAREST_STATION_PLACEHOLDER, icon_for,
};

use crate::ports::{HourlyForecast, ProviderHour};

/// Unit-system token the provider uses for metric; Dark Sky calls the
/// same system `si`.
const METRIC_UNITS_TOKEN: &str = "m";

/// Translate an upstream hourly payload into the Dark Sky schema.
///
/// `timezone` is the resolved zone identifier (callers pass
/// [`domain::FALLBACK_ZONE`] when unresolved) and `offset_hours` the
/// resolved numeric UTC offset.
#[must_use]
pub fn translate(payload: &HourlyForecast, timezone: &str, offset_hours: f64) -> ForecastResponse {
    ForecastResponse {
        latitude: payload.latitude,
        longitude: payload.longitude,
        timezone: timezone.to_string(),
        hourly: HourlyBlock {
            summary: "N/A".to_string(),
            icon: String::new(),
            data: payload.hours.iter().map(translate_hour).collect(),
        },
        flags: Flags {
            sources: vec![payload.attribution_url.clone()],
            nearest_station: NEAREST_STATION_PLACEHOLDER,
            units: remap_units(&payload.units),
        },
        offset: offset_hours,
    }
}

/// Map one provider hour onto a Dark Sky hourly point.
///
/// `summary` carries the raw condition code verbatim (not humanized);
/// the icon is derived from it. Ozone is constant null: the provider
/// has no ozone data but the schema requires the field.
fn translate_hour(hour: &ProviderHour) -> HourlyPoint {
    HourlyPoint {
        time: hour.forecast_start.timestamp(),
        summary: hour.condition_code.clone(),
        icon: icon_for(&hour.condition_code, hour.daylight).to_string(),
        daylight: hour.daylight,
        temperature: hour.temperature,
        humidity: hour.humidity,
        pressure: hour.pressure,
        pressure_trend: hour.pressure_trend.clone(),
        precip_intensity: hour.precipitation_intensity,
        precip_probability: hour.precipitation_chance,
        precip_type: hour.precipitation_type.clone(),
        apparent_temperature: hour.temperature_apparent,
        dew_point: hour.temperature_dew_point,
        wind_speed: hour.wind_speed,
        wind_gust: hour.wind_gust,
        wind_bearing: hour.wind_direction,
        cloud_cover: hour.cloud_cover,
        uv_index: hour.uv_index,
        visibility: hour.visibility,
        snowfall_intensity: hour.snowfall_intensity,
        ozone: None,
    }
}

fn remap_units(units: &str) -> String {
    if units == METRIC_UNITS_TOKEN {
        "si".to_string()
    } else {
        units.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use domain::FALLBACK_ZONE;

    use super::*;

    fn sample_hour() -> ProviderHour {
        ProviderHour {
            forecast_start: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            condition_code: "clear".to_string(),
            daylight: true,
            temperature: 12.5,
            temperature_apparent: 11.9,
            temperature_dew_point: 5.3,
            humidity: 0.61,
            pressure: 1013.2,
            pressure_trend: Some("steady".to_string()),
            precipitation_intensity: 0.0,
            precipitation_chance: 0.05,
            precipitation_type: Some("clear".to_string()),
            wind_speed: 10.2,
            wind_gust: Some(18.4),
            wind_direction: 250,
            cloud_cover: 0.12,
            uv_index: 2,
            visibility: 32_186.0,
            snowfall_intensity: Some(0.0),
        }
    }

    fn sample_payload() -> HourlyForecast {
        HourlyForecast {
            latitude: 40.7,
            longitude: -74.0,
            attribution_url: "https://example.com/legal-attribution".to_string(),
            units: "m".to_string(),
            hours: vec![sample_hour()],
        }
    }

    #[test]
    fn clear_daylight_hour_gets_clear_day_icon_and_verbatim_summary() {
        let response = translate(&sample_payload(), "America/New_York", -5.0);
        let point = &response.hourly.data[0];
        assert_eq!(point.icon, "clear-day");
        assert_eq!(point.summary, "clear");
    }

    #[test]
    fn hourly_fields_map_one_to_one() {
        let response = translate(&sample_payload(), "America/New_York", -5.0);
        let point = &response.hourly.data[0];
        assert_eq!(point.time, 1_700_000_000);
        assert!((point.temperature - 12.5).abs() < f64::EPSILON);
        assert!((point.humidity - 0.61).abs() < f64::EPSILON);
        assert!((point.pressure - 1013.2).abs() < f64::EPSILON);
        assert_eq!(point.pressure_trend.as_deref(), Some("steady"));
        assert!((point.precip_probability - 0.05).abs() < f64::EPSILON);
        assert_eq!(point.precip_type.as_deref(), Some("clear"));
        assert!((point.apparent_temperature - 11.9).abs() < f64::EPSILON);
        assert!((point.dew_point - 5.3).abs() < f64::EPSILON);
        assert_eq!(point.wind_gust, Some(18.4));
        assert_eq!(point.wind_bearing, 250);
        assert!((point.cloud_cover - 0.12).abs() < f64::EPSILON);
        assert_eq!(point.uv_index, 2);
        assert!((point.visibility - 32_186.0).abs() < f64::EPSILON);
        assert_eq!(point.snowfall_intensity, Some(0.0));
        assert!(point.ozone.is_none());
    }

    #[test]
    fn night_hours_get_night_icons() {
        let mut payload = sample_payload();
        payload.hours[0].daylight = false;
        payload.hours[0].condition_code = "partlyCloudy".to_string();
        let response = translate(&payload, "Etc/GMT", 0.0);
        assert_eq!(response.hourly.data[0].icon, "partly-cloudy-night");
    }

    #[test]
    fn metadata_and_flags_are_carried_over() {
        let response = translate(&sample_payload(), "America/New_York", -5.0);
        assert!((response.latitude - 40.7).abs() < f64::EPSILON);
        assert!((response.longitude + 74.0).abs() < f64::EPSILON);
        assert_eq!(response.timezone, "America/New_York");
        assert!((response.offset + 5.0).abs() < f64::EPSILON);
        assert_eq!(
            response.flags.sources,
            vec!["https://example.com/legal-attribution".to_string()]
        );
        assert_eq!(response.flags.nearest_station, 5);
    }

    #[test]
    fn hourly_block_header_is_fixed() {
        let response = translate(&sample_payload(), FALLBACK_ZONE, 0.0);
        assert_eq!(response.hourly.summary, "N/A");
        assert_eq!(response.hourly.icon, "");
    }

    #[test]
    fn metric_units_token_is_remapped_to_si() {
        let response = translate(&sample_payload(), FALLBACK_ZONE, 0.0);
        assert_eq!(response.flags.units, "si");
    }

    #[test]
    fn other_units_tokens_pass_through() {
        let mut payload = sample_payload();
        payload.units = "us".to_string();
        let response = translate(&payload, FALLBACK_ZONE, 0.0);
        assert_eq!(response.flags.units, "us");
    }

    #[test]
    fn empty_hours_translate_to_empty_data() {
        let mut payload = sample_payload();
        payload.hours.clear();
        let response = translate(&payload, FALLBACK_ZONE, 0.0);
        assert!(response.hourly.data.is_empty());
    }
}
