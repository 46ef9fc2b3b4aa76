//! Condition-code to icon mapping
//!
//! Total, table-driven mapping from the provider's enumerated condition
//! codes to Dark Sky icon identifiers. Codes are matched
//! case-insensitively; anything outside the table falls back to the
//! clear-sky pair.

/// Dark Sky icon for a condition code and daylight flag.
#[must_use]
pub fn icon_for(condition_code: &str, daylight: bool) -> &'static str {
    let (day, night) = icon_pair(condition_code);
    if daylight { day } else { night }
}

/// Day/night icon pair for a normalized condition code.
fn icon_pair(condition_code: &str) -> (&'static str, &'static str) {
    match condition_code.to_ascii_lowercase().as_str() {
        "blowingdust" | "foggy" | "haze" | "smoky" => ("fog", "fog"),
        "cloudy" => ("cloudy", "cloudy"),
        "mostlycloudy" | "partlycloudy" => ("partly-cloudy-day", "partly-cloudy-night"),
        "breezy" | "windy" | "hurricane" | "tropicalstorm" => ("wind", "wind"),
        "drizzle" | "rain" => ("rain", "rain"),
        "heavyrain" => ("thunder-rain", "thunder-rain"),
        "isolatedthunderstorms" | "scatteredthunderstorms" => {
            ("thunder-showers-day", "thunder-showers-night")
        },
        "sunshowers" | "sunflurries" => ("showers-day", "showers-night"),
        "strongstorms" | "thunderstorms" => ("thunder", "thunder"),
        "hail" => ("hail", "hail"),
        "flurries" | "wintrymix" | "freezingdrizzle" => ("rain-snow", "rain-snow"),
        "sleet" => ("sleet", "sleet"),
        "snow" | "blizzard" | "heavysnow" => ("snow", "snow"),
        "blowingsnow" => ("snow-showers-day", "snow-showers-night"),
        "freezingrain" => ("rain-snow-showers-day", "rain-snow-showers-night"),
        // "clear", "mostlyClear", "frigid" and "hot" share the fallback.
        _ => ("clear-day", "clear-night"),
    }
}
