//! Provider icon code to weather code classification
//!
//! The advisory rules key off integer weather codes in the ranges used by
//! OpenWeatherMap condition ids. The current-conditions feed only gives us an
//! icon code reliably, so we map icon families onto a representative id.

/// Code used for clear skies and for any icon we do not recognise
pub const CLEAR_SKY: i32 = 800;
pub const FEW_CLOUDS: i32 = 801;
pub const SCATTERED_CLOUDS: i32 = 802;
pub const BROKEN_CLOUDS: i32 = 803;
pub const SHOWER_RAIN: i32 = 520;
pub const RAIN: i32 = 500;
pub const THUNDERSTORM: i32 = 211;
pub const SNOW: i32 = 600;
pub const MIST: i32 = 741;

/// Translate a provider icon code (`01d`, `10n`, ...) into a weather code
pub fn weather_code_for_icon(icon: &str) -> i32 {
    match icon {
        "01d" | "01n" => CLEAR_SKY,
        "02d" | "02n" => FEW_CLOUDS,
        "03d" | "03n" => SCATTERED_CLOUDS,
        "04d" | "04n" => BROKEN_CLOUDS,
        "09d" | "09n" => SHOWER_RAIN,
        "10d" | "10n" => RAIN,
        "11d" | "11n" => THUNDERSTORM,
        "13d" | "13n" => SNOW,
        "50d" | "50n" => MIST,
        _ => CLEAR_SKY,
    }
}
