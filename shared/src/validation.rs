//! Validation utilities for the Farm Weather Advisory Platform

use crate::models::WeatherObservation;
use crate::types::Location;

/// Longest city or country name we pass on to the weather provider
pub const MAX_LOCATION_LEN: usize = 100;

// ============================================================================
// Location Validations
// ============================================================================

/// Validate a city name taken from the user's profile
pub fn validate_city(city: &str) -> Result<(), &'static str> {
    let city = city.trim();
    if city.is_empty() {
        return Err("Location not found in user profile. Please update your profile with location information.");
    }
    if city.chars().count() > MAX_LOCATION_LEN {
        return Err("City name is too long");
    }
    if city.chars().any(|c| c.is_control()) {
        return Err("City name contains invalid characters");
    }
    Ok(())
}

/// Validate an optional country (name or ISO 3166 code); empty is allowed
pub fn validate_country(country: &str) -> Result<(), &'static str> {
    let country = country.trim();
    if country.chars().count() > MAX_LOCATION_LEN {
        return Err("Country name is too long");
    }
    if country.chars().any(|c| c.is_control() || c == ',') {
        return Err("Country contains invalid characters");
    }
    Ok(())
}

/// Validate a location and report the offending field
pub fn validate_location(location: &Location) -> Result<(), (&'static str, &'static str)> {
    validate_city(&location.city).map_err(|e| ("city", e))?;
    validate_country(&location.country).map_err(|e| ("country", e))?;
    Ok(())
}

// ============================================================================
// Observation Validations
// ============================================================================

/// Validate relative humidity is a percentage
pub fn validate_humidity(humidity: i32) -> Result<(), &'static str> {
    if !(0..=100).contains(&humidity) {
        return Err("Humidity must be between 0 and 100%");
    }
    Ok(())
}

/// Validate a temperature is physically plausible for a farm (°C)
pub fn validate_temperature(temperature: i32) -> Result<(), &'static str> {
    if !(-90..=60).contains(&temperature) {
        return Err("Temperature must be between -90 and 60°C");
    }
    Ok(())
}

/// Validate an observation submitted directly by a client
///
/// The advisory engine itself accepts anything; this only guards the public
/// tips endpoint against obviously broken payloads.
pub fn validate_observation(observation: &WeatherObservation) -> Result<(), (&'static str, &'static str)> {
    validate_temperature(observation.temperature).map_err(|e| ("temperature", e))?;
    validate_humidity(observation.humidity).map_err(|e| ("humidity", e))?;
    Ok(())
}
