//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A farm location as stored on the user's profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

impl Location {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
        }
    }

    /// Provider query string: `city` or `city,country`
    pub fn query(&self) -> String {
        let city = self.city.trim();
        let country = self.country.trim();
        if country.is_empty() {
            city.to_string()
        } else {
            format!("{},{}", city, country)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_query_without_country() {
        assert_eq!(Location::new("Nairobi", "").query(), "Nairobi");
    }

    #[test]
    fn test_location_query_with_country() {
        assert_eq!(Location::new(" Fresno ", "US").query(), "Fresno,US");
    }
}
