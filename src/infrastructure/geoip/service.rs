//! Geolocation service trait and location model.

use crate::domain::entities::LOCATION_UNKNOWN;
use std::fmt;
use std::net::IpAddr;

/// Geographic location information derived from an IP address.
///
/// `country` carries the ISO country code (e.g. `"US"`), not the full name,
/// so the rendered label reads like `"Mountain View, US"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoLocation {
    pub city: Option<String>,
    pub country: Option<String>,
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.city, &self.country) {
            (Some(city), Some(country)) => write!(f, "{}, {}", city, country),
            (Some(city), None) => f.write_str(city),
            (None, Some(country)) => f.write_str(country),
            (None, None) => f.write_str(LOCATION_UNKNOWN),
        }
    }
}

/// Best-effort IP geolocation.
///
/// Lookups are local reads against an in-memory database; there is no
/// network involved and no failure mode beyond "nothing found". Callers
/// record the `"Unknown"` sentinel when a lookup returns `None`.
///
/// # Implementations
///
/// - [`crate::infrastructure::geoip::MaxmindGeoIp`] - MaxMind GeoLite2 City database
/// - [`crate::infrastructure::geoip::NullGeoIp`] - no-op when no database is configured
pub trait GeoIpService: Send + Sync {
    /// Resolves an IP to a location, or `None` when nothing usable resolves.
    fn lookup(&self, ip: IpAddr) -> Option<GeoLocation>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_city_and_country() {
        let location = GeoLocation {
            city: Some("Mountain View".to_string()),
            country: Some("US".to_string()),
        };
        assert_eq!(location.to_string(), "Mountain View, US");
    }

    #[test]
    fn test_display_country_only() {
        let location = GeoLocation {
            city: None,
            country: Some("DE".to_string()),
        };
        assert_eq!(location.to_string(), "DE");
    }

    #[test]
    fn test_display_city_only() {
        let location = GeoLocation {
            city: Some("Paris".to_string()),
            country: None,
        };
        assert_eq!(location.to_string(), "Paris");
    }

    #[test]
    fn test_display_empty_location() {
        let location = GeoLocation {
            city: None,
            country: None,
        };
        assert_eq!(location.to_string(), LOCATION_UNKNOWN);
    }
}
