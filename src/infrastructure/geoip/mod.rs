//! IP geolocation backends.
//!
//! Click events carry a coarse `"city, country"` label resolved from the
//! client IP. The [`MaxmindGeoIp`] backend reads a local GeoLite2 City
//! database; [`NullGeoIp`] stands in when none is configured.

pub mod maxmind;
pub mod null_geoip;
pub mod service;

pub use maxmind::MaxmindGeoIp;
pub use null_geoip::NullGeoIp;
pub use service::{GeoIpService, GeoLocation};
