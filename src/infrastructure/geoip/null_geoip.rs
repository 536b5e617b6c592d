//! No-op geolocation used when no database is configured.

use super::service::{GeoIpService, GeoLocation};
use std::net::IpAddr;

/// A [`GeoIpService`] that never resolves anything.
///
/// Used when `GEOIP_DB_PATH` is unset, so click recording still works and
/// every location falls back to the `"Unknown"` sentinel.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullGeoIp;

impl NullGeoIp {
    pub fn new() -> Self {
        Self
    }
}

impl GeoIpService for NullGeoIp {
    fn lookup(&self, _ip: IpAddr) -> Option<GeoLocation> {
        None
    }
}
