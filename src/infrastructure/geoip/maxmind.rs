//! MaxMind GeoLite2 implementation of [`GeoIpService`].

use super::service::{GeoIpService, GeoLocation};
use maxminddb::{MaxMindDBError, Reader, geoip2};
use std::net::IpAddr;
use std::path::Path;

/// Resolves IPs against a local MaxMind City database (`.mmdb`).
///
/// The whole database is loaded into memory at startup, so lookups are
/// plain reads with no I/O.
pub struct MaxmindGeoIp {
    reader: Reader<Vec<u8>>,
}

impl MaxmindGeoIp {
    /// Loads the database file at `path`.
    pub fn open(path: &Path) -> Result<Self, MaxMindDBError> {
        let reader = Reader::open_readfile(path)?;
        Ok(Self { reader })
    }
}

impl GeoIpService for MaxmindGeoIp {
    fn lookup(&self, ip: IpAddr) -> Option<GeoLocation> {
        // Private and unrouted addresses come back as AddressNotFoundError.
        let record: geoip2::City = self.reader.lookup(ip).ok()?;

        let city = record
            .city
            .as_ref()
            .and_then(|city| city.names.as_ref())
            .and_then(|names| names.get("en"))
            .map(|name| (*name).to_string());

        let country = record
            .country
            .as_ref()
            .and_then(|country| country.iso_code)
            .map(str::to_string);

        if city.is_none() && country.is_none() {
            return None;
        }

        Some(GeoLocation { city, country })
    }
}
