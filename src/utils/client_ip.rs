//! Client IP selection for geolocation.

use axum::http::HeaderMap;
use std::net::{IpAddr, SocketAddr};

/// Picks the client IP to geolocate a request by.
///
/// With `trust_forwarded` set (the service sits behind a reverse proxy), the
/// first hop of `X-Forwarded-For` wins, then `X-Real-IP`; otherwise, and when
/// neither header parses, the peer address of the connection is used.
///
/// # Examples
///
/// ```ignore
/// let ip = extract_client_ip(&headers, peer_addr, config.behind_proxy);
/// ```
pub fn extract_client_ip(headers: &HeaderMap, peer: SocketAddr, trust_forwarded: bool) -> IpAddr {
    if trust_forwarded {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .and_then(|v| v.trim().parse().ok());

        if let Some(ip) = forwarded {
            return ip;
        }

        let real_ip = headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok());

        if let Some(ip) = real_ip {
            return ip;
        }
    }

    peer.ip()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer() -> SocketAddr {
        "10.0.0.1:54321".parse().unwrap()
    }

    #[test]
    fn test_peer_address_by_default() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.7".parse().unwrap());

        let ip = extract_client_ip(&headers, peer(), false);
        assert_eq!(ip, "10.0.0.1".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_forwarded_for_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            "203.0.113.7, 70.41.3.18, 150.172.238.178".parse().unwrap(),
        );

        let ip = extract_client_ip(&headers, peer(), true);
        assert_eq!(ip, "203.0.113.7".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_real_ip_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", "198.51.100.2".parse().unwrap());

        let ip = extract_client_ip(&headers, peer(), true);
        assert_eq!(ip, "198.51.100.2".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_garbage_header_falls_back_to_peer() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "not-an-ip".parse().unwrap());

        let ip = extract_client_ip(&headers, peer(), true);
        assert_eq!(ip, "10.0.0.1".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_ipv6_forwarded() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "2001:db8::1".parse().unwrap());

        let ip = extract_client_ip(&headers, peer(), true);
        assert_eq!(ip, "2001:db8::1".parse::<IpAddr>().unwrap());
    }
}
