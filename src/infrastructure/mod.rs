//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence, caching, and geolocation.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`geoip`] - IP geolocation (MaxMind and no-op implementations)
//! - [`persistence`] - Link store implementations (PostgreSQL and in-memory)

pub mod cache;
pub mod geoip;
pub mod persistence;
