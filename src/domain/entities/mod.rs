//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the URL shortening service.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A code-to-URL mapping with its validity window
//! - [`Click`] - A click event on a short link
//!
//! # Design Pattern
//!
//! Creation input travels as a separate struct ([`NewShortLink`]) so stored
//! records and not-yet-stored input cannot be confused. Clicks have no
//! store-generated fields, so one struct serves both roles.

pub mod click;
pub mod short_link;

pub use click::{Click, LOCATION_UNKNOWN, REFERRER_DIRECT};
pub use short_link::{NewShortLink, ShortLink};
