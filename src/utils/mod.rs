//! Utility functions for code generation and request handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`client_ip`] - Client IP selection for geolocation

pub mod client_ip;
pub mod code_generator;
