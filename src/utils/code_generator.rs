//! Short code generation and validation utilities.
//!
//! Provides random code generation and validation for custom user-provided
//! codes. Uniqueness is not this module's job: the generator only supplies
//! enough entropy that collisions are rare, and the store's conditional
//! insert catches the rest.

use crate::error::AppError;
use rand::distr::{Alphanumeric, SampleString};

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 7;

/// Bounds for user-supplied codes.
const CUSTOM_CODE_MIN: usize = 4;
const CUSTOM_CODE_MAX: usize = 32;

/// Codes that cannot be used as short links.
///
/// These collide with system routes: a link registered under one of them
/// would be shadowed by the static route and never resolve.
const RESERVED_CODES: &[&str] = &["shorturls", "health"];

/// Generates a random short code.
///
/// Seven alphanumeric characters drawn from the thread-local RNG, giving
/// 62^7 possible codes. Pure function of the random source; no side effects,
/// no failure modes.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), CODE_LENGTH)
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 4-32 characters
/// - Allowed characters: letters, digits, hyphens, underscores
/// - Cannot be a reserved system code
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < CUSTOM_CODE_MIN || code.len() > CUSTOM_CODE_MAX {
        return Err(AppError::bad_request("Shortcode must be 4-32 characters"));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Shortcode may only contain letters, digits, hyphens, and underscores",
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request("This shortcode is reserved"));
    }

    Ok(())
}
