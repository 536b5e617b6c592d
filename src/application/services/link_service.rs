//! Link creation service.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use chrono::{DateTime, Duration, Utc};
use metrics::counter;
use url::Url;

/// Collision retry budget for generated codes.
const MAX_GENERATE_ATTEMPTS: usize = 10;

/// Service for creating shortened links.
///
/// Validates input, picks or generates a short code, and persists the new
/// link through the repository. Uniqueness is delegated to the store's
/// conditional insert, so two concurrent requests for the same code cannot
/// both succeed even though this service never takes a lock.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    base_url: String,
    default_validity_minutes: i64,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix used when formatting short URLs;
    /// `default_validity_minutes` applies when a request carries no validity.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        base_url: String,
        default_validity_minutes: i64,
    ) -> Self {
        Self {
            repository,
            base_url,
            default_validity_minutes,
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `url` - The original URL to shorten; stored verbatim
    /// - `validity_minutes` - Optional lifetime in minutes (default 30)
    /// - `custom_code` - Optional custom short code (validated if provided)
    ///
    /// # Code Selection
    ///
    /// - If `custom_code` is provided, validates it and inserts; an occupied
    ///   code is a conflict, expired or not
    /// - Otherwise, generates a random 7-character code and retries on
    ///   collision up to 10 times before failing
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - URL is absent, empty, or not a valid http/https URL
    /// - Validity is zero or negative
    /// - Custom code is invalid
    ///
    /// Returns [`AppError::Conflict`] if the custom code already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_short_link(
        &self,
        url: Option<String>,
        validity_minutes: Option<i64>,
        custom_code: Option<String>,
    ) -> Result<ShortLink, AppError> {
        let original_url = url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| AppError::bad_request("Original URL is required."))?;

        let parsed =
            Url::parse(&original_url).map_err(|_| AppError::bad_request("Invalid URL format"))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(AppError::bad_request("Invalid URL format"));
        }

        let validity = validity_minutes.unwrap_or(self.default_validity_minutes);
        if validity < 1 {
            return Err(AppError::bad_request(
                "Validity must be a positive number of minutes.",
            ));
        }

        // Both timestamps derive from one observed now, so the stored window
        // is exactly the requested validity.
        let created_at = Utc::now();
        let expires_at = Duration::try_minutes(validity)
            .and_then(|lifetime| created_at.checked_add_signed(lifetime))
            .ok_or_else(|| AppError::bad_request("Validity is too large."))?;

        let link = match custom_code {
            Some(code) => {
                validate_custom_code(&code)?;

                self.repository
                    .insert(NewShortLink {
                        short_code: code,
                        original_url,
                        created_at,
                        expires_at,
                    })
                    .await?
            }
            None => {
                self.insert_with_generated_code(original_url, created_at, expires_at)
                    .await?
            }
        };

        counter!("links_created_total").increment(1);
        Ok(link)
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Inserts under a freshly generated code, retrying on collision.
    ///
    /// The conditional insert is the uniqueness check, so a collision only
    /// costs one round trip and another draw from the generator.
    async fn insert_with_generated_code(
        &self,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<ShortLink, AppError> {
        for _ in 0..MAX_GENERATE_ATTEMPTS {
            let new_link = NewShortLink {
                short_code: generate_code(),
                original_url: original_url.clone(),
                created_at,
                expires_at,
            };

            match self.repository.insert(new_link).await {
                Err(AppError::Conflict(_)) => continue,
                other => return other,
            }
        }

        Err(AppError::internal("Failed to generate a unique shortcode"))
    }
}
