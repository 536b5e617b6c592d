//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation
//! - [`services::redirect_service::RedirectService`] - Redirect resolution and click recording
//! - [`services::stats_service::StatsService`] - Click statistics

pub mod services;
