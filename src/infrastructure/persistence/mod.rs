//! Repository implementations.
//!
//! Concrete implementations of the domain repository trait.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - PostgreSQL, the production backend
//! - [`MemoryLinkRepository`] - in-process DashMap store, backs the test
//!   suite and documents the contract's atomicity requirements

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
