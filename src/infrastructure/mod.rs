//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence, caching and the remote
//! holiday provider.
//!
//! # Modules
//!
//! - [`cache`] - In-memory holiday cache (and a no-op fallback)
//! - [`persistence`] - SQLite repository implementations
//! - [`provider`] - Nager.Date HTTP client

pub mod cache;
pub mod persistence;
pub mod provider;
