//! Web layer for the browser-based calendar UI.
//!
//! Provides the month, year and day pages. Uses Askama templates for
//! server-side rendering; the browser script only wires forms and buttons
//! to the JSON API.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
