//! Free-text search over tickets and customers.
//!
//! The `data` feature exposes the domain records and the matcher. The `cli`
//! feature adds the snapshot-backed data source, the list services and the
//! `crm-search` binary. The `test-mocks` feature exposes
//! `repository::mock::MockRepository`; the service integration tests only
//! build with it enabled (`cargo test --features test-mocks`).

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod search;

#[cfg(feature = "cli")]
pub mod dto;
#[cfg(feature = "cli")]
pub mod error_conversions;
#[cfg(feature = "cli")]
pub mod forms;
#[cfg(feature = "cli")]
pub mod models;
#[cfg(feature = "cli")]
pub mod pagination;
#[cfg(feature = "cli")]
pub mod repository;
#[cfg(feature = "cli")]
pub mod services;

/// Locale used for month names when the configuration does not name one.
pub const DEFAULT_LOCALE: &str = "es-ES";

/// Page size used when neither the caller nor the configuration sets one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;
