//! Repository trait definitions for result storage.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`results`]: CRUD and filtered listing of exam results
//!
//! Handlers and services depend on the [`ResultRepository`] trait object, so
//! the in-memory implementation can be swapped without touching them.

pub mod error;
pub mod results;

// Re-export error types
pub use error::{ErrorContext, RepositoryError, RepositoryResult};

pub use results::ResultRepository;
