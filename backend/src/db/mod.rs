//! Storage module for exam results.
//!
//! This module provides abstractions for result storage via the Repository
//! pattern, allowing the storage backend to be swapped without touching the
//! HTTP layer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API)                           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Validation + logging     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! There is no global store: the binary builds one repository at start-up
//! (see [`RepositoryFactory`]) and hands it to the HTTP state.

pub mod factory;
pub mod repositories;
pub mod repository;
pub mod services;

pub use services::{
    create_result, delete_result, get_result, health_check, list_results, update_result,
};

pub use factory::RepositoryFactory;
pub use repositories::LocalRepository;
pub use repository::{ErrorContext, RepositoryError, RepositoryResult, ResultRepository};
