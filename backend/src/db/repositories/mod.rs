//! Repository implementations module.
//!
//! This module contains the implementations of the `ResultRepository` trait:
//! - `local`: In-memory implementation, the only store the service runs on
pub mod local;

pub use local::LocalRepository;
