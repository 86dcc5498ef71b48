//! # Gradebook Backend
//!
//! Exam result tracking service: validates result records, derives the
//! percentage and letter grade from the marks, and keeps the records in an
//! in-memory store exposed over a JSON REST API.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier and record types shared across layers
//! - [`models`]: The exam result record and its enumerations
//! - [`services`]: Grading, validation and filtering rules
//! - [`db`]: Repository pattern and the in-memory result store
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
