//! Data Transfer Objects for the HTTP API.
//!
//! Every response uses the same envelope: `success` plus either `data`
//! (with `total` on listings) or `message`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::api::{ExamResult, ResultFilter};

/// Successful response carrying a payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
    /// Number of records in `data`, set on listings only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            total: None,
        }
    }
}

impl DataResponse<Vec<ExamResult>> {
    pub fn list(data: Vec<ExamResult>, total: usize) -> Self {
        Self {
            success: true,
            data,
            total: Some(total),
        }
    }
}

/// Successful response carrying only a confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Error body, always `success: false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Human-readable status line
    pub message: String,
    /// Time the check ran
    pub timestamp: DateTime<Utc>,
}
