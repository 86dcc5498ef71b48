//! High-level result service layer.
//!
//! These functions are what handlers call. They run request bodies through
//! the validation gate and hand validated drafts and patches to any
//! [`ResultRepository`] implementation, which grades and stores them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (HTTP handlers, tests)               │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! │  - Body validation (required fields, types, ranges)     │
//! │  - Error context enrichment                             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  ResultRepository trait                                 │
//! │  - Id assignment, grading, ordered storage              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼────────────────┐
//!     │ LocalRepository (in-memory)    │
//!     └────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use gradebook::db::{services, repositories::LocalRepository};
//! use gradebook::services::validation::ValidationRules;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let body = serde_json::json!({
//!         "studentId": "1", "subjectId": "1", "examType": "final",
//!         "marksObtained": 85, "examDate": "2024-06-01",
//!         "semester": 2, "academicYear": "2024-25"
//!     });
//!     let stored = services::create_result(&repo, &ValidationRules::default(), &body).await?;
//!     println!("Stored result {} with grade {}", stored.id, stored.grade);
//!     Ok(())
//! }
//! ```

use log::{info, warn};
use serde_json::Value;

use super::repository::{ErrorContext, RepositoryError, RepositoryResult, ResultRepository};
use crate::api::{ExamResult, ResultFilter, ResultId, ResultPage};
use crate::services::validation::{self, ValidationRules};

/// Check if the store is available.
pub async fn health_check<R: ResultRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Validate a create body, then grade and store it.
///
/// Any `id`, `percentage` or `grade` in the body is ignored; the stored record
/// carries the store-assigned id and the computed grade.
pub async fn create_result<R: ResultRepository + ?Sized>(
    repo: &R,
    rules: &ValidationRules,
    body: &Value,
) -> RepositoryResult<ExamResult> {
    let draft = validation::validate_create(body, rules).map_err(|e| {
        warn!("Service layer: rejected new result: {}", e);
        RepositoryError::validation_with_context(
            e,
            ErrorContext::new("create_result").with_entity("result"),
        )
    })?;

    let stored = repo.create_result(draft).await?;
    info!(
        "Service layer: created result {} for student {} in subject {} ({:.2}%, {})",
        stored.id, stored.student_id, stored.subject_id, stored.percentage, stored.grade
    );
    Ok(stored)
}

/// Retrieve a result by id.
pub async fn get_result<R: ResultRepository + ?Sized>(
    repo: &R,
    id: ResultId,
) -> RepositoryResult<ExamResult> {
    repo.get_result(id).await
}

/// List results matching `filter`. Empty filter values impose no restriction.
pub async fn list_results<R: ResultRepository + ?Sized>(
    repo: &R,
    filter: ResultFilter,
) -> RepositoryResult<ResultPage> {
    let filter = filter.normalized();
    let page = repo.list_results(&filter).await?;
    info!(
        "Service layer: listed {} results (filter: {:?})",
        page.total, filter
    );
    Ok(page)
}

/// Validate a partial body and merge it into an existing result.
///
/// Only the fields present in the body change; `percentage` and `grade` are
/// recomputed from the merged marks.
pub async fn update_result<R: ResultRepository + ?Sized>(
    repo: &R,
    rules: &ValidationRules,
    id: ResultId,
    body: &Value,
) -> RepositoryResult<ExamResult> {
    let patch = validation::validate_update(body, rules).map_err(|e| {
        warn!("Service layer: rejected update for result {}: {}", id, e);
        RepositoryError::validation_with_context(
            e,
            ErrorContext::new("update_result")
                .with_entity("result")
                .with_entity_id(id),
        )
    })?;

    let regraded = patch.touches_marks();
    let updated = repo.update_result(id, patch).await?;
    info!(
        "Service layer: updated result {} (regraded from new marks: {}, now {:.2}%, {})",
        id, regraded, updated.percentage, updated.grade
    );
    Ok(updated)
}

/// Remove a result.
pub async fn delete_result<R: ResultRepository + ?Sized>(
    repo: &R,
    id: ResultId,
) -> RepositoryResult<()> {
    repo.delete_result(id).await?;
    info!("Service layer: deleted result {}", id);
    Ok(())
}
