//! Result repository trait for CRUD operations.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{ExamResult, ResultDraft, ResultFilter, ResultId, ResultPage, ResultPatch};

/// Repository trait for exam result storage.
///
/// Implementations own id assignment and the derived `percentage`/`grade`
/// fields: both are computed inside `create_result` and `update_result` and
/// never accepted from the caller.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// Check if the store is available.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Grade and append a new result.
    ///
    /// # Returns
    /// * `Ok(ExamResult)` - The stored record with its assigned id
    /// * `Err(RepositoryError)` - If the marks cannot be graded
    async fn create_result(&self, draft: ResultDraft) -> RepositoryResult<ExamResult>;

    /// Retrieve a result by id.
    ///
    /// # Returns
    /// * `Ok(ExamResult)` - The stored record
    /// * `Err(RepositoryError::NotFound)` - If the id is unknown
    async fn get_result(&self, id: ResultId) -> RepositoryResult<ExamResult>;

    /// List results matching `filter`, in insertion order.
    ///
    /// An empty page is a valid answer; this only fails on internal errors.
    async fn list_results(&self, filter: &ResultFilter) -> RepositoryResult<ResultPage>;

    /// Merge `patch` over an existing result and regrade it.
    ///
    /// # Returns
    /// * `Ok(ExamResult)` - The replaced record
    /// * `Err(RepositoryError::NotFound)` - If the id is unknown
    async fn update_result(&self, id: ResultId, patch: ResultPatch) -> RepositoryResult<ExamResult>;

    /// Remove a result.
    ///
    /// # Returns
    /// * `Ok(())` - The record was removed
    /// * `Err(RepositoryError::NotFound)` - If the id is unknown
    async fn delete_result(&self, id: ResultId) -> RepositoryResult<()>;

    /// Number of stored results.
    async fn count_results(&self) -> RepositoryResult<usize>;
}
