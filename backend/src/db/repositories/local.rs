//! In-memory result repository.
//!
//! Records live in a `Vec` in insertion order for the lifetime of the
//! repository. Every operation takes the lock once and finishes before
//! releasing it, so a validate-grade-write sequence is never observed half
//! done. Ids come from a counter that only moves forward; an id freed by a
//! delete is never handed out again.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::{debug, info};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::api::{ExamResult, ExamType, ResultDraft, ResultFilter, ResultId, ResultPage, ResultPatch};
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult, ResultRepository};
use crate::services::grading;

const NOT_FOUND: &str = "Result not found";

#[derive(Debug)]
struct LocalData {
    results: Vec<ExamResult>,
    next_id: u64,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            next_id: 1,
        }
    }
}

impl LocalData {
    fn position(&self, id: ResultId) -> Option<usize> {
        self.results.iter().position(|r| r.id == id)
    }
}

/// In-memory implementation of [`ResultRepository`].
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the demo results shipped with the original
    /// dashboard: two students, two subjects, one midterm each.
    pub fn with_sample_data() -> Self {
        let repo = Self::new();
        for draft in sample_drafts() {
            // Sample marks are all in range, grading cannot fail.
            if let Err(e) = repo.insert(draft) {
                log::warn!("Skipping sample result: {}", e);
            }
        }
        info!("Seeded local repository with {} sample results", repo.len());
        repo
    }

    /// Number of stored results.
    pub fn len(&self) -> usize {
        self.data.read().results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&self, draft: ResultDraft) -> RepositoryResult<ExamResult> {
        let outcome = grading::compute(draft.marks_obtained, draft.max_marks).map_err(|e| {
            RepositoryError::validation_with_context(
                e.into(),
                ErrorContext::new("create_result").with_entity("result"),
            )
        })?;

        let mut data = self.data.write();
        let id = ResultId::new(data.next_id);
        data.next_id += 1;

        let now = Utc::now();
        let record = ExamResult {
            id,
            student_id: draft.student_id,
            subject_id: draft.subject_id,
            exam_type: draft.exam_type,
            marks_obtained: draft.marks_obtained,
            max_marks: draft.max_marks,
            percentage: outcome.percentage,
            grade: outcome.grade,
            exam_date: draft.exam_date,
            semester: draft.semester,
            academic_year: draft.academic_year,
            remarks: draft.remarks,
            created_at: now,
            updated_at: now,
        };
        data.results.push(record.clone());
        debug!("Stored result {} ({}%, {})", id, record.percentage, record.grade);
        Ok(record)
    }

    fn not_found(operation: &str, id: ResultId) -> RepositoryError {
        RepositoryError::not_found_with_context(
            NOT_FOUND,
            ErrorContext::new(operation)
                .with_entity("result")
                .with_entity_id(id),
        )
    }
}

/// Apply every supplied field of `patch` to `record`, leaving the rest as is.
fn merge(record: &mut ExamResult, patch: ResultPatch) {
    let ResultPatch {
        student_id,
        subject_id,
        exam_type,
        marks_obtained,
        max_marks,
        exam_date,
        semester,
        academic_year,
        remarks,
    } = patch;

    if let Some(v) = student_id {
        record.student_id = v;
    }
    if let Some(v) = subject_id {
        record.subject_id = v;
    }
    if let Some(v) = exam_type {
        record.exam_type = v;
    }
    if let Some(v) = marks_obtained {
        record.marks_obtained = v;
    }
    if let Some(v) = max_marks {
        record.max_marks = v;
    }
    if let Some(v) = exam_date {
        record.exam_date = v;
    }
    if let Some(v) = semester {
        record.semester = v;
    }
    if let Some(v) = academic_year {
        record.academic_year = v;
    }
    if let Some(v) = remarks {
        record.remarks = v;
    }
}

#[async_trait]
impl ResultRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn create_result(&self, draft: ResultDraft) -> RepositoryResult<ExamResult> {
        self.insert(draft)
    }

    async fn get_result(&self, id: ResultId) -> RepositoryResult<ExamResult> {
        let data = self.data.read();
        data.position(id)
            .map(|idx| data.results[idx].clone())
            .ok_or_else(|| Self::not_found("get_result", id))
    }

    async fn list_results(&self, filter: &ResultFilter) -> RepositoryResult<ResultPage> {
        let data = self.data.read();
        let items: Vec<ExamResult> = filter.apply(&data.results).cloned().collect();
        Ok(ResultPage::new(items))
    }

    async fn update_result(&self, id: ResultId, patch: ResultPatch) -> RepositoryResult<ExamResult> {
        let mut data = self.data.write();
        let idx = data
            .position(id)
            .ok_or_else(|| Self::not_found("update_result", id))?;

        let mut updated = data.results[idx].clone();
        merge(&mut updated, patch);

        let outcome = grading::compute(updated.marks_obtained, updated.max_marks).map_err(|e| {
            RepositoryError::validation_with_context(
                e.into(),
                ErrorContext::new("update_result")
                    .with_entity("result")
                    .with_entity_id(id),
            )
        })?;
        updated.percentage = outcome.percentage;
        updated.grade = outcome.grade;
        updated.updated_at = Utc::now();

        data.results[idx] = updated.clone();
        debug!("Updated result {} ({}%, {})", id, updated.percentage, updated.grade);
        Ok(updated)
    }

    async fn delete_result(&self, id: ResultId) -> RepositoryResult<()> {
        let mut data = self.data.write();
        let idx = data
            .position(id)
            .ok_or_else(|| Self::not_found("delete_result", id))?;
        data.results.remove(idx);
        debug!("Deleted result {}", id);
        Ok(())
    }

    async fn count_results(&self) -> RepositoryResult<usize> {
        Ok(self.len())
    }
}

fn sample_drafts() -> Vec<ResultDraft> {
    let draft = |student: &str, subject: &str, marks: f64, day: u32| ResultDraft {
        student_id: student.to_string(),
        subject_id: subject.to_string(),
        exam_type: ExamType::Midterm,
        marks_obtained: marks,
        max_marks: 100.0,
        exam_date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap_or_default(),
        semester: 1,
        academic_year: "2024-25".to_string(),
        remarks: None,
    };

    vec![
        draft("1", "1", 85.0, 15),
        draft("1", "2", 78.0, 16),
        draft("2", "1", 92.0, 15),
    ]
}
