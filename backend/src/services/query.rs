//! Equality filtering for result listings.

use serde::{Deserialize, Serialize};

use crate::models::ExamResult;

/// Optional equality predicates, combined with AND.
///
/// Values are compared against the wire representation of each field, so an
/// `exam_type` that names no known exam type simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultFilter {
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub subject_id: Option<String>,
    #[serde(default)]
    pub exam_type: Option<String>,
}

impl ResultFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn student(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }

    pub fn subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_id = Some(subject_id.into());
        self
    }

    pub fn exam_type(mut self, exam_type: impl Into<String>) -> Self {
        self.exam_type = Some(exam_type.into());
        self
    }

    /// Drop predicates whose value is empty; `?studentId=` means "any student".
    pub fn normalized(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }
        Self {
            student_id: keep(self.student_id),
            subject_id: keep(self.subject_id),
            exam_type: keep(self.exam_type),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.student_id.is_none() && self.subject_id.is_none() && self.exam_type.is_none()
    }

    pub fn matches(&self, record: &ExamResult) -> bool {
        let student_ok = self
            .student_id
            .as_deref()
            .map_or(true, |id| record.student_id == id);
        let subject_ok = self
            .subject_id
            .as_deref()
            .map_or(true, |id| record.subject_id == id);
        let exam_ok = self
            .exam_type
            .as_deref()
            .map_or(true, |t| record.exam_type.as_str() == t);

        student_ok && subject_ok && exam_ok
    }

    /// Lazily filter `records`, preserving their order.
    pub fn apply<'a, I>(&'a self, records: I) -> impl Iterator<Item = &'a ExamResult> + 'a
    where
        I: IntoIterator<Item = &'a ExamResult>,
        I::IntoIter: 'a,
    {
        records.into_iter().filter(move |r| self.matches(r))
    }
}

/// One page of a listing: the matching records and how many there are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    pub items: Vec<ExamResult>,
    pub total: usize,
}

impl ResultPage {
    pub fn new(items: Vec<ExamResult>) -> Self {
        let total = items.len();
        Self { items, total }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
