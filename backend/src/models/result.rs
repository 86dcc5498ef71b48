//! Exam result record and its enumerations.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::api::ResultId;

/// Kind of assessment a result was recorded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamType {
    Midterm,
    Final,
    Quiz,
    Assignment,
    Project,
}

impl ExamType {
    pub const ALL: [ExamType; 5] = [
        ExamType::Midterm,
        ExamType::Final,
        ExamType::Quiz,
        ExamType::Assignment,
        ExamType::Project,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::Midterm => "midterm",
            ExamType::Final => "final",
            ExamType::Quiz => "quiz",
            ExamType::Assignment => "assignment",
            ExamType::Project => "project",
        }
    }
}

impl FromStr for ExamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExamType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown exam type: {}", s))
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter grade band, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored exam result.
///
/// `percentage` and `grade` are derived from `marks_obtained` / `max_marks`
/// by the store on every write and are never taken from callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    pub id: ResultId,
    pub student_id: String,
    pub subject_id: String,
    pub exam_type: ExamType,
    pub marks_obtained: f64,
    pub max_marks: f64,
    pub percentage: f64,
    pub grade: Grade,
    pub exam_date: NaiveDate,
    pub semester: i64,
    pub academic_year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for a new result, before id assignment and grading.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultDraft {
    pub student_id: String,
    pub subject_id: String,
    pub exam_type: ExamType,
    pub marks_obtained: f64,
    pub max_marks: f64,
    pub exam_date: NaiveDate,
    pub semester: i64,
    pub academic_year: String,
    pub remarks: Option<String>,
}

/// Validated partial update. `None` leaves the stored value untouched.
///
/// `remarks` is doubly optional: `Some(None)` clears the remarks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultPatch {
    pub student_id: Option<String>,
    pub subject_id: Option<String>,
    pub exam_type: Option<ExamType>,
    pub marks_obtained: Option<f64>,
    pub max_marks: Option<f64>,
    pub exam_date: Option<NaiveDate>,
    pub semester: Option<i64>,
    pub academic_year: Option<String>,
    pub remarks: Option<Option<String>>,
}

impl ResultPatch {
    pub fn is_empty(&self) -> bool {
        *self == ResultPatch::default()
    }

    /// True when the patch touches a field the grade is derived from.
    pub fn touches_marks(&self) -> bool {
        self.marks_obtained.is_some() || self.max_marks.is_some()
    }
}
