//! Request validation for result writes.
//!
//! Bodies are checked as raw JSON so that a missing field and a field of the
//! wrong type produce different errors. Fields the store derives or owns
//! (`id`, `percentage`, `grade`, timestamps) are ignored, as is anything not
//! part of the result schema; none of them ever reach the stored record.

use chrono::{DateTime, NaiveDate};
use log::debug;
use serde_json::{Map, Value};

use super::grading::InvalidInput;
use crate::models::{ExamType, ResultDraft, ResultPatch};

/// Default `maxMarks` when a create request omits it.
pub const DEFAULT_MAX_MARKS: f64 = 100.0;

const SCHEMA_FIELDS: [&str; 9] = [
    "studentId",
    "subjectId",
    "examType",
    "marksObtained",
    "maxMarks",
    "examDate",
    "semester",
    "academicYear",
    "remarks",
];

// Derived or store-owned; silently dropped.
const IGNORED_FIELDS: [&str; 5] = ["id", "percentage", "grade", "createdAt", "updatedAt"];

/// Validation failure for a result write.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{field} must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("{field} is out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field }
            | Self::InvalidType { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }
}

impl From<InvalidInput> for ValidationError {
    fn from(err: InvalidInput) -> Self {
        ValidationError::OutOfRange {
            field: err.field,
            reason: err.reason,
        }
    }
}

/// Configurable limits applied by the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    pub semester_min: i64,
    pub semester_max: i64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            semester_min: 1,
            semester_max: 8,
        }
    }
}

/// Validate a create body into a draft ready for grading.
pub fn validate_create(body: &Value, rules: &ValidationRules) -> Result<ResultDraft, ValidationError> {
    let obj = as_object(body)?;
    log_ignored_fields(obj);

    let marks_obtained = required(obj, "marksObtained", marks)?;
    let max_marks = optional(obj, "maxMarks", max_marks)?.unwrap_or(DEFAULT_MAX_MARKS);

    Ok(ResultDraft {
        student_id: required(obj, "studentId", reference)?,
        subject_id: required(obj, "subjectId", reference)?,
        exam_type: required(obj, "examType", exam_type)?,
        marks_obtained,
        max_marks,
        exam_date: required(obj, "examDate", exam_date)?,
        semester: required(obj, "semester", |f, v| semester(f, v, rules))?,
        academic_year: required(obj, "academicYear", reference)?,
        remarks: remarks(obj)?.flatten(),
    })
}

/// Validate an update body into a patch. Only supplied fields are checked.
pub fn validate_update(body: &Value, rules: &ValidationRules) -> Result<ResultPatch, ValidationError> {
    let obj = as_object(body)?;
    log_ignored_fields(obj);

    Ok(ResultPatch {
        student_id: optional(obj, "studentId", reference)?,
        subject_id: optional(obj, "subjectId", reference)?,
        exam_type: optional(obj, "examType", exam_type)?,
        marks_obtained: optional(obj, "marksObtained", marks)?,
        max_marks: optional(obj, "maxMarks", max_marks)?,
        exam_date: optional(obj, "examDate", exam_date)?,
        semester: optional(obj, "semester", |f, v| semester(f, v, rules))?,
        academic_year: optional(obj, "academicYear", reference)?,
        remarks: remarks(obj)?,
    })
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    body.as_object().ok_or(ValidationError::InvalidType {
        field: "body",
        expected: "a JSON object",
    })
}

fn log_ignored_fields(obj: &Map<String, Value>) {
    for key in obj.keys() {
        let known = SCHEMA_FIELDS.contains(&key.as_str()) || IGNORED_FIELDS.contains(&key.as_str());
        if !known {
            debug!("Ignoring unknown result field '{}'", key);
        }
    }
}

fn required<T, F>(obj: &Map<String, Value>, field: &'static str, parse: F) -> Result<T, ValidationError>
where
    F: FnOnce(&'static str, &Value) -> Result<T, ValidationError>,
{
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field }),
        Some(value) => parse(field, value),
    }
}

fn optional<T, F>(
    obj: &Map<String, Value>,
    field: &'static str,
    parse: F,
) -> Result<Option<T>, ValidationError>
where
    F: FnOnce(&'static str, &Value) -> Result<T, ValidationError>,
{
    match obj.get(field) {
        None => Ok(None),
        // Present but null would clear a required field.
        Some(Value::Null) => Err(ValidationError::MissingField { field }),
        Some(value) => parse(field, value).map(Some),
    }
}

/// `Some(None)` when remarks is explicitly null or blank.
fn remarks(obj: &Map<String, Value>) -> Result<Option<Option<String>>, ValidationError> {
    match obj.get("remarks") {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            Ok(Some((!trimmed.is_empty()).then(|| trimmed.to_string())))
        }
        Some(_) => Err(ValidationError::InvalidType {
            field: "remarks",
            expected: "a string",
        }),
    }
}

fn reference(field: &'static str, value: &Value) -> Result<String, ValidationError> {
    let s = value.as_str().ok_or(ValidationError::InvalidType {
        field,
        expected: "a string",
    })?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

fn exam_type(field: &'static str, value: &Value) -> Result<ExamType, ValidationError> {
    const EXPECTED: &str = "one of midterm, final, quiz, assignment, project";
    value
        .as_str()
        .and_then(|s| s.trim().parse().ok())
        .ok_or(ValidationError::InvalidType {
            field,
            expected: EXPECTED,
        })
}

fn number(field: &'static str, value: &Value) -> Result<f64, ValidationError> {
    value.as_f64().ok_or(ValidationError::InvalidType {
        field,
        expected: "a number",
    })
}

fn marks(field: &'static str, value: &Value) -> Result<f64, ValidationError> {
    let n = number(field, value)?;
    if n < 0.0 {
        return Err(ValidationError::OutOfRange {
            field,
            reason: format!("must be at least 0, got {}", n),
        });
    }
    Ok(n)
}

fn max_marks(field: &'static str, value: &Value) -> Result<f64, ValidationError> {
    let n = number(field, value)?;
    if n <= 0.0 {
        return Err(ValidationError::OutOfRange {
            field,
            reason: format!("must be greater than 0, got {}", n),
        });
    }
    Ok(n)
}

fn exam_date(field: &'static str, value: &Value) -> Result<NaiveDate, ValidationError> {
    let invalid = ValidationError::InvalidType {
        field,
        expected: "a date (YYYY-MM-DD or RFC 3339)",
    };
    let s = value.as_str().ok_or_else(|| invalid.clone())?.trim();
    if s.is_empty() {
        return Err(ValidationError::MissingField { field });
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        .ok_or(invalid)
}

fn semester(field: &'static str, value: &Value, rules: &ValidationRules) -> Result<i64, ValidationError> {
    let n = integer(field, value)?;
    if n < rules.semester_min || n > rules.semester_max {
        return Err(ValidationError::OutOfRange {
            field,
            reason: format!(
                "must be between {} and {}, got {}",
                rules.semester_min, rules.semester_max, n
            ),
        });
    }
    Ok(n)
}

fn integer(field: &'static str, value: &Value) -> Result<i64, ValidationError> {
    let invalid = ValidationError::InvalidType {
        field,
        expected: "an integer",
    };
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    // Accept 2.0 but not 2.5.
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        _ => Err(invalid),
    }
}
