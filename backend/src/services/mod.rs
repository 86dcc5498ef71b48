//! Service layer for business logic.
//!
//! These modules hold the pure rules of the result subsystem; they know
//! nothing about storage or HTTP.

pub mod grading;
pub mod query;
pub mod validation;

pub use grading::{compute as compute_grade, grade_for, GradeOutcome, InvalidInput};
pub use query::{ResultFilter, ResultPage};
pub use validation::{validate_create, validate_update, ValidationError, ValidationRules};
