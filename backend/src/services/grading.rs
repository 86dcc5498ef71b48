//! Percentage and letter-grade derivation.
//!
//! This is the only place grades are computed; both the create and the update
//! paths of the store call [`compute`].

use crate::models::Grade;

/// Inclusive lower bounds, checked top-down. The first band whose threshold
/// the percentage reaches wins; anything below the last band is an F.
const GRADE_BANDS: [(f64, Grade); 7] = [
    (90.0, Grade::APlus),
    (80.0, Grade::A),
    (70.0, Grade::BPlus),
    (60.0, Grade::B),
    (50.0, Grade::CPlus),
    (40.0, Grade::C),
    (30.0, Grade::D),
];

/// Marks cannot be graded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid input for {field}: {reason}")]
pub struct InvalidInput {
    pub field: &'static str,
    pub reason: String,
}

/// Derived fields of a result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeOutcome {
    pub percentage: f64,
    pub grade: Grade,
}

/// Map a percentage onto its grade band.
pub fn grade_for(percentage: f64) -> Grade {
    GRADE_BANDS
        .iter()
        .find(|(threshold, _)| percentage >= *threshold)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::F)
}

/// Compute `100 * marks_obtained / max_marks` and its grade.
pub fn compute(marks_obtained: f64, max_marks: f64) -> Result<GradeOutcome, InvalidInput> {
    if !max_marks.is_finite() || max_marks <= 0.0 {
        return Err(InvalidInput {
            field: "maxMarks",
            reason: format!("must be a finite number greater than 0, got {}", max_marks),
        });
    }
    if !marks_obtained.is_finite() || marks_obtained < 0.0 {
        return Err(InvalidInput {
            field: "marksObtained",
            reason: format!("must be a finite number of at least 0, got {}", marks_obtained),
        });
    }

    let percentage = 100.0 * marks_obtained / max_marks;
    if !percentage.is_finite() {
        return Err(InvalidInput {
            field: "marksObtained",
            reason: format!(
                "{} out of {} does not give a finite percentage",
                marks_obtained, max_marks
            ),
        });
    }
    Ok(GradeOutcome {
        percentage,
        grade: grade_for(percentage),
    })
}
