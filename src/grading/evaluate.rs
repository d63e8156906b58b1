//! Validation of course rows and the credit-weighted GPA computation.

use crate::grading::convert::convert;
use crate::grading::types::{
    CourseEntry, EvaluateError, FieldTag, GpaResult, ParsedCourse, ValidationError,
};

/// Validates one entry. `Ok(None)` means the row was blank and is skipped.
///
/// Within a row only the first failing check is reported: credit hours,
/// then grade presence, then grade conversion.
pub fn parse_entry(entry: &CourseEntry, index: usize) -> Result<Option<ParsedCourse>, ValidationError> {
    if entry.is_blank() {
        return Ok(None);
    }

    let label = entry.label(index);

    let credits = entry
        .credits
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|c| *c > 0.0);
    let Some(credits) = credits else {
        return Err(ValidationError {
            row: index,
            message: format!("{label}: please enter credit hours greater than 0."),
            fields: vec![FieldTag::Credits],
        });
    };

    let grade = entry.grade.trim();
    if grade.is_empty() {
        return Err(ValidationError {
            row: index,
            message: format!("{label}: please enter a grade."),
            fields: vec![FieldTag::Grade],
        });
    }

    let points = convert(entry.grade_type, grade).map_err(|e| ValidationError {
        row: index,
        message: format!("{label}: {e}."),
        fields: vec![FieldTag::Grade, FieldTag::GradeType],
    })?;

    Ok(Some(ParsedCourse {
        name: entry.name.trim().to_string(),
        credits,
        points,
    }))
}

/// Validates every entry and computes the credit-weighted GPA.
///
/// All rows are validated independently: errors are collected across the
/// whole input in row order rather than stopping at the first failure, and
/// no GPA is produced when any error exists.
pub fn evaluate(entries: &[CourseEntry]) -> Result<GpaResult, EvaluateError> {
    let mut errors = Vec::new();
    let mut weighted_total = 0.0;
    let mut total_credits = 0.0;

    for (index, entry) in entries.iter().enumerate() {
        match parse_entry(entry, index) {
            Ok(None) => continue,
            Ok(Some(course)) => {
                weighted_total += course.points * course.credits;
                total_credits += course.credits;
            }
            Err(e) => errors.push(e),
        }
    }

    if !errors.is_empty() {
        return Err(EvaluateError::InvalidRows(errors));
    }

    if total_credits == 0.0 {
        return Err(EvaluateError::NoValidCourses);
    }

    Ok(GpaResult {
        gpa: weighted_total / total_credits,
        total_credits,
    })
}
