//! Data types used by the grading pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the raw grade string of a course should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeType {
    #[serde(rename = "letter", alias = "Letter")]
    Letter,
    #[serde(rename = "percent", alias = "Percent")]
    Percent,
}

impl GradeType {
    /// Human-readable label used in the CSV export.
    pub fn label(&self) -> &'static str {
        match self {
            GradeType::Letter => "Letter",
            GradeType::Percent => "Percent",
        }
    }
}

/// A single course row as entered by the user, raw and unvalidated.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseEntry {
    #[serde(default)]
    pub name: String,
    pub grade_type: GradeType,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub credits: String,
}

impl CourseEntry {
    pub fn new(name: &str, grade_type: GradeType, grade: &str, credits: &str) -> Self {
        Self {
            name: name.to_string(),
            grade_type,
            grade: grade.to_string(),
            credits: credits.to_string(),
        }
    }

    /// Display label: the trimmed name, or `Course N` (1-based) when blank.
    pub fn label(&self, index: usize) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            format!("Course {}", index + 1)
        } else {
            trimmed.to_string()
        }
    }

    /// A row with neither a grade nor credit hours is skipped entirely:
    /// not validated, not counted, not an error.
    pub fn is_blank(&self) -> bool {
        self.grade.trim().is_empty() && self.credits.trim().is_empty()
    }
}

/// A validated course: positive credit hours and points on the 4.0 scale.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedCourse {
    pub name: String,
    pub credits: f64,
    pub points: f64,
}

/// Which input fields caused a validation failure, for caller-side
/// highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTag {
    Grade,
    Credits,
    GradeType,
}

/// A row-level validation failure with the offending fields flagged.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    /// 0-based index of the row in the input sequence.
    pub row: usize,
    pub message: String,
    pub fields: Vec<FieldTag>,
}

/// Credit-weighted GPA over all counted courses.
#[derive(Debug, Clone, Serialize)]
pub struct GpaResult {
    pub gpa: f64,
    pub total_credits: f64,
}

/// Failure to convert a raw grade string to 4.0-scale points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("\"{0}\" is not a valid letter grade (use A, A-, B+, ..., F)")]
    InvalidLetterGrade(String),
    /// Non-numeric input is reported the same way as a value outside 0..=100.
    #[error("percentage must be between 0 and 100")]
    PercentageOutOfRange,
}

/// Why an evaluation produced no GPA.
#[derive(Error, Debug)]
pub enum EvaluateError {
    /// One or more rows failed validation, in input order.
    #[error("{} course row(s) failed validation", .0.len())]
    InvalidRows(Vec<ValidationError>),
    /// Every row was blank, or there were no rows at all.
    #[error("Please enter at least one course with valid grade and credits to calculate GPA.")]
    NoValidCourses,
}

/// Why a CSV export produced no document.
#[derive(Error, Debug)]
pub enum ExportError {
    /// No row survived validation.
    #[error("Nothing to export. Please enter at least one valid course.")]
    Empty,
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
