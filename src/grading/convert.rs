//! Conversion of letter and percentage grades to 4.0-scale points.

use crate::grading::types::{ConversionError, GradeType};

/// Letter grades and their point values on the 4.0 scale.
static LETTER_POINTS: &[(&str, f64)] = &[
    ("A+", 4.0),
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("C-", 1.7),
    ("D+", 1.3),
    ("D", 1.0),
    ("D-", 0.7),
    ("F", 0.0),
];

/// Converts a numeric percentage (0–100) into 4.0-scale points.
///
/// | Range   | Points |
/// |---------|--------|
/// | >= 93   | 4.0    |
/// | >= 90   | 3.7    |
/// | >= 87   | 3.3    |
/// | >= 83   | 3.0    |
/// | >= 80   | 2.7    |
/// | >= 77   | 2.3    |
/// | >= 73   | 2.0    |
/// | >= 70   | 1.7    |
/// | >= 67   | 1.3    |
/// | >= 65   | 1.0    |
/// | < 65    | 0.0    |
fn percentage_points(p: f64) -> f64 {
    match p {
        p if p >= 93.0 => 4.0,
        p if p >= 90.0 => 3.7,
        p if p >= 87.0 => 3.3,
        p if p >= 83.0 => 3.0,
        p if p >= 80.0 => 2.7,
        p if p >= 77.0 => 2.3,
        p if p >= 73.0 => 2.0,
        p if p >= 70.0 => 1.7,
        p if p >= 67.0 => 1.3,
        p if p >= 65.0 => 1.0,
        _ => 0.0,
    }
}

/// Converts a raw grade string into 4.0-scale points.
///
/// Letter grades are trimmed, uppercased, and matched against the fixed
/// table. Percentages must parse as a number in `0..=100`; non-numeric input
/// fails with the same error as an out-of-range value.
pub fn convert(grade_type: GradeType, raw: &str) -> Result<f64, ConversionError> {
    match grade_type {
        GradeType::Letter => {
            let letter = raw.trim().to_uppercase();
            LETTER_POINTS
                .iter()
                .find(|(l, _)| *l == letter)
                .map(|(_, points)| *points)
                .ok_or_else(|| ConversionError::InvalidLetterGrade(raw.trim().to_string()))
        }
        GradeType::Percent => {
            let n = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConversionError::PercentageOutOfRange)?;
            if !(0.0..=100.0).contains(&n) {
                return Err(ConversionError::PercentageOutOfRange);
            }
            Ok(percentage_points(n))
        }
    }
}
