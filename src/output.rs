//! CSV import/export and result formatting.
//!
//! Owns all the IO around the grading core: reading raw course rows from a
//! CSV file, rendering the validated rows as a CSV export document, and
//! printing results.

use anyhow::Result;
use tracing::{debug, info};

use crate::grading::evaluate::parse_entry;
use crate::grading::types::{CourseEntry, ExportError, GpaResult};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Read;

/// Header line of the export document. Data rows are fully quoted; the
/// header is emitted verbatim.
pub const EXPORT_HEADER: &str = "Course,Grade Type,Grade,Credits,GPA Points";

/// Logs a GPA result using Rust's debug pretty-print format.
pub fn print_pretty(result: &GpaResult) {
    debug!("{:#?}", result);
}

/// Prints a GPA result as pretty-printed JSON to stdout.
pub fn print_json(result: &GpaResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

/// Reads raw course entries from a CSV file with the headers
/// `name,grade_type,grade,credits`.
pub fn read_entries(path: &str) -> Result<Vec<CourseEntry>> {
    debug!(path, "Reading course entries");
    let file = File::open(path)?;
    read_entries_from_reader(file)
}

/// Reads raw course entries from any CSV reader.
pub fn read_entries_from_reader<R: Read>(reader: R) -> Result<Vec<CourseEntry>> {
    let mut rdr = csv::Reader::from_reader(reader);

    let mut entries = Vec::new();
    for result in rdr.deserialize() {
        let entry: CourseEntry = result?;
        entries.push(entry);
    }

    Ok(entries)
}

/// Renders the valid rows of `entries` as a CSV document.
///
/// Validation is re-run per row; blank and invalid rows are dropped
/// silently. Every data field is double-quoted with internal `"` doubled,
/// lines end with CRLF, and GPA points are formatted to 2 decimal places.
///
/// # Errors
///
/// Returns [`ExportError::Empty`] when no row survives validation.
pub fn export_csv(entries: &[CourseEntry]) -> Result<String, ExportError> {
    let mut rows = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        if let Ok(Some(parsed)) = parse_entry(entry, index) {
            rows.push([
                entry.label(index),
                entry.grade_type.label().to_string(),
                entry.grade.trim().to_string(),
                parsed.credits.to_string(),
                format!("{:.2}", parsed.points),
            ]);
        }
    }

    if rows.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut buf = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::CRLF)
            .has_headers(false)
            .from_writer(&mut buf);

        for row in &rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
    }

    let body = String::from_utf8(buf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    Ok(format!("{EXPORT_HEADER}\r\n{body}"))
}

/// Writes the CSV export of `entries` to a file.
pub fn write_export(path: &str, entries: &[CourseEntry]) -> Result<()> {
    let document = export_csv(entries)?;
    std::fs::write(path, &document)?;
    info!(path, "CSV export written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::types::GradeType;
    use std::env;
    use std::fs;
    use std::path::Path;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn test_export_header_and_quoting() {
        let entries = vec![CourseEntry::new("Calc", GradeType::Letter, "A", "3")];
        let doc = export_csv(&entries).unwrap();
        let lines: Vec<_> = doc.lines().collect();

        assert_eq!(lines[0], "Course,Grade Type,Grade,Credits,GPA Points");
        assert_eq!(lines[1], "\"Calc\",\"Letter\",\"A\",\"3\",\"4.00\"");
        assert!(doc.contains("\r\n"));
    }

    #[test]
    fn test_export_escapes_internal_quotes() {
        let entries = vec![CourseEntry::new(
            "Phys \"101\"",
            GradeType::Percent,
            "88",
            "3",
        )];
        let doc = export_csv(&entries).unwrap();

        assert!(doc.contains("\"Phys \"\"101\"\"\",\"Percent\",\"88\",\"3\",\"3.30\""));
    }

    #[test]
    fn test_export_blank_name_uses_course_number() {
        let entries = vec![
            CourseEntry::new("", GradeType::Letter, "B-", "1.5"),
            CourseEntry::new("  ", GradeType::Letter, "A", "3"),
        ];
        let doc = export_csv(&entries).unwrap();

        assert!(doc.contains("\"Course 1\",\"Letter\",\"B-\",\"1.5\",\"2.70\""));
        assert!(doc.contains("\"Course 2\",\"Letter\",\"A\",\"3\",\"4.00\""));
    }

    #[test]
    fn test_export_drops_invalid_and_blank_rows() {
        let entries = vec![
            CourseEntry::new("Good", GradeType::Letter, "A", "3"),
            CourseEntry::new("Bad", GradeType::Letter, "Z", "3"),
            CourseEntry::new("", GradeType::Letter, "", ""),
        ];
        let doc = export_csv(&entries).unwrap();
        let lines: Vec<_> = doc.lines().collect();

        // Header plus the single valid row
        assert_eq!(lines.len(), 2);
        assert!(!doc.contains("Bad"));
    }

    #[test]
    fn test_export_with_no_valid_rows_fails() {
        let blank = vec![CourseEntry::new("", GradeType::Letter, "", "")];
        assert!(matches!(export_csv(&blank), Err(ExportError::Empty)));
        assert!(matches!(export_csv(&[]), Err(ExportError::Empty)));
    }

    #[test]
    fn test_write_export_creates_file() {
        let path = temp_path("gpa_calc_test_export.csv");
        let _ = fs::remove_file(&path); // clean up any prior run

        let entries = vec![CourseEntry::new("Calc", GradeType::Letter, "A", "3")];
        write_export(&path, &entries).unwrap();

        assert!(Path::new(&path).exists());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(EXPORT_HEADER));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_entries_from_reader() {
        let data = "name,grade_type,grade,credits\nCalc,letter,A,4\n,percent,88,3\n,letter,,\n";
        let entries = read_entries_from_reader(data.as_bytes()).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "Calc");
        assert_eq!(entries[0].grade_type, GradeType::Letter);
        assert_eq!(entries[1].grade_type, GradeType::Percent);
        assert_eq!(entries[1].grade, "88");
        assert!(entries[2].is_blank());
    }

    #[test]
    fn test_read_entries_accepts_capitalized_grade_type() {
        let data = "name,grade_type,grade,credits\nCalc,Letter,A,4\n";
        let entries = read_entries_from_reader(data.as_bytes()).unwrap();

        assert_eq!(entries[0].grade_type, GradeType::Letter);
    }

    #[test]
    fn test_read_entries_round_trip_file() {
        let path = temp_path("gpa_calc_test_entries.csv");
        let _ = fs::remove_file(&path);

        fs::write(&path, "name,grade_type,grade,credits\nBio,letter,B+,3\n").unwrap();
        let entries = read_entries(&path).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].grade, "B+");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        let result = GpaResult {
            gpa: 3.5,
            total_credits: 6.0,
        };
        print_pretty(&result);
    }

    #[test]
    fn test_print_json_does_not_panic() {
        let result = GpaResult {
            gpa: 3.5,
            total_credits: 6.0,
        };
        print_json(&result).unwrap();
    }
}
