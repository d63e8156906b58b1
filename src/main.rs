//! CLI entry point for the GPA calculator.
//!
//! Provides subcommands for computing a weighted GPA from a course list and
//! for exporting the validated courses as CSV.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gpa_calc::grading::evaluate::evaluate;
use gpa_calc::grading::types::EvaluateError;
use gpa_calc::output::{print_json, print_pretty, read_entries, write_export};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gpa_calc")]
#[command(about = "Compute a weighted GPA on a 4.0 scale from a course list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the weighted GPA from a course CSV file
    Calculate {
        /// CSV file with headers name,grade_type,grade,credits
        #[arg(value_name = "FILE")]
        input: String,

        /// Print the result as JSON instead of plain text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Export the validated courses with their GPA points as CSV
    Export {
        /// CSV file with headers name,grade_type,grade,credits
        #[arg(value_name = "FILE")]
        input: String,

        /// Output CSV file
        #[arg(short, long, default_value = "gpa-courses.csv")]
        output: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate { input, json } => {
            let entries = read_entries(&input)?;

            match evaluate(&entries) {
                Ok(result) => {
                    print_pretty(&result);
                    if json {
                        print_json(&result)?;
                    } else {
                        println!("GPA: {:.2}", result.gpa);
                        println!(
                            "Based on {:.1} total credit hours using a 4.0 scale.",
                            result.total_credits
                        );
                    }
                }
                Err(EvaluateError::InvalidRows(errors)) => {
                    for e in &errors {
                        error!(row = e.row, "{}", e.message);
                    }
                    anyhow::bail!("{} course row(s) failed validation", errors.len());
                }
                Err(e @ EvaluateError::NoValidCourses) => anyhow::bail!(e),
            }
        }
        Commands::Export { input, output } => {
            let entries = read_entries(&input)?;
            write_export(&output, &entries)?;
        }
    }

    Ok(())
}
