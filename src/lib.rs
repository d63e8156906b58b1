pub mod grading;
pub mod output;
