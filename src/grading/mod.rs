//! Grade conversion and GPA aggregation.
//!
//! This module converts letter or percentage grades to points on the 4.0
//! scale, validates raw course rows, and computes a credit-weighted GPA.

pub mod convert;
pub mod evaluate;
pub mod types;
