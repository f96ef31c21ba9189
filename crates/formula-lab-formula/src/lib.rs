//! # formula-lab-formula
//!
//! Evaluator for the spreadsheet lesson formulas.
//!
//! This crate provides:
//! - Three-operand aggregates (SUM, AVERAGE, MAX, MIN, COUNT)
//! - Product lookups (VLOOKUP, XLOOKUP)
//! - Score grading (nested IF)
//! - Region criteria (COUNTIF, SUMIF)
//! - Pivot aggregation with first-seen ordering
//! - Formula label rendering for display
//!
//! Every function is pure. Invalid numbers and lookup misses come back as
//! tagged [`FormulaValue::Error`] values rather than as `Err`.
//!
//! ## Example
//!
//! ```rust
//! use formula_lab_formula::{sum3, lookup_by_key, FormulaValue};
//! use formula_lab_core::{CellError, PRODUCT_TABLE};
//!
//! assert_eq!(sum3(10, 20, 30), FormulaValue::Number(60.0));
//! assert_eq!(sum3(10, "x", 30), FormulaValue::Error(CellError::Value));
//! assert_eq!(lookup_by_key("B001", PRODUCT_TABLE), FormulaValue::Number(999.0));
//! ```

pub mod error;
pub mod evaluator;
pub mod functions;
pub mod label;

pub use error::{FormulaError, FormulaResult};
pub use evaluator::FormulaValue;
pub use functions::criteria::{count_by_region, sum_by_region};
pub use functions::logical::{classify_score, Classification, Grade, GRADE_BANDS};
pub use functions::lookup::{find_product, lookup_by_key, xlookup_by_key};
pub use functions::math::{
    average3, average3_display, count3, format_fixed, max3, min3, round_half_away, sum3,
};
pub use functions::pivot::{aggregate_by, aggregate_by_category, CategoryTotals};
pub use functions::FormulaKind;
