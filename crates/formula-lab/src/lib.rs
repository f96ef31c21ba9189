//! # formula-lab
//!
//! Worked examples for spreadsheet formula lessons, recalculated from the
//! caller's inputs on every change.
//!
//! ## Features
//!
//! - SUM, AVERAGE, COUNT, MAX and MIN over three typed-in values
//! - VLOOKUP and XLOOKUP against a product table
//! - Nested IF grading
//! - COUNTIF and SUMIF by region
//! - Pivot totals with first-seen ordering
//!
//! ## Example
//!
//! ```rust
//! use formula_lab::prelude::*;
//!
//! let mut inputs = InputState::default();
//! inputs.set(InputField::Sum2, "x");
//!
//! let view = DashboardView::recalculate(&inputs);
//! let sum = view.lesson(FormulaKind::Sum).unwrap();
//! assert_eq!(sum.formula, "=SUM(10, x, 30)");
//! assert_eq!(sum.display, "#VALUE!");
//! ```

pub mod dashboard;
pub mod prelude;

pub use dashboard::{DashboardOptions, DashboardView, LessonResult};

// Re-export core types
pub use formula_lab_core::{
    CellError, Error, InputField, InputState, Operand, PivotField, PivotRecord, Product, Result,
    SalesRecord, PIVOT_TABLE, PRODUCT_TABLE, SALES_TABLE,
};

// Re-export evaluator
pub use formula_lab_formula::{
    aggregate_by, aggregate_by_category, average3, average3_display, classify_score, count3,
    count_by_region, find_product, format_fixed, label, lookup_by_key, max3, min3,
    round_half_away, sum3, sum_by_region, xlookup_by_key, CategoryTotals, Classification,
    FormulaError, FormulaKind, FormulaResult, FormulaValue, Grade, GRADE_BANDS,
};
