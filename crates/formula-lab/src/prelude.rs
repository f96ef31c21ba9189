//! Prelude module - common imports for formula-lab users
//!
//! ```rust
//! use formula_lab::prelude::*;
//! ```

pub use crate::{
    // Evaluator
    aggregate_by,
    aggregate_by_category,
    average3,
    average3_display,
    classify_score,
    count3,
    count_by_region,
    lookup_by_key,
    max3,
    min3,
    sum3,
    sum_by_region,
    xlookup_by_key,

    CategoryTotals,
    CellError,
    Classification,
    // Dashboard
    DashboardOptions,
    DashboardView,
    // Error types
    Error,
    FormulaKind,
    FormulaValue,
    Grade,
    InputField,
    // Inputs
    InputState,
    LessonResult,
    Operand,
    PivotField,
    Result,

    // Sample data
    PIVOT_TABLE,
    PRODUCT_TABLE,
    SALES_TABLE,
};
