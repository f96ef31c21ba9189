//! Formula label rendering
//!
//! Builds the formula text shown next to each lesson result, echoing the
//! operands exactly as the user typed them:
//!
//! ```rust
//! use formula_lab_formula::label;
//! use formula_lab_formula::FormulaKind;
//!
//! let text = label::aggregate_label(FormulaKind::Sum, [&10.into(), &20.into(), &30.into()]).unwrap();
//! assert_eq!(text, "=SUM(10, 20, 30)");
//! assert_eq!(label::countif_label("East", 7), "=COUNTIF(A2:A8, \"East\")");
//! ```

use formula_lab_core::Operand;

use crate::error::{FormulaError, FormulaResult};
use crate::functions::logical::{Grade, GRADE_BANDS};
use crate::functions::FormulaKind;

/// Quote a string literal, doubling embedded quotes
pub fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Column range for a table whose data starts on row 2, below a header
pub fn column_range(column: char, rows: usize) -> String {
    // An empty table still names its first data row
    let last = rows.max(1) + 1;
    format!("{column}2:{column}{last}")
}

/// `=SUM(10, 20, 30)` and friends
pub fn aggregate_label(kind: FormulaKind, operands: [&Operand; 3]) -> FormulaResult<String> {
    if !kind.is_aggregate() {
        return Err(FormulaError::Argument(format!(
            "{} does not take the three addend inputs",
            kind
        )));
    }
    let [a, b, c] = operands;
    Ok(format!("={}({}, {}, {})", kind.name(), a, b, c))
}

/// `=VLOOKUP("B001", ProductTable, 3, FALSE)`
pub fn vlookup_label(key: &str) -> String {
    format!("=VLOOKUP({}, ProductTable, 3, FALSE)", quote(key))
}

/// `=XLOOKUP("B001", A2:A6, C2:C6, "Not found")`
pub fn xlookup_label(key: &str, rows: usize, if_not_found: &str) -> String {
    format!(
        "=XLOOKUP({}, {}, {}, {})",
        quote(key),
        column_range('A', rows),
        column_range('C', rows),
        quote(if_not_found)
    )
}

/// Nested IF over [`GRADE_BANDS`], with `score` in the test position
pub fn grade_label(score: &str) -> String {
    let mut text = quote(Grade::F.as_str());
    for (lower, grade) in GRADE_BANDS.iter().rev() {
        text = format!(
            "IF({} >= {}, {}, {})",
            score,
            lower,
            quote(grade.as_str()),
            text
        );
    }
    format!("={}", text)
}

/// `=COUNTIF(A2:A8, "East")`
pub fn countif_label(region: &str, rows: usize) -> String {
    format!("=COUNTIF({}, {})", column_range('A', rows), quote(region))
}

/// `=SUMIF(A2:A8, "East", B2:B8)`
pub fn sumif_label(region: &str, rows: usize) -> String {
    format!(
        "=SUMIF({}, {}, {})",
        column_range('A', rows),
        quote(region),
        column_range('B', rows)
    )
}
