//! Lesson functions

pub mod criteria;
pub mod logical;
pub mod lookup;
pub mod math;
pub mod pivot;

use crate::error::{FormulaError, FormulaResult};
use std::fmt;
use std::str::FromStr;

/// The spreadsheet functions covered by the lessons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum FormulaKind {
    Sum,
    Average,
    Count,
    Max,
    Min,
    Vlookup,
    Xlookup,
    If,
    Countif,
    Sumif,
    Pivot,
}

impl FormulaKind {
    /// All lesson functions, in lesson order
    pub const ALL: [FormulaKind; 11] = [
        FormulaKind::Sum,
        FormulaKind::Average,
        FormulaKind::Count,
        FormulaKind::Max,
        FormulaKind::Min,
        FormulaKind::Vlookup,
        FormulaKind::Xlookup,
        FormulaKind::If,
        FormulaKind::Countif,
        FormulaKind::Sumif,
        FormulaKind::Pivot,
    ];

    /// Function name (uppercase)
    pub fn name(&self) -> &'static str {
        match self {
            FormulaKind::Sum => "SUM",
            FormulaKind::Average => "AVERAGE",
            FormulaKind::Count => "COUNT",
            FormulaKind::Max => "MAX",
            FormulaKind::Min => "MIN",
            FormulaKind::Vlookup => "VLOOKUP",
            FormulaKind::Xlookup => "XLOOKUP",
            FormulaKind::If => "IF",
            FormulaKind::Countif => "COUNTIF",
            FormulaKind::Sumif => "SUMIF",
            FormulaKind::Pivot => "PIVOT",
        }
    }

    /// Spreadsheet call syntax
    pub fn syntax(&self) -> &'static str {
        match self {
            FormulaKind::Sum => "=SUM(number1, [number2], ...)",
            FormulaKind::Average => "=AVERAGE(number1, [number2], ...)",
            FormulaKind::Count => "=COUNT(value1, [value2], ...)",
            FormulaKind::Max => "=MAX(number1, [number2], ...)",
            FormulaKind::Min => "=MIN(number1, [number2], ...)",
            FormulaKind::Vlookup => {
                "=VLOOKUP(lookup_value, table_array, col_index_num, [range_lookup])"
            }
            FormulaKind::Xlookup => {
                "=XLOOKUP(lookup_value, lookup_array, return_array, [if_not_found], [match_mode], [search_mode])"
            }
            FormulaKind::If => "=IF(logical_test, value_if_true, value_if_false)",
            FormulaKind::Countif => "=COUNTIF(range, criteria)",
            FormulaKind::Sumif => "=SUMIF(range, criteria, [sum_range])",
            // Pivot tables are built from the Insert menu, not typed
            FormulaKind::Pivot => "Insert > PivotTable (rows: category, values: SUM of amount)",
        }
    }

    /// Whether the function takes the three addend inputs
    pub fn is_aggregate(&self) -> bool {
        matches!(
            self,
            FormulaKind::Sum
                | FormulaKind::Average
                | FormulaKind::Count
                | FormulaKind::Max
                | FormulaKind::Min
        )
    }
}

impl fmt::Display for FormulaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormulaKind {
    type Err = FormulaError;

    fn from_str(s: &str) -> FormulaResult<Self> {
        let name = s.trim().trim_start_matches('=').to_uppercase();
        FormulaKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| FormulaError::UnknownFunction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!("sum".parse::<FormulaKind>(), Ok(FormulaKind::Sum));
        assert_eq!("=VLOOKUP".parse::<FormulaKind>(), Ok(FormulaKind::Vlookup));
        assert_eq!(
            "MEDIAN".parse::<FormulaKind>(),
            Err(FormulaError::UnknownFunction("MEDIAN".into()))
        );
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in FormulaKind::ALL.iter().enumerate() {
            for b in &FormulaKind::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
