//! Formula result values

use formula_lab_core::CellError;
use std::fmt;

/// Result of evaluating a lesson formula
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value"))]
pub enum FormulaValue {
    Number(f64),
    Text(String),
    Error(CellError),
}

impl FormulaValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        FormulaValue::Text(s.into())
    }

    /// Get the number, if this is a numeric result
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FormulaValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Check if this is an error sentinel
    pub fn is_error(&self) -> bool {
        matches!(self, FormulaValue::Error(_))
    }

    /// Check if this is the invalid-number sentinel (`#VALUE!`)
    pub fn is_invalid_number(&self) -> bool {
        matches!(self, FormulaValue::Error(CellError::Value))
    }

    /// Check if this is the not-found sentinel (`#N/A`)
    pub fn is_not_found(&self) -> bool {
        matches!(self, FormulaValue::Error(CellError::Na))
    }
}

impl fmt::Display for FormulaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaValue::Number(n) => {
                // Format like Excel: no trailing zeros
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            FormulaValue::Text(s) => f.write_str(s),
            FormulaValue::Error(e) => write!(f, "{}", e),
        }
    }
}

impl From<f64> for FormulaValue {
    fn from(n: f64) -> Self {
        FormulaValue::Number(n)
    }
}

impl From<&str> for FormulaValue {
    fn from(s: &str) -> Self {
        FormulaValue::Text(s.to_string())
    }
}

impl From<String> for FormulaValue {
    fn from(s: String) -> Self {
        FormulaValue::Text(s)
    }
}

impl From<CellError> for FormulaValue {
    fn from(e: CellError) -> Self {
        FormulaValue::Error(e)
    }
}
