//! Operand and error value types

use std::fmt;

/// Excel error values produced by the lesson formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellError {
    /// #VALUE! - An argument expected to be numeric did not parse
    Value,
    /// #N/A - Lookup key not present in the table
    Na,
}

impl CellError {
    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Value => "#VALUE!",
            CellError::Na => "#N/A",
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric-or-text argument, as supplied by the caller
///
/// Text operands keep exactly what the user typed so that formula labels
/// can echo the input back. Numeric interpretation happens on demand via
/// [`Operand::as_number`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Operand {
    /// Numeric value
    Number(f64),
    /// Raw text value
    Text(String),
}

impl Operand {
    /// Create a new text operand
    pub fn text<S: Into<String>>(s: S) -> Self {
        Operand::Text(s.into())
    }

    /// Try to interpret the operand as a finite number
    ///
    /// Text is trimmed before parsing. Empty text, non-numeric text, `NaN`
    /// and infinities all return `None`; nothing is ever coerced to zero.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Operand::Number(n) => *n,
            Operand::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        if n.is_finite() {
            Some(n)
        } else {
            log::trace!("rejecting non-finite operand {:?}", self);
            None
        }
    }

    /// Check if the operand parses as a number
    pub fn is_number(&self) -> bool {
        self.as_number().is_some()
    }
}

impl Default for Operand {
    fn default() -> Self {
        Operand::Text(String::new())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Operand::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Number(n)
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Number(n as f64)
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Number(n as f64)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Text(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Text(s)
    }
}

impl From<&Operand> for Operand {
    fn from(op: &Operand) -> Self {
        op.clone()
    }
}
