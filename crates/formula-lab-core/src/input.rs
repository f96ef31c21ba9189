//! Caller-owned lesson inputs

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::value::Operand;

/// Named input field of the lesson form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputField {
    /// First addend (SUM / AVERAGE / MAX / MIN / COUNT)
    Sum1,
    /// Second addend
    Sum2,
    /// Third addend
    Sum3,
    /// Product id for VLOOKUP / XLOOKUP
    LookupValue,
    /// Score for the IF grading lesson
    IfValue,
    /// Region for COUNTIF / SUMIF
    CountIfValue,
}

impl InputField {
    /// All fields, in form order
    pub const ALL: [InputField; 6] = [
        InputField::Sum1,
        InputField::Sum2,
        InputField::Sum3,
        InputField::LookupValue,
        InputField::IfValue,
        InputField::CountIfValue,
    ];

    /// Form name of the field
    pub fn name(&self) -> &'static str {
        match self {
            InputField::Sum1 => "sum1",
            InputField::Sum2 => "sum2",
            InputField::Sum3 => "sum3",
            InputField::LookupValue => "lookupValue",
            InputField::IfValue => "ifValue",
            InputField::CountIfValue => "countIfValue",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputField {
    type Err = Error;

    /// Accepts the form name (`lookupValue`) or its snake_case spelling
    /// (`lookup_value`), case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "sum1" => Ok(InputField::Sum1),
            "sum2" => Ok(InputField::Sum2),
            "sum3" => Ok(InputField::Sum3),
            "lookupvalue" => Ok(InputField::LookupValue),
            "ifvalue" => Ok(InputField::IfValue),
            "countifvalue" => Ok(InputField::CountIfValue),
            _ => Err(Error::UnknownField(s.to_string())),
        }
    }
}

/// Current values of every lesson input
///
/// The evaluator never keeps a reference to this; callers mutate it on each
/// edit and recalculate from scratch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputState {
    pub sum1: Operand,
    pub sum2: Operand,
    pub sum3: Operand,
    pub lookup_value: String,
    pub if_value: Operand,
    pub count_if_value: String,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            sum1: Operand::Number(10.0),
            sum2: Operand::Number(20.0),
            sum3: Operand::Number(30.0),
            lookup_value: "B001".to_string(),
            if_value: Operand::Number(75.0),
            count_if_value: "East".to_string(),
        }
    }
}

impl InputState {
    /// Create the default input state
    pub fn new() -> Self {
        Self::default()
    }

    /// The three addends in order
    pub fn addends(&self) -> [&Operand; 3] {
        [&self.sum1, &self.sum2, &self.sum3]
    }

    /// Replace a field with the text the user typed
    ///
    /// Numeric fields keep the raw text; parsing happens at evaluation time.
    pub fn set<S: Into<String>>(&mut self, field: InputField, value: S) {
        let value = value.into();
        log::trace!("input {} = {:?}", field, value);
        match field {
            InputField::Sum1 => self.sum1 = Operand::Text(value),
            InputField::Sum2 => self.sum2 = Operand::Text(value),
            InputField::Sum3 => self.sum3 = Operand::Text(value),
            InputField::LookupValue => self.lookup_value = value,
            InputField::IfValue => self.if_value = Operand::Text(value),
            InputField::CountIfValue => self.count_if_value = value,
        }
    }

    /// Replace a field addressed by name
    pub fn set_by_name<S: Into<String>>(&mut self, name: &str, value: S) -> Result<()> {
        let field: InputField = name.parse()?;
        self.set(field, value);
        Ok(())
    }

    /// Apply a `field=value` assignment
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<()> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| Error::InvalidAssignment(assignment.to_string()))?;
        self.set_by_name(name, value)
    }

    /// Render the current value of a field as text
    pub fn get(&self, field: InputField) -> String {
        match field {
            InputField::Sum1 => self.sum1.to_string(),
            InputField::Sum2 => self.sum2.to_string(),
            InputField::Sum3 => self.sum3.to_string(),
            InputField::LookupValue => self.lookup_value.clone(),
            InputField::IfValue => self.if_value.to_string(),
            InputField::CountIfValue => self.count_if_value.clone(),
        }
    }
}
