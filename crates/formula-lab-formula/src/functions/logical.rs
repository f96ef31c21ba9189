//! Score grading: the nested IF lesson

use std::fmt;

use formula_lab_core::{CellError, Operand};

use crate::evaluator::FormulaValue;

/// Letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

/// Inclusive lower bounds, checked from highest to lowest
///
/// A score below every band is an F.
pub const GRADE_BANDS: [(f64, Grade); 4] = [
    (90.0, Grade::A),
    (80.0, Grade::B),
    (70.0, Grade::C),
    (60.0, Grade::D),
];

impl Grade {
    /// Grade a parsed score
    pub fn from_score(score: f64) -> Grade {
        GRADE_BANDS
            .iter()
            .find(|(lower, _)| score >= *lower)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of grading a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    Grade(Grade),
    /// The score did not parse as a number
    InvalidInput,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Grade(grade) => grade.as_str(),
            Classification::InvalidInput => "Invalid input",
        }
    }

    pub fn grade(&self) -> Option<Grade> {
        match self {
            Classification::Grade(grade) => Some(*grade),
            Classification::InvalidInput => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Classification> for FormulaValue {
    /// A grade becomes its letter; invalid input becomes `#VALUE!`
    fn from(classification: Classification) -> Self {
        match classification {
            Classification::Grade(grade) => FormulaValue::text(grade.as_str()),
            Classification::InvalidInput => FormulaValue::Error(CellError::Value),
        }
    }
}

/// =IF(score >= 90, "A", IF(score >= 80, "B", IF(score >= 70, "C", IF(score >= 60, "D", "F"))))
pub fn classify_score(score: impl Into<Operand>) -> Classification {
    let score = score.into();
    match score.as_number() {
        Some(n) => Classification::Grade(Grade::from_score(n)),
        None => {
            log::debug!("score {:?} is not a number", score);
            Classification::InvalidInput
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade_of(score: impl Into<Operand>) -> &'static str {
        classify_score(score).as_str()
    }

    #[test]
    fn test_bands() {
        assert_eq!(grade_of(95), "A");
        assert_eq!(grade_of(85), "B");
        assert_eq!(grade_of(75), "C");
        assert_eq!(grade_of(65), "D");
        assert_eq!(grade_of(10), "F");
    }

    #[test]
    fn test_boundaries_belong_to_higher_band() {
        assert_eq!(grade_of(90), "A");
        assert_eq!(grade_of(80), "B");
        assert_eq!(grade_of(70), "C");
        assert_eq!(grade_of(60), "D");
        assert_eq!(grade_of(89.999), "B");
        assert_eq!(grade_of(59.999), "F");
    }

    #[test]
    fn test_out_of_range_scores() {
        assert_eq!(grade_of(-5), "F");
        assert_eq!(grade_of(150), "A");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(classify_score("abc"), Classification::InvalidInput);
        assert_eq!(classify_score(""), Classification::InvalidInput);
        assert_eq!(grade_of("abc"), "Invalid input");
        assert_eq!(classify_score("abc").grade(), None);
    }

    #[test]
    fn test_into_formula_value() {
        assert_eq!(FormulaValue::from(classify_score(81)), FormulaValue::text("B"));
        assert_eq!(
            FormulaValue::from(classify_score("?")),
            FormulaValue::Error(CellError::Value)
        );
    }

    #[test]
    fn test_text_scores() {
        assert_eq!(classify_score("90"), Classification::Grade(Grade::A));
        assert_eq!(classify_score(" 72.5 ").grade(), Some(Grade::C));
    }
}
