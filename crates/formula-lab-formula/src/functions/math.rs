//! Three-operand aggregates: SUM, AVERAGE, MAX, MIN, COUNT

use std::str::FromStr;

use formula_lab_core::{CellError, Operand};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::evaluator::FormulaValue;

/// Parse all three operands, or none
///
/// A single bad operand poisons the whole call. It is never skipped or read
/// as zero.
fn parse3(a: Operand, b: Operand, c: Operand) -> Option<[f64; 3]> {
    let parsed = [a.as_number(), b.as_number(), c.as_number()];
    match parsed {
        [Some(x), Some(y), Some(z)] => Some([x, y, z]),
        _ => {
            log::debug!("invalid operand in ({}, {}, {})", a, b, c);
            None
        }
    }
}

/// Wrap a computed number, turning overflow to infinity into `#VALUE!`
fn finite(n: f64) -> FormulaValue {
    if n.is_finite() {
        FormulaValue::Number(n)
    } else {
        log::debug!("result {} is not finite", n);
        FormulaValue::Error(CellError::Value)
    }
}

/// SUM of three operands
///
/// Returns `#VALUE!` if any operand fails to parse or the total overflows.
pub fn sum3(
    a: impl Into<Operand>,
    b: impl Into<Operand>,
    c: impl Into<Operand>,
) -> FormulaValue {
    match parse3(a.into(), b.into(), c.into()) {
        Some([x, y, z]) => finite(x + y + z),
        None => FormulaValue::Error(CellError::Value),
    }
}

/// AVERAGE of three operands, rounded to two decimals half away from zero
pub fn average3(
    a: impl Into<Operand>,
    b: impl Into<Operand>,
    c: impl Into<Operand>,
) -> FormulaValue {
    match sum3(a, b, c) {
        FormulaValue::Number(sum) => FormulaValue::Number(round_half_away(sum / 3.0, 2)),
        other => other,
    }
}

/// AVERAGE of three operands as a fixed two-decimal string (e.g. `"20.00"`)
///
/// Invalid input renders as `#VALUE!`.
pub fn average3_display(
    a: impl Into<Operand>,
    b: impl Into<Operand>,
    c: impl Into<Operand>,
) -> String {
    match average3(a, b, c) {
        FormulaValue::Number(n) => format_fixed(n, 2),
        other => other.to_string(),
    }
}

/// MAX of three operands
pub fn max3(
    a: impl Into<Operand>,
    b: impl Into<Operand>,
    c: impl Into<Operand>,
) -> FormulaValue {
    match parse3(a.into(), b.into(), c.into()) {
        Some([x, y, z]) => FormulaValue::Number(x.max(y).max(z)),
        None => FormulaValue::Error(CellError::Value),
    }
}

/// MIN of three operands
pub fn min3(
    a: impl Into<Operand>,
    b: impl Into<Operand>,
    c: impl Into<Operand>,
) -> FormulaValue {
    match parse3(a.into(), b.into(), c.into()) {
        Some([x, y, z]) => FormulaValue::Number(x.min(y).min(z)),
        None => FormulaValue::Error(CellError::Value),
    }
}

/// COUNT of the operands that are numbers
///
/// COUNT is the one aggregate that skips non-numeric entries, as in Excel.
pub fn count3(a: impl Into<Operand>, b: impl Into<Operand>, c: impl Into<Operand>) -> usize {
    [a.into(), b.into(), c.into()]
        .iter()
        .filter(|op| op.is_number())
        .count()
}

/// Convert through the shortest decimal representation of `n`
///
/// Returns `None` when `n` is outside the range `Decimal` can hold.
fn to_decimal(n: f64) -> Option<Decimal> {
    Decimal::from_str(&n.to_string()).ok()
}

fn round_decimal(d: Decimal, places: u32) -> Decimal {
    let rounded = d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Round to `places` decimals, midpoints away from zero
///
/// Midpoints are judged on the shortest decimal form of the float, so
/// `2.675` rounds to `2.68` even though its binary value is slightly below.
pub fn round_half_away(n: f64, places: u32) -> f64 {
    match to_decimal(n) {
        Some(d) => round_decimal(d, places).to_string().parse().unwrap_or(n),
        // Beyond Decimal range the fractional digits are not representable anyway
        None => n,
    }
}

/// Format with exactly `places` decimals, midpoints away from zero
pub fn format_fixed(n: f64, places: u32) -> String {
    match to_decimal(n) {
        Some(d) => {
            let mut rounded = round_decimal(d, places);
            rounded.rescale(places);
            rounded.to_string()
        }
        None => format!("{:.*}", places as usize, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_sum3() {
        assert_eq!(sum3(10, 20, 30), FormulaValue::Number(60.0));
        assert_eq!(sum3("1.5", " 2 ", -3), FormulaValue::Number(0.5));
    }

    #[test]
    fn test_sum3_invalid_propagates() {
        assert_eq!(sum3(10, "x", 30), FormulaValue::Error(CellError::Value));
        assert_eq!(sum3("", 0, 0), FormulaValue::Error(CellError::Value));
        assert_eq!(sum3(1, 2, f64::NAN), FormulaValue::Error(CellError::Value));
    }

    #[test]
    fn test_overflow_is_invalid() {
        assert_eq!(sum3("1e308", "1e308", 0), FormulaValue::Error(CellError::Value));
        assert_eq!(sum3(-1e308, -1e308, 0), FormulaValue::Error(CellError::Value));
        assert_eq!(average3("1e308", "1e308", 0), FormulaValue::Error(CellError::Value));
        assert_eq!(average3_display("1e308", "1e308", 0), "#VALUE!");
        assert_eq!(max3("1e308", "1e308", 0), FormulaValue::Number(1e308));
    }

    #[test]
    fn test_average3() {
        assert_eq!(average3(10, 20, 30), FormulaValue::Number(20.0));
        assert_eq!(average3(1, 2, 2), FormulaValue::Number(1.67));
        assert_eq!(average3(10, "abc", 30), FormulaValue::Error(CellError::Value));
    }

    #[test]
    fn test_average3_display() {
        assert_eq!(average3_display(10, 20, 30), "20.00");
        assert_eq!(average3_display(1, 2, 2), "1.67");
        assert_eq!(average3_display(1, 1, 0), "0.67");
        assert_eq!(average3_display(-1, -2, -2), "-1.67");
        assert_eq!(average3_display(10, "", 30), "#VALUE!");
    }

    #[test]
    fn test_max_min() {
        assert_eq!(max3(3, "7", -1), FormulaValue::Number(7.0));
        assert_eq!(min3(3, "7", -1), FormulaValue::Number(-1.0));
        assert_eq!(max3(3, "seven", -1), FormulaValue::Error(CellError::Value));
        assert_eq!(min3(3, "seven", -1), FormulaValue::Error(CellError::Value));
    }

    #[test]
    fn test_count3() {
        assert_eq!(count3(1, 2, 3), 3);
        assert_eq!(count3(1, "x", ""), 1);
        assert_eq!(count3("a", "b", "c"), 0);
    }

    #[test]
    fn test_round_half_away() {
        assert_eq!(round_half_away(2.675, 2), 2.68);
        assert_eq!(round_half_away(-2.675, 2), -2.68);
        assert_eq!(round_half_away(0.125, 2), 0.13);
        assert_eq!(round_half_away(1.004, 2), 1.0);
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(2.675, 2), "2.68");
        assert_eq!(format_fixed(20.0, 2), "20.00");
        assert_eq!(format_fixed(0.5, 2), "0.50");
        assert_eq!(format_fixed(-0.001, 2), "0.00");
        assert_eq!(format_fixed(1e30, 2), format!("{:.2}", 1e30));
    }

    proptest! {
        #[test]
        fn test_sum3_matches_addition(
            a in -1.0e9f64..1.0e9,
            b in -1.0e9f64..1.0e9,
            c in -1.0e9f64..1.0e9,
        ) {
            prop_assert_eq!(sum3(a, b, c), FormulaValue::Number(a + b + c));
            prop_assert_eq!(
                average3_display(a, b, c),
                format_fixed(round_half_away((a + b + c) / 3.0, 2), 2)
            );
        }

        #[test]
        fn test_text_operands_match_numbers(a in -1000i32..1000, b in -1000i32..1000) {
            prop_assert_eq!(
                sum3(a.to_string(), b.to_string(), "0"),
                sum3(a, b, 0)
            );
        }
    }
}
