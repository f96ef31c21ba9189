//! Tests for the lesson formulas against the embedded sample tables

use formula_lab::prelude::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Test SUM over valid and invalid inputs
#[test]
fn test_sum_propagates_invalid_input() {
    assert_eq!(sum3(10, 20, 30), FormulaValue::Number(60.0));
    assert_eq!(sum3(10, "x", 30), FormulaValue::Error(CellError::Value));

    // Never treated as zero
    assert_ne!(sum3(10, "", 30), FormulaValue::Number(40.0));
}

/// Test AVERAGE two-decimal formatting
#[test]
fn test_average_display() {
    assert_eq!(average3_display(10, 20, 30), "20.00");
    assert_eq!(average3_display("10", "20", "31"), "20.33");
    assert_eq!(average3_display(10, "x", 30), "#VALUE!");
}

/// Test MAX / MIN refuse to skip invalid entries
#[test]
fn test_max_min() {
    assert_eq!(max3(10, 20, 30), FormulaValue::Number(30.0));
    assert_eq!(min3(10, 20, 30), FormulaValue::Number(10.0));
    assert!(max3(10, "x", 30).is_invalid_number());
    assert!(min3(10, "x", 30).is_invalid_number());
}

/// Test VLOOKUP against the product table
#[test]
fn test_lookup() {
    assert_eq!(lookup_by_key("B001", PRODUCT_TABLE), FormulaValue::Number(999.0));
    assert_eq!(lookup_by_key("B005", PRODUCT_TABLE), FormulaValue::Number(129.0));

    let miss = lookup_by_key("ZZZZ", PRODUCT_TABLE);
    assert_eq!(miss, FormulaValue::Error(CellError::Na));
    assert!(!miss.is_invalid_number());
}

/// Test IF grading boundaries
#[test]
fn test_classify_score() {
    assert_eq!(classify_score(90).to_string(), "A");
    assert_eq!(classify_score(89.999).to_string(), "B");
    assert_eq!(classify_score(-5).to_string(), "F");
    assert_eq!(classify_score("abc").to_string(), "Invalid input");
}

/// Test COUNTIF / SUMIF against the sales table
#[test]
fn test_region_criteria() {
    assert_eq!(count_by_region("East", SALES_TABLE), 3);
    assert_eq!(count_by_region("Central", SALES_TABLE), 0);
    assert_eq!(sum_by_region("East", SALES_TABLE), 17100.0);
}

/// Test pivot ordering and totals
#[test]
fn test_aggregate_by_category() {
    let totals = aggregate_by_category(PIVOT_TABLE);
    assert_eq!(
        totals.iter().collect::<Vec<_>>(),
        vec![("Electronics", 17600.0), ("Accessories", 5500.0)]
    );
}

/// Test that repeated calls agree
#[test]
fn test_idempotence() {
    assert_eq!(sum3(1, 2, "x"), sum3(1, 2, "x"));
    assert_eq!(average3_display(1, 2, 2), average3_display(1, 2, 2));
    assert_eq!(lookup_by_key("B003", PRODUCT_TABLE), lookup_by_key("B003", PRODUCT_TABLE));
    assert_eq!(classify_score(75), classify_score(75));
    assert_eq!(count_by_region("West", SALES_TABLE), count_by_region("West", SALES_TABLE));
    assert_eq!(aggregate_by_category(PIVOT_TABLE), aggregate_by_category(PIVOT_TABLE));

    let inputs = InputState::default();
    assert_eq!(DashboardView::recalculate(&inputs), DashboardView::recalculate(&inputs));
}

/// Test evaluation from several threads at once
#[test]
fn test_concurrent_callers() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let region = ["East", "West", "North", "South"][i];
                (count_by_region(region, SALES_TABLE), sum3(i as f64, 1, 1))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], (3, FormulaValue::Number(2.0)));
    assert_eq!(results[3], (1, FormulaValue::Number(5.0)));
}

proptest! {
    #[test]
    fn test_grade_matches_bands(score in -50.0f64..150.0) {
        let expected = if score >= 90.0 {
            "A"
        } else if score >= 80.0 {
            "B"
        } else if score >= 70.0 {
            "C"
        } else if score >= 60.0 {
            "D"
        } else {
            "F"
        };
        prop_assert_eq!(classify_score(score).to_string(), expected);
    }

    #[test]
    fn test_unknown_keys_never_match(key in "[a-z]{1,6}") {
        prop_assert!(lookup_by_key(&key, PRODUCT_TABLE).is_not_found());
        prop_assert_eq!(count_by_region(&key, SALES_TABLE), 0);
    }
}
