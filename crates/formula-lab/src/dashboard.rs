//! Dashboard recalculation
//!
//! Evaluates every lesson from the current inputs and the embedded sample
//! tables. The caller owns the [`InputState`], edits it, and calls
//! [`DashboardView::recalculate`] again; nothing is cached between calls.
//!
//! # Example
//!
//! ```rust
//! use formula_lab::prelude::*;
//!
//! let view = DashboardView::recalculate(&InputState::default());
//! assert_eq!(view.lesson(FormulaKind::Average).unwrap().display, "20.00");
//! assert_eq!(view.lesson(FormulaKind::Vlookup).unwrap().display, "999");
//! ```

use crate::{
    aggregate_by, average3, average3_display, classify_score, count3, count_by_region, label,
    lookup_by_key, max3, min3, sum3, sum_by_region, xlookup_by_key, CategoryTotals, FormulaKind,
    FormulaValue, InputState, PivotField, PIVOT_TABLE, PRODUCT_TABLE, SALES_TABLE,
};

/// Options for dashboard recalculation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DashboardOptions {
    /// Field the pivot lesson groups by (default: category)
    pub pivot_field: PivotField,
    /// Value XLOOKUP returns on a miss (default: "Not found")
    pub if_not_found: String,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            pivot_field: PivotField::Category,
            if_not_found: "Not found".to_string(),
        }
    }
}

/// One evaluated lesson
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LessonResult {
    pub kind: FormulaKind,
    /// Formula text as shown to the learner (e.g. `=SUM(10, 20, 30)`)
    pub formula: String,
    /// Tagged result value
    pub value: FormulaValue,
    /// Result as displayed
    pub display: String,
}

impl LessonResult {
    /// Create a result whose display is the value's own rendering
    pub fn new(kind: FormulaKind, formula: String, value: FormulaValue) -> Self {
        let display = value.to_string();
        Self {
            kind,
            formula,
            value,
            display,
        }
    }

    /// Override the displayed text
    pub fn with_display(mut self, display: String) -> Self {
        self.display = display;
        self
    }
}

/// Snapshot of every lesson result for one set of inputs
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DashboardView {
    /// Lesson results in lesson order
    pub lessons: Vec<LessonResult>,
    /// Field the pivot is grouped by
    pub pivot_field: PivotField,
    /// Pivot totals in first-seen order
    pub pivot: CategoryTotals,
}

impl DashboardView {
    /// Recalculate with default options
    pub fn recalculate(inputs: &InputState) -> Self {
        Self::recalculate_with_options(inputs, &DashboardOptions::default())
    }

    /// Recalculate with custom options
    pub fn recalculate_with_options(inputs: &InputState, options: &DashboardOptions) -> Self {
        log::debug!("recalculating dashboard for {:?}", inputs);

        let [a, b, c] = inputs.addends();
        let mut lessons = Vec::with_capacity(10);

        for kind in [
            FormulaKind::Sum,
            FormulaKind::Average,
            FormulaKind::Count,
            FormulaKind::Max,
            FormulaKind::Min,
        ] {
            // Aggregate kinds always have a label
            let formula = label::aggregate_label(kind, [a, b, c]).unwrap_or_default();
            let lesson = match kind {
                FormulaKind::Sum => LessonResult::new(kind, formula, sum3(a, b, c)),
                FormulaKind::Average => LessonResult::new(kind, formula, average3(a, b, c))
                    .with_display(average3_display(a, b, c)),
                FormulaKind::Count => {
                    LessonResult::new(kind, formula, FormulaValue::Number(count3(a, b, c) as f64))
                }
                FormulaKind::Max => LessonResult::new(kind, formula, max3(a, b, c)),
                _ => LessonResult::new(kind, formula, min3(a, b, c)),
            };
            lessons.push(lesson);
        }

        let key = inputs.lookup_value.as_str();
        lessons.push(LessonResult::new(
            FormulaKind::Vlookup,
            label::vlookup_label(key),
            lookup_by_key(key, PRODUCT_TABLE),
        ));
        lessons.push(LessonResult::new(
            FormulaKind::Xlookup,
            label::xlookup_label(key, PRODUCT_TABLE.len(), &options.if_not_found),
            xlookup_by_key(key, PRODUCT_TABLE, options.if_not_found.as_str()),
        ));

        let classification = classify_score(&inputs.if_value);
        lessons.push(
            LessonResult::new(
                FormulaKind::If,
                label::grade_label(&inputs.if_value.to_string()),
                classification.into(),
            )
            .with_display(classification.to_string()),
        );

        let region = inputs.count_if_value.as_str();
        lessons.push(LessonResult::new(
            FormulaKind::Countif,
            label::countif_label(region, SALES_TABLE.len()),
            FormulaValue::Number(count_by_region(region, SALES_TABLE) as f64),
        ));
        lessons.push(LessonResult::new(
            FormulaKind::Sumif,
            label::sumif_label(region, SALES_TABLE.len()),
            FormulaValue::Number(sum_by_region(region, SALES_TABLE)),
        ));

        Self {
            lessons,
            pivot_field: options.pivot_field,
            pivot: aggregate_by(options.pivot_field, PIVOT_TABLE),
        }
    }

    /// Result for one lesson
    pub fn lesson(&self, kind: FormulaKind) -> Option<&LessonResult> {
        self.lessons.iter().find(|lesson| lesson.kind == kind)
    }

    /// Number of lessons whose result is an error sentinel
    pub fn error_count(&self) -> usize {
        self.lessons
            .iter()
            .filter(|lesson| lesson.value.is_error())
            .count()
    }
}
