//! Lookup functions

use formula_lab_core::{CellError, Product};

use crate::evaluator::FormulaValue;

/// Find the first product whose id equals `key` exactly (case-sensitive)
pub fn find_product<'a>(key: &str, table: &'a [Product]) -> Option<&'a Product> {
    table.iter().find(|p| p.id == key)
}

/// VLOOKUP(key, ProductTable, 3, FALSE)
///
/// Exact-match scan over the id column returning the price of the first
/// match, or `#N/A` when no row matches.
pub fn lookup_by_key(key: &str, table: &[Product]) -> FormulaValue {
    match find_product(key, table) {
        Some(product) => FormulaValue::Number(product.price),
        None => {
            log::debug!("lookup miss for key {:?}", key);
            FormulaValue::Error(CellError::Na)
        }
    }
}

/// XLOOKUP(key, ids, prices, if_not_found)
///
/// Same scan as [`lookup_by_key`], but a miss yields the caller's
/// `if_not_found` value instead of `#N/A`.
pub fn xlookup_by_key(
    key: &str,
    table: &[Product],
    if_not_found: impl Into<FormulaValue>,
) -> FormulaValue {
    match find_product(key, table) {
        Some(product) => FormulaValue::Number(product.price),
        None => if_not_found.into(),
    }
}
