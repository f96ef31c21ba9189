//! Pivot aggregation: SUM of amount grouped by one field

use ahash::AHashMap;
use formula_lab_core::{PivotField, PivotRecord};

/// Group totals in first-seen order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryTotals {
    entries: Vec<(String, f64)>,
}

impl CategoryTotals {
    /// Total for a group key
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, total)| *total)
    }

    /// Iterate `(key, total)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, total)| (k.as_str(), *total))
    }

    /// Group keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum across every group
    pub fn grand_total(&self) -> f64 {
        self.entries.iter().map(|(_, total)| total).sum()
    }

    pub fn into_vec(self) -> Vec<(String, f64)> {
        self.entries
    }
}

impl IntoIterator for CategoryTotals {
    type Item = (String, f64);
    type IntoIter = std::vec::IntoIter<(String, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CategoryTotals {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, total) in &self.entries {
            map.serialize_entry(key, total)?;
        }
        map.end()
    }
}

/// Sum `amount` per distinct value of `field`
///
/// Output order is the order in which each key first appears in `table`.
pub fn aggregate_by(field: PivotField, table: &[PivotRecord]) -> CategoryTotals {
    let mut index: AHashMap<&str, usize> = AHashMap::new();
    let mut entries: Vec<(String, f64)> = Vec::new();

    for row in table {
        let key = row.field(field);
        match index.get(key) {
            Some(&slot) => entries[slot].1 += row.amount,
            None => {
                index.insert(key, entries.len());
                entries.push((key.to_string(), row.amount));
            }
        }
    }

    log::trace!("pivot by {} produced {} groups", field, entries.len());
    CategoryTotals { entries }
}

/// Sum `amount` per category, in first-seen order
pub fn aggregate_by_category(table: &[PivotRecord]) -> CategoryTotals {
    aggregate_by(PivotField::Category, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formula_lab_core::PIVOT_TABLE;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_by_category() {
        let totals = aggregate_by_category(PIVOT_TABLE);
        assert_eq!(
            totals.clone().into_vec(),
            vec![
                ("Electronics".to_string(), 17600.0),
                ("Accessories".to_string(), 5500.0),
            ]
        );
        assert_eq!(totals.get("Accessories"), Some(5500.0));
        assert_eq!(totals.get("Furniture"), None);
        assert_eq!(totals.grand_total(), 23100.0);
    }

    #[test]
    fn test_by_region_first_seen_order() {
        let totals = aggregate_by(PivotField::Region, PIVOT_TABLE);
        assert_eq!(totals.keys().collect::<Vec<_>>(), vec!["East", "West", "South", "North"]);
        assert_eq!(totals.get("East"), Some(10100.0));
        assert_eq!(totals.get("West"), Some(9300.0));
    }

    #[test]
    fn test_by_product() {
        let totals = aggregate_by(PivotField::Product, PIVOT_TABLE);
        assert_eq!(totals.len(), 5);
        assert_eq!(totals.get("Laptop"), Some(11500.0));
        assert_eq!(totals.get("Monitor"), Some(6100.0));
    }

    #[test]
    fn test_order_follows_input() {
        let rows = [
            PivotRecord::owned("p", "Zeta", "r", 1.0),
            PivotRecord::owned("p", "Alpha", "r", 2.0),
            PivotRecord::owned("p", "Zeta", "r", 3.0),
        ];
        let totals = aggregate_by_category(&rows);
        assert_eq!(totals.iter().collect::<Vec<_>>(), vec![("Zeta", 4.0), ("Alpha", 2.0)]);
    }

    #[test]
    fn test_empty_table() {
        assert!(aggregate_by_category(&[]).is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use formula_lab_core::PIVOT_TABLE;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_keeps_first_seen_order() {
        let json = serde_json::to_string(&aggregate_by(PivotField::Region, PIVOT_TABLE)).unwrap();
        assert_eq!(
            json,
            r#"{"East":10100.0,"West":9300.0,"South":1400.0,"North":2300.0}"#
        );
    }

    #[test]
    fn test_json_is_not_sorted() {
        let rows = [
            PivotRecord::owned("p", "Zeta", "r", 1.0),
            PivotRecord::owned("p", "Alpha", "r", 2.0),
        ];
        let json = serde_json::to_string(&aggregate_by_category(&rows)).unwrap();
        assert_eq!(json, r#"{"Zeta":1.0,"Alpha":2.0}"#);
    }

    #[test]
    fn test_empty_json() {
        let json = serde_json::to_string(&aggregate_by_category(&[])).unwrap();
        assert_eq!(json, "{}");
    }
}
