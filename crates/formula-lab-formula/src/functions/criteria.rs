//! Region criteria: COUNTIF and SUMIF over the sales table
//!
//! Criteria here are plain region labels compared with exact,
//! case-sensitive equality. No operators or wildcards.

use formula_lab_core::SalesRecord;

fn matching<'a>(
    region: &'a str,
    table: &'a [SalesRecord],
) -> impl Iterator<Item = &'a SalesRecord> + 'a {
    table.iter().filter(move |row| row.region == region)
}

/// COUNTIF(A2:A8, region)
///
/// Zero is a valid answer, not a not-found condition.
pub fn count_by_region(region: &str, table: &[SalesRecord]) -> usize {
    matching(region, table).count()
}

/// SUMIF(A2:A8, region, B2:B8)
pub fn sum_by_region(region: &str, table: &[SalesRecord]) -> f64 {
    matching(region, table).map(|row| row.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use formula_lab_core::SALES_TABLE;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_count_by_region() {
        assert_eq!(count_by_region("East", SALES_TABLE), 3);
        assert_eq!(count_by_region("West", SALES_TABLE), 2);
        assert_eq!(count_by_region("North", SALES_TABLE), 1);
        assert_eq!(count_by_region("South", SALES_TABLE), 1);
    }

    #[test]
    fn test_count_no_match_is_zero() {
        assert_eq!(count_by_region("Central", SALES_TABLE), 0);
        assert_eq!(count_by_region("east", SALES_TABLE), 0);
        assert_eq!(count_by_region("East", &[]), 0);
    }

    #[test]
    fn test_sum_by_region() {
        assert_eq!(sum_by_region("East", SALES_TABLE), 17100.0);
        assert_eq!(sum_by_region("West", SALES_TABLE), 14600.0);
        assert_eq!(sum_by_region("Central", SALES_TABLE), 0.0);
    }

    #[test]
    fn test_custom_table() {
        let rows = vec![
            SalesRecord::owned("Central", 250.0),
            SalesRecord::owned("central", 1000.0),
            SalesRecord::owned(String::from("Central"), 125.5),
        ];
        assert_eq!(count_by_region("Central", &rows), 2);
        assert_eq!(sum_by_region("Central", &rows), 375.5);
        assert_eq!(sum_by_region("East", &rows), 0.0);
    }

    #[test]
    fn test_counts_cover_table() {
        let total: usize = ["East", "West", "North", "South"]
            .iter()
            .map(|r| count_by_region(r, SALES_TABLE))
            .sum();
        assert_eq!(total, SALES_TABLE.len());
    }
}
