//! Embedded sample tables used by the lessons

use crate::record::{PivotRecord, Product, SalesRecord};

/// Product table for the VLOOKUP / XLOOKUP lessons
pub const PRODUCT_TABLE: &[Product] = &[
    Product::new("B001", "Laptop", 999.0),
    Product::new("B002", "Monitor", 299.0),
    Product::new("B003", "Keyboard", 89.0),
    Product::new("B004", "Mouse", 49.0),
    Product::new("B005", "Headphones", 129.0),
];

/// Sales table for the COUNTIF / SUMIF lessons (spreadsheet rows A2:B8)
pub const SALES_TABLE: &[SalesRecord] = &[
    SalesRecord::new("East", 5000.0),
    SalesRecord::new("West", 7500.0),
    SalesRecord::new("East", 6200.0),
    SalesRecord::new("North", 4800.0),
    SalesRecord::new("South", 8100.0),
    SalesRecord::new("East", 5900.0),
    SalesRecord::new("West", 7100.0),
];

/// Source rows for the pivot table lesson
pub const PIVOT_TABLE: &[PivotRecord] = &[
    PivotRecord::new("Laptop", "Electronics", "East", 5400.0),
    PivotRecord::new("Monitor", "Electronics", "West", 3200.0),
    PivotRecord::new("Keyboard", "Accessories", "East", 1800.0),
    PivotRecord::new("Mouse", "Accessories", "South", 1400.0),
    PivotRecord::new("Laptop", "Electronics", "West", 6100.0),
    PivotRecord::new("Headphones", "Accessories", "North", 2300.0),
    PivotRecord::new("Monitor", "Electronics", "East", 2900.0),
];
