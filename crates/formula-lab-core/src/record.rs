//! Sample table records

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A row of the product lookup table
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    /// Product identifier, unique within a table (e.g. "B001")
    pub id: Cow<'static, str>,
    /// Display name
    pub name: Cow<'static, str>,
    /// Unit price, non-negative
    pub price: f64,
}

impl Product {
    /// Create a product from static strings (usable in constants)
    pub const fn new(id: &'static str, name: &'static str, price: f64) -> Self {
        Self {
            id: Cow::Borrowed(id),
            name: Cow::Borrowed(name),
            price,
        }
    }

    /// Create a product from owned strings
    pub fn owned<I: Into<String>, N: Into<String>>(id: I, name: N, price: f64) -> Self {
        Self {
            id: Cow::Owned(id.into()),
            name: Cow::Owned(name.into()),
            price,
        }
    }
}

/// A row of the regional sales table
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SalesRecord {
    /// Region label (e.g. "East")
    pub region: Cow<'static, str>,
    /// Sales amount, non-negative
    pub amount: f64,
}

impl SalesRecord {
    pub const fn new(region: &'static str, amount: f64) -> Self {
        Self {
            region: Cow::Borrowed(region),
            amount,
        }
    }

    pub fn owned<R: Into<String>>(region: R, amount: f64) -> Self {
        Self {
            region: Cow::Owned(region.into()),
            amount,
        }
    }
}

/// A row of the pivot source table
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PivotRecord {
    pub product: Cow<'static, str>,
    pub category: Cow<'static, str>,
    pub region: Cow<'static, str>,
    /// Sales amount, non-negative
    pub amount: f64,
}

impl PivotRecord {
    pub const fn new(
        product: &'static str,
        category: &'static str,
        region: &'static str,
        amount: f64,
    ) -> Self {
        Self {
            product: Cow::Borrowed(product),
            category: Cow::Borrowed(category),
            region: Cow::Borrowed(region),
            amount,
        }
    }

    pub fn owned<P, C, R>(product: P, category: C, region: R, amount: f64) -> Self
    where
        P: Into<String>,
        C: Into<String>,
        R: Into<String>,
    {
        Self {
            product: Cow::Owned(product.into()),
            category: Cow::Owned(category.into()),
            region: Cow::Owned(region.into()),
            amount,
        }
    }

    /// Get the value of a grouping field
    pub fn field(&self, field: PivotField) -> &str {
        match field {
            PivotField::Category => &*self.category,
            PivotField::Region => &*self.region,
            PivotField::Product => &*self.product,
        }
    }
}

/// Grouping key for a pivot aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PivotField {
    #[default]
    Category,
    Region,
    Product,
}

impl PivotField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PivotField::Category => "category",
            PivotField::Region => "region",
            PivotField::Product => "product",
        }
    }
}

impl fmt::Display for PivotField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PivotField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "category" => Ok(PivotField::Category),
            "region" => Ok(PivotField::Region),
            "product" => Ok(PivotField::Product),
            _ => Err(Error::UnknownPivotField(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pivot_field_lookup() {
        let rec = PivotRecord::new("Laptop", "Electronics", "East", 5400.0);
        assert_eq!(rec.field(PivotField::Category), "Electronics");
        assert_eq!(rec.field(PivotField::Region), "East");
        assert_eq!(rec.field(PivotField::Product), "Laptop");
    }

    #[test]
    fn test_pivot_field_parse() {
        assert_eq!("Region".parse::<PivotField>(), Ok(PivotField::Region));
        assert_eq!(" product ".parse::<PivotField>(), Ok(PivotField::Product));
        assert_eq!(
            "month".parse::<PivotField>(),
            Err(Error::UnknownPivotField("month".into()))
        );
    }

    #[test]
    fn test_owned_and_borrowed_compare_equal() {
        assert_eq!(
            Product::new("B001", "Laptop", 999.0),
            Product::owned("B001".to_string(), "Laptop", 999.0)
        );
    }
}
