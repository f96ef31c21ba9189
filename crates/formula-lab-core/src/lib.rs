//! # formula-lab-core
//!
//! Core data structures for the formula-lab spreadsheet lessons.
//!
//! This crate provides the fundamental types used throughout formula-lab:
//! - [`Operand`] - A numeric-or-text argument as a user typed it
//! - [`CellError`] - Excel-style error sentinels (`#VALUE!`, `#N/A`)
//! - [`Product`], [`SalesRecord`], [`PivotRecord`] - Sample table records
//! - [`InputState`] - The caller-owned lesson inputs
//!
//! ## Example
//!
//! ```rust
//! use formula_lab_core::{InputState, Operand, PRODUCT_TABLE};
//!
//! let mut inputs = InputState::default();
//! inputs.set_by_name("sum1", "12.5").unwrap();
//!
//! assert_eq!(inputs.sum1.as_number(), Some(12.5));
//! assert_eq!(Operand::from("abc").as_number(), None);
//! assert_eq!(PRODUCT_TABLE.len(), 5);
//! ```

pub mod error;
pub mod input;
pub mod record;
pub mod sample;
pub mod value;

pub use error::{Error, Result};
pub use input::{InputField, InputState};
pub use record::{PivotField, PivotRecord, Product, SalesRecord};
pub use sample::{PIVOT_TABLE, PRODUCT_TABLE, SALES_TABLE};
pub use value::{CellError, Operand};
