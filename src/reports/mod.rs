//! Reports module for PennyWise
//!
//! Provides the income and expenditure summary shown by `summary`.

pub mod summary;

pub use summary::{SummaryReport, TagTotal, TypeTotals};
