//! Rendering of benchmark results

pub mod json;
pub mod table;

pub use json::JsonReport;
pub use table::TableReporter;
