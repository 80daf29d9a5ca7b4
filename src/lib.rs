#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! css-bench library
//!
//! Builds a stylesheet once per framework configuration, minifies and
//! compresses every build, and compares the results with pre-built external
//! frameworks. The CLI is a thin shell over this library.
//!
//! # Basic Example
//!
//! Counting the structural features of a stylesheet:
//!
//! ```
//! use css_bench::pipeline::{CssStatsStrategy, PatternCssStats};
//!
//! let stats = PatternCssStats.analyze(".a{color:red}.b{background-color:blue}div{margin:0}");
//! assert_eq!(stats.classes, 2);
//! assert_eq!(stats.declarations, 3);
//! assert_eq!(stats.color_declarations, 2);
//! ```
//!
//! # Rendering a report
//!
//! ```
//! use css_bench::pipeline::{FileSizes, StatsRecord};
//! use css_bench::report::TableReporter;
//!
//! let bootstrap = StatsRecord {
//!     label: "bootstrap".to_string(),
//!     sizes: FileSizes { original: 204_800, minified: 163_840, gzip: 25_600, brotli: 20_480 },
//!     css: None,
//! };
//! let table = TableReporter::render(&[bootstrap]);
//! assert!(table.contains("200.0K"));
//! assert!(table.contains("N/A"));
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file and framework registry
pub mod config;
/// Run-level error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem and command execution
pub mod infra;
/// Build, minify, compress and measure pipeline
pub mod pipeline;
/// Table and JSON reporters
pub mod report;
/// Build tool detection
pub mod tools;
