//! Common test utilities and helpers
//!
//! Shared functionality for integration tests:
//! - A scratch benchmark project with configs, a source stylesheet and an
//!   installed framework package
//! - A fake build tool driven through `sh`
//! - Assertions over rendered tables
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures::BenchProject;
//!
//! let project = BenchProject::new(&["full.js"]).unwrap();
//! ```

pub mod assertions;
pub mod fixtures;

