//! Command handlers for the css-bench CLI

pub mod run;

pub use run::{cmd_run, run_benchmark, RunOptions, RunSummary};
