//! Measurement pipeline
//!
//! Applies the same sequence to every item:
//! 1. build the configuration with the external CSS tool
//! 2. minify the output with lightningcss
//! 3. gzip and brotli the minified file
//! 4. measure sizes and structural statistics
//!
//! External frameworks skip steps 1-2 and structural statistics.

pub mod builder;
pub mod compressor;
pub mod css_stats;
pub mod error;
pub mod frameworks;
pub mod measurer;
pub mod minifier;
pub mod output_dir;
pub mod record;
pub mod runner;

pub use builder::Builder;
pub use compressor::{CompressedSizes, Compressor};
pub use css_stats::{CssStats, CssStatsStrategy, PatternCssStats};
pub use error::PipelineError;
pub use frameworks::FrameworkLoader;
pub use measurer::Measurer;
pub use minifier::Minifier;
pub use output_dir::{output_dir_conflict, reset_output_dir};
pub use record::{partition_outcomes, FileSizes, ItemOutcome, StatsRecord, UNAVAILABLE};
pub use runner::{BuildConfig, PipelineRunner};
