//! Per-item statistics and outcomes

use serde::Serialize;

use crate::fmt::bytes_to_display;

use super::css_stats::CssStats;
use super::error::PipelineError;

/// Marker shown for statistics that were not computed
pub const UNAVAILABLE: &str = "N/A";

/// On-disk sizes of one item's four artifacts, in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileSizes {
    /// `<name>.css`
    pub original: u64,
    /// `<name>.min.css`
    pub minified: u64,
    /// `<name>.min.css.gzip`
    pub gzip: u64,
    /// `<name>.min.css.brotli`
    pub brotli: u64,
}

/// Size and structure summary of one build or external framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsRecord {
    /// Configuration or framework name
    pub label: String,
    /// Artifact sizes
    pub sizes: FileSizes,
    /// Structural statistics; `None` for pre-built frameworks
    pub css: Option<CssStats>,
}

impl StatsRecord {
    /// Number of value columns in a rendered record
    pub const FIELD_COUNT: usize = 7;

    /// Human-readable values in table order.
    ///
    /// Sizes are kibibyte strings, counts are decimal, missing counts use
    /// [`UNAVAILABLE`].
    pub fn fields(&self) -> [String; Self::FIELD_COUNT] {
        let count = |pick: fn(&CssStats) -> usize| {
            self.css
                .as_ref()
                .map(|stats| pick(stats).to_string())
                .unwrap_or_else(|| UNAVAILABLE.to_string())
        };

        [
            bytes_to_display(self.sizes.original),
            bytes_to_display(self.sizes.minified),
            bytes_to_display(self.sizes.gzip),
            bytes_to_display(self.sizes.brotli),
            count(|s| s.classes),
            count(|s| s.declarations),
            count(|s| s.color_declarations),
        ]
    }
}

/// Result of running one item through the pipeline
#[derive(Debug)]
pub enum ItemOutcome {
    /// The item was measured
    Measured(StatsRecord),
    /// Some step failed; the item is left out of the report
    Failed {
        /// Configuration or framework name
        label: String,
        /// Why it failed
        error: PipelineError,
    },
}

impl ItemOutcome {
    /// Wrap a step result for the item `label`
    pub fn from_result(label: impl Into<String>, result: Result<StatsRecord, PipelineError>) -> Self {
        match result {
            Ok(record) => Self::Measured(record),
            Err(error) => Self::Failed {
                label: label.into(),
                error,
            },
        }
    }

    /// Name of the item regardless of outcome
    pub fn label(&self) -> &str {
        match self {
            Self::Measured(record) => &record.label,
            Self::Failed { label, .. } => label,
        }
    }

    /// The record, if the item was measured
    pub fn record(&self) -> Option<&StatsRecord> {
        match self {
            Self::Measured(record) => Some(record),
            Self::Failed { .. } => None,
        }
    }
}

/// Split outcomes into records and failures, keeping their relative order
pub fn partition_outcomes(
    outcomes: impl IntoIterator<Item = ItemOutcome>,
) -> (Vec<StatsRecord>, Vec<(String, PipelineError)>) {
    let mut records = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            ItemOutcome::Measured(record) => records.push(record),
            ItemOutcome::Failed { label, error } => failures.push((label, error)),
        }
    }
    (records, failures)
}
