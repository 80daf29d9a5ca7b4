//! JSON output for CI consumption

use serde::Serialize;

use crate::pipeline::{FileSizes, PipelineError, StatsRecord};

/// Top-level JSON document
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Measured items in report order
    pub records: Vec<JsonRecord<'a>>,
    /// Items left out of the report
    pub failures: Vec<JsonFailure<'a>>,
}

/// One measured item with display strings and raw byte counts
#[derive(Debug, Serialize)]
pub struct JsonRecord<'a> {
    /// Configuration or framework name
    pub label: &'a str,
    /// Original size, kibibytes
    pub original: String,
    /// Minified size, kibibytes
    pub minified: String,
    /// Gzip size, kibibytes
    pub gzip: String,
    /// Brotli size, kibibytes
    pub brotli: String,
    /// Class selector count, absent for pre-built frameworks
    pub classes: Option<usize>,
    /// Selector block count, absent for pre-built frameworks
    pub declarations: Option<usize>,
    /// Color declaration count, absent for pre-built frameworks
    pub color_declarations: Option<usize>,
    /// Sizes in bytes
    pub bytes: &'a FileSizes,
}

/// One failed item
#[derive(Debug, Serialize)]
pub struct JsonFailure<'a> {
    /// Configuration or framework name
    pub label: &'a str,
    /// Error message
    pub error: String,
}

impl<'a> JsonReport<'a> {
    /// Build the document from records and failures
    pub fn new(records: &'a [StatsRecord], failures: &'a [(String, PipelineError)]) -> Self {
        Self {
            records: records.iter().map(JsonRecord::from).collect(),
            failures: failures
                .iter()
                .map(|(label, error)| JsonFailure {
                    label,
                    error: error.to_string(),
                })
                .collect(),
        }
    }

    /// Serialize as pretty-printed JSON
    pub fn render(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> From<&'a StatsRecord> for JsonRecord<'a> {
    fn from(record: &'a StatsRecord) -> Self {
        let [original, minified, gzip, brotli, ..] = record.fields();
        Self {
            label: &record.label,
            original,
            minified,
            gzip,
            brotli,
            classes: record.css.map(|c| c.classes),
            declarations: record.css.map(|c| c.declarations),
            color_declarations: record.css.map(|c| c.color_declarations),
            bytes: &record.sizes,
        }
    }
}
