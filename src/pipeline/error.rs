//! Error types for the measurement pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building, minifying, compressing or measuring one item
///
/// Every variant is fatal to the item it occurred in and never to its siblings.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// I/O error on a specific artifact
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The build tool could not be spawned
    #[error("Build tool not found: {0}")]
    ToolMissing(String),

    /// The build tool exited unsuccessfully
    #[error("Build failed for {config} (exit code {code}): {stderr}")]
    BuildFailed {
        /// Configuration file that was being built
        config: String,
        /// Exit code, or -1 when terminated by a signal
        code: i32,
        /// Trimmed standard error of the build tool
        stderr: String,
    },

    /// The minification engine rejected the stylesheet
    #[error("Minification failed for {}: {message}", path.display())]
    Minify {
        /// Stylesheet being minified
        path: PathBuf,
        /// Message reported by the engine
        message: String,
    },

    /// Another item already writes its artifacts under the same name
    #[error("Name '{name}' is already taken by {owner}")]
    NameClash {
        /// Shared artifact name
        name: String,
        /// Item that keeps the name
        owner: String,
    },

    /// An artifact expected at measurement time does not exist
    #[error("Missing artifact: {}", .0.display())]
    MissingArtifact(PathBuf),
}

impl PipelineError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
