//! Run-level errors with contextual suggestions
//!
//! Item failures never reach this module: the pipeline reports them per row.
//! What remains are the conditions that stop a run before it starts, each with:
//! - An actionable message
//! - A suggested fix
//! - A sysexits-style exit code
//!
//! # Examples
//!
//! ```no_run
//! use css_bench::error::{BenchError, ErrorFormatter};
//! use std::path::PathBuf;
//!
//! let err: anyhow::Error = BenchError::ConfigDirNotFound {
//!     path: PathBuf::from("tailwind-configs"),
//! }
//! .into();
//!
//! eprint!("{}", ErrorFormatter::format(&err));
//! std::process::exit(ErrorFormatter::exit_code(&err));
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::pipeline::PipelineError;

/// Errors that abort a benchmark run
#[derive(Error, Debug)]
pub enum BenchError {
    /// Configuration directory does not exist or is not a directory
    #[error("Configuration directory not found: {}", path.display())]
    ConfigDirNotFound {
        /// Directory given on the command line
        path: PathBuf,
    },

    /// Source stylesheet does not exist
    #[error("Source CSS not found: {}", path.display())]
    SourceCssNotFound {
        /// File given on the command line
        path: PathBuf,
    },

    /// Configuration file rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Output directory could not be reset
    #[error("Cannot prepare output directory {}", path.display())]
    OutputDir {
        /// Output directory
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Resetting the output directory would delete inputs of the run
    #[error("Refusing to clear output directory {}: it contains {}", path.display(), protected.display())]
    UnsafeOutputDir {
        /// Output directory
        path: PathBuf,
        /// Input that lies inside it
        protected: PathBuf,
    },

    /// Pipeline error outside any single item
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

impl BenchError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use css_bench::error::BenchError;
    /// use std::path::PathBuf;
    ///
    /// let error = BenchError::SourceCssNotFound {
    ///     path: PathBuf::from("src/tailwind.css"),
    /// };
    ///
    /// assert!(error.suggestion().unwrap().contains("src/tailwind.css"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ConfigDirNotFound { path } => Some(format!(
                "Create {} and add one framework configuration file per variant",
                path.display()
            )),
            Self::SourceCssNotFound { path } => Some(format!(
                "Ensure {} exists; it is the input passed to every build",
                path.display()
            )),
            Self::InvalidConfig(_) => {
                Some("Fix the values in .css-bench.toml or delete the file to use defaults".into())
            }
            Self::OutputDir { path, .. } => Some(format!(
                "Check file permissions and that {} is writable",
                path.display()
            )),
            Self::UnsafeOutputDir { .. } => Some(
                "Pass --out-dir pointing at a dedicated directory; it is emptied on every run"
                    .into(),
            ),
            Self::Pipeline(_) => Some("Check the errors above and rerun".to_string()),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions.
    ///
    /// ```
    /// use css_bench::error::BenchError;
    ///
    /// let error = BenchError::InvalidConfig("bad".to_string());
    /// assert_eq!(error.exit_code(), 65);
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigDirNotFound { .. } => 66, // EX_NOINPUT
            Self::SourceCssNotFound { .. } => 66, // EX_NOINPUT
            Self::InvalidConfig(_) => 65,         // EX_DATAERR
            Self::OutputDir { .. } => 73,         // EX_CANTCREAT
            Self::UnsafeOutputDir { .. } => 64, // EX_USAGE
            Self::Pipeline(_) => 1,
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and a suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(suggestion) = error
            .downcast_ref::<BenchError>()
            .and_then(BenchError::suggestion)
        {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                suggestion
            ));
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        error
            .downcast_ref::<BenchError>()
            .map_or(1, BenchError::exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn all_variants() -> Vec<BenchError> {
        vec![
            BenchError::ConfigDirNotFound {
                path: PathBuf::from("configs"),
            },
            BenchError::SourceCssNotFound {
                path: PathBuf::from("src/tailwind.css"),
            },
            BenchError::InvalidConfig("Duplicate framework name 'bulma'".to_string()),
            BenchError::OutputDir {
                path: PathBuf::from("output"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            },
            BenchError::UnsafeOutputDir {
                path: PathBuf::from("."),
                protected: PathBuf::from("configs"),
            },
            BenchError::Pipeline(PipelineError::MissingArtifact(PathBuf::from("a.css"))),
        ]
    }

    #[test]
    fn test_all_error_variants_have_suggestions() {
        for err in all_variants() {
            let suggestion = err.suggestion();
            assert!(
                suggestion.as_deref().is_some_and(|s| !s.is_empty()),
                "Error {:?} should have a suggestion",
                err
            );
        }
    }

    #[test]
    fn test_all_error_variants_have_exit_codes() {
        for err in all_variants() {
            let exit_code = err.exit_code();
            assert!(exit_code > 0, "Error {:?} should fail the process", err);
            assert!(exit_code < 256, "Exit code should fit in a byte");
        }
    }

    #[test]
    fn test_unsafe_output_dir_names_both_paths() {
        let err = BenchError::UnsafeOutputDir {
            path: PathBuf::from("."),
            protected: PathBuf::from("configs"),
        };
        let message = err.to_string();
        assert!(message.contains("Refusing to clear output directory ."));
        assert!(message.contains("configs"));
        assert!(err.suggestion().unwrap().contains("--out-dir"));
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_formatter_prints_chain_and_help() {
        let err: anyhow::Error = BenchError::OutputDir {
            path: PathBuf::from("output"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();

        let formatted = console::strip_ansi_codes(&ErrorFormatter::format(&err)).into_owned();
        assert!(formatted.contains("error: Cannot prepare output directory output"));
        assert!(formatted.contains("caused by: denied"));
        assert!(formatted.contains("help:"));
        assert_eq!(ErrorFormatter::exit_code(&err), 73);
    }

    #[test]
    fn test_formatter_handles_foreign_errors() {
        let err = std::fs::read("/definitely/not/here")
            .context("Failed to read input")
            .unwrap_err();
        let formatted = console::strip_ansi_codes(&ErrorFormatter::format(&err)).into_owned();
        assert!(formatted.contains("Failed to read input"));
        assert!(!formatted.contains("help:"));
        assert_eq!(ErrorFormatter::exit_code(&err), 1);
    }
}
