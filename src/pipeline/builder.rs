//! External build tool invocation
//!
//! Runs `<program> [args...] --config <config> --output <output> --input <source>`
//! and waits for it. This is the only place the benchmark depends on an
//! executable being present on `PATH`.

use std::io;
use std::path::Path;

use crate::config::BuilderSettings;
use crate::infra::{CommandExecutor, RealCommandExecutor};

use super::error::PipelineError;

/// Maximum number of stderr characters kept in a build failure
const STDERR_LIMIT: usize = 2000;

/// Invokes the CSS framework build command
#[derive(Debug, Clone)]
pub struct Builder<CE: CommandExecutor = RealCommandExecutor> {
    program: String,
    args: Vec<String>,
    cmd_executor: CE,
}

impl Builder<RealCommandExecutor> {
    /// Create a builder that spawns real processes
    pub fn new(settings: &BuilderSettings) -> Self {
        Self::with_executor(settings, RealCommandExecutor)
    }
}

impl<CE: CommandExecutor> Builder<CE> {
    /// Create a builder with a custom command executor
    pub fn with_executor(settings: &BuilderSettings, cmd_executor: CE) -> Self {
        Self {
            program: settings.program.clone(),
            args: settings.args.clone(),
            cmd_executor,
        }
    }

    /// Build `source` with the framework configuration `config` into `output`
    ///
    /// # Errors
    ///
    /// - [`PipelineError::ToolMissing`] if the program cannot be found
    /// - [`PipelineError::BuildFailed`] if it exits non-zero
    pub fn build(&self, config: &Path, output: &Path, source: &Path) -> Result<(), PipelineError> {
        log::debug!(
            "building {} with {} -> {}",
            config.display(),
            self.program,
            output.display()
        );

        let result = self.cmd_executor.execute(
            |cmd| {
                cmd.args(&self.args)
                    .arg("--config")
                    .arg(config)
                    .arg("--output")
                    .arg(output)
                    .arg("--input")
                    .arg(source)
            },
            &self.program,
        );

        let output_status = match result {
            Ok(out) => out,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(PipelineError::ToolMissing(self.program.clone()));
            }
            Err(e) => return Err(PipelineError::io(config, e)),
        };

        if !output_status.status.success() {
            let stderr = String::from_utf8_lossy(&output_status.stderr);
            return Err(PipelineError::BuildFailed {
                config: config.display().to_string(),
                code: output_status.status.code().unwrap_or(-1),
                stderr: truncate_stderr(stderr.trim()),
            });
        }

        Ok(())
    }
}

/// Keep the tail of the tool's stderr, where the actual error usually is
fn truncate_stderr(stderr: &str) -> String {
    let count = stderr.chars().count();
    if count <= STDERR_LIMIT {
        return stderr.to_string();
    }
    let tail: String = stderr.chars().skip(count - STDERR_LIMIT).collect();
    format!("...{tail}")
}
