//! Build tool detection
//!
//! Checks up front whether the configured CSS build tool can be found, so a
//! missing binary is reported once instead of as one failure per configuration.

use crate::config::BuilderSettings;
use crate::infra::{CommandExecutor, RealCommandExecutor};
use thiserror::Error;

/// Flag every supported build tool answers without side effects
pub const BANNER_FLAG: &str = "--help";

/// Errors that can occur during tool operations
#[derive(Error, Debug)]
pub enum ToolError {
    /// I/O error during tool execution
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tool exited unsuccessfully for the banner flag
    #[error("{0} {BANNER_FLAG} exited unsuccessfully")]
    BannerFailed(String),
}

/// The external CSS build tool
///
/// The tool is invoked exactly as a build would invoke it (program plus its
/// leading args), so for `npx tailwindcss` the banner comes from tailwindcss
/// rather than npx.
///
/// # Examples
///
/// ```no_run
/// use css_bench::config::BuilderSettings;
/// use css_bench::tools::{BuildTool, ToolStatus};
///
/// match BuildTool::new(&BuilderSettings::default()).check() {
///     ToolStatus::Available(banner) => println!("using {banner}"),
///     ToolStatus::InstalledWithoutBanner => println!("found"),
///     ToolStatus::Missing => eprintln!("tailwindcss not found"),
/// }
/// ```
#[derive(Debug)]
pub struct BuildTool<CE: CommandExecutor = RealCommandExecutor> {
    /// Binary name in PATH, or a path to it
    pub program: String,
    /// Arguments placed before [`BANNER_FLAG`]
    pub args: Vec<String>,
    cmd_executor: CE,
}

impl BuildTool<RealCommandExecutor> {
    /// Create a tool check with real command execution
    pub fn new(settings: &BuilderSettings) -> Self {
        Self::with_executor(settings, RealCommandExecutor)
    }
}

impl<CE: CommandExecutor> BuildTool<CE> {
    /// Create a tool check with a custom command executor
    pub fn with_executor(settings: &BuilderSettings, cmd_executor: CE) -> Self {
        Self {
            program: settings.program.clone(),
            args: settings.args.clone(),
            cmd_executor,
        }
    }

    /// The invocation as shown to users, e.g. `npx tailwindcss`
    pub fn display_name(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if the program resolves on `PATH` (or as a path)
    pub fn is_installed(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    /// First non-empty line the tool prints for [`BANNER_FLAG`]
    ///
    /// Tailwind prints its name and version there; other tools may print a
    /// usage line. The text is informational only.
    pub fn banner(&self) -> Result<String, ToolError> {
        let output = self.cmd_executor.execute(
            |cmd| cmd.args(&self.args).arg(BANNER_FLAG),
            &self.program,
        )?;

        if !output.status.success() {
            return Err(ToolError::BannerFailed(self.display_name()));
        }

        let banner = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
            .to_string();

        Ok(banner)
    }

    /// Check and report the tool status
    pub fn check(&self) -> ToolStatus {
        if !self.is_installed() {
            return ToolStatus::Missing;
        }
        match self.banner() {
            Ok(banner) if !banner.is_empty() => ToolStatus::Available(banner),
            Ok(_) => ToolStatus::InstalledWithoutBanner,
            Err(e) => {
                log::debug!("{e}");
                ToolStatus::InstalledWithoutBanner
            }
        }
    }
}

/// Status of a tool check
#[derive(Debug, PartialEq, Eq)]
pub enum ToolStatus {
    /// Tool is available; carries the first line of its help output
    Available(String),
    /// Tool binary exists but printed nothing usable
    InstalledWithoutBanner,
    /// Tool binary not found
    Missing,
}
