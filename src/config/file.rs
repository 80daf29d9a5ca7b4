//! Configuration file data structures

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use super::registry::{default_registry, FrameworkSpec};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".css-bench.toml";

/// Default output directory
pub const DEFAULT_OUT_DIR: &str = "output";

/// Default directory holding installed framework packages
pub const DEFAULT_MODULES_DIR: &str = "node_modules";

/// Default build tool
pub const DEFAULT_BUILD_PROGRAM: &str = "tailwindcss";

/// css-bench configuration file structure
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// Directory receiving all artifacts (cleared at the start of a run)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,

    /// Directory external framework paths are resolved against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules_dir: Option<PathBuf>,

    /// Build tool invocation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builder: Option<BuilderSettings>,

    /// External frameworks; replaces the default registry when present
    #[serde(
        default,
        rename = "framework",
        skip_serializing_if = "Option::is_none"
    )]
    pub frameworks: Option<Vec<FrameworkSpec>>,
}

/// How to invoke the CSS build tool
///
/// The tool is called as `<program> [args...] --config <file> --output <file> --input <file>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderSettings {
    /// Executable looked up on `PATH`
    pub program: String,

    /// Arguments placed before the path flags (e.g. `["tailwindcss"]` for `npx`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_BUILD_PROGRAM.to_string(),
            args: Vec::new(),
        }
    }
}

impl ConfigFile {
    /// Check the file for values that cannot produce a meaningful run
    pub fn validate(&self) -> Result<()> {
        if let Some(builder) = &self.builder {
            if builder.program.trim().is_empty() {
                anyhow::bail!("Builder program cannot be empty");
            }
        }

        if let Some(frameworks) = &self.frameworks {
            let mut seen = HashSet::new();
            for framework in frameworks {
                if framework.name.trim().is_empty() {
                    anyhow::bail!("Framework name cannot be empty");
                }
                if !seen.insert(framework.name.as_str()) {
                    anyhow::bail!("Duplicate framework name '{}'", framework.name);
                }
            }
        }

        Ok(())
    }
}

/// Values from the command line that override the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--out-dir`
    pub out_dir: Option<PathBuf>,
    /// `--modules-dir`
    pub modules_dir: Option<PathBuf>,
    /// `--builder`
    pub builder_program: Option<String>,
    /// `--skip-frameworks`
    pub skip_frameworks: bool,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct BenchSettings {
    /// Output directory
    pub out_dir: PathBuf,
    /// Framework package root
    pub modules_dir: PathBuf,
    /// Build tool invocation
    pub builder: BuilderSettings,
    /// Frameworks to compare (empty when skipped)
    pub frameworks: Vec<FrameworkSpec>,
}

impl BenchSettings {
    /// Merge a config file with command-line overrides
    ///
    /// A `--builder` flag replaces the whole invocation, leading args included.
    pub fn resolve(file: ConfigFile, overrides: Overrides) -> Self {
        let builder = match overrides.builder_program {
            Some(program) => BuilderSettings {
                program,
                args: Vec::new(),
            },
            None => file.builder.unwrap_or_default(),
        };

        let frameworks = if overrides.skip_frameworks {
            Vec::new()
        } else {
            file.frameworks.unwrap_or_else(default_registry)
        };

        Self {
            out_dir: overrides
                .out_dir
                .or(file.out_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
            modules_dir: overrides
                .modules_dir
                .or(file.modules_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODULES_DIR)),
            builder,
            frameworks,
        }
    }
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self::resolve(ConfigFile::default(), Overrides::default())
    }
}
