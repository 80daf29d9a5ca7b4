//! Build comparison across framework configurations
//!
//! Every file in the configuration directory goes through
//! build -> minify -> compress -> measure. Configurations run in parallel;
//! steps within one configuration run strictly in order.

use indicatif::{ProgressBar, ProgressDrawTarget};
use rayon::prelude::*;
use std::collections::hash_map::{Entry, HashMap};
use std::path::{Path, PathBuf};

use crate::infra::{CommandExecutor, FileSystem, RealCommandExecutor, RealFileSystem};

use super::builder::Builder;
use super::compressor::Compressor;
use super::css_stats::{CssStatsStrategy, PatternCssStats};
use super::error::PipelineError;
use super::measurer::{css_path, Measurer};
use super::minifier::Minifier;
use super::record::{ItemOutcome, StatsRecord};

/// A build configuration file and the name its outputs are derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// File name without its extension
    pub name: String,
    /// Path of the configuration file
    pub path: PathBuf,
}

impl BuildConfig {
    /// File name of the configuration, extension included
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }
}

/// Runs every configuration in a directory through the measurement pipeline
pub struct PipelineRunner<
    FS: FileSystem = RealFileSystem,
    CE: CommandExecutor = RealCommandExecutor,
    S: CssStatsStrategy = PatternCssStats,
> {
    output_dir: PathBuf,
    fs: FS,
    builder: Builder<CE>,
    minifier: Minifier<FS>,
    compressor: Compressor<FS>,
    measurer: Measurer<FS, S>,
    progress: ProgressBar,
}

impl<FS, CE, S> PipelineRunner<FS, CE, S>
where
    FS: FileSystem + Clone + Sync,
    CE: CommandExecutor + Sync,
    S: CssStatsStrategy + Sync,
{
    /// Create a runner writing into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>, builder: Builder<CE>, fs: FS, strategy: S) -> Self {
        Self {
            output_dir: output_dir.into(),
            builder,
            minifier: Minifier::new(fs.clone()),
            compressor: Compressor::new(fs.clone()),
            measurer: Measurer::new(fs.clone(), strategy),
            fs,
            progress: ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::hidden()),
        }
    }

    /// Tick `progress` once per finished configuration
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Configuration files in `config_dir`, sorted by file name
    ///
    /// Symlinks are followed. Subdirectories and unreadable entries are
    /// skipped with a warning. Failing to list the directory is fatal to the
    /// whole run.
    pub fn list_configs(&self, config_dir: &Path) -> Result<Vec<BuildConfig>, PipelineError> {
        let entries = self
            .fs
            .read_dir(config_dir)
            .map_err(|e| PipelineError::io(config_dir, e))?;

        let mut configs = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    log::warn!("skipping unreadable entry in {}: {e}", config_dir.display());
                    continue;
                }
            };
            match self.fs.metadata(&path) {
                Ok(metadata) if metadata.is_file() => {}
                Ok(_) => {
                    log::warn!("skipping {}: not a file", path.display());
                    continue;
                }
                Err(e) => {
                    log::warn!("skipping {}: {e}", path.display());
                    continue;
                }
            }
            if let Some(stem) = path.file_stem() {
                let name = stem.to_string_lossy().into_owned();
                configs.push(BuildConfig { name, path });
            }
        }

        configs.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        Ok(configs)
    }

    /// Build and measure every configuration in `config_dir`
    ///
    /// Returns one outcome per configuration in listing order. A failing
    /// configuration yields [`ItemOutcome::Failed`] and never affects others.
    pub fn run(&self, config_dir: &Path, source_css: &Path) -> Result<Vec<ItemOutcome>, PipelineError> {
        let configs = self.list_configs(config_dir)?;
        log::debug!("listed {} from {}", configs.len(), config_dir.display());
        Ok(self.run_configs(&configs, source_css))
    }

    /// Run an explicit list of configurations
    ///
    /// Configurations sharing a name would overwrite each other's artifacts,
    /// so only the first one keeps the name. Later ones fail with
    /// [`PipelineError::NameClash`] and are labelled by their file name.
    pub fn run_configs(&self, configs: &[BuildConfig], source_css: &Path) -> Vec<ItemOutcome> {
        log::info!("comparing {} build configurations", configs.len());
        self.progress.inc_length(configs.len() as u64);

        let mut owners: HashMap<&str, &BuildConfig> = HashMap::new();
        let clashes: Vec<Option<String>> = configs
            .iter()
            .map(|config| match owners.entry(config.name.as_str()) {
                Entry::Occupied(owner) => Some(owner.get().file_name()),
                Entry::Vacant(slot) => {
                    slot.insert(config);
                    None
                }
            })
            .collect();

        configs
            .par_iter()
            .zip(clashes.par_iter())
            .map(|(config, clash)| {
                let outcome = match clash {
                    Some(owner) => ItemOutcome::from_result(
                        &config.file_name(),
                        Err(PipelineError::NameClash {
                            name: config.name.clone(),
                            owner: owner.clone(),
                        }),
                    ),
                    None => {
                        let result = self.run_one(config, source_css);
                        if let Err(ref e) = result {
                            log::debug!("configuration {} failed: {e}", config.name);
                        }
                        ItemOutcome::from_result(&config.name, result)
                    }
                };
                self.progress.inc(1);
                outcome
            })
            .collect()
    }

    fn run_one(&self, config: &BuildConfig, source_css: &Path) -> Result<StatsRecord, PipelineError> {
        let output = css_path(&self.output_dir, &config.name);
        self.builder.build(&config.path, &output, source_css)?;

        let file_name = format!("{}.css", config.name);
        let minified = self.minifier.minify(&self.output_dir, &file_name)?;
        self.compressor.compress(&minified)?;

        let (sizes, css) = self.measurer.measure(&self.output_dir, &config.name)?;
        Ok(StatsRecord {
            label: config.name.clone(),
            sizes,
            css: Some(css),
        })
    }
}
