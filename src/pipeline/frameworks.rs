//! Size comparison of pre-built external frameworks
//!
//! Frameworks ship already built and minified, so only copy -> compress ->
//! measure sizes happens here. Structural statistics are left unavailable.

use indicatif::{ProgressBar, ProgressDrawTarget};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::FrameworkSpec;
use crate::infra::{FileSystem, RealFileSystem};

use super::compressor::Compressor;
use super::css_stats::PatternCssStats;
use super::error::PipelineError;
use super::measurer::{css_path, min_css_path, Measurer};
use super::record::{ItemOutcome, StatsRecord};

/// Copies, compresses and measures every registered framework
pub struct FrameworkLoader<FS: FileSystem = RealFileSystem> {
    frameworks: Vec<FrameworkSpec>,
    modules_dir: PathBuf,
    output_dir: PathBuf,
    fs: FS,
    compressor: Compressor<FS>,
    measurer: Measurer<FS, PatternCssStats>,
    reserved: HashMap<String, String>,
    progress: ProgressBar,
}

impl<FS: FileSystem + Clone + Sync> FrameworkLoader<FS> {
    /// Create a loader resolving `frameworks` under `modules_dir`
    pub fn new(
        frameworks: Vec<FrameworkSpec>,
        modules_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        fs: FS,
    ) -> Self {
        Self {
            frameworks,
            modules_dir: modules_dir.into(),
            output_dir: output_dir.into(),
            compressor: Compressor::new(fs.clone()),
            measurer: Measurer::new(fs.clone(), PatternCssStats),
            fs,
            reserved: HashMap::new(),
            progress: ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::hidden()),
        }
    }

    /// Names already used by other items, mapped to the item using them
    ///
    /// A framework whose name is reserved fails with
    /// [`PipelineError::NameClash`] instead of overwriting those artifacts.
    pub fn with_reserved_names(mut self, reserved: HashMap<String, String>) -> Self {
        self.reserved = reserved;
        self
    }

    /// Tick `progress` once per finished framework
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Measure every framework, one outcome each in registry order
    pub fn run(&self) -> Vec<ItemOutcome> {
        log::info!("comparing {} external frameworks", self.frameworks.len());
        self.progress.inc_length(self.frameworks.len() as u64);

        self.frameworks
            .par_iter()
            .map(|framework| {
                let result = self.run_one(framework);
                if let Err(ref e) = result {
                    log::debug!("framework {} failed: {e}", framework.name);
                }
                self.progress.inc(1);
                ItemOutcome::from_result(&framework.name, result)
            })
            .collect()
    }

    fn run_one(&self, framework: &FrameworkSpec) -> Result<StatsRecord, PipelineError> {
        let name = &framework.name;
        if let Some(owner) = self.reserved.get(name) {
            return Err(PipelineError::NameClash {
                name: name.clone(),
                owner: owner.clone(),
            });
        }
        self.copy(
            &framework.css_path(&self.modules_dir),
            &css_path(&self.output_dir, name),
        )?;

        let minified = min_css_path(&self.output_dir, name);
        self.copy(&framework.min_css_path(&self.modules_dir), &minified)?;
        self.compressor.compress(&minified)?;

        Ok(StatsRecord {
            label: name.clone(),
            sizes: self.measurer.file_sizes(&self.output_dir, name)?,
            css: None,
        })
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<(), PipelineError> {
        self.fs.copy(from, to).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PipelineError::MissingArtifact(from.to_path_buf())
            } else {
                PipelineError::io(from, e)
            }
        })?;
        Ok(())
    }
}
