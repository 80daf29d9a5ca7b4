//! Size and structure measurement of finished artifacts

use std::io;
use std::path::{Path, PathBuf};

use crate::infra::{FileSystem, RealFileSystem};

use super::compressor::{with_suffix, BROTLI_SUFFIX, GZIP_SUFFIX};
use super::css_stats::{CssStats, CssStatsStrategy, PatternCssStats};
use super::error::PipelineError;
use super::record::FileSizes;

/// Path of `<base>.css` in `dir`
pub fn css_path(dir: &Path, base: &str) -> PathBuf {
    dir.join(format!("{base}.css"))
}

/// Path of `<base>.min.css` in `dir`
pub fn min_css_path(dir: &Path, base: &str) -> PathBuf {
    dir.join(format!("{base}.min.css"))
}

/// Reads artifact sizes and structural statistics from an output directory
pub struct Measurer<FS: FileSystem = RealFileSystem, S: CssStatsStrategy = PatternCssStats> {
    fs: FS,
    strategy: S,
}

impl Default for Measurer<RealFileSystem, PatternCssStats> {
    fn default() -> Self {
        Self::new(RealFileSystem, PatternCssStats)
    }
}

impl<FS: FileSystem, S: CssStatsStrategy> Measurer<FS, S> {
    /// Create a measurer with the given filesystem and statistics strategy
    pub fn new(fs: FS, strategy: S) -> Self {
        Self { fs, strategy }
    }

    /// Sizes of `<base>.css`, `<base>.min.css` and both compressed siblings
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::MissingArtifact`] for the first absent file.
    pub fn file_sizes(&self, dir: &Path, base: &str) -> Result<FileSizes, PipelineError> {
        let minified = min_css_path(dir, base);
        Ok(FileSizes {
            original: self.size_of(&css_path(dir, base))?,
            minified: self.size_of(&minified)?,
            gzip: self.size_of(&with_suffix(&minified, GZIP_SUFFIX))?,
            brotli: self.size_of(&with_suffix(&minified, BROTLI_SUFFIX))?,
        })
    }

    /// Structural statistics of `<base>.min.css`
    pub fn css_stats(&self, dir: &Path, base: &str) -> Result<CssStats, PipelineError> {
        let path = min_css_path(dir, base);
        let css = self
            .fs
            .read_to_string(&path)
            .map_err(|e| Self::artifact_error(&path, e))?;
        Ok(self.strategy.analyze(&css))
    }

    /// Both measurements for one built configuration
    pub fn measure(&self, dir: &Path, base: &str) -> Result<(FileSizes, CssStats), PipelineError> {
        Ok((self.file_sizes(dir, base)?, self.css_stats(dir, base)?))
    }

    fn size_of(&self, path: &Path) -> Result<u64, PipelineError> {
        self.fs
            .metadata(path)
            .map(|m| m.len())
            .map_err(|e| Self::artifact_error(path, e))
    }

    fn artifact_error(path: &Path, e: io::Error) -> PipelineError {
        if e.kind() == io::ErrorKind::NotFound {
            PipelineError::MissingArtifact(path.to_path_buf())
        } else {
            PipelineError::io(path, e)
        }
    }
}
