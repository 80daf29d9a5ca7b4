//! Gzip and brotli compression of built stylesheets
//!
//! Produces `<file>.gzip` and `<file>.brotli` next to the input. Both encoders
//! run in parallel on the rayon pool.

use brotli::CompressorWriter;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::fmt::format_bytes;
use crate::infra::{FileSystem, RealFileSystem};

use super::error::PipelineError;

/// Suffix appended to gzip artifacts
pub const GZIP_SUFFIX: &str = ".gzip";
/// Suffix appended to brotli artifacts
pub const BROTLI_SUFFIX: &str = ".brotli";

const BROTLI_BUFFER_SIZE: usize = 4096;
const BROTLI_QUALITY: u32 = 11;
const BROTLI_LG_WINDOW: u32 = 22;

/// Byte counts of the two compressed artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressedSizes {
    /// Size of the gzip output
    pub gzip: u64,
    /// Size of the brotli output
    pub brotli: u64,
}

/// Append a literal suffix to a file name (`a.min.css` + `.gzip`)
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Gzip-encode a buffer at the highest compression level.
///
/// The header carries no timestamp, so identical input yields identical output.
pub fn gzip_encode(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Brotli-encode a buffer at maximum quality
pub fn brotli_encode(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut writer = CompressorWriter::new(
        Vec::new(),
        BROTLI_BUFFER_SIZE,
        BROTLI_QUALITY,
        BROTLI_LG_WINDOW,
    );
    writer.write_all(data)?;
    Ok(writer.into_inner())
}

/// Writes compressed siblings of a stylesheet
pub struct Compressor<FS: FileSystem = RealFileSystem> {
    fs: FS,
}

impl Default for Compressor<RealFileSystem> {
    fn default() -> Self {
        Self::new(RealFileSystem)
    }
}

impl<FS: FileSystem + Sync> Compressor<FS> {
    /// Create a compressor over the given filesystem
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Compress `path` into `<path>.gzip` and `<path>.brotli`
    ///
    /// # Errors
    ///
    /// Fails when the input cannot be read or either output cannot be written.
    pub fn compress(&self, path: &Path) -> Result<CompressedSizes, PipelineError> {
        let data = self
            .fs
            .read(path)
            .map_err(|e| PipelineError::io(path, e))?;

        let (gzip_size, brotli_size) = rayon::join(
            || self.encode_to(path, GZIP_SUFFIX, &data, gzip_encode),
            || self.encode_to(path, BROTLI_SUFFIX, &data, brotli_encode),
        );

        let sizes = CompressedSizes {
            gzip: gzip_size?,
            brotli: brotli_size?,
        };
        log::debug!(
            "compressed {} ({}): gzip={} brotli={}",
            path.display(),
            format_bytes(data.len() as u64),
            format_bytes(sizes.gzip),
            format_bytes(sizes.brotli)
        );
        Ok(sizes)
    }

    fn encode_to(
        &self,
        source: &Path,
        suffix: &str,
        data: &[u8],
        encode: fn(&[u8]) -> std::io::Result<Vec<u8>>,
    ) -> Result<u64, PipelineError> {
        let target = with_suffix(source, suffix);
        let encoded = encode(data).map_err(|e| PipelineError::io(&target, e))?;
        self.fs
            .write(&target, &encoded)
            .map_err(|e| PipelineError::io(&target, e))?;
        Ok(encoded.len() as u64)
    }
}
