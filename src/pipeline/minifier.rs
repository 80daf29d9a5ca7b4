//! CSS minification through lightningcss
//!
//! The component only does I/O and naming: `dir/name.ext` becomes
//! `dir/name.min.ext`. What minification means is left to the engine.

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};
use std::path::{Path, PathBuf};

use crate::infra::{FileSystem, RealFileSystem};

use super::error::PipelineError;

/// Split a file name at its last dot into `(name, extension)`.
///
/// A name without a dot has an empty extension.
///
/// ```
/// use css_bench::pipeline::minifier::split_extension;
///
/// assert_eq!(split_extension("site.css"), ("site", "css"));
/// assert_eq!(split_extension("tw.v3.css"), ("tw.v3", "css"));
/// assert_eq!(split_extension("README"), ("README", ""));
/// ```
pub fn split_extension(file_name: &str) -> (&str, &str) {
    file_name.rsplit_once('.').unwrap_or((file_name, ""))
}

/// Name of the minified sibling of `file_name`
pub fn minified_name(file_name: &str) -> String {
    match split_extension(file_name) {
        (name, "") => format!("{name}.min"),
        (name, ext) => format!("{name}.min.{ext}"),
    }
}

/// Minify CSS source text.
///
/// Parse, merge and print errors are reported with the engine's message.
pub fn minify_css(source: &str, filename: &str) -> Result<String, String> {
    let mut sheet = StyleSheet::parse(
        source,
        ParserOptions {
            filename: filename.to_string(),
            ..ParserOptions::default()
        },
    )
    .map_err(|e| e.to_string())?;

    sheet
        .minify(MinifyOptions::default())
        .map_err(|e| e.to_string())?;

    let printed = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| e.to_string())?;

    Ok(printed.code)
}

/// Writes minified siblings of built stylesheets
pub struct Minifier<FS: FileSystem = RealFileSystem> {
    fs: FS,
}

impl Default for Minifier<RealFileSystem> {
    fn default() -> Self {
        Self::new(RealFileSystem)
    }
}

impl<FS: FileSystem> Minifier<FS> {
    /// Create a minifier over the given filesystem
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Minify `dir/file_name` into `dir/<name>.min.<ext>` and return the new path
    pub fn minify(&self, dir: &Path, file_name: &str) -> Result<PathBuf, PipelineError> {
        let input = dir.join(file_name);
        let output = dir.join(minified_name(file_name));

        let source = self
            .fs
            .read_to_string(&input)
            .map_err(|e| PipelineError::io(&input, e))?;

        let minified = minify_css(&source, file_name).map_err(|message| PipelineError::Minify {
            path: input.clone(),
            message,
        })?;

        self.fs
            .write(&output, minified)
            .map_err(|e| PipelineError::io(&output, e))?;

        log::debug!("minified {} -> {}", input.display(), output.display());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_minified_name_inserts_min_before_last_extension() {
        assert_eq!(minified_name("tailwind.css"), "tailwind.min.css");
        assert_eq!(minified_name("tailwind.jit.css"), "tailwind.jit.min.css");
        assert_eq!(minified_name("plain"), "plain.min");
    }

    #[test]
    fn test_minify_css_strips_whitespace_and_comments() {
        let source = "/* header */\n.a {\n  color: red;\n}\n\n.b {\n  margin: 0px;\n}\n";
        let minified = minify_css(source, "test.css").unwrap();

        assert!(!minified.contains("header"));
        assert!(!minified.contains('\n'));
        assert!(minified.contains(".a{color:red}"));
        assert!(minified.len() < source.len());
    }

    #[test]
    fn test_minify_css_of_empty_input_is_empty() {
        assert_eq!(minify_css("", "empty.css").unwrap(), "");
    }

    #[test]
    fn test_minify_writes_sibling_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("site.css"), ".x {\n  color: blue;\n}\n").unwrap();

        let output = Minifier::default().minify(temp.path(), "site.css").unwrap();

        assert_eq!(output, temp.path().join("site.min.css"));
        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.starts_with(".x{color:"));
    }

    #[test]
    fn test_minify_missing_input_is_io_error() {
        let temp = TempDir::new().unwrap();
        let result = Minifier::default().minify(temp.path(), "absent.css");
        assert!(matches!(result, Err(PipelineError::Io { .. })));
        assert!(!temp.path().join("absent.min.css").exists());
    }
}
