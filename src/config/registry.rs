//! Registry of pre-built external CSS frameworks

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A pre-built framework shipped as a CSS / minified CSS pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FrameworkSpec {
    /// Display label, also the base name of the copied artifacts
    pub name: String,
    /// Unminified stylesheet, relative to the modules directory unless absolute
    pub css: PathBuf,
    /// Minified stylesheet, relative to the modules directory unless absolute
    pub min_css: PathBuf,
}

impl FrameworkSpec {
    /// Create a registry entry
    pub fn new(name: &str, css: &str, min_css: &str) -> Self {
        Self {
            name: name.to_string(),
            css: PathBuf::from(css),
            min_css: PathBuf::from(min_css),
        }
    }

    /// Location of the unminified stylesheet under `modules_dir`
    pub fn css_path(&self, modules_dir: &Path) -> PathBuf {
        modules_dir.join(&self.css)
    }

    /// Location of the minified stylesheet under `modules_dir`
    pub fn min_css_path(&self, modules_dir: &Path) -> PathBuf {
        modules_dir.join(&self.min_css)
    }
}

/// Frameworks compared when the config file lists none.
///
/// Paths point into the npm packages' `dist` layouts.
pub fn default_registry() -> Vec<FrameworkSpec> {
    vec![
        FrameworkSpec::new(
            "bootstrap",
            "bootstrap/dist/css/bootstrap.css",
            "bootstrap/dist/css/bootstrap.min.css",
        ),
        FrameworkSpec::new("bulma", "bulma/css/bulma.css", "bulma/css/bulma.min.css"),
        FrameworkSpec::new(
            "foundation",
            "foundation-sites/dist/css/foundation.css",
            "foundation-sites/dist/css/foundation.min.css",
        ),
        FrameworkSpec::new(
            "tachyons",
            "tachyons/css/tachyons.css",
            "tachyons/css/tachyons.min.css",
        ),
        FrameworkSpec::new(
            "milligram",
            "milligram/dist/milligram.css",
            "milligram/dist/milligram.min.css",
        ),
    ]
}
