//! Test fixture helpers for creating benchmark projects

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Stylesheet the fake build tool emits for every successful build
pub const BUILT_CSS: &str = ".btn {\n  color: red;\n}\n\n.card {\n  background-color: white;\n}\n";

/// Fake build tool: accepts the `--config/--output/--input` contract and fails
/// for any configuration whose path contains "broken"
pub const FAKE_BUILDER_SCRIPT: &str = r#"#!/bin/sh
while [ $# -gt 0 ]; do
  case "$1" in
    --config) config="$2"; shift 2 ;;
    --output) output="$2"; shift 2 ;;
    --input) input="$2"; shift 2 ;;
    *) shift ;;
  esac
done
case "$config" in
  *broken*) echo "Error: cannot load $config" >&2; exit 1 ;;
esac
[ -f "$input" ] || { echo "missing input $input" >&2; exit 3; }
printf '.btn {\n  color: red;\n}\n\n.card {\n  background-color: white;\n}\n' > "$output"
"#;

/// A scratch project laid out like a real benchmark checkout
///
/// ```text
/// <tmp>/configs/<name>...      build configurations
/// <tmp>/src/input.css          source stylesheet
/// <tmp>/node_modules/pure/...  one pre-built framework
/// <tmp>/fake-builder.sh        run through `sh`
/// <tmp>/.css-bench.toml        wires all of the above together
/// <tmp>/output/                benchmark output
/// ```
pub struct BenchProject {
    /// Keeps the directory alive
    pub temp: TempDir,
    /// Configuration directory
    pub config_dir: PathBuf,
    /// Source stylesheet
    pub css_path: PathBuf,
    /// Framework package root
    pub modules_dir: PathBuf,
    /// Fake build tool script
    pub builder_script: PathBuf,
    /// Generated config file
    pub config_file: PathBuf,
    /// Output directory
    pub out_dir: PathBuf,
}

impl BenchProject {
    /// Create a project with one empty configuration file per name
    pub fn new(configs: &[&str]) -> anyhow::Result<Self> {
        let temp = TempDir::new()?;
        let root = temp.path();

        let config_dir = root.join("configs");
        fs::create_dir_all(&config_dir)?;
        for name in configs {
            fs::write(config_dir.join(name), "module.exports = { content: [] }\n")?;
        }

        let css_path = root.join("src").join("input.css");
        fs::create_dir_all(root.join("src"))?;
        fs::write(&css_path, "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n")?;

        let modules_dir = root.join("node_modules");
        install_framework(&modules_dir, "pure", "p {\n  margin: 0;\n}\n", "p{margin:0}")?;

        let builder_script = root.join("fake-builder.sh");
        fs::write(&builder_script, FAKE_BUILDER_SCRIPT)?;

        let out_dir = root.join("output");
        let config_file = root.join(".css-bench.toml");
        fs::write(
            &config_file,
            format!(
                r#"out-dir = "{out}"
modules-dir = "{modules}"

[builder]
program = "sh"
args = ["{script}"]

[[framework]]
name = "pure"
css = "pure/pure.css"
min-css = "pure/pure.min.css"
"#,
                out = out_dir.display(),
                modules = modules_dir.display(),
                script = builder_script.display(),
            ),
        )?;

        Ok(Self {
            temp,
            config_dir,
            css_path,
            modules_dir,
            builder_script,
            config_file,
            out_dir,
        })
    }

    /// Project root
    pub fn root(&self) -> &Path {
        self.temp.path()
    }
}

/// Install a pre-built framework as `<modules>/<name>/<name>.css` and `.min.css`
pub fn install_framework(
    modules_dir: &Path,
    name: &str,
    css: &str,
    min_css: &str,
) -> anyhow::Result<()> {
    let dir = modules_dir.join(name);
    fs::create_dir_all(&dir)?;
    fs::write(dir.join(format!("{name}.css")), css)?;
    fs::write(dir.join(format!("{name}.min.css")), min_css)?;
    Ok(())
}

/// Read every file in `dir` into a sorted list of (name, bytes)
pub fn snapshot_dir(dir: &Path) -> anyhow::Result<Vec<(String, Vec<u8>)>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        files.push((
            entry.file_name().to_string_lossy().into_owned(),
            fs::read(entry.path())?,
        ));
    }
    files.sort();
    Ok(files)
}
