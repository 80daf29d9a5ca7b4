//! Configuration file loading

use super::file::ConfigFile;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::Path;

/// Handles loading configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the config file at `path`, or defaults when it does not exist
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use css_bench::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new(".css-bench.toml"))?;
    /// println!("Output directory: {:?}", config.out_dir);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(path, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<ConfigFile> {
        let contents = match fs.read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config file at {}, using defaults", path.display());
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        let config: ConfigFile = toml_edit::de::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file::CONFIG_FILE_NAME;
    use std::io;
    use std::path::PathBuf;

    // Mock FileSystem serving a single file
    struct MockFileSystem {
        file_content: Option<String>,
        should_fail_read: bool,
    }

    impl MockFileSystem {
        fn new() -> Self {
            Self {
                file_content: None,
                should_fail_read: false,
            }
        }

        fn with_content(content: &str) -> Self {
            Self {
                file_content: Some(content.to_string()),
                should_fail_read: false,
            }
        }

        fn with_read_error() -> Self {
            Self {
                file_content: None,
                should_fail_read: true,
            }
        }
    }

    impl FileSystem for MockFileSystem {
        fn read_to_string(&self, _path: &Path) -> io::Result<String> {
            if self.should_fail_read {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ));
            }
            self.file_content
                .clone()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file not found"))
        }

        fn read(&self, _path: &Path) -> io::Result<Vec<u8>> {
            unimplemented!()
        }

        fn write(&self, _path: &Path, _contents: impl AsRef<[u8]>) -> io::Result<()> {
            unimplemented!()
        }

        fn metadata(&self, _path: &Path) -> io::Result<std::fs::Metadata> {
            unimplemented!()
        }

        fn read_dir(&self, _path: &Path) -> io::Result<std::fs::ReadDir> {
            unimplemented!()
        }

        fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
            unimplemented!()
        }

        fn remove_dir_all(&self, _path: &Path) -> io::Result<()> {
            unimplemented!()
        }

        fn copy(&self, _from: &Path, _to: &Path) -> io::Result<u64> {
            unimplemented!()
        }
    }

    #[test]
    fn test_loader_loads_from_valid_toml() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);

        let toml_content = r#"
out-dir = "bench-out"
modules-dir = "../node_modules"

[builder]
program = "npx"
args = ["tailwindcss"]

[[framework]]
name = "bootstrap"
css = "bootstrap/dist/css/bootstrap.css"
min-css = "bootstrap/dist/css/bootstrap.min.css"
"#;
        std::fs::write(&config_path, toml_content).unwrap();

        let config = ConfigLoader::load(&config_path).unwrap();
        assert_eq!(config.out_dir, Some(PathBuf::from("bench-out")));
        assert_eq!(config.modules_dir, Some(PathBuf::from("../node_modules")));
        let builder = config.builder.unwrap();
        assert_eq!(builder.program, "npx");
        assert_eq!(builder.args, vec!["tailwindcss"]);
        let frameworks = config.frameworks.unwrap();
        assert_eq!(frameworks.len(), 1);
        assert_eq!(
            frameworks[0].min_css,
            PathBuf::from("bootstrap/dist/css/bootstrap.min.css")
        );
    }

    #[test]
    fn test_loader_with_missing_file_uses_defaults() {
        let fs = MockFileSystem::new();
        let config = ConfigLoader::load_with_fs(Path::new("/test/.css-bench.toml"), &fs).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_loader_with_invalid_toml_returns_error() {
        let fs = MockFileSystem::with_content("invalid { toml syntax");
        let result = ConfigLoader::load_with_fs(Path::new("/test/.css-bench.toml"), &fs);

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to parse"));
    }

    #[test]
    fn test_loader_with_permission_error_returns_error() {
        let fs = MockFileSystem::with_read_error();
        let result = ConfigLoader::load_with_fs(Path::new("/test/.css-bench.toml"), &fs);

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read"));
    }

    #[test]
    fn test_loader_handles_empty_file() {
        let fs = MockFileSystem::with_content("");
        let config = ConfigLoader::load_with_fs(Path::new("/test/.css-bench.toml"), &fs).unwrap();
        assert!(config.frameworks.is_none());
    }

    #[test]
    fn test_loader_rejects_invalid_values() {
        let fs = MockFileSystem::with_content("[builder]\nprogram = \"\"\n");
        let result = ConfigLoader::load_with_fs(Path::new("/test/.css-bench.toml"), &fs);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
        assert!(format!("{err:#}").contains("Builder program cannot be empty"));
    }
}
