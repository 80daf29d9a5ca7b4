//! Configuration for css-bench
//!
//! This module provides:
//! - .css-bench.toml config file support
//! - Resolution of file values against command-line overrides
//! - The registry of pre-built external frameworks

pub mod file;
pub mod loader;
pub mod registry;

pub use file::{BenchSettings, BuilderSettings, ConfigFile, Overrides, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
pub use registry::{default_registry, FrameworkSpec};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_name_constant_is_correct() {
        assert_eq!(CONFIG_FILE_NAME, ".css-bench.toml");
    }
}
