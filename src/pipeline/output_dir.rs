//! Ephemeral output directory shared by all items of a run

use std::io;
use std::path::{Component, Path, PathBuf};

use crate::infra::FileSystem;

use super::error::PipelineError;

/// Remove `path` with everything in it and recreate it empty.
///
/// Called once before any item starts so reruns never see stale artifacts.
pub fn reset_output_dir<FS: FileSystem>(fs: &FS, path: &Path) -> Result<(), PipelineError> {
    match fs.remove_dir_all(path) {
        Ok(()) => log::debug!("cleared output directory {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(PipelineError::io(path, e)),
    }
    fs.create_dir_all(path)
        .map_err(|e| PipelineError::io(path, e))
}

/// Find the first `protected` path that resetting `out_dir` would delete.
///
/// Paths are compared after resolving `.`, `..` and symlinks, so `./configs`,
/// `configs/` and a link to `configs` all collide with `configs`. Paths that
/// do not exist yet are resolved through their deepest existing ancestor.
pub fn output_dir_conflict<'a>(
    out_dir: &Path,
    protected: &[&'a Path],
) -> io::Result<Option<&'a Path>> {
    let out = resolve(out_dir)?;
    for &path in protected {
        if resolve(path)?.starts_with(&out) {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

fn resolve(path: &Path) -> io::Result<PathBuf> {
    let mut lexical = PathBuf::new();
    for component in std::path::absolute(path)?.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                lexical.pop();
            }
            other => lexical.push(other),
        }
    }

    let mut missing = Vec::new();
    let mut existing = lexical.as_path();
    loop {
        match existing.canonicalize() {
            Ok(mut resolved) => {
                resolved.extend(missing.iter().rev());
                return Ok(resolved);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                match (existing.file_name(), existing.parent()) {
                    (Some(name), Some(parent)) => {
                        missing.push(name.to_os_string());
                        existing = parent;
                    }
                    _ => return Ok(lexical),
                }
            }
            Err(e) => return Err(e),
        }
    }
}
