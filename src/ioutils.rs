use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::dialoguer::confirm;
use crate::error::{Error, Result};

/// Converts a path to a string slice, erroring on invalid Unicode.
pub fn path_to_str<P: AsRef<Path>>(path: &P) -> Result<&str> {
    path.as_ref().to_str().ok_or_else(|| {
        Error::Other(anyhow::anyhow!(
            "Path '{}' contains invalid Unicode characters",
            path.as_ref().display()
        ))
    })
}

/// Ensures the output directory is safe to write to.
///
/// An existing directory is only removed when `--force` was given and the
/// user confirmed (or confirmations are skipped).
pub fn prepare_output_dir<P: AsRef<Path>>(
    output_dir: P,
    force: bool,
    skip_confirm: bool,
) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() {
        if !force {
            return Err(Error::OutputDirectoryExistsError {
                output_dir: output_dir.display().to_string(),
            });
        }
        let replace = confirm(
            skip_confirm,
            format!("Directory '{}' already exists. Replace it?", output_dir.display()),
        )?;
        if !replace {
            return Err(Error::OutputDirectoryExistsError {
                output_dir: output_dir.display().to_string(),
            });
        }
        std::fs::remove_dir_all(output_dir)?;
    }
    Ok(output_dir.to_path_buf())
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Copies a directory tree, creating the destination as needed.
pub fn copy_dir_all<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<()> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    for entry in WalkDir::new(source) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source).map_err(|e| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' is not under '{}': {e}",
                entry.path().display(),
                source.display()
            ))
        })?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &target).map(|_| ()).map_err(Error::IoError)?;
        }
    }
    Ok(())
}
