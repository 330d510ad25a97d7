use globset::GlobSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::Result;

/// Collects every regular file under `root`, skipping ignored components.
///
/// Directories matching the ignore set are not descended into. Entries are
/// visited in sorted directory-listing order, so repeated runs over the same
/// tree enumerate identically.
pub fn collect_files<P: AsRef<Path>>(root: P, ignore: &GlobSet) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root).sort_by_file_name().into_iter();
    for entry in walker.filter_entry(|entry| !ignore.is_match(entry.path())) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.path().to_path_buf());
        }
    }
    Ok(files)
}

/// Collects every directory under `root`, deepest first.
///
/// Deepest-first ordering lets callers rename directories in place without
/// ever invalidating a still-pending child path.
pub fn collect_dirs_deepest_first<P: AsRef<Path>>(
    root: P,
    ignore: &GlobSet,
) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    let walker = WalkDir::new(root).min_depth(1).sort_by_file_name().into_iter();
    for entry in walker.filter_entry(|entry| !ignore.is_match(entry.path())) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            dirs.push(entry.path().to_path_buf());
        }
    }
    dirs.sort_by_key(|dir| std::cmp::Reverse(dir.components().count()));
    Ok(dirs)
}
