use globset::GlobSet;
use log::{debug, error};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::rules::{ProjectName, RenameRules};
use super::walker::collect_dirs_deepest_first;

/// Substitutes token occurrences in a single path component: capitalized to
/// the capitalized form, lowercase to the safe form.
fn substitute_name(name: &str, rules: &RenameRules, project: &ProjectName) -> String {
    name.replace(&rules.capitalized_token(), &project.capitalized)
        .replace(&rules.source_token, &project.safe)
}

/// Renames a file whose name embeds the source token, staying within the
/// same parent directory. Returns the resulting path, unchanged when the
/// name holds no token.
pub fn rename_file<P: AsRef<Path>>(
    path: P,
    rules: &RenameRules,
    project: &ProjectName,
) -> Result<PathBuf> {
    let path = path.as_ref();
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return Ok(path.to_path_buf());
    };

    let new_name = substitute_name(name, rules, project);
    if new_name == name {
        return Ok(path.to_path_buf());
    }

    let target = path.with_file_name(&new_name);
    if target.exists() {
        return Err(Error::RenameCollisionError {
            source_path: path.display().to_string(),
            target: target.display().to_string(),
        });
    }

    debug!("Renaming '{}' -> '{}'", path.display(), target.display());
    fs::rename(path, &target).map_err(|e| {
        error!("Failed to rename '{}': {e}", path.display());
        e
    })?;
    Ok(target)
}

/// Renames every directory under `root` whose base name embeds the source
/// token, strictly deepest first so parent renames never leave a pending
/// child with a stale path.
pub fn rename_directories<P: AsRef<Path>>(
    root: P,
    ignore: &GlobSet,
    rules: &RenameRules,
    project: &ProjectName,
) -> Result<()> {
    for dir in collect_dirs_deepest_first(root, ignore)? {
        let Some(name) = dir.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let new_name = substitute_name(name, rules, project);
        if new_name == name {
            continue;
        }

        let target = dir.with_file_name(&new_name);
        if target.exists() {
            return Err(Error::RenameCollisionError {
                source_path: dir.display().to_string(),
                target: target.display().to_string(),
            });
        }

        debug!("Renaming '{}' -> '{}'", dir.display(), target.display());
        fs::rename(&dir, &target).map_err(|e| {
            error!("Failed to rename '{}': {e}", dir.display());
            e
        })?;
    }
    Ok(())
}
