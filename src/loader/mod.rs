use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::loader::interface::TemplateLoader;
use crate::loader::{git::GitLoader, local::LocalLoader};

pub mod git;
pub mod interface;
pub mod local;

#[derive(Debug)]
pub enum TemplateSource {
    /// Local filesystem template path
    FileSystem(PathBuf),
    /// Git repository URL (HTTPS or SSH)
    Git(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Git(repo) => write!(f, "git repository: '{repo}'"),
        }
    }
}

/// Loads the template into `dest`, cloning or copying as appropriate.
///
/// # Arguments
/// * `s` - String containing path or git URL
/// * `dest` - Directory the template tree is materialized into
///
/// # Returns
/// * `Result<PathBuf>` - Path to the loaded template tree
pub fn get_template<P: AsRef<Path>>(s: &str, dest: P) -> Result<PathBuf> {
    let source = if GitLoader::<&str>::is_git_url(s) {
        TemplateSource::Git(s.to_string())
    } else {
        TemplateSource::FileSystem(PathBuf::from(s))
    };
    log::debug!("Loading template from {source}");

    match source {
        TemplateSource::Git(repo) => {
            GitLoader::new(repo, dest.as_ref().to_path_buf()).load()
        }
        TemplateSource::FileSystem(path) => {
            LocalLoader::new(path, dest.as_ref().to_path_buf()).load()
        }
    }
}
