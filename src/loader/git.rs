use log::debug;
use std::path::PathBuf;
use url::Url;

use crate::error::{Error, Result};
use crate::loader::interface::TemplateLoader;

/// Loader for templates from git repositories.
pub struct GitLoader<S: AsRef<str>> {
    repo: S,
    dest: PathBuf,
}

impl<S: AsRef<str>> GitLoader<S> {
    /// Creates a new GitLoader instance.
    pub fn new(repo: S, dest: PathBuf) -> Self {
        Self { repo, dest }
    }

    /// Determines if a string represents a git repository URL.
    ///
    /// Supports:
    /// - HTTPS URLs: https://github.com/user/repo
    /// - Git URLs: git://github.com/user/repo
    /// - SSH URLs: git@github.com:user/repo
    /// - SSH URLs with explicit protocol: ssh://git@github.com/user/repo
    pub fn is_git_url(s: &str) -> bool {
        // Try to parse as standard URL first
        if let Ok(url) = Url::parse(s) {
            return matches!(url.scheme(), "http" | "https" | "git" | "ssh");
        }

        // Check for SSH format: git@host:path or user@host:path
        if s.contains('@') && s.contains(':') && !s.contains("://") {
            if let Some(at_pos) = s.find('@') {
                if let Some(colon_pos) = s.rfind(':') {
                    if colon_pos > at_pos {
                        let user_part = &s[..at_pos];
                        let host_part = &s[at_pos + 1..colon_pos];
                        let path_part = &s[colon_pos + 1..];

                        // The user part must be non-empty, the host must look
                        // like a hostname, and the path like a repository.
                        return !user_part.is_empty()
                            && !host_part.is_empty()
                            && !path_part.is_empty()
                            && (host_part.contains('.')
                                || host_part == "github.com"
                                || host_part == "gitlab.com"
                                || host_part == "bitbucket.org")
                            && path_part.contains('/');
                    }
                }
            }
        }

        false
    }
}

impl<S: AsRef<str>> TemplateLoader for GitLoader<S> {
    /// Clones the template repository into the destination directory.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path to the cloned tree
    fn load(&self) -> Result<PathBuf> {
        let repo_url = self.repo.as_ref();

        debug!("Cloning repository '{repo_url}' to '{}'", self.dest.display());

        // Set up authentication callbacks
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, _allowed_types| {
            git2::Cred::ssh_key(
                username_from_url.unwrap_or("git"),
                None,
                std::path::Path::new(&format!(
                    "{}/.ssh/id_rsa",
                    std::env::var("HOME").unwrap_or_default()
                )),
                None,
            )
        });

        // Configure fetch options with callbacks
        let mut fetch_opts = git2::FetchOptions::new();
        fetch_opts.remote_callbacks(callbacks);

        // Set up and perform clone
        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_opts);

        match builder.clone(repo_url, &self.dest) {
            Ok(_) => Ok(self.dest.clone()),
            Err(e) => Err(Error::Git2Error(e)),
        }
    }
}
