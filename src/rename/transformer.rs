use globset::GlobSet;
use log::{debug, info};
use std::path::Path;

use crate::error::Result;

use super::paths::{rename_directories, rename_file};
use super::rewriter::ContentRewriter;
use super::rules::{ProjectName, RenameRules};
use super::walker::collect_files;

/// Runs the rename phases over a cloned template tree, in place.
pub struct ProjectTransformer<'a> {
    rules: &'a RenameRules,
    project: &'a ProjectName,
    ignore: &'a GlobSet,
}

impl<'a> ProjectTransformer<'a> {
    pub fn new(
        rules: &'a RenameRules,
        project: &'a ProjectName,
        ignore: &'a GlobSet,
    ) -> Self {
        Self { rules, project, ignore }
    }

    /// Rewrites file contents, then renames files, then renames directories
    /// deepest first. The first error aborts the whole transform.
    ///
    /// The file set is captured before any rename and never re-enumerated:
    /// import paths that point at renamed files stay consistent only because
    /// the content passes and the path renamer derive the same replacement
    /// forms from the same rules.
    pub fn transform<P: AsRef<Path>>(&self, root: P) -> Result<()> {
        let root = root.as_ref();
        let files = collect_files(root, self.ignore)?;

        info!("Starting file processing");

        let rewriter = ContentRewriter::new(self.rules, self.project)?;
        let mut rewritten = 0usize;
        for file in &files {
            if rewriter.rewrite_file(file)? {
                rewritten += 1;
            }
        }
        debug!("Rewrote {rewritten} of {} files", files.len());

        for file in &files {
            rename_file(file, self.rules, self.project)?;
        }

        rename_directories(root, self.ignore, self.rules, self.project)?;

        info!("All files processed successfully");
        Ok(())
    }
}
