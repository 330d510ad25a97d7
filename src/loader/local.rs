use crate::error::{Error, Result};
use crate::ioutils::copy_dir_all;
use crate::loader::interface::TemplateLoader;
use std::path::PathBuf;

/// Loader for templates from the local filesystem.
pub struct LocalLoader<P: AsRef<std::path::Path>> {
    path: P,
    dest: PathBuf,
}
impl<P: AsRef<std::path::Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(path: P, dest: PathBuf) -> Self {
        Self { path, dest }
    }
}
impl<P: AsRef<std::path::Path>> TemplateLoader for LocalLoader<P> {
    /// Copies a local template tree into the destination directory.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path to the copied tree
    fn load(&self) -> Result<PathBuf> {
        let path = self.path.as_ref();
        if !path.exists() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: path.display().to_string(),
            });
        }
        copy_dir_all(path, &self.dest)?;

        Ok(self.dest.clone())
    }
}
