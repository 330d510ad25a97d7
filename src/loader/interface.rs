use crate::error::Result;
use std::path::PathBuf;

/// Trait for loading extension templates from different sources.
pub trait TemplateLoader {
    /// Materializes the template into its destination directory.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path to the loaded template tree
    fn load(&self) -> Result<PathBuf>;
}
