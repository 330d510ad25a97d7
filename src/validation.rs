use regex::Regex;

use crate::error::{Error, Result};

/// Checks a project name before the rename engine ever sees it.
///
/// The engine itself performs no validation; names end up in package
/// manifests, identifiers and paths, so the accepted alphabet is
/// deliberately narrow: lowercase kebab-case.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::ValidationError("project name must not be empty".to_string()));
    }

    let pattern = Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$")?;
    if !pattern.is_match(name) {
        return Err(Error::ValidationError(format!(
            "invalid project name '{name}': use lowercase letters, digits and single hyphens (e.g. 'my-app')"
        )));
    }

    Ok(())
}
