use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;

use crate::constants::DEFAULT_IGNORE_SUBSTRINGS;
use crate::error::Result;
use crate::ioutils::path_to_str;

/// Builds the ignore matcher for a target tree.
///
/// Every default and caller-supplied substring becomes a pair of glob
/// patterns rooted at the tree, so that any path component containing the
/// substring is excluded together with everything beneath it.
pub fn build_ignore_set<P: AsRef<Path>>(root: P, extra: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    let root = root.as_ref();

    let substrings = DEFAULT_IGNORE_SUBSTRINGS
        .iter()
        .map(|substring| substring.to_string())
        .chain(extra.iter().cloned());

    for substring in substrings {
        for pattern in
            [format!("**/*{substring}*"), format!("**/*{substring}*/**")]
        {
            let rooted_pattern = root.join(&pattern);
            debug!("Adding ignore pattern: {} to globset", rooted_pattern.display());
            builder.add(Glob::new(path_to_str(&rooted_pattern)?)?);
        }
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn matches_default_ignore_components() {
        let root = PathBuf::from("/work/tree");
        let ignore = build_ignore_set(&root, &[]).unwrap();

        assert!(ignore.is_match(root.join("node_modules")));
        assert!(ignore.is_match(root.join("node_modules/dep/index.js")));
        assert!(ignore.is_match(root.join(".git")));
        assert!(ignore.is_match(root.join("packages/core/.git/config")));
        assert!(ignore.is_match(root.join("dist/extension.js")));
        assert!(ignore.is_match(root.join("assets/.DS_Store")));
    }

    #[test]
    fn does_not_match_regular_sources() {
        let root = PathBuf::from("/work/tree");
        let ignore = build_ignore_set(&root, &[]).unwrap();

        assert!(!ignore.is_match(root.join("src/extension.ts")));
        assert!(!ignore.is_match(root.join("package.json")));
        assert!(!ignore.is_match(root.join("src/core/provider.ts")));
    }

    #[test]
    fn component_containment_is_substring_based() {
        let root = PathBuf::from("/work/tree");
        let ignore = build_ignore_set(&root, &[]).unwrap();

        // Components merely containing a pattern are excluded too.
        assert!(ignore.is_match(root.join("old-dist-backup/file.ts")));
    }

    #[test]
    fn honors_caller_supplied_substrings() {
        let root = PathBuf::from("/work/tree");
        let ignore =
            build_ignore_set(&root, &["generated".to_string()]).unwrap();

        assert!(ignore.is_match(root.join("src/generated/schema.ts")));
        assert!(ignore.is_match(root.join("src/generated-types/api.ts")));
        assert!(!ignore.is_match(root.join("src/general/helpers.ts")));
    }

    #[test]
    fn paths_above_the_root_never_match() {
        let root = PathBuf::from("/home/dist-builds/tree");
        let ignore = build_ignore_set(&root, &[]).unwrap();

        // The offending component sits outside the rooted patterns.
        assert!(!ignore.is_match(root.join("src/extension.ts")));
    }
}
