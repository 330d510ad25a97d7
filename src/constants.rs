//! Constants used throughout the extfork application

/// Default template repository to fork
pub const DEFAULT_TEMPLATE_REPO: &str = "https://github.com/cline/cline.git";

/// Identifying token baked into the default template
pub const DEFAULT_SOURCE_TOKEN: &str = "cline";

/// Legacy identifiers in the default template that map to the raw project name
pub const DEFAULT_LEGACY_LITERALS: &[&str] = &["saoudrizwan", "claude-dev"];

/// Path substrings that are never processed or renamed
pub const DEFAULT_IGNORE_SUBSTRINGS: &[&str] =
    &[".git", "node_modules", "dist", ".DS_Store"];

/// Extensions of files that get the full code-rewrite pass sequence;
/// everything else is treated as plain text
pub const CODE_EXTENSIONS: &[&str] = &[
    "ts", "tsx", "js", "jsx", "mjs", "cjs", "json", "jsonc", "html", "css", "scss",
    "yaml", "yml", "xml", "sh",
];

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
