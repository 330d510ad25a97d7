use cruet::case::pascal::to_pascal_case;
use serde::Deserialize;
use std::path::Path;

use crate::constants::{DEFAULT_LEGACY_LITERALS, DEFAULT_SOURCE_TOKEN};
use crate::error::Result;

/// The literal-to-derived-form table driving the rewrite passes.
///
/// The tokens are configuration rather than inline constants so the engine
/// stays testable independently of the template it was written for.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenameRules {
    /// Lowercase identifying token baked into the template.
    pub source_token: String,
    /// Legacy identifiers replaced outright by the raw project name,
    /// in replacement order.
    pub legacy_literals: Vec<String>,
}

impl Default for RenameRules {
    fn default() -> Self {
        Self {
            source_token: DEFAULT_SOURCE_TOKEN.to_string(),
            legacy_literals: DEFAULT_LEGACY_LITERALS
                .iter()
                .map(|literal| literal.to_string())
                .collect(),
        }
    }
}

impl RenameRules {
    /// Loads rules from a JSON or YAML file, chosen by extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&contents)?),
            _ => Ok(serde_json::from_str(&contents)?),
        }
    }

    /// Capitalized form of the source token ("cline" -> "Cline").
    pub fn capitalized_token(&self) -> String {
        to_pascal_case(&self.source_token)
    }

    /// All-caps form of the source token ("cline" -> "CLINE").
    pub fn upper_token(&self) -> String {
        self.source_token.to_uppercase()
    }
}

/// A project name with its derived forms.
///
/// The forms are computed once per run and reused across every pass, every
/// file and every rename, so the same source occurrence always maps to the
/// same replacement for a given casing class.
#[derive(Debug, Clone)]
pub struct ProjectName {
    /// The name as supplied, kebab-case by convention ("my-app").
    pub raw: String,
    /// Separators stripped, lowercase ("myapp").
    pub safe: String,
    /// Each segment capitalized and concatenated ("MyApp").
    pub capitalized: String,
}

impl ProjectName {
    pub fn new(raw: &str) -> Self {
        let safe = raw
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        Self {
            raw: raw.to_string(),
            safe,
            capitalized: to_pascal_case(raw),
        }
    }
}
