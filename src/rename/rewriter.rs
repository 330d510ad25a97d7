use log::{debug, error};
use regex::{escape, Captures, Regex};
use std::fs;
use std::path::Path;

use crate::constants::CODE_EXTENSIONS;
use crate::error::Result;

use super::rules::{ProjectName, RenameRules};

/// One entry in the ordered pass table.
enum Pass {
    /// Plain global substitution with `$n` capture references.
    Substitute { pattern: Regex, replacement: String },
    /// Replaces token occurrences inside each match case-correspondingly,
    /// leaving the rest of the match intact.
    TokenAware { pattern: Regex },
}

/// Applies the ordered rename passes to file content.
///
/// The pass order is load-bearing: the specific, compound-identifier
/// patterns run before the generic whole-word ones, so that by the time the
/// generic passes run the compound forms are already resolved. Reordering
/// the table risks partial matches and double substitution.
pub struct ContentRewriter {
    passes: Vec<Pass>,
    plain: Regex,
    source_token: String,
    capitalized_token: String,
    upper_token: String,
    project: ProjectName,
}

impl ContentRewriter {
    pub fn new(rules: &RenameRules, project: &ProjectName) -> Result<Self> {
        let capitalized_token = rules.capitalized_token();
        let tok = escape(&rules.source_token);
        let cap = escape(&capitalized_token);
        let safe = &project.safe;
        let pascal = &project.capitalized;

        let mut passes = vec![
            // Declaration assignments collapse the embedded token to the
            // safe form, keeping prefix, suffix and the assignment shape.
            Pass::Substitute {
                pattern: Regex::new(&format!(r"\bconst (\w*)(?:{tok}|{cap})(\w*) ="))?,
                replacement: format!("const ${{1}}{safe}${{2}} ="),
            },
            // Lowercase token embedded in double-quoted literals.
            Pass::Substitute {
                pattern: Regex::new(&format!("\"([^\"\\n]*){tok}([^\"\\n]*)\""))?,
                replacement: format!("\"${{1}}{safe}${{2}}\""),
            },
            // Same for single-quoted literals.
            Pass::Substitute {
                pattern: Regex::new(&format!("'([^'\\n]*){tok}([^'\\n]*)'"))?,
                replacement: format!("'${{1}}{safe}${{2}}'"),
            },
            // The template's dotted ignore-file reference.
            Pass::Substitute {
                pattern: Regex::new(&format!(r"\.{tok}ignore"))?,
                replacement: format!(".{safe}ignore"),
            },
            // Async method declarations embedding the capitalized token.
            Pass::Substitute {
                pattern: Regex::new(&format!(r"\b(async\s+)([a-z]\w*){cap}([A-Z]\w*)"))?,
                replacement: format!("${{1}}${{2}}{pascal}${{3}}"),
            },
            // Member-access calls embedding the capitalized token.
            Pass::Substitute {
                pattern: Regex::new(&format!(r"\.([a-z]\w*){cap}([A-Z]\w*)"))?,
                replacement: format!(".${{1}}{pascal}${{2}}"),
            },
            // Any remaining camelCase-embedded identifier.
            Pass::Substitute {
                pattern: Regex::new(&format!(r"\b([a-z]\w*){cap}([A-Z]\w*)\b"))?,
                replacement: format!("${{1}}{pascal}${{2}}"),
            },
            // Whole words, by casing class.
            Pass::Substitute {
                pattern: Regex::new(&format!(r"\b{tok}\b"))?,
                replacement: safe.clone(),
            },
            Pass::Substitute {
                pattern: Regex::new(&format!(r"\b{cap}\b"))?,
                replacement: pascal.clone(),
            },
        ];

        // Legacy identifiers map to the raw project name wherever they occur.
        for literal in &rules.legacy_literals {
            passes.push(Pass::Substitute {
                pattern: Regex::new(&escape(literal))?,
                replacement: project.raw.clone(),
            });
        }

        // Import-style path literals: every token occurrence inside the
        // quotes is replaced, either casing.
        passes.push(Pass::TokenAware {
            pattern: Regex::new(&format!("\"[^\"\\n]*(?:{tok}|{cap})[^\"\\n]*\""))?,
        });
        passes.push(Pass::TokenAware {
            pattern: Regex::new(&format!("'[^'\\n]*(?:{tok}|{cap})[^'\\n]*'"))?,
        });
        // Bare token-led identifiers, case-sensitive on the leading letter.
        passes.push(Pass::TokenAware {
            pattern: Regex::new(&format!(r"\b(?:{tok}|{cap})\w*"))?,
        });
        // Import statements: the names list and the path are rewritten
        // together so the statement stays consistent with renamed files.
        passes.push(Pass::TokenAware {
            pattern: Regex::new(
                r#"import\s*\{[^}]*\}\s*from\s*(?:"[^"]*"|'[^']*')"#,
            )?,
        });

        Ok(Self {
            passes,
            plain: Regex::new(&format!("(?i){tok}"))?,
            source_token: rules.source_token.clone(),
            capitalized_token,
            upper_token: rules.upper_token(),
            project: project.clone(),
        })
    }

    /// Replaces token occurrences in `text` case-correspondingly.
    fn replace_tokens(&self, text: &str) -> String {
        text.replace(&self.capitalized_token, &self.project.capitalized)
            .replace(&self.source_token, &self.project.safe)
    }

    /// Runs the full ordered pass sequence over code-like content.
    pub fn rewrite_code(&self, content: &str) -> String {
        let mut content = content.to_string();
        for pass in &self.passes {
            content = match pass {
                Pass::Substitute { pattern, replacement } => {
                    pattern.replace_all(&content, replacement.as_str()).into_owned()
                }
                Pass::TokenAware { pattern } => pattern
                    .replace_all(&content, |caps: &Captures| {
                        self.replace_tokens(&caps[0])
                    })
                    .into_owned(),
            };
        }
        content
    }

    /// Single case-aware substitution for plain-text content.
    ///
    /// All-caps maps to the upper-cased project name, capitalized to the
    /// capitalized form, lowercase to the safe form. Any other casing is
    /// left alone.
    pub fn rewrite_plain(&self, content: &str) -> String {
        self.plain
            .replace_all(content, |caps: &Captures| {
                let matched = &caps[0];
                if matched == self.upper_token {
                    self.project.raw.to_uppercase()
                } else if matched == self.capitalized_token {
                    self.project.capitalized.clone()
                } else if matched == self.source_token {
                    self.project.safe.clone()
                } else {
                    matched.to_string()
                }
            })
            .into_owned()
    }

    /// Rewrites a file in place, choosing the pass set by content class.
    ///
    /// Returns whether the file changed. Files that are not valid UTF-8
    /// (icons, fonts, archives) are left untouched.
    pub fn rewrite_file<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            error!("Failed to read '{}': {e}", path.display());
            e
        })?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(_) => {
                debug!("Skipping non-UTF-8 file '{}'", path.display());
                return Ok(false);
            }
        };

        let rewritten = if is_code_file(path) {
            self.rewrite_code(&content)
        } else {
            self.rewrite_plain(&content)
        };

        if rewritten == content {
            return Ok(false);
        }

        debug!("Rewriting '{}'", path.display());
        fs::write(path, rewritten).map_err(|e| {
            error!("Failed to write '{}': {e}", path.display());
            e
        })?;
        Ok(true)
    }
}

/// Whether the path's extension marks it as code-like content.
pub fn is_code_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            CODE_EXTENSIONS.iter().any(|code| ext.eq_ignore_ascii_case(code))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rewriter() -> ContentRewriter {
        ContentRewriter::new(&RenameRules::default(), &ProjectName::new("my-app"))
            .unwrap()
    }

    #[test]
    fn token_free_content_is_untouched() {
        let input = "const fooBar = require(\"path\");\nexport class Widget {}\n";
        assert_eq!(rewriter().rewrite_code(input), input);
    }

    #[test]
    fn const_declarations_use_the_safe_form() {
        assert_eq!(
            rewriter().rewrite_code("const clineIgnorePattern = x;"),
            "const myappIgnorePattern = x;"
        );
    }

    #[test]
    fn double_quoted_literals_keep_prefix_and_suffix() {
        assert_eq!(
            rewriter().rewrite_code(r#"throw new Error("clineignore_error")"#),
            r#"throw new Error("myappignore_error")"#
        );
    }

    #[test]
    fn single_quoted_literals_keep_prefix_and_suffix() {
        assert_eq!(
            rewriter().rewrite_code("register('vscode-cline-settings')"),
            "register('vscode-myapp-settings')"
        );
    }

    #[test]
    fn dotted_ignore_reference_outside_quotes() {
        assert_eq!(
            rewriter().rewrite_code("// see .clineignore for patterns"),
            "// see .myappignore for patterns"
        );
    }

    #[test]
    fn async_method_declarations() {
        assert_eq!(
            rewriter().rewrite_code("async getClineState(): Promise<void> {"),
            "async getMyAppState(): Promise<void> {"
        );
    }

    #[test]
    fn member_access_calls() {
        assert_eq!(
            rewriter().rewrite_code("await this.saveClineMessages()"),
            "await this.saveMyAppMessages()"
        );
    }

    #[test]
    fn camel_case_embedded_identifiers() {
        assert_eq!(
            rewriter().rewrite_code("let version = oldClineVersion;"),
            "let version = oldMyAppVersion;"
        );
    }

    #[test]
    fn whole_words_by_casing_class() {
        assert_eq!(rewriter().rewrite_code("cline"), "myapp");
        assert_eq!(rewriter().rewrite_code("Cline"), "MyApp");
    }

    #[test]
    fn legacy_literals_become_the_raw_name() {
        assert_eq!(
            rewriter().rewrite_code("\"publisher\": \"saoudrizwan\","),
            "\"publisher\": \"my-app\","
        );
        assert_eq!(
            rewriter().rewrite_code("\"name\": \"claude-dev\","),
            "\"name\": \"my-app\","
        );
    }

    #[test]
    fn import_paths_replace_every_occurrence() {
        let input = r#"import { ClineProvider } from "./core/webview/ClineProvider""#;
        let expected = r#"import { MyAppProvider } from "./core/webview/MyAppProvider""#;
        assert_eq!(rewriter().rewrite_code(input), expected);
    }

    #[test]
    fn import_statements_with_single_quotes() {
        let input = "import { clineEnvConfig } from './config/cline-env'";
        let expected = "import { myappEnvConfig } from './config/myapp-env'";
        assert_eq!(rewriter().rewrite_code(input), expected);
    }

    #[test]
    fn path_literals_with_repeated_tokens() {
        assert_eq!(
            rewriter().rewrite_code(r#"require("cline/cline.ts")"#),
            r#"require("myapp/myapp.ts")"#
        );
    }

    #[test]
    fn token_led_identifiers_follow_the_leading_letter() {
        assert_eq!(rewriter().rewrite_code("clineProvider"), "myappProvider");
        assert_eq!(rewriter().rewrite_code("ClineProvider"), "MyAppProvider");
    }

    #[test]
    fn second_rewrite_is_a_noop() {
        let input = concat!(
            "import { ClineProvider } from \"./core/ClineProvider\"\n",
            "const clineIgnorePattern = /x/;\n",
            "await this.saveClineMessages()\n",
            "new ClineProvider(cline)\n",
        );
        let rewriter = rewriter();
        let once = rewriter.rewrite_code(input);
        let twice = rewriter.rewrite_code(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn all_caps_stays_in_code_content() {
        // The code passes are case-sensitive; all-caps is a plain-text concern.
        assert_eq!(rewriter().rewrite_code("CLINE"), "CLINE");
    }

    #[test]
    fn plain_rewrite_is_case_aware() {
        let rewriter = rewriter();
        assert_eq!(
            rewriter.rewrite_plain("# Cline\ncline is a coding agent. CLINE ROCKS."),
            "# MyApp\nmyapp is a coding agent. MY-APP ROCKS."
        );
    }

    #[test]
    fn plain_rewrite_leaves_mixed_casing_alone() {
        assert_eq!(rewriter().rewrite_plain("cLine"), "cLine");
    }

    #[test]
    fn classifies_files_by_extension() {
        assert!(is_code_file("src/extension.ts"));
        assert!(is_code_file("package.json"));
        assert!(is_code_file("build.sh"));
        assert!(!is_code_file("README.md"));
        assert!(!is_code_file("NOTICE"));
        assert!(!is_code_file("icon.png"));
    }

    #[test]
    fn rewrite_file_reports_changes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("provider.ts");
        fs::write(&path, "new ClineProvider()").unwrap();

        let rewriter = rewriter();
        assert!(rewriter.rewrite_file(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "new MyAppProvider()");

        // Already rewritten: nothing left to change.
        assert!(!rewriter.rewrite_file(&path).unwrap());
    }

    #[test]
    fn rewrite_file_skips_non_utf8_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("icon.png");
        let bytes = [0x89u8, 0x50, 0x4e, 0x47, 0xff, 0xfe, 0x00, 0x01];
        fs::write(&path, bytes).unwrap();

        assert!(!rewriter().rewrite_file(&path).unwrap());
        assert_eq!(fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn custom_token_tables_drive_the_passes() {
        let rules = RenameRules {
            source_token: "widget".to_string(),
            legacy_literals: vec!["acme-corp".to_string()],
        };
        let rewriter =
            ContentRewriter::new(&rules, &ProjectName::new("gadget-hub")).unwrap();

        assert_eq!(
            rewriter.rewrite_code("this.saveWidgetState(widget)"),
            "this.saveGadgetHubState(gadgethub)"
        );
        assert_eq!(rewriter.rewrite_code("acme-corp"), "gadget-hub");
    }
}
