use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

use crate::constants::{exit_codes, verbosity, DEFAULT_TEMPLATE_REPO};

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for extfork.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// New project name (kebab-case, e.g. `my-app`).
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Destination directory for the fork. Defaults to `./<NAME>`.
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Template directory or Git repository to fork.
    #[arg(short, long, default_value = DEFAULT_TEMPLATE_REPO)]
    pub template: String,

    /// Force overwrite of an existing output directory.
    #[arg(short, long)]
    pub force: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Rename-rules file (JSON or YAML) overriding the built-in token table.
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Additional path substrings to exclude from processing.
    #[arg(long = "ignore", value_name = "SUBSTRING")]
    pub ignore: Vec<String>,

    /// Skip the `npm install` step.
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Skip the `vsce package` step.
    #[arg(long = "skip-package")]
    pub skip_package: bool,

    /// Keep the output directory when scaffolding fails.
    #[arg(long = "keep-on-failure")]
    pub keep_on_failure: bool,

    /// Answer yes to every confirmation prompt.
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        use crate::constants::verbosity;
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_args() {
        let args = Args::parse_from(["extfork", "my-app"]);
        assert_eq!(args.name, "my-app");
        assert_eq!(args.output_dir, None);
        assert_eq!(args.template, DEFAULT_TEMPLATE_REPO);
        assert!(!args.force);
        assert!(!args.skip_install);
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_from([
            "extfork",
            "my-app",
            "forks/my-app",
            "--template",
            "https://github.com/user/template.git",
            "--force",
            "-vvv",
            "--rules",
            "rules.json",
            "--ignore",
            "fixtures",
            "--ignore",
            "coverage",
            "--skip-install",
            "--skip-package",
            "--keep-on-failure",
            "--yes",
        ]);
        assert_eq!(args.name, "my-app");
        assert_eq!(args.output_dir, Some(PathBuf::from("forks/my-app")));
        assert_eq!(args.template, "https://github.com/user/template.git");
        assert!(args.force);
        assert_eq!(args.verbose, 3);
        assert_eq!(args.rules, Some(PathBuf::from("rules.json")));
        assert_eq!(args.ignore, vec!["fixtures", "coverage"]);
        assert!(args.skip_install);
        assert!(args.skip_package);
        assert!(args.keep_on_failure);
        assert!(args.yes);
    }
}
