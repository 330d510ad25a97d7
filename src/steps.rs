use log::info;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Runs an external build step with an explicit working directory.
///
/// The directory is handed to the child process; the parent's current
/// directory is never changed.
///
/// # Arguments
/// * `working_dir` - Directory the step runs in
/// * `program` - Executable name
/// * `args` - Arguments passed to the executable
///
/// # Notes
/// - The step inherits stdout/stderr so build output stays visible
/// - A non-zero exit status is treated as an error
pub fn run_step<P: AsRef<Path>>(working_dir: P, program: &str, args: &[&str]) -> Result<()> {
    let command = if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    };
    info!("Running '{command}' in '{}'", working_dir.as_ref().display());

    let status = Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        return Err(Error::CommandExecutionError { command, status });
    }

    Ok(())
}

/// Installs the scaffolded extension's npm dependencies.
pub fn install_dependencies<P: AsRef<Path>>(project_dir: P) -> Result<()> {
    run_step(project_dir, "npm", &["install"])
}

/// Packages the extension into an installable .vsix artifact.
pub fn package_extension<P: AsRef<Path>>(project_dir: P) -> Result<()> {
    run_step(project_dir, "npx", &["vsce", "package"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    #[cfg(unix)]
    fn successful_steps_return_ok() {
        let dir = TempDir::new().unwrap();
        run_step(dir.path(), "true", &[]).unwrap();
    }

    #[test]
    #[cfg(unix)]
    fn failing_steps_report_the_command() {
        let dir = TempDir::new().unwrap();
        let err = run_step(dir.path(), "false", &[]).unwrap_err();
        match err {
            Error::CommandExecutionError { command, .. } => assert_eq!(command, "false"),
            other => panic!("Expected CommandExecutionError, got {other}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn steps_run_in_the_given_directory() {
        let dir = TempDir::new().unwrap();
        run_step(dir.path(), "touch", &["marker"]).unwrap();
        assert!(dir.path().join("marker").exists());
    }
}
