use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    cli::Args,
    error::Result,
    ignore::build_ignore_set,
    ioutils::prepare_output_dir,
    loader::get_template,
    rename::{
        rules::{ProjectName, RenameRules},
        transformer::ProjectTransformer,
    },
    steps::{install_dependencies, package_extension},
    validation::validate_project_name,
};

/// Main CLI runner that orchestrates the entire scaffolding workflow
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete scaffolding workflow
    pub fn run(self) -> Result<()> {
        // The rename core performs no name validation; rejecting bad names
        // is this caller's job.
        validate_project_name(&self.args.name)?;

        let rules = self.load_rules()?;
        let project = ProjectName::new(&self.args.name);
        debug!(
            "Derived forms for '{}': safe='{}', capitalized='{}'",
            project.raw, project.safe, project.capitalized
        );

        let output_dir =
            prepare_output_dir(self.output_dir(), self.args.force, self.args.yes)?;

        match self.scaffold(&rules, &project, &output_dir) {
            Ok(()) => {
                println!(
                    "Scaffolded '{}' successfully in {}.",
                    self.args.name,
                    output_dir.display()
                );
                Ok(())
            }
            Err(err) => {
                self.cleanup(&output_dir);
                Err(err)
            }
        }
    }

    /// Runs the phases that mutate the output directory.
    fn scaffold(
        &self,
        rules: &RenameRules,
        project: &ProjectName,
        output_dir: &Path,
    ) -> Result<()> {
        get_template(&self.args.template, output_dir)?;
        strip_git_metadata(output_dir)?;

        let ignore = build_ignore_set(output_dir, &self.args.ignore)?;
        ProjectTransformer::new(rules, project, &ignore).transform(output_dir)?;

        if self.args.skip_install {
            debug!("Skipping dependency installation");
        } else {
            install_dependencies(output_dir)?;
        }

        if self.args.skip_package {
            debug!("Skipping extension packaging");
        } else {
            package_extension(output_dir)?;
        }

        Ok(())
    }

    /// Removes the partially-created output directory after a failure, so a
    /// failed scaffold leaves nothing behind.
    fn cleanup(&self, output_dir: &Path) {
        if self.args.keep_on_failure {
            warn!(
                "Scaffolding failed; keeping '{}' for inspection",
                output_dir.display()
            );
            return;
        }
        if output_dir.exists() {
            warn!("Scaffolding failed; removing '{}'", output_dir.display());
            if let Err(err) = fs::remove_dir_all(output_dir) {
                warn!("Failed to remove '{}': {err}", output_dir.display());
            }
        }
    }

    fn output_dir(&self) -> PathBuf {
        self.args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.args.name))
    }

    fn load_rules(&self) -> Result<RenameRules> {
        match &self.args.rules {
            Some(path) => RenameRules::load(path),
            None => Ok(RenameRules::default()),
        }
    }
}

/// The cloned history belongs to the template, not the fork.
fn strip_git_metadata(output_dir: &Path) -> Result<()> {
    let git_dir = output_dir.join(".git");
    if git_dir.exists() {
        debug!("Removing '{}'", git_dir.display());
        fs::remove_dir_all(git_dir)?;
    }
    Ok(())
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
