//! Charm-style CLI prompts using cliclack

use crate::config::Framework;
use crate::error::Result as ScaffoldResult;
use crate::project::{Outcome, ProjectUpdater, Report};
use crate::prompt::Prompter;
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for a scaffolding run
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Target folder (defaults to the current directory)
    pub folder: Option<PathBuf>,

    /// Preset answer for the type checking question
    pub typescript: Option<bool>,

    /// Preset answer for the framework question
    pub framework: Option<Framework>,

    /// Auto-confirm the overwrite prompt (non-interactive mode)
    pub yes: bool,
}

/// [`Prompter`] backed by cliclack, skipping questions answered by flags
pub struct ClackPrompter {
    args: CreateArgs,
}

impl ClackPrompter {
    pub fn new(args: CreateArgs) -> Self {
        Self { args }
    }
}

impl Prompter for ClackPrompter {
    fn confirm_overwrite(&mut self) -> ScaffoldResult<bool> {
        if self.args.yes {
            cliclack::log::info("Replacing existing .eslintrc.* and .prettierrc.* (--yes)")?;
            return Ok(true);
        }

        cliclack::log::warning("We will replace your existing .eslintrc.* and .prettierrc.*")?;
        let confirm: bool = cliclack::confirm("Continue?")
            .initial_value(true)
            .interact()?;
        Ok(confirm)
    }

    fn use_type_checking(&mut self) -> ScaffoldResult<bool> {
        if let Some(typescript) = self.args.typescript {
            cliclack::log::info(format!(
                "TypeScript: {}",
                if typescript { "yes" } else { "no" }
            ))?;
            return Ok(typescript);
        }

        let typescript: bool = cliclack::confirm("Will you use TypeScript in this repo?")
            .initial_value(false)
            .interact()?;
        Ok(typescript)
    }

    fn select_framework(&mut self) -> ScaffoldResult<Framework> {
        if let Some(framework) = self.args.framework {
            cliclack::log::info(format!("Framework: {}", framework))?;
            return Ok(framework);
        }

        let mut select = cliclack::select("Which framework will you use?");
        for framework in Framework::ALL {
            select = select.item(framework, framework.display_name(), "");
        }
        let framework: Framework = select.initial_value(Framework::React).interact()?;
        Ok(framework)
    }

    fn info(&mut self, message: &str) -> ScaffoldResult<()> {
        cliclack::log::info(message)?;
        Ok(())
    }

    fn success(&mut self, message: &str) -> ScaffoldResult<()> {
        cliclack::log::success(message)?;
        Ok(())
    }
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("lint-scaffolder")?;

    // Step 1: Resolve and validate the target folder
    let folder = select_folder(args.folder.as_deref())?;
    cliclack::log::info(format!("Target folder: {}", folder.display()))?;

    // Step 2: Confirm, collect answers, generate and write
    let updater = ProjectUpdater::new(&folder);
    let mut prompter = ClackPrompter::new(args);

    match updater.run(&mut prompter).await? {
        Outcome::Declined => {
            cliclack::outro_cancel("Nothing was changed.")?;
        }
        Outcome::Completed(report) => {
            // Step 3: Show summary and next steps
            print_summary(&report, &folder)?;
        }
    }

    Ok(())
}

fn select_folder(folder: Option<&Path>) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = match folder {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.is_dir() {
        anyhow::bail!("Target folder does not exist: {}", path.display());
    }

    Ok(path)
}

fn print_summary(report: &Report, folder: &Path) -> Result<()> {
    let mut steps = Vec::new();
    let current = std::env::current_dir().ok();

    if current.as_deref() != Some(folder) {
        steps.push(format!("cd {}", folder.display()));
    }
    steps.push("npm install".to_string());
    steps.push("npm run lint".to_string());

    println!();
    println!(
        "  {} {} / {}",
        "Configured".green().bold(),
        report.config.framework,
        if report.config.use_type_checking {
            "TypeScript"
        } else {
            "JavaScript"
        }
    );
    for name in &report.removed {
        println!("  {} {}", "-".red(), name);
    }
    for name in &report.written {
        println!("  {} {}", "+".green(), name);
    }

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Everything's done. Enjoy coding with eslint and prettier!")?;

    Ok(())
}
