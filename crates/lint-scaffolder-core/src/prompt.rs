//! Prompt collector interface
//!
//! The updater talks to the user only through [`Prompter`], so the workflow can
//! be driven by cliclack in a terminal or by a scripted double in tests.

use crate::config::{Framework, RepoConfig};
use crate::error::Result;

/// Questions asked during a run, plus progress reporting
pub trait Prompter {
    /// Ask whether existing lint and format configs may be replaced
    fn confirm_overwrite(&mut self) -> Result<bool>;

    /// Ask whether the project uses the type-checked (TypeScript) variant
    fn use_type_checking(&mut self) -> Result<bool>;

    /// Ask which UI framework the project uses
    fn select_framework(&mut self) -> Result<Framework>;

    /// Report an intermediate step
    fn info(&mut self, message: &str) -> Result<()>;

    /// Report a completed step
    fn success(&mut self, message: &str) -> Result<()>;
}

/// Ask the configuration questions in order
pub fn collect_repo_config<P: Prompter + ?Sized>(prompter: &mut P) -> Result<RepoConfig> {
    let use_type_checking = prompter.use_type_checking()?;
    let framework = prompter.select_framework()?;
    Ok(RepoConfig::new(use_type_checking, framework))
}
