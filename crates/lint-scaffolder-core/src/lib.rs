//! Lint Scaffolder Core - Shared library for the lint configuration scaffolder
//!
//! This library generates eslint, prettier, babel and (optionally) TypeScript
//! configuration for a JavaScript project and wires a lint-staged pre-commit
//! hook into its `package.json`.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Templates and Resolution** - Static fragments ([`templates`]) merged by a
//!   pure resolver ([`resolve`]) into final documents, printed by [`render`]
//! - **Layer 2: Workflow Orchestration** - [`ProjectUpdater`] drives a run through the
//!   [`Prompter`] trait, so custom UIs and tests can supply answers
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use lint_scaffolder_core::{resolve, Framework, RepoConfig};
//!
//! let resolution = resolve(&RepoConfig::new(true, Framework::React));
//! assert!(resolution.typecheck.is_some());
//! ```

pub mod config;
pub mod error;
pub mod project;
pub mod prompt;
pub mod render;
pub mod resolve;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Framework, RepoConfig};
pub use error::ScaffoldError;
pub use project::{Outcome, ProjectUpdater, Report, StaleFileMatcher};
pub use prompt::Prompter;
pub use resolve::{dedup, resolve, DependencyList, ManifestPatch, Resolution};

#[cfg(feature = "tui")]
pub use tui::run;
