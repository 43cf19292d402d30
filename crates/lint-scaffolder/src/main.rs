//! lint-scaffolder - Generate eslint, prettier and babel configuration for a project

use anyhow::Result;
use clap::{ArgAction, Parser};
use lint_scaffolder_core::tui::CreateArgs;
use lint_scaffolder_core::Framework;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lint-scaffolder")]
#[command(about = "Replace a project's eslint/prettier setup and wire a lint-staged pre-commit hook")]
#[command(version)]
pub struct Args {
    /// Project folder containing package.json
    #[arg(default_value = ".")]
    pub folder: PathBuf,

    /// Use the TypeScript variant without asking
    #[arg(long, action = ArgAction::SetTrue, overrides_with = "no_typescript")]
    pub typescript: bool,

    /// Use plain JavaScript without asking
    #[arg(long = "no-typescript", action = ArgAction::SetTrue, overrides_with = "typescript")]
    pub no_typescript: bool,

    /// UI framework to configure without asking
    #[arg(short, long, value_enum)]
    pub framework: Option<Framework>,

    /// Auto-confirm replacing existing configs (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        let typescript = match (args.typescript, args.no_typescript) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };

        CreateArgs {
            folder: Some(args.folder),
            typescript,
            framework: args.framework,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let result = lint_scaffolder_core::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
