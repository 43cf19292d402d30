//! Error types for the scaffolding workflow

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a scaffolding run
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Target folder does not exist or is not a directory: {}", path.display())]
    FolderNotFound { path: PathBuf },

    #[error("Could not read the manifest `{}`: {source}", path.display())]
    ManifestRead { path: PathBuf, source: io::Error },

    #[error("The manifest `{}` is not valid JSON: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("The manifest `{}` must contain a JSON object at the top level", path.display())]
    ManifestShape { path: PathBuf },

    #[error("Could not list the contents of `{}`: {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("Failed to write `{}`: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to remove `{}`: {source}", path.display())]
    Remove { path: PathBuf, source: io::Error },

    #[error("Failed to move `{}` into place: {source}", path.display())]
    Commit { path: PathBuf, source: io::Error },

    #[error("Error while serializing the content for `{file}`: {source}")]
    Serialize {
        file: &'static str,
        source: serde_json::Error,
    },

    #[error("Unknown framework '{input}'. Available frameworks: {available}")]
    UnknownFramework { input: String, available: String },

    #[error("Prompt failed: {0}")]
    Prompt(#[from] io::Error),
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
