//! Staged writes: every output goes to a hidden temp file first, then all of
//! them are renamed into place once nothing else can fail.

use crate::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};
use tokio::fs;

const TEMP_PREFIX: &str = ".lint-scaffolder-";
const TEMP_SUFFIX: &str = ".tmp";

/// A file to be written to the target folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: &'static str,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(name: &'static str, content: String) -> Self {
        Self { name, content }
    }
}

#[derive(Debug)]
struct StagedFile {
    name: &'static str,
    temp: PathBuf,
    target: PathBuf,
}

/// Outputs written to temp files, not yet visible under their final names
#[derive(Debug)]
pub struct Staging {
    files: Vec<StagedFile>,
}

/// Leading part of the temp name for `name`, chosen so it never matches a
/// stale-config pattern. A random part and [`TEMP_SUFFIX`] follow it.
pub fn temp_prefix(name: &str) -> String {
    format!("{}{}.", TEMP_PREFIX, name.trim_start_matches('.'))
}

/// Create a fresh, uniquely named empty file in `folder` and keep it on disk.
/// Existing files are never opened, so a user file cannot be overwritten.
fn reserve_temp(folder: &Path, name: &str) -> Result<PathBuf> {
    let prefix = temp_prefix(name);
    let reserved = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(TEMP_SUFFIX)
        .tempfile_in(folder)
        .map_err(|source| ScaffoldError::Write {
            path: folder.join(format!("{}*{}", prefix, TEMP_SUFFIX)),
            source,
        })?;

    let path = reserved.path().to_path_buf();
    let (_, path) = reserved.keep().map_err(|err| ScaffoldError::Write {
        path,
        source: err.error,
    })?;
    Ok(path)
}

impl Staging {
    /// Write every file to its temp path; on failure, remove what was staged
    pub async fn stage(folder: &Path, files: Vec<GeneratedFile>) -> Result<Self> {
        let mut staging = Self { files: Vec::new() };

        for file in files {
            let temp = match reserve_temp(folder, file.name) {
                Ok(temp) => temp,
                Err(err) => {
                    staging.discard().await;
                    return Err(err);
                }
            };
            if let Err(source) = fs::write(&temp, file.content.as_bytes()).await {
                staging.discard().await;
                let _ = fs::remove_file(&temp).await;
                return Err(ScaffoldError::Write { path: temp, source });
            }
            staging.files.push(StagedFile {
                name: file.name,
                temp,
                target: folder.join(file.name),
            });
        }

        Ok(staging)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.files.iter().map(|file| file.name).collect()
    }

    /// Rename every staged file over its final name
    pub async fn commit(self) -> Result<Vec<&'static str>> {
        let mut written = Vec::new();
        let mut pending = self.files.into_iter();

        while let Some(file) = pending.next() {
            if let Err(source) = fs::rename(&file.temp, &file.target).await {
                let _ = fs::remove_file(&file.temp).await;
                Self { files: pending.collect() }.discard().await;
                return Err(ScaffoldError::Commit {
                    path: file.target,
                    source,
                });
            }
            written.push(file.name);
        }

        Ok(written)
    }

    /// Remove all temp files, ignoring errors
    pub async fn discard(self) {
        for file in self.files {
            let _ = fs::remove_file(&file.temp).await;
        }
    }
}
