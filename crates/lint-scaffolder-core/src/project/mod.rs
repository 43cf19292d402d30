//! Project updater
//!
//! Orchestrates a run against a target folder:
//! 1. confirm overwrite (declining touches nothing)
//! 2. collect the [`RepoConfig`]
//! 3. read and validate `package.json`
//! 4. resolve and render every output, patch the manifest in memory
//! 5. stage outputs as temp files
//! 6. remove stale lint/format configs, then move staged files into place
//!
//! The manifest is validated and every output staged before the first
//! deletion, so a bad manifest or a failed write leaves the folder as it was.

pub mod classify;
pub mod manifest;
pub mod staging;

use crate::config::RepoConfig;
use crate::error::{Result, ScaffoldError};
use crate::prompt::{collect_repo_config, Prompter};
use crate::render;
use crate::resolve::{resolve, Resolution};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

pub use classify::StaleFileMatcher;
pub use manifest::MANIFEST_FILE;
pub use staging::{GeneratedFile, Staging};

pub const LINT_FILE: &str = ".eslintrc.js";
pub const FORMAT_FILE: &str = ".prettierrc";
pub const TRANSPILE_FILE: &str = "babel.config.js";
pub const TYPECHECK_FILE: &str = "tsconfig.json";

/// What a completed run changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub config: RepoConfig,
    /// Stale config files that were deleted
    pub removed: Vec<String>,
    /// Files written, in write order; the manifest is always last
    pub written: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user declined the overwrite confirmation
    Declined,
    Completed(Report),
}

/// Applies generated configuration to one target folder
#[derive(Debug, Clone)]
pub struct ProjectUpdater {
    folder: PathBuf,
    matcher: StaleFileMatcher,
}

impl ProjectUpdater {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            matcher: StaleFileMatcher::default(),
        }
    }

    /// Replace the stale-file classification
    pub fn with_matcher(mut self, matcher: StaleFileMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Full interactive flow
    pub async fn run<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<Outcome> {
        if !prompter.confirm_overwrite()? {
            return Ok(Outcome::Declined);
        }

        let config = collect_repo_config(prompter)?;
        let report = self.apply(&config, prompter).await?;
        Ok(Outcome::Completed(report))
    }

    /// Generate and write everything for an already-collected config
    pub async fn apply<P: Prompter + ?Sized>(
        &self,
        config: &RepoConfig,
        prompter: &mut P,
    ) -> Result<Report> {
        let is_dir = fs::metadata(&self.folder)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(ScaffoldError::FolderNotFound {
                path: self.folder.clone(),
            });
        }

        let mut manifest = manifest::read_manifest(&self.folder.join(MANIFEST_FILE)).await?;

        let resolution = resolve(config);
        resolution.manifest_patch.apply(&mut manifest);
        let files = generated_files(&resolution, &manifest)?;

        let keep: Vec<&str> = files.iter().map(|file| file.name).collect();
        let removals = self
            .matcher
            .plan_removals(self.list_files().await?, &keep);

        let staging = Staging::stage(&self.folder, files).await?;

        if let Err(err) = remove_stale(&self.folder, &removals).await {
            staging.discard().await;
            return Err(err);
        }
        let written = staging.commit().await?;

        // Reported only once every change is on disk
        for name in &removals {
            prompter.info(&format!("Removed {}", name))?;
        }
        for name in &written {
            prompter.success(&format!("Wrote {}", name))?;
        }

        Ok(Report {
            config: *config,
            removed: removals,
            written,
        })
    }

    /// Names of the regular files and symlinks directly inside the target folder
    async fn list_files(&self) -> Result<Vec<String>> {
        let read_dir_error = |source| ScaffoldError::ReadDir {
            path: self.folder.clone(),
            source,
        };

        let mut entries = fs::read_dir(&self.folder).await.map_err(read_dir_error)?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(read_dir_error)? {
            // symlinks are not followed, so a link to a shared config is removed itself
            let is_file = entry
                .file_type()
                .await
                .map(|kind| kind.is_file() || kind.is_symlink())
                .unwrap_or(false);
            if is_file {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }
}

/// Delete each named file in `folder`, stopping at the first failure
async fn remove_stale(folder: &Path, names: &[String]) -> Result<()> {
    for name in names {
        let path = folder.join(name);
        fs::remove_file(&path)
            .await
            .map_err(|source| ScaffoldError::Remove { path, source })?;
    }
    Ok(())
}

/// Render every output; the manifest goes last so it is committed last
fn generated_files(
    resolution: &Resolution,
    manifest: &Map<String, Value>,
) -> Result<Vec<GeneratedFile>> {
    let mut files = vec![
        GeneratedFile::new(LINT_FILE, render::js_module(LINT_FILE, &resolution.lint)?),
        GeneratedFile::new(FORMAT_FILE, render::json(FORMAT_FILE, &resolution.format)?),
        GeneratedFile::new(
            TRANSPILE_FILE,
            render::js_module(TRANSPILE_FILE, &resolution.transpile)?,
        ),
    ];

    if let Some(typecheck) = &resolution.typecheck {
        files.push(GeneratedFile::new(
            TYPECHECK_FILE,
            render::json(TYPECHECK_FILE, typecheck)?,
        ));
    }

    files.push(GeneratedFile::new(
        MANIFEST_FILE,
        render::json(MANIFEST_FILE, manifest)?,
    ));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Framework;
    use crate::prompt::testing::ScriptedPrompter;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"{
  "name": "demo",
  "version": "1.0.0",
  "scripts": { "start": "webpack serve" },
  "dependencies": { "react": "^18.2.0" }
}"#;

    /// File name to contents for every file in the folder
    fn snapshot(dir: &Path) -> BTreeMap<String, String> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| {
                let entry = entry.unwrap();
                let name = entry.file_name().to_string_lossy().into_owned();
                let content = std::fs::read_to_string(entry.path()).unwrap_or_default();
                (name, content)
            })
            .collect()
    }

    fn project(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            std::fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    fn read_json(dir: &Path, name: &str) -> Value {
        serde_json::from_str(&std::fs::read_to_string(dir.join(name)).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_declining_changes_nothing() {
        let dir = project(&[
            (MANIFEST_FILE, MANIFEST),
            (".eslintrc.json", "{}"),
            (".prettierrc", "{}"),
        ]);
        let before = snapshot(dir.path());

        let mut prompter = ScriptedPrompter::declining();
        let outcome = ProjectUpdater::new(dir.path())
            .run(&mut prompter)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Declined);
        assert_eq!(prompter.asked, vec!["overwrite"]);
        assert_eq!(snapshot(dir.path()), before);
    }

    #[tokio::test]
    async fn test_plain_react_project() {
        let dir = project(&[(MANIFEST_FILE, MANIFEST)]);
        let mut prompter = ScriptedPrompter::new(RepoConfig::new(false, Framework::React));

        let outcome = ProjectUpdater::new(dir.path())
            .run(&mut prompter)
            .await
            .unwrap();

        let Outcome::Completed(report) = outcome else {
            panic!("expected a completed run");
        };
        assert_eq!(
            report.written,
            vec![LINT_FILE, FORMAT_FILE, TRANSPILE_FILE, MANIFEST_FILE]
        );
        assert!(report.removed.is_empty());
        assert!(!dir.path().join(TYPECHECK_FILE).exists());

        let manifest = read_json(dir.path(), MANIFEST_FILE);
        assert_eq!(manifest["lint-staged"], json!({ "src/**/*.{js,jsx}": "eslint" }));
        assert_eq!(manifest["husky"]["hooks"]["pre-commit"], "lint-staged");
        assert_eq!(manifest["devDependencies"]["husky"], "latest");
        assert_eq!(manifest["devDependencies"]["lint-staged"], "latest");

        let lint = std::fs::read_to_string(dir.path().join(LINT_FILE)).unwrap();
        assert!(lint.starts_with("module.exports = {\n"));
        assert!(lint.contains("parser: \"@babel/eslint-parser\""));

        let babel = std::fs::read_to_string(dir.path().join(TRANSPILE_FILE)).unwrap();
        assert!(babel.contains("\"@babel/preset-react\""));
    }

    #[tokio::test]
    async fn test_typed_vue_project() {
        let dir = project(&[(MANIFEST_FILE, MANIFEST)]);
        let mut prompter = ScriptedPrompter::new(RepoConfig::new(true, Framework::Vue));

        ProjectUpdater::new(dir.path())
            .run(&mut prompter)
            .await
            .unwrap();

        let manifest = read_json(dir.path(), MANIFEST_FILE);
        assert_eq!(
            manifest["lint-staged"],
            json!({ "src/**/*.{js,jsx,ts,tsx}": "eslint" })
        );
        assert_eq!(manifest["devDependencies"]["typescript"], "latest");

        let tsconfig = read_json(dir.path(), TYPECHECK_FILE);
        assert_eq!(tsconfig["compilerOptions"]["noEmit"], true);
        assert_eq!(tsconfig["include"], json!(["src"]));
    }

    #[tokio::test]
    async fn test_unrelated_manifest_fields_survive() {
        let dir = project(&[(MANIFEST_FILE, MANIFEST)]);
        let mut prompter = ScriptedPrompter::new(RepoConfig::new(false, Framework::Vue));

        ProjectUpdater::new(dir.path())
            .run(&mut prompter)
            .await
            .unwrap();

        let manifest = read_json(dir.path(), MANIFEST_FILE);
        assert_eq!(manifest["name"], "demo");
        assert_eq!(manifest["version"], "1.0.0");
        assert_eq!(manifest["scripts"]["start"], "webpack serve");
        assert_eq!(manifest["dependencies"]["react"], "^18.2.0");
        assert!(manifest["scripts"]["lint"]
            .as_str()
            .unwrap()
            .contains(".vue"));
    }

    #[tokio::test]
    async fn test_stale_configs_are_removed() {
        let dir = project(&[
            (MANIFEST_FILE, MANIFEST),
            (".eslintrc.json", "{}"),
            (".eslintrc.yml", "root: true"),
            (".prettierrc.yaml", "semi: false"),
            (".eslintignore", "dist"),
        ]);
        let mut prompter = ScriptedPrompter::new(RepoConfig::new(false, Framework::React));

        let outcome = ProjectUpdater::new(dir.path())
            .run(&mut prompter)
            .await
            .unwrap();

        let Outcome::Completed(report) = outcome else {
            panic!("expected a completed run");
        };
        assert_eq!(
            report.removed,
            vec![".eslintrc.json", ".eslintrc.yml", ".prettierrc.yaml"]
        );

        let names: Vec<String> = snapshot(dir.path()).into_keys().collect();
        assert_eq!(
            names,
            vec![
                ".eslintignore",
                ".eslintrc.js",
                ".prettierrc",
                "babel.config.js",
                "package.json"
            ]
        );
        assert!(prompter
            .messages
            .contains(&"Removed .eslintrc.json".to_string()));
    }

    #[tokio::test]
    async fn test_missing_manifest_fails_before_deleting() {
        let dir = project(&[(".eslintrc.json", "{}")]);
        let before = snapshot(dir.path());
        let mut prompter = ScriptedPrompter::new(RepoConfig::new(true, Framework::React));

        let err = ProjectUpdater::new(dir.path())
            .run(&mut prompter)
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::ManifestRead { .. }));
        assert_eq!(snapshot(dir.path()), before);
    }

    #[tokio::test]
    async fn test_invalid_manifest_fails_before_deleting() {
        let dir = project(&[(MANIFEST_FILE, "{ not json"), (".prettierrc", "{}")]);
        let before = snapshot(dir.path());
        let mut prompter = ScriptedPrompter::new(RepoConfig::new(false, Framework::React));

        let err = ProjectUpdater::new(dir.path())
            .run(&mut prompter)
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::ManifestParse { .. }));
        assert_eq!(snapshot(dir.path()), before);
    }

    #[tokio::test]
    async fn test_missing_folder() {
        let dir = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::new(RepoConfig::new(false, Framework::React));

        let err = ProjectUpdater::new(dir.path().join("nope"))
            .run(&mut prompter)
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::FolderNotFound { .. }));
    }

    #[tokio::test]
    async fn test_custom_matcher() {
        let dir = project(&[
            (MANIFEST_FILE, MANIFEST),
            (".eslintrc.json", "{}"),
            ("tslint.json", "{}"),
        ]);
        let mut prompter = ScriptedPrompter::new(RepoConfig::new(false, Framework::React));

        ProjectUpdater::new(dir.path())
            .with_matcher(StaleFileMatcher::new(["tslint.json"]))
            .run(&mut prompter)
            .await
            .unwrap();

        assert!(dir.path().join(".eslintrc.json").exists());
        assert!(!dir.path().join("tslint.json").exists());
    }

    #[tokio::test]
    async fn test_repeated_runs_are_identical() {
        let config = RepoConfig::new(true, Framework::React);
        let first = project(&[(MANIFEST_FILE, MANIFEST)]);
        let second = project(&[(MANIFEST_FILE, MANIFEST)]);

        for dir in [&first, &second] {
            let mut prompter = ScriptedPrompter::new(config);
            ProjectUpdater::new(dir.path())
                .run(&mut prompter)
                .await
                .unwrap();
        }

        assert_eq!(snapshot(first.path()), snapshot(second.path()));
    }

    #[tokio::test]
    async fn test_rerun_is_idempotent() {
        let dir = project(&[(MANIFEST_FILE, MANIFEST)]);
        let config = RepoConfig::new(false, Framework::Vue);

        let mut prompter = ScriptedPrompter::new(config);
        ProjectUpdater::new(dir.path())
            .run(&mut prompter)
            .await
            .unwrap();
        let after_first = snapshot(dir.path());

        let mut prompter = ScriptedPrompter::new(config);
        ProjectUpdater::new(dir.path())
            .run(&mut prompter)
            .await
            .unwrap();

        assert_eq!(snapshot(dir.path()), after_first);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlinked_stale_config_is_removed() {
        let shared = TempDir::new().unwrap();
        let shared_config = shared.path().join("eslint.shared.json");
        std::fs::write(&shared_config, "{}").unwrap();

        let dir = project(&[(MANIFEST_FILE, MANIFEST)]);
        let link = dir.path().join(".eslintrc.json");
        std::os::unix::fs::symlink(&shared_config, &link).unwrap();

        let mut prompter = ScriptedPrompter::new(RepoConfig::new(false, Framework::React));
        let outcome = ProjectUpdater::new(dir.path())
            .run(&mut prompter)
            .await
            .unwrap();

        let Outcome::Completed(report) = outcome else {
            panic!("expected a completed run");
        };
        assert_eq!(report.removed, vec![".eslintrc.json"]);
        assert!(std::fs::symlink_metadata(&link).is_err());
        assert_eq!(std::fs::read_to_string(&shared_config).unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_failing_output_leaves_no_temp_files() {
        let dir = project(&[(MANIFEST_FILE, MANIFEST), (".eslintrc.json", "{}")]);
        let mut prompter =
            ScriptedPrompter::with_failing_output(RepoConfig::new(false, Framework::React));

        let err = ProjectUpdater::new(dir.path())
            .run(&mut prompter)
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::Prompt(_)));
        let names: Vec<String> = snapshot(dir.path()).into_keys().collect();
        assert_eq!(
            names,
            vec![".eslintrc.js", ".prettierrc", "babel.config.js", "package.json"]
        );
        let manifest = read_json(dir.path(), MANIFEST_FILE);
        assert_eq!(manifest["husky"]["hooks"]["pre-commit"], "lint-staged");
    }

    #[tokio::test]
    async fn test_remove_stale_stops_at_missing_file() {
        let dir = project(&[(".prettierrc.yaml", "semi: false")]);

        let err = remove_stale(
            dir.path(),
            &[".eslintrc.json".to_string(), ".prettierrc.yaml".to_string()],
        )
        .await
        .unwrap_err();

        let ScaffoldError::Remove { path, source } = err else {
            panic!("expected a remove error");
        };
        assert_eq!(path, dir.path().join(".eslintrc.json"));
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        assert!(dir.path().join(".prettierrc.yaml").exists());
    }
}
