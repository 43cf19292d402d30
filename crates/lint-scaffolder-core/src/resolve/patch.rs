//! Manifest patch: the part of `package.json` a run touches

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Changes applied to the project manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPatch {
    /// Package name to version, merged into `devDependencies`
    pub dev_dependencies: IndexMap<String, String>,

    /// Written to `scripts.lint`
    pub lint_script: String,

    /// The single key of the `lint-staged` block
    pub lint_staged_glob: String,

    pub lint_staged_command: String,

    /// Written to `husky.hooks["pre-commit"]`
    pub pre_commit_command: String,
}

impl ManifestPatch {
    /// Apply the patch in place.
    ///
    /// Unrelated top-level fields are left untouched and keep their position.
    /// Existing dev dependencies, scripts and husky hooks are kept; entries
    /// named by the patch are overwritten. The `lint-staged` block is replaced
    /// as a whole so a glob from an earlier run cannot linger.
    pub fn apply(&self, manifest: &mut Map<String, Value>) {
        update_object(manifest, "devDependencies", |dev_dependencies| {
            for (name, version) in &self.dev_dependencies {
                dev_dependencies.insert(name.clone(), Value::String(version.clone()));
            }
        });

        update_object(manifest, "scripts", |scripts| {
            scripts.insert("lint".to_string(), Value::String(self.lint_script.clone()));
        });

        let mut lint_staged = Map::new();
        lint_staged.insert(
            self.lint_staged_glob.clone(),
            Value::String(self.lint_staged_command.clone()),
        );
        manifest.insert("lint-staged".to_string(), Value::Object(lint_staged));

        update_object(manifest, "husky", |husky| {
            update_object(husky, "hooks", |hooks| {
                hooks.insert(
                    "pre-commit".to_string(),
                    Value::String(self.pre_commit_command.clone()),
                );
            });
        });
    }
}

/// Edit the object stored under `key` in place. A missing key is appended;
/// a non-object value is replaced by an empty object at the same position.
fn update_object(
    map: &mut Map<String, Value>,
    key: &str,
    update: impl FnOnce(&mut Map<String, Value>),
) {
    let slot = map.entry(key).or_insert(Value::Null);
    let mut object = match slot.take() {
        Value::Object(object) => object,
        _ => Map::new(),
    };
    update(&mut object);
    *slot = Value::Object(object);
}
