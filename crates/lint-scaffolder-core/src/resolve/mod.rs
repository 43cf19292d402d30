//! Config resolution engine
//!
//! Merges template registry fragments according to a [`RepoConfig`] into the
//! final documents. Pure: no file or network access, and the same input always
//! produces the same output.

pub mod patch;

use crate::config::{Framework, RepoConfig};
use crate::templates::registry::{self, Fragment};
use crate::templates::{
    EcmaFeatures, FormatDocument, LintDocument, ParserOptions, TranspileConfig, TypeCheckConfig,
};
use indexmap::{IndexMap, IndexSet};

pub use patch::ManifestPatch;

/// Package names to record as dev dependencies, without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyList(Vec<String>);

impl DependencyList {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|dep| dep == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DependencyList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(dedup(iter))
    }
}

/// Everything a run writes, derived from one [`RepoConfig`]
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub lint: LintDocument,
    pub format: FormatDocument,
    pub transpile: TranspileConfig,
    /// Present only when type checking is enabled
    pub typecheck: Option<TypeCheckConfig>,
    pub dependencies: DependencyList,
    pub manifest_patch: ManifestPatch,
}

/// Keep the first occurrence of each entry, preserving order
pub fn dedup<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items
        .into_iter()
        .map(Into::into)
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

/// Resolve the answers into final documents
pub fn resolve(config: &RepoConfig) -> Resolution {
    let fragments = fragments(config);

    let transpile = TranspileConfig {
        presets: dedup(fragments.iter().flat_map(|f| f.presets.iter().copied())),
        plugins: dedup(fragments.iter().flat_map(|f| f.plugins.iter().copied())),
    };

    let dependencies: DependencyList = fragments
        .iter()
        .flat_map(|f| f.dependencies.iter().copied())
        .map(str::to_string)
        .chain(transpile.presets.iter().cloned())
        .chain(transpile.plugins.iter().cloned())
        .chain(registry::PRE_COMMIT_DEPENDENCIES.iter().map(|d| d.to_string()))
        .collect();

    let manifest_patch = ManifestPatch {
        dev_dependencies: dependencies
            .iter()
            .map(|dep| (dep.to_string(), registry::DEPENDENCY_VERSION.to_string()))
            .collect::<IndexMap<_, _>>(),
        lint_script: lint_script(config),
        lint_staged_glob: lint_staged_glob(config),
        lint_staged_command: registry::LINT_STAGED_COMMAND.to_string(),
        pre_commit_command: registry::PRE_COMMIT_COMMAND.to_string(),
    };

    Resolution {
        lint: lint_document(config, &fragments),
        format: registry::format_document(),
        transpile,
        typecheck: config
            .use_type_checking
            .then(registry::type_check_config),
        dependencies,
        manifest_patch,
    }
}

/// Fragments in application order: base, framework, type checking
fn fragments(config: &RepoConfig) -> Vec<Fragment> {
    let mut fragments = vec![registry::BASE, registry::framework(config.framework)];
    if config.use_type_checking {
        fragments.push(registry::TYPE_CHECKING);
    }
    fragments
}

fn lint_document(config: &RepoConfig, fragments: &[Fragment]) -> LintDocument {
    let script_parser = if config.use_type_checking {
        registry::TYPED_PARSER
    } else {
        registry::SCRIPT_PARSER
    };

    // vue-eslint-parser handles templates and hands <script> blocks to the nested parser
    let (parser, nested_parser) = match config.framework {
        Framework::Vue => (registry::VUE_PARSER, Some(script_parser.to_string())),
        Framework::React => (script_parser, None),
    };

    let mut rules = IndexMap::new();
    for fragment in fragments {
        for (name, setting) in (fragment.rules)() {
            rules.insert(name.to_string(), setting);
        }
    }

    LintDocument {
        root: true,
        parser: parser.to_string(),
        parser_options: ParserOptions {
            parser: nested_parser,
            ecma_version: registry::ECMA_VERSION,
            source_type: "module".to_string(),
            ecma_features: EcmaFeatures { jsx: true },
        },
        env: registry::ENVIRONMENTS
            .iter()
            .map(|env| (env.to_string(), true))
            .collect(),
        extends: dedup(
            fragments
                .iter()
                .flat_map(|f| f.lint_extends.iter().copied())
                .chain([registry::PRETTIER_EXTENDS]),
        ),
        plugins: dedup(fragments.iter().flat_map(|f| f.lint_plugins.iter().copied())),
        settings: registry::framework_settings(config.framework),
        rules,
    }
}

fn source_extensions(config: &RepoConfig) -> Vec<&'static str> {
    let mut extensions = registry::SCRIPT_EXTENSIONS.to_vec();
    if config.use_type_checking {
        extensions.extend_from_slice(registry::TYPED_EXTENSIONS);
    }
    extensions
}

/// Files the pre-commit hook lints; only type checking widens it
fn lint_staged_glob(config: &RepoConfig) -> String {
    format!("src/**/*.{{{}}}", source_extensions(config).join(","))
}

fn lint_script(config: &RepoConfig) -> String {
    let mut extensions = source_extensions(config);
    if config.framework == Framework::Vue {
        extensions.extend_from_slice(registry::VUE_EXTENSIONS);
    }
    let extensions: Vec<String> = extensions.iter().map(|ext| format!(".{}", ext)).collect();
    format!(
        "eslint --ext {} src && {}",
        extensions.join(","),
        registry::STYLE_LINT_COMMAND
    )
}
