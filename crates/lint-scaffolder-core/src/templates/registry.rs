//! Static configuration fragments keyed by framework and type checking
//!
//! The resolver concatenates fragments in a fixed order: base, framework,
//! then type checking. Nothing here is deduplicated; overlapping entries
//! between fragments are expected and collapsed by the resolver.

use super::documents::{CompilerOptions, FormatDocument, TypeCheckConfig};
use crate::config::Framework;
use serde_json::{json, Value};

/// One slice of lint, transpile, and dependency configuration
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    /// Shareable eslint configs
    pub lint_extends: &'static [&'static str],
    /// Eslint plugin short names
    pub lint_plugins: &'static [&'static str],
    /// Babel presets
    pub presets: &'static [&'static str],
    /// Babel plugins
    pub plugins: &'static [&'static str],
    /// Dev dependencies not already named by presets or plugins
    pub dependencies: &'static [&'static str],
    /// Rule settings, applied in order
    pub rules: fn() -> Vec<(&'static str, Value)>,
}

/// Always applied first
pub const BASE: Fragment = Fragment {
    lint_extends: &["eslint:recommended"],
    lint_plugins: &[],
    presets: &["@babel/preset-env"],
    plugins: &["@babel/plugin-transform-runtime"],
    dependencies: &[
        "eslint",
        "prettier",
        "eslint-config-prettier",
        "eslint-plugin-prettier",
        "stylelint",
        "@babel/core",
        "@babel/eslint-parser",
    ],
    rules: base_rules,
};

const REACT: Fragment = Fragment {
    lint_extends: &["plugin:react/recommended", "plugin:react-hooks/recommended"],
    lint_plugins: &["react", "react-hooks"],
    presets: &["@babel/preset-env", "@babel/preset-react"],
    plugins: &[],
    dependencies: &["eslint-plugin-react", "eslint-plugin-react-hooks"],
    rules: react_rules,
};

const VUE: Fragment = Fragment {
    lint_extends: &["plugin:vue/recommended"],
    lint_plugins: &["vue"],
    presets: &["@babel/preset-env"],
    plugins: &["@vue/babel-plugin-jsx"],
    dependencies: &["eslint-plugin-vue", "vue-eslint-parser"],
    rules: vue_rules,
};

/// Applied last, only when type checking is enabled
pub const TYPE_CHECKING: Fragment = Fragment {
    lint_extends: &["plugin:@typescript-eslint/recommended"],
    lint_plugins: &["@typescript-eslint"],
    presets: &["@babel/preset-typescript"],
    plugins: &[],
    dependencies: &[
        "typescript",
        "@typescript-eslint/parser",
        "@typescript-eslint/eslint-plugin",
    ],
    rules: type_checking_rules,
};

/// Must stay the last `extends` entry so it can switch off conflicting style rules
pub const PRETTIER_EXTENDS: &str = "plugin:prettier/recommended";

/// Dependencies for the pre-commit hook wiring
pub const PRE_COMMIT_DEPENDENCIES: &[&str] = &["lint-staged", "husky"];

/// Version recorded for every added dev dependency
pub const DEPENDENCY_VERSION: &str = "latest";

pub const SCRIPT_PARSER: &str = "@babel/eslint-parser";
pub const TYPED_PARSER: &str = "@typescript-eslint/parser";
pub const VUE_PARSER: &str = "vue-eslint-parser";

pub const SCRIPT_EXTENSIONS: &[&str] = &["js", "jsx"];
pub const TYPED_EXTENSIONS: &[&str] = &["ts", "tsx"];
pub const VUE_EXTENSIONS: &[&str] = &["vue"];

/// Stylesheet half of the `lint` script
pub const STYLE_LINT_COMMAND: &str = "stylelint \"src/**/*.{css,less}\"";

pub const LINT_STAGED_COMMAND: &str = "eslint";
pub const PRE_COMMIT_COMMAND: &str = "lint-staged";

pub const ECMA_VERSION: u32 = 2021;

pub const ENVIRONMENTS: &[&str] = &["browser", "node", "es2021"];

/// Fragment for the selected framework
pub fn framework(framework: Framework) -> Fragment {
    match framework {
        Framework::React => REACT,
        Framework::Vue => VUE,
    }
}

/// Shared settings block, if the framework needs one
pub fn framework_settings(framework: Framework) -> Option<Value> {
    match framework {
        Framework::React => Some(json!({ "react": { "version": "detect" } })),
        Framework::Vue => None,
    }
}

fn base_rules() -> Vec<(&'static str, Value)> {
    vec![
        ("no-console", json!("warn")),
        ("no-debugger", json!("error")),
        ("no-unused-vars", json!(["warn", { "argsIgnorePattern": "^_" }])),
        ("prefer-const", json!("error")),
        ("eqeqeq", json!(["error", "always"])),
    ]
}

fn react_rules() -> Vec<(&'static str, Value)> {
    vec![
        ("react/prop-types", json!("off")),
        ("react/react-in-jsx-scope", json!("off")),
        ("react-hooks/rules-of-hooks", json!("error")),
        ("react-hooks/exhaustive-deps", json!("warn")),
    ]
}

fn vue_rules() -> Vec<(&'static str, Value)> {
    vec![
        ("vue/multi-word-component-names", json!("off")),
        ("vue/no-v-html", json!("warn")),
    ]
}

fn type_checking_rules() -> Vec<(&'static str, Value)> {
    vec![
        // superseded by the typescript-aware variant below
        ("no-unused-vars", json!("off")),
        (
            "@typescript-eslint/no-unused-vars",
            json!(["warn", { "argsIgnorePattern": "^_" }]),
        ),
        ("@typescript-eslint/explicit-module-boundary-types", json!("off")),
    ]
}

/// `.prettierrc`, identical for every configuration
pub fn format_document() -> FormatDocument {
    FormatDocument {
        print_width: 100,
        tab_width: 2,
        use_tabs: false,
        semi: true,
        single_quote: true,
        jsx_single_quote: false,
        trailing_comma: "none".to_string(),
        bracket_spacing: true,
        arrow_parens: "avoid".to_string(),
        end_of_line: "lf".to_string(),
    }
}

/// `tsconfig.json`, identical for every framework
pub fn type_check_config() -> TypeCheckConfig {
    TypeCheckConfig {
        compiler_options: CompilerOptions {
            target: "es2017".to_string(),
            module: "esnext".to_string(),
            module_resolution: "node".to_string(),
            lib: vec![
                "dom".to_string(),
                "dom.iterable".to_string(),
                "esnext".to_string(),
            ],
            jsx: "preserve".to_string(),
            strict: true,
            allow_js: true,
            es_module_interop: true,
            allow_synthetic_default_imports: true,
            skip_lib_check: true,
            force_consistent_casing_in_file_names: true,
            resolve_json_module: true,
            isolated_modules: true,
            no_emit: true,
            base_url: ".".to_string(),
        },
        include: vec!["src".to_string()],
        exclude: vec!["node_modules".to_string()],
    }
}
