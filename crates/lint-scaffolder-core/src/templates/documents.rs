//! Document types written to the target folder

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `.eslintrc.js` contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintDocument {
    /// Stops eslint from merging configs from parent folders
    pub root: bool,

    /// Top-level parser module
    pub parser: String,

    pub parser_options: ParserOptions,

    /// Environments enabling predefined globals
    pub env: IndexMap<String, bool>,

    /// Shareable configs, applied in order
    pub extends: Vec<String>,

    /// Plugin short names
    pub plugins: Vec<String>,

    /// Shared settings made available to every rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,

    /// Rule overrides; later fragments replace earlier values for the same rule
    pub rules: IndexMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserOptions {
    /// Script parser used by a wrapping parser (e.g. `vue-eslint-parser`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,
    pub ecma_version: u32,
    pub source_type: String,
    pub ecma_features: EcmaFeatures,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcmaFeatures {
    pub jsx: bool,
}

/// `.prettierrc` contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatDocument {
    pub print_width: u32,
    pub tab_width: u32,
    pub use_tabs: bool,
    pub semi: bool,
    pub single_quote: bool,
    pub jsx_single_quote: bool,
    pub trailing_comma: String,
    pub bracket_spacing: bool,
    pub arrow_parens: String,
    pub end_of_line: String,
}

/// `babel.config.js` contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranspileConfig {
    pub presets: Vec<String>,
    pub plugins: Vec<String>,
}

/// `tsconfig.json` contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCheckConfig {
    pub compiler_options: CompilerOptions,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub target: String,
    pub module: String,
    pub module_resolution: String,
    pub lib: Vec<String>,
    pub jsx: String,
    pub strict: bool,
    pub allow_js: bool,
    pub es_module_interop: bool,
    pub allow_synthetic_default_imports: bool,
    pub skip_lib_check: bool,
    pub force_consistent_casing_in_file_names: bool,
    pub resolve_json_module: bool,
    pub isolated_modules: bool,
    /// Babel does the emitting; tsc only type checks
    pub no_emit: bool,
    pub base_url: String,
}
