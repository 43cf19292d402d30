//! Template registry
//!
//! This module provides:
//! - Document types for every generated file (lint, format, transpile, typecheck)
//! - Static fragments keyed by framework and type checking

pub mod documents;
pub mod registry;

pub use documents::{
    CompilerOptions, EcmaFeatures, FormatDocument, LintDocument, ParserOptions, TranspileConfig,
    TypeCheckConfig,
};
pub use registry::{format_document, type_check_config, Fragment};
