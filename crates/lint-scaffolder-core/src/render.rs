//! Pretty-printing of generated files
//!
//! JS-shaped files (`.eslintrc.js`, `babel.config.js`) are printed as a
//! `module.exports` assignment in prettier's default style: double quotes,
//! two-space indent, collections kept on one line when they fit in 80
//! columns and otherwise broken one entry per line with trailing commas.
//! Object keys are unquoted only when every key of that object is a plain
//! identifier.

use crate::error::{Result, ScaffoldError};
use serde::Serialize;
use serde_json::{Map, Value};

const PRINT_WIDTH: usize = 80;
const INDENT: &str = "  ";
const EXPORTS_PREFIX: &str = "module.exports = ";

/// Render `item` as a CommonJS module exporting it
pub fn js_module<T: Serialize>(file: &'static str, item: &T) -> Result<String> {
    let value =
        serde_json::to_value(item).map_err(|source| ScaffoldError::Serialize { file, source })?;
    Ok(module_exports(&value))
}

/// Render `item` as pretty JSON with a trailing newline
pub fn json<T: Serialize>(file: &'static str, item: &T) -> Result<String> {
    let mut content = serde_json::to_string_pretty(item)
        .map_err(|source| ScaffoldError::Serialize { file, source })?;
    content.push('\n');
    Ok(content)
}

pub fn module_exports(value: &Value) -> String {
    let mut out = String::from(EXPORTS_PREFIX);
    write_value(&mut out, value, 0, EXPORTS_PREFIX.len(), 1);
    out.push_str(";\n");
    out
}

/// Write `value` starting at column `used`, leaving room for `trailing` characters after it
fn write_value(out: &mut String, value: &Value, depth: usize, used: usize, trailing: usize) {
    let flat = flat(value);
    if used + flat.len() + trailing <= PRINT_WIDTH {
        out.push_str(&flat);
        return;
    }

    let inner = INDENT.repeat(depth + 1);
    match value {
        Value::Object(map) if !map.is_empty() => {
            let quote_keys = needs_quoted_keys(map);
            out.push_str("{\n");
            for (key, entry) in map {
                let key = print_key(key, quote_keys);
                out.push_str(&inner);
                out.push_str(&key);
                out.push_str(": ");
                write_value(out, entry, depth + 1, inner.len() + key.len() + 2, 1);
                out.push_str(",\n");
            }
            out.push_str(&INDENT.repeat(depth));
            out.push('}');
        }
        Value::Array(items) if !items.is_empty() => {
            out.push_str("[\n");
            for item in items {
                out.push_str(&inner);
                write_value(out, item, depth + 1, inner.len(), 1);
                out.push_str(",\n");
            }
            out.push_str(&INDENT.repeat(depth));
            out.push(']');
        }
        // scalars cannot break
        _ => out.push_str(&flat),
    }
}

/// Single-line rendering
fn flat(value: &Value) -> String {
    match value {
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let quote_keys = needs_quoted_keys(map);
            let entries: Vec<String> = map
                .iter()
                .map(|(key, entry)| format!("{}: {}", print_key(key, quote_keys), flat(entry)))
                .collect();
            format!("{{ {} }}", entries.join(", "))
        }
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(flat).collect();
            format!("[{}]", items.join(", "))
        }
        Value::String(s) => quote(s),
        other => other.to_string(),
    }
}

fn needs_quoted_keys(map: &Map<String, Value>) -> bool {
    !map.keys().all(|key| is_identifier(key))
}

fn print_key(key: &str, quoted: bool) -> String {
    if quoted {
        quote(key)
    } else {
        key.to_string()
    }
}

fn quote(s: &str) -> String {
    // JSON string escaping is valid JS
    Value::String(s.to_string()).to_string()
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
