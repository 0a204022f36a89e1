//! Naming utilities for code generation

use heck::ToSnakeCase;

use crate::error::{CodegenError, Result};

/// Lower-case the first character of a name if it is ASCII.
///
/// Used to derive a local variable name from a type name; non-ASCII and
/// non-alphabetic leading characters pass through unchanged.
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(name.len());
            result.push(first.to_ascii_lowercase());
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

/// Module name the example uses to include a generated file,
/// e.g. "OrderItems" + "dao" -> "order_items_dao"
pub fn to_module_name(table_name: &str, suffix: &str) -> String {
    format!("{}_{}", table_name.to_snake_case(), suffix)
}

/// Check if a name is a Rust reserved keyword
pub fn is_rust_keyword(name: &str) -> bool {
    matches!(
        name,
        "as" | "async"
            | "await"
            | "break"
            | "const"
            | "continue"
            | "crate"
            | "dyn"
            | "else"
            | "enum"
            | "extern"
            | "false"
            | "fn"
            | "for"
            | "gen"
            | "if"
            | "impl"
            | "in"
            | "let"
            | "loop"
            | "match"
            | "mod"
            | "move"
            | "mut"
            | "pub"
            | "ref"
            | "return"
            | "self"
            | "Self"
            | "static"
            | "struct"
            | "super"
            | "trait"
            | "true"
            | "type"
            | "unsafe"
            | "use"
            | "where"
            | "while"
            | "abstract"
            | "become"
            | "box"
            | "do"
            | "final"
            | "macro"
            | "override"
            | "priv"
            | "try"
            | "typeof"
            | "unsized"
            | "virtual"
            | "yield"
    )
}

/// Keywords that cannot be written as raw identifiers
fn is_reserved_path_keyword(name: &str) -> bool {
    matches!(name, "self" | "Self" | "super" | "crate" | "_")
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Turn a table or column name into a Rust identifier without renaming it.
///
/// Keywords are written as raw identifiers (`type` -> `r#type`). Names that
/// cannot be spelled as an identifier at all are rejected.
pub fn to_identifier(kind: &'static str, name: &str) -> Result<String> {
    if !is_identifier(name) || is_reserved_path_keyword(name) {
        return Err(CodegenError::InvalidIdentifier {
            kind,
            name: name.to_string(),
        });
    }
    if is_rust_keyword(name) {
        Ok(format!("r#{}", name))
    } else {
        Ok(name.to_string())
    }
}
