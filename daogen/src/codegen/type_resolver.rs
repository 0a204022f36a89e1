//! SQL type name to Rust type mapping

use tracing::debug;

use crate::schema::ColumnMetadata;

/// The semantic kind a column's SQL type maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
    /// Any type name outside the fixed lookup; rendered as text
    Fallback,
}

impl ColumnKind {
    /// Get the Rust type string for code generation
    pub fn to_type_string(self) -> &'static str {
        match self {
            ColumnKind::Integer => "i32",
            ColumnKind::Float => "f64",
            ColumnKind::Text | ColumnKind::Fallback => "String",
        }
    }
}

/// Resolve SQL type names to column kinds
pub struct TypeResolver;

impl TypeResolver {
    /// Get the kind for a column
    pub fn resolve(column: &ColumnMetadata) -> ColumnKind {
        let kind = Self::resolve_type_name(&column.data_type);
        if kind == ColumnKind::Fallback {
            debug!(
                "Column {} has unmapped type {:?}, using String",
                column.name, column.data_type
            );
        }
        kind
    }

    /// Map a SQL type name, ignoring ASCII case
    pub fn resolve_type_name(sql_type: &str) -> ColumnKind {
        match sql_type.trim().to_ascii_uppercase().as_str() {
            "INT" | "INTEGER" => ColumnKind::Integer,
            "FLOAT" | "DOUBLE" => ColumnKind::Float,
            "VARCHAR" | "CHAR" => ColumnKind::Text,
            _ => ColumnKind::Fallback,
        }
    }
}
