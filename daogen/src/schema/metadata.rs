//! Metadata structures describing a database schema

/// Metadata for a database table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMetadata {
    /// Table name, used verbatim as the generated type name
    pub name: String,

    /// Columns in the order the source reports them
    pub columns: Vec<ColumnMetadata>,
}

/// Metadata for a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMetadata {
    /// Column name
    pub name: String,

    /// SQL type name as reported by the source (e.g., "INT", "VARCHAR")
    pub data_type: String,
}

impl TableMetadata {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnMetadata>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }
}

impl ColumnMetadata {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}
