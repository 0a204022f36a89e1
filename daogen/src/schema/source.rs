//! The schema metadata interface consumed by the generator

use async_trait::async_trait;

use super::metadata::{ColumnMetadata, TableMetadata};
use crate::error::{CodegenError, Result};

/// A source of table and column metadata.
///
/// Queries run one after another on the same source; implementations may hold
/// a single connection for their whole lifetime.
#[async_trait]
pub trait SchemaSource: Send {
    /// List the names of all tables visible to the source.
    async fn list_tables(&mut self) -> Result<Vec<String>>;

    /// List the columns of one table, in declaration order.
    async fn list_columns(&mut self, table: &str) -> Result<Vec<ColumnMetadata>>;
}

/// A schema held in memory.
///
/// Tables are reported in insertion order.
#[derive(Debug, Clone, Default)]
pub struct StaticSchemaSource {
    tables: Vec<TableMetadata>,
}

impl StaticSchemaSource {
    pub fn new(tables: Vec<TableMetadata>) -> Self {
        Self { tables }
    }

    /// Add a table to the schema
    pub fn with_table(mut self, table: TableMetadata) -> Self {
        self.tables.push(table);
        self
    }
}

#[async_trait]
impl SchemaSource for StaticSchemaSource {
    async fn list_tables(&mut self) -> Result<Vec<String>> {
        Ok(self.tables.iter().map(|t| t.name.clone()).collect())
    }

    async fn list_columns(&mut self, table: &str) -> Result<Vec<ColumnMetadata>> {
        self.tables
            .iter()
            .find(|t| t.name == table)
            .map(|t| t.columns.clone())
            .ok_or_else(|| CodegenError::MetadataError(format!("Unknown table: {}", table)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source() {
        let mut source = StaticSchemaSource::default()
            .with_table(TableMetadata::new(
                "Users",
                vec![
                    ColumnMetadata::new("id", "INT"),
                    ColumnMetadata::new("name", "VARCHAR"),
                ],
            ))
            .with_table(TableMetadata::new("Orders", vec![]));

        assert_eq!(source.list_tables().await.unwrap(), vec!["Users", "Orders"]);

        let columns = source.list_columns("Users").await.unwrap();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[1].data_type, "VARCHAR");
    }

    #[tokio::test]
    async fn test_static_source_unknown_table() {
        let mut source = StaticSchemaSource::default();
        let err = source.list_columns("Missing").await.unwrap_err();
        assert!(matches!(err, CodegenError::MetadataError(_)));
    }
}
