//! Code generation module

mod dao_generator;
mod example_generator;
mod naming;
mod record_generator;
mod type_resolver;

pub use dao_generator::render_dao;
pub use example_generator::render_example;
pub use naming::*;
pub use record_generator::render_record;
pub use type_resolver::*;

use crate::config::defaults;

/// Header line written at the top of every generated file
pub(crate) fn file_header(table_name: &str) -> String {
    format!(
        "// Generated by daogen from table `{}`. Do not edit.\n\n",
        table_name
    )
}

/// The three files emitted per table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Record,
    Dao,
    Example,
}

impl ArtifactKind {
    /// All kinds, in emission order
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Record,
        ArtifactKind::Dao,
        ArtifactKind::Example,
    ];

    /// Suffix appended to the table name
    pub fn suffix(self) -> &'static str {
        match self {
            ArtifactKind::Record => "",
            ArtifactKind::Dao => "Dao",
            ArtifactKind::Example => "Example",
        }
    }

    /// Human-readable label used in logs
    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::Record => "record type",
            ArtifactKind::Dao => "DAO stub",
            ArtifactKind::Example => "example",
        }
    }

    /// File name for a table, e.g. "Users" -> "UsersDao.rs"
    pub fn file_name(self, table_name: &str) -> String {
        format!("{}{}.{}", table_name, self.suffix(), defaults::FILE_EXTENSION)
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::schema::{ColumnMetadata, TableMetadata};

    fn assert_parses(kind: ArtifactKind, table: &str, code: &str) {
        if let Err(e) = syn::parse_file(code) {
            panic!("{} for {:?} is not valid Rust: {}\n{}", kind, table, e, code);
        }
    }

    #[test]
    fn test_rendered_files_parse() {
        let columns = vec![
            ColumnMetadata::new("id", "INT"),
            ColumnMetadata::new("type", "CHAR"),
            ColumnMetadata::new("match", "DOUBLE"),
            ColumnMetadata::new("created_at", "DATETIME"),
            ColumnMetadata::new("Total", "FLOAT"),
        ];
        for table in ["Users", "orders", "OrderItems", "type", "match", "X"] {
            let metadata = TableMetadata::new(table, columns.clone());
            assert_parses(ArtifactKind::Record, table, &render_record(&metadata).unwrap());
            assert_parses(ArtifactKind::Dao, table, &render_dao(table).unwrap());
            assert_parses(ArtifactKind::Example, table, &render_example(table).unwrap());
        }
    }

    #[test]
    fn test_file_names() {
        assert_eq!(ArtifactKind::Record.file_name("Users"), "Users.rs");
        assert_eq!(ArtifactKind::Dao.file_name("Users"), "UsersDao.rs");
        assert_eq!(ArtifactKind::Example.file_name("Users"), "UsersExample.rs");
    }
}
