//! Record generator - renders the data record struct for a table

use tracing::debug;

use crate::error::Result;
use crate::schema::TableMetadata;

use super::file_header;
use super::naming::to_identifier;
use super::type_resolver::TypeResolver;

/// Render `<Table>.rs`: one struct with a field per column.
///
/// Field names are the column names as-is; keywords become raw identifiers.
pub fn render_record(table: &TableMetadata) -> Result<String> {
    let struct_name = to_identifier("table", &table.name)?;
    debug!(
        "Rendering record {} with {} columns",
        struct_name,
        table.columns.len()
    );

    let mut code = file_header(&table.name);

    code.push_str(&format!("/// Database table: `{}`\n", table.name));
    code.push_str("#[allow(non_camel_case_types, non_snake_case)]\n");
    code.push_str("#[derive(Debug, Clone, Default, PartialEq)]\n");
    code.push_str(&format!("pub struct {} {{\n", struct_name));

    for col in &table.columns {
        let field_name = to_identifier("column", &col.name)?;
        let kind = TypeResolver::resolve(col);

        code.push_str(&format!("    /// Column: `{}` ({})\n", col.name, col.data_type));
        code.push_str(&format!(
            "    pub {}: {},\n",
            field_name,
            kind.to_type_string()
        ));
    }

    code.push_str("}\n");
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodegenError;
    use crate::schema::ColumnMetadata;

    fn field_lines(code: &str) -> Vec<&str> {
        code.lines()
            .filter(|l| l.starts_with("    pub "))
            .map(str::trim)
            .collect()
    }

    #[test]
    fn test_render_record() {
        let table = TableMetadata::new(
            "Users",
            vec![
                ColumnMetadata::new("id", "INT"),
                ColumnMetadata::new("userName", "VARCHAR"),
                ColumnMetadata::new("balance", "DOUBLE"),
                ColumnMetadata::new("birth_date", "DATE"),
            ],
        );

        let code = render_record(&table).unwrap();
        assert!(code.starts_with("// Generated by daogen from table `Users`"));
        assert!(code.contains("pub struct Users {"));
        assert_eq!(
            field_lines(&code),
            vec![
                "pub id: i32,",
                "pub userName: String,",
                "pub balance: f64,",
                "pub birth_date: String,",
            ]
        );
    }

    #[test]
    fn test_render_record_keyword_column() {
        let table = TableMetadata::new("Items", vec![ColumnMetadata::new("type", "CHAR")]);
        let code = render_record(&table).unwrap();
        assert!(code.contains("    pub r#type: String,\n"));
        assert!(code.contains("/// Column: `type` (CHAR)"));
    }

    #[test]
    fn test_render_record_no_columns() {
        let table = TableMetadata::new("Empty", vec![]);
        let code = render_record(&table).unwrap();
        assert!(code.contains("pub struct Empty {\n}\n"));
        assert!(field_lines(&code).is_empty());
    }

    #[test]
    fn test_render_record_invalid_column() {
        let table = TableMetadata::new("Users", vec![ColumnMetadata::new("first name", "VARCHAR")]);
        let err = render_record(&table).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::InvalidIdentifier { kind: "column", .. }
        ));
    }

    #[test]
    fn test_render_record_is_deterministic() {
        let table = TableMetadata::new("Orders", vec![ColumnMetadata::new("total", "FLOAT")]);
        assert_eq!(render_record(&table).unwrap(), render_record(&table).unwrap());
    }
}
