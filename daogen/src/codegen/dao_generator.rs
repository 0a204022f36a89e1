//! DAO generator - renders an unimplemented data access object for a table

use tracing::debug;

use crate::error::Result;

use super::file_header;
use super::naming::{decapitalize, to_identifier};

/// Render `<Table>Dao.rs`.
///
/// The DAO owns a `mysql_async::Pool` and exposes `insert`, `find_by_id` and
/// `find_all`. Bodies are placeholders: lookups return `None` or an empty `Vec`.
pub fn render_dao(table_name: &str) -> Result<String> {
    let struct_name = to_identifier("table", table_name)?;
    let dao_name = format!("{}Dao", table_name);
    let param_name = to_identifier("variable", &decapitalize(table_name))?;
    debug!("Rendering DAO {}", dao_name);

    let mut code = file_header(table_name);

    code.push_str(&format!("use crate::{};\n\n", struct_name));

    code.push_str(&format!("/// Data access stub for table `{}`\n", table_name));
    code.push_str("#[allow(dead_code, non_camel_case_types)]\n");
    code.push_str(&format!("pub struct {} {{\n", dao_name));
    code.push_str("    pool: mysql_async::Pool,\n");
    code.push_str("}\n\n");

    code.push_str("#[allow(unused_variables, non_snake_case)]\n");
    code.push_str(&format!("impl {} {{\n", dao_name));

    // new
    code.push_str("    pub fn new(pool: mysql_async::Pool) -> Self {\n");
    code.push_str("        Self { pool }\n");
    code.push_str("    }\n\n");

    // insert
    code.push_str(&format!(
        "    pub async fn insert(&self, {}: &{}) {{\n",
        param_name, struct_name
    ));
    code.push_str(&format!(
        "        // Insert the record into `{}`\n",
        table_name
    ));
    code.push_str("    }\n\n");

    // find_by_id
    code.push_str(&format!(
        "    pub async fn find_by_id(&self, id: i32) -> Option<{}> {{\n",
        struct_name
    ));
    code.push_str(&format!(
        "        // Look up a record of `{}` by id\n",
        table_name
    ));
    code.push_str("        None\n");
    code.push_str("    }\n\n");

    // find_all
    code.push_str(&format!(
        "    pub async fn find_all(&self) -> Vec<{}> {{\n",
        struct_name
    ));
    code.push_str(&format!(
        "        // Load every record of `{}`\n",
        table_name
    ));
    code.push_str("        Vec::new()\n");
    code.push_str("    }\n");

    code.push_str("}\n");
    Ok(code)
}
