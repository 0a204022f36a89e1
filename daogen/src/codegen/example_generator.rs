//! Example generator - renders a runnable program exercising the DAO stub

use crate::error::Result;

use super::file_header;
use super::naming::{decapitalize, to_identifier, to_module_name};
use super::ArtifactKind;

/// Render `<Table>Example.rs`.
///
/// The program pulls in the record and DAO files with `#[path]` modules,
/// connects with placeholder credentials, then calls every DAO method and
/// prints the lookups.
pub fn render_example(table_name: &str) -> Result<String> {
    let struct_name = to_identifier("table", table_name)?;
    let dao_name = format!("{}Dao", table_name);
    let var_name = to_identifier("variable", &decapitalize(table_name))?;
    let record_module = to_module_name(table_name, "record");
    let dao_module = to_module_name(table_name, "dao");

    let mut code = file_header(table_name);

    code.push_str(&format!(
        "#[path = \"{}\"]\nmod {};\n",
        ArtifactKind::Record.file_name(table_name),
        record_module
    ));
    code.push_str(&format!(
        "#[path = \"{}\"]\nmod {};\n\n",
        ArtifactKind::Dao.file_name(table_name),
        dao_module
    ));
    code.push_str(&format!("use {}::{};\n", dao_module, dao_name));
    code.push_str(&format!("use {}::{};\n\n", record_module, struct_name));

    code.push_str("#[tokio::main]\n");
    code.push_str("#[allow(non_snake_case)]\n");
    code.push_str("async fn main() {\n");
    code.push_str("    // Configure the database connection\n");
    code.push_str("    let opts = match mysql_async::Opts::from_url(\"<url>\") {\n");
    code.push_str("        Ok(opts) => mysql_async::OptsBuilder::from_opts(opts)\n");
    code.push_str("            .user(Some(\"<user>\"))\n");
    code.push_str("            .pass(Some(\"<password>\")),\n");
    code.push_str("        Err(e) => {\n");
    code.push_str("            eprintln!(\"{}\", e);\n");
    code.push_str("            return;\n");
    code.push_str("        }\n");
    code.push_str("    };\n");
    code.push_str("    let pool = mysql_async::Pool::new(opts);\n");
    code.push_str(&format!(
        "    let dao = {}::new(pool.clone());\n\n",
        dao_name
    ));

    code.push_str(&format!("    // Create a new {} record\n", table_name));
    code.push_str(&format!(
        "    let {} = {}::default();\n",
        var_name, struct_name
    ));
    code.push_str("    // Fill in the fields before inserting\n\n");

    code.push_str("    // Insert the record\n");
    code.push_str(&format!("    dao.insert(&{}).await;\n\n", var_name));

    code.push_str("    // Find a record by id\n");
    code.push_str("    let found = dao.find_by_id(1).await;\n");
    code.push_str("    println!(\"{:?}\", found);\n\n");

    code.push_str("    // Find all records\n");
    code.push_str("    let all = dao.find_all().await;\n");
    code.push_str("    println!(\"{:?}\", all);\n\n");

    code.push_str("    if let Err(e) = pool.disconnect().await {\n");
    code.push_str("        eprintln!(\"{}\", e);\n");
    code.push_str("    }\n");
    code.push_str("}\n");

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_example() {
        let code = render_example("Users").unwrap();
        assert!(code.contains("#[path = \"Users.rs\"]\nmod users_record;"));
        assert!(code.contains("#[path = \"UsersDao.rs\"]\nmod users_dao;"));
        assert!(code.contains("Opts::from_url(\"<url>\")"));
        assert!(code.contains(".user(Some(\"<user>\"))"));
        assert!(code.contains(".pass(Some(\"<password>\"))"));
        assert!(code.contains("let dao = UsersDao::new(pool.clone());"));
        assert!(code.contains("let users = Users::default();"));
        assert!(code.contains("dao.insert(&users).await;"));
        assert!(code.contains("dao.find_by_id(1).await;"));
        assert!(code.contains("dao.find_all().await;"));
        assert_eq!(code.matches("println!").count(), 2);
    }

    #[test]
    fn test_render_example_variable_name() {
        let code = render_example("OrderItems").unwrap();
        assert!(code.contains("let orderItems = OrderItems::default();"));
        assert!(code.contains("mod order_items_record;"));

        let code = render_example("orders").unwrap();
        assert!(code.contains("let orders = orders::default();"));
    }
}
