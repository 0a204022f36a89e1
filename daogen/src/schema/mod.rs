//! Schema metadata and the sources that provide it

mod metadata;
mod mysql;
mod source;

pub use metadata::*;
pub use mysql::MySqlSchemaSource;
pub use source::{SchemaSource, StaticSchemaSource};
