//! daogen: Generate Rust record types, DAO stubs and usage examples from a live MySQL schema
//!
//! The generator connects to a database, lists its tables and writes three
//! files per table into an output directory:
//!
//! - `<Table>.rs`: a struct with one field per column
//! - `<Table>Dao.rs`: a DAO stub with `insert`, `find_by_id` and `find_all`
//! - `<Table>Example.rs`: a small program exercising the DAO
//!
//! # CLI Usage
//!
//! ```bash
//! daogen database.properties
//! ```
//!
//! where `database.properties` holds:
//!
//! ```text
//! db.url=mysql://localhost:3306/shop
//! db.user=shop
//! db.password=secret
//! ```
//!
//! # Library Usage
//!
//! ```rust,ignore
//! use daogen::{ConnectionConfig, Generator, MySqlSchemaSource};
//!
//! let config = ConnectionConfig::from_file("database.properties".as_ref())?;
//! let mut source = MySqlSchemaSource::connect(&config).await?;
//! let report = Generator::new("src/generated").run(&mut source).await?;
//! source.disconnect().await?;
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

pub use codegen::ArtifactKind;
pub use config::ConnectionConfig;
pub use error::{CodegenError, Result};
pub use schema::{MySqlSchemaSource, SchemaSource, StaticSchemaSource};

/// A single emission step that failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub table: String,
    pub artifact: ArtifactKind,
    pub message: String,
}

/// Outcome of a generator run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Number of tables the source listed
    pub tables: usize,
    /// Files written, in emission order
    pub files_written: Vec<PathBuf>,
    /// Steps that failed; the run continued past each of them
    pub failures: Vec<StepFailure>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Writes the record, DAO and example files for every table of a schema
#[derive(Debug, Clone)]
pub struct Generator {
    output_dir: PathBuf,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(config::defaults::OUTPUT_DIR)
    }
}

impl Generator {
    /// Create a generator writing into `output_dir`
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory generated files are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Generate all files for every table the source lists.
    ///
    /// Failing to list tables or to create the output directory aborts the
    /// run. Any other failure is logged, recorded in the report, and skips
    /// only the step it happened in.
    pub async fn run<S>(&self, source: &mut S) -> Result<GenerationReport>
    where
        S: SchemaSource + ?Sized,
    {
        fs::create_dir_all(&self.output_dir)?;

        let tables = source.list_tables().await?;
        info!("Found {} tables", tables.len());

        let mut report = GenerationReport {
            tables: tables.len(),
            ..Default::default()
        };

        for table in &tables {
            debug!("Generating files for table {}", table);
            for kind in ArtifactKind::ALL {
                let result = match kind {
                    ArtifactKind::Record => self.emit_record_type(source, table).await,
                    ArtifactKind::Dao => self.emit_dao_stub(table),
                    ArtifactKind::Example => self.emit_example(table),
                };
                match result {
                    Ok(path) => report.files_written.push(path),
                    Err(e) => {
                        error!("Failed to generate {} for table {}: {}", kind, table, e);
                        report.failures.push(StepFailure {
                            table: table.clone(),
                            artifact: kind,
                            message: e.to_string(),
                        });
                    }
                }
            }
        }

        info!(
            "Wrote {} files for {} tables ({} failed steps)",
            report.files_written.len(),
            report.tables,
            report.failures.len()
        );
        Ok(report)
    }

    /// Query the table's columns and write `<Table>.rs`
    pub async fn emit_record_type<S>(&self, source: &mut S, table: &str) -> Result<PathBuf>
    where
        S: SchemaSource + ?Sized,
    {
        let columns = source.list_columns(table).await?;
        let metadata = schema::TableMetadata::new(table, columns);
        let code = codegen::render_record(&metadata)?;
        self.write_artifact(table, ArtifactKind::Record, &code)
    }

    /// Write `<Table>Dao.rs`
    pub fn emit_dao_stub(&self, table: &str) -> Result<PathBuf> {
        let code = codegen::render_dao(table)?;
        self.write_artifact(table, ArtifactKind::Dao, &code)
    }

    /// Write `<Table>Example.rs`
    pub fn emit_example(&self, table: &str) -> Result<PathBuf> {
        let code = codegen::render_example(table)?;
        self.write_artifact(table, ArtifactKind::Example, &code)
    }

    fn write_artifact(&self, table: &str, kind: ArtifactKind, code: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(kind.file_name(table));
        fs::write(&path, code)?;
        debug!("Wrote {}", path.display());
        Ok(path)
    }
}

/// Main entry point: load the connection config, introspect the database
/// and generate files into `output_dir`.
///
/// Configuration and connection failures are returned before any file is
/// written.
pub async fn run_from_config_file(
    config_path: &Path,
    output_dir: impl AsRef<Path>,
) -> Result<GenerationReport> {
    info!("Loading configuration: {:?}", config_path);
    let config = ConnectionConfig::from_file(config_path)?;

    info!("Connecting to {}", config.redacted_url());
    let mut source = MySqlSchemaSource::connect(&config).await?;

    let report = Generator::new(output_dir).run(&mut source).await;

    if let Err(e) = source.disconnect().await {
        warn!("Failed to close database connection: {}", e);
    }
    report
}
