//! Shared fixtures for the daogen integration tests

/// DDL loaded into the test database
pub const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// Split the schema into individual statements, dropping comments
pub fn schema_statements() -> Vec<String> {
    SCHEMA
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n")
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
