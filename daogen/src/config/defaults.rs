//! Default configuration values - single source of truth

/// Property holding the database URL
pub const URL_KEY: &str = "db.url";

/// Property holding the database user
pub const USER_KEY: &str = "db.user";

/// Property holding the database password
pub const PASSWORD_KEY: &str = "db.password";

/// Prefix accepted in front of `mysql://` URLs copied from JDBC configs
pub const JDBC_PREFIX: &str = "jdbc:";

/// Directory generated files are written to when none is given
pub const OUTPUT_DIR: &str = ".";

/// File extension of generated artifacts
pub const FILE_EXTENSION: &str = "rs";
