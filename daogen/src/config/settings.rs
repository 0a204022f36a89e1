//! Connection settings for daogen

use config::{Config, File, FileFormat};
use std::fmt;
use std::path::Path;

use super::defaults;
use crate::error::{CodegenError, Result};

/// Database connection properties read from the configuration file.
///
/// The file uses `key=value` lines; only `db.url`, `db.user` and
/// `db.password` are read, everything else is ignored.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Database URL, `mysql://host:port/database` or `jdbc:mysql://...`
    pub url: String,

    /// User name, overrides any user in the URL
    pub user: String,

    /// Password, overrides any password in the URL
    pub password: String,
}

impl ConnectionConfig {
    /// Build a config from explicit values
    pub fn new(
        url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            user: user.into(),
            password: password.into(),
        }
    }

    /// Load the connection properties from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = File::from(path).format(FileFormat::Ini).required(true);
        let settings = Config::builder().add_source(source).build().map_err(|e| {
            CodegenError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_settings(&settings)
    }

    /// Parse the connection properties from text in the same format as the file
    pub fn from_properties(text: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Ini))
            .build()?;
        Self::from_settings(&settings)
    }

    fn from_settings(settings: &Config) -> Result<Self> {
        Ok(Self {
            url: required(settings, defaults::URL_KEY)?,
            user: required(settings, defaults::USER_KEY)?,
            password: required(settings, defaults::PASSWORD_KEY)?,
        })
    }

    /// The URL as the MySQL driver expects it.
    ///
    /// A `jdbc:` URL loses its prefix and its query string; Connector/J
    /// parameters such as `useSSL` mean nothing to `mysql_async`.
    pub fn driver_url(&self) -> &str {
        let url = self.url.trim();
        match url.strip_prefix(defaults::JDBC_PREFIX) {
            Some(stripped) => stripped.split_once('?').map_or(stripped, |(base, _)| base),
            None => url,
        }
    }

    /// The URL with any password in its user info replaced by `***`
    pub fn redacted_url(&self) -> String {
        let url = self.url.trim();
        let Some(scheme_end) = url.find("://") else {
            return url.to_string();
        };
        let (head, rest) = url.split_at(scheme_end + 3);
        let authority_end = rest.find(['/', '?']).unwrap_or(rest.len());
        match rest[..authority_end].rfind('@') {
            Some(at) => match rest[..at].split_once(':') {
                Some((user, _)) => format!("{}{}:***{}", head, user, &rest[at..]),
                None => url.to_string(),
            },
            None => url.to_string(),
        }
    }
}

fn required(settings: &Config, key: &str) -> Result<String> {
    settings.get_string(key).map_err(|e| match e {
        config::ConfigError::NotFound(_) => {
            CodegenError::ConfigError(format!("Missing required property: {}", key))
        }
        other => CodegenError::ConfigError(format!("Invalid property {}: {}", key, other)),
    })
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("url", &self.redacted_url())
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
