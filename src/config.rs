//! Settings for the middleware demo server, read from TOML.
//!
//! ```toml
//! host = "127.0.0.1"
//! port = 8080
//! log_filter = "info"
//! ```
//!
//! Every key is optional.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|source| Error::InvalidAddress { addr, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(ServerConfig::from_toml_str("").unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = ServerConfig::from_toml_str("port = 3000\nlog_filter = \"debug\"").unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = ServerConfig::from_toml_str("prot = 3000");
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_bad_host_is_invalid_address() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.socket_addr(),
            Err(Error::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "host = \"0.0.0.0\"\nport = 9000").unwrap();

        let config = ServerConfig::load(file.path()).unwrap();

        assert_eq!(config.socket_addr().unwrap().port(), 9000);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_load_missing_file() {
        let result = ServerConfig::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(Error::ConfigRead { .. })));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(
            ServerConfig::load_or_default(None).unwrap(),
            ServerConfig::default()
        );
    }
}
