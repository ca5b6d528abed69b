//! Configuration for the ledger

use crate::types::PrincipalId;
use serde::{Deserialize, Serialize};

/// Ledger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// System owner principal, fixed at deployment time.
    ///
    /// Holds the cross-cutting authorization bypass for authenticity checks
    /// and administrative operations.
    pub system_owner: PrincipalId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "harvest-ledger".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            system_owner: PrincipalId::new("agrotrace-admin"),
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(name) = std::env::var("LEDGER_SERVICE_NAME") {
            config.service_name = name;
        }

        if let Ok(owner) = std::env::var("LEDGER_SYSTEM_OWNER") {
            config.system_owner = PrincipalId::new(owner);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service_name, "harvest-ledger");
        assert_eq!(config.system_owner, PrincipalId::new("agrotrace-admin"));
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
service_name = "harvest-ledger-test"
service_version = "0.0.1"
system_owner = "deployer"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.service_name, "harvest-ledger-test");
        assert_eq!(config.system_owner, PrincipalId::new("deployer"));
    }

    #[test]
    fn test_config_from_missing_file() {
        let result = Config::from_file("/nonexistent/ledger.toml");
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_config_from_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();

        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }
}
