//! Server configuration.

use crate::core::error::{Result, RevalidError};
use crate::core::protocol::defaults;
use crate::core::types::CacheValidator;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Listener and validator configuration.
///
/// Defaults reproduce the reference deployment: port 8899, route
/// `/test`, validator token `777`. Every field can be overridden from a
/// JSON config file; omitted fields keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_route")]
    pub route: String,
    #[serde(default)]
    pub validator: CacheValidator,
}

fn default_port() -> u16 {
    defaults::PORT
}

fn default_route() -> String {
    defaults::ROUTE.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: default_port(),
            route: default_route(),
            validator: CacheValidator::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a JSON file.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(RevalidError::Io)?;
        let config: ServerConfig = serde_json::from_str(&content)
            .map_err(|e| RevalidError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the router cannot serve.
    pub fn validate(&self) -> Result<()> {
        if !self.route.starts_with('/') {
            return Err(RevalidError::Config(format!(
                "route must start with '/': {}",
                self.route
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8899);
        assert_eq!(config.route, "/test");
        assert_eq!(config.validator.etag, "777");
    }

    #[test]
    fn test_validate_accepts_default() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bare_route() {
        let config = ServerConfig {
            route: "test".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RevalidError::Config(_))
        ));
    }

    #[test]
    fn test_deserialize_partial_fills_defaults() {
        let config: ServerConfig = serde_json::from_str(r#"{"port": 9000}"#).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.route, "/test");
        assert_eq!(config.validator.etag, "777");
    }

    #[test]
    fn test_roundtrip() {
        let config = ServerConfig {
            port: 7000,
            route: "/echo".into(),
            validator: CacheValidator::new("v2", "456", 60),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ServerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.port, 7000);
        assert_eq!(back.route, "/echo");
        assert_eq!(back.validator.etag, "v2");
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let err = ServerConfig::load(Path::new("/nonexistent/revalid.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, RevalidError::Io(_)));
    }
}
