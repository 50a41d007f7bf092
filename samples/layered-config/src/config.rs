//! Service configuration shape.
//!
//! Every section is a nested record, so a layer file may override a single
//! key deep inside a section without repeating its siblings.

use recursive_partial::RecursivePartial;
use serde::{Deserialize, Serialize};

// =============================================================================
// ServiceConfig
// =============================================================================

/// Complete configuration of the sample service.
///
/// # Examples
///
/// ```
/// use layered_config_sample::config::{PartialServerConfig, PartialServiceConfig, ServiceConfig};
/// use recursive_partial::Overlay;
///
/// let config = ServiceConfig::default().overlaid(PartialServiceConfig {
///     server: Some(PartialServerConfig {
///         port: Some(9090),
///         ..Default::default()
///     }),
///     ..Default::default()
/// });
///
/// assert_eq!(config.server.port, 9090);
/// assert_eq!(config.server.host, "127.0.0.1");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, RecursivePartial)]
#[partial(serde, derive(Clone, Debug, PartialEq, Eq))]
pub struct ServiceConfig {
    /// Listener settings.
    #[partial(nested)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[partial(nested)]
    pub database: DatabaseConfig,
    /// Log output settings.
    #[partial(nested)]
    pub logging: LoggingConfig,
    /// Enabled feature flags; a layer replaces the whole list.
    pub features: Vec<String>,
}

/// Listener settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, RecursivePartial)]
#[partial(serde, derive(Clone, Debug, PartialEq, Eq))]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Worker threads; `None` picks one per core. A layer resets it with
    /// `workers: null`.
    pub workers: Option<u16>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

/// Database connection settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, RecursivePartial)]
#[partial(serde, derive(Clone, Debug, PartialEq, Eq))]
pub struct DatabaseConfig {
    /// Connection URL.
    pub url: String,
    /// Maximum pooled connections.
    pub pool_size: u32,
    /// Connect timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/service".to_string(),
            pool_size: 10,
            timeout_ms: 5_000,
        }
    }
}

/// Log output settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, RecursivePartial)]
#[partial(serde, derive(Clone, Debug, PartialEq, Eq))]
pub struct LoggingConfig {
    /// Default filter directive.
    pub level: String,
    /// Emit JSON lines instead of text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
