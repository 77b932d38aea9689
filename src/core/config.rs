//! Configurazione dei servizi
//!
//! Every service reads its settings from environment variables (optionally
//! loaded from a `.env` file). Parsing goes through a lookup function so the
//! same code can be fed from a map in tests.

use crate::core::db::DbSchema;
use dotenv::dotenv;
use std::env;
use tracing::{info, warn};

/// The independent HTTP services shipped by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Users,
    Practices,
    Journal,
}

impl Service {
    pub fn name(&self) -> &'static str {
        match self {
            Service::Users => "users",
            Service::Practices => "practices",
            Service::Journal => "journal",
        }
    }

    /// Environment variable holding the listening port
    pub fn port_var(&self) -> &'static str {
        match self {
            Service::Users => "API_PORT",
            Service::Practices => "HTTP_PORT",
            Service::Journal => "JOURNAL_PORT",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Service::Users => 8000,
            Service::Practices => 8001,
            Service::Journal => 8002,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// HTTP server bootstrap settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub reload: bool,
    pub log_level: String,
}

impl ServerSettings {
    pub fn from_lookup<F>(service: Service, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port_var = service.port_var();
        let port = match lookup(port_var) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: port_var,
                reason: format!("'{raw}' is not a number between 0-65535"),
            })?,
            None => service.default_port(),
        };

        let reload = match lookup("RELOAD") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| ConfigError::Invalid {
                var: "RELOAD",
                reason: format!("'{raw}' is not a boolean"),
            })?,
            None => false,
        };

        let log_level = lookup("LOG_LEVEL")
            .map(|level| level.trim().to_lowercase())
            .filter(|level| !level.is_empty())
            .unwrap_or_else(|| "info".to_string());

        Ok(Self {
            host,
            port,
            reload,
            log_level,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database connection settings
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub schema: DbSchema,
    pub max_connections: u32,
}

impl DatabaseSettings {
    pub fn from_lookup<F>(service: Service, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://practice_hub.db".to_string());

        let schema_name = lookup("DB_SCHEMA").unwrap_or_else(|| service.name().to_string());
        let schema = DbSchema::parse(&schema_name)?;

        let max_connections = match lookup("MAX_DB_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    var: "MAX_DB_CONNECTIONS",
                    reason: "must be a positive number".to_string(),
                })?,
            None => 5,
        };

        Ok(Self {
            url,
            schema,
            max_connections,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub service: Service,
    pub server: ServerSettings,
    pub database: DatabaseSettings,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env(service: Service) -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(service, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(service: Service, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            service,
            server: ServerSettings::from_lookup(service, &lookup)?,
            database: DatabaseSettings::from_lookup(service, &lookup)?,
        })
    }

    /// Logs the configuration, masking credentials in the database URL
    pub fn print_info(&self) {
        info!(
            service = self.service.name(),
            address = %self.server.address(),
            log_level = %self.server.log_level,
            database = %mask_url(&self.database.url),
            schema = %self.database.schema,
            max_connections = self.database.max_connections,
            "Server configuration"
        );
        if self.server.reload {
            warn!("RELOAD is set but has no effect, restart the process to pick up changes");
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Maschera l'URL del database per il logging
fn mask_url(url: &str) -> String {
    if let (Some(at_pos), Some(scheme_end)) = (url.find('@'), url.find("://")) {
        let scheme = &url[..scheme_end + 3];
        let after_at = &url[at_pos..];
        return format!("{}***{}", scheme, after_at);
    }
    url.to_string()
}
