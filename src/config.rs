//! Server configuration.
//!
//! Precedence per field: CLI flag / env var (via clap), then the optional
//! TOML config file's `[server]` table, then the built-in default.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

const DEFAULT_PORT: u16 = 4400;

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

/// `[server]` table of the optional config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ServerTable {
    port: Option<u16>,
    bind_address: Option<String>,
    log: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    server: ServerTable,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// REST API port.
    pub port: u16,
    /// Bind address (127.0.0.1 by default; 0.0.0.0 exposes the API on the LAN).
    pub bind_address: String,
    /// Log filter passed to tracing-subscriber (e.g. "info", "workforced=debug").
    pub log: String,
}

impl ServerConfig {
    pub fn new(
        port: Option<u16>,
        bind_address: Option<String>,
        log: Option<String>,
        config_path: Option<&Path>,
    ) -> Self {
        let file = config_path.map(load_toml).unwrap_or_default();

        Self {
            port: port.or(file.server.port).unwrap_or(DEFAULT_PORT),
            bind_address: bind_address
                .or(file.server.bind_address)
                .unwrap_or_else(default_bind_address),
            log: log
                .or(file.server.log)
                .unwrap_or_else(|| "info".to_string()),
        }
    }
}

fn load_toml(path: &Path) -> ConfigFile {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read config file, using defaults");
            return ConfigFile::default();
        }
    };
    match toml::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "invalid config file, using defaults");
            ConfigFile::default()
        }
    }
}
