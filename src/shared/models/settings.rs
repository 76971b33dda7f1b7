use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SETTINGS_FILENAME: &str = "settings.json";
const ENV_PREFIX: &str = "TAREAS_";

/// Server settings.
///
/// Precedence (highest wins): `TAREAS_*` environment variables with `__`
/// between sections, then `settings.json`, then the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub tcp_socket_binding: String,
    pub tcp_socket_port: u16,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite path, or `:memory:`. An in-memory database only lives as long
    /// as its connection, so pair it with `pool_size = 1`; such connections
    /// are never recycled by the pool.
    pub url: String,
    pub pool_size: u32,
    pub busy_timeout_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsSettings {
    pub allowed_origin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid settings: {0}")]
    Figment(#[from] figment::Error),
    #[error("database.pool_size must be at least 1")]
    EmptyPool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tcp_socket_binding: "0.0.0.0".to_string(),
            tcp_socket_port: 3000,
            database: DatabaseSettings::default(),
            cors: CorsSettings::default(),
            log: LogSettings::default(),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "tareas.db".to_string(),
            pool_size: 8,
            busy_timeout_ms: 5000,
        }
    }
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:4200".to_string(),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Settings, ConfigError> {
        let settings: Settings = Self::figment().extract()?;
        if settings.database.pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }
        Ok(settings)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Json::file(SETTINGS_FILENAME))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}
