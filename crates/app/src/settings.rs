//! Application settings, read from `mahsool.toml` (optional) and the
//! `MAHSOOL__*` environment, environment winning.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Where the ledger lives. `":memory:"` selects an in-memory database,
/// anything else is treated as a path to the SQLite file.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "String")]
pub enum Database {
    Memory,
    Sqlite(String),
}

impl From<String> for Database {
    fn from(value: String) -> Self {
        if value == ":memory:" {
            Self::Memory
        } else {
            Self::Sqlite(value)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct App {
    #[serde(default = "default_level")]
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub database: Database,
    pub bind: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("mahsool").required(false))
            .add_source(Environment::with_prefix("MAHSOOL").separator("__"))
            .set_default("app.level", "info")?
            .set_default("server.database", "./mahsool.db")?
            .build()?;

        settings.try_deserialize()
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_port() -> u16 {
    3000
}
