use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Seed the built-in demo catalog when no seed file is given
    pub seed_demo: bool,
    pub seed_file: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Layer `default`, `{RUN_MODE}` and `local` files from `dir`, then `TRIPDESK__*` env vars
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let dir = dir.as_ref();
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let file = |name: &str| {
            config::File::with_name(&dir.join(name).to_string_lossy()).required(false)
        };

        let s = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("catalog.seed_demo", true)?
            .add_source(file("default"))
            .add_source(file(&run_mode))
            // Not checked in
            .add_source(file("local"))
            // Eg.. `TRIPDESK__SERVER__PORT=8080` sets `server.port`
            .add_source(
                config::Environment::with_prefix("TRIPDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
