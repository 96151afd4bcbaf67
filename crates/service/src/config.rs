use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Built-in defaults, overridable through `PLATEN`-prefixed environment
    /// variables (e.g. `PLATEN_SERVER__PORT=9000`).
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(config::Environment::with_prefix("PLATEN").separator("__"))
            .build()?
            .try_deserialize()
    }
}
