use std::path::PathBuf;

use secrecy::Secret;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    /// Path of the local snapshot file holding the serialized record set.
    pub snapshot_path: PathBuf,

    /// Apps-Script style webhook receiving one-way replication of new
    /// records. Capability-bearing URL, so kept out of debug output.
    pub sheet_webhook_url: Option<Secret<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        // Load .env file if it exists (for local development)
        let _ = dotenvy::dotenv();

        let config = config::Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .build()?;

        Ok(Self {
            host: config.get("host").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: config.get("port").unwrap_or(3000),

            snapshot_path: config
                .get::<String>("snapshot_path")
                .unwrap_or_else(|_| "subscriptions.json".to_string())
                .into(),

            sheet_webhook_url: config
                .get::<String>("sheet_webhook_url")
                .ok()
                .map(Secret::new),
        })
    }
}
