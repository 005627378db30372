use std::time::Duration;

use linkdeck_engine::{ProbeSettings, RecordSettings};

#[derive(Debug, Clone)]
pub struct Config {
    pub records: RecordSettings,
    pub probe: ProbeSettings,
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let records = RecordSettings {
            api_url: env_opt("NOCODB_API_URL"),
            table_id: env_opt("NOCODB_TABLE_ID"),
            api_token: env_opt("NOCODB_API_TOKEN"),
        };
        let port = env_opt("PORT")
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(default_port);

        let mut probe = ProbeSettings::default();
        if let Some(ms) = env_opt("PROBE_TIMEOUT_MS").and_then(|value| value.parse().ok()) {
            probe.request_timeout = Duration::from_millis(ms);
        }

        Ok(Self {
            records,
            probe,
            port,
        })
    }
}

/// Reads an environment variable, treating blank values as unset.
fn env_opt(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
