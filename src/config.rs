use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbwhtbSYlSYopTfPVJR4yd2vFXSg4cKFKffzGMq5AxfR4omqpAaiZyHz7BvLjkFREZsw/exec";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub port: u16,
    pub timeout: Duration,
    pub registry_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint = lookup("SHEET_ENDPOINT")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let timeout_secs = lookup("SHEET_TIMEOUT_SECS")
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let registry_path = lookup("ZONE_REGISTRY_PATH").map(PathBuf::from);

        Self {
            endpoint,
            port,
            timeout: Duration::from_secs(timeout_secs),
            registry_path,
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
