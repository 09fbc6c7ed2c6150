use std::path::PathBuf;

use serde::Deserialize;

/// Server configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Catalog file (.csv or .dat)
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Recommendations returned when a request gives no limit
    #[serde(default = "default_recommend_limit")]
    pub recommend_limit: usize,

    /// Start with an empty catalog instead of exiting when loading fails
    #[serde(default)]
    pub catalog_fallback_empty: bool,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/movies.csv")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_recommend_limit() -> usize {
    recommender::DEFAULT_TOP_N
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_env() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();

        assert_eq!(config.catalog_path, PathBuf::from("data/movies.csv"));
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.recommend_limit, 10);
        assert!(!config.catalog_fallback_empty);
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("CATALOG_PATH".to_string(), "/srv/movies.dat".to_string()),
            ("PORT".to_string(), "9000".to_string()),
            ("CATALOG_FALLBACK_EMPTY".to_string(), "true".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.catalog_path, PathBuf::from("/srv/movies.dat"));
        assert_eq!(config.port, 9000);
        assert!(config.catalog_fallback_empty);
    }
}
