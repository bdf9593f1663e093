use serde::Deserialize;

use crate::services::DEFAULT_SHORTLIST_SIZE;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the joined restaurant/hotel/place CSV
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of hotels and places in each day's shortlists
    #[serde(default = "default_shortlist_size")]
    pub shortlist_size: usize,

    /// Largest `num_days` a request may ask for
    #[serde(default = "default_max_days")]
    pub max_days: i64,

    /// Fixed seed for restaurant picks; random when unset
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_dataset_path() -> String {
    "dataset_without_duplicates.csv".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_shortlist_size() -> usize {
    DEFAULT_SHORTLIST_SIZE
}

fn default_max_days() -> i64 {
    30
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address string to bind the server to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
