use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the kids video aggregation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Upstream API endpoints and client identification
    pub upstream: UpstreamConfig,

    /// Two-phase aggregation budget over the curated sources
    pub aggregation: AggregationPolicy,

    /// Curated content sources
    pub sources: SourcesConfig,

    /// HTTP API server settings
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Browse (home feed / channel) endpoint
    pub browse_url: String,

    /// Search endpoint
    pub search_url: String,

    /// Client surface name sent in the request context
    pub client_name: String,

    /// Client surface version sent in the request context
    pub client_version: String,

    /// Numeric client name sent as a request header on browse calls
    pub client_name_header: String,

    /// Origin header for browse calls
    pub origin: String,

    /// User-Agent for all upstream calls
    pub user_agent: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,

    /// Interface language hint for search
    pub hl: String,

    /// Kids corpus preference for search
    pub corpus_preference: String,

    /// Kids search mode toggle
    pub no_search_mode: String,
}

/// Named constants of the two-pass fetch budget
///
/// The primary pass visits up to `primary_source_limit` sources taking
/// `primary_cap` items each; the fallback pass only runs when the total is
/// still below `fallback_floor` and takes `fallback_cap` items per remaining
/// source. Both passes stop at `target_total`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationPolicy {
    pub primary_source_limit: usize,
    pub primary_cap: usize,
    pub fallback_cap: usize,
    pub target_total: usize,
    pub fallback_floor: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Browse ids of curated kid-friendly channels, in fetch order
    pub channels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the API server
    pub bind_address: String,

    /// Listen port for the API server
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream: UpstreamConfig::default(),
            aggregation: AggregationPolicy::default(),
            sources: SourcesConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            browse_url: "https://www.youtubekids.com/youtubei/v1/browse?alt=json".to_string(),
            search_url: "https://www.youtubekids.com/youtubei/v1/search?alt=json".to_string(),
            client_name: "WEB_KIDS".to_string(),
            client_version: "2.20251120.00.00".to_string(),
            client_name_header: "76".to_string(),
            origin: "https://www.youtubekids.com".to_string(),
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/141.0.0.0 Safari/537.36".to_string(),
            timeout_seconds: 30,
            hl: "en".to_string(),
            corpus_preference: "KIDS_CORPUS_PREFERENCE_TWEEN".to_string(),
            no_search_mode: "YT_KIDS_NO_SEARCH_MODE_OFF".to_string(),
        }
    }
}

impl Default for AggregationPolicy {
    fn default() -> Self {
        Self {
            primary_source_limit: 5,
            primary_cap: 4,
            fallback_cap: 3,
            target_total: 20,
            fallback_floor: 15,
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            channels: vec![
                "UCbCmjCuTUZos6Inko4u57UQ".to_string(), // Cocomelon
                "UCLsooMJoIpl_5ux8RFar7Vg".to_string(), // Super Simple Songs
                "UCcdwLMPsaU2ezNSJU1nFoBQ".to_string(), // Pinkfong
                "UCoookXUzPciGrEZEXmh4Jjg".to_string(), // Sesame Street
                "UC2pmfLm7iq6Ov1UwYrWYkZA".to_string(), // Vlad and Niki
                "UCk8GzjMOrta8yxDcKfylJYw".to_string(), // Kids Diana Show
                "UCKAqou7V9FAWXpZd9xtOg3Q".to_string(), // Blippi
                "UC5PYHgAzuYx4ggCzxy4qtJw".to_string(), // Little Baby Bum
            ],
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8500,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        // Try to load from various locations
        let config_paths = [
            "kids-aggregator.toml",
            "config/kids-aggregator.toml",
            "~/.config/kids-aggregator/config.toml",
            "/etc/kids-aggregator/config.toml",
        ];

        for path in &config_paths {
            if let Ok(config_str) = std::fs::read_to_string(path) {
                match toml::from_str(&config_str) {
                    Ok(config) => {
                        tracing::info!("📄 Loaded configuration from: {}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {}: {}", path, e);
                    }
                }
            }
        }

        // Try environment variables
        if let Ok(config) = Self::from_env() {
            return Ok(config);
        }

        Err(anyhow!("No configuration file found"))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(version) = std::env::var("KIDS_AGGREGATOR_CLIENT_VERSION") {
            config.upstream.client_version = version;
        }

        if let Ok(timeout) = std::env::var("KIDS_AGGREGATOR_TIMEOUT") {
            config.upstream.timeout_seconds = timeout.parse().unwrap_or(30);
        }

        if let Ok(port) = std::env::var("KIDS_AGGREGATOR_PORT") {
            config.server.port = port.parse().unwrap_or(8500);
        }

        if let Ok(channels) = std::env::var("KIDS_AGGREGATOR_CHANNELS") {
            config.sources.channels = channels
                .split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect();
        }

        Ok(config)
    }

    /// Sanity-check the aggregation budget and source list
    pub fn validate(&self) -> Result<()> {
        if self.aggregation.primary_cap == 0 || self.aggregation.fallback_cap == 0 {
            return Err(anyhow!("per-source caps must be greater than zero"));
        }
        if self.aggregation.fallback_floor > self.aggregation.target_total {
            return Err(anyhow!(
                "fallback_floor ({}) must not exceed target_total ({})",
                self.aggregation.fallback_floor,
                self.aggregation.target_total
            ));
        }
        if self.sources.channels.is_empty() {
            return Err(anyhow!("at least one curated channel is required"));
        }
        Ok(())
    }
}
