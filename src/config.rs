use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the cocktail API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Upper bound on candidates fetched for one filter query before
    /// client-side pagination. The upstream filter endpoint has no paging of
    /// its own, so this caps how much one search pulls down.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Number of results per rendered search page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            max_results: default_max_results(),
            page_size: default_page_size(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.thecocktaildb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_results() -> usize {
    100
}

fn default_page_size() -> usize {
    10
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COCKTAIL__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COCKTAIL__BASE_URL, COCKTAIL__PAGE_SIZE
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("COCKTAIL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
