use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;
use std::time::Duration;

/// Settings for talking to the recipe backend
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Base URL of the recipe API (e.g., "http://localhost:3000")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("recipe-catalog/{}", env!("CARGO_PKG_VERSION"))
}

impl CatalogConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPES__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from file and environment variables
///
/// See [`CatalogConfig::load`] for the source priority.
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    // Optional config file (can be missing)
    layered(File::with_name("config").required(false), environment())
}

/// Environment variables with RECIPES__ prefix; "__" separates nested keys
fn environment() -> Environment {
    Environment::with_prefix("RECIPES")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Environment values override file values, which override defaults
fn layered<F>(file: F, env: Environment) -> Result<CatalogConfig, ConfigError>
where
    F: Source + Send + Sync + 'static,
{
    Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_values() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.starts_with("recipe-catalog/"));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: CatalogConfig = Config::builder()
            .add_source(File::from_str(
                "base_url = \"http://recipes.internal:8080\"",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.base_url, "http://recipes.internal:8080");
        assert_eq!(config.timeout, 30);
    }

    fn toml(content: &str) -> File<config::FileSourceString, FileFormat> {
        File::from_str(content, FileFormat::Toml)
    }

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(map))
    }

    #[test]
    fn test_environment_overrides_file() {
        let config = layered(
            toml("base_url = \"http://from-file:8080\"\ntimeout = 10"),
            env(&[("RECIPES__TIMEOUT", "5")]),
        )
        .unwrap();

        assert_eq!(config.base_url, "http://from-file:8080");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.user_agent, default_user_agent());
    }

    #[test]
    fn test_environment_only() {
        let config = layered(
            toml(""),
            env(&[
                ("RECIPES__BASE_URL", "http://recipes.example:9000"),
                ("RECIPES__TIMEOUT", "12"),
                ("UNRELATED__TIMEOUT", "99"),
            ]),
        )
        .unwrap();

        assert_eq!(config.base_url, "http://recipes.example:9000");
        assert_eq!(config.request_timeout(), Duration::from_secs(12));
    }

    #[test]
    fn test_non_numeric_timeout_is_rejected() {
        let result = layered(toml(""), env(&[("RECIPES__TIMEOUT", "soon")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_no_sources_gives_defaults() {
        let config = layered(toml(""), env(&[])).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }
}
