use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Public TheMealDB v1 endpoint using the shared test key
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Runtime configuration for the meal client
#[derive(Debug, Deserialize, Clone)]
pub struct MealConfig {
    /// Base URL of the recipe API (without trailing `/random.php`)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for MealConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("random-meal/{}", env!("CARGO_PKG_VERSION"))
}

impl MealConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RANDOM_MEAL__ prefix
    /// 2. random-meal.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RANDOM_MEAL__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("random-meal").required(false))
            .add_source(
                Environment::with_prefix("RANDOM_MEAL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_values() {
        let config = MealConfig::default();
        assert_eq!(config.base_url, "https://www.themealdb.com/api/json/v1/1");
        assert!(config.user_agent.starts_with("random-meal/"));
    }

    #[test]
    fn test_empty_source_falls_back_to_defaults() {
        let config: MealConfig = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_toml_overrides_base_url() {
        let config: MealConfig = Config::builder()
            .add_source(File::from_str(
                r#"base_url = "http://localhost:8080/api""#,
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert!(config.user_agent.starts_with("random-meal/"));
    }

    #[test]
    fn test_load_without_file() {
        // No random-meal.toml in the test working directory; must not panic
        let result = MealConfig::load();
        assert!(result.is_ok());
    }
}
