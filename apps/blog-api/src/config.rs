//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Load the two sample posts at startup.
    pub seed_sample_posts: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            seed_sample_posts: var("SEED_SAMPLE_POSTS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.seed_sample_posts);
    }

    #[test]
    fn test_port_override() {
        assert_eq!(config_from(&[("PORT", "3000")]).port, 3000);
    }

    #[test]
    fn test_unparsable_port_falls_back() {
        assert_eq!(config_from(&[("PORT", "eighty")]).port, 8080);
    }

    #[test]
    fn test_seeding_can_be_disabled() {
        assert!(!config_from(&[("SEED_SAMPLE_POSTS", "false")]).seed_sample_posts);
        assert!(!config_from(&[("SEED_SAMPLE_POSTS", "0")]).seed_sample_posts);
    }
}
