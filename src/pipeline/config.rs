//! Configuration for the chef pipeline and its front end.
//!
//! Values come from defaults, then environment variables, then CLI flags
//! (applied by the caller through the `with_*` builders).

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::agents::DEFAULT_IMAGE_BASE;

/// Address the kitchen server binds to by default.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";

/// Highest extremeness level a user can pick.
pub const MAX_EXTREMENESS_LEVEL: u8 = 5;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    /// Configuration validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// When the optional food critic runs.
///
/// Written as `never`, `always` or `above:N` in env vars and CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CriticPolicy {
    /// Never run the critic.
    #[default]
    Never,
    /// Run the critic after every dish.
    Always,
    /// Run the critic when the order's extremeness level is above the threshold.
    AboveExtremeness(u8),
}

impl CriticPolicy {
    /// Returns true if the critic should review a dish of this extremeness.
    pub fn should_critique(&self, extremeness_level: u8) -> bool {
        match self {
            CriticPolicy::Never => false,
            CriticPolicy::Always => true,
            CriticPolicy::AboveExtremeness(threshold) => extremeness_level > *threshold,
        }
    }
}

impl fmt::Display for CriticPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriticPolicy::Never => write!(f, "never"),
            CriticPolicy::Always => write!(f, "always"),
            CriticPolicy::AboveExtremeness(threshold) => write!(f, "above:{}", threshold),
        }
    }
}

impl FromStr for CriticPolicy {
    type Err = ConfigError;

    /// Parses `never`, `always` or `above:N` (N in 0-5).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        match value.as_str() {
            "never" | "off" => Ok(CriticPolicy::Never),
            "always" | "on" => Ok(CriticPolicy::Always),
            other => {
                let threshold = other.strip_prefix("above:").ok_or_else(|| {
                    ConfigError::InvalidValue {
                        key: "critic policy".to_string(),
                        message: format!("'{}' is not one of never, always, above:N", s),
                    }
                })?;
                let threshold: u8 =
                    threshold
                        .trim()
                        .parse()
                        .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                            key: "critic policy".to_string(),
                            message: format!("bad threshold '{}': {}", threshold, e),
                        })?;
                if threshold > MAX_EXTREMENESS_LEVEL {
                    return Err(ConfigError::InvalidValue {
                        key: "critic policy".to_string(),
                        message: format!(
                            "threshold {} is above the maximum extremeness level {}",
                            threshold, MAX_EXTREMENESS_LEVEL
                        ),
                    });
                }
                Ok(CriticPolicy::AboveExtremeness(threshold))
            }
        }
    }
}

/// Configuration for the pipeline and the kitchen server.
#[derive(Debug, Clone)]
pub struct ChefConfig {
    /// Address the kitchen server listens on.
    pub bind_addr: String,
    /// When the food critic runs.
    pub critic_policy: CriticPolicy,
    /// Base URL of the placeholder image service.
    pub placeholder_image_base: String,
    /// Optional YAML file overriding the kitchen form catalog.
    pub kitchen_file: Option<PathBuf>,
}

impl Default for ChefConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            critic_policy: CriticPolicy::Never,
            placeholder_image_base: DEFAULT_IMAGE_BASE.to_string(),
            kitchen_file: None,
        }
    }
}

impl ChefConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CHEF_BIND_ADDR`: Server address (default: 127.0.0.1:8501)
    /// - `CHEF_CRITIC_POLICY`: `never`, `always` or `above:N` (default: never)
    /// - `CHEF_PLACEHOLDER_IMAGE_BASE`: Placeholder image base URL
    /// - `CHEF_KITCHEN_FILE`: YAML kitchen catalog
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(val) = lookup("CHEF_BIND_ADDR") {
            config.bind_addr = val;
        }

        if let Some(val) = lookup("CHEF_CRITIC_POLICY") {
            config.critic_policy = val.parse().map_err(|e: ConfigError| {
                ConfigError::InvalidValue {
                    key: "CHEF_CRITIC_POLICY".to_string(),
                    message: e.to_string(),
                }
            })?;
        }

        if let Some(val) = lookup("CHEF_PLACEHOLDER_IMAGE_BASE") {
            config.placeholder_image_base = val;
        }

        if let Some(val) = lookup("CHEF_KITCHEN_FILE") {
            if !val.trim().is_empty() {
                config.kitchen_file = Some(PathBuf::from(val));
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_addr.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "bind_addr must not be empty".to_string(),
            ));
        }

        if self.placeholder_image_base.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "placeholder_image_base must not be empty".to_string(),
            ));
        }

        if let CriticPolicy::AboveExtremeness(threshold) = self.critic_policy {
            if threshold > MAX_EXTREMENESS_LEVEL {
                return Err(ConfigError::ValidationFailed(format!(
                    "critic threshold {} exceeds {}",
                    threshold, MAX_EXTREMENESS_LEVEL
                )));
            }
        }

        Ok(())
    }

    /// Sets the bind address.
    pub fn with_bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.bind_addr = addr.into();
        self
    }

    /// Sets the critic policy.
    pub fn with_critic_policy(mut self, policy: CriticPolicy) -> Self {
        self.critic_policy = policy;
        self
    }

    /// Sets the placeholder image base URL.
    pub fn with_placeholder_image_base(mut self, base: impl Into<String>) -> Self {
        self.placeholder_image_base = base.into();
        self
    }

    /// Sets the kitchen catalog file.
    pub fn with_kitchen_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.kitchen_file = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ChefConfig::default();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.critic_policy, CriticPolicy::Never);
        assert_eq!(config.placeholder_image_base, DEFAULT_IMAGE_BASE);
        assert!(config.kitchen_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ChefConfig::new()
            .with_bind_addr("0.0.0.0:9000")
            .with_critic_policy(CriticPolicy::Always)
            .with_placeholder_image_base("http://img")
            .with_kitchen_file("kitchen.yaml");

        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.critic_policy, CriticPolicy::Always);
        assert_eq!(config.placeholder_image_base, "http://img");
        assert_eq!(config.kitchen_file, Some(PathBuf::from("kitchen.yaml")));
    }

    #[test]
    fn test_from_lookup_reads_all_keys() {
        let config = ChefConfig::from_lookup(lookup_from(&[
            ("CHEF_BIND_ADDR", "0.0.0.0:80"),
            ("CHEF_CRITIC_POLICY", "above:3"),
            ("CHEF_PLACEHOLDER_IMAGE_BASE", "http://img"),
            ("CHEF_KITCHEN_FILE", "/etc/kitchen.yaml"),
        ]))
        .expect("valid environment");

        assert_eq!(config.bind_addr, "0.0.0.0:80");
        assert_eq!(config.critic_policy, CriticPolicy::AboveExtremeness(3));
        assert_eq!(config.placeholder_image_base, "http://img");
        assert_eq!(config.kitchen_file, Some(PathBuf::from("/etc/kitchen.yaml")));
    }

    #[test]
    fn test_from_lookup_rejects_bad_policy() {
        let err = ChefConfig::from_lookup(lookup_from(&[("CHEF_CRITIC_POLICY", "sometimes")]))
            .expect_err("bad policy must be rejected");
        assert!(err.to_string().contains("CHEF_CRITIC_POLICY"));
    }

    #[test]
    fn test_validation_rejects_empty_image_base() {
        let config = ChefConfig::new().with_placeholder_image_base(" ");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_validation_rejects_out_of_range_threshold() {
        let config = ChefConfig::new().with_critic_policy(CriticPolicy::AboveExtremeness(9));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_critic_policy_parsing() {
        assert_eq!("never".parse::<CriticPolicy>().ok(), Some(CriticPolicy::Never));
        assert_eq!("ALWAYS".parse::<CriticPolicy>().ok(), Some(CriticPolicy::Always));
        assert_eq!(
            "above:3".parse::<CriticPolicy>().ok(),
            Some(CriticPolicy::AboveExtremeness(3))
        );
        assert!("above:6".parse::<CriticPolicy>().is_err());
        assert!("above:x".parse::<CriticPolicy>().is_err());
        assert!("maybe".parse::<CriticPolicy>().is_err());
    }

    #[test]
    fn test_critic_policy_display_round_trips() {
        for policy in [
            CriticPolicy::Never,
            CriticPolicy::Always,
            CriticPolicy::AboveExtremeness(2),
        ] {
            assert_eq!(policy.to_string().parse::<CriticPolicy>().ok(), Some(policy));
        }
    }

    #[test]
    fn test_should_critique() {
        assert!(!CriticPolicy::Never.should_critique(5));
        assert!(CriticPolicy::Always.should_critique(1));
        let policy = CriticPolicy::AboveExtremeness(3);
        assert!(!policy.should_critique(3));
        assert!(policy.should_critique(4));
    }
}
