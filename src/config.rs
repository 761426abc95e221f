// src/config.rs
use std::env;
use std::time::Duration;
use tracing::warn;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_API_BASE_URL";
pub const MODEL_VAR: &str = "OPENAI_MODEL";
pub const TIMEOUT_VAR: &str = "ABB_HELPER_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_api_base_url: String,
    pub openai_model: String,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            openai_api_key: None,
            openai_api_base_url: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-4".to_string(),
            request_timeout_secs: 60,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let config = Config::from_lookup(|name| env::var(name).ok());
        if config.openai_api_key.is_none() {
            warn!("{} environment variable not set.", API_KEY_VAR);
        }
        config
    }

    /// Builds a config from any variable source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Config::default();
        config.openai_api_key = read(API_KEY_VAR);
        if let Some(url) = read(BASE_URL_VAR) {
            config.openai_api_base_url = url;
        }
        if let Some(model) = read(MODEL_VAR) {
            config.openai_model = model;
        }
        if let Some(raw) = read(TIMEOUT_VAR) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid {} value '{}', using {}s.",
                    TIMEOUT_VAR, raw, config.request_timeout_secs
                ),
            }
        }
        config
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "   ")]));
        assert_eq!(config.openai_api_key, None);
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "sk-test"),
            (BASE_URL_VAR, "http://localhost:8080/v1"),
            (MODEL_VAR, "gpt-4o-mini"),
            (TIMEOUT_VAR, "15"),
        ]));
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.openai_api_base_url, "http://localhost:8080/v1");
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn invalid_timeout_falls_back_to_default() {
        for raw in ["abc", "0", "-3"] {
            let config = Config::from_lookup(lookup_from(&[(TIMEOUT_VAR, raw)]));
            assert_eq!(config.request_timeout_secs, 60, "value {raw:?}");
        }
    }
}
