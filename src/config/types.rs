// Configuration type definitions

use serde::Deserialize;

/// Default classification service address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default suggestion rotation interval in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 4000;

/// Classification service section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
        }
    }
}

/// UI tuning section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    /// Suggestion rotation interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            tick_ms: default_tick_ms(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_tick_ms() -> u64 {
    DEFAULT_TICK_MS
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.ui.tick_ms, DEFAULT_TICK_MS);
    }

    #[test]
    fn partial_sections_use_field_defaults() {
        let config: Config = toml::from_str("[api]\n").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);

        let config: Config = toml::from_str("[ui]\n").unwrap();
        assert_eq!(config.ui.tick_ms, DEFAULT_TICK_MS);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config: Config = toml::from_str(
            r#"
[api]
base_url = "http://classifier.internal:8080"

[ui]
tick_ms = 2500
"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://classifier.internal:8080");
        assert_eq!(config.ui.tick_ms, 2500);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Any combination of present/absent sections parses and fills
        // missing fields with defaults.
        #[test]
        fn prop_missing_sections_use_defaults(
            include_api in prop::bool::ANY,
            include_ui in prop::bool::ANY,
            tick_ms in 100u64..60_000u64,
        ) {
            let mut toml_content = String::new();
            if include_api {
                toml_content.push_str("[api]\nbase_url = \"http://localhost:9999\"\n");
            }
            if include_ui {
                toml_content.push_str(&format!("[ui]\ntick_ms = {tick_ms}\n"));
            }

            let config: Config = toml::from_str(&toml_content).unwrap();

            if include_api {
                prop_assert_eq!(&config.api.base_url, "http://localhost:9999");
            } else {
                prop_assert_eq!(&config.api.base_url, DEFAULT_BASE_URL);
            }
            if include_ui {
                prop_assert_eq!(config.ui.tick_ms, tick_ms);
            } else {
                prop_assert_eq!(config.ui.tick_ms, DEFAULT_TICK_MS);
            }
        }
    }
}
