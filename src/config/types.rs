// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/metadata/search";
pub const DEFAULT_QUERY_PARAM: &str = "q";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Reading types offered by the form when the config does not list any
pub const DEFAULT_READING_TYPES: &[&str] = &[
    "Roman",
    "Manga",
    "BD",
    "Manhwa",
    "Light Novel",
    "Comics",
    "Webtoon",
    "Essai",
    "Poésie",
    "Autre",
];

/// Metadata search section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_query_param")]
    pub query_param: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_query_param() -> String {
    DEFAULT_QUERY_PARAM.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            endpoint: default_endpoint(),
            query_param: default_query_param(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Work form section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_reading_types")]
    pub reading_types: Vec<String>,
    /// Reading type preselected in a new form
    #[serde(default)]
    pub default_reading_type: Option<String>,
}

fn default_reading_types() -> Vec<String> {
    DEFAULT_READING_TYPES.iter().map(|s| s.to_string()).collect()
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            reading_types: default_reading_types(),
            default_reading_type: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub form: FormConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.search.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.search.query_param, "q");
        assert_eq!(config.search.timeout_secs, 5);
        assert_eq!(config.form.reading_types.len(), DEFAULT_READING_TYPES.len());
        assert_eq!(config.form.reading_types[0], "Roman");
    }

    #[test]
    fn test_full_config_parses() {
        let config: Config = toml::from_str(
            r#"
[search]
endpoint = "https://books.example.org/api/search"
query_param = "title"
timeout_secs = 12

[form]
reading_types = ["Manga", "Webtoon"]
default_reading_type = "Webtoon"
"#,
        )
        .unwrap();

        assert_eq!(config.search.endpoint, "https://books.example.org/api/search");
        assert_eq!(config.search.query_param, "title");
        assert_eq!(config.search.timeout_secs, 12);
        assert_eq!(config.form.reading_types, vec!["Manga", "Webtoon"]);
        assert_eq!(config.form.default_reading_type.as_deref(), Some("Webtoon"));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[search]\ntimeout_secs = \"soon\"\n");
        assert!(result.is_err());
    }

    // For any subset of fields present in the [search] section, missing fields
    // fall back to their defaults and present ones are kept.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_search_fields_use_defaults(
            include_endpoint in prop::bool::ANY,
            include_param in prop::bool::ANY,
            include_timeout in prop::bool::ANY
        ) {
            let mut toml_content = String::from("[search]\n");
            if include_endpoint {
                toml_content.push_str("endpoint = \"http://example.org/s\"\n");
            }
            if include_param {
                toml_content.push_str("query_param = \"title\"\n");
            }
            if include_timeout {
                toml_content.push_str("timeout_secs = 30\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");
            let search = config.unwrap().search;

            let expected_endpoint = if include_endpoint { "http://example.org/s" } else { DEFAULT_ENDPOINT };
            let expected_param = if include_param { "title" } else { DEFAULT_QUERY_PARAM };
            let expected_timeout = if include_timeout { 30 } else { DEFAULT_TIMEOUT_SECS };

            prop_assert_eq!(search.endpoint.as_str(), expected_endpoint);
            prop_assert_eq!(search.query_param.as_str(), expected_param);
            prop_assert_eq!(search.timeout_secs, expected_timeout);
        }
    }
}
