// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Suggestion panel and query tracking configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionsConfig {
    /// Candidate terms shown while the search input is focused and empty.
    /// Insertion order is display order.
    #[serde(default = "default_terms")]
    pub terms: Vec<String>,

    /// Queries are forwarded to the tracking sink only when their character
    /// count exceeds this threshold.
    #[serde(default = "default_track_threshold")]
    pub track_threshold: usize,

    /// How long the panel stays up after the input loses focus, so a pending
    /// selection still lands.
    #[serde(default = "default_grace_delay_ms")]
    pub grace_delay_ms: u64,
}

impl SuggestionsConfig {
    pub fn grace_delay(&self) -> Duration {
        Duration::from_millis(self.grace_delay_ms)
    }
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        SuggestionsConfig {
            terms: default_terms(),
            track_threshold: default_track_threshold(),
            grace_delay_ms: default_grace_delay_ms(),
        }
    }
}

fn default_terms() -> Vec<String> {
    [
        "installation",
        "quick start",
        "API reference",
        "examples",
        "troubleshooting",
        "configuration",
        "scaling",
        "storage",
    ]
    .iter()
    .map(|term| term.to_string())
    .collect()
}

fn default_track_threshold() -> usize {
    2
}

fn default_grace_delay_ms() -> u64 {
    200
}

/// Site metadata used for edit links
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub repo_url: Option<String>,

    #[serde(default = "default_edit_branch")]
    pub edit_branch: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            repo_url: None,
            edit_branch: default_edit_branch(),
        }
    }
}

fn default_edit_branch() -> String {
    "main".to_string()
}

/// A required front-matter marker checked by the page validator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarkerRule {
    pub label: String,
    pub marker: String,
}

/// Page validation configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateConfig {
    #[serde(default = "default_markers")]
    pub markers: Vec<MarkerRule>,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        ValidateConfig {
            markers: default_markers(),
        }
    }
}

fn default_markers() -> Vec<MarkerRule> {
    vec![MarkerRule {
        label: "title".to_string(),
        marker: "title:".to_string(),
    }]
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggestions: SuggestionsConfig,

    #[serde(default)]
    pub clipboard: ClipboardConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub validate: ValidateConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.suggestions.track_threshold, 2);
        assert_eq!(config.suggestions.grace_delay_ms, 200);
        assert_eq!(config.suggestions.terms.len(), 8);
        assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
        assert_eq!(config.site.edit_branch, "main");
        assert_eq!(config.site.repo_url, None);
        assert_eq!(config.validate.markers.len(), 1);
    }

    #[test]
    fn grace_delay_converts_to_duration() {
        let config: Config = toml::from_str(
            r#"
[suggestions]
grace_delay_ms = 350
"#,
        )
        .unwrap();

        assert_eq!(
            config.suggestions.grace_delay(),
            Duration::from_millis(350)
        );
    }

    #[test]
    fn marker_rules_parse_from_array_of_tables() {
        let config: Config = toml::from_str(
            r#"
[[validate.markers]]
label = "api version"
marker = "apiVersion: docs.example.com/v1"

[[validate.markers]]
label = "kind"
marker = "kind: Page"
"#,
        )
        .unwrap();

        assert_eq!(config.validate.markers.len(), 2);
        assert_eq!(config.validate.markers[0].label, "api version");
        assert_eq!(config.validate.markers[1].marker, "kind: Page");
    }

    // Property: any valid clipboard backend value parses to the matching
    // variant without errors.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_backend_parsing(backend in prop::sample::select(vec!["auto", "system", "osc52"])) {
            let toml_content = format!(r#"
[clipboard]
backend = "{}"
"#, backend);

            let config: Result<Config, _> = toml::from_str(&toml_content);

            prop_assert!(config.is_ok(), "Failed to parse valid backend: {}", backend);

            let config = config.unwrap();

            let expected = match backend {
                "auto" => ClipboardBackend::Auto,
                "system" => ClipboardBackend::System,
                "osc52" => ClipboardBackend::Osc52,
                _ => unreachable!(),
            };

            prop_assert_eq!(config.clipboard.backend, expected);
        }
    }

    // Property: any combination of present/missing suggestion fields parses,
    // and missing fields fall back to their defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_suggestion_fields_use_defaults(
            include_section in prop::bool::ANY,
            include_threshold in prop::bool::ANY,
            threshold in 0usize..16
        ) {
            let toml_content = if !include_section {
                String::new()
            } else if !include_threshold {
                "[suggestions]\n".to_string()
            } else {
                format!("[suggestions]\ntrack_threshold = {}\n", threshold)
            };

            let config: Result<Config, _> = toml::from_str(&toml_content);

            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

            let config = config.unwrap();

            if include_section && include_threshold {
                prop_assert_eq!(config.suggestions.track_threshold, threshold);
            } else {
                prop_assert_eq!(config.suggestions.track_threshold, 2);
            }

            // Fields never present in the input always default
            prop_assert_eq!(config.suggestions.grace_delay_ms, 200);
            prop_assert_eq!(config.suggestions.terms.len(), 8);
        }
    }
}
