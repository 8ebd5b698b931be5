// Configuration type definitions

use clap::ValueEnum;
use serde::Deserialize;

/// How search results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Output configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Markers placed around highlighted ranges in plain output
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    #[serde(default = "default_open")]
    pub open: String,
    #[serde(default = "default_close")]
    pub close: String,
}

fn default_open() -> String {
    "[".to_string()
}

fn default_close() -> String {
    "]".to_string()
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            open: default_open(),
            close: default_close(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Any subset of sections and fields parses, with defaults for the rest.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_output in prop::bool::ANY,
            include_highlight in prop::bool::ANY,
            include_close in prop::bool::ANY,
        ) {
            let mut toml_content = String::new();
            if include_output {
                toml_content.push_str("[output]\n");
            }
            if include_highlight {
                toml_content.push_str("[highlight]\nopen = \"<<\"\n");
                if include_close {
                    toml_content.push_str("close = \">>\"\n");
                }
            }

            let config: Config = toml::from_str(&toml_content).unwrap();

            prop_assert_eq!(config.output.format, OutputFormat::Plain);
            let expected_open = if include_highlight { "<<" } else { "[" };
            let expected_close = if include_highlight && include_close { ">>" } else { "]" };
            prop_assert_eq!(config.highlight.open.as_str(), expected_open);
            prop_assert_eq!(config.highlight.close.as_str(), expected_close);
        }
    }

    #[test]
    fn test_config_default_values() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Plain);
        assert_eq!(config.highlight.open, "[");
        assert_eq!(config.highlight.close, "]");
    }

    #[test]
    fn test_parse_json_format() {
        let toml = r#"
[output]
format = "json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_malformed_toml() {
        let result: Result<Config, _> = toml::from_str("[output]\nformat = json");
        assert!(result.is_err(), "Malformed TOML should fail to parse");
    }
}
