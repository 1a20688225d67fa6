//! CLI configuration file.

use std::error::Error;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use rhizome_ltns_syntax_tags::ParseOptions;
use serde::Deserialize;

/// Read from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG: &str = "ltns.toml";

/// Settings read from `ltns.toml`. Missing tables and keys take defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parse: ParseOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How compiled programs are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Serialized IR
    #[default]
    Json,
    /// Rendered pseudo-source
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG`] if it exists, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG).exists() => Self::from_file(DEFAULT_CONFIG),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config: Config = toml::from_str(
            r#"
            [parse]
            strict_tags = true

            [output]
            format = "text"
            "#,
        )
        .unwrap();
        assert!(config.parse.strict_tags);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_missing_keys_default() {
        let config: Config = toml::from_str("[output]\n").unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.parse.strict_tags);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(toml::from_str::<Config>("[output]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Config::load(Some(Path::new("does/not/exist.toml"))).is_err());
    }
}
