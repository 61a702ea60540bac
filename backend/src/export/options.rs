//! Export options and selectors.
//!
//! Options come from defaults, then the environment (`EXPORT_*` variables,
//! optionally loaded from a `.env` file by the CLI), then command-line flags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult};

const ENV_REVERSE_HEADERS: &str = "EXPORT_REVERSE_HEADERS";
const ENV_QUOTE: &str = "EXPORT_QUOTE";
const ENV_NULL_LITERAL: &str = "EXPORT_NULL_LITERAL";
const ENV_FILENAME: &str = "EXPORT_FILENAME";

// =============================================================================
// Selectors
// =============================================================================

/// Requested output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// The retrieved dataset, unchanged.
    Json,
    /// Flattened rows as delimited text.
    #[default]
    Csv,
}

impl FromStr for ExportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Exportable entity lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportComponent {
    #[serde(rename = "runs")]
    Runs,
    #[serde(rename = "lhcFills")]
    LhcFills,
}

impl ExportComponent {
    /// Key of this component in a retrieval result.
    pub fn key(&self) -> &'static str {
        match self {
            ExportComponent::Runs => "runs",
            ExportComponent::LhcFills => "lhcFills",
        }
    }
}

impl FromStr for ExportComponent {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "runs" => Ok(ExportComponent::Runs),
            "lhcfills" | "lhc-fills" | "lhc_fills" => Ok(ExportComponent::LhcFills),
            _ => Err(ConfigError::UnknownComponent(s.to_string())),
        }
    }
}

impl fmt::Display for ExportComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field quoting for CSV output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteMode {
    /// Quote every field.
    Always,
    /// Quote every field that is not a number.
    #[default]
    NonNumeric,
    /// Quote only fields containing delimiters, quotes or newlines.
    Necessary,
}

impl FromStr for QuoteMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "always" => Ok(QuoteMode::Always),
            "non-numeric" | "non_numeric" | "nonnumeric" => Ok(QuoteMode::NonNumeric),
            "necessary" => Ok(QuoteMode::Necessary),
            _ => Err(ConfigError::UnknownQuoteMode(s.to_string())),
        }
    }
}

// =============================================================================
// Options
// =============================================================================

/// Options for the export pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Emit columns in reverse discovery order
    pub reverse_headers: bool,

    /// CSV quoting
    pub quote: QuoteMode,

    /// Text written for null values (absent values are always empty)
    pub null_literal: String,

    /// Base name of the CSV file, without extension
    pub filename: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            reverse_headers: false,
            quote: QuoteMode::default(),
            null_literal: "null".to_string(),
            filename: "generated".to_string(),
        }
    }
}

impl ExportOptions {
    /// Defaults overlaid with `EXPORT_*` environment variables.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(value) = lookup(ENV_REVERSE_HEADERS) {
            options.reverse_headers = parse_bool(ENV_REVERSE_HEADERS, &value)?;
        }
        if let Some(value) = lookup(ENV_QUOTE) {
            options.quote = value.parse()?;
        }
        if let Some(value) = lookup(ENV_NULL_LITERAL) {
            options.null_literal = value;
        }
        if let Some(value) = lookup(ENV_FILENAME) {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: ENV_FILENAME.to_string(),
                    value,
                });
            }
            options.filename = value;
        }

        Ok(options)
    }
}

fn parse_bool(key: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let options = ExportOptions::from_lookup(lookup(&[])).unwrap();
        assert_eq!(options, ExportOptions::default());
        assert_eq!(options.filename, "generated");
        assert_eq!(options.null_literal, "null");
        assert_eq!(options.quote, QuoteMode::NonNumeric);
        assert!(!options.reverse_headers);
    }

    #[test]
    fn test_env_overrides() {
        let options = ExportOptions::from_lookup(lookup(&[
            ("EXPORT_REVERSE_HEADERS", "true"),
            ("EXPORT_QUOTE", "always"),
            ("EXPORT_NULL_LITERAL", ""),
            ("EXPORT_FILENAME", "runs-2024"),
        ]))
        .unwrap();

        assert!(options.reverse_headers);
        assert_eq!(options.quote, QuoteMode::Always);
        assert_eq!(options.null_literal, "");
        assert_eq!(options.filename, "runs-2024");
    }

    #[test]
    fn test_invalid_bool() {
        let err = ExportOptions::from_lookup(lookup(&[("EXPORT_REVERSE_HEADERS", "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains("EXPORT_REVERSE_HEADERS"));
    }

    #[test]
    fn test_blank_filename_rejected() {
        let result = ExportOptions::from_lookup(lookup(&[("EXPORT_FILENAME", "  ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_selectors() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());

        assert_eq!("runs".parse::<ExportComponent>().unwrap(), ExportComponent::Runs);
        assert_eq!("lhc-fills".parse::<ExportComponent>().unwrap(), ExportComponent::LhcFills);
        assert_eq!("lhcFills".parse::<ExportComponent>().unwrap(), ExportComponent::LhcFills);
        assert!("environments".parse::<ExportComponent>().is_err());

        assert_eq!("non-numeric".parse::<QuoteMode>().unwrap(), QuoteMode::NonNumeric);
        assert!("sometimes".parse::<QuoteMode>().is_err());
    }

    #[test]
    fn test_component_key() {
        assert_eq!(ExportComponent::LhcFills.key(), "lhcFills");
        assert_eq!(ExportComponent::Runs.to_string(), "runs");
    }

    #[test]
    fn test_options_deserialize_partial() {
        let options: ExportOptions =
            serde_json::from_str(r#"{ "quote": "necessary", "filename": "fills" }"#).unwrap();
        assert_eq!(options.quote, QuoteMode::Necessary);
        assert_eq!(options.filename, "fills");
        assert_eq!(options.null_literal, "null");
    }
}
