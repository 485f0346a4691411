// ABOUTME: Configuration for locale-aware conversions: ConversionOptions and its builder.
// ABOUTME: Options can be built fluently or loaded from JSON.

use serde::{Deserialize, Serialize};

use crate::error::{NodeError, Result};

/// Settings used by the `*_with` conversion accessors on `HtmlNode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Locale identifier for number separators, e.g. `de_DE`.
    pub locale: String,
    /// Time zone for dates without an explicit offset.
    pub time_zone: String,
    /// Unicode date pattern. `None` uses flexible date detection.
    pub date_format: Option<String>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            locale: "en_US_POSIX".to_string(),
            time_zone: "UTC".to_string(),
            date_format: None,
        }
    }
}

impl ConversionOptions {
    /// Start building options from the defaults.
    pub fn builder() -> ConversionOptionsBuilder {
        ConversionOptionsBuilder::new()
    }

    /// Load options from a JSON object; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| NodeError::unparsable(json, "conversion_options_from_json", Some(e.into())))
    }
}

/// Builder for [`ConversionOptions`].
#[derive(Debug, Clone)]
pub struct ConversionOptionsBuilder {
    opts: ConversionOptions,
}

impl ConversionOptionsBuilder {
    /// Create a builder holding the default options.
    pub fn new() -> Self {
        Self {
            opts: ConversionOptions::default(),
        }
    }

    /// Set the locale identifier.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.opts.locale = locale.into();
        self
    }

    /// Set the time zone identifier.
    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.opts.time_zone = time_zone.into();
        self
    }

    /// Set the date pattern.
    pub fn date_format(mut self, pattern: impl Into<String>) -> Self {
        self.opts.date_format = Some(pattern.into());
        self
    }

    pub fn build(self) -> ConversionOptions {
        self.opts
    }
}

impl Default for ConversionOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let opts = ConversionOptions::default();
        assert_eq!(opts.locale, "en_US_POSIX");
        assert_eq!(opts.time_zone, "UTC");
        assert_eq!(opts.date_format, None);
    }

    #[test]
    fn test_builder() {
        let opts = ConversionOptions::builder()
            .locale("de_DE")
            .time_zone("CET")
            .date_format("dd.MM.yyyy")
            .build();
        assert_eq!(opts.locale, "de_DE");
        assert_eq!(opts.time_zone, "CET");
        assert_eq!(opts.date_format.as_deref(), Some("dd.MM.yyyy"));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let opts = ConversionOptions::from_json(r#"{"locale": "fr_FR"}"#).unwrap();
        assert_eq!(
            opts,
            ConversionOptions {
                locale: "fr_FR".to_string(),
                ..Default::default()
            }
        );
        assert!(ConversionOptions::from_json("{").unwrap_err().is_unparsable());
    }
}
