// ABOUTME: Locale identifier validation and per-locale decimal/grouping separator lookup.
// ABOUTME: Unknown but well-formed locales fall back to the root separators.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{NodeError, Result};

static LOCALE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2,3}(?:[-_][A-Za-z0-9]{2,8})*$").unwrap());

// Languages writing 1.234,5
const COMMA_DECIMAL_DOT_GROUPING: &[&str] = &[
    "de", "es", "it", "pt", "nl", "id", "tr", "da", "el", "ro", "hr", "sl", "sr", "vi",
];

// Languages writing 1 234,5
const COMMA_DECIMAL_SPACE_GROUPING: &[&str] = &[
    "fr", "ru", "uk", "pl", "cs", "sk", "sv", "nb", "no", "nn", "fi", "hu", "bg", "lt", "lv",
    "et",
];

// Region overrides keyed by language-region, lowercase
const REGION_OVERRIDES: &[(&str, char, char)] = &[
    ("de-ch", '.', '\u{2019}'),
    ("fr-ch", '.', '\u{2019}'),
    ("it-ch", '.', '\u{2019}'),
    ("es-mx", '.', ','),
    ("es-us", '.', ','),
    ("pt-pt", ',', ' '),
];

/// Separators used when reading numbers for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub decimal: char,
    pub grouping: char,
}

impl NumberLocale {
    /// Separators of the root locale.
    pub const ROOT: NumberLocale = NumberLocale {
        decimal: '.',
        grouping: ',',
    };

    /// Resolve a locale identifier such as `de_DE`, `fr-CH` or `en_US_POSIX`.
    pub fn resolve(identifier: &str) -> Result<Self> {
        let identifier = identifier.trim();
        if !LOCALE_RE.is_match(identifier) {
            return Err(NodeError::invalid_locale(identifier, "resolve_locale"));
        }

        let lowered = identifier.to_ascii_lowercase().replace('_', "-");
        let mut parts = lowered.split('-');
        let language = parts.next().unwrap_or_default();
        let language_region = match parts.next() {
            Some(region) => format!("{}-{}", language, region),
            None => language.to_string(),
        };

        if let Some((_, decimal, grouping)) = REGION_OVERRIDES
            .iter()
            .find(|(key, _, _)| *key == language_region)
        {
            return Ok(NumberLocale {
                decimal: *decimal,
                grouping: *grouping,
            });
        }
        if COMMA_DECIMAL_DOT_GROUPING.contains(&language) {
            return Ok(NumberLocale {
                decimal: ',',
                grouping: '.',
            });
        }
        if COMMA_DECIMAL_SPACE_GROUPING.contains(&language) {
            return Ok(NumberLocale {
                decimal: ',',
                grouping: '\u{a0}',
            });
        }
        Ok(NumberLocale::ROOT)
    }

    /// True when `c` separates digit groups in this locale.
    pub fn is_grouping(&self, c: char) -> bool {
        match self.grouping {
            ' ' | '\u{a0}' | '\u{202f}' => matches!(c, ' ' | '\u{a0}' | '\u{202f}'),
            '\u{2019}' => matches!(c, '\u{2019}' | '\''),
            g => c == g,
        }
    }
}

/// Check that a locale identifier is well formed.
pub fn validate_locale(identifier: &str) -> Result<()> {
    NumberLocale::resolve(identifier).map(|_| ())
}
