// ABOUTME: Numeric parsing for node text: C-style leading-prefix parsing and strict locale-aware parsing.
// ABOUTME: Both return NodeError on failure; callers map errors to 0.0.

use crate::convert::locale::NumberLocale;
use crate::error::{NodeError, Result};

/// Parse the longest numeric prefix of `input`, after leading whitespace.
///
/// `"12.5kg"` reads as `12.5`; input without any leading digits is an error.
pub fn parse_leading_double(input: &str) -> Result<f64> {
    let s = input.trim_start();
    if s.is_empty() {
        return Err(NodeError::empty("parse_leading_double"));
    }

    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return Err(NodeError::unparsable(
            input,
            "parse_leading_double",
            Some(anyhow::anyhow!("no leading digits")),
        ));
    }

    // Exponent only counts when digits follow it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end]
        .parse::<f64>()
        .map_err(|e| NodeError::unparsable(input, "parse_leading_double", Some(e.into())))
}

/// Parse the whole of `input` as a number written for `locale`.
///
/// Grouping separators may appear anywhere before the decimal separator.
/// Anything else that is not a digit, sign or exponent is an error.
pub fn parse_localized_double(input: &str, locale: NumberLocale) -> Result<f64> {
    let s = input.trim();
    if s.is_empty() {
        return Err(NodeError::empty("parse_localized_double"));
    }

    let unparsable = |reason: &str| {
        NodeError::unparsable(
            input,
            "parse_localized_double",
            Some(anyhow::anyhow!("{}", reason)),
        )
    };

    let mut normalized = String::with_capacity(s.len());
    let mut seen_decimal = false;
    let mut seen_exponent = false;
    for c in s.chars() {
        if c.is_ascii_digit() {
            normalized.push(c);
        } else if c == locale.decimal && !seen_decimal && !seen_exponent {
            seen_decimal = true;
            normalized.push('.');
        } else if locale.is_grouping(c) {
            if seen_decimal || seen_exponent || normalized.is_empty() {
                return Err(unparsable("misplaced grouping separator"));
            }
        } else if matches!(c, '-' | '+' | '\u{2212}')
            && (normalized.is_empty() || normalized.ends_with('e'))
        {
            normalized.push(if c == '+' { '+' } else { '-' });
        } else if matches!(c, 'e' | 'E')
            && !seen_exponent
            && normalized.chars().any(|d| d.is_ascii_digit())
        {
            seen_exponent = true;
            normalized.push('e');
        } else {
            return Err(unparsable("unexpected character"));
        }
    }

    normalized
        .parse::<f64>()
        .map_err(|e| NodeError::unparsable(input, "parse_localized_double", Some(e.into())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_prefix() {
        assert_eq!(parse_leading_double("42").unwrap(), 42.0);
        assert_eq!(parse_leading_double("  -3.5 apples").unwrap(), -3.5);
        assert_eq!(parse_leading_double(".5").unwrap(), 0.5);
        assert_eq!(parse_leading_double("7.").unwrap(), 7.0);
        assert_eq!(parse_leading_double("1e3x").unwrap(), 1000.0);
        assert_eq!(parse_leading_double("2e").unwrap(), 2.0);
        assert_eq!(parse_leading_double("12,5").unwrap(), 12.0);
    }

    #[test]
    fn test_leading_prefix_failures() {
        assert!(parse_leading_double("").unwrap_err().is_empty());
        assert!(parse_leading_double("   ").unwrap_err().is_empty());
        assert!(parse_leading_double("abc").unwrap_err().is_unparsable());
        assert!(parse_leading_double("-.").unwrap_err().is_unparsable());
    }

    #[test]
    fn test_localized() {
        let de = NumberLocale::resolve("de_DE").unwrap();
        let fr = NumberLocale::resolve("fr_FR").unwrap();
        let ch = NumberLocale::resolve("de_CH").unwrap();

        assert_eq!(parse_localized_double("1.234,5", de).unwrap(), 1234.5);
        assert_eq!(parse_localized_double("1,234.5", NumberLocale::ROOT).unwrap(), 1234.5);
        assert_eq!(parse_localized_double("1\u{202f}234,5", fr).unwrap(), 1234.5);
        assert_eq!(parse_localized_double("1'234.5", ch).unwrap(), 1234.5);
        assert_eq!(parse_localized_double("-0,25", de).unwrap(), -0.25);
        assert_eq!(parse_localized_double("1,5e3", de).unwrap(), 1500.0);
    }

    #[test]
    fn test_localized_is_strict() {
        let de = NumberLocale::resolve("de").unwrap();
        assert!(parse_localized_double("12abc", de).unwrap_err().is_unparsable());
        assert!(parse_localized_double("1,2,3", de).unwrap_err().is_unparsable());
        assert!(parse_localized_double(".5", de).unwrap_err().is_unparsable());
        assert!(parse_localized_double("", de).unwrap_err().is_empty());
    }
}
