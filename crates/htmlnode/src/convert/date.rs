// ABOUTME: Date parsing for node text: Unicode date patterns translated to chrono, plus a flexible fallback chain.
// ABOUTME: Zone-less patterns are read in the caller's time zone; results are UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::convert::timezone::Zone;
use crate::error::{NodeError, Result};

/// A Unicode date pattern translated into a chrono format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    pub format: String,
    pub has_offset: bool,
}

impl DatePattern {
    /// Translate a pattern such as `yyyy-MM-dd'T'HH:mm:ssZ`.
    ///
    /// Supported letters: `y M L d D H h m s S a E Z x X`. Text in single
    /// quotes is literal and `''` is a quote.
    pub fn translate(pattern: &str) -> Result<Self> {
        if pattern.trim().is_empty() {
            return Err(NodeError::invalid_pattern(pattern, "translate_pattern", None));
        }

        let mut format = String::with_capacity(pattern.len() * 2);
        let mut has_offset = false;
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    format.push('\'');
                    continue;
                }
                let mut closed = false;
                while let Some(q) = chars.next() {
                    if q == '\'' {
                        if chars.peek() == Some(&'\'') {
                            chars.next();
                            format.push('\'');
                            continue;
                        }
                        closed = true;
                        break;
                    }
                    push_literal(&mut format, q);
                }
                if !closed {
                    return Err(NodeError::invalid_pattern(
                        pattern,
                        "translate_pattern",
                        Some(anyhow::anyhow!("unterminated quote")),
                    ));
                }
                continue;
            }

            if !c.is_ascii_alphabetic() {
                push_literal(&mut format, c);
                continue;
            }

            let mut count = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                count += 1;
            }

            let spec = match (c, count) {
                ('y' | 'u', 2) => "%y",
                ('y' | 'u', _) => "%Y",
                ('M' | 'L', 1 | 2) => "%m",
                ('M' | 'L', 3) => "%b",
                ('M' | 'L', 4) => "%B",
                ('d', 1 | 2) => "%d",
                ('D', 1..=3) => "%j",
                ('H', 1 | 2) => "%H",
                ('h', 1 | 2) => "%I",
                ('m', 1 | 2) => "%M",
                ('s', 1 | 2) => "%S",
                ('S', 3) => "%3f",
                ('S', 6) => "%6f",
                ('S', 9) => "%9f",
                ('a', 1..=3) => "%p",
                ('E', 1..=3) => "%a",
                ('E', 4) => "%A",
                ('Z', 1..=3) | ('x' | 'X', 1 | 2) => {
                    has_offset = true;
                    "%z"
                }
                ('Z', 5) | ('x' | 'X', 3) => {
                    has_offset = true;
                    "%:z"
                }
                _ => {
                    return Err(NodeError::invalid_pattern(
                        pattern,
                        "translate_pattern",
                        Some(anyhow::anyhow!("unsupported field {}", c.to_string().repeat(count))),
                    ));
                }
            };
            format.push_str(spec);
        }

        Ok(DatePattern { format, has_offset })
    }

    /// Parse `input` with this pattern, reading zone-less values in `zone`.
    pub fn parse(&self, input: &str, zone: Zone) -> Result<DateTime<Utc>> {
        let s = input.trim();
        if s.is_empty() {
            return Err(NodeError::empty("parse_date"));
        }
        let unparsable = |e: chrono::ParseError| NodeError::unparsable(input, "parse_date", Some(e.into()));

        if self.has_offset {
            return DateTime::parse_from_str(s, &self.format)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(unparsable);
        }

        let naive = match NaiveDateTime::parse_from_str(s, &self.format) {
            Ok(naive) => naive,
            Err(_) => NaiveDate::parse_from_str(s, &self.format)
                .map_err(unparsable)?
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| NodeError::unparsable(input, "parse_date", None))?,
        };
        zone.localize(&naive)
            .ok_or_else(|| NodeError::unparsable(input, "parse_date", None))
    }
}

fn push_literal(format: &mut String, c: char) {
    if c == '%' {
        format.push_str("%%");
    } else {
        format.push(c);
    }
}

/// Parse a date without a known pattern.
///
/// Tries RFC 3339 and RFC 2822 first, then a set of loose date formats read
/// as UTC, then falls back to dateparser for natural formats.
pub fn parse_flexible_date(input: &str) -> Result<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() {
        return Err(NodeError::empty("parse_flexible_date"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    const NAIVE_PATTERNS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];
    for pat in NAIVE_PATTERNS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, pat) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    // Date-only formats are read as UTC midnight so the day never shifts
    const LOOSE_PATTERNS: &[&str] = &[
        "%Y-%m-%d",
        "%b %e, %Y",
        "%e %b %Y",
        "%b %d, %Y",
        "%d %b %Y",
        "%B %e, %Y",
        "%e %B %Y",
        "%B %d, %Y",
        "%d %B %Y",
    ];
    for pat in LOOSE_PATTERNS {
        if let Ok(date) = NaiveDate::parse_from_str(s, pat) {
            if let Some(naive) = date.and_hms_opt(0, 0, 0) {
                return Ok(Utc.from_utc_datetime(&naive));
            }
        }
    }

    dateparser::parse(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| NodeError::unparsable(input, "parse_flexible_date", Some(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, FixedOffset};

    use crate::convert::timezone::resolve_time_zone;

    fn utc() -> Zone {
        Zone::utc()
    }

    #[test]
    fn test_translate_common_patterns() {
        let p = DatePattern::translate("yyyy-MM-dd'T'HH:mm:ss.SSSZ").unwrap();
        assert_eq!(p.format, "%Y-%m-%dT%H:%M:%S.%3f%z");
        assert!(p.has_offset);

        let p = DatePattern::translate("EEEE, d MMMM yy 'at' h:mm a").unwrap();
        assert_eq!(p.format, "%A, %d %B %y at %I:%M %p");
        assert!(!p.has_offset);

        let p = DatePattern::translate("dd/MM 'o''clock' 100%").unwrap();
        assert_eq!(p.format, "%d/%m o'clock 100%%");
    }

    #[test]
    fn test_translate_rejects_bad_patterns() {
        assert!(DatePattern::translate("").unwrap_err().is_invalid_pattern());
        assert!(DatePattern::translate("yyyy 'open").unwrap_err().is_invalid_pattern());
        assert!(DatePattern::translate("QQQ yyyy").unwrap_err().is_invalid_pattern());
        assert!(DatePattern::translate("MMMMM").unwrap_err().is_invalid_pattern());
    }

    #[test]
    fn test_parse_in_time_zone() {
        let p = DatePattern::translate("yyyy-MM-dd HH:mm").unwrap();
        let plus_two = Zone::Fixed(FixedOffset::east_opt(2 * 3600).unwrap());
        let dt = p.parse("2024-03-10 12:30", plus_two).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-10T10:30:00+00:00");
    }

    #[test]
    fn test_parse_date_only_pattern() {
        let p = DatePattern::translate("dd.MM.yyyy").unwrap();
        let dt = p.parse("05.01.2024", utc()).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 5));
    }

    #[test]
    fn test_parse_with_offset_ignores_zone() {
        let p = DatePattern::translate("yyyy-MM-dd HH:mm Z").unwrap();
        let far = Zone::Fixed(FixedOffset::east_opt(9 * 3600).unwrap());
        let dt = p.parse("2024-03-10 12:30 +0100", far).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-10T11:30:00+00:00");
    }

    #[test]
    fn test_parse_in_region_zone() {
        let p = DatePattern::translate("yyyy-MM-dd HH:mm").unwrap();
        let berlin = resolve_time_zone("Europe/Berlin").unwrap();
        assert_eq!(
            p.parse("2024-01-15 12:00", berlin).unwrap().to_rfc3339(),
            "2024-01-15T11:00:00+00:00"
        );
        assert_eq!(
            p.parse("2024-07-15 12:00", berlin).unwrap().to_rfc3339(),
            "2024-07-15T10:00:00+00:00"
        );
        assert!(p.parse("2024-03-31 02:30", berlin).unwrap_err().is_unparsable());
    }

    #[test]
    fn test_parse_failures() {
        let p = DatePattern::translate("yyyy-MM-dd").unwrap();
        assert!(p.parse("", utc()).unwrap_err().is_empty());
        assert!(p.parse("10/03/2024", utc()).unwrap_err().is_unparsable());
    }

    #[test]
    fn test_flexible_formats() {
        let rfc3339 = parse_flexible_date("2020-01-02T03:04:05Z").unwrap();
        assert_eq!(rfc3339.to_rfc3339(), "2020-01-02T03:04:05+00:00");

        let rfc2822 = parse_flexible_date("Thu, 02 Jan 2020 03:04:05 +0100").unwrap();
        assert_eq!(rfc2822.to_rfc3339(), "2020-01-02T02:04:05+00:00");

        let loose = parse_flexible_date("Jan 5, 2024").unwrap();
        assert_eq!((loose.year(), loose.month(), loose.day()), (2024, 1, 5));

        let iso_date = parse_flexible_date("2024-06-30").unwrap();
        assert_eq!(iso_date.to_rfc3339(), "2024-06-30T00:00:00+00:00");
    }

    #[test]
    fn test_flexible_failures() {
        assert!(parse_flexible_date("  ").unwrap_err().is_empty());
        assert!(parse_flexible_date("not a date at all").unwrap_err().is_unparsable());
    }
}
