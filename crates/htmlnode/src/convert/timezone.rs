// ABOUTME: Time-zone identifier resolution: IANA region zones, numeric offsets, and abbreviations.
// ABOUTME: Region zones carry their DST rules; offsets and abbreviations are fixed.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{NodeError, Result};

static OFFSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:UTC|GMT)?([+-])(\d{1,2})(?::?(\d{2}))?$").unwrap());

const UTC_NAMES: &[&str] = &["UTC", "GMT", "Z", "UCT", "Etc/UTC", "Etc/GMT", "Universal", "Zulu"];

// Common abbreviations (seconds east of UTC); ambiguous ones take the North American meaning
const ABBREVIATIONS: &[(&str, i32)] = &[
    ("EST", -5 * 3600),
    ("EDT", -4 * 3600),
    ("CST", -6 * 3600),
    ("CDT", -5 * 3600),
    ("MST", -7 * 3600),
    ("MDT", -6 * 3600),
    ("PST", -8 * 3600),
    ("PDT", -7 * 3600),
    ("AKST", -9 * 3600),
    ("AKDT", -8 * 3600),
    ("HST", -10 * 3600),
    ("AST", -4 * 3600),
    ("ADT", -3 * 3600),
    ("NST", -(3 * 3600 + 30 * 60)),
    ("NDT", -(2 * 3600 + 30 * 60)),
    ("WET", 0),
    ("WEST", 3600),
    ("BST", 3600),
    ("CET", 3600),
    ("CEST", 2 * 3600),
    ("EET", 2 * 3600),
    ("EEST", 3 * 3600),
    ("MSK", 3 * 3600),
    ("IST", 5 * 3600 + 30 * 60),
    ("JST", 9 * 3600),
    ("KST", 9 * 3600),
    ("HKT", 8 * 3600),
    ("SGT", 8 * 3600),
    ("AEST", 10 * 3600),
    ("AEDT", 11 * 3600),
    ("ACST", 9 * 3600 + 30 * 60),
    ("AWST", 8 * 3600),
    ("NZST", 12 * 3600),
    ("NZDT", 13 * 3600),
];

/// A resolved time zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Zone {
    /// A tz-database zone such as `Europe/Berlin`.
    Region(Tz),
    Fixed(FixedOffset),
}

impl Zone {
    pub fn utc() -> Self {
        Zone::Region(Tz::UTC)
    }

    /// The instant at which the wall clock in this zone reads `local`.
    ///
    /// `None` when a transition skips `local`; a repeated time gives the
    /// earlier instant.
    pub fn localize(&self, local: &NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Zone::Region(tz) => tz
                .from_local_datetime(local)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            Zone::Fixed(offset) => offset
                .from_local_datetime(local)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

/// Resolve a time-zone identifier.
///
/// UTC aliases and numeric offsets are checked first, then tz-database
/// names, then the abbreviation table.
pub fn resolve_time_zone(identifier: &str) -> Result<Zone> {
    let id = identifier.trim();
    let invalid = || NodeError::invalid_time_zone(id, "resolve_time_zone");

    if UTC_NAMES.iter().any(|name| name.eq_ignore_ascii_case(id)) {
        return Ok(Zone::utc());
    }

    if let Some(caps) = OFFSET_RE.captures(id) {
        let sign = if &caps[1] == "-" { -1 } else { 1 };
        let hours: i32 = caps[2].parse().map_err(|_| invalid())?;
        let minutes: i32 = match caps.get(3) {
            Some(m) => m.as_str().parse().map_err(|_| invalid())?,
            None => 0,
        };
        if hours > 14 || minutes > 59 {
            return Err(invalid());
        }
        return FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Zone::Fixed)
            .ok_or_else(invalid);
    }

    if let Ok(tz) = id.parse::<Tz>() {
        return Ok(Zone::Region(tz));
    }

    let upper = id.to_ascii_uppercase();
    ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| *abbr == upper)
        .and_then(|(_, secs)| FixedOffset::east_opt(*secs))
        .map(Zone::Fixed)
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Offset};

    fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn secs(id: &str) -> i32 {
        let local = noon(2024, 1, 15);
        let utc = resolve_time_zone(id).unwrap().localize(&local).unwrap();
        (local - utc.naive_utc()).num_seconds() as i32
    }

    #[test]
    fn test_utc_aliases() {
        assert_eq!(secs("UTC"), 0);
        assert_eq!(secs("gmt"), 0);
        assert_eq!(secs("Etc/UTC"), 0);
    }

    #[test]
    fn test_numeric_offsets() {
        assert_eq!(secs("+02:00"), 7200);
        assert_eq!(secs("-0530"), -(5 * 3600 + 30 * 60));
        assert_eq!(secs("GMT+2"), 7200);
        assert_eq!(secs("UTC-08:00"), -8 * 3600);
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(secs("PST"), -8 * 3600);
        assert_eq!(secs("cet"), 3600);
        assert_eq!(secs("JST"), 9 * 3600);
    }

    #[test]
    fn test_region_zones_follow_daylight_saving() {
        let berlin = resolve_time_zone("Europe/Berlin").unwrap();
        let winter = berlin.localize(&noon(2024, 1, 15)).unwrap();
        let summer = berlin.localize(&noon(2024, 7, 15)).unwrap();
        assert_eq!(winter.to_rfc3339(), "2024-01-15T11:00:00+00:00");
        assert_eq!(summer.to_rfc3339(), "2024-07-15T10:00:00+00:00");

        let new_york = resolve_time_zone("America/New_York").unwrap();
        assert_eq!(
            new_york.localize(&noon(2024, 3, 10)).unwrap().to_rfc3339(),
            "2024-03-10T16:00:00+00:00"
        );
    }

    #[test]
    fn test_region_zone_transitions() {
        let berlin = resolve_time_zone("Europe/Berlin").unwrap();
        let skipped = NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        assert_eq!(berlin.localize(&skipped), None);

        let repeated = NaiveDate::from_ymd_opt(2024, 10, 27)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        assert_eq!(
            berlin.localize(&repeated).unwrap().to_rfc3339(),
            "2024-10-27T00:30:00+00:00"
        );
    }

    #[test]
    fn test_cet_name_tracks_summer_time() {
        let cet = resolve_time_zone("CET").unwrap();
        let summer = cet.localize(&noon(2024, 7, 15)).unwrap();
        assert_eq!(summer.to_rfc3339(), "2024-07-15T10:00:00+00:00");
    }

    #[test]
    fn test_fixed_zone_offset() {
        let zone = resolve_time_zone("+05:30").unwrap();
        let Zone::Fixed(offset) = zone else {
            panic!("expected a fixed offset, got {:?}", zone);
        };
        assert_eq!(offset.fix().local_minus_utc(), 5 * 3600 + 30 * 60);
    }

    #[test]
    fn test_unknown_zones_are_rejected() {
        for bad in ["", "Mars/Olympus", "+25:00", "GMT+1:75", "XYZ", "europe/nowhere"] {
            assert!(
                resolve_time_zone(bad).unwrap_err().is_invalid_time_zone(),
                "{:?} should be rejected",
                bad
            );
        }
    }
}
