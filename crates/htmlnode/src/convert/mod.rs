// ABOUTME: Numeric and date accessors on HtmlNode derived from its trimmed text content.
// ABOUTME: Plain accessors return 0.0/None on failure; try_* accessors return the NodeError.

//! Conversions from node text to numbers and dates.
//!
//! Every accessor reads [`HtmlNode::text_content`]. The plain forms never
//! fail: unparsable input, unknown locales and unknown time zones give
//! `0.0` or `None`, and the reason is logged at debug level.

pub mod date;
pub mod locale;
pub mod number;
pub mod timezone;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::dom::node::HtmlNode;
use crate::error::Result;
use crate::options::ConversionOptions;

use self::date::{parse_flexible_date, DatePattern};
use self::locale::{validate_locale, NumberLocale};
use self::number::{parse_leading_double, parse_localized_double};
use self::timezone::resolve_time_zone;

fn or_zero(result: Result<f64>) -> f64 {
    result.unwrap_or_else(|err| {
        debug!(error = %err, "numeric conversion failed");
        0.0
    })
}

fn or_none(result: Result<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    match result {
        Ok(dt) => Some(dt),
        Err(err) => {
            debug!(error = %err, "date conversion failed");
            None
        }
    }
}

impl<'a> HtmlNode<'a> {
    /// Leading numeric prefix of the text, or 0.0.
    pub fn double_value(&self) -> f64 {
        or_zero(self.try_double_value())
    }

    pub fn try_double_value(&self) -> Result<f64> {
        parse_leading_double(&self.text_content())
    }

    /// The text read as a number written for `locale`, or 0.0.
    pub fn double_value_for_locale(&self, locale: &str) -> f64 {
        or_zero(self.try_double_value_for_locale(locale))
    }

    pub fn try_double_value_for_locale(&self, locale: &str) -> Result<f64> {
        let locale = NumberLocale::resolve(locale)?;
        parse_localized_double(&self.text_content(), locale)
    }

    /// Number conversion using `options.locale`.
    pub fn double_value_with(&self, options: &ConversionOptions) -> f64 {
        self.double_value_for_locale(&options.locale)
    }

    /// The text read with a Unicode date `pattern` in `time_zone`.
    pub fn date_value(&self, pattern: &str, time_zone: &str) -> Option<DateTime<Utc>> {
        or_none(self.try_date_value(pattern, time_zone))
    }

    pub fn try_date_value(&self, pattern: &str, time_zone: &str) -> Result<DateTime<Utc>> {
        let zone = resolve_time_zone(time_zone)?;
        DatePattern::translate(pattern)?.parse(&self.text_content(), zone)
    }

    /// Date conversion driven by `options`.
    ///
    /// Without a `date_format` the text goes through flexible detection and
    /// `time_zone` is still validated.
    pub fn date_value_with(&self, options: &ConversionOptions) -> Option<DateTime<Utc>> {
        or_none(self.try_date_value_with(options))
    }

    pub fn try_date_value_with(&self, options: &ConversionOptions) -> Result<DateTime<Utc>> {
        validate_locale(&options.locale)?;
        match options.date_format {
            Some(ref pattern) => self.try_date_value(pattern, &options.time_zone),
            None => {
                resolve_time_zone(&options.time_zone)?;
                parse_flexible_date(&self.text_content())
            }
        }
    }

    /// The text read as RFC 3339, RFC 2822 or a common loose date.
    pub fn date_value_flexible(&self) -> Option<DateTime<Utc>> {
        or_none(parse_flexible_date(&self.text_content()))
    }
}
