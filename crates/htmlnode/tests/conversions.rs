// ABOUTME: Integration tests for numeric and date accessors on table cells of the article fixture.
// ABOUTME: Exercises locale-aware numbers, patterned dates, flexible dates, and options loaded from JSON.

use digests_htmlnode::{ConversionOptions, HtmlDocument};
use pretty_assertions::assert_eq;
use std::fs;

fn load_fixture(name: &str) -> HtmlDocument {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    let markup =
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {}: {}", path, e));
    HtmlDocument::parse(&markup)
}

#[test]
fn test_locale_numbers_from_cells() {
    let doc = load_fixture("article.html");
    let length = doc.root().descendant_with_class("value").unwrap();

    assert_eq!(length.double_value_for_locale("de_DE"), 1234.5);
    assert_eq!(length.double_value_for_locale("en_US"), 0.0);
    assert_eq!(length.double_value(), 1.234);

    let german = ConversionOptions::from_json(r#"{"locale": "de_AT"}"#).unwrap();
    assert_eq!(length.double_value_with(&german), 1234.5);
}

#[test]
fn test_plain_number_from_footer() {
    let doc = load_fixture("article.html");
    let year = doc.root().descendant_with_class("copyright").unwrap();
    assert_eq!(year.double_value(), 2024.0);
    assert_eq!(year.double_value_with(&ConversionOptions::default()), 2024.0);
}

#[test]
fn test_dates_from_cells() {
    let doc = load_fixture("article.html");
    let published = doc.root().descendants_with_class("value")[1];

    let dt = published.date_value("yyyy-MM-dd HH:mm", "UTC+01:00").unwrap();
    assert_eq!(dt.to_rfc3339(), "2024-03-10T07:15:00+00:00");

    let options = ConversionOptions::builder()
        .date_format("yyyy-MM-dd HH:mm")
        .time_zone("PST")
        .build();
    assert_eq!(
        published.date_value_with(&options).unwrap().to_rfc3339(),
        "2024-03-10T16:15:00+00:00"
    );

    // Daylight saving started in Los Angeles earlier that morning
    let los_angeles = ConversionOptions::builder()
        .date_format("yyyy-MM-dd HH:mm")
        .time_zone("America/Los_Angeles")
        .build();
    assert_eq!(
        published.date_value_with(&los_angeles).unwrap().to_rfc3339(),
        "2024-03-10T15:15:00+00:00"
    );

    let flexible = published.date_value_flexible().unwrap();
    assert_eq!(flexible.to_rfc3339(), "2024-03-10T08:15:00+00:00");
}

#[test]
fn test_invalid_identifiers_degrade() {
    let doc = load_fixture("article.html");
    let published = doc.root().descendants_with_class("value")[1];

    assert_eq!(published.date_value("yyyy-MM-dd HH:mm", "Not/AZone"), None);
    assert_eq!(published.date_value("yyyy-QQ", "UTC"), None);

    let bad_locale = ConversionOptions::builder().locale("!!").build();
    assert_eq!(published.date_value_with(&bad_locale), None);
    assert_eq!(published.double_value_with(&bad_locale), 0.0);

    let err = published.try_date_value("yyyy-QQ", "UTC").unwrap_err();
    assert!(err.is_invalid_pattern());
}
