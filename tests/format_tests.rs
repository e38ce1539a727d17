// tests/format_tests.rs

use chrono::{Duration, TimeZone, Utc};
use mini_forum::utils::time::format_relative_date;
use mini_forum::validation::{validate_author, validate_content};

fn reference_now() -> chrono::DateTime<Utc> {
    // A Wednesday, midday
    Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap()
}

#[test]
fn under_a_minute_is_just_now() {
    let now = reference_now();
    assert_eq!(format_relative_date(now - Duration::seconds(30), now), "just now");
}

#[test]
fn minutes_are_counted() {
    let now = reference_now();
    assert_eq!(
        format_relative_date(now - Duration::minutes(1), now),
        "1 minute ago"
    );
    assert_eq!(
        format_relative_date(now - Duration::minutes(5), now),
        "5 minutes ago"
    );
}

#[test]
fn hours_are_counted_within_the_day() {
    let now = reference_now();
    assert_eq!(format_relative_date(now - Duration::hours(1), now), "1 hour ago");
    assert_eq!(format_relative_date(now - Duration::hours(3), now), "3 hours ago");
}

#[test]
fn one_whole_day_back_is_yesterday() {
    let now = reference_now();
    // 25 hours earlier is 11:00 the previous day
    assert_eq!(
        format_relative_date(now - Duration::hours(25), now),
        "Yesterday at 11:00"
    );
}

#[test]
fn a_few_days_back_uses_the_weekday() {
    let now = reference_now();
    // Three days before a Wednesday midday is Sunday
    let timestamp = Utc.with_ymd_and_hms(2024, 5, 12, 9, 30, 0).unwrap();
    assert_eq!(format_relative_date(timestamp, now), "Sunday at 09:30");
}

#[test]
fn a_week_or_more_back_is_absolute() {
    let now = reference_now();
    assert_eq!(
        format_relative_date(now - Duration::days(10), now),
        "05/05/2024 12:00"
    );
    // Exactly seven whole days falls out of the weekday bucket
    assert_eq!(
        format_relative_date(now - Duration::days(7), now),
        "08/05/2024 12:00"
    );
}

#[test]
fn future_timestamps_fall_back_to_absolute() {
    let now = reference_now();
    assert_eq!(
        format_relative_date(now + Duration::hours(1), now),
        "15/05/2024 13:00"
    );
}

#[test]
fn author_rule_accepts_letters_and_spaces() {
    assert!(validate_author("Jo").is_ok());
    assert!(validate_author("Anna Maria Rossi").is_ok());
    assert!(validate_author("Chloé Dubois").is_ok());
}

#[test]
fn author_rule_rejects_bad_input() {
    // Too short / too long
    assert!(validate_author("J").is_err());
    assert!(validate_author(&"a".repeat(51)).is_err());
    // Digits and symbols
    assert!(validate_author("Alice123").is_err());
    assert!(validate_author("Bob!").is_err());
    assert!(validate_author("").is_err());
}

#[test]
fn content_rule_enforces_bounds() {
    assert!(validate_content("123456789").is_err());
    assert!(validate_content("1234567890").is_ok());
    assert!(validate_content(&"x".repeat(1000)).is_ok());
    assert!(validate_content(&"x".repeat(1001)).is_err());
}
