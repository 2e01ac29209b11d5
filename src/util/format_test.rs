use chrono::NaiveDate;

use super::*;

fn sample() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(10, 15, 30)
        .unwrap()
}

#[test]
fn short_format_matches_card_style() {
    assert_eq!(format_date_short(&sample()), "Mar 5, 2024, 10:15 AM");
}

#[test]
fn long_format_includes_the_weekday() {
    assert_eq!(format_date_long(&sample()), "Tuesday, March 5, 2024, 10:15 AM");
}

#[test]
fn afternoon_times_render_as_pm() {
    let date = NaiveDate::from_ymd_opt(2024, 12, 31)
        .unwrap()
        .and_hms_opt(13, 7, 0)
        .unwrap();
    assert_eq!(format_date_short(&date), "Dec 31, 2024, 01:07 PM");
}

#[test]
fn truncate_leaves_short_content_alone() {
    assert_eq!(truncate("short", 150), "short");
}

#[test]
fn truncate_cuts_long_content_with_ellipsis() {
    let long = "x".repeat(200);
    let cut = truncate(&long, 150);
    assert_eq!(cut.chars().count(), 153);
    assert!(cut.ends_with("..."));
}

#[test]
fn truncate_respects_multibyte_boundaries() {
    let text = "ü".repeat(10);
    assert_eq!(truncate(&text, 4), format!("{}...", "ü".repeat(4)));
}
