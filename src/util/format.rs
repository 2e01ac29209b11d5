//! Display formatting for entry dates and previews.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::NaiveDateTime;

/// Compact card format, e.g. `Mar 5, 2024, 10:15 AM`.
pub fn format_date_short(date: &NaiveDateTime) -> String {
    date.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Full single-entry format, e.g. `Tuesday, March 5, 2024, 10:15 AM`.
pub fn format_date_long(date: &NaiveDateTime) -> String {
    date.format("%A, %B %-d, %Y, %I:%M %p").to_string()
}

/// Preview truncation on a character boundary with an ellipsis.
pub fn truncate(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_owned();
    }
    let cut: String = content.chars().take(max_chars).collect();
    format!("{cut}...")
}
