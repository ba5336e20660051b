//! Formatting utilities for file sizes, dates, and paths.

use treegrid_core::Timestamp;

/// Format a file size for display (e.g., "1.5 KB", "3.2 MB").
///
/// 1024-based units with one decimal; unknown sizes render as "?".
pub fn format_size(size: Option<u64>) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let Some(bytes) = size else {
        return "?".to_string();
    };
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Format a modification time for display.
///
/// ISO strings from the server pass through untouched; epoch milliseconds
/// are rendered as "YYYY-MM-DD HH:MM" UTC. Unknown times render as "?".
pub fn format_modified(modified: Option<&Timestamp>) -> String {
    match modified {
        None => "?".to_string(),
        Some(Timestamp::Text(text)) => text.clone(),
        Some(Timestamp::Millis(ms)) => format_epoch_millis(*ms),
    }
}

/// Render epoch milliseconds as "YYYY-MM-DD HH:MM" (UTC).
fn format_epoch_millis(ms: u64) -> String {
    let secs = ms / 1000;
    let days = secs / 86400;
    let hour = (secs % 86400) / 3600;
    let minute = (secs % 3600) / 60;

    let mut year = 1970i64;
    let mut remaining_days = days as i64;
    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let days_in_months: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 1;
    for days_in_month in days_in_months.iter() {
        if remaining_days < *days_in_month {
            break;
        }
        remaining_days -= days_in_month;
        month += 1;
    }

    let day = remaining_days + 1;
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        year, month, day, hour, minute
    )
}

/// Check if a year is a leap year.
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Join a directory path and a child name ("" is the root directory).
pub fn join_path(directory: &str, name: &str) -> String {
    if directory.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", directory, name)
    }
}
