//! Text formatting helpers shared by the views.

use chrono::{DateTime, Utc};

// ============================================================================
// Hash Formatting
// ============================================================================

/// Truncate a hash or address to fit in the given width.
///
/// If the value is longer than `max_len`, the middle is replaced with an
/// ellipsis (e.g. `"0x1234...abcd"`).
///
/// # Examples
///
/// ```ignore
/// let hash = format!("0x{:064x}", 1);
/// let truncated = truncate_middle(&hash, 13);
/// assert_eq!(truncated, "0x0000...0001");
/// ```
#[must_use]
pub fn truncate_middle(value: &str, max_len: usize) -> String {
    let len = value.chars().count();
    if len <= max_len {
        return value.to_string();
    }

    if max_len < 7 {
        return value.chars().take(max_len).collect();
    }

    // Reserve 3 chars for "..."
    let available = max_len - 3;
    let prefix_len = available.div_ceil(2);
    let suffix_len = available / 2;

    let prefix: String = value.chars().take(prefix_len).collect();
    let suffix: String = value.chars().skip(len - suffix_len).collect();

    format!("{prefix}...{suffix}")
}

// ============================================================================
// Time Formatting
// ============================================================================

/// Formats a submission timestamp for the activity list.
#[must_use]
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}
