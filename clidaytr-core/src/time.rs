//! Timestamp helpers.
//!
//! The board file stores timestamps as already-formatted local-time strings;
//! nothing in-process ever parses them back.

use chrono::Local;

/// Format used everywhere a timestamp is stored or shown, e.g.
/// `2024-Jan-05 14:30:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%b-%d %H:%M:%S";

/// Current local time in the stored format.
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
