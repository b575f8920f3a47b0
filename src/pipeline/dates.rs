//! "Last Updated" date parsing

use chrono::NaiveDate;

/// Format of every well-formed value, e.g. `"January 7, 2018"`.
pub const LAST_UPDATED_FORMAT: &str = "%B %d, %Y";

/// Known malformed value found in place of a date (a shifted version string).
pub const MALFORMED_LAST_UPDATED: &str = "1.0.19";

/// Parse a raw "Last Updated" value. Malformed values yield `None`.
pub fn parse_last_updated(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw == MALFORMED_LAST_UPDATED {
        return None;
    }
    NaiveDate::parse_from_str(raw, LAST_UPDATED_FORMAT).ok()
}

/// Days since the Unix epoch, the physical representation of a `Date` column.
pub fn days_since_epoch(date: NaiveDate) -> i32 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
    (date - epoch).num_days() as i32
}
