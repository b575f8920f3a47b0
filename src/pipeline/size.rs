//! Text rewriting for the "Size" column
//!
//! Raw sizes look like `"19M"`, `"14k"`, `"8.7M"` or the sentinels
//! `"1,000+"` and `"Varies with device"`. Sentinel rows are removed before
//! coercion; the remaining values are rewritten into a digit string holding
//! the byte count (decimal units, 1M = 1,000,000).
//!
//! The rewrite is lossy for some inputs: after suffix expansion, a value
//! with a decimal point loses its final character and then its points. This
//! yields the exact byte count for one fractional digit (`"3.5M"` ->
//! `3500000`) and a value ten times too large for two (`"2.25M"` ->
//! `22500000`).

/// Marker that only appears in the `"1,000+"` sentinel.
pub const PLUS_MARKER: char = '+';

/// Prefix of the `"Varies with device"` sentinel.
pub const VARIES_MARKER: &str = "Varies";

/// Whether a raw size is a sentinel whose row must be dropped.
///
/// Any `+` matches, not just the one in `"1,000+"`.
pub fn is_size_sentinel(raw: &str) -> bool {
    raw.contains(PLUS_MARKER) || raw.contains(VARIES_MARKER)
}

/// Rewrite a raw size into the digit string later coerced to a number.
pub fn expand_size(raw: &str) -> String {
    let expanded = raw.replace('M', "000000").replace('k', "000");

    let trimmed = if expanded.contains('.') {
        let mut chars = expanded.chars();
        chars.next_back();
        chars.as_str().to_string()
    } else {
        expanded
    };

    trimmed.replace('.', "")
}
