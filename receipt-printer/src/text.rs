//! Fixed-width text helpers
//!
//! Receipt columns are measured in characters (Unicode scalar values),
//! so accented names never split in the middle of a code point.

/// Number of characters in a string
pub fn char_width(s: &str) -> usize {
    s.chars().count()
}

/// Keep at most `width` characters
pub fn truncate(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

/// Pad a string with spaces to exactly `width` characters
///
/// Text at least `width` long is truncated (no ellipsis). Otherwise spaces
/// go on the right, or on the left when `align_right` is set.
pub fn pad(s: &str, width: usize, align_right: bool) -> String {
    let current = char_width(s);
    if current >= width {
        return truncate(s, width);
    }
    let spaces = " ".repeat(width - current);
    if align_right {
        format!("{}{}", spaces, s)
    } else {
        format!("{}{}", s, spaces)
    }
}
