//! Text measurement, padding, and truncation helpers.
//!
//! All functions handle ANSI escape codes: they are preserved in output but
//! never count toward display width. Unicode widths (CJK characters occupy
//! two columns) are respected throughout.

use console::{measure_text_width, pad_str, Alignment};
use unicode_width::UnicodeWidthChar;

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// # Example
///
/// ```rust
/// use buildlist::tabular::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// Strings already at or beyond the target width are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Truncates a string from the end to fit within a maximum display width,
/// appending `ellipsis` when truncation occurs.
///
/// # Example
///
/// ```rust
/// use buildlist::tabular::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 8, "…"), "Hello W…");
/// assert_eq!(truncate_end("Short", 10, "…"), "Short");
/// ```
pub fn truncate_end(s: &str, max_width: usize, ellipsis: &str) -> String {
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let ellipsis_width = measure_text_width(ellipsis);
    if max_width <= ellipsis_width {
        return ellipsis.chars().take(max_width).collect();
    }

    let limit = max_width - ellipsis_width;
    let mut result = String::new();
    let mut current = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > limit {
            break;
        }
        result.push(c);
        current += w;
    }
    result.push_str(ellipsis);
    result
}
