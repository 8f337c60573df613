//! Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max_width` terminal columns, adding `…` when cut.
///
/// Width is measured in display columns (not bytes), so CJK and emoji are
/// counted correctly. The ellipsis itself takes one column.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > target {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
