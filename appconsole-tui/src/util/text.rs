//! Display-width helpers

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `width` columns, marking the cut with `…`.
pub fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Pad `text` with spaces to exactly `width` columns (cutting when longer).
pub fn pad(text: &str, width: usize) -> String {
    let fitted = fit(text, width);
    let padding = width.saturating_sub(fitted.width());
    format!("{fitted}{}", " ".repeat(padding))
}

/// Center `text` in `width` columns.
pub fn center(text: &str, width: usize) -> String {
    let fitted = fit(text, width);
    let free = width.saturating_sub(fitted.width());
    let left = free / 2;
    format!(
        "{}{fitted}{}",
        " ".repeat(left),
        " ".repeat(free - left)
    )
}

/// Last `width` columns of `text`, for inputs that follow the cursor.
pub fn tail(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut kept = Vec::new();
    for ch in text.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        kept.push(ch);
    }
    kept.into_iter().rev().collect()
}
