use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Width of the widest line.
pub fn max_line_width(s: &str) -> usize {
    s.lines().map(display_width).max().unwrap_or(0)
}

pub fn line_count(s: &str) -> usize {
    s.lines().count().max(1)
}
