//! Column-aware text fitting for the terminal
//!
//! Widths are display columns (`unicode-width`), so wide characters count
//! double.

use std::mem;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Word-wraps `s` to lines of at most `width` columns
///
/// Existing line breaks are kept. Words wider than `width` are broken
/// between characters.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    s.split('\n')
        .map(|line| wrap_line(line, width).join("\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        let word_width = word.width();
        let gap = usize::from(!current.is_empty());

        if current_width + gap + word_width <= width {
            if gap == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += gap + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for c in word.chars() {
            let char_width = c.width().unwrap_or(0);
            if current_width + char_width > width && !current.is_empty() {
                lines.push(mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += char_width;
        }
    }

    lines.push(current);
    lines
}

/// Keeps at most `max_height` lines; a cut is marked with `…` on its own line
pub fn truncate_text(s: &str, max_height: usize) -> String {
    let lines: Vec<&str> = s.lines().collect();
    if lines.len() <= max_height {
        return s.to_string();
    }
    if max_height == 0 {
        return String::new();
    }

    let mut kept = lines[..max_height - 1].join("\n");
    if !kept.is_empty() {
        kept.push('\n');
    }
    kept.push(ELLIPSIS);
    kept
}

/// Shortens a single line to `max_width` columns, ending with `…` when cut
pub fn ellipsize(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width + 1 > max_width {
            break;
        }
        width += char_width;
        result.push(c);
    }
    result.push(ELLIPSIS);
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Backend Developer", 40, "Backend Developer")]
    #[case("Backend Developer", 10, "Backend\nDeveloper")]
    #[case("Fundamentals  First", 12, "Fundamentals\nFirst")]
    #[case("PostgreSQL", 4, "Post\ngreS\nQL")]
    #[case("ab\n\ncd", 5, "ab\n\ncd")]
    #[case("こんにちは", 4, "こん\nにち\nは")]
    #[case("anything", 0, "")]
    fn test_wrap_text(#[case] input: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(wrap_text(input, width), expected);
    }

    #[test]
    fn test_wrapped_lines_never_exceed_width() {
        let bio = "I build reliable backends with Python, FastAPI and PostgreSQL, \
                   and keep the servers they run on healthy.";
        for width in 1..30 {
            for line in wrap_text(bio, width).lines() {
                assert!(line.width() <= width, "{line:?} wider than {width}");
            }
        }
    }

    #[rstest]
    #[case("foo\nbar\nbaz", 3, "foo\nbar\nbaz")]
    #[case("foo\nbar\nbaz", 2, "foo\n…")]
    #[case("foo\nbar", 1, "…")]
    #[case("foo\nbar", 0, "")]
    fn test_truncate_text(#[case] input: &str, #[case] height: usize, #[case] expected: &str) {
        assert_eq!(truncate_text(input, height), expected);
    }

    #[test]
    fn test_ellipsize() {
        assert_eq!(ellipsize("E-commerce Database", 30), "E-commerce Database");
        assert_eq!(ellipsize("E-commerce Database", 8), "E-comme…");
        assert_eq!(ellipsize("abc", 0), "");
    }
}
