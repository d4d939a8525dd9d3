//! Row/column geometry over UTF-8 text addressed by byte offsets.
//!
//! Columns are display columns: wide characters count as two, tabs expand to [`TAB_WIDTH`].
use unicode_width::UnicodeWidthChar;

pub const TAB_WIDTH: usize = 4;

pub fn char_width(ch: char) -> usize {
    if ch == '\t' {
        return TAB_WIDTH;
    }
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Largest char boundary that is `<= offset`, with `offset` first clamped to `s.len()`.
pub fn floor_char_boundary(s: &str, offset: usize) -> usize {
    let mut i = offset.min(s.len());
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

pub fn prev_char_boundary(s: &str, offset: usize) -> Option<usize> {
    let offset = floor_char_boundary(s, offset);
    s[..offset].char_indices().next_back().map(|(i, _)| i)
}

pub fn next_char_boundary(s: &str, offset: usize) -> Option<usize> {
    let offset = floor_char_boundary(s, offset);
    s[offset..].chars().next().map(|ch| offset + ch.len_utf8())
}

/// Longest prefix of `s` that fits in `max_bytes` without splitting a character.
pub fn prefix_within(s: &str, max_bytes: usize) -> &str {
    &s[..floor_char_boundary(s, max_bytes)]
}

pub fn line_start(s: &str, offset: usize) -> usize {
    let offset = floor_char_boundary(s, offset);
    s[..offset].rfind('\n').map_or(0, |i| i + 1)
}

pub fn line_end(s: &str, offset: usize) -> usize {
    let offset = floor_char_boundary(s, offset);
    s[offset..].find('\n').map_or(s.len(), |i| offset + i)
}

pub fn line_count(s: &str) -> usize {
    s.bytes().filter(|b| *b == b'\n').count() + 1
}

/// `(row, display column)` of `offset`.
pub fn row_col(s: &str, offset: usize) -> (usize, usize) {
    let offset = floor_char_boundary(s, offset);
    let before = &s[..offset];
    let row = before.bytes().filter(|b| *b == b'\n').count();
    let start = line_start(s, offset);
    (row, display_width(&s[start..offset]))
}

/// Byte offset of the `row`-th line start; rows past the end map to the last line.
pub fn row_start(s: &str, row: usize) -> usize {
    if row == 0 {
        return 0;
    }
    s.match_indices('\n')
        .nth(row - 1)
        .map_or_else(|| line_start(s, s.len()), |(i, _)| i + 1)
}

/// Offset on `row` whose display column is the largest one not exceeding `target_col`.
pub fn offset_at(s: &str, row: usize, target_col: usize) -> usize {
    let start = row_start(s, row);
    let end = line_end(s, start);
    let mut cols = 0usize;
    for (i, ch) in s[start..end].char_indices() {
        let w = char_width(ch);
        if cols + w > target_col {
            return start + i;
        }
        cols += w;
    }
    end
}

/// Byte ranges of every line, excluding the newline terminators.
pub fn line_ranges(s: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let mut start = 0usize;
    let mut done = false;
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        match s[start..].find('\n') {
            Some(i) => {
                let range = (start, start + i);
                start += i + 1;
                Some(range)
            }
            None => {
                done = true;
                Some((start, s.len()))
            }
        }
    })
}

pub fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_col_counts_rows_and_display_columns() {
        let s = "ab\n你好x\n";
        assert_eq!(row_col(s, 0), (0, 0));
        assert_eq!(row_col(s, 2), (0, 2));
        assert_eq!(row_col(s, 3), (1, 0));
        assert_eq!(row_col(s, 6), (1, 2));
        assert_eq!(row_col(s, 10), (1, 5));
        assert_eq!(row_col(s, s.len()), (2, 0));
    }

    #[test]
    fn offset_at_snaps_to_shorter_lines() {
        let s = "abcdef\nxy\n\tz";
        assert_eq!(offset_at(s, 0, 4), 4);
        assert_eq!(offset_at(s, 1, 4), 9);
        assert_eq!(offset_at(s, 2, 3), 10);
        assert_eq!(offset_at(s, 2, 4), 11);
        assert_eq!(offset_at(s, 9, 0), 10);
    }

    #[test]
    fn prefix_never_splits_a_character() {
        assert_eq!(prefix_within("héllo", 2), "h");
        assert_eq!(prefix_within("héllo", 3), "hé");
        assert_eq!(prefix_within("abc", 10), "abc");
    }

    #[test]
    fn boundaries_step_over_multibyte_chars() {
        let s = "aé";
        assert_eq!(next_char_boundary(s, 1), Some(3));
        assert_eq!(prev_char_boundary(s, 3), Some(1));
        assert_eq!(prev_char_boundary(s, 0), None);
        assert_eq!(next_char_boundary(s, 3), None);
        assert_eq!(floor_char_boundary(s, 2), 1);
    }

    #[test]
    fn line_ranges_include_trailing_empty_line() {
        let ranges: Vec<_> = line_ranges("a\nbc\n").collect();
        assert_eq!(ranges, vec![(0, 1), (2, 4), (5, 5)]);
    }
}
