/// Visible window over the editor's logical rows and display columns.
///
/// Scrolling is a hard snap: a caret above or left of the window pulls the window to start at
/// the caret, a caret below or right of it pushes the window just far enough that the caret sits
/// on the last visible row or column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportTracker {
    scroll_row: usize,
    scroll_col: usize,
    inner_width: usize,
    inner_height: usize,
    content_rows: usize,
    preferred_col: Option<usize>,
}

impl ViewportTracker {
    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    pub fn scroll_col(&self) -> usize {
        self.scroll_col
    }

    pub fn inner_width(&self) -> usize {
        self.inner_width
    }

    pub fn inner_height(&self) -> usize {
        self.inner_height
    }

    pub fn content_rows(&self) -> usize {
        self.content_rows
    }

    /// Column the caret returns to on vertical moves, if one is remembered.
    pub fn preferred_col(&self) -> Option<usize> {
        self.preferred_col
    }

    pub fn set_size(&mut self, width: usize, height: usize) {
        self.inner_width = width;
        self.inner_height = height;
        self.clamp();
    }

    pub fn set_content_rows(&mut self, rows: usize) {
        self.content_rows = rows;
        self.clamp();
    }

    pub fn remember_column(&mut self, col: usize) {
        self.preferred_col = Some(col);
    }

    pub fn reset_preferred_column(&mut self) {
        self.preferred_col = None;
    }

    /// Rows moved by a page step: one less than the window so a line of context stays visible.
    pub fn page_rows(&self) -> usize {
        self.inner_height.saturating_sub(1).max(1)
    }

    pub fn ensure_visible(&mut self, row: usize, col: usize) {
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row.saturating_add(self.inner_height) {
            self.scroll_row = row.saturating_sub(self.inner_height.saturating_sub(1));
        }

        if col < self.scroll_col {
            self.scroll_col = col;
        } else if col >= self.scroll_col.saturating_add(self.inner_width) {
            self.scroll_col = col.saturating_sub(self.inner_width.saturating_sub(1));
        }

        self.clamp();
    }

    /// Share of content above the bottom edge of the window, `None` when everything fits.
    pub fn percent_y(&self) -> Option<u8> {
        if self.inner_height == 0 || self.content_rows <= self.inner_height {
            return None;
        }
        let visible_bottom = self.scroll_row.saturating_add(self.inner_height) as f64;
        let pct = (visible_bottom / self.content_rows as f64 * 100.0).round();
        Some(pct.clamp(0.0, 100.0) as u8)
    }

    fn clamp(&mut self) {
        self.scroll_row = self.scroll_row.min(self.max_scroll_row());
    }

    fn max_scroll_row(&self) -> usize {
        self.content_rows.saturating_sub(self.inner_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(w: usize, h: usize, rows: usize) -> ViewportTracker {
        let mut v = ViewportTracker::default();
        v.set_content_rows(rows);
        v.set_size(w, h);
        v
    }

    #[test]
    fn moving_below_the_window_scrolls_just_enough() {
        let mut v = tracker(10, 3, 20);
        for row in 0..3 {
            v.ensure_visible(row, 0);
            assert_eq!(v.scroll_row(), 0);
        }
        v.ensure_visible(3, 0);
        assert_eq!(v.scroll_row(), 1);
        v.ensure_visible(7, 0);
        assert_eq!(v.scroll_row(), 5);
    }

    #[test]
    fn moving_above_the_window_snaps_to_the_caret() {
        let mut v = tracker(10, 3, 20);
        v.ensure_visible(10, 0);
        assert_eq!(v.scroll_row(), 8);
        v.ensure_visible(4, 0);
        assert_eq!(v.scroll_row(), 4);
    }

    #[test]
    fn columns_follow_the_same_rule() {
        let mut v = tracker(4, 1, 1);
        v.ensure_visible(0, 4);
        assert_eq!(v.scroll_col(), 1);
        v.ensure_visible(0, 0);
        assert_eq!(v.scroll_col(), 0);
    }

    #[test]
    fn shrinking_content_clamps_scroll_row() {
        let mut v = tracker(10, 3, 20);
        v.ensure_visible(19, 0);
        assert_eq!(v.scroll_row(), 17);
        v.set_content_rows(4);
        assert_eq!(v.scroll_row(), 1);
    }

    #[test]
    fn page_rows_keeps_one_line_of_context() {
        assert_eq!(tracker(10, 5, 1).page_rows(), 4);
        assert_eq!(tracker(10, 1, 1).page_rows(), 1);
        assert_eq!(tracker(10, 0, 1).page_rows(), 1);
    }
}
