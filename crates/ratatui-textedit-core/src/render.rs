use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::text;
use crate::viewport::ViewportTracker;

pub fn render_scrollbar(area: Rect, buf: &mut Buffer, viewport: &ViewportTracker, style: Style) {
    buf.set_style(area, style);
    if area.height == 0 {
        return;
    }
    let content = viewport.content_rows();
    let visible = viewport.inner_height();
    if content <= visible || content == 0 {
        for dy in 0..area.height {
            buf.set_stringn(area.x, area.y + dy, " ", 1, style);
        }
        return;
    }

    let track_h = area.height as f64;
    let thumb_h = ((visible as f64 / content as f64) * track_h)
        .round()
        .clamp(1.0, track_h) as u16;

    let max_row = content.saturating_sub(visible).max(1) as f64;
    let thumb_top = ((viewport.scroll_row() as f64 / max_row) * (track_h - thumb_h as f64))
        .round()
        .clamp(0.0, (track_h - thumb_h as f64).max(0.0)) as u16;

    for dy in 0..area.height {
        let ch = if dy >= thumb_top && dy < thumb_top + thumb_h {
            "█"
        } else {
            " "
        };
        buf.set_stringn(area.x, area.y + dy, ch, 1, style);
    }
}

/// Draws one logical line starting at display column `start_col`, clipped to `max_cols` cells.
///
/// `style_at` receives the byte offset of each character within `line`. Tabs expand to
/// [`text::TAB_WIDTH`] cells; a wide character cut by either edge is skipped.
pub fn render_text_line(
    x: u16,
    y: u16,
    start_col: usize,
    max_cols: u16,
    buf: &mut Buffer,
    line: &str,
    mut style_at: impl FnMut(usize) -> Style,
) {
    if max_cols == 0 {
        return;
    }

    let max_cols = max_cols as usize;
    let mut col = 0usize;
    let mut out_cols = 0usize;
    let mut tmp = [0u8; 4];

    for (offset, ch) in line.char_indices() {
        let w = text::char_width(ch);
        if w == 0 {
            continue;
        }
        if ch == '\t' {
            let style = style_at(offset);
            for _ in 0..w {
                if col >= start_col {
                    if out_cols >= max_cols {
                        return;
                    }
                    set_cell(buf, x + out_cols as u16, y, " ", style);
                    out_cols += 1;
                }
                col += 1;
            }
            continue;
        }
        if col < start_col {
            col += w;
            continue;
        }
        if out_cols + w > max_cols {
            return;
        }

        let style = style_at(offset);
        set_cell(buf, x + out_cols as u16, y, ch.encode_utf8(&mut tmp), style);
        for pad in 1..w {
            set_cell(buf, x + (out_cols + pad) as u16, y, "", style);
        }
        out_cols += w;
        col += w;
    }
}

fn set_cell(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_style(style);
        cell.set_symbol(symbol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn row(buf: &Buffer, width: u16) -> String {
        (0..width)
            .map(|x| buf.cell((x, 0)).map_or(" ", |c| c.symbol()).to_string())
            .collect()
    }

    #[test]
    fn tabs_expand_and_columns_clip() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        render_text_line(0, 0, 0, 6, &mut buf, "\tab", |_| Style::default());
        assert_eq!(row(&buf, 6), "    ab");

        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        render_text_line(0, 0, 2, 3, &mut buf, "abcdef", |_| Style::default());
        assert_eq!(row(&buf, 3), "cde");
    }

    #[test]
    fn wide_char_cut_by_the_left_edge_is_skipped() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 2, 1));
        render_text_line(0, 0, 1, 2, &mut buf, "你好", |_| Style::default());
        assert_eq!(row(&buf, 2), "好");
    }

    #[test]
    fn style_callback_sees_byte_offsets() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        let hl = Style::default().bg(Color::Blue);
        render_text_line(0, 0, 0, 3, &mut buf, "aéb", |off| {
            if off == 1 { hl } else { Style::default() }
        });
        assert_eq!(buf.cell((1, 0)).map(|c| c.bg), Some(Color::Blue));
        assert_ne!(buf.cell((2, 0)).map(|c| c.bg), Some(Color::Blue));
    }

    #[test]
    fn scrollbar_draws_a_thumb_when_content_overflows() {
        let mut v = ViewportTracker::default();
        v.set_content_rows(50);
        v.set_size(10, 5);
        let mut buf = Buffer::empty(Rect::new(0, 0, 1, 5));
        render_scrollbar(Rect::new(0, 0, 1, 5), &mut buf, &v, Style::default());
        assert_eq!(buf.cell((0, 0)).map(|c| c.symbol()), Some("█"));
        assert_eq!(buf.cell((0, 4)).map(|c| c.symbol()), Some(" "));
    }
}
