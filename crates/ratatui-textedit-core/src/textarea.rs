use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;

use crate::action::EditorBindings;
use crate::editor::EditorOptions;
use crate::editor::TextEditor;
use crate::error::EditError;
use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::MouseButton;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::render;
use crate::text;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EnterBehavior {
    Newline,
    Submit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitRule {
    Never,
    #[default]
    EnterSubmitsShiftNewline,
    ShiftEnterSubmitsEnterNewline,
}

#[derive(Clone, Debug)]
pub struct TextAreaOptions {
    pub show_scrollbar: bool,
    pub style: Style,
    pub selection_style: Style,
    /// Applied to the cell under each secondary caret.
    pub secondary_cursor_style: Style,
    pub submit_rule: SubmitRule,
    /// Empty the editor after a submit.
    pub clear_on_submit: bool,
    pub bindings: EditorBindings,
    pub editor: EditorOptions,
}

impl Default for TextAreaOptions {
    fn default() -> Self {
        Self {
            show_scrollbar: true,
            style: Style::default(),
            selection_style: Style::default().add_modifier(Modifier::REVERSED),
            secondary_cursor_style: Style::default().add_modifier(Modifier::UNDERLINED),
            submit_rule: SubmitRule::default(),
            clear_on_submit: true,
            bindings: EditorBindings::default(),
            editor: EditorOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextAreaAction {
    None,
    /// Carets, selection or scroll changed; the text did not.
    Redraw,
    Changed,
    Submitted(String),
}

/// Multi-line, multi-caret text input drawn into a ratatui [`Buffer`].
///
/// The widget owns a [`TextEditor`] and translates [`InputEvent`]s into editor operations:
/// bound keys go through [`EditorBindings`], printable characters are inserted at every caret,
/// and `Enter` follows the configured [`SubmitRule`].
#[derive(Debug)]
pub struct TextArea {
    editor: TextEditor,
    content_area: Rect,
    options: TextAreaOptions,
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

impl TextArea {
    pub fn new() -> Self {
        Self::with_options(TextAreaOptions::default())
    }

    pub fn with_options(options: TextAreaOptions) -> Self {
        Self {
            editor: TextEditor::with_options(options.editor),
            content_area: Rect::default(),
            options,
        }
    }

    pub fn editor(&self) -> &TextEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut TextEditor {
        &mut self.editor
    }

    pub fn options(&self) -> &TextAreaOptions {
        &self.options
    }

    pub fn set_text(&mut self, text: &str) -> Result<bool, EditError> {
        self.editor.set_text(text)
    }

    pub fn text(&self) -> &str {
        self.editor.text()
    }

    pub fn is_empty(&self) -> bool {
        self.editor.is_empty()
    }

    pub fn set_viewport(&mut self, area: Rect) {
        let content_area = self.content_area(area);
        self.content_area = content_area;
        self.editor
            .set_viewport_size(content_area.width as usize, content_area.height as usize);
    }

    /// Terminal position of the primary caret, if it is inside the visible window.
    pub fn cursor_pos(&self, area: Rect) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let content_area = self.content_area(area);
        let (row, col) = self.editor.cursor_position();
        self.screen_cell(content_area, row, col)
    }

    pub fn input(&mut self, event: InputEvent) -> Result<TextAreaAction, EditError> {
        match event {
            InputEvent::Paste(s) => {
                let s = text::normalize_newlines(&s);
                Ok(changed(self.editor.insert_text(&s)?))
            }
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
        }
    }

    pub fn render_ref(&mut self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.set_viewport(area);

        let content_area = self.content_area;
        let scrollbar_x = (content_area.width < area.width).then(|| area.x + area.width - 1);
        let (scroll_row, scroll_col) = self.editor.scroll_offsets();
        let text = self.editor.text();
        let selection = self.editor.selection();

        let mut lines = text::line_ranges(text).skip(scroll_row);
        for row in 0..content_area.height {
            let y = content_area.y + row;
            buf.set_style(
                Rect::new(content_area.x, y, content_area.width, 1),
                self.options.style,
            );
            let Some((start, end)) = lines.next() else {
                continue;
            };
            render::render_text_line(
                content_area.x,
                y,
                scroll_col,
                content_area.width,
                buf,
                &text[start..end],
                |offset| match selection {
                    Some(sel) if sel.contains(start + offset) => {
                        self.options.style.patch(self.options.selection_style)
                    }
                    _ => self.options.style,
                },
            );
        }

        for &offset in self.editor.extra_cursors() {
            let (row, col) = text::row_col(text, offset);
            if let Some(pos) = self.screen_cell(content_area, row, col) {
                if let Some(cell) = buf.cell_mut(pos) {
                    cell.set_style(self.options.secondary_cursor_style);
                }
            }
        }

        if let Some(sb_x) = scrollbar_x {
            render::render_scrollbar(
                Rect::new(sb_x, area.y, 1, area.height),
                buf,
                self.editor.viewport(),
                self.options.style,
            );
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<TextAreaAction, EditError> {
        if let Some(action) = self.options.bindings.action_for(&key) {
            let handled = self.editor.apply_editor_action(action)?;
            return Ok(if !handled {
                TextAreaAction::None
            } else if action.mutates_text() {
                TextAreaAction::Changed
            } else if action.is_navigation() {
                TextAreaAction::Redraw
            } else {
                TextAreaAction::None
            });
        }

        if let Some(c) = key.typed_char() {
            return Ok(changed(self.editor.insert_char(c)?));
        }

        match key.code {
            KeyCode::Enter => match self.enter_behavior(key) {
                EnterBehavior::Newline => Ok(changed(self.editor.insert_char('\n')?)),
                EnterBehavior::Submit => {
                    let submitted = self.editor.submit();
                    if self.options.clear_on_submit {
                        self.editor.set_text("")?;
                    }
                    Ok(TextAreaAction::Submitted(submitted))
                }
            },
            KeyCode::Backspace => Ok(changed(self.editor.delete_backward()?)),
            KeyCode::Delete => Ok(changed(self.editor.delete_forward()?)),
            KeyCode::Esc => {
                let had_extra = self.editor.clear_extra_cursors();
                let had_selection = self.editor.clear_selection();
                Ok(redraw(had_extra || had_selection))
            }
            _ => Ok(TextAreaAction::None),
        }
    }

    /// Left click places the primary caret; Alt+click adds a secondary caret. The wheel moves the
    /// primary caret a line at a time.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<TextAreaAction, EditError> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {}
            MouseEventKind::ScrollUp => return Ok(redraw(self.editor.move_up())),
            MouseEventKind::ScrollDown => return Ok(redraw(self.editor.move_down())),
            _ => return Ok(TextAreaAction::None),
        }
        let Some(offset) = self.offset_at_cell(mouse.x, mouse.y) else {
            return Ok(TextAreaAction::None);
        };
        if mouse.modifiers.alt {
            return Ok(redraw(self.editor.add_cursor(offset)?));
        }
        self.editor.set_cursors(&[offset])?;
        Ok(TextAreaAction::Redraw)
    }

    fn enter_behavior(&self, key: KeyEvent) -> EnterBehavior {
        match self.options.submit_rule {
            SubmitRule::Never => EnterBehavior::Newline,
            SubmitRule::EnterSubmitsShiftNewline => {
                if key.modifiers.shift {
                    EnterBehavior::Newline
                } else {
                    EnterBehavior::Submit
                }
            }
            SubmitRule::ShiftEnterSubmitsEnterNewline => {
                if key.modifiers.shift {
                    EnterBehavior::Submit
                } else {
                    EnterBehavior::Newline
                }
            }
        }
    }

    fn content_area(&self, area: Rect) -> Rect {
        if self.options.show_scrollbar && area.width >= 2 {
            Rect::new(area.x, area.y, area.width - 1, area.height)
        } else {
            area
        }
    }

    fn screen_cell(&self, content_area: Rect, row: usize, col: usize) -> Option<(u16, u16)> {
        let (scroll_row, scroll_col) = self.editor.scroll_offsets();
        let y = row.checked_sub(scroll_row)?;
        let x = col.checked_sub(scroll_col)?;
        if x >= content_area.width as usize || y >= content_area.height as usize {
            return None;
        }
        Some((content_area.x + x as u16, content_area.y + y as u16))
    }

    /// Buffer offset under a terminal cell of the last laid-out content area.
    fn offset_at_cell(&self, x: u16, y: u16) -> Option<usize> {
        let area = self.content_area;
        if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
            return None;
        }
        let (scroll_row, scroll_col) = self.editor.scroll_offsets();
        let row = scroll_row + (y - area.y) as usize;
        let text = self.editor.text();
        if row >= text::line_count(text) {
            return Some(text.len());
        }
        let col = scroll_col + (x - area.x) as usize;
        Some(text::offset_at(text, row, col))
    }
}

fn redraw(moved: bool) -> TextAreaAction {
    if moved {
        TextAreaAction::Redraw
    } else {
        TextAreaAction::None
    }
}

fn changed(did_change: bool) -> TextAreaAction {
    if did_change {
        TextAreaAction::Changed
    } else {
        TextAreaAction::None
    }
}
