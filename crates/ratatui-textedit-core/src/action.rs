use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;

/// The closed set of editor commands a key can be bound to.
///
/// Printable characters and the structural keys (`Enter`, `Backspace`, `Delete`) are not part of
/// this vocabulary; the text area handles them directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditorAction {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
    Undo,
    Redo,
    Copy,
    Paste,
    Cut,
}

impl EditorAction {
    pub const ALL: [EditorAction; 13] = [
        EditorAction::CursorLeft,
        EditorAction::CursorRight,
        EditorAction::CursorUp,
        EditorAction::CursorDown,
        EditorAction::LineStart,
        EditorAction::LineEnd,
        EditorAction::PageUp,
        EditorAction::PageDown,
        EditorAction::Undo,
        EditorAction::Redo,
        EditorAction::Copy,
        EditorAction::Paste,
        EditorAction::Cut,
    ];

    /// Navigation moves the primary caret only and never touches the buffer.
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            EditorAction::CursorLeft
                | EditorAction::CursorRight
                | EditorAction::CursorUp
                | EditorAction::CursorDown
                | EditorAction::LineStart
                | EditorAction::LineEnd
                | EditorAction::PageUp
                | EditorAction::PageDown
        )
    }

    /// Whether a successful run of this action changes the buffer contents.
    pub fn mutates_text(self) -> bool {
        matches!(
            self,
            EditorAction::Undo | EditorAction::Redo | EditorAction::Paste | EditorAction::Cut
        )
    }
}

#[derive(Clone, Debug)]
pub struct EditorBindings {
    pub cursor_left: Vec<KeyEvent>,
    pub cursor_right: Vec<KeyEvent>,
    pub cursor_up: Vec<KeyEvent>,
    pub cursor_down: Vec<KeyEvent>,
    pub line_start: Vec<KeyEvent>,
    pub line_end: Vec<KeyEvent>,
    pub page_up: Vec<KeyEvent>,
    pub page_down: Vec<KeyEvent>,
    pub undo: Vec<KeyEvent>,
    pub redo: Vec<KeyEvent>,
    pub copy: Vec<KeyEvent>,
    pub paste: Vec<KeyEvent>,
    pub cut: Vec<KeyEvent>,
}

impl Default for EditorBindings {
    fn default() -> Self {
        Self {
            cursor_left: vec![KeyEvent::new(KeyCode::Left)],
            cursor_right: vec![KeyEvent::new(KeyCode::Right)],
            cursor_up: vec![KeyEvent::new(KeyCode::Up)],
            cursor_down: vec![KeyEvent::new(KeyCode::Down)],
            line_start: vec![KeyEvent::new(KeyCode::Home), key_ctrl('a')],
            line_end: vec![KeyEvent::new(KeyCode::End), key_ctrl('e')],
            page_up: vec![KeyEvent::new(KeyCode::PageUp)],
            page_down: vec![KeyEvent::new(KeyCode::PageDown)],
            undo: vec![key_ctrl('z')],
            redo: vec![key_ctrl('y'), key_ctrl_shift('z'), key_ctrl_shift('Z')],
            copy: vec![key_ctrl('c')],
            paste: vec![key_ctrl('v')],
            cut: vec![key_ctrl('x')],
        }
    }
}

impl EditorBindings {
    pub fn keys_for(&self, action: EditorAction) -> &[KeyEvent] {
        match action {
            EditorAction::CursorLeft => &self.cursor_left,
            EditorAction::CursorRight => &self.cursor_right,
            EditorAction::CursorUp => &self.cursor_up,
            EditorAction::CursorDown => &self.cursor_down,
            EditorAction::LineStart => &self.line_start,
            EditorAction::LineEnd => &self.line_end,
            EditorAction::PageUp => &self.page_up,
            EditorAction::PageDown => &self.page_down,
            EditorAction::Undo => &self.undo,
            EditorAction::Redo => &self.redo,
            EditorAction::Copy => &self.copy,
            EditorAction::Paste => &self.paste,
            EditorAction::Cut => &self.cut,
        }
    }

    /// First action (in [`EditorAction::ALL`] order) bound to `key`.
    pub fn action_for(&self, key: &KeyEvent) -> Option<EditorAction> {
        EditorAction::ALL.into_iter().find(|action| {
            self.keys_for(*action)
                .iter()
                .any(|pattern| key_event_matches(pattern, key))
        })
    }
}

/// Exact match on key code and all three modifiers.
pub fn key_event_matches(pattern: &KeyEvent, event: &KeyEvent) -> bool {
    pattern.code == event.code && pattern.modifiers == event.modifiers
}

pub fn key_ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c)).with_modifiers(KeyModifiers::CTRL)
}

pub fn key_ctrl_shift(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c)).with_modifiers(KeyModifiers::CTRL_SHIFT)
}
