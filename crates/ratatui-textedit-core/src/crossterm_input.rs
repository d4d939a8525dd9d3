use crossterm::event as ct;

use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;
use crate::input::MouseButton;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;

/// Converts a crossterm event into an [`InputEvent`].
///
/// Key releases are dropped; repeats are kept so holding a key keeps typing. Events the text
/// area has no use for (focus, resize, unsupported keys) map to `None`.
pub fn input_event_from_crossterm(ev: ct::Event) -> Option<InputEvent> {
    match ev {
        ct::Event::Key(key) if key.kind == ct::KeyEventKind::Release => None,
        ct::Event::Key(key) => KeyEvent::try_from(key).ok().map(InputEvent::Key),
        ct::Event::Paste(text) => Some(InputEvent::Paste(text)),
        ct::Event::Mouse(m) => MouseEvent::try_from(m).ok().map(InputEvent::Mouse),
        _ => None,
    }
}

impl From<ct::KeyModifiers> for KeyModifiers {
    fn from(m: ct::KeyModifiers) -> Self {
        Self {
            shift: m.contains(ct::KeyModifiers::SHIFT),
            ctrl: m.contains(ct::KeyModifiers::CONTROL),
            alt: m.contains(ct::KeyModifiers::ALT),
        }
    }
}

impl TryFrom<ct::KeyEvent> for KeyEvent {
    type Error = ct::KeyCode;

    fn try_from(key: ct::KeyEvent) -> Result<Self, Self::Error> {
        let code = match key.code {
            ct::KeyCode::Char(c) => KeyCode::Char(c),
            ct::KeyCode::Enter => KeyCode::Enter,
            ct::KeyCode::Backspace => KeyCode::Backspace,
            ct::KeyCode::Delete => KeyCode::Delete,
            ct::KeyCode::Tab => KeyCode::Tab,
            ct::KeyCode::Esc => KeyCode::Esc,
            ct::KeyCode::Left => KeyCode::Left,
            ct::KeyCode::Right => KeyCode::Right,
            ct::KeyCode::Up => KeyCode::Up,
            ct::KeyCode::Down => KeyCode::Down,
            ct::KeyCode::Home => KeyCode::Home,
            ct::KeyCode::End => KeyCode::End,
            ct::KeyCode::PageUp => KeyCode::PageUp,
            ct::KeyCode::PageDown => KeyCode::PageDown,
            other => return Err(other),
        };
        Ok(KeyEvent::new(code).with_modifiers(key.modifiers.into()))
    }
}

impl TryFrom<ct::MouseEvent> for MouseEvent {
    type Error = ct::MouseEventKind;

    fn try_from(m: ct::MouseEvent) -> Result<Self, Self::Error> {
        let kind = match m.kind {
            ct::MouseEventKind::Down(b) => MouseEventKind::Down(b.into()),
            ct::MouseEventKind::Drag(b) => MouseEventKind::Drag(b.into()),
            ct::MouseEventKind::Up(b) => MouseEventKind::Up(b.into()),
            ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
            ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
            other => return Err(other),
        };
        Ok(MouseEvent {
            x: m.column,
            y: m.row,
            kind,
            modifiers: m.modifiers.into(),
        })
    }
}

impl From<ct::MouseButton> for MouseButton {
    fn from(b: ct::MouseButton) -> Self {
        match b {
            ct::MouseButton::Left => MouseButton::Left,
            ct::MouseButton::Right => MouseButton::Right,
            ct::MouseButton::Middle => MouseButton::Middle,
        }
    }
}
