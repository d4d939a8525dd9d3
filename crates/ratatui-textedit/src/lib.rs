//! `ratatui-textedit` is the batteries-included entry point for the multi-cursor text area.
//!
//! It re-exports [`ratatui_textedit_core`] module by module and adds integrations that pull in
//! heavier dependencies:
//! - `crossterm`: [`crossterm_input::input_event_from_crossterm`] to turn terminal events into
//!   [`input::InputEvent`]s.
//! - `system-clipboard`: [`system_clipboard::ArboardBackend`], an OS clipboard for
//!   [`clipboard::LocalClipboard`] built on `arboard`.
//!
//! ```
//! use ratatui_textedit::textarea::TextArea;
//! use ratatui_textedit::textarea::TextAreaAction;
//! use ratatui_textedit::input::InputEvent;
//! use ratatui_textedit::input::KeyCode;
//! use ratatui_textedit::input::KeyEvent;
//!
//! let mut ta = TextArea::new();
//! ta.input(InputEvent::Paste("hi".into())).unwrap();
//! let act = ta.input(KeyEvent::new(KeyCode::Enter).into()).unwrap();
//! assert_eq!(act, TextAreaAction::Submitted("hi".into()));
//! ```
pub use ratatui_textedit_core::action;
pub use ratatui_textedit_core::clipboard;
pub use ratatui_textedit_core::editor;
pub use ratatui_textedit_core::error;
pub use ratatui_textedit_core::input;
pub use ratatui_textedit_core::render;
pub use ratatui_textedit_core::selection;
pub use ratatui_textedit_core::text;
pub use ratatui_textedit_core::textarea;
pub use ratatui_textedit_core::validation;
pub use ratatui_textedit_core::viewport;

#[cfg(feature = "crossterm")]
pub use ratatui_textedit_core::crossterm_input;

#[cfg(feature = "system-clipboard")]
pub mod system_clipboard;
