//! `ratatui-textedit-core` is a multi-cursor text editing engine plus the text-area widget built
//! on it.
//!
//! The crate is split the same way an app usually consumes it:
//! - [`editor::TextEditor`]: the engine. Owns the text, carets, selection, undo history and
//!   viewport; every edit is a method call returning `Result<bool, EditError>`.
//! - [`textarea::TextArea`]: a widget that maps [`input::InputEvent`]s onto the engine and draws it
//!   into a ratatui [`Buffer`](ratatui::buffer::Buffer).
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - Single-threaded: no locks, no async runtime. Callbacks and shared clipboards are not `Send`,
//!   so an editor stays on the thread that drives the UI.
//! - No partial edits: a returned [`error::EditError`] means buffer, carets and selection are
//!   exactly as before the call. Running out of capacity is not an error; inserts are truncated.
//!
//! ## Getting started
//!
//! ```
//! use ratatui_textedit_core::editor::TextEditor;
//!
//! let mut ed = TextEditor::new();
//! ed.set_text("abc").unwrap();
//! ed.set_cursors(&[3, 1]).unwrap();
//! ed.insert_text("q").unwrap();
//! assert_eq!(ed.text(), "aqbcq");
//! assert_eq!(ed.cursor(), 5);
//! ```
//!
//! ## Clipboard
//!
//! Each editor copies into a private [`clipboard::LocalClipboard`] unless given a
//! [`clipboard::SharedClipboard`]. Plug an OS clipboard in through
//! [`clipboard::ClipboardBackend`]; the `ratatui-textedit` facade ships one built on `arboard`.
pub mod action;
pub mod clipboard;
pub mod editor;
pub mod error;
pub mod input;
pub mod selection;
pub mod text;
pub mod validation;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod render;
pub mod textarea;
pub mod viewport;
