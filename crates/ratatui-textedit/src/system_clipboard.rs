use std::fmt;

use ratatui_textedit_core::clipboard::ClipboardBackend;
use ratatui_textedit_core::clipboard::LocalClipboard;
use ratatui_textedit_core::error::ClipboardError;

/// OS clipboard access through `arboard`.
pub struct ArboardBackend {
    clipboard: arboard::Clipboard,
}

impl fmt::Debug for ArboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArboardBackend").finish_non_exhaustive()
    }
}

impl ArboardBackend {
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardBackend for ArboardBackend {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Access(e.to_string()))
    }

    fn get_text(&mut self) -> Result<Option<String>, ClipboardError> {
        match self.clipboard.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(ClipboardError::Access(e.to_string())),
        }
    }
}

/// A clipboard that prefers the OS clipboard, or a memory-only one if none can be opened.
pub fn system_clipboard() -> LocalClipboard {
    match ArboardBackend::new() {
        Ok(backend) => LocalClipboard::with_backend(backend),
        Err(error) => {
            tracing::warn!(%error, "system clipboard unavailable; using in-memory clipboard");
            LocalClipboard::new()
        }
    }
}
