//! Clipboard storage for copy, cut and paste.
//!
//! Every editor owns a [`ClipboardHandle`]: either a private [`LocalClipboard`] or a
//! [`SharedClipboard`] used by several widgets. A `LocalClipboard` always keeps the last copied
//! text in memory and can additionally forward to an OS clipboard through a
//! [`ClipboardBackend`] when `prefer_system` is on. Backend failures are logged and the
//! in-memory copy is used instead, so the editor never sees them.
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::ClipboardError;
use crate::error::EditError;

/// Access to an OS-level clipboard. Implemented by the facade crate's `arboard` adapter, or by
/// test fixtures.
pub trait ClipboardBackend {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// `Ok(None)` when the clipboard holds no text.
    fn get_text(&mut self) -> Result<Option<String>, ClipboardError>;
}

#[derive(Default)]
pub struct LocalClipboard {
    contents: Option<String>,
    prefer_system: bool,
    backend: Option<Box<dyn ClipboardBackend>>,
}

impl fmt::Debug for LocalClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalClipboard")
            .field("contents", &self.contents)
            .field("prefer_system", &self.prefer_system)
            .field("has_backend", &self.backend.is_some())
            .finish()
    }
}

impl LocalClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that prefers `backend` and falls back to memory.
    pub fn with_backend(backend: impl ClipboardBackend + 'static) -> Self {
        Self {
            contents: None,
            prefer_system: true,
            backend: Some(Box::new(backend)),
        }
    }

    pub fn set_backend(&mut self, backend: Option<Box<dyn ClipboardBackend>>) {
        self.backend = backend;
    }

    pub fn prefer_system(&mut self, prefer: bool) {
        self.prefer_system = prefer;
    }

    pub fn prefers_system(&self) -> bool {
        self.prefer_system
    }

    /// Last text copied through this clipboard, ignoring any OS clipboard.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn copy(&mut self, text: &str) -> Result<(), EditError> {
        let mut owned = String::new();
        owned
            .try_reserve_exact(text.len())
            .map_err(EditError::alloc("clipboard contents"))?;
        owned.push_str(text);
        self.contents = Some(owned);

        if let Some(backend) = self.system_backend() {
            if let Err(error) = backend.set_text(text) {
                tracing::warn!(%error, "system clipboard copy failed; kept in-memory copy");
            }
        }
        Ok(())
    }

    pub fn paste(&mut self) -> Option<String> {
        if let Some(backend) = self.system_backend() {
            match backend.get_text() {
                Ok(Some(text)) if !text.is_empty() => return Some(text),
                Ok(_) => {}
                Err(error) => {
                    tracing::warn!(%error, "system clipboard paste failed; using in-memory copy");
                }
            }
        }
        self.contents.clone().filter(|s| !s.is_empty())
    }

    fn system_backend(&mut self) -> Option<&mut (dyn ClipboardBackend + 'static)> {
        if !self.prefer_system {
            return None;
        }
        self.backend.as_deref_mut()
    }
}

pub type SharedClipboard = Rc<RefCell<LocalClipboard>>;

pub fn shared(clipboard: LocalClipboard) -> SharedClipboard {
    Rc::new(RefCell::new(clipboard))
}

/// The clipboard an editor talks to.
#[derive(Debug)]
pub enum ClipboardHandle {
    Private(LocalClipboard),
    Shared(SharedClipboard),
}

impl Default for ClipboardHandle {
    fn default() -> Self {
        Self::Private(LocalClipboard::new())
    }
}

impl ClipboardHandle {
    /// Stores `text`. `Ok(false)` means a shared clipboard is borrowed elsewhere and nothing was
    /// copied.
    pub fn copy(&mut self, text: &str) -> Result<bool, EditError> {
        match self {
            Self::Private(c) => c.copy(text).map(|()| true),
            Self::Shared(shared) => match shared.try_borrow_mut() {
                Ok(mut c) => c.copy(text).map(|()| true),
                Err(_) => {
                    tracing::warn!("shared clipboard is busy; copy skipped");
                    Ok(false)
                }
            },
        }
    }

    pub fn paste(&mut self) -> Option<String> {
        match self {
            Self::Private(c) => c.paste(),
            Self::Shared(shared) => match shared.try_borrow_mut() {
                Ok(mut c) => c.paste(),
                Err(_) => {
                    tracing::warn!("shared clipboard is busy; paste skipped");
                    None
                }
            },
        }
    }

    pub fn prefer_system(&mut self, prefer: bool) {
        match self {
            Self::Private(c) => c.prefer_system(prefer),
            Self::Shared(shared) => {
                if let Ok(mut c) = shared.try_borrow_mut() {
                    c.prefer_system(prefer);
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::ClipboardBackend;
    use crate::error::ClipboardError;

    /// In-memory backend standing in for the OS clipboard.
    #[derive(Debug, Default)]
    pub struct TestBackend {
        pub content: Option<String>,
        pub fail: bool,
    }

    impl ClipboardBackend for TestBackend {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Access("test backend failure".to_owned()));
            }
            self.content = Some(text.to_owned());
            Ok(())
        }

        fn get_text(&mut self) -> Result<Option<String>, ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Access("test backend failure".to_owned()));
            }
            Ok(self.content.clone())
        }
    }
}
