use std::collections::TryReserveError;

/// Failures surfaced by mutating editor operations.
///
/// Capacity exhaustion and out-of-range offsets are not errors: the former truncates (or reports
/// `Ok(false)`), the latter is clamped. When one of these is returned the buffer, cursors and
/// selection are exactly as they were before the call.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("failed to allocate memory for {what}")]
    Alloc {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },
}

impl EditError {
    pub(crate) fn alloc(what: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |source| {
            tracing::warn!(what, error = %source, "edit aborted: allocation failed");
            Self::Alloc { what, source }
        }
    }
}

/// Failures reported by a [`crate::clipboard::ClipboardBackend`].
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("system clipboard is unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard access failed: {0}")]
    Access(String),
}
