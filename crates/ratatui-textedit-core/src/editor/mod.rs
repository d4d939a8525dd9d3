//! The multi-cursor editing engine behind [`crate::textarea::TextArea`].
//!
//! [`TextEditor`] owns a capacity-bounded [`TextBuffer`], a primary caret plus secondary carets
//! ([`CursorSet`]), an optional [`Selection`] tied to the primary caret, a snapshot [`History`],
//! and a [`ViewportTracker`]. Every operation leaves all offsets on char boundaries inside the
//! buffer.
//!
//! ## Edits
//!
//! Inserts and deletes dispatch in a fixed order: an active selection is replaced first; with no
//! secondary carets the edit applies at the primary caret; otherwise it applies at every caret in
//! ascending order, each caret seeing the buffer as if only its own edit had happened.
//!
//! Every fallible allocation of an edit (history snapshot, buffer growth, mark list) happens
//! before the buffer is touched, so an [`EditError`] always means nothing changed.
//!
//! ## Notifications
//!
//! After a committed edit the engine clamps carets, captures a history snapshot, optionally
//! re-runs validation, then calls the change callback with the full text, in that order.
use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

use crate::action::EditorAction;
use crate::clipboard::ClipboardHandle;
use crate::clipboard::LocalClipboard;
use crate::clipboard::SharedClipboard;
use crate::error::EditError;
use crate::selection::Selection;
use crate::text;
use crate::validation::ValidationResult;
use crate::validation::ValidationRules;
use crate::viewport::ViewportTracker;

pub mod buffer;
pub mod cursors;
pub mod history;

pub use buffer::TextBuffer;
pub use cursors::CursorMark;
pub use cursors::CursorSet;
pub use history::History;

use history::Snapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorOptions {
    /// Hard cap on the buffer length in bytes.
    pub max_bytes: usize,
    /// Snapshots kept for undo, baseline included. 0 disables undo.
    pub history_depth: usize,
    /// Validate after every typed insert or delete.
    pub realtime_validation: bool,
    /// Validate after every committed change, including undo and redo.
    pub validate_on_change: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            max_bytes: 64 * 1024,
            history_depth: 100,
            realtime_validation: false,
            validate_on_change: false,
        }
    }
}

/// Result of [`TextEditor::replace_selection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplaceOutcome {
    NoSelection,
    /// The buffer is full and the replacement was non-empty; nothing changed.
    Rejected,
    Replaced,
}

type TextCallback = Box<dyn FnMut(&str)>;
type ValidationCallback = Box<dyn FnMut(&ValidationResult)>;

pub struct TextEditor {
    buffer: TextBuffer,
    cursors: CursorSet,
    selection: Option<Selection>,
    history: History,
    viewport: ViewportTracker,
    clipboard: ClipboardHandle,
    rules: ValidationRules,
    validation: ValidationResult,
    options: EditorOptions,
    on_change: Option<TextCallback>,
    on_submit: Option<TextCallback>,
    on_validation: Option<ValidationCallback>,
}

impl fmt::Debug for TextEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextEditor")
            .field("buffer", &self.buffer)
            .field("cursors", &self.cursors)
            .field("selection", &self.selection)
            .field("history_depth", &self.history.depth())
            .field("viewport", &self.viewport)
            .field("clipboard", &self.clipboard)
            .field("rules", &self.rules)
            .field("validation", &self.validation)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEditor {
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    pub fn with_options(options: EditorOptions) -> Self {
        let mut viewport = ViewportTracker::default();
        viewport.set_content_rows(1);
        Self {
            buffer: TextBuffer::new(options.max_bytes),
            cursors: CursorSet::default(),
            selection: None,
            history: History::new(options.history_depth, ""),
            viewport,
            clipboard: ClipboardHandle::default(),
            rules: ValidationRules::default(),
            validation: ValidationResult::default(),
            options,
            on_change: None,
            on_submit: None,
            on_validation: None,
        }
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn set_clipboard(&mut self, clipboard: ClipboardHandle) {
        self.clipboard = clipboard;
    }

    pub fn use_private_clipboard(&mut self, clipboard: LocalClipboard) {
        self.clipboard = ClipboardHandle::Private(clipboard);
    }

    pub fn use_shared_clipboard(&mut self, clipboard: SharedClipboard) {
        self.clipboard = ClipboardHandle::Shared(clipboard);
    }

    pub fn clipboard_mut(&mut self) -> &mut ClipboardHandle {
        &mut self.clipboard
    }

    pub fn prefer_system_clipboard(&mut self, prefer: bool) {
        self.clipboard.prefer_system(prefer);
    }

    /// Installs `rules` and re-evaluates the current text against them.
    pub fn set_validation_rules(&mut self, rules: ValidationRules) -> &ValidationResult {
        self.rules = rules;
        self.validate()
    }

    pub fn on_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn on_submit(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_submit = Some(Box::new(callback));
    }

    pub fn on_validation(&mut self, callback: impl FnMut(&ValidationResult) + 'static) {
        self.on_validation = Some(Box::new(callback));
    }

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Byte offset of the primary caret.
    pub fn cursor(&self) -> usize {
        self.cursors.primary()
    }

    /// Secondary carets, sorted ascending.
    pub fn extra_cursors(&self) -> &[usize] {
        self.cursors.extra()
    }

    pub fn cursor_count(&self) -> usize {
        self.cursors.count()
    }

    pub fn collect_cursor_marks(&self) -> Result<Vec<CursorMark>, EditError> {
        self.cursors.collect_marks(self.buffer.as_str())
    }

    /// Replaces every caret with `marks`, clamped to the buffer. The selection is kept.
    pub fn apply_cursor_marks(&mut self, marks: &[CursorMark]) {
        self.cursors.apply_marks(marks);
        self.clamp_state();
        self.ensure_caret_visible();
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn selection_range(&self) -> Option<Range<usize>> {
        self.selection.map(|s| s.range())
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selection
            .and_then(|s| s.clamped(self.buffer.as_str()))
            .map(|s| &self.buffer.as_str()[s.range()])
    }

    /// `(row, display column)` of the primary caret.
    pub fn cursor_position(&self) -> (usize, usize) {
        text::row_col(self.buffer.as_str(), self.cursors.primary())
    }

    /// `(scroll_row, scroll_col)` of the top-left visible cell.
    pub fn scroll_offsets(&self) -> (usize, usize) {
        (self.viewport.scroll_row(), self.viewport.scroll_col())
    }

    pub fn viewport(&self) -> &ViewportTracker {
        &self.viewport
    }

    pub fn validation_state(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Resizes the visible window, in cells, and scrolls the caret back into view.
    pub fn set_viewport_size(&mut self, width: usize, height: usize) {
        self.viewport.set_size(width, height);
        self.sync_viewport();
    }

    /// Replaces the whole text. The caret moves to the end, secondary carets and the selection
    /// are dropped, and the new text is validated and recorded in history.
    pub fn set_text(&mut self, new_text: &str) -> Result<bool, EditError> {
        let normalized = if new_text.contains('\r') {
            Cow::Owned(text::normalize_newlines(new_text))
        } else {
            Cow::Borrowed(new_text)
        };
        let fitted = text::prefix_within(&normalized, self.buffer.capacity());
        if fitted.len() < normalized.len() {
            tracing::debug!(
                requested = normalized.len(),
                kept = fitted.len(),
                "set_text truncated at capacity"
            );
        }

        let slot = self.history.stage(fitted.len())?;
        self.buffer
            .reserve(fitted.len().saturating_sub(self.buffer.len()))?;

        self.buffer.overwrite(fitted);
        self.cursors.clear_extra();
        self.cursors.set_primary(fitted.len());
        self.selection = None;
        Ok(self.finalize_change(Some(slot), true))
    }

    /// Moves the primary caret to `offset` (clamped). Secondary carets and the selection stay.
    pub fn set_cursor(&mut self, offset: usize) {
        let offset = self.buffer.clamp(offset);
        self.cursors.set_primary(offset);
        self.viewport.reset_preferred_column();
        self.ensure_caret_visible();
    }

    /// Replaces every caret: the first offset becomes primary, the rest secondary. Clears the
    /// selection. An empty slice keeps the primary caret and drops the rest.
    pub fn set_cursors(&mut self, offsets: &[usize]) -> Result<(), EditError> {
        let mut clamped = Vec::new();
        clamped
            .try_reserve_exact(offsets.len())
            .map_err(EditError::alloc("cursor list"))?;
        clamped.extend(offsets.iter().map(|o| self.buffer.clamp(*o)));

        self.cursors.replace(&clamped)?;
        self.selection = None;
        self.viewport.reset_preferred_column();
        self.ensure_caret_visible();
        Ok(())
    }

    /// Adds a secondary caret. Returns `false` when a caret already sits there.
    pub fn add_cursor(&mut self, offset: usize) -> Result<bool, EditError> {
        let offset = self.buffer.clamp(offset);
        self.cursors.add(offset)
    }

    pub fn clear_extra_cursors(&mut self) -> bool {
        let had = self.cursors.has_extra();
        self.cursors.clear_extra();
        had
    }

    /// Selects between `anchor` and `extent` (either order) and moves the primary caret to
    /// `extent`. Returns whether a non-empty selection is now active.
    pub fn set_selection(&mut self, anchor: usize, extent: usize) -> bool {
        let anchor = self.buffer.clamp(anchor);
        let extent = self.buffer.clamp(extent);
        self.selection = Selection::new(anchor, extent);
        self.cursors.set_primary(extent);
        self.viewport.reset_preferred_column();
        self.ensure_caret_visible();
        self.selection.is_some()
    }

    pub fn select_all(&mut self) -> bool {
        self.set_selection(0, self.buffer.len())
    }

    pub fn clear_selection(&mut self) -> bool {
        self.selection.take().is_some()
    }

    /// Inserts `s` at every caret, or over the selection if there is one.
    ///
    /// Text that does not fit the remaining capacity is truncated on a char boundary. Returns
    /// `Ok(false)` when nothing could be inserted.
    pub fn insert_text(&mut self, s: &str) -> Result<bool, EditError> {
        self.clamp_state();
        if s.is_empty() {
            return Ok(false);
        }
        if self.selection.is_some() {
            let force = self.options.realtime_validation;
            let outcome = self.replace_selection_with(s, force)?;
            return Ok(outcome == ReplaceOutcome::Replaced);
        }
        if self.cursors.has_extra() {
            self.insert_multi(s)
        } else {
            self.insert_single(s)
        }
    }

    pub fn insert_char(&mut self, ch: char) -> Result<bool, EditError> {
        let mut tmp = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut tmp))
    }

    /// Deletes the selection, or the character before every caret.
    pub fn delete_backward(&mut self) -> Result<bool, EditError> {
        self.clamp_state();
        if self.selection.is_some() {
            let force = self.options.realtime_validation;
            let outcome = self.replace_selection_with("", force)?;
            return Ok(outcome == ReplaceOutcome::Replaced);
        }
        if self.cursors.has_extra() {
            return self.delete_multi(Direction::Backward);
        }

        let at = self.cursors.primary();
        if text::prev_char_boundary(self.buffer.as_str(), at).is_none() {
            return Ok(false);
        }
        let slot = self.history.stage(self.buffer.len())?;
        let Some(start) = self.buffer.remove_char_before(at) else {
            return Ok(false);
        };
        self.cursors.set_primary(start);
        Ok(self.finalize_change(Some(slot), self.options.realtime_validation))
    }

    /// Deletes the selection, or the character after every caret.
    pub fn delete_forward(&mut self) -> Result<bool, EditError> {
        self.clamp_state();
        if self.selection.is_some() {
            let force = self.options.realtime_validation;
            let outcome = self.replace_selection_with("", force)?;
            return Ok(outcome == ReplaceOutcome::Replaced);
        }
        if self.cursors.has_extra() {
            return self.delete_multi(Direction::Forward);
        }

        let at = self.cursors.primary();
        if text::next_char_boundary(self.buffer.as_str(), at).is_none() {
            return Ok(false);
        }
        let slot = self.history.stage(self.buffer.len())?;
        if self.buffer.remove_char_at(at).is_none() {
            return Ok(false);
        }
        Ok(self.finalize_change(Some(slot), self.options.realtime_validation))
    }

    /// Replaces the selected range with `replacement` and collapses to a single caret after it.
    pub fn replace_selection(&mut self, replacement: &str) -> Result<ReplaceOutcome, EditError> {
        self.clamp_state();
        self.replace_selection_with(replacement, self.options.realtime_validation)
    }

    /// Copies the selection, or the whole buffer when nothing is selected.
    pub fn copy(&mut self) -> Result<bool, EditError> {
        self.clamp_state();
        let payload = match self.selection {
            Some(sel) => &self.buffer.as_str()[sel.range()],
            None => self.buffer.as_str(),
        };
        if payload.is_empty() {
            return Ok(false);
        }
        self.clipboard.copy(payload)
    }

    /// Copies then deletes the selection, or the whole buffer when nothing is selected.
    pub fn cut(&mut self) -> Result<bool, EditError> {
        self.clamp_state();
        let force = self.options.realtime_validation;

        if let Some(sel) = self.selection {
            if !self.clipboard.copy(&self.buffer.as_str()[sel.range()])? {
                return Ok(false);
            }
            let outcome = self.replace_selection_with("", force)?;
            return Ok(outcome == ReplaceOutcome::Replaced);
        }

        if self.buffer.is_empty() {
            return Ok(false);
        }
        let slot = self.history.stage(0)?;
        if !self.clipboard.copy(self.buffer.as_str())? {
            return Ok(false);
        }
        self.buffer.clear();
        self.cursors.clear_extra();
        self.cursors.set_primary(0);
        Ok(self.finalize_change(Some(slot), force))
    }

    /// Inserts the clipboard contents at every caret. `Ok(false)` on an empty clipboard.
    pub fn paste(&mut self) -> Result<bool, EditError> {
        let Some(payload) = self.clipboard.paste() else {
            return Ok(false);
        };
        let payload = text::normalize_newlines(&payload);
        self.insert_text(&payload)
    }

    pub fn undo(&mut self) -> Result<bool, EditError> {
        let Some(target) = self.history.peek_undo() else {
            return Ok(false);
        };
        self.buffer
            .reserve(target.len().saturating_sub(self.buffer.len()))?;
        let Some(snapshot) = self.history.undo() else {
            return Ok(false);
        };
        self.buffer.overwrite(snapshot);
        Ok(self.finalize_change(None, false))
    }

    pub fn redo(&mut self) -> Result<bool, EditError> {
        let Some(target) = self.history.peek_redo() else {
            return Ok(false);
        };
        self.buffer
            .reserve(target.len().saturating_sub(self.buffer.len()))?;
        let Some(snapshot) = self.history.redo() else {
            return Ok(false);
        };
        self.buffer.overwrite(snapshot);
        Ok(self.finalize_change(None, false))
    }

    /// Moves the primary caret one character left. Secondary carets and the selection stay.
    pub fn move_left(&mut self) -> bool {
        let prev = text::prev_char_boundary(self.buffer.as_str(), self.cursors.primary());
        self.move_horizontally(prev)
    }

    pub fn move_right(&mut self) -> bool {
        let next = text::next_char_boundary(self.buffer.as_str(), self.cursors.primary());
        self.move_horizontally(next)
    }

    pub fn move_line_start(&mut self) -> bool {
        let start = text::line_start(self.buffer.as_str(), self.cursors.primary());
        self.move_horizontally(Some(start))
    }

    pub fn move_line_end(&mut self) -> bool {
        let end = text::line_end(self.buffer.as_str(), self.cursors.primary());
        self.move_horizontally(Some(end))
    }

    pub fn move_up(&mut self) -> bool {
        let (row, _) = self.cursor_position();
        self.move_to_row(row.checked_sub(1))
    }

    pub fn move_down(&mut self) -> bool {
        let (row, _) = self.cursor_position();
        let last = text::line_count(self.buffer.as_str()) - 1;
        self.move_to_row((row < last).then_some(row + 1))
    }

    pub fn page_up(&mut self) -> bool {
        let (row, _) = self.cursor_position();
        let target = row.saturating_sub(self.viewport.page_rows());
        self.move_to_row((target != row).then_some(target))
    }

    pub fn page_down(&mut self) -> bool {
        let (row, _) = self.cursor_position();
        let last = text::line_count(self.buffer.as_str()) - 1;
        let target = row.saturating_add(self.viewport.page_rows()).min(last);
        self.move_to_row((target != row).then_some(target))
    }

    /// Runs `action`. Navigation always counts as handled; edits report whether they did
    /// anything, so `false` lets the caller try another interpretation of the key.
    pub fn apply_editor_action(&mut self, action: EditorAction) -> Result<bool, EditError> {
        let handled = match action {
            EditorAction::CursorLeft => {
                self.move_left();
                true
            }
            EditorAction::CursorRight => {
                self.move_right();
                true
            }
            EditorAction::CursorUp => {
                self.move_up();
                true
            }
            EditorAction::CursorDown => {
                self.move_down();
                true
            }
            EditorAction::LineStart => {
                self.move_line_start();
                true
            }
            EditorAction::LineEnd => {
                self.move_line_end();
                true
            }
            EditorAction::PageUp => {
                self.page_up();
                true
            }
            EditorAction::PageDown => {
                self.page_down();
                true
            }
            EditorAction::Undo => self.undo()?,
            EditorAction::Redo => self.redo()?,
            EditorAction::Copy => self.copy()?,
            EditorAction::Paste => self.paste()?,
            EditorAction::Cut => self.cut()?,
        };
        tracing::trace!(?action, handled, "editor action");
        Ok(handled)
    }

    /// Fires the submit callback with the current text and returns a copy of it.
    pub fn submit(&mut self) -> String {
        let submitted = self.buffer.as_str().to_owned();
        if let Some(callback) = self.on_submit.as_mut() {
            callback(&submitted);
        }
        submitted
    }

    /// Re-evaluates the validation rules, caches the result and notifies the validation
    /// callback.
    pub fn validate(&mut self) -> &ValidationResult {
        self.validation = self.rules.evaluate(self.buffer.as_str());
        tracing::trace!(
            valid = self.validation.is_valid(),
            errors = self.validation.errors().len(),
            "validation recomputed"
        );
        if let Some(callback) = self.on_validation.as_mut() {
            callback(&self.validation);
        }
        &self.validation
    }

    fn insert_single(&mut self, s: &str) -> Result<bool, EditError> {
        let part = text::prefix_within(s, self.buffer.remaining());
        if part.is_empty() {
            tracing::debug!(requested = s.len(), "insert ignored: buffer full");
            return Ok(false);
        }

        let slot = self.history.stage(self.buffer.len() + part.len())?;
        self.buffer.reserve(part.len())?;

        let at = self.cursors.primary();
        let inserted = self.buffer.insert_bounded(at, part);
        if inserted < s.len() {
            tracing::debug!(requested = s.len(), inserted, "insert truncated at capacity");
        }
        self.cursors.set_primary(at + inserted);
        Ok(self.finalize_change(Some(slot), self.options.realtime_validation))
    }

    fn insert_multi(&mut self, s: &str) -> Result<bool, EditError> {
        let remaining = self.buffer.remaining();
        if text::prefix_within(s, remaining).is_empty() {
            tracing::debug!(requested = s.len(), "insert ignored: buffer full");
            return Ok(false);
        }

        let mut marks = self.cursors.collect_marks(self.buffer.as_str())?;
        let growth = s.len().saturating_mul(marks.len()).min(remaining);
        let slot = self.history.stage(self.buffer.len() + growth)?;
        self.buffer.reserve(growth)?;

        let mut shift = 0usize;
        let mut inserted_any = false;
        for mark in &mut marks {
            let target = mark.position + shift;
            let inserted = self.buffer.insert_bounded(target, s);
            mark.position = target + inserted;
            if inserted > 0 {
                shift += inserted;
                inserted_any = true;
            }
        }
        if !inserted_any {
            return Ok(false);
        }
        if shift < s.len().saturating_mul(marks.len()) {
            tracing::debug!(
                carets = marks.len(),
                inserted = shift,
                "multi-caret insert truncated at capacity"
            );
        }

        self.cursors.apply_marks(&marks);
        Ok(self.finalize_change(Some(slot), self.options.realtime_validation))
    }

    fn delete_multi(&mut self, direction: Direction) -> Result<bool, EditError> {
        if self.buffer.is_empty() {
            return Ok(false);
        }
        let mut marks = self.cursors.collect_marks(self.buffer.as_str())?;
        let slot = self.history.stage(self.buffer.len())?;

        let mut removed = 0usize;
        let mut deleted_any = false;
        for mark in &mut marks {
            let adjusted = self.buffer.clamp(mark.position.saturating_sub(removed));
            mark.position = adjusted;
            if self.buffer.is_empty() {
                continue;
            }
            match direction {
                Direction::Backward => {
                    if adjusted == 0 {
                        continue;
                    }
                    if let Some(start) = self.buffer.remove_char_before(adjusted) {
                        removed += adjusted - start;
                        mark.position = start;
                        deleted_any = true;
                    }
                }
                Direction::Forward => {
                    if let Some(width) = self.buffer.remove_char_at(adjusted) {
                        removed += width;
                        deleted_any = true;
                    }
                }
            }
        }
        if !deleted_any {
            return Ok(false);
        }

        self.cursors.apply_marks(&marks);
        Ok(self.finalize_change(Some(slot), self.options.realtime_validation))
    }

    fn replace_selection_with(
        &mut self,
        replacement: &str,
        force_validate: bool,
    ) -> Result<ReplaceOutcome, EditError> {
        let Some(sel) = self
            .selection
            .and_then(|s| s.clamped(self.buffer.as_str()))
        else {
            self.selection = None;
            return Ok(ReplaceOutcome::NoSelection);
        };

        let kept = self.buffer.len() - sel.len();
        let available = self.buffer.capacity().saturating_sub(kept);
        if available == 0 && !replacement.is_empty() {
            tracing::debug!(
                requested = replacement.len(),
                "selection replace rejected: buffer full"
            );
            return Ok(ReplaceOutcome::Rejected);
        }

        let part = text::prefix_within(replacement, available);
        let slot = self.history.stage(kept + part.len())?;
        self.buffer.reserve(part.len().saturating_sub(sel.len()))?;

        let inserted = self.buffer.splice_bounded(sel.range(), part);
        self.cursors.clear_extra();
        self.cursors.set_primary(sel.start() + inserted);
        self.selection = None;
        self.finalize_change(Some(slot), force_validate);
        Ok(ReplaceOutcome::Replaced)
    }

    /// Clamp, snapshot, validate, notify. Always reports that a change was committed.
    fn finalize_change(&mut self, snapshot: Option<Snapshot>, force_validate: bool) -> bool {
        self.clamp_state();
        self.viewport.reset_preferred_column();
        self.sync_viewport();
        if let Some(slot) = snapshot {
            self.history.commit(slot, self.buffer.as_str());
        }
        if force_validate || self.options.validate_on_change {
            self.validate();
        }
        if let Some(callback) = self.on_change.as_mut() {
            callback(self.buffer.as_str());
        }
        true
    }

    fn clamp_state(&mut self) {
        let text = self.buffer.as_str();
        self.cursors.clamp_to(text);
        self.selection = self.selection.and_then(|s| s.clamped(text));
    }

    fn sync_viewport(&mut self) {
        self.viewport
            .set_content_rows(text::line_count(self.buffer.as_str()));
        self.ensure_caret_visible();
    }

    fn ensure_caret_visible(&mut self) {
        let (row, col) = self.cursor_position();
        self.viewport.ensure_visible(row, col);
    }

    fn move_horizontally(&mut self, target: Option<usize>) -> bool {
        let moved = target.is_some_and(|t| t != self.cursors.primary());
        if let Some(target) = target {
            self.cursors.set_primary(target);
        }
        self.viewport.reset_preferred_column();
        self.ensure_caret_visible();
        moved
    }

    /// Moves to `row`, keeping the remembered column across lines of different length.
    fn move_to_row(&mut self, row: Option<usize>) -> bool {
        let Some(row) = row else {
            self.ensure_caret_visible();
            return false;
        };
        let (_, col) = self.cursor_position();
        let target_col = self.viewport.preferred_col().unwrap_or(col);
        let offset = text::offset_at(self.buffer.as_str(), row, target_col);
        self.cursors.set_primary(offset);
        self.viewport.remember_column(target_col);
        self.ensure_caret_visible();
        true
    }
}

#[derive(Clone, Copy, Debug)]
enum Direction {
    Backward,
    Forward,
}
