use std::ops::Range;

use crate::error::EditError;
use crate::text;

/// Owned UTF-8 text whose byte length never exceeds a capacity fixed at construction.
///
/// Mutators assume the caller already reserved room with [`TextBuffer::reserve`], so that the
/// only fallible step of an edit happens before anything is changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    capacity: usize,
}

impl TextBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            text: String::new(),
            capacity,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.text.len())
    }

    /// Clamps `offset` into `[0, len]` on a char boundary.
    pub fn clamp(&self, offset: usize) -> usize {
        text::floor_char_boundary(&self.text, offset)
    }

    pub(crate) fn reserve(&mut self, additional: usize) -> Result<(), EditError> {
        self.text
            .try_reserve(additional)
            .map_err(EditError::alloc("text buffer growth"))
    }

    /// Inserts the longest prefix of `s` that fits the remaining capacity, returning its length.
    pub(crate) fn insert_bounded(&mut self, at: usize, s: &str) -> usize {
        let part = text::prefix_within(s, self.remaining());
        if !part.is_empty() {
            self.text.insert_str(at, part);
        }
        part.len()
    }

    /// Removes the character ending at `at`, returning the offset it started at.
    pub(crate) fn remove_char_before(&mut self, at: usize) -> Option<usize> {
        let start = text::prev_char_boundary(&self.text, at)?;
        self.text.replace_range(start..at, "");
        Some(start)
    }

    /// Removes the character starting at `at`, returning its encoded length.
    pub(crate) fn remove_char_at(&mut self, at: usize) -> Option<usize> {
        let end = text::next_char_boundary(&self.text, at)?;
        self.text.replace_range(at..end, "");
        Some(end - at)
    }

    /// Replaces `range` with as much of `replacement` as fits, returning the inserted length.
    pub(crate) fn splice_bounded(&mut self, range: Range<usize>, replacement: &str) -> usize {
        let room = self.capacity.saturating_sub(self.text.len() - range.len());
        let part = text::prefix_within(replacement, room);
        self.text.replace_range(range, part);
        part.len()
    }

    /// Overwrites the whole contents. `s` must already fit the capacity.
    pub(crate) fn overwrite(&mut self, s: &str) {
        debug_assert!(s.len() <= self.capacity);
        self.text.clear();
        self.text.push_str(s);
    }

    pub(crate) fn clear(&mut self) {
        self.text.clear();
    }
}
