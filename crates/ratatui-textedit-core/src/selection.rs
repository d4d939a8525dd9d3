use std::ops::Range;

use crate::text;

/// A non-empty byte range `[start, end)` owned by the primary caret.
///
/// The constructor normalizes an anchor/extent pair given in either order, and an empty range is
/// not representable: it becomes `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Selection {
    start: usize,
    end: usize,
}

impl Selection {
    pub fn new(anchor: usize, extent: usize) -> Option<Self> {
        let (start, end) = if anchor <= extent {
            (anchor, extent)
        } else {
            (extent, anchor)
        };
        (start != end).then_some(Self { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Re-fits the range onto `s`, snapping both ends to char boundaries. Collapses to `None`
    /// when nothing of the range survives.
    pub fn clamped(self, s: &str) -> Option<Self> {
        Self::new(
            text::floor_char_boundary(s, self.start),
            text::floor_char_boundary(s, self.end),
        )
    }
}
