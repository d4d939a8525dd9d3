use crate::error::EditError;
use crate::text;

/// One caret position, tagged with whether it is the primary caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorMark {
    pub position: usize,
    pub is_primary: bool,
}

impl CursorMark {
    pub fn primary(position: usize) -> Self {
        Self {
            position,
            is_primary: true,
        }
    }

    pub fn secondary(position: usize) -> Self {
        Self {
            position,
            is_primary: false,
        }
    }
}

/// The primary caret plus secondary carets, as byte offsets.
///
/// Secondary carets are kept sorted, distinct, and never equal to the primary caret.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorSet {
    primary: usize,
    extra: Vec<usize>,
}

impl CursorSet {
    pub fn primary(&self) -> usize {
        self.primary
    }

    pub fn extra(&self) -> &[usize] {
        &self.extra
    }

    pub fn count(&self) -> usize {
        1 + self.extra.len()
    }

    pub fn has_extra(&self) -> bool {
        !self.extra.is_empty()
    }

    pub(crate) fn set_primary(&mut self, position: usize) {
        self.primary = position;
        self.extra.retain(|p| *p != position);
    }

    pub(crate) fn clear_extra(&mut self) {
        self.extra.clear();
    }

    /// Adds a secondary caret. Positions already occupied by any caret are ignored.
    pub(crate) fn add(&mut self, position: usize) -> Result<bool, EditError> {
        if position == self.primary {
            return Ok(false);
        }
        let Err(idx) = self.extra.binary_search(&position) else {
            return Ok(false);
        };
        self.extra
            .try_reserve(1)
            .map_err(EditError::alloc("cursor list"))?;
        self.extra.insert(idx, position);
        Ok(true)
    }

    /// Replaces every caret: the first position becomes primary, the rest secondary.
    ///
    /// Positions must already be clamped. An empty list keeps the primary caret and drops the
    /// secondary ones.
    pub(crate) fn replace(&mut self, positions: &[usize]) -> Result<(), EditError> {
        let Some((&first, rest)) = positions.split_first() else {
            self.extra.clear();
            return Ok(());
        };
        let mut extra = Vec::new();
        extra
            .try_reserve_exact(rest.len())
            .map_err(EditError::alloc("cursor list"))?;
        extra.extend(rest.iter().copied().filter(|p| *p != first));
        extra.sort_unstable();
        extra.dedup();
        self.primary = first;
        self.extra = extra;
        Ok(())
    }

    /// Pulls every caret back inside `s`. Carets past the end are clamped, not dropped, so
    /// distinct secondary carets may merge.
    pub(crate) fn clamp_to(&mut self, s: &str) {
        self.primary = text::floor_char_boundary(s, self.primary);
        for p in &mut self.extra {
            *p = text::floor_char_boundary(s, *p);
        }
        let primary = self.primary;
        self.extra.sort_unstable();
        self.extra.dedup();
        self.extra.retain(|p| *p != primary);
    }

    /// Canonical mark list: clamped to `s`, sorted by position, one mark per position.
    pub fn collect_marks(&self, s: &str) -> Result<Vec<CursorMark>, EditError> {
        let mut marks = Vec::new();
        marks
            .try_reserve_exact(self.count())
            .map_err(EditError::alloc("cursor mark list"))?;
        marks.push(CursorMark::primary(text::floor_char_boundary(s, self.primary)));
        marks.extend(
            self.extra
                .iter()
                .map(|p| CursorMark::secondary(text::floor_char_boundary(s, *p))),
        );
        merge_marks(&mut marks);
        Ok(marks)
    }

    /// Writes a mark list back. Coinciding marks merge, keeping primacy if either had it. If no
    /// mark is primary the first one is promoted.
    pub fn apply_marks(&mut self, marks: &[CursorMark]) {
        let primary = marks
            .iter()
            .find(|m| m.is_primary)
            .or_else(|| marks.first())
            .map_or(self.primary, |m| m.position);
        self.primary = primary;
        self.extra.clear();
        for m in marks {
            if m.position != primary && self.extra.last() != Some(&m.position) {
                self.extra.push(m.position);
            }
        }
        self.extra.sort_unstable();
        self.extra.dedup();
    }
}

fn merge_marks(marks: &mut Vec<CursorMark>) {
    marks.sort_by_key(|m| m.position);
    marks.dedup_by(|later, kept| {
        if later.position == kept.position {
            kept.is_primary |= later.is_primary;
            true
        } else {
            false
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(primary: usize, extra: &[usize]) -> CursorSet {
        let mut positions = vec![primary];
        positions.extend_from_slice(extra);
        let mut c = CursorSet::default();
        c.replace(&positions).unwrap();
        c
    }

    #[test]
    fn marks_are_sorted_and_merged() {
        let c = set(3, &[1, 5]);
        let marks = c.collect_marks("abcdef").unwrap();
        assert_eq!(
            marks,
            vec![
                CursorMark::secondary(1),
                CursorMark::primary(3),
                CursorMark::secondary(5),
            ]
        );
    }

    #[test]
    fn out_of_range_carets_clamp_and_merge_with_primary() {
        let c = set(2, &[7, 9]);
        let marks = c.collect_marks("ab").unwrap();
        assert_eq!(marks, vec![CursorMark::primary(2)]);
    }

    #[test]
    fn adding_an_occupied_position_is_a_noop() {
        let mut c = set(2, &[4]);
        assert!(!c.add(2).unwrap());
        assert!(!c.add(4).unwrap());
        assert!(c.add(0).unwrap());
        assert_eq!(c.extra(), &[0, 4]);
    }

    #[test]
    fn replace_dedups_and_promotes_first() {
        let c = set(4, &[1, 4, 1, 0]);
        assert_eq!(c.primary(), 4);
        assert_eq!(c.extra(), &[0, 1]);
    }

    #[test]
    fn apply_merges_coinciding_marks_preserving_primacy() {
        let mut c = set(0, &[3]);
        c.apply_marks(&[CursorMark::secondary(2), CursorMark::primary(2)]);
        assert_eq!(c.primary(), 2);
        assert!(!c.has_extra());
    }

    #[test]
    fn clamp_keeps_carets_on_char_boundaries() {
        let mut c = set(1, &[2, 9]);
        c.clamp_to("é");
        assert_eq!(c.primary(), 0);
        assert_eq!(c.extra(), &[2]);
    }
}
