use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use ratatui_textedit_core::clipboard;
use ratatui_textedit_core::clipboard::ClipboardHandle;
use ratatui_textedit_core::clipboard::LocalClipboard;
use ratatui_textedit_core::editor::CursorMark;
use ratatui_textedit_core::editor::EditorOptions;
use ratatui_textedit_core::editor::TextEditor;
use ratatui_textedit_core::validation::ValidationRule;
use ratatui_textedit_core::validation::ValidationRules;

fn editor_with_capacity(max_bytes: usize) -> TextEditor {
    TextEditor::with_options(EditorOptions {
        max_bytes,
        ..EditorOptions::default()
    })
}

fn assert_bounds(ed: &TextEditor) {
    let len = ed.len();
    assert!(len <= ed.capacity(), "len {len} > capacity {}", ed.capacity());
    assert!(ed.cursor() <= len, "cursor {} > len {len}", ed.cursor());
    assert!(ed.text().is_char_boundary(ed.cursor()));
    let extra = ed.extra_cursors();
    assert!(extra.windows(2).all(|w| w[0] < w[1]), "unsorted {extra:?}");
    for &p in extra {
        assert!(p <= len && p != ed.cursor() && ed.text().is_char_boundary(p));
    }
    if let Some(range) = ed.selection_range() {
        assert!(range.start < range.end && range.end <= len);
    }
}

#[test]
fn insert_at_two_carets_uses_each_carets_local_view() {
    let mut ed = TextEditor::new();
    ed.set_text("abc").unwrap();
    ed.set_cursors(&[3, 1]).unwrap();

    assert!(ed.insert_text("q").unwrap());

    assert_eq!(ed.text(), "aqbcq");
    assert_eq!(ed.cursor(), 5);
    assert_eq!(ed.extra_cursors(), &[2]);
    assert_eq!(
        ed.collect_cursor_marks().unwrap(),
        vec![CursorMark::secondary(2), CursorMark::primary(5)]
    );
}

#[test]
fn deleting_a_selection_collapses_multi_cursor_mode() {
    let mut ed = TextEditor::new();
    ed.set_text("hello").unwrap();
    ed.add_cursor(0).unwrap();
    ed.set_selection(1, 4);

    assert!(ed.delete_backward().unwrap());

    assert_eq!(ed.text(), "ho");
    assert_eq!(ed.cursor(), 1);
    assert_eq!(ed.extra_cursors(), &[] as &[usize]);
    assert_eq!(ed.selection_range(), None);
}

#[test]
fn undo_and_redo_walk_every_intermediate_state() {
    let mut ed = TextEditor::new();
    for s in ["a", "\n", "b"] {
        assert!(ed.insert_text(s).unwrap());
    }
    assert_eq!(ed.text(), "a\nb");

    assert!(ed.undo().unwrap());
    assert_eq!(ed.text(), "a\n");
    assert!(ed.undo().unwrap());
    assert_eq!(ed.text(), "a");
    assert!(ed.redo().unwrap());
    assert_eq!(ed.text(), "a\n");
    assert!(ed.redo().unwrap());
    assert_eq!(ed.text(), "a\nb");
    assert!(!ed.redo().unwrap());
    assert_eq!(ed.text(), "a\nb");

    for _ in 0..3 {
        assert!(ed.undo().unwrap());
    }
    assert_eq!(ed.text(), "");
    assert!(!ed.undo().unwrap());
    assert_eq!(ed.text(), "");
}

#[test]
fn inserts_truncate_at_capacity_then_report_noop() {
    let mut ed = editor_with_capacity(3);

    assert!(ed.insert_text("hello").unwrap());
    assert_eq!(ed.text(), "hel");
    assert_eq!(ed.cursor(), 3);

    assert!(!ed.insert_text("x").unwrap());
    assert_eq!(ed.text(), "hel");
}

#[test]
fn validation_result_is_cached_and_notified_per_evaluation() {
    let fired = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&fired);
    let mut ed = TextEditor::new();
    ed.on_validation(move |_| counter.set(counter.get() + 1));
    ed.set_validation_rules(
        ValidationRules::new().with(ValidationRule::min_chars(5, "at least 5 characters")),
    );
    let baseline = fired.get();

    ed.set_text("tiny").unwrap();
    assert!(!ed.validation_state().is_valid());
    assert_eq!(ed.validation_state().first_error(), Some("at least 5 characters"));
    assert_eq!(fired.get(), baseline + 1);

    ed.set_text("long enough").unwrap();
    assert!(ed.validation_state().is_valid());
    assert_eq!(fired.get(), baseline + 2);
}

#[test]
fn viewport_scrolls_just_enough_to_keep_the_caret_on_the_last_row() {
    let mut ed = TextEditor::new();
    ed.set_text("0\n1\n2\n3\n4\n5\n6\n7").unwrap();
    ed.set_viewport_size(20, 3);
    ed.set_cursor(0);
    assert_eq!(ed.scroll_offsets(), (0, 0));

    ed.move_down();
    ed.move_down();
    assert_eq!(ed.scroll_offsets().0, 0);
    for expected in 1..=5 {
        ed.move_down();
        let (row, _) = ed.cursor_position();
        assert_eq!(ed.scroll_offsets().0, expected);
        assert_eq!(row - ed.scroll_offsets().0, 2);
    }

    ed.move_up();
    ed.move_up();
    assert_eq!(ed.scroll_offsets().0, 5);
    ed.move_up();
    assert_eq!(ed.scroll_offsets().0, 4);
}

#[test]
fn shared_clipboard_moves_text_between_editors() {
    let shared = clipboard::shared(LocalClipboard::new());
    let mut left = TextEditor::new();
    let mut right = TextEditor::new();
    left.set_clipboard(ClipboardHandle::Shared(Rc::clone(&shared)));
    right.set_clipboard(ClipboardHandle::Shared(Rc::clone(&shared)));

    left.set_text("moved").unwrap();
    assert!(left.cut().unwrap());
    assert!(left.is_empty());
    assert!(right.paste().unwrap());
    assert_eq!(right.text(), "moved");
}

#[test]
fn bounds_hold_across_a_long_mixed_sequence() {
    let mut ed = editor_with_capacity(24);
    let mut seed: u64 = 0x2545_f491;
    let mut next = move |n: u64| {
        seed = seed
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((seed >> 33) % n) as usize
    };
    let words = ["a", "é", "你", "\n", "xyz", "hello world"];

    for _ in 0..2_000 {
        match next(12) {
            0 | 1 => {
                ed.insert_text(words[next(words.len() as u64)]).unwrap();
            }
            2 => {
                ed.delete_backward().unwrap();
            }
            3 => {
                ed.delete_forward().unwrap();
            }
            4 => {
                ed.undo().unwrap();
            }
            5 => {
                ed.redo().unwrap();
            }
            6 => {
                ed.add_cursor(next(30)).unwrap();
            }
            7 => {
                ed.set_selection(next(30), next(30));
            }
            8 => {
                ed.move_up();
                ed.move_right();
            }
            9 => {
                ed.move_down();
                ed.move_left();
            }
            10 => {
                ed.cut().unwrap();
            }
            _ => {
                ed.paste().unwrap();
            }
        }
        assert_bounds(&ed);
    }
}
