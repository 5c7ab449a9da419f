use super::*;
use crate::linebuffer::LineBuffer;
use bubbletea_rs::Model as BubbleTeaModel;
use crossterm::event::{KeyCode, KeyModifiers};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn numbered(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item {i}")).collect()
}

fn viewport(width: usize, height: usize, items: Vec<String>) -> Model<String> {
    let mut vp = Model::new(width, height);
    vp.set_items(items);
    vp
}

fn press(vp: &mut Model<String>, key: &str) {
    let k = crate::key::KeyPress::from(key);
    vp.handle_key(&KeyMsg {
        key: k.code,
        modifiers: k.modifiers,
    });
}

fn assert_frame_shape(vp: &Model<String>) {
    let lines = vp.frame().lines();
    assert_eq!(lines.len(), vp.height());
    for line in &lines {
        assert_eq!(LineBuffer::new(line).width(), vp.width(), "{line:?}");
    }
}

fn span_roles(frame: &Frame, row: usize) -> Vec<(String, Role)> {
    frame.rows[row]
        .spans
        .iter()
        .map(|s| (s.text.clone(), s.role))
        .collect()
}

#[test]
fn long_line_is_truncated_with_indicator() {
    let vp = viewport(
        10,
        4,
        strings(&["short", "a very long line exceeding twenty columns"]),
    );
    assert_eq!(
        vp.frame().lines(),
        vec!["short     ", "a very ...", "          ", "          "]
    );
    assert!(!vp.footer_visible());
}

#[test]
fn wrapping_spreads_line_over_rows_and_shows_footer() {
    let mut vp = viewport(
        10,
        4,
        strings(&["short", "a very long line exceeding twenty columns"]),
    );
    vp.set_wrap_text(true);

    assert_eq!(vp.total_rows(), 6);
    assert_eq!(vp.content_height(), 3);
    assert_eq!(
        vp.frame().lines(),
        vec!["short     ", "a very lon", "g line exc", "50% (3/6) "]
    );

    vp.goto_bottom();
    assert_eq!(vp.y_offset(), 3);
    assert_eq!(
        vp.frame().lines(),
        vec!["eeding twe", "nty column", "s         ", "100% (6/6)"]
    );
}

#[test]
fn total_rows_match_wrapped_item_spans() {
    let items = strings(&[
        "",
        "tiny",
        "the quick brown fox jumps over the lazy dog",
        "世界世界世界",
        "trailing blanks        ",
    ]);
    let mut vp = viewport(30, 5, items.clone());
    vp.set_wrap_text(true);
    for width in 1..=30 {
        vp.set_width(width);
        let expected: usize = items
            .iter()
            .map(|item| LineBuffer::new(item).wrap(width).len())
            .sum();
        assert_eq!(vp.total_rows(), expected, "width {width}");
        assert_frame_shape(&vp);
    }
}

#[test]
fn selection_stays_visible_while_moving_down() {
    let mut vp = viewport(20, 5, numbered(100));
    vp.set_footer_enabled(false);
    vp.set_selection_enabled(true);

    for _ in 0..20 {
        vp.select_down(1);
    }
    assert_eq!(vp.selected_idx(), 20);
    assert_eq!(vp.y_offset(), 16);

    vp.select_up(5);
    assert_eq!(vp.y_offset(), 15);
    assert_eq!(vp.frame().lines()[0].trim_end(), "item 15");
}

#[test]
fn selected_row_uses_selected_role() {
    let mut vp = viewport(10, 3, numbered(3));
    vp.set_selection_enabled(true);
    vp.select_down(1);

    let frame = vp.frame();
    assert_eq!(span_roles(&frame, 0), vec![("item 0    ".to_string(), Role::Content)]);
    assert_eq!(span_roles(&frame, 1), vec![("item 1    ".to_string(), Role::Selected)]);
}

#[test]
fn selection_is_ignored_when_disabled() {
    let mut vp = viewport(10, 3, numbered(10));
    vp.select_down(4);
    assert_eq!(vp.selected_idx(), 0);
    assert!(vp.frame().rows.iter().all(|r| r.spans.iter().all(|s| s.role != Role::Selected)));
}

#[test]
fn tall_selected_item_aligns_to_first_row() {
    let mut items = numbered(3);
    items.push("x".repeat(50));
    let mut vp = viewport(10, 3, items);
    vp.set_footer_enabled(false);
    vp.set_wrap_text(true);
    vp.set_selection_enabled(true);

    vp.select_down(3);
    assert_eq!(vp.y_offset(), 3);
    assert_eq!(vp.frame().lines(), vec!["x".repeat(10); 3]);
}

#[test]
fn footer_reports_scroll_position() {
    let mut vp = viewport(20, 4, numbered(10));
    assert_eq!(vp.footer_text().as_deref(), Some("30% (3/10)"));

    vp.goto_bottom();
    assert!(vp.at_bottom());
    assert_eq!(vp.footer_text().as_deref(), Some("100% (10/10)"));
    assert_eq!(vp.frame().lines()[2].trim_end(), "item 9");
}

#[test]
fn footer_reports_selection_with_truncated_percent() {
    let mut vp = viewport(20, 2, numbered(3));
    vp.set_selection_enabled(true);
    assert_eq!(vp.content_height(), 1);
    assert_eq!(vp.footer_text().as_deref(), Some("33% (1/3)"));

    vp.goto_bottom();
    assert_eq!(vp.footer_text().as_deref(), Some("100% (3/3)"));
    assert_eq!(vp.frame().lines()[0].trim_end(), "item 2");
}

#[test]
fn footer_hidden_when_content_fits_or_disabled() {
    let mut vp = viewport(20, 5, numbered(5));
    assert_eq!(vp.footer_text(), None);
    assert_eq!(vp.content_height(), 5);

    vp.set_items(numbered(6));
    assert_eq!(vp.content_height(), 4);
    vp.set_footer_enabled(false);
    assert_eq!(vp.footer_text(), None);
    assert_eq!(vp.content_height(), 5);
}

#[test]
fn footer_is_clipped_to_width() {
    let vp = viewport(4, 2, numbered(10));
    assert_eq!(vp.frame().lines()[1], "10% ");
    assert_frame_shape(&vp);
}

#[test]
fn header_reduces_content_height_and_wraps() {
    let mut vp = viewport(10, 5, numbered(20));
    vp.set_header(strings(&["a header that wraps"]));
    assert_eq!(vp.content_height(), 3);

    vp.set_wrap_text(true);
    assert_eq!(vp.content_height(), 2);
    let lines = vp.frame().lines();
    assert_eq!(lines[0], "a header t");
    assert_eq!(lines[1], "hat wraps ");
    assert_eq!(lines[2].trim_end(), "item 0");
    assert!(lines[4].starts_with("10% (2/20)"));
}

#[test]
fn header_taller_than_viewport_leaves_no_content_rows() {
    let mut vp = viewport(10, 2, numbered(5));
    vp.set_header(strings(&["h1", "h2", "h3"]));
    assert_eq!(vp.content_height(), 0);
    assert_eq!(vp.frame().lines(), vec!["h1        ", "h2        "]);
    vp.scroll_down(3);
    assert_eq!(vp.y_offset(), 0);
}

#[test]
fn panning_is_bounded_by_visible_lines() {
    let mut vp = viewport(10, 3, strings(&["0123456789abcdef", "short"]));
    vp.pan_right(4);
    assert_eq!(vp.x_offset(), 4);
    assert_eq!(vp.frame().lines()[0], "...789a...");

    vp.pan_right(100);
    assert_eq!(vp.x_offset(), 6);
    assert_eq!(vp.frame().lines()[0], "...9abcdef");
    assert_eq!(vp.frame().lines()[1], "...       ");

    vp.pan_left(100);
    assert_eq!(vp.x_offset(), 0);
}

#[test]
fn scrolling_away_from_long_line_clamps_pan() {
    let mut items = vec!["x".repeat(30)];
    items.extend(numbered(10));
    let mut vp = viewport(10, 3, items);
    vp.set_footer_enabled(false);
    vp.pan_right(15);
    assert_eq!(vp.x_offset(), 15);

    vp.scroll_down(5);
    assert_eq!(vp.max_line_length(), 6);
    assert_eq!(vp.x_offset(), 0);
}

#[test]
fn panning_is_disabled_while_wrapping() {
    let mut vp = viewport(10, 3, strings(&["0123456789abcdef"]));
    vp.pan_right(3);
    assert_eq!(vp.x_offset(), 3);

    vp.set_wrap_text(true);
    assert_eq!(vp.x_offset(), 0);
    vp.pan_right(3);
    assert_eq!(vp.x_offset(), 0);
    press(&mut vp, "l");
    assert_eq!(vp.x_offset(), 0);
}

#[test]
fn wide_characters_are_not_split_at_window_edges() {
    let mut vp = viewport(3, 1, strings(&["世界世界"]));
    vp.set_continuation_indicator(">");
    assert_eq!(vp.frame().lines(), vec!["世>"]);

    vp.set_continuation_indicator("");
    assert_eq!(vp.frame().lines(), vec!["世 "]);
}

#[test]
fn indicator_wider_than_viewport_is_truncated() {
    let vp = viewport(2, 1, strings(&["abcdef"]));
    assert_eq!(vp.frame().lines(), vec![".."]);
}

#[test]
fn every_panned_row_gets_left_marker() {
    let mut vp = viewport(8, 3, strings(&["0123456789", "", "   "]));
    vp.pan_right(2);
    let lines = vp.frame().lines();
    assert_eq!(lines[0], "...56789");
    assert_eq!(lines[1], "...     ");
    assert_eq!(lines[2], "...     ");
}

#[test]
fn highlight_spans_wrap_boundary() {
    let mut vp = viewport(5, 3, strings(&["hello world"]));
    vp.set_wrap_text(true);
    vp.set_highlight("lo wo");

    let frame = vp.frame();
    assert_eq!(
        span_roles(&frame, 0),
        vec![
            ("hel".to_string(), Role::Content),
            ("lo".to_string(), Role::Highlight),
        ]
    );
    assert_eq!(
        span_roles(&frame, 1),
        vec![
            (" wo".to_string(), Role::Highlight),
            ("rl".to_string(), Role::Content),
        ]
    );
    assert_eq!(
        span_roles(&frame, 2),
        vec![("d    ".to_string(), Role::Content)]
    );
}

#[test]
fn highlight_follows_horizontal_pan() {
    let mut vp = viewport(6, 1, strings(&["aa surf bb"]));
    vp.set_continuation_indicator("");
    vp.set_highlight("surf");
    vp.pan_right(2);

    let frame = vp.frame();
    assert_eq!(
        span_roles(&frame, 0),
        vec![
            (" ".to_string(), Role::Content),
            ("surf".to_string(), Role::Highlight),
            (" ".to_string(), Role::Content),
        ]
    );
}

#[test]
fn highlight_pattern_and_invalid_pattern() {
    let mut vp = viewport(12, 2, strings(&["a1 b22 c333"]));
    vp.set_highlight_pattern(r"\d+").unwrap();
    let highlighted: Vec<String> = vp.frame().rows[0]
        .spans
        .iter()
        .filter(|s| s.role == Role::Highlight)
        .map(|s| s.text.clone())
        .collect();
    assert_eq!(highlighted, vec!["1", "22", "333"]);

    let err = vp.set_highlight_pattern("(").unwrap_err();
    assert!(matches!(err, HighlightError::InvalidPattern { .. }));
    assert_eq!(vp.highlight().map(|h| h.as_str()), Some(r"\d+"));

    vp.set_highlight("");
    assert!(vp.highlight().is_none());
}

#[test]
fn empty_content_renders_blank_frame() {
    let mut vp: Model<String> = Model::new(8, 3);
    vp.set_selection_enabled(true);
    vp.set_header(strings(&["head"]));
    vp.select_down(3);
    vp.page_down();
    vp.goto_bottom();

    assert_eq!(vp.selected_item(), None);
    assert_eq!(vp.total_rows(), 0);
    assert_eq!(vp.footer_text(), None);
    assert_eq!(vp.frame().lines(), vec!["head    ", "        ", "        "]);
}

#[test]
fn zero_sized_viewport_renders_nothing() {
    let mut vp = viewport(0, 0, numbered(5));
    vp.set_selection_enabled(true);
    vp.select_down(2);
    assert!(vp.frame().rows.is_empty());
    assert_eq!(vp.content_height(), 0);
}

#[test]
fn comparator_keeps_selection_on_item() {
    let mut vp = viewport(20, 5, numbered(50));
    vp.set_footer_enabled(false);
    vp.set_compare_fn(|a: &String, b: &String| a == b);
    vp.set_selection_enabled(true);
    vp.set_selected_idx(0);

    let mut reversed = numbered(50);
    reversed.reverse();
    vp.set_items(reversed);

    assert_eq!(vp.selected_idx(), 49);
    assert_eq!(vp.y_offset(), 45);
    assert_eq!(vp.selected_item().map(String::as_str), Some("item 0"));
}

#[test]
fn shrinking_items_clamps_offsets() {
    let mut vp = viewport(20, 5, numbered(100));
    vp.set_selection_enabled(true);
    vp.goto_bottom();
    assert_eq!(vp.selected_idx(), 99);

    vp.set_items(numbered(3));
    assert_eq!(vp.selected_idx(), 2);
    assert_eq!(vp.y_offset(), 0);
    assert_frame_shape(&vp);
}

#[test]
fn resizing_keeps_selection_visible() {
    let mut vp = viewport(20, 10, numbered(30));
    vp.set_footer_enabled(false);
    vp.set_selection_enabled(true);
    vp.set_selected_idx(9);
    assert_eq!(vp.y_offset(), 0);

    vp.set_height(4);
    assert_eq!(vp.y_offset(), 6);
    assert_eq!(vp.frame().lines()[3].trim_end(), "item 9");
}

#[test]
fn paging_moves_view_and_selection() {
    let mut vp = viewport(20, 6, numbered(20));
    vp.set_footer_enabled(false);
    vp.set_selection_enabled(true);

    vp.half_page_down();
    assert_eq!((vp.y_offset(), vp.selected_idx()), (3, 3));

    vp.page_down();
    assert_eq!((vp.y_offset(), vp.selected_idx()), (9, 9));

    vp.page_up();
    assert_eq!((vp.y_offset(), vp.selected_idx()), (3, 3));

    vp.half_page_up();
    assert_eq!((vp.y_offset(), vp.selected_idx()), (0, 0));
}

#[test]
fn paging_without_selection_only_scrolls() {
    let mut vp = viewport(20, 6, numbered(20));
    vp.set_footer_enabled(false);
    vp.page_down();
    vp.page_down();
    assert_eq!(vp.y_offset(), 12);
    vp.page_down();
    assert_eq!(vp.y_offset(), 14);
    assert_eq!(vp.selected_idx(), 0);
}

#[test]
fn paging_over_wrapped_items_counts_items() {
    let items: Vec<String> = (0..10).map(|i| format!("{i}{}", "-".repeat(9))).collect();
    let mut vp = viewport(5, 4, items);
    vp.set_footer_enabled(false);
    vp.set_wrap_text(true);
    vp.set_selection_enabled(true);
    assert_eq!(vp.total_rows(), 20);

    vp.page_down();
    assert_eq!(vp.y_offset(), 4);
    assert_eq!(vp.selected_idx(), 2);
}

#[test]
fn goto_top_and_bottom() {
    let mut vp = viewport(20, 5, numbered(40));
    vp.set_footer_enabled(false);
    vp.goto_bottom();
    assert_eq!(vp.y_offset(), 35);
    vp.goto_top();
    assert!(vp.at_top());

    vp.set_selection_enabled(true);
    vp.goto_bottom();
    assert_eq!((vp.selected_idx(), vp.y_offset()), (39, 35));
    vp.goto_top();
    assert_eq!((vp.selected_idx(), vp.y_offset()), (0, 0));
}

#[test]
fn keys_drive_navigation() {
    let mut vp = viewport(20, 5, numbered(40));
    vp.set_footer_enabled(false);

    press(&mut vp, "j");
    press(&mut vp, "down");
    assert_eq!(vp.y_offset(), 2);
    press(&mut vp, "k");
    assert_eq!(vp.y_offset(), 1);

    vp.set_selection_enabled(true);
    press(&mut vp, "G");
    assert_eq!(vp.selected_idx(), 39);
    press(&mut vp, "g");
    assert_eq!(vp.selected_idx(), 0);
    press(&mut vp, "j");
    assert_eq!(vp.selected_idx(), 1);
    press(&mut vp, "ctrl+d");
    assert_eq!(vp.selected_idx(), 3);
    press(&mut vp, "pgdown");
    assert_eq!(vp.selected_idx(), 8);
    press(&mut vp, "end");
    assert_eq!(vp.selected_idx(), 39);
}

#[test]
fn arrow_keys_pan_by_quarter_width() {
    let mut vp = viewport(8, 2, strings(&["x".repeat(40).as_str()]));
    press(&mut vp, "right");
    assert_eq!(vp.x_offset(), 2);
    press(&mut vp, "l");
    assert_eq!(vp.x_offset(), 4);
    press(&mut vp, "h");
    assert_eq!(vp.x_offset(), 2);
}

#[test]
fn update_handles_key_messages() {
    let mut vp = viewport(20, 5, numbered(40));
    let msg: bubbletea_rs::Msg = Box::new(KeyMsg {
        key: KeyCode::Char('f'),
        modifiers: KeyModifiers::NONE,
    });
    assert!(vp.update(msg).is_none());
    assert_eq!(vp.y_offset(), 4);

    let other: bubbletea_rs::Msg = Box::new(42_u32);
    assert!(vp.update(other).is_none());
    assert_eq!(vp.y_offset(), 4);
}

#[test]
fn view_matches_frame_text() {
    let mut vp = viewport(12, 4, numbered(10));
    vp.set_selection_enabled(true);
    vp.set_highlight("item");

    let view = vp.view();
    let plain = vp.frame().lines();
    assert_eq!(view.lines().count(), plain.len());
    for (styled, expected) in view.lines().zip(&plain) {
        assert_eq!(
            strip_ansi_escapes::strip_str(styled).trim_end(),
            expected.trim_end()
        );
    }
}

#[test]
fn deep_scrolling_renders_far_items() {
    let mut vp = viewport(20, 4, numbered(10_000));
    vp.set_footer_enabled(false);
    vp.goto_bottom();
    assert_eq!(vp.frame().lines()[3].trim_end(), "item 9999");

    vp.set_y_offset(5000);
    assert_eq!(vp.frame().lines()[0].trim_end(), "item 5000");
    vp.scroll_up(4999);
    assert_eq!(vp.frame().lines()[0].trim_end(), "item 1");
}
