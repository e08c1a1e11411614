//! Line spacing inside and outside tables

use canvas_editor::line_spacing::{current_line_spacing, set_line_spacing};
use canvas_editor::{
    Element, Range, RecordingHost, Table, DEFAULT_LINE_SPACING, MAX_LINE_SPACING,
    MIN_LINE_SPACING,
};

fn table_with_text() -> Table {
    let mut table = Table::with_dimensions(&[100, 100], &[30, 45]);
    for tr in &mut table.tr_list {
        for td in &mut tr.td_list {
            td.value = vec![Element::text("Cell"), Element::text(" content")];
        }
    }
    table
}

#[test]
fn test_cell_spacing_never_changes_row_height() {
    // 0.1..=3.0 in hundredths
    for hundredths in 10..=300u32 {
        let spacing = f64::from(hundredths) / 100.0;
        let mut table = table_with_text();
        let heights = table.heights();
        let mut host = RecordingHost::new();

        let cell = table.cell_mut(1, 0).unwrap();
        let updated = set_line_spacing(&mut cell.value, &Range::new(0, 1), spacing, &mut host);

        assert_eq!(updated, 2);
        assert_eq!(table.heights(), heights);
        assert_eq!(table.widths(), vec![100, 100]);
        assert!(table.cell(1, 0).unwrap().value.iter().all(|e| e.line_spacing == Some(spacing)));
        // Neighbouring cells untouched
        assert!(table.cell(0, 0).unwrap().value.iter().all(|e| e.line_spacing.is_none()));
    }
}

#[test]
fn test_spacing_survives_json_round_trip() {
    for hundredths in 10..=300u32 {
        let spacing = f64::from(hundredths) / 100.0;
        let mut element = Element::text("x");
        element.line_spacing = Some(spacing);

        let json = serde_json::to_string(&element).unwrap();
        let back: Element = serde_json::from_str(&json).unwrap();

        let restored = back.line_spacing.unwrap();
        assert!((restored - spacing).abs() < 1e-12, "{spacing} came back as {restored}");
    }
}

#[test]
fn test_limits_are_inclusive() {
    let mut elements = vec![Element::text("a")];
    let mut host = RecordingHost::new();
    let range = Range::collapsed(0);

    assert_eq!(set_line_spacing(&mut elements, &range, MIN_LINE_SPACING, &mut host), 1);
    assert_eq!(current_line_spacing(&elements, &range), MIN_LINE_SPACING);

    assert_eq!(set_line_spacing(&mut elements, &range, MAX_LINE_SPACING, &mut host), 1);
    assert_eq!(current_line_spacing(&elements, &range), MAX_LINE_SPACING);

    assert_eq!(set_line_spacing(&mut elements, &range, MAX_LINE_SPACING + 0.01, &mut host), 0);
    assert_eq!(current_line_spacing(&elements, &range), MAX_LINE_SPACING);
    assert_eq!(host.renders.len(), 2);
}

#[test]
fn test_default_when_absent() {
    let elements = vec![Element::text("a")];
    assert_eq!(current_line_spacing(&elements, &Range::collapsed(0)), DEFAULT_LINE_SPACING);
    assert_eq!(current_line_spacing(&[], &Range::collapsed(0)), DEFAULT_LINE_SPACING);
}

#[test]
fn test_half_open_range_targets_one_element() {
    let mut elements = vec![Element::text("a"), Element::text("b"), Element::text("c")];
    let mut host = RecordingHost::new();

    let start_only = Range {
        start_index: Some(1),
        end_index: None,
        table: None,
    };
    assert_eq!(set_line_spacing(&mut elements, &start_only, 1.5, &mut host), 1);

    let end_only = Range {
        start_index: None,
        end_index: Some(2),
        table: None,
    };
    assert_eq!(set_line_spacing(&mut elements, &end_only, 2.0, &mut host), 1);

    let spacings: Vec<_> = elements.iter().map(|e| e.line_spacing).collect();
    assert_eq!(spacings, vec![None, Some(1.5), Some(2.0)]);
    assert_eq!(host.renders.len(), 2);
}
