//! Property-style tests for table batch mutations
//!
//! Each property is checked over every table size and selection in a small
//! bounded domain rather than sampled.

use canvas_editor::table::{delete_rows, set_column_width, set_row_height};
use canvas_editor::{DeleteRowsOutcome, RecordingHost, Table, TableSelection};
use std::num::NonZeroU32;

fn px(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap()
}

/// Every subset of `0..n`, as index lists
fn subsets(n: usize) -> impl Iterator<Item = Vec<usize>> {
    (0u32..(1 << n)).map(move |mask| (0..n).filter(|i| mask & (1 << i) != 0).collect())
}

fn distinct_widths(n: usize) -> Vec<u32> {
    (0..n as u32).map(|i| 100 + i * 10).collect()
}

#[test]
fn test_batch_width_touches_only_selected_columns() {
    for columns in 2..=6 {
        for selection in subsets(columns) {
            for width in [10, 76, 500] {
                let original = distinct_widths(columns);
                let mut table = Table::with_dimensions(&original, &[30, 30]);
                let mut host = RecordingHost::new();

                set_column_width(&mut table, &TableSelection::new(selection.clone()), px(width), &mut host);

                for (i, &w) in table.widths().iter().enumerate() {
                    if selection.contains(&i) {
                        assert_eq!(w, width);
                    } else {
                        assert_eq!(w, original[i]);
                    }
                }
                assert_eq!(table.width(), table.widths().iter().map(|&w| u64::from(w)).sum::<u64>());
                assert_eq!(table.tr_list.len(), 2);
                assert_eq!(host.renders.len(), 1);
            }
        }
    }
}

#[test]
fn test_batch_width_ignores_indexes_past_the_end() {
    let mut table = Table::with_dimensions(&[100, 110, 120], &[30]);
    let mut host = RecordingHost::new();

    let changed = set_column_width(
        &mut table,
        &TableSelection::from_range(1, 5),
        px(64),
        &mut host,
    );

    assert_eq!(changed, 2);
    assert_eq!(table.widths(), vec![100, 64, 64]);
    assert_eq!(table.colgroup.len(), 3);
}

#[test]
fn test_batch_height_touches_only_selected_rows() {
    for rows in 1..=6 {
        for selection in subsets(rows) {
            let original: Vec<u32> = (0..rows as u32).map(|i| 20 + i).collect();
            let mut table = Table::with_dimensions(&[50, 50], &original);
            let mut host = RecordingHost::new();

            set_row_height(&mut table, &TableSelection::new(selection.clone()), px(42), &mut host);

            for (i, &h) in table.heights().iter().enumerate() {
                let expected = if selection.contains(&i) { 42 } else { original[i] };
                assert_eq!(h, expected);
            }
            assert_eq!(table.widths(), vec![50, 50]);
        }
    }
}

#[test]
fn test_row_deletion_properties() {
    for rows in 3..=7 {
        for selection in subsets(rows) {
            if selection.is_empty() || selection.len() >= rows {
                continue;
            }

            let mut table = Table::with_dimensions(&[40, 40], &vec![30; rows]);
            let mut host = RecordingHost::new();

            let outcome = delete_rows(&mut table, &TableSelection::new(selection.clone()), &mut host);

            let remaining = rows - selection.len();
            let expected_cursor = selection[0].min(remaining - 1);
            assert_eq!(
                outcome,
                DeleteRowsOutcome::RowsDeleted {
                    removed: selection.len(),
                    cursor_row: expected_cursor,
                }
            );
            assert_eq!(table.tr_list.len(), remaining);

            let deleted_ids: Vec<String> = selection.iter().map(|i| format!("tr-{i}")).collect();
            for tr in &table.tr_list {
                assert!(!deleted_ids.contains(tr.id.as_ref().unwrap()));
            }

            // Survivors keep their relative order
            let survivors: Vec<String> = (0..rows)
                .filter(|i| !selection.contains(i))
                .map(|i| format!("tr-{i}"))
                .collect();
            let ids: Vec<String> = table.tr_list.iter().map(|tr| tr.id.clone().unwrap()).collect();
            assert_eq!(ids, survivors);

            assert_eq!(host.table_deletes, 0);
            assert_eq!(host.renders.len(), 1);
        }
    }
}

#[test]
fn test_selecting_every_row_deletes_the_table() {
    for rows in 1..=6 {
        let mut table = Table::with_dimensions(&[40], &vec![30; rows]);
        let mut host = RecordingHost::new();

        let mut selection: Vec<usize> = (0..rows).collect();
        selection.reverse();
        let outcome = delete_rows(&mut table, &TableSelection::new(selection), &mut host);

        assert_eq!(outcome, DeleteRowsOutcome::TableDeleted);
        assert_eq!(host.table_deletes, 1);
        assert!(!table.tr_list.is_empty());
    }
}

#[test]
fn test_duplicate_row_indexes_count_once() {
    let mut table = Table::with_dimensions(&[40], &[30; 3]);
    let mut host = RecordingHost::new();

    let outcome = delete_rows(&mut table, &TableSelection::new([1, 1, 1]), &mut host);

    assert_eq!(
        outcome,
        DeleteRowsOutcome::RowsDeleted {
            removed: 1,
            cursor_row: 1
        }
    );
    assert_eq!(table.tr_list.len(), 2);
}

#[test]
fn test_stale_row_indexes_do_not_trigger_table_delete() {
    let mut table = Table::with_dimensions(&[40], &[30; 2]);
    let mut host = RecordingHost::new();

    // Three indexes, but only one row actually exists among them
    let outcome = delete_rows(&mut table, &TableSelection::new([1, 5, 6]), &mut host);

    assert_eq!(
        outcome,
        DeleteRowsOutcome::RowsDeleted {
            removed: 1,
            cursor_row: 0
        }
    );
    assert_eq!(host.table_deletes, 0);
}
