//! # Table Mutations
//!
//! Batch edits of a table's column widths, row heights and row set.
//!
//! ## Semantics
//!
//! ### Column width / row height
//! - Every selected index inside the current bounds gets the new value
//! - Out-of-range indexes are ignored, never an error
//! - Other columns/rows keep their exact value; nothing is redistributed
//!
//! ### Row deletion
//! - Selecting every row deletes the whole table through the host instead,
//!   so a table with zero rows is never observable
//! - Rows are removed from the highest index down
//! - The cursor lands on the first deleted position, or on the new last row
//!   when the tail was removed
//!
//! Every operation ends with a render request.

use crate::element::Table;
use crate::host::{RenderOptions, Renderer, TableHost};
use crate::selection::TableSelection;
use std::num::NonZeroU32;
use tracing::{debug, info};

/// Result of a row deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteRowsOutcome {
    /// Rows were removed; the cursor belongs on `cursor_row`
    RowsDeleted { removed: usize, cursor_row: usize },

    /// Every row was selected and the host deleted the table
    TableDeleted,

    /// No selected index exists in the table
    Unchanged,
}

/// Set the width of every selected column. Returns how many columns changed.
pub fn set_column_width(
    table: &mut Table,
    selection: &TableSelection,
    width: NonZeroU32,
    renderer: &mut dyn Renderer,
) -> usize {
    let columns = selection.in_bounds(table.colgroup.len());
    for &index in &columns {
        table.colgroup[index].width = width.get();
    }

    debug!(
        columns = ?columns,
        width = width.get(),
        table_width = table.width(),
        "Set column width"
    );

    renderer.render(RenderOptions::default());
    columns.len()
}

/// Set the height of every selected row. Returns how many rows changed.
pub fn set_row_height(
    table: &mut Table,
    selection: &TableSelection,
    height: NonZeroU32,
    renderer: &mut dyn Renderer,
) -> usize {
    let rows = selection.in_bounds(table.tr_list.len());
    for &index in &rows {
        table.tr_list[index].height = height.get();
    }

    debug!(rows = ?rows, height = height.get(), "Set row height");

    renderer.render(RenderOptions::default());
    rows.len()
}

/// Delete the selected rows, or the whole table when all rows are selected
pub fn delete_rows(
    table: &mut Table,
    selection: &TableSelection,
    host: &mut dyn TableHost,
) -> DeleteRowsOutcome {
    let rows = selection.in_bounds(table.tr_list.len());

    if rows.is_empty() {
        debug!("No selected rows inside the table");
        host.render(RenderOptions::default());
        return DeleteRowsOutcome::Unchanged;
    }

    if rows.len() >= table.tr_list.len() {
        info!(rows = table.tr_list.len(), "All rows selected, deleting table");
        host.delete_table();
        return DeleteRowsOutcome::TableDeleted;
    }

    // Descending, so earlier removals never shift a pending one
    for &index in rows.iter().rev() {
        table.tr_list.remove(index);
    }

    let remaining = table.tr_list.len();
    let cursor_row = rows[0].min(remaining - 1);

    debug!(rows = ?rows, remaining, cursor_row, "Deleted rows");

    host.render(RenderOptions::default());
    DeleteRowsOutcome::RowsDeleted {
        removed: rows.len(),
        cursor_row,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;

    fn px(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    fn row_ids(table: &Table) -> Vec<&str> {
        table
            .tr_list
            .iter()
            .map(|tr| tr.id.as_deref().unwrap())
            .collect()
    }

    #[test]
    fn test_set_single_column_width() {
        let mut table = Table::with_dimensions(&[100, 110, 120], &[30]);
        let mut host = RecordingHost::new();

        let changed = set_column_width(&mut table, &TableSelection::new([1]), px(76), &mut host);

        assert_eq!(changed, 1);
        assert_eq!(table.widths(), vec![100, 76, 120]);
        assert_eq!(table.width(), 296);
        assert_eq!(host.renders.len(), 1);
    }

    #[test]
    fn test_stale_column_indexes_are_ignored() {
        let mut table = Table::with_dimensions(&[50, 60], &[30]);
        let mut host = RecordingHost::new();

        let changed =
            set_column_width(&mut table, &TableSelection::new([1, 2, 7]), px(80), &mut host);

        assert_eq!(changed, 1);
        assert_eq!(table.widths(), vec![50, 80]);
        assert_eq!(host.renders.len(), 1);
    }

    #[test]
    fn test_set_row_height_leaves_columns_alone() {
        let mut table = Table::with_dimensions(&[50, 60], &[30, 30, 30]);
        let mut host = RecordingHost::new();

        set_row_height(&mut table, &TableSelection::new([0, 2]), px(45), &mut host);

        assert_eq!(table.heights(), vec![45, 30, 45]);
        assert_eq!(table.widths(), vec![50, 60]);
    }

    #[test]
    fn test_delete_leading_rows() {
        let mut table = Table::with_dimensions(&[40], &[30; 5]);
        let mut host = RecordingHost::new();

        let outcome = delete_rows(&mut table, &TableSelection::new([0, 1]), &mut host);

        assert_eq!(
            outcome,
            DeleteRowsOutcome::RowsDeleted {
                removed: 2,
                cursor_row: 0
            }
        );
        assert_eq!(row_ids(&table), vec!["tr-2", "tr-3", "tr-4"]);
        assert_eq!(host.table_deletes, 0);
        assert_eq!(host.renders.len(), 1);
    }

    #[test]
    fn test_delete_tail_moves_cursor_to_new_last_row() {
        let mut table = Table::with_dimensions(&[40], &[30; 3]);
        let mut host = RecordingHost::new();

        let outcome = delete_rows(&mut table, &TableSelection::new([2]), &mut host);

        assert_eq!(
            outcome,
            DeleteRowsOutcome::RowsDeleted {
                removed: 1,
                cursor_row: 1
            }
        );
        assert_eq!(row_ids(&table), vec!["tr-0", "tr-1"]);
    }

    #[test]
    fn test_delete_unordered_middle_rows() {
        let mut table = Table::with_dimensions(&[40], &[30; 4]);
        let mut host = RecordingHost::new();

        delete_rows(&mut table, &TableSelection::new([2, 1]), &mut host);

        assert_eq!(row_ids(&table), vec!["tr-0", "tr-3"]);
    }

    #[test]
    fn test_delete_all_rows_deletes_table() {
        let mut table = Table::with_dimensions(&[40], &[30; 3]);
        let mut host = RecordingHost::new();

        let outcome = delete_rows(&mut table, &TableSelection::new([0, 1, 2]), &mut host);

        assert_eq!(outcome, DeleteRowsOutcome::TableDeleted);
        assert_eq!(host.table_deletes, 1);
        assert_eq!(table.tr_list.len(), 3);
    }

    #[test]
    fn test_delete_with_no_rows_in_bounds_is_unchanged() {
        let mut table = Table::with_dimensions(&[40], &[30; 2]);
        let mut host = RecordingHost::new();

        let outcome = delete_rows(&mut table, &TableSelection::new([5, 9]), &mut host);

        assert_eq!(outcome, DeleteRowsOutcome::Unchanged);
        assert_eq!(table.tr_list.len(), 2);
        assert_eq!(host.renders.len(), 1);
    }
}
