use super::{apply_and_save, document_path};
use anyhow::Result;
use canvas_editor::{
    pixels_to_cm, DeleteRowsOutcome, DimensionDialog, Document, Mutation, MutationOutcome,
    RecordingHost, TableSelection,
};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ColWidthArgs {
    /// Document JSON file
    pub document: PathBuf,

    /// Element index of the table
    #[arg(short, long)]
    pub table: usize,

    /// Column indexes to resize (comma separated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub columns: Vec<usize>,

    /// New width in centimeters
    #[arg(long)]
    pub cm: Option<String>,
}

#[derive(Args, Debug)]
pub struct RowHeightArgs {
    /// Document JSON file
    pub document: PathBuf,

    /// Element index of the table
    #[arg(short, long)]
    pub table: usize,

    /// Row indexes to resize (comma separated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub rows: Vec<usize>,

    /// New height in centimeters
    #[arg(long)]
    pub cm: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteRowsArgs {
    /// Document JSON file
    pub document: PathBuf,

    /// Element index of the table
    #[arg(short, long)]
    pub table: usize,

    /// Row indexes to delete (comma separated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub rows: Vec<usize>,
}

pub fn col_width(args: ColWidthArgs, cwd: &str) -> Result<()> {
    let mut doc = Document::load(document_path(cwd, &args.document))?;

    // The dialog opens prefilled with the first selected column
    let current = doc
        .table(args.table)
        .and_then(|table| args.columns.first().and_then(|&c| table.colgroup.get(c)))
        .map(|col| col.width);
    let width = DimensionDialog::column_width(current).confirm(args.cm.as_deref())?;

    let mut host = RecordingHost::new();
    let result = apply_and_save(
        &mut doc,
        Mutation::SetColumnWidth {
            element_index: args.table,
            columns: TableSelection::new(args.columns),
            width,
        },
        &mut host,
    )?;

    if let MutationOutcome::Resized { changed } = result.outcome {
        println!(
            "{} {} column(s) set to {} px ({} cm)",
            "✓".green(),
            changed,
            width,
            pixels_to_cm(width.get())
        );
    }
    Ok(())
}

pub fn row_height(args: RowHeightArgs, cwd: &str) -> Result<()> {
    let mut doc = Document::load(document_path(cwd, &args.document))?;

    let current = doc
        .table(args.table)
        .and_then(|table| args.rows.first().and_then(|&r| table.tr_list.get(r)))
        .map(|tr| tr.height);
    let height = DimensionDialog::row_height(current).confirm(args.cm.as_deref())?;

    let mut host = RecordingHost::new();
    let result = apply_and_save(
        &mut doc,
        Mutation::SetRowHeight {
            element_index: args.table,
            rows: TableSelection::new(args.rows),
            height,
        },
        &mut host,
    )?;

    if let MutationOutcome::Resized { changed } = result.outcome {
        println!(
            "{} {} row(s) set to {} px ({} cm)",
            "✓".green(),
            changed,
            height,
            pixels_to_cm(height.get())
        );
    }
    Ok(())
}

pub fn delete_rows(args: DeleteRowsArgs, cwd: &str) -> Result<()> {
    let mut doc = Document::load(document_path(cwd, &args.document))?;

    let mut host = RecordingHost::new();
    let result = apply_and_save(
        &mut doc,
        Mutation::DeleteRows {
            element_index: args.table,
            rows: TableSelection::new(args.rows),
        },
        &mut host,
    )?;

    match result.outcome {
        MutationOutcome::Rows(DeleteRowsOutcome::RowsDeleted {
            removed,
            cursor_row,
        }) => println!(
            "{} Deleted {} row(s), cursor on row {}",
            "✓".green(),
            removed,
            cursor_row
        ),
        MutationOutcome::Rows(DeleteRowsOutcome::TableDeleted) => println!(
            "{} All rows selected, table {} deleted",
            "✓".yellow(),
            args.table
        ),
        _ => println!("{} No rows deleted", "⚠️".yellow()),
    }
    Ok(())
}
