pub mod init;
pub mod line_spacing;
pub mod select;
pub mod show;
pub mod table;

pub use init::{init, InitArgs};
pub use line_spacing::{line_spacing, spacing_options, LineSpacingArgs, SpacingOptionsArgs};
pub use select::{select, SelectArgs};
pub use show::{show, ShowArgs};
pub use table::{col_width, delete_rows, row_height, ColWidthArgs, DeleteRowsArgs, RowHeightArgs};

use anyhow::Result;
use canvas_editor::{Document, Mutation, MutationResult, RecordingHost};
use std::path::{Path, PathBuf};

/// Resolve a document argument against the working directory
pub(crate) fn document_path(cwd: &str, document: &Path) -> PathBuf {
    PathBuf::from(cwd).join(document)
}

/// Apply one mutation to a file-backed document and write it back if it
/// changed anything
pub(crate) fn apply_and_save(
    doc: &mut Document,
    mutation: Mutation,
    host: &mut RecordingHost,
) -> Result<MutationResult> {
    let result = doc.apply(mutation, host)?;
    let saved = doc.is_dirty();
    if saved {
        doc.save()?;
    }

    tracing::debug!(
        version = result.version,
        renders = host.renders.len(),
        saved,
        "Mutation applied"
    );
    Ok(result)
}
