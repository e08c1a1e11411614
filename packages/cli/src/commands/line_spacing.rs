use super::{apply_and_save, document_path};
use crate::config::Config;
use anyhow::Result;
use canvas_editor::{
    line_spacing::is_valid_line_spacing, Document, Mutation, MutationOutcome, Range,
    RecordingHost, MAX_LINE_SPACING, MIN_LINE_SPACING,
};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct LineSpacingArgs {
    /// Document JSON file
    pub document: PathBuf,

    /// Spacing multiplier
    pub spacing: f64,

    /// First element of the range (defaults to the document selection)
    #[arg(long)]
    pub start: Option<usize>,

    /// Last element of the range (inclusive)
    #[arg(long)]
    pub end: Option<usize>,
}

#[derive(Args, Debug)]
pub struct SpacingOptionsArgs {
    /// Mark the spacing at this document's selection
    #[arg(short, long)]
    pub document: Option<PathBuf>,
}

pub fn line_spacing(args: LineSpacingArgs, cwd: &str) -> Result<()> {
    let mut doc = Document::load(document_path(cwd, &args.document))?;

    let range = match (args.start, args.end) {
        (None, None) => None,
        (start, end) => Some(Range {
            start_index: start,
            end_index: end,
            table: None,
        }),
    };

    let mut host = RecordingHost::new();
    let result = apply_and_save(
        &mut doc,
        Mutation::SetLineSpacing {
            spacing: args.spacing,
            range,
        },
        &mut host,
    )?;

    match result.outcome {
        MutationOutcome::LineSpacing { updated } if updated > 0 => println!(
            "{} Line spacing {} on {} element(s)",
            "✓".green(),
            args.spacing,
            updated
        ),
        _ if !is_valid_line_spacing(args.spacing) => println!(
            "{} Line spacing must be between {} and {}, nothing changed",
            "⚠️".yellow(),
            MIN_LINE_SPACING,
            MAX_LINE_SPACING
        ),
        _ => println!("{} Nothing selected, nothing changed", "⚠️".yellow()),
    }
    Ok(())
}

/// List the line spacing menu
pub fn spacing_options(args: SpacingOptionsArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let current = match &args.document {
        Some(document) => Some(Document::load(document_path(cwd, document))?.current_line_spacing()),
        None => None,
    };

    println!("{}", "Line spacing".bright_blue().bold());
    for option in &config.editor.line_spacing_options {
        if current == Some(option.value) {
            println!("  {} {}", "●".green(), option.label.bold());
        } else {
            println!("    {}", option.label);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas_editor::{Element, Table};

    fn write_document(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("doc.json");
        let mut doc = Document::new(vec![
            Element::text("a"),
            Element::table(Table::with_dimensions(&[100], &[30, 40])),
            Element::text("b"),
        ]);
        doc.set_range(Range::collapsed(2));
        std::fs::write(&path, doc.to_json().unwrap()).unwrap();
        path
    }

    #[test]
    fn test_explicit_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_document(dir.path());

        line_spacing(
            LineSpacingArgs {
                document: path.clone(),
                spacing: 1.5,
                start: Some(0),
                end: Some(1),
            },
            &dir.path().display().to_string(),
        )
        .unwrap();

        let doc = Document::load(&path).unwrap();
        let spacings: Vec<_> = doc.elements().iter().map(|e| e.line_spacing).collect();
        assert_eq!(spacings, vec![Some(1.5), Some(1.5), None]);
        assert_eq!(doc.table(1).unwrap().heights(), vec![30, 40]);
    }

    #[test]
    fn test_document_selection_is_the_default_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_document(dir.path());

        line_spacing(
            LineSpacingArgs {
                document: path.clone(),
                spacing: 2.0,
                start: None,
                end: None,
            },
            &dir.path().display().to_string(),
        )
        .unwrap();

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.current_line_spacing(), 2.0);
        assert_eq!(doc.elements()[0].line_spacing, None);
    }

    #[test]
    fn test_out_of_range_spacing_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_document(dir.path());
        let before = std::fs::read_to_string(&path).unwrap();

        line_spacing(
            LineSpacingArgs {
                document: path.clone(),
                spacing: 4.0,
                start: Some(0),
                end: Some(2),
            },
            &dir.path().display().to_string(),
        )
        .unwrap();

        let doc = Document::load(&path).unwrap();
        assert!(doc.elements().iter().all(|e| e.line_spacing.is_none()));
        // A no-op never rewrites the file
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }
}
