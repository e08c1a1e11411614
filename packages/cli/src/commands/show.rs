use super::document_path;
use crate::config::Config;
use anyhow::Result;
use canvas_editor::{pixels_to_cm, Document, Element, ElementType, RadioParticle, Table};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Document JSON file
    pub document: PathBuf,
}

pub fn show(args: ShowArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let doc = Document::load(document_path(cwd, &args.document))?;
    let particle = RadioParticle::new(config.editor.control.radio.style);

    println!("📄 {} {}", "Document".bright_blue().bold(), args.document.display());
    println!("   Elements: {}", doc.elements().len());
    println!("   Line spacing: {}", doc.current_line_spacing());
    println!();

    for (index, element) in doc.elements().iter().enumerate() {
        println!("  {} {}", format!("[{index}]").dimmed(), describe(element, &particle));
    }

    Ok(())
}

/// One-line text preview of an element
pub(crate) fn describe(element: &Element, particle: &RadioParticle) -> String {
    let mut line = if let Some(table) = &element.table {
        describe_table(table)
    } else if element.is_exclusive_choice() {
        let code = element
            .radio
            .as_ref()
            .and_then(|radio| radio.code.as_deref())
            .unwrap_or("?");
        format!(
            "{} {} group={}",
            particle.glyph(element.is_selected()),
            code,
            element.group_id().unwrap_or("-")
        )
    } else {
        format!("{} {:?}", kind_name(element.kind), element.value)
    };

    if let Some(spacing) = element.line_spacing {
        line.push_str(&format!(" spacing={spacing}"));
    }
    line
}

fn describe_table(table: &Table) -> String {
    let widths = join(table.widths());
    let widths_cm = join(table.widths().into_iter().map(pixels_to_cm));
    let heights = join(table.heights());

    format!(
        "table {}×{} widths={} px ({} cm) heights={} px",
        table.colgroup.len(),
        table.tr_list.len(),
        widths,
        widths_cm,
        heights
    )
}

fn join<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn kind_name(kind: ElementType) -> &'static str {
    match kind {
        ElementType::Text => "text",
        ElementType::Table => "table",
        ElementType::Radio => "radio",
        ElementType::Checkbox => "checkbox",
        ElementType::Control => "control",
        ElementType::Image => "image",
        ElementType::Separator => "separator",
        ElementType::PageBreak => "page-break",
    }
}
