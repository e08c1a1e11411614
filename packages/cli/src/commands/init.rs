use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use canvas_editor::{Document, Element, RadioStyle, Table};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

pub const SAMPLE_DOCUMENT_NAME: &str = "document.json";

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Radio style (round, square)
    #[arg(short, long, default_value = "round")]
    pub style: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let style = match args.style.as_str() {
        "round" => RadioStyle::Round,
        "square" => RadioStyle::Square,
        other => {
            return Err(anyhow::anyhow!(
                "Invalid radio style: {}. Use: round or square",
                other
            ));
        }
    };

    println!("{}", "📝 Initializing canvas workspace...".bright_blue().bold());

    let mut config = Config::default();
    config.editor.control.radio.style = style;
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let document_path = PathBuf::from(cwd).join(SAMPLE_DOCUMENT_NAME);
    if !document_path.exists() {
        fs::write(&document_path, sample_document().to_json()?)?;
        println!("  {} Created {}", "✓".green(), SAMPLE_DOCUMENT_NAME);
    }

    println!();
    println!("{}", "✅ Workspace initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: canvas show {}", SAMPLE_DOCUMENT_NAME);
    println!("  2. Run: canvas col-width {} --table 1 --columns 1 --cm 2", SAMPLE_DOCUMENT_NAME);

    Ok(())
}

/// A heading, a 3×3 table and a two-option group
fn sample_document() -> Document {
    Document::new(vec![
        Element::text("Order form"),
        Element::table(Table::with_dimensions(&[100, 110, 120], &[30, 30, 30])),
        Element::text("Express delivery"),
        Element::radio("express", "yes", false),
        Element::radio("express", "no", true),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_config_and_sample() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        init(
            InitArgs {
                style: "square".to_string(),
                force: false,
            },
            &cwd,
        )
        .unwrap();

        let config = Config::load(&cwd).unwrap();
        assert_eq!(config.editor.control.radio.style, RadioStyle::Square);

        let doc = Document::load(dir.path().join(SAMPLE_DOCUMENT_NAME)).unwrap();
        assert_eq!(doc.elements().len(), 5);
        assert_eq!(doc.table(1).map(Table::width), Some(330));
    }

    #[test]
    fn test_init_rejects_unknown_style() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        let result = init(
            InitArgs {
                style: "hexagon".to_string(),
                force: false,
            },
            &cwd,
        );
        assert!(result.is_err());
        assert!(!dir.path().join(DEFAULT_CONFIG_NAME).exists());
    }
}
