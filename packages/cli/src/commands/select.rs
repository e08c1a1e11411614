use super::{apply_and_save, document_path};
use crate::config::Config;
use anyhow::{anyhow, Result};
use canvas_editor::{
    ControlRuleOption, Document, Element, Mutation, MutationOutcome, RadioParticle,
    RecordingHost, SelectOutcome,
};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Document JSON file
    pub document: PathBuf,

    /// Element index of the clicked option
    #[arg(short, long)]
    pub element: usize,

    /// Groups to treat as disabled (repeatable)
    #[arg(long = "disabled")]
    pub disabled_groups: Vec<String>,

    /// Select even when the group is disabled
    #[arg(long)]
    pub ignore_disabled: bool,
}

/// Click an option of a single-choice group
pub fn select(args: SelectArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut doc = Document::load(document_path(cwd, &args.document))?;

    // Clicking an option sends its own code
    let code = doc
        .elements()
        .get(args.element)
        .and_then(option_code)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Element {} has no option code", args.element))?;

    let mut host = RecordingHost::new();
    host.disabled_groups.extend(args.disabled_groups);

    let result = apply_and_save(
        &mut doc,
        Mutation::SetControlSelect {
            element_index: args.element,
            code,
            options: ControlRuleOption {
                ignore_disabled_rule: args.ignore_disabled,
            },
        },
        &mut host,
    )?;

    let particle = RadioParticle::new(config.editor.control.radio.style);
    match result.outcome {
        MutationOutcome::Control(SelectOutcome::Applied { selected, members }) => {
            match selected {
                Some(code) => println!("{} Selected {} ({} options)", "✓".green(), code, members),
                None => println!("{} Cleared group ({} options)", "✓".green(), members),
            }
            let group = doc.elements().get(args.element).and_then(|e| e.group_id());
            for element in doc.elements().iter().filter(|e| e.group_id() == group) {
                println!(
                    "   {} {}",
                    particle.glyph(element.is_selected()),
                    option_code(element).unwrap_or("?")
                );
            }
        }
        MutationOutcome::Control(SelectOutcome::Skipped(reason)) => {
            println!("{} Selection skipped: {:?}", "⚠️".yellow(), reason)
        }
        _ => {}
    }
    Ok(())
}

fn option_code(element: &Element) -> Option<&str> {
    element.radio.as_ref()?.code.as_deref()
}
