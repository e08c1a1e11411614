mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    col_width, delete_rows, init, line_spacing, row_height, select, show, spacing_options,
    ColWidthArgs, DeleteRowsArgs, InitArgs, LineSpacingArgs, RowHeightArgs, SelectArgs, ShowArgs,
    SpacingOptionsArgs,
};
use config::Config;
use tracing_subscriber::EnvFilter;

/// Canvas CLI - headless table, control and spacing edits on canvas documents
#[derive(Parser, Debug)]
#[command(name = "canvas")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a canvas.config.json and a sample document
    Init(InitArgs),

    /// Print a document's elements
    Show(ShowArgs),

    /// Set the width of table columns, in centimeters
    ColWidth(ColWidthArgs),

    /// Set the height of table rows, in centimeters
    RowHeight(RowHeightArgs),

    /// Delete table rows (the whole table when every row is selected)
    DeleteRows(DeleteRowsArgs),

    /// Click an option of a single-choice group
    Select(SelectArgs),

    /// Set line spacing over a range of elements
    LineSpacing(LineSpacingArgs),

    /// List the line spacing menu
    SpacingOptions(SpacingOptionsArgs),
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();

    let config = Config::load(&cwd)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Show(args) => show(args, &cwd),
        Command::ColWidth(args) => col_width(args, &cwd),
        Command::RowHeight(args) => row_height(args, &cwd),
        Command::DeleteRows(args) => delete_rows(args, &cwd),
        Command::Select(args) => select(args, &cwd),
        Command::LineSpacing(args) => line_spacing(args, &cwd),
        Command::SpacingOptions(args) => spacing_options(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
