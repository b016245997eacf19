//! Tabula CLI - grid evaluation and CSV recalculation tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tabula::prelude::*;

#[derive(Parser)]
#[command(name = "tabula")]
#[command(author, version, about = "Grid evaluation and CSV recalculation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a formula against a CSV file and print the result
    Eval {
        /// Input CSV file
        input: PathBuf,

        /// Formula to evaluate (leading '=' optional)
        formula: String,
    },

    /// Recalculate every '='-cell in a CSV file and write displayed values
    Calc {
        /// Input CSV file
        input: PathBuf,

        /// Output CSV file (default: overwrite input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show information about a CSV file
    Info {
        /// Input CSV file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval { input, formula } => eval(&input, &formula),
        Commands::Calc { input, output } => calc(&input, output.as_deref()),
        Commands::Info { input } => show_info(&input),
    }
}

fn eval(input: &PathBuf, formula: &str) -> Result<()> {
    let sheet = Spreadsheet::open_csv(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    let formula = formula.strip_prefix('=').unwrap_or(formula);

    match evaluate(formula, sheet.grid()) {
        Ok(value) => {
            println!("{}", value);
            Ok(())
        }
        Err(e) => {
            println!("{}", ERROR_DISPLAY);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn calc(input: &PathBuf, output: Option<&std::path::Path>) -> Result<()> {
    let mut sheet = Spreadsheet::open_csv(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    let stats = sheet.recalculate();
    eprintln!(
        "Calculated {} formulas ({} errors)",
        stats.cells_calculated, stats.errors
    );

    let out_path = output.unwrap_or(input.as_path());
    sheet
        .save_csv(out_path)
        .with_context(|| format!("Failed to write '{}'", out_path.display()))?;

    Ok(())
}

fn show_info(input: &PathBuf) -> Result<()> {
    let sheet = Spreadsheet::open_csv(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    let grid = sheet.grid();

    println!("File: {}", input.display());
    println!(
        "Size: {} rows x {} columns",
        grid.row_count(),
        grid.column_count()
    );
    println!("Non-empty cells: {}", grid.cell_total());

    if let Some(range) = grid.used_range() {
        println!("Used range: {}", range);
    } else {
        println!("Used range: empty");
    }

    let formula_count = grid
        .cells()
        .filter(|(_, _, text)| text.starts_with('='))
        .count();
    println!("Formulas: {}", formula_count);

    Ok(())
}
