//! sheet-scribe CLI - character listing report generator

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use sheet_scribe::prelude::*;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "scribe")]
#[command(
    author,
    version,
    about = "Write a character listing (JSON) as a spreadsheet report"
)]
struct Cli {
    /// Input JSON document (default: stdin)
    input: Option<PathBuf>,

    /// Output spreadsheet file
    #[arg(short, long, default_value = "test.xlsx")]
    output: PathBuf,

    /// Name of the workbook's first sheet
    #[arg(long, default_value = "General")]
    default_sheet: String,

    /// Name of the report sheet
    #[arg(short, long, default_value = "Demo")]
    sheet: String,

    /// Row of the header (1-based)
    #[arg(long, default_value = "2")]
    start_row: u32,

    /// Label written for true values
    #[arg(long)]
    yes: Option<String>,

    /// Label written for false values
    #[arg(long)]
    no: Option<String>,
}

/// One entry of the listing
#[derive(Debug, Clone, Deserialize)]
struct Character {
    id: i64,
    name: String,
    status: String,
    species: String,
    #[serde(rename = "type")]
    kind: String,
    gender: String,
}

#[derive(Debug, Deserialize)]
struct Response {
    results: Vec<Character>,
}

const HEADER: [&str; 6] = ["ID", "Genero", "Especie", "Tipo", "Estatus", "Nombre"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    let raw = read_input(cli.input.as_deref())?;
    let response: Response =
        serde_json::from_str(&raw).context("Failed to parse character listing")?;

    let mut options = WorkbookOptions::default();
    if let Some(yes) = cli.yes {
        options.boolean_labels.yes = yes;
    }
    if let Some(no) = cli.no {
        options.boolean_labels.no = no;
    }

    let mut workbook = Workbook::with_options(&cli.default_sheet, cli.start_row, options)
        .context("Failed to create workbook")?;
    let sheet = workbook
        .new_sheet(&cli.sheet, cli.start_row)
        .with_context(|| format!("Failed to add sheet '{}'", cli.sheet))?;

    build_report(&mut workbook, sheet, &response.results)?;

    workbook
        .save_file(&cli.output)
        .with_context(|| format!("Failed to write '{}'", cli.output.display()))?;
    eprintln!(
        "Wrote {} characters to '{}'",
        response.results.len(),
        cli.output.display()
    );

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read stdin")?;
            Ok(raw)
        }
    }
}

/// Header, one row per character, money format on the ID column, a subtotal
/// above the header and the header rows frozen
fn build_report<E: DocumentEngine>(
    workbook: &mut Workbook<E>,
    sheet: SheetId,
    characters: &[Character],
) -> Result<()> {
    let styles = workbook.styles();
    let mut sheet = workbook.sheet(sheet)?;

    sheet.add_row_header(HEADER).context("Failed to write header")?;
    for c in characters {
        sheet
            .add_row([
                CellValue::from(c.id),
                c.gender.as_str().into(),
                c.species.as_str().into(),
                c.kind.as_str().into(),
                c.status.as_str().into(),
                c.name.as_str().into(),
            ])
            .with_context(|| format!("Failed to write character {}", c.id))?;
    }

    sheet.set_column_style(styles.money, "A")?;
    sheet.subtotal("A1", "A")?;
    sheet.set_cell_value("B1", "total")?;
    sheet.freeze(2, 0)?;
    Ok(())
}
