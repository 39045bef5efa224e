//! Convert a single statement file into a transaction table.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use stmtx_core::models::output_path_for;
use stmtx_core::pdf::{PageSource, PdfExtractor, TextPages};
use stmtx_core::statement::{parse_document_with, ParseOutcome};
use stmtx_core::{OutputError, StmtConfig};

/// Exit status for usage errors and unreadable input.
pub const EXIT_INPUT: u8 = 1;

/// Exit status when the table could not be written.
pub const EXIT_OUTPUT: u8 = 2;

/// Arguments for a conversion.
#[derive(Args)]
pub struct ConvertArgs {
    /// Statement file (PDF, or text with form-feed page breaks)
    #[arg(required = true)]
    input: PathBuf,

    /// Year the statement starts in
    #[arg(required = true)]
    year: String,

    /// Output file (default: input path with the configured extension)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Exit status for a failed run.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<OutputError>().is_some() {
        EXIT_OUTPUT
    } else {
        EXIT_INPUT
    }
}

pub fn run(args: ConvertArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        StmtConfig::from_file(path)?
    } else {
        StmtConfig::default()
    };
    let delimiter = config.output.delimiter_byte()?;

    let base_year = parse_year(&args.year);

    println!("Processing {}", args.input.display());
    let source = open_source(&args.input, &config)?;
    let outcome = convert_pages(source.as_ref(), base_year)?;

    println!("Number of rows found: {}", outcome.table.len());
    if !outcome.skipped.is_empty() {
        eprintln!(
            "{} Skipped {} rows that could not be parsed",
            style("!").yellow(),
            outcome.skipped.len()
        );
    }

    let summary = outcome.table.summary();
    match (summary.first_date, summary.last_date) {
        (Some(first), Some(last)) => info!(
            "{} transactions from {} to {}, net {}",
            summary.transactions, first, last, summary.net_total
        ),
        _ => info!("{} transactions, net {}", summary.transactions, summary.net_total),
    }

    let output_path = args
        .output
        .unwrap_or_else(|| output_path_for(&args.input, &config.output.extension));
    outcome
        .table
        .save(&output_path, delimiter)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    println!(
        "{} Saved to file {}",
        style("✓").green(),
        output_path.display()
    );

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Parse the year argument. A bad value is reported and year 0 is used.
fn parse_year(arg: &str) -> i32 {
    match arg.trim().parse() {
        Ok(year) => year,
        Err(_) => {
            eprintln!(
                "{} Could not convert year to number: {}",
                style("!").yellow(),
                arg
            );
            0
        }
    }
}

fn open_source(path: &Path, config: &StmtConfig) -> anyhow::Result<Box<dyn PageSource>> {
    // Check input file exists
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => {
            let data = fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let mut extractor = PdfExtractor::new().with_password(config.pdf.password.clone());
            extractor.load(&data)?;
            debug!("PDF has {} pages", extractor.page_count());
            Ok(Box::new(extractor))
        }
        "txt" => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(Box::new(TextPages::from_text(&text)))
        }
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    }
}

fn convert_pages(source: &dyn PageSource, base_year: i32) -> anyhow::Result<ParseOutcome> {
    let pb = ProgressBar::new(source.page_count() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} pages")?
            .progress_chars("##-"),
    );

    let outcome = parse_document_with(source, base_year, |_, _| pb.inc(1))
        .context("failed to read the statement")?;

    pb.finish_and_clear();
    Ok(outcome)
}
