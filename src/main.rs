//! salescrub CLI - clean and summarize sales data files
//!
//! # Commands
//!
//! ```bash
//! salescrub clean raw_sales_data.csv organized_sales_report.xlsx
//! salescrub inspect raw_sales_data.csv      # parse only, print raw rows
//! ```

use clap::{Parser, Subcommand};
use salescrub::{clean_sales_data, load_table};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "salescrub")]
#[command(about = "Clean and summarize tabular sales data into a formatted Excel report", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full pipeline: load, clean, summarize, and write the report workbook
    Clean {
        /// Input file (.csv, .xls or .xlsx) with Date, Product, Quantity, Price columns
        input: PathBuf,

        /// Output workbook path (.xlsx), overwritten if it exists
        output: PathBuf,
    },

    /// Parse an input file and print the raw rows as JSON
    Inspect {
        /// Input file (.csv, .xls or .xlsx)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Clean { input, output } => cmd_clean(&input, &output),
        Commands::Inspect { input, output } => cmd_inspect(&input, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_clean(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Processing: {}", input.display());

    let report = clean_sales_data(input, output)?;

    eprintln!("   Rows loaded: {}", report.loaded);
    eprintln!("   Rows kept: {} ({} dropped)", report.clean.len(), report.dropped);
    eprintln!(
        "   Summaries: {} products, {} months",
        report.by_product.rows.len(),
        report.by_month.rows.len()
    );
    eprintln!(
        "✅ Organized and summarized data saved to '{}'",
        output.display()
    );

    Ok(())
}

fn cmd_inspect(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing: {}", input.display());

    let table = load_table(input)?;
    eprintln!("   Columns: {}", table.headers.join(", "));
    eprintln!("✅ Parsed {} rows", table.len());

    let json = serde_json::to_string_pretty(&table)?;
    write_output(&json, output)?;

    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
