//! Bookkeeping export CLI - Flatten bookkeeping entities to CSV
//!
//! # Main Commands
//!
//! ```bash
//! bookkeeping-export export runs.json                  # CSV to stdout
//! bookkeeping-export export fills.json -c lhc-fills -o fills.csv
//! bookkeeping-export export runs.json -f json          # Dataset as JSON
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! bookkeeping-export headers runs.json     # Discovered columns
//! bookkeeping-export rows runs.json        # Flattened rows as JSON objects
//! ```
//!
//! Defaults can be set with `EXPORT_*` variables, also read from `.env`.

use bookkeeping_export::logs::log_error;
use bookkeeping_export::{
    ExportComponent, ExportFormat, ExportOptions, ExportOutput, Exporter, JsonFileSource,
    QuoteMode,
};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bookkeeping-export")]
#[command(about = "Export bookkeeping entities as CSV or JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a component as CSV or JSON
    Export {
        /// Input JSON file (retrieval result or array of entities)
        input: PathBuf,

        /// Component to export (runs, lhc-fills)
        #[arg(short, long, default_value = "runs")]
        component: ExportComponent,

        /// Output format (csv, json)
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit columns in reverse discovery order
        #[arg(long)]
        reverse_headers: bool,

        /// Text written for null values
        #[arg(long)]
        null_literal: Option<String>,

        /// CSV quoting (always, non-numeric, necessary)
        #[arg(long)]
        quote: Option<QuoteMode>,
    },

    /// List the columns a CSV export would have
    Headers {
        /// Input JSON file
        input: PathBuf,

        /// Component to inspect
        #[arg(short, long, default_value = "runs")]
        component: ExportComponent,
    },

    /// Show flattened rows as JSON objects, in export order
    Rows {
        /// Input JSON file
        input: PathBuf,

        /// Component to flatten
        #[arg(short, long, default_value = "runs")]
        component: ExportComponent,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export {
            input,
            component,
            format,
            output,
            reverse_headers,
            null_literal,
            quote,
        } => cmd_export(
            &input,
            component,
            format,
            output.as_deref(),
            reverse_headers,
            null_literal,
            quote,
        ),

        Commands::Headers { input, component } => cmd_headers(&input, component),

        Commands::Rows {
            input,
            component,
            output,
        } => cmd_rows(&input, component, output.as_deref()),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn cmd_export(
    input: &Path,
    component: ExportComponent,
    format: ExportFormat,
    output: Option<&Path>,
    reverse_headers: bool,
    null_literal: Option<String>,
    quote: Option<QuoteMode>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Exporting {} from: {}", component, input.display());

    let mut options = ExportOptions::from_env()?;
    if reverse_headers {
        options.reverse_headers = true;
    }
    if let Some(literal) = null_literal {
        options.null_literal = literal;
    }
    if let Some(quote) = quote {
        options.quote = quote;
    }

    let exporter = Exporter::new(JsonFileSource::new(input), options);

    match exporter.export(component, format)? {
        ExportOutput::Json { data } => {
            let json = serde_json::to_string_pretty(&data)?;
            write_output(&format!("{}\n", json), output)?;
        }
        ExportOutput::Csv { csv, filename } => {
            eprintln!("   File name: {}", filename);
            write_output(&csv, output)?;
        }
    }

    eprintln!("✨ Done!");
    Ok(())
}

fn cmd_headers(input: &Path, component: ExportComponent) -> Result<(), Box<dyn std::error::Error>> {
    let exporter = Exporter::new(JsonFileSource::new(input), ExportOptions::from_env()?);
    let table = exporter.table(component)?;

    for header in &table.headers {
        println!("{}", header);
    }
    Ok(())
}

fn cmd_rows(
    input: &Path,
    component: ExportComponent,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let exporter = Exporter::new(JsonFileSource::new(input), ExportOptions::from_env()?);
    let table = exporter.table(component)?;

    let json = serde_json::to_string_pretty(&table.to_objects())?;
    write_output(&format!("{}\n", json), output)?;
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
