//! Datagrid CLI
//!
//! Command-line front end for the grid engine.
//!
//! # Commands
//!
//! - `view` - Print one page of a CSV or JSON file
//! - `export` - Write the filtered and sorted view to a date-stamped file
//! - `validate` - Check every cell against a rules file

mod commands;
mod error;

use clap::{Args, Parser, Subcommand};
use commands::ViewOptions;
use datagrid_codec::ExchangeFormat;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tabular data viewer, exporter and validator.
#[derive(Parser)]
#[command(name = "datagrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ViewArgs {
    /// Input file (.csv or .json)
    #[arg(short, long)]
    input: PathBuf,

    /// Free-text search across all columns
    #[arg(short, long)]
    search: Option<String>,

    /// Field to sort by
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    desc: bool,
}

impl ViewArgs {
    fn options(&self) -> ViewOptions {
        ViewOptions {
            search: self.search.clone(),
            sort: self.sort.clone(),
            desc: self.desc,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of the view
    View {
        #[command(flatten)]
        view: ViewArgs,

        /// Page to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Rows per page
        #[arg(long)]
        page_size: Option<usize>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Export the view to grid-export-YYYY-MM-DD.<ext>
    Export {
        #[command(flatten)]
        view: ViewArgs,

        /// Export format (csv, json)
        #[arg(short, long, default_value = "csv")]
        format: ExchangeFormat,

        /// Directory to write into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Validate every cell against a rules file
    Validate {
        /// Input file (.csv or .json)
        #[arg(short, long)]
        input: PathBuf,

        /// JSON object of field -> rule
        #[arg(short, long)]
        rules: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::View {
            view,
            page,
            page_size,
            format,
        } => {
            info!(input = %view.input.display(), "view");
            commands::view::run(&view.input, &view.options(), page, page_size, &format)?;
        }
        Commands::Export {
            view,
            format,
            output,
        } => {
            info!(input = %view.input.display(), %format, "export");
            commands::export::run(&view.input, &view.options(), format, &output)?;
        }
        Commands::Validate { input, rules } => {
            info!(input = %input.display(), rules = %rules.display(), "validate");
            commands::validate::run(&input, &rules)?;
        }
        Commands::Version => {
            println!("datagrid v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
