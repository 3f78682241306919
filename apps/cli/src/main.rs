//! Plotvault CLI - inspect and export versioned plot containers.
//!
//! Provides the `pv` command for listing the namespaces of a container
//! file written by [`plotvault_core::PlotWriter`] and exporting a chosen
//! namespace's plots to files.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use plotvault_core::config::DEFAULT_CONTAINER_FILE;

/// Plotvault CLI - versioned plot store inspector
#[derive(Parser, Debug)]
#[command(
    name = "pv",
    version,
    about = "Plotvault - list and export versioned plot snapshots",
    long_about = "Plotvault (pv) reads a container file of versioned plot snapshots.\n\
                  Use `list` to see saved namespaces and `get` to export one of them."
)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the namespaces stored in a container file
    ///
    /// Prints one line per namespace: index, tagged marker, key, and
    /// comment. Tagged namespaces show their tag message on the next line.
    List {
        /// Container file
        #[arg(default_value = DEFAULT_CONTAINER_FILE)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export every plot of one namespace to an output directory
    ///
    /// The id is a namespace key or a 1-based index as shown by `list`.
    /// An exact key match wins over an index.
    Get {
        /// Namespace key or 1-based index
        id: String,

        /// Container file
        #[arg(default_value = DEFAULT_CONTAINER_FILE)]
        file: PathBuf,

        /// Add an output file type: svg, json, or csv (default: svg)
        #[arg(short = 't', long = "type", value_name = "FMT")]
        types: Vec<String>,

        /// Output directory; {key} expands to the namespace key
        #[arg(short = 'o', value_name = "DIR")]
        outdir: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::List { file, json } => commands::list::execute(&file, json),
        Command::Get { id, file, types, outdir } => {
            commands::get::execute(&id, &file, &types, outdir.as_deref())
        }
    }
}
