//! `hoi4-script` CLI — dump Hearts of Iron IV script files as JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Decode one file (or stdin) to pretty-printed JSON
//! hoi4-script parse -i common/units/infantry.txt
//! cat infantry.txt | hoi4-script parse --compact
//!
//! # Decode every .txt file in a directory, keyed by file name
//! hoi4-script dir "$HOI4/common/units" -o units.json
//!
//! # Sort unit families into air / land / sea buckets
//! hoi4-script units "$HOI4"
//!
//! # More logging
//! RUST_LOG=debug hoi4-script dir "$HOI4/common/units"
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hoi4_script_core::{InstallLayout, ParseOptions};
use serde_json::Value as Json;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hoi4-script",
    version,
    about = "Decode Hearts of Iron IV script files into JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum block nesting depth before decoding is aborted
    #[arg(long, global = true, default_value_t = hoi4_script_core::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print compact JSON instead of pretty-printed JSON
    #[arg(long, global = true)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a single script file
    Parse {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Decode every .txt file in a directory
    Dir {
        /// Directory to scan (not recursive)
        dir: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Classify the unit definitions of an installation into air, land and sea
    Units {
        /// Game or mod root containing common/units
        root: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let options = ParseOptions::default().with_max_depth(cli.max_depth);

    match cli.command {
        Commands::Parse { input, output } => {
            let value = match input.as_deref() {
                Some(path) => hoi4_script_core::decode_file_with(path, &options),
                None => hoi4_script_core::decode_reader_with(io::stdin().lock(), &options),
            }
            .context("Failed to decode script")?;
            write_output(output.as_deref(), &render(&value.to_json(), cli.compact)?)?;
        }
        Commands::Dir { dir, output } => {
            let parsed = hoi4_script_core::decode_dir_with(&dir, &options)
                .with_context(|| format!("Failed to read directory: {}", dir))?;
            let json: serde_json::Map<String, Json> = parsed
                .files
                .iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect();
            write_output(output.as_deref(), &render(&Json::Object(json), cli.compact)?)?;
            report_failures(&parsed.failures)?;
        }
        Commands::Units { root, output } => {
            let layout = InstallLayout::new(&root);
            let classification = hoi4_script_core::classify_install_with(&layout, &options)
                .with_context(|| format!("Failed to read units of installation: {}", root))?;
            let json = serde_json::to_value(&classification.buckets)?;
            write_output(output.as_deref(), &render(&json, cli.compact)?)?;
            report_failures(&classification.failures)?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn render(json: &Json, compact: bool) -> Result<String> {
    let mut out = if compact {
        serde_json::to_string(json)?
    } else {
        serde_json::to_string_pretty(json)?
    };
    out.push('\n');
    Ok(out)
}

/// Print per-file failures and fail the run if there were any.
fn report_failures<E: std::fmt::Display>(
    failures: &std::collections::BTreeMap<String, E>,
) -> Result<()> {
    if failures.is_empty() {
        return Ok(());
    }
    for error in failures.values() {
        eprintln!("{}", error);
    }
    anyhow::bail!("{} file(s) could not be decoded", failures.len());
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
