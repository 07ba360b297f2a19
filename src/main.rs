use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cellprobe::{band, capture, config, export, model::Technology};

#[derive(Debug, Parser)]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Turn a tick capture into a bulk ingest request body
    Normalize { input: Option<PathBuf> },
    /// Turn a tick capture into CSV rows
    ExportCsv { input: Option<PathBuf> },
    /// Look up band and downlink frequency of a channel number
    Band { technology: Technology, channel: i32 },
}

fn open(input: Option<&Path>) -> Result<Box<dyn BufRead>> {
    Ok(match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_or_default(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Normalize { input } => {
            let batch = capture::read(open(input.as_deref())?, config.api_level)?;
            if config.pretty {
                serde_json::to_writer_pretty(&mut stdout, &batch)?;
            } else {
                serde_json::to_writer(&mut stdout, &batch)?;
            }
            writeln!(stdout)?;
        }
        Command::ExportCsv { input } => {
            let batch = capture::read(open(input.as_deref())?, config.api_level)?;
            export::write_csv(stdout, &batch.measurements)?;
        }
        Command::Band {
            technology,
            channel,
        } => {
            let info = band::describe(technology, channel);
            serde_json::to_writer(&mut stdout, &info)?;
            writeln!(stdout)?;
        }
    };

    Ok(())
}
