//! Command-line front end for the dispatch engine.

use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dispatch_core::config::DispatchConfig;
use dispatch_core::orchestrator::{AssignmentOrchestrator, DispatchReport};
use dispatch_core::sample::{generate_snapshot, SampleParams};
use dispatch_core::snapshot::{write_missions_json, DispatchSnapshot};
use tracing::info;

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "dispatch",
    about = "Match rescue incidents to responders for one dispatch cycle",
    long_about = "Loads a snapshot of incidents, responders, destinations and priority\n\
                  statistics, runs one dispatch cycle and writes the resulting missions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one dispatch cycle over a snapshot file
    Run {
        /// Snapshot JSON file
        #[arg(long, short)]
        input: PathBuf,
        /// Optional dispatch config JSON (partial documents allowed)
        #[arg(long, env = "DISPATCH_CONFIG")]
        config: Option<PathBuf>,
        /// Write missions here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Write the full report (missions, summary, rejected records)
        #[arg(long)]
        summary: bool,
    },
    /// Generate a seeded sample snapshot
    Sample {
        #[arg(long, default_value_t = 25)]
        incidents: usize,
        #[arg(long, default_value_t = 40)]
        responders: usize,
        #[arg(long, default_value_t = 3)]
        destinations: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Leave priority statistics out of the snapshot
        #[arg(long)]
        no_priority_stats: bool,
        /// Write the snapshot here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

// ── commands ───────────────────────────────────────────────────────

pub fn execute(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Run {
            input,
            config,
            output,
            summary,
        } => {
            let config = match config {
                Some(path) => load_config(&path)?,
                None => DispatchConfig::default(),
            };
            let report = run_dispatch(&input, config)?;
            let mut writer = open_output(output.as_deref())?;
            if summary {
                serde_json::to_writer_pretty(&mut writer, &report)?;
            } else {
                write_missions_json(&report.missions, &mut writer)?;
            }
            writer.flush()?;
            Ok(())
        }
        Commands::Sample {
            incidents,
            responders,
            destinations,
            seed,
            no_priority_stats,
            output,
        } => {
            let mut params = SampleParams::default()
                .with_seed(seed)
                .with_incidents(incidents)
                .with_responders(responders)
                .with_destinations(destinations);
            if no_priority_stats {
                params = params.without_priority_stats();
            }
            let snapshot = generate_snapshot(&params);
            let mut writer = open_output(output.as_deref())?;
            writer.write_all(snapshot.to_json_pretty()?.as_bytes())?;
            writer.flush()?;
            Ok(())
        }
    }
}

pub fn load_config(path: &Path) -> Result<DispatchConfig, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    Ok(DispatchConfig::from_json_str(&contents)?)
}

/// Load a snapshot and run one cycle over it.
pub fn run_dispatch(input: &Path, config: DispatchConfig) -> Result<DispatchReport, Box<dyn Error>> {
    let snapshot = DispatchSnapshot::from_path(input)?;
    info!(
        incidents = snapshot.incidents.len(),
        responders = snapshot.responders.len(),
        destinations = snapshot.destinations.len(),
        skipped = snapshot.skipped_records,
        "snapshot loaded"
    );
    let report = AssignmentOrchestrator::new(config).dispatch(&snapshot)?;
    Ok(report)
}

fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}
