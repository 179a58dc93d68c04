use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use espressoqueue::client::Client;
use espressoqueue::clock::SystemClock;
use espressoqueue::population;

#[derive(Parser)]
#[command(
    name = "espressoqueue",
    about = "Two-class espresso machine queue simulator",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print the service log
    Run {
        /// Number of clients to queue up
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(10..=500))]
        count: u32,

        /// Time to serve one client, in milliseconds
        #[arg(long, default_value_t = 100)]
        service_ms: u64,

        /// Seed for a reproducible population
        #[arg(long)]
        seed: Option<u64>,

        /// Load clients from a JSON file instead of generating them
        #[arg(long)]
        input: Option<PathBuf>,

        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a random population and print it as JSON
    Generate {
        /// Number of clients to generate
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(10..=500))]
        count: u32,

        /// Per-client service time used to size the busy horizon, in milliseconds
        #[arg(long, default_value_t = 100)]
        service_ms: u64,

        /// Seed for a reproducible population
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn build_population(count: u32, service_time: Duration, seed: Option<u64>) -> Vec<Client> {
    let clock = SystemClock;
    match seed {
        Some(seed) => population::generate_seeded(count, service_time, &clock, seed),
        None => population::generate(count, service_time, &clock),
    }
}

fn load_population(path: &PathBuf) -> Result<Vec<Client>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open population file {}", path.display()))?;
    let clients: Vec<Client> = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse population file {}", path.display()))?;
    Ok(clients)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            count,
            service_ms,
            seed,
            input,
            json,
        } => {
            let service_time = Duration::from_millis(service_ms);

            let clients = match input {
                Some(path) => {
                    tracing::info!(path = %path.display(), "Loading population from file");
                    load_population(&path)?
                }
                None => {
                    tracing::info!(%count, "Generating random population");
                    build_population(count, service_time, seed)
                }
            };

            println!("Queueing up {} clients for espresso.", clients.len());
            let report = espressoqueue::run_simulation(clients, service_time).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for event in &report.events {
                    println!(
                        "Made espresso for {}client {}",
                        if event.was_priority { "busy " } else { "" },
                        event.client_id
                    );
                }
                if report.rejected > 0 {
                    println!("Rejected {} clients with invalid priority windows.", report.rejected);
                }
                println!(
                    "No more clients in queue! Served {} in total.",
                    report.events.len()
                );
            }
        }
        Commands::Generate {
            count,
            service_ms,
            seed,
        } => {
            let clients = build_population(count, Duration::from_millis(service_ms), seed);
            println!("{}", serde_json::to_string_pretty(&clients)?);
        }
    }

    Ok(())
}
