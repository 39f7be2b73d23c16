use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stormcast_kernel::WeatherManager;
use tracing_subscriber::EnvFilter;

mod runner;
mod scenario;
mod scripted;

use scenario::Scenario;

#[derive(Parser)]
#[command(name = "stormcast-cli", about = "CLI driver for the stormcast weather core")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version info
    Info,
    /// Run the built-in rain/storm scenario
    Demo {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a scenario file
    Run {
        /// Path to a YAML scenario
        path: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("stormcast-cli v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Demo { json } => run(&Scenario::demo(), json)?,
        Commands::Run { path, json } => {
            let scenario = Scenario::load(&path)
                .with_context(|| format!("loading scenario {}", path.display()))?;
            run(&scenario, json)?;
        }
    }

    Ok(())
}

fn run(scenario: &Scenario, json: bool) -> anyhow::Result<()> {
    tracing::debug!(
        weathers = scenario.weathers.len(),
        steps = scenario.steps.len(),
        "running scenario"
    );
    let manager = WeatherManager::new();
    let report = runner::run(scenario, &manager);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
    } else {
        print!("{report}");
    }
    Ok(())
}
