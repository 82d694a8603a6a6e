//! icetruck: one simulated refrigerated truck running as a console device.
//!
//! Telemetry and reported properties are printed to stdout as JSON lines.
//! Logs go to stderr (`RUST_LOG=debug` for per-tick detail).  Operator
//! commands are read from stdin; see `console.rs` for the syntax.
//!
//! ```text
//! cargo run -p icetruck -- --period-ms 500 --interval 60
//! go 3
//! temp -8 2
//! recall
//! quit
//! ```

mod console;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use truck_core::{SimConfig, SimRng};
use truck_device::{ConsoleClient, TruckHandle, TruckService};
use truck_route::StraightLineOracle;
use truck_sim::TruckBuilder;

use console::{ConsoleInput, parse_line};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "icetruck")]
#[command(version)]
#[command(about = "Simulated refrigerated delivery truck reporting as a connected device")]
struct Cli {
    /// TOML file with `SimConfig` fields; missing fields keep their defaults
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Truck number reported in the truckId property
    #[arg(long)]
    truck: Option<u32>,

    /// Simulated seconds per tick
    #[arg(long)]
    interval: Option<u32>,

    /// Wall-clock milliseconds between telemetry messages
    #[arg(long)]
    period_ms: Option<u64>,

    /// Average speed of the straight-line route planner, m/s
    #[arg(long, default_value_t = 11.0)]
    speed: f64,
}

impl Cli {
    fn load_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => SimConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(truck) = self.truck {
            config.truck_number = truck;
        }
        if let Some(interval) = self.interval {
            config.tick_interval_secs = interval;
        }
        if let Some(period) = self.period_ms {
            config.telemetry_period_ms = period;
        }
        config.validate()?;
        Ok(config)
    }
}

fn read_config(path: &Path) -> Result<SimConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    info!(
        truck       = %config.truck_id(),
        seed        = config.seed,
        interval_s  = config.tick_interval_secs,
        period_ms   = config.telemetry_period_ms,
        "=== icetruck ==="
    );

    let truck = TruckBuilder::new(config.clone()).build()?;
    let oracle = Arc::new(StraightLineOracle { speed_mps: cli.speed, ..StraightLineOracle::default() });
    let (service, handle) = TruckService::new(
        truck,
        &config,
        oracle,
        ConsoleClient::stdout(),
        SimRng::new(config.seed),
    );

    let running = tokio::spawn(service.run());
    read_operator(&handle).await?;
    handle.shutdown().await?;
    running.await??;
    Ok(())
}

/// Feed stdin lines to the service until `quit` or end of input.
async fn read_operator(handle: &TruckHandle) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = match parse_line(&line) {
            Ok(Some(input)) => input,
            Ok(None) => continue,
            Err(e) => {
                warn!("{e:#}");
                continue;
            }
        };
        match input {
            ConsoleInput::Command(command) => {
                let ack = handle.command(command).await?;
                info!(command = command.name(), status = ack.status, message = ack.message, "acknowledged");
            }
            ConsoleInput::Desired(change) => handle.desired(change).await?,
            ConsoleInput::Quit => break,
        }
    }
    Ok(())
}
