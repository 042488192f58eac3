//! Crypto market simulator viewer - main binary.
//!
//! Sends simulation runs to the simulator service and shows the results:
//! summary statistics, the price chart, agent balances and the trade log.
//!
//! ```text
//! ┌────────────────┐   POST /api/simulate   ┌────────────────┐
//! │  TUI / report  │ ─────────────────────► │  Simulation    │
//! │                │ ◄───────────────────── │  service       │
//! └────────────────┘    statistics, ...     └────────────────┘
//! ```
//!
//! # Headless Mode
//!
//! Run `--headless` to skip the TUI, run one simulation with the configured
//! inputs and print a plain-text report. Useful for scripts and CI.

mod config;

use std::fs::OpenOptions;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use client::{RestClient, SimulationService};
use tokio::runtime::Runtime;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tui::{Dashboard, SimulationController, TuiApp, ViewState, render_report};

pub use config::ViewerConfig;

/// Crypto market simulator viewer
#[derive(Parser, Debug)]
#[command(name = "crypto-sim-viewer")]
#[command(about = "Run agent-based crypto market simulations and inspect the results")]
#[command(version)]
struct Args {
    /// Base URL of the simulation service
    #[arg(long, env = "SIM_SERVICE_URL")]
    service_url: Option<String>,

    /// Initial number of cycles in the form
    #[arg(long, env = "SIM_CYCLES")]
    cycles: Option<u32>,

    /// Initial asset price in the form
    #[arg(long, env = "SIM_INITIAL_PRICE")]
    initial_price: Option<f64>,

    /// Run once without the TUI and print a report
    #[arg(long, env = "SIM_HEADLESS")]
    headless: bool,

    /// TUI frame rate (frames per second)
    #[arg(long, env = "SIM_FRAME_RATE")]
    frame_rate: Option<u64>,

    /// Request timeout in seconds (default: no timeout)
    #[arg(long, env = "SIM_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Log file used while the TUI is running
    #[arg(long, env = "SIM_LOG_FILE")]
    log_file: Option<String>,
}

impl Args {
    fn into_config(self) -> ViewerConfig {
        let mut config = ViewerConfig::new().headless(self.headless);
        if let Some(url) = self.service_url {
            config = config.service_url(url);
        }
        if let Some(cycles) = self.cycles {
            config = config.cycles(cycles);
        }
        if let Some(price) = self.initial_price {
            config = config.initial_price(price);
        }
        if let Some(fps) = self.frame_rate {
            config = config.frame_rate(fps);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.timeout_secs(secs);
        }
        if let Some(path) = self.log_file {
            config = config.log_file(path);
        }
        config
    }
}

/// Install the tracing subscriber.
///
/// Headless runs log to stderr; the TUI owns the terminal, so it logs to a file.
fn init_logging(config: &ViewerConfig) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    if config.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)
            .with_context(|| format!("failed to open log file {}", config.log_file.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
    Ok(())
}

fn build_client(config: &ViewerConfig) -> Result<RestClient> {
    match config.timeout {
        Some(timeout) => RestClient::with_timeout(&config.service_url, timeout)
            .context("failed to build HTTP client"),
        None => Ok(RestClient::new(&config.service_url)),
    }
}

/// Run one simulation and print the report. Returns whether it succeeded.
fn run_headless(
    runtime: &Runtime,
    service: &dyn SimulationService,
    config: &ViewerConfig,
) -> Result<bool> {
    let mut dashboard = Dashboard::new(config.form());
    let mut controller = SimulationController::new();

    runtime
        .block_on(controller.run(service, &mut dashboard))
        .context("simulation was not submitted")?;

    let report = render_report(&dashboard);
    if controller.state() == ViewState::Failed {
        eprint!("{}", report);
        return Ok(false);
    }
    print!("{}", report);
    Ok(true)
}

fn main() -> Result<ExitCode> {
    let config = Args::parse().into_config();
    init_logging(&config)?;

    info!(
        service_url = %config.service_url,
        headless = config.headless,
        "starting viewer"
    );

    let runtime = Runtime::new().context("failed to start async runtime")?;
    let client = build_client(&config)?;

    if config.headless {
        let ok = run_headless(&runtime, &client, &config)?;
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    let service: Arc<dyn SimulationService> = Arc::new(client);
    TuiApp::new(service, runtime.handle().clone())
        .with_form(config.form())
        .frame_rate(config.frame_rate)
        .run()
        .context("terminal UI failed")?;

    info!("viewer closed");
    Ok(ExitCode::SUCCESS)
}
