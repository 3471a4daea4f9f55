use std::fs::File;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

mod client;
mod commands;
mod constants;
mod domain;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::client::TransferClient;
use crate::domain::TransferRow;
use crate::domain::amount::MAX_TOKEN_DECIMALS;
use crate::state::config::{MAX_REQUEST_TIMEOUT_SECS, MIN_REQUEST_TIMEOUT_SECS};
use crate::state::platform::AppPaths;
use crate::state::{App, AppConfig, ConfigOverrides};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "lazywallet=info";

/// lazywallet - browse a wallet's transfer history from the terminal
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wallet address to load on startup (saved for next time)
    #[arg(short, long, global = true)]
    address: Option<String>,

    /// Base URL of the transactions backend
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(
        long,
        global = true,
        value_parser = clap::value_parser!(u64).range(MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS)
    )]
    timeout: Option<u64>,

    /// Token symbol shown after quantities
    #[arg(long, global = true)]
    symbol: Option<String>,

    /// Number of decimals of the token's base unit
    #[arg(
        long,
        global = true,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_TOKEN_DECIMALS))
    )]
    decimals: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version information
    Version,
    /// Fetch transfers once and print them as tab-separated rows
    Fetch,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            wallet_address: self.address.clone(),
            api_base_url: self.api_url.clone(),
            request_timeout_secs: self.timeout,
            token_symbol: self.symbol.clone(),
            token_decimals: self.decimals,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if matches!(cli.command, Some(Commands::Version)) {
        println!("lazywallet v{VERSION}");
        println!("A terminal dashboard for wallet transfer history");
        return Ok(());
    }

    init_logging();

    let mut config = AppConfig::load();
    config.apply_overrides(cli.overrides());

    if matches!(cli.command, Some(Commands::Fetch)) {
        return print_transfers(&config).await;
    }

    let mut app = App::new(config)?;
    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;

    result
}

/// Sends tracing output to the log file. The terminal belongs to the TUI.
///
/// Logging is skipped when the log file cannot be created.
fn init_logging() {
    let Ok(path) = AppPaths::new().log_file() else {
        return;
    };
    let Ok(file) = File::create(&path) else {
        return;
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Headless mode: one request, rows to stdout.
async fn print_transfers(config: &AppConfig) -> Result<()> {
    let Some(address) = config.wallet_address.as_deref() else {
        color_eyre::eyre::bail!("no wallet address configured; pass --address");
    };

    let client = TransferClient::new(&config.api_base_url, config.http_config())?;
    let records = client.fetch_transfers(address).await?;
    let now = chrono::Utc::now();

    for record in &records {
        let row = TransferRow::build(record, now, &config.token);
        println!("{}", row.cells().join("\t"));
    }

    tracing::info!(count = records.len(), "printed transfers");
    Ok(())
}
