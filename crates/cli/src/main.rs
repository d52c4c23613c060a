use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

use commands::{
    run_account, run_demo, run_exchange_info, run_limit, run_market, run_positions, AccountArgs,
    DemoArgs, ExchangeInfoArgs, LimitArgs, MarketArgs, PositionsArgs,
};

#[derive(Parser)]
#[command(name = "futures-bot")]
#[command(about = "Basic trading bot for Binance USDT-M futures (testnet by default)", long_about = None)]
struct Cli {
    /// Append diagnostics to this log file in addition to stderr
    #[arg(long, global = true, default_value = "bot.log")]
    log_file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place a market order (fills immediately at best available price)
    Market(MarketArgs),
    /// Place a limit order (rests until the market reaches the price)
    Limit(LimitArgs),
    /// Show account balances
    Account(AccountArgs),
    /// Show open positions
    Positions(PositionsArgs),
    /// Show exchange trading rules and symbol information
    ExchangeInfo(ExchangeInfoArgs),
    /// Simulate orders locally without any network calls
    Demo(DemoArgs),
}

/// Logs to stderr and appends to the log file. The file is the only
/// durable artifact the bot produces.
fn init_logging(log_file: &str) -> anyhow::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file)),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file)?;

    let result = match cli.command {
        Commands::Market(args) => run_market(args).await,
        Commands::Limit(args) => run_limit(args).await,
        Commands::Account(args) => run_account(args).await,
        Commands::Positions(args) => run_positions(args).await,
        Commands::ExchangeInfo(args) => run_exchange_info(args).await,
        Commands::Demo(args) => run_demo(args),
    };

    if let Err(e) = result {
        tracing::error!("{e:#}");
        eprintln!("\nError: {e:#}\n");
        std::process::exit(1);
    }

    Ok(())
}
