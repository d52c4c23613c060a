//! Show open positions.

use anyhow::Result;
use clap::Args;
use futures_bot_binance::BinanceClient;

/// Arguments for the positions command.
#[derive(Args, Debug)]
pub struct PositionsArgs {
    /// Only show this symbol (e.g. BTCUSDT).
    #[arg(long)]
    pub symbol: Option<String>,
}

/// Fetches and prints position information.
pub async fn run_positions(args: PositionsArgs) -> Result<()> {
    let client = BinanceClient::from_env()?;
    let positions = client.get_position_info(args.symbol.as_deref()).await?;

    let open: Vec<_> = positions.iter().filter(|p| p.is_open()).collect();

    if open.is_empty() {
        println!("\nNo open positions\n");
        return Ok(());
    }

    println!("\nOpen positions:");
    for position in open {
        println!(
            "  {:<12} amt: {:<12} entry: {:<12} mark: {:<12} uPnL: {}",
            position.symbol,
            position.position_amt.as_deref().unwrap_or("0"),
            position.entry_price.as_deref().unwrap_or("N/A"),
            position.mark_price.as_deref().unwrap_or("N/A"),
            position.unrealized_profit.as_deref().unwrap_or("N/A")
        );
    }
    println!();

    Ok(())
}
