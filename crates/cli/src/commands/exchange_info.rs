//! Show exchange trading rules and symbol information.

use anyhow::Result;
use clap::Args;
use futures_bot_binance::BinanceClient;

/// Arguments for the exchange-info command.
#[derive(Args, Debug)]
pub struct ExchangeInfoArgs {
    /// Only show this symbol (e.g. BTCUSDT).
    #[arg(long)]
    pub symbol: Option<String>,
}

/// Fetches and prints exchange information.
pub async fn run_exchange_info(args: ExchangeInfoArgs) -> Result<()> {
    let client = BinanceClient::from_env()?;
    let info = client.get_exchange_info(args.symbol.as_deref()).await?;

    println!("\nExchange info ({})", client.base_url());
    if let Some(server_time) = info.server_time {
        println!("  Server Time: {server_time}");
    }
    println!("  Symbols: {}", info.symbols.len());

    for symbol in &info.symbols {
        println!(
            "    {:<12} status: {:<10} price precision: {:<3} qty precision: {}",
            symbol.symbol,
            symbol.status,
            symbol
                .price_precision
                .map_or_else(|| "?".to_string(), |p| p.to_string()),
            symbol
                .quantity_precision
                .map_or_else(|| "?".to_string(), |p| p.to_string())
        );
    }
    println!();

    Ok(())
}
