//! Place a market order from the command line.

use anyhow::Result;
use clap::Args;
use futures_bot_binance::{BinanceClient, OrderRequest, Side};

use super::parse_positive_decimal;

/// Arguments for the market command.
#[derive(Args, Debug)]
pub struct MarketArgs {
    /// Trading pair symbol (e.g. BTCUSDT).
    pub symbol: String,

    /// Order side: BUY or SELL.
    pub side: String,

    /// Order quantity in base asset units.
    pub quantity: String,
}

/// Places a market order and prints the fill details.
pub async fn run_market(args: MarketArgs) -> Result<()> {
    let side: Side = args.side.parse()?;
    let quantity = parse_positive_decimal(&args.quantity, "Quantity")?;

    tracing::info!("market order requested: {} {} {}", side, quantity, args.symbol);

    let client = BinanceClient::from_env()?;
    let order = OrderRequest::market(&args.symbol, side, quantity);
    let response = client.place_order(&order).await?;

    let environment = if client.testnet() { "testnet" } else { "production" };
    let executed_qty = response.executed_qty.as_deref().unwrap_or("0");
    let avg_price = response.avg_price.as_deref().unwrap_or("N/A");

    tracing::info!(
        "order filled - id: {}, qty: {}, avg price: {}",
        response.order_id,
        executed_qty,
        avg_price
    );

    println!("\nOrder placed successfully on {environment}");
    println!("  Order ID: {}", response.order_id);
    println!("  {} {} {}", side, executed_qty, response.symbol);
    println!("  Average Price: {avg_price}\n");

    Ok(())
}
