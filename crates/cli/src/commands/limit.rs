//! Place a limit order from the command line.

use anyhow::Result;
use clap::Args;
use futures_bot_binance::{BinanceClient, OrderRequest, Side};

use super::parse_positive_decimal;

/// Arguments for the limit command.
#[derive(Args, Debug)]
pub struct LimitArgs {
    /// Trading pair symbol (e.g. BTCUSDT).
    pub symbol: String,

    /// Order side: BUY or SELL.
    pub side: String,

    /// Order quantity in base asset units.
    pub quantity: String,

    /// Limit price.
    pub price: String,
}

/// Places a Good-Till-Cancel limit order and prints its status.
pub async fn run_limit(args: LimitArgs) -> Result<()> {
    let side: Side = args.side.parse()?;
    let quantity = parse_positive_decimal(&args.quantity, "Quantity")?;
    let price = parse_positive_decimal(&args.price, "Price")?;

    tracing::info!(
        "limit order requested: {} {} {} @ {}",
        side,
        quantity,
        args.symbol,
        price
    );

    let client = BinanceClient::from_env()?;
    let order = OrderRequest::limit(&args.symbol, side, quantity, price);
    let response = client.place_order(&order).await?;

    let environment = if client.testnet() { "testnet" } else { "production" };

    tracing::info!(
        "limit order placed - id: {}, status: {}",
        response.order_id,
        response.status
    );

    println!("\nLimit order placed on {environment}");
    println!("  Order ID: {}", response.order_id);
    println!("  {} {} {} @ {}", side, quantity, response.symbol, price);
    println!("  Status: {}", response.status);
    println!("  (Order will execute when price reaches {price})\n");

    Ok(())
}
