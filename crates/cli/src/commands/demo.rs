//! Demo mode - simulates order execution without any network calls.
//!
//! Fabricates a random order id and a plausible per-symbol price, so
//! the order flow can be exercised without credentials or risk.

use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use futures_bot_binance::Side;
use rand::Rng;
use rust_decimal::prelude::ToPrimitive;

use super::parse_positive_decimal;

/// Arguments for the demo command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    #[command(subcommand)]
    pub order: DemoOrder,
}

/// Simulated order variants.
#[derive(Subcommand, Debug)]
pub enum DemoOrder {
    /// Simulate a market order
    Market {
        /// Trading pair symbol (e.g. BTCUSDT).
        symbol: String,
        /// Order side: BUY or SELL.
        side: String,
        /// Order quantity in base asset units.
        quantity: String,
    },
    /// Simulate a limit order
    Limit {
        /// Trading pair symbol (e.g. BTCUSDT).
        symbol: String,
        /// Order side: BUY or SELL.
        side: String,
        /// Order quantity in base asset units.
        quantity: String,
        /// Limit price.
        price: String,
    },
}

/// Plausible price band for a symbol, used to fabricate fills.
fn price_band(symbol: &str) -> (f64, f64) {
    match symbol {
        "BTCUSDT" => (42_000.0, 43_000.0),
        "ETHUSDT" => (2_200.0, 2_300.0),
        "BNBUSDT" => (300.0, 320.0),
        "SOLUSDT" => (95.0, 105.0),
        _ => (100.0, 1_000.0),
    }
}

fn print_banner() {
    println!("\n{}", "=".repeat(60));
    println!("DEMO MODE - No real money involved!");
    println!("{}", "=".repeat(60));
}

fn print_footer() {
    println!("\nThis is a SIMULATION - no actual trade was placed");
    println!("{}\n", "=".repeat(60));
}

/// Runs a simulated order and prints the fabricated result.
pub fn run_demo(args: DemoArgs) -> Result<()> {
    let mut rng = rand::thread_rng();
    let order_id: u32 = rng.gen_range(10_000_000..100_000_000);
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    match args.order {
        DemoOrder::Market {
            symbol,
            side,
            quantity,
        } => {
            let symbol = symbol.trim().to_ascii_uppercase();
            let side: Side = side.parse()?;
            let quantity = parse_positive_decimal(&quantity, "Quantity")?;

            let (low, high) = price_band(&symbol);
            let avg_price = rng.gen_range(low..high);
            let total = avg_price * quantity.to_f64().unwrap_or(0.0);

            print_banner();
            println!("\nSimulated market order executed successfully!");
            println!("  Timestamp: {timestamp}");
            println!("  Order ID: {order_id}");
            println!("  {side} {quantity} {symbol}");
            println!("  Average Price: ${avg_price:.2}");
            println!("  Total Value: ${total:.2}");
            print_footer();
        }
        DemoOrder::Limit {
            symbol,
            side,
            quantity,
            price,
        } => {
            let symbol = symbol.trim().to_ascii_uppercase();
            let side: Side = side.parse()?;
            let quantity = parse_positive_decimal(&quantity, "Quantity")?;
            let price = parse_positive_decimal(&price, "Price")?;

            let price_f64 = price.to_f64().unwrap_or(0.0);
            let total = price_f64 * quantity.to_f64().unwrap_or(0.0);

            print_banner();
            println!("\nSimulated limit order placed successfully!");
            println!("  Timestamp: {timestamp}");
            println!("  Order ID: {order_id}");
            println!("  {side} {quantity} {symbol} @ ${price_f64:.2}");
            println!("  Status: NEW (waiting for price to reach ${price_f64:.2})");
            println!("  Total Value: ${total:.2}");
            print_footer();
        }
    }

    Ok(())
}
