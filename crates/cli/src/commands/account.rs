//! Show account balances.

use anyhow::Result;
use clap::Args;
use futures_bot_binance::BinanceClient;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Arguments for the account command.
#[derive(Args, Debug)]
pub struct AccountArgs {}

fn is_nonzero(value: Option<&str>) -> bool {
    value
        .and_then(|v| Decimal::from_str(v).ok())
        .is_some_and(|v| !v.is_zero())
}

/// Fetches and prints account information.
pub async fn run_account(_args: AccountArgs) -> Result<()> {
    let client = BinanceClient::from_env()?;
    let account = client.get_account_info().await?;

    let environment = if client.testnet() { "testnet" } else { "production" };

    println!("\nAccount on {environment}");
    println!(
        "  Total Wallet Balance: {}",
        account.total_wallet_balance.as_deref().unwrap_or("N/A")
    );
    println!(
        "  Available Balance:    {}",
        account.available_balance.as_deref().unwrap_or("N/A")
    );
    println!(
        "  Unrealized PnL:       {}",
        account.total_unrealized_profit.as_deref().unwrap_or("N/A")
    );
    println!("  Can Trade:            {}", account.can_trade);

    let funded: Vec<_> = account
        .assets
        .iter()
        .filter(|a| is_nonzero(a.wallet_balance.as_deref()))
        .collect();

    if funded.is_empty() {
        println!("  No funded assets\n");
    } else {
        println!("  Assets:");
        for asset in funded {
            println!(
                "    {:<6} balance: {:<16} available: {}",
                asset.asset,
                asset.wallet_balance.as_deref().unwrap_or("0"),
                asset.available_balance.as_deref().unwrap_or("0")
            );
        }
        println!();
    }

    Ok(())
}
