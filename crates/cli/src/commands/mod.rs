//! CLI commands for the Binance futures basic trading bot.

pub mod account;
pub mod demo;
pub mod exchange_info;
pub mod limit;
pub mod market;
pub mod positions;

pub use account::{run_account, AccountArgs};
pub use demo::{run_demo, DemoArgs};
pub use exchange_info::{run_exchange_info, ExchangeInfoArgs};
pub use limit::{run_limit, LimitArgs};
pub use market::{run_market, MarketArgs};
pub use positions::{run_positions, PositionsArgs};

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a positive decimal CLI argument.
pub(crate) fn parse_positive_decimal(value: &str, name: &str) -> Result<Decimal> {
    let parsed =
        Decimal::from_str(value.trim()).map_err(|_| anyhow!("{name} must be a number"))?;
    if parsed <= Decimal::ZERO {
        return Err(anyhow!("{name} must be positive"));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_positive_decimal() {
        assert_eq!(parse_positive_decimal("0.01", "Quantity").unwrap(), dec!(0.01));
        assert_eq!(parse_positive_decimal(" 45000 ", "Price").unwrap(), dec!(45000));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = parse_positive_decimal("abc", "Quantity").unwrap_err();
        assert!(err.to_string().contains("Quantity must be a number"));
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert!(parse_positive_decimal("0", "Quantity").is_err());
        assert!(parse_positive_decimal("-1", "Price").is_err());
    }
}
