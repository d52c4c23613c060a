//! Binance USDT-M futures integration for the basic trading bot.
//!
//! This crate provides:
//! - REST client for the Binance futures trading API
//! - HMAC-SHA256 authentication for signed requests
//! - Order placement with input validation before any network I/O
//! - Account and position queries
//! - `BasicBot`, a thin facade with safe defaults
//!
//! # Example
//!
//! ```ignore
//! use futures_bot_binance::{BasicBot, Side};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Reads BINANCE_API_KEY / BINANCE_API_SECRET / BINANCE_TESTNET
//!     let bot = BasicBot::from_env()?;
//!
//!     let response = bot.place_market_order("BTCUSDT", Side::Buy, dec!(0.01)).await?;
//!     println!("Order {}: {}", response.order_id, response.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Authentication
//!
//! Binance signs requests with HMAC-SHA256 over the URL-encoded query
//! string, hex-encoded, sent as a `signature` query parameter together
//! with a millisecond `timestamp`. The API key travels in the
//! `X-MBX-APIKEY` header. Set these environment variables:
//!
//! - `BINANCE_API_KEY`: API key
//! - `BINANCE_API_SECRET`: API secret
//! - `BINANCE_TESTNET`: "false" to target production; anything else
//!   (including unset) targets the testnet for safety
//!
//! # API Endpoints
//!
//! - `GET /fapi/v1/exchangeInfo` - Exchange rules and symbols (unsigned)
//! - `POST /fapi/v1/order` - Place order (signed)
//! - `GET /fapi/v2/account` - Account information (signed)
//! - `GET /fapi/v2/positionRisk` - Position information (signed)

pub mod auth;
pub mod bot;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use auth::{build_query_string, RequestSigner};
pub use bot::BasicBot;
pub use client::{BinanceClient, API_KEY_HEADER, REQUEST_TIMEOUT_SECS};
pub use config::{BinanceConfig, BINANCE_LIVE_URL, BINANCE_TESTNET_URL};
pub use error::{BinanceError, Result};
pub use types::{
    AccountAsset, AccountInfo, ExchangeInfo, OrderRequest, OrderResponse, OrderType, PositionRisk,
    Side, SymbolInfo, TimeInForce,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_exports() {
        let config = BinanceConfig::from_credentials("key", "secret", true).unwrap();
        assert_eq!(config.base_url(), BINANCE_TESTNET_URL);
    }

    #[test]
    fn test_error_types_accessible() {
        let err = BinanceError::upstream(400, -1121, "Invalid symbol.");
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn test_constants_accessible() {
        assert!(BINANCE_TESTNET_URL.starts_with("https://"));
        assert!(BINANCE_LIVE_URL.starts_with("https://"));
        assert_eq!(REQUEST_TIMEOUT_SECS, 10);
        assert_eq!(API_KEY_HEADER, "X-MBX-APIKEY");
    }
}
