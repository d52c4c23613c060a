//! Simplified trading facade over [`BinanceClient`].
//!
//! `BasicBot` fixes the common defaults (market orders, GTC limit
//! orders) so callers only supply symbol, side, and size.

use crate::client::BinanceClient;
use crate::config::BinanceConfig;
use crate::error::Result;
use crate::types::{AccountInfo, OrderRequest, OrderResponse, PositionRisk, Side};
use rust_decimal::Decimal;

/// Basic trading bot wrapping [`BinanceClient`] with fixed defaults.
#[derive(Debug)]
pub struct BasicBot {
    client: BinanceClient,
}

impl BasicBot {
    /// Creates a bot from explicit credentials. Testnet defaults to
    /// true for safety.
    ///
    /// # Errors
    /// Returns a configuration error if the credentials are empty.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        testnet: bool,
    ) -> Result<Self> {
        let client = BinanceClient::new(BinanceConfig::from_credentials(
            api_key, api_secret, testnet,
        )?)?;

        tracing::info!(
            "BasicBot initialized - testnet: {}, url: {}",
            client.testnet(),
            client.base_url()
        );

        Ok(Self { client })
    }

    /// Creates a bot with credentials and environment from environment
    /// variables.
    ///
    /// # Errors
    /// Returns a configuration error if credentials are missing.
    pub fn from_env() -> Result<Self> {
        let client = BinanceClient::from_env()?;

        tracing::info!(
            "BasicBot initialized - testnet: {}, url: {}",
            client.testnet(),
            client.base_url()
        );

        Ok(Self { client })
    }

    /// Wraps an existing client.
    #[must_use]
    pub fn with_client(client: BinanceClient) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    #[must_use]
    pub fn client(&self) -> &BinanceClient {
        &self.client
    }

    /// Returns true if the bot targets the testnet environment.
    #[must_use]
    pub fn testnet(&self) -> bool {
        self.client.testnet()
    }

    /// Places a market order.
    ///
    /// # Errors
    /// Returns a validation, transport, or upstream error.
    pub async fn place_market_order(
        &self,
        symbol: &str,
        side: Side,
        quantity: Decimal,
    ) -> Result<OrderResponse> {
        let order = OrderRequest::market(symbol, side, quantity);
        self.client.place_order(&order).await
    }

    /// Places a Good-Till-Cancel limit order.
    ///
    /// # Errors
    /// Returns a validation, transport, or upstream error.
    pub async fn place_limit_order(
        &self,
        symbol: &str,
        side: Side,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<OrderResponse> {
        let order = OrderRequest::limit(symbol, side, quantity, price);
        self.client.place_order(&order).await
    }

    /// Gets account information.
    ///
    /// # Errors
    /// Returns a transport or upstream error.
    pub async fn get_account_info(&self) -> Result<AccountInfo> {
        self.client.get_account_info().await
    }

    /// Gets position information, optionally filtered by symbol.
    ///
    /// # Errors
    /// Returns a transport or upstream error.
    pub async fn get_position_info(&self, symbol: Option<&str>) -> Result<Vec<PositionRisk>> {
        self.client.get_position_info(symbol).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_bot(server: &MockServer) -> BasicBot {
        let client = BinanceClient::from_credentials("test-key", "test-secret", true)
            .unwrap()
            .with_base_url(server.uri());
        BasicBot::with_client(client)
    }

    #[test]
    fn test_bot_defaults_to_testnet() {
        let bot = BasicBot::new("key", "secret", true).unwrap();
        assert!(bot.testnet());
    }

    #[tokio::test]
    async fn test_market_order_delegates_to_client() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/fapi/v1/order"))
            .and(query_param("type", "MARKET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "orderId": 777001,
                "symbol": "BTCUSDT",
                "status": "FILLED",
                "executedQty": "0.01"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let bot = test_bot(&server);
        let response = bot
            .place_market_order("BTCUSDT", Side::Buy, dec!(0.01))
            .await
            .unwrap();

        assert_eq!(response.order_id, 777001);
    }

    #[tokio::test]
    async fn test_limit_order_defaults_to_gtc() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/fapi/v1/order"))
            .and(query_param("type", "LIMIT"))
            .and(query_param("timeInForce", "GTC"))
            .and(query_param("price", "45000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "orderId": 777002,
                "symbol": "BTCUSDT",
                "status": "NEW"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let bot = test_bot(&server);
        let response = bot
            .place_limit_order("BTCUSDT", Side::Sell, dec!(0.01), dec!(45000))
            .await
            .unwrap();

        assert_eq!(response.status, "NEW");
    }
}
