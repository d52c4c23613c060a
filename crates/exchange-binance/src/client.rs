//! Binance USDT-M futures REST client.
//!
//! Wraps the Binance futures API with HMAC-SHA256 request signing.
//! Testnet is the default environment for safety.
//!
//! # Example
//!
//! ```ignore
//! use futures_bot_binance::{BinanceClient, OrderRequest, Side};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Credentials from BINANCE_API_KEY / BINANCE_API_SECRET,
//!     // environment from BINANCE_TESTNET (defaults to testnet)
//!     let client = BinanceClient::from_env()?;
//!
//!     let order = OrderRequest::market("BTCUSDT", Side::Buy, dec!(0.01));
//!     let response = client.place_order(&order).await?;
//!     println!("Order {} is {}", response.order_id, response.status);
//!
//!     Ok(())
//! }
//! ```

use crate::auth::{build_query_string, unix_timestamp_ms, RequestSigner};
use crate::config::BinanceConfig;
use crate::error::{BinanceError, Result};
use crate::types::{AccountInfo, ExchangeInfo, OrderRequest, OrderResponse, PositionRisk};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde::Deserialize;
use std::time::Duration;

// =============================================================================
// Constants
// =============================================================================

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Fixed per-call timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

const EXCHANGE_INFO_PATH: &str = "/fapi/v1/exchangeInfo";
const ORDER_PATH: &str = "/fapi/v1/order";
const ACCOUNT_PATH: &str = "/fapi/v2/account";
const POSITION_RISK_PATH: &str = "/fapi/v2/positionRisk";

// =============================================================================
// Error Body
// =============================================================================

/// Structured error body returned by Binance on non-2xx replies.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: i64,
    msg: String,
}

// =============================================================================
// BinanceClient
// =============================================================================

/// Binance futures REST API client.
///
/// Credentials and environment are resolved once at construction and
/// immutable afterwards. Each call builds its own parameter set, so two
/// clients with different credentials are fully independent.
pub struct BinanceClient {
    /// Resolved credentials and environment.
    config: BinanceConfig,

    /// Base URL for the resolved environment.
    base_url: String,

    /// HTTP client with the API key header and timeout applied.
    http: Client,

    /// HMAC-SHA256 signer over the API secret.
    signer: RequestSigner,
}

impl std::fmt::Debug for BinanceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceClient")
            .field("base_url", &self.base_url)
            .field("testnet", &self.config.testnet)
            .finish_non_exhaustive()
    }
}

impl BinanceClient {
    /// Creates a client from a resolved configuration.
    ///
    /// # Errors
    /// Returns a configuration error if the API key is not a valid
    /// header value, or a transport error if the HTTP client cannot be
    /// built.
    pub fn new(config: BinanceConfig) -> Result<Self> {
        let base_url = config.base_url().to_string();

        tracing::info!("connected to {} - {}", config.environment(), base_url);

        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| BinanceError::configuration("API key is not a valid header value"))?;
        headers.insert(API_KEY_HEADER, api_key);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| BinanceError::transport(format!("failed to build HTTP client: {e}")))?;

        let signer = RequestSigner::new(config.api_secret.clone());

        Ok(Self {
            config,
            base_url,
            http,
            signer,
        })
    }

    /// Creates a client from environment variables.
    ///
    /// # Errors
    /// Returns a configuration error if credentials are missing.
    pub fn from_env() -> Result<Self> {
        Self::new(BinanceConfig::from_env()?)
    }

    /// Creates a client from explicit credentials.
    ///
    /// # Errors
    /// Returns a configuration error if the key or secret is empty.
    pub fn from_credentials(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        testnet: bool,
    ) -> Result<Self> {
        Self::new(BinanceConfig::from_credentials(api_key, api_secret, testnet)?)
    }

    /// Returns true if the client targets the testnet environment.
    #[must_use]
    pub fn testnet(&self) -> bool {
        self.config.testnet
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sets a custom base URL (useful for testing).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Issues one API call. For signed calls a millisecond timestamp is
    /// injected and a signature over the full parameter set appended;
    /// the query string signed is byte-identical to the one transmitted.
    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        mut params: Vec<(String, String)>,
        signed: bool,
    ) -> Result<T> {
        if signed {
            let timestamp_ms = unix_timestamp_ms()?;
            self.signer.sign(&mut params, timestamp_ms)?;
        }

        let query = build_query_string(&params);
        let url = if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query)
        };

        tracing::debug!("{} {}{}", method, self.base_url, path);

        let response = match self.http.request(method, url.as_str()).send().await {
            Ok(response) => response,
            Err(e) => {
                let err = BinanceError::from(e);
                tracing::error!("request to {} failed: {}", path, err);
                return Err(err);
            }
        };

        self.handle_response(path, response).await
    }

    /// Classifies the reply: 2xx bodies deserialize into the caller's
    /// type unmodified, anything else becomes an upstream error carrying
    /// the parsed Binance error body or the raw text.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(parsed) => BinanceError::upstream(status.as_u16(), parsed.code, parsed.msg),
                Err(_) => BinanceError::upstream_raw(status.as_u16(), body),
            };
            tracing::error!("request to {} failed: {}", path, err);
            return Err(err);
        }

        let body = response.json::<T>().await?;
        Ok(body)
    }

    // =========================================================================
    // Market Endpoints
    // =========================================================================

    /// Gets exchange trading rules and symbol information. Unsigned.
    ///
    /// # Arguments
    /// * `symbol` - Optional symbol to filter (e.g. "BTCUSDT")
    ///
    /// # Errors
    /// Returns error if the API call fails.
    pub async fn get_exchange_info(&self, symbol: Option<&str>) -> Result<ExchangeInfo> {
        let params = match symbol {
            Some(symbol) => vec![("symbol".to_string(), symbol.to_string())],
            None => Vec::new(),
        };
        self.request(Method::GET, EXCHANGE_INFO_PATH, params, false)
            .await
    }

    // =========================================================================
    // Order Endpoints
    // =========================================================================

    /// Places an order on Binance futures.
    ///
    /// The order is validated before any network I/O: a LIMIT order
    /// without a price, a non-positive quantity, or an extra parameter
    /// colliding with a reserved key all fail here with a validation
    /// error and zero network calls.
    ///
    /// # Errors
    /// Returns a validation, transport, or upstream error; none are
    /// swallowed.
    pub async fn place_order(&self, order: &OrderRequest) -> Result<OrderResponse> {
        let params = order.to_params()?;

        match order.price {
            Some(price) => tracing::info!(
                "placing {} order: {} {} {} @ {}",
                order.order_type,
                order.symbol,
                order.side,
                order.quantity,
                price
            ),
            None => tracing::info!(
                "placing {} order: {} {} {}",
                order.order_type,
                order.symbol,
                order.side,
                order.quantity
            ),
        }

        let response: OrderResponse = self.request(Method::POST, ORDER_PATH, params, true).await?;

        tracing::info!("order placed - id: {}", response.order_id);
        Ok(response)
    }

    // =========================================================================
    // Account Endpoints
    // =========================================================================

    /// Gets account information. Signed.
    ///
    /// # Errors
    /// Returns error if the API call fails.
    pub async fn get_account_info(&self) -> Result<AccountInfo> {
        self.request(Method::GET, ACCOUNT_PATH, Vec::new(), true)
            .await
    }

    /// Gets position information, optionally filtered by symbol. Signed.
    ///
    /// # Errors
    /// Returns error if the API call fails.
    pub async fn get_position_info(&self, symbol: Option<&str>) -> Result<Vec<PositionRisk>> {
        let params = match symbol {
            Some(symbol) => vec![("symbol".to_string(), symbol.to_string())],
            None => Vec::new(),
        };
        self.request(Method::GET, POSITION_RISK_PATH, params, true)
            .await
    }
}
