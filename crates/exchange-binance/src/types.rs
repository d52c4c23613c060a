//! Data models for the Binance futures integration.
//!
//! Order inputs use `rust_decimal::Decimal` so quantities and prices
//! serialize exactly as entered. Response models mirror the Binance
//! wire format: Binance sends decimal fields as JSON strings and those
//! are passed through to the caller unmodified.

use crate::error::{BinanceError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parameter names the order builder owns; caller-supplied extras must
/// not collide with these.
pub const RESERVED_PARAMS: [&str; 8] = [
    "symbol",
    "side",
    "type",
    "quantity",
    "price",
    "timeInForce",
    "timestamp",
    "signature",
];

// =============================================================================
// Order Enums
// =============================================================================

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = BinanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            _ => Err(BinanceError::validation("Side must be BUY or SELL")),
        }
    }
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Market,
    Limit,
}

impl OrderType {
    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = BinanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MARKET" => Ok(Self::Market),
            "LIMIT" => Ok(Self::Limit),
            _ => Err(BinanceError::validation("Order type must be MARKET or LIMIT")),
        }
    }
}

/// How long a limit order stays active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    /// Good-Till-Cancel.
    Gtc,
    /// Immediate-Or-Cancel.
    Ioc,
    /// Fill-Or-Kill.
    Fok,
    /// Good-Till-Crossing (post-only).
    Gtx,
}

impl TimeInForce {
    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gtc => "GTC",
            Self::Ioc => "IOC",
            Self::Fok => "FOK",
            Self::Gtx => "GTX",
        }
    }
}

impl Default for TimeInForce {
    fn default() -> Self {
        Self::Gtc
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Symbol Validation
// =============================================================================

/// Normalizes and validates a trading pair symbol (e.g. "BTCUSDT").
///
/// # Errors
/// Returns a validation error if the symbol is empty, too short, or
/// contains anything besides letters and digits.
pub fn validate_symbol(symbol: &str) -> Result<String> {
    let symbol = symbol.trim().to_ascii_uppercase();

    if symbol.is_empty() {
        return Err(BinanceError::validation("Symbol must be a non-empty string"));
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(BinanceError::validation(
            "Symbol must contain only letters and numbers (e.g., BTCUSDT)",
        ));
    }
    if symbol.len() < 3 {
        return Err(BinanceError::validation(
            "Symbol too short - use format like BTCUSDT",
        ));
    }

    Ok(symbol)
}

// =============================================================================
// Order Request
// =============================================================================

/// A single order to be placed on Binance futures.
///
/// Built per request, validated before any network I/O, and never
/// persisted. Construct with [`OrderRequest::market`] or
/// [`OrderRequest::limit`].
#[derive(Debug, Clone)]
pub struct OrderRequest {
    /// Trading pair symbol (e.g. "BTCUSDT").
    pub symbol: String,

    /// BUY or SELL.
    pub side: Side,

    /// MARKET or LIMIT.
    pub order_type: OrderType,

    /// Order quantity in base asset units.
    pub quantity: Decimal,

    /// Limit price; required for LIMIT, never sent for MARKET.
    pub price: Option<Decimal>,

    /// Time-in-force; only sent for LIMIT orders.
    pub time_in_force: TimeInForce,

    /// Additional parameters merged verbatim into the request (e.g.
    /// stopPrice, reduceOnly). Must not collide with reserved keys.
    pub extra_params: Vec<(String, String)>,
}

impl OrderRequest {
    /// Creates a market order.
    #[must_use]
    pub fn market(symbol: impl Into<String>, side: Side, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Market,
            quantity,
            price: None,
            time_in_force: TimeInForce::default(),
            extra_params: Vec::new(),
        }
    }

    /// Creates a limit order (Good-Till-Cancel by default).
    #[must_use]
    pub fn limit(
        symbol: impl Into<String>,
        side: Side,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Limit,
            quantity,
            price: Some(price),
            time_in_force: TimeInForce::default(),
            extra_params: Vec::new(),
        }
    }

    /// Sets the time-in-force policy.
    #[must_use]
    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = time_in_force;
        self
    }

    /// Adds a caller-supplied parameter (e.g. "stopPrice", "reduceOnly").
    #[must_use]
    pub fn with_extra_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.push((key.into(), value.into()));
        self
    }

    /// Validates the order without touching the network.
    ///
    /// # Errors
    /// Returns a validation error for a bad symbol, non-positive
    /// quantity or price, a LIMIT order without a price, or an extra
    /// parameter that collides with a reserved key.
    pub fn validate(&self) -> Result<()> {
        validate_symbol(&self.symbol)?;

        if self.quantity <= Decimal::ZERO {
            return Err(BinanceError::validation("Quantity must be positive"));
        }

        if self.order_type == OrderType::Limit {
            match self.price {
                None => {
                    return Err(BinanceError::validation(
                        "Price is required for LIMIT orders",
                    ))
                }
                Some(price) if price <= Decimal::ZERO => {
                    return Err(BinanceError::validation("Price must be positive"))
                }
                Some(_) => {}
            }
        }

        for (key, _) in &self.extra_params {
            if RESERVED_PARAMS.contains(&key.as_str()) {
                return Err(BinanceError::validation(format!(
                    "extra parameter collides with reserved key: {key}"
                )));
            }
        }

        Ok(())
    }

    /// Validates the order and assembles its query parameters in
    /// transmission order.
    ///
    /// # Errors
    /// Returns a validation error as described on [`Self::validate`].
    pub fn to_params(&self) -> Result<Vec<(String, String)>> {
        self.validate()?;

        let symbol = validate_symbol(&self.symbol)?;
        let mut params = vec![
            ("symbol".to_string(), symbol),
            ("side".to_string(), self.side.as_str().to_string()),
            ("type".to_string(), self.order_type.as_str().to_string()),
            ("quantity".to_string(), self.quantity.to_string()),
        ];

        if self.order_type == OrderType::Limit {
            // validate() guarantees the price is present here
            if let Some(price) = self.price {
                params.push(("price".to_string(), price.to_string()));
                params.push((
                    "timeInForce".to_string(),
                    self.time_in_force.as_str().to_string(),
                ));
            }
        }

        for (key, value) in &self.extra_params {
            params.push((key.clone(), value.clone()));
        }

        Ok(params)
    }
}

// =============================================================================
// Response Models
// =============================================================================

/// Order placement reply from Binance. Decimal fields stay as the
/// strings Binance sent; nothing here is interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    /// Exchange-assigned order id.
    pub order_id: i64,

    /// Trading pair symbol.
    pub symbol: String,

    /// Order status (e.g. "NEW", "FILLED").
    #[serde(default)]
    pub status: String,

    /// Client order id assigned by Binance.
    #[serde(default)]
    pub client_order_id: Option<String>,

    /// Requested quantity.
    #[serde(default)]
    pub orig_qty: Option<String>,

    /// Quantity executed so far.
    #[serde(default)]
    pub executed_qty: Option<String>,

    /// Average fill price.
    #[serde(default)]
    pub avg_price: Option<String>,

    /// Limit price ("0" for market orders).
    #[serde(default)]
    pub price: Option<String>,

    /// Time-in-force echoed back.
    #[serde(default)]
    pub time_in_force: Option<String>,

    /// Order side echoed back.
    #[serde(default)]
    pub side: Option<String>,

    /// Order type echoed back.
    #[serde(rename = "type", default)]
    pub order_type: Option<String>,

    /// Last update time in epoch milliseconds.
    #[serde(default)]
    pub update_time: Option<i64>,
}

/// One asset entry in the account reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAsset {
    /// Asset name (e.g. "USDT").
    pub asset: String,

    /// Wallet balance.
    #[serde(default)]
    pub wallet_balance: Option<String>,

    /// Unrealized profit.
    #[serde(default)]
    pub unrealized_profit: Option<String>,

    /// Balance available for new orders.
    #[serde(default)]
    pub available_balance: Option<String>,
}

/// Account overview from `/fapi/v2/account`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    /// Total wallet balance in USDT.
    #[serde(default)]
    pub total_wallet_balance: Option<String>,

    /// Total unrealized profit in USDT.
    #[serde(default)]
    pub total_unrealized_profit: Option<String>,

    /// Balance available for new orders in USDT.
    #[serde(default)]
    pub available_balance: Option<String>,

    /// Whether the account may trade.
    #[serde(default)]
    pub can_trade: bool,

    /// Per-asset balances.
    #[serde(default)]
    pub assets: Vec<AccountAsset>,
}

/// One position entry from `/fapi/v2/positionRisk`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRisk {
    /// Trading pair symbol.
    pub symbol: String,

    /// Signed position size (negative when short).
    #[serde(default)]
    pub position_amt: Option<String>,

    /// Average entry price.
    #[serde(default)]
    pub entry_price: Option<String>,

    /// Current mark price.
    #[serde(default)]
    pub mark_price: Option<String>,

    /// Unrealized profit.
    #[serde(rename = "unRealizedProfit", default)]
    pub unrealized_profit: Option<String>,

    /// Liquidation price.
    #[serde(default)]
    pub liquidation_price: Option<String>,

    /// Current leverage.
    #[serde(default)]
    pub leverage: Option<String>,

    /// Position side ("BOTH", "LONG", "SHORT").
    #[serde(default)]
    pub position_side: Option<String>,
}

impl PositionRisk {
    /// Returns true if the position size is non-zero.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.position_amt
            .as_deref()
            .and_then(|amt| Decimal::from_str(amt).ok())
            .is_some_and(|amt| !amt.is_zero())
    }
}

/// One symbol entry in the exchange info reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    /// Trading pair symbol.
    pub symbol: String,

    /// Trading status (e.g. "TRADING").
    #[serde(default)]
    pub status: String,

    /// Price decimal places.
    #[serde(default)]
    pub price_precision: Option<u32>,

    /// Quantity decimal places.
    #[serde(default)]
    pub quantity_precision: Option<u32>,
}

/// Exchange trading rules from `/fapi/v1/exchangeInfo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfo {
    /// Exchange timezone.
    #[serde(default)]
    pub timezone: String,

    /// Server time in epoch milliseconds.
    #[serde(default)]
    pub server_time: Option<i64>,

    /// Listed symbols.
    #[serde(default)]
    pub symbols: Vec<SymbolInfo>,
}
