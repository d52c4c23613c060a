//! Credential and environment resolution for the Binance client.
//!
//! Credentials come either from explicit arguments or from the process
//! environment, and the testnet flag picks one of two fixed base URLs.
//! Resolution happens once; the result is immutable for the lifetime of
//! the client built from it.
//!
//! # Environment variables
//!
//! - `BINANCE_API_KEY`: API key (required)
//! - `BINANCE_API_SECRET`: API secret (required)
//! - `BINANCE_TESTNET`: "true" or "false"; anything else, including an
//!   absent variable, resolves to testnet for safety

use crate::error::{BinanceError, Result};
use secrecy::SecretString;

/// Binance USDT-M futures testnet base URL.
pub const BINANCE_TESTNET_URL: &str = "https://testnet.binancefuture.com";

/// Binance USDT-M futures production base URL.
pub const BINANCE_LIVE_URL: &str = "https://fapi.binance.com";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "BINANCE_API_KEY";

/// Environment variable holding the API secret.
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";

/// Environment variable selecting testnet vs production.
pub const TESTNET_ENV: &str = "BINANCE_TESTNET";

/// Resolved credentials and target environment.
#[derive(Debug)]
pub struct BinanceConfig {
    /// API key, sent in the `X-MBX-APIKEY` header.
    pub api_key: String,

    /// API secret, used as the HMAC signing key.
    pub api_secret: SecretString,

    /// Whether to target the testnet environment.
    pub testnet: bool,
}

impl BinanceConfig {
    /// Creates a configuration from explicit credentials.
    ///
    /// # Errors
    /// Returns a configuration error if the key or secret is empty.
    pub fn from_credentials(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        testnet: bool,
    ) -> Result<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.is_empty() {
            return Err(BinanceError::configuration("API key must not be empty"));
        }
        if api_secret.is_empty() {
            return Err(BinanceError::configuration("API secret must not be empty"));
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
            testnet,
        })
    }

    /// Creates a configuration from `BINANCE_API_KEY`,
    /// `BINANCE_API_SECRET`, and `BINANCE_TESTNET`.
    ///
    /// # Errors
    /// Returns a configuration error if the key or secret variable is
    /// missing or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).filter(|v| !v.is_empty()).ok_or_else(|| {
            BinanceError::configuration(format!("{API_KEY_ENV} environment variable is required"))
        })?;
        let api_secret = lookup(API_SECRET_ENV).filter(|v| !v.is_empty()).ok_or_else(|| {
            BinanceError::configuration(format!(
                "{API_SECRET_ENV} environment variable is required"
            ))
        })?;

        // Anything that is not literally "false" keeps the safe default.
        let testnet = match lookup(TESTNET_ENV) {
            Some(value) if value.trim().eq_ignore_ascii_case("false") => false,
            _ => true,
        };

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
            testnet,
        })
    }

    /// Returns the base URL for the resolved environment.
    #[must_use]
    pub fn base_url(&self) -> &'static str {
        if self.testnet {
            BINANCE_TESTNET_URL
        } else {
            BINANCE_LIVE_URL
        }
    }

    /// Returns a short name for the resolved environment.
    #[must_use]
    pub fn environment(&self) -> &'static str {
        if self.testnet {
            "testnet"
        } else {
            "production"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |name| map.get(name).map(|v| (*v).to_string())
    }

    // ==================== Explicit Credentials Tests ====================

    #[test]
    fn test_from_credentials_testnet_url() {
        let config = BinanceConfig::from_credentials("key", "secret", true).unwrap();
        assert_eq!(config.base_url(), BINANCE_TESTNET_URL);
        assert_eq!(config.environment(), "testnet");
    }

    #[test]
    fn test_from_credentials_live_url() {
        let config = BinanceConfig::from_credentials("key", "secret", false).unwrap();
        assert_eq!(config.base_url(), BINANCE_LIVE_URL);
        assert_eq!(config.environment(), "production");
    }

    #[test]
    fn test_from_credentials_rejects_empty_key() {
        let result = BinanceConfig::from_credentials("", "secret", true);
        assert!(matches!(result, Err(BinanceError::Configuration(_))));
    }

    #[test]
    fn test_from_credentials_rejects_empty_secret() {
        let result = BinanceConfig::from_credentials("key", "", true);
        assert!(matches!(result, Err(BinanceError::Configuration(_))));
    }

    // ==================== Environment Resolution Tests ====================

    #[test]
    fn test_env_testnet_true() {
        let config = BinanceConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, "key"),
            (API_SECRET_ENV, "secret"),
            (TESTNET_ENV, "true"),
        ]))
        .unwrap();
        assert!(config.testnet);
        assert_eq!(config.base_url(), BINANCE_TESTNET_URL);
    }

    #[test]
    fn test_env_testnet_false() {
        let config = BinanceConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, "key"),
            (API_SECRET_ENV, "secret"),
            (TESTNET_ENV, "false"),
        ]))
        .unwrap();
        assert!(!config.testnet);
        assert_eq!(config.base_url(), BINANCE_LIVE_URL);
    }

    #[test]
    fn test_env_testnet_defaults_to_true_when_absent() {
        let config = BinanceConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, "key"),
            (API_SECRET_ENV, "secret"),
        ]))
        .unwrap();
        assert!(config.testnet);
    }

    #[test]
    fn test_env_testnet_unparseable_stays_on_testnet() {
        // A typo like "flase" must not silently route to production.
        let config = BinanceConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, "key"),
            (API_SECRET_ENV, "secret"),
            (TESTNET_ENV, "flase"),
        ]))
        .unwrap();
        assert!(config.testnet);
    }

    #[test]
    fn test_env_testnet_false_case_insensitive() {
        let config = BinanceConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, "key"),
            (API_SECRET_ENV, "secret"),
            (TESTNET_ENV, "FALSE"),
        ]))
        .unwrap();
        assert!(!config.testnet);
    }

    #[test]
    fn test_env_missing_api_key() {
        let result =
            BinanceConfig::from_lookup(lookup_from(&[(API_SECRET_ENV, "secret")]));
        let err = result.unwrap_err();
        assert!(matches!(err, BinanceError::Configuration(_)));
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_env_missing_api_secret() {
        let result = BinanceConfig::from_lookup(lookup_from(&[(API_KEY_ENV, "key")]));
        let err = result.unwrap_err();
        assert!(err.to_string().contains(API_SECRET_ENV));
    }

    #[test]
    fn test_env_empty_api_key_is_missing() {
        let result = BinanceConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, ""),
            (API_SECRET_ENV, "secret"),
        ]));
        assert!(matches!(result, Err(BinanceError::Configuration(_))));
    }

    // ==================== Secret Handling Tests ====================

    #[test]
    fn test_debug_does_not_leak_secret() {
        let config = BinanceConfig::from_credentials("key", "super-secret", true).unwrap();
        let debug_output = format!("{:?}", config);
        assert!(!debug_output.contains("super-secret"));
    }
}
