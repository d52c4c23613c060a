//! HMAC-SHA256 request signing for the Binance futures API.
//!
//! Binance authenticates requests by signing the URL-encoded query
//! string: the signature is HMAC-SHA256 over the serialized parameters
//! with the API secret as key, hex-encoded lowercase, appended as a
//! `signature` query parameter alongside a millisecond `timestamp`.
//!
//! The query string that is signed MUST be byte-identical to the one
//! transmitted on the wire (same keys, same value formatting, same
//! order) or Binance rejects the signature. `build_query_string` is the
//! single serialization point for both.
//!
//! # Security
//!
//! - The API secret is held in a [`SecretString`] and never logged
//! - A signature is single-use, tied to the timestamp of its call

use crate::error::{BinanceError, Result};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha256 = Hmac<Sha256>;

/// Serializes parameters into a URL query string, percent-encoding
/// values and preserving insertion order.
#[must_use]
pub fn build_query_string(params: &[(String, String)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Returns the current Unix timestamp in milliseconds.
pub fn unix_timestamp_ms() -> Result<u64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| BinanceError::configuration(format!("system clock error: {e}")))?;
    Ok(elapsed.as_millis() as u64)
}

/// HMAC-SHA256 request signer for the Binance futures API.
pub struct RequestSigner {
    /// API secret used as the HMAC key.
    api_secret: SecretString,
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

impl RequestSigner {
    /// Creates a signer from an API secret.
    #[must_use]
    pub fn new(api_secret: SecretString) -> Self {
        Self { api_secret }
    }

    /// Computes the hex-encoded HMAC-SHA256 signature over a serialized
    /// query string.
    ///
    /// # Errors
    /// Returns a configuration error if the secret cannot be used as an
    /// HMAC key.
    pub fn signature(&self, query_string: &str) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(self.api_secret.expose_secret().as_bytes())
            .map_err(|e| BinanceError::configuration(format!("invalid API secret: {e}")))?;
        mac.update(query_string.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Signs a parameter set in place: appends the `timestamp`
    /// parameter, computes the signature over everything present, and
    /// appends it as `signature`.
    ///
    /// # Errors
    /// Returns a configuration error if signing fails.
    pub fn sign(&self, params: &mut Vec<(String, String)>, timestamp_ms: u64) -> Result<()> {
        params.push(("timestamp".to_string(), timestamp_ms.to_string()));

        let query = build_query_string(params);
        let signature = self.signature(&query)?;

        params.push(("signature".to_string(), signature));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer(secret: &str) -> RequestSigner {
        RequestSigner::new(SecretString::from(secret))
    }

    // ==================== Signature Tests ====================

    #[test]
    fn test_signature_matches_binance_docs_vector() {
        // Test vector from the Binance API documentation
        let signer = signer("NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j");

        let query = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";
        let signature = signer.signature(query).unwrap();

        assert_eq!(
            signature,
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn test_signature_is_deterministic() {
        let signer = signer("test_secret");

        let mut params1 = vec![("symbol".to_string(), "BTCUSDT".to_string())];
        let mut params2 = vec![("symbol".to_string(), "BTCUSDT".to_string())];

        signer.sign(&mut params1, 1700000000000).unwrap();
        signer.sign(&mut params2, 1700000000000).unwrap();

        assert_eq!(params1, params2);
    }

    #[test]
    fn test_signature_changes_with_value() {
        let signer = signer("test_secret");

        let sig1 = signer.signature("symbol=BTCUSDT&quantity=0.01").unwrap();
        let sig2 = signer.signature("symbol=BTCUSDT&quantity=0.02").unwrap();

        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let signer = signer("test_secret");
        let sig = signer.signature("a=1").unwrap();

        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    // ==================== Sign Tests ====================

    #[test]
    fn test_sign_appends_timestamp_and_signature() {
        let signer = signer("test_secret");

        let mut params = vec![
            ("symbol".to_string(), "BTCUSDT".to_string()),
            ("side".to_string(), "BUY".to_string()),
        ];
        signer.sign(&mut params, 1234567890).unwrap();

        assert_eq!(params.len(), 4);
        assert_eq!(params[2], ("timestamp".to_string(), "1234567890".to_string()));
        assert_eq!(params[3].0, "signature");
        assert_eq!(params[3].1.len(), 64);
    }

    #[test]
    fn test_sign_covers_all_prior_parameters() {
        let signer = signer("test_secret");

        let mut params = vec![("symbol".to_string(), "BTCUSDT".to_string())];
        signer.sign(&mut params, 1000).unwrap();

        // The signature must match a manual computation over everything
        // except the signature itself.
        let expected = signer.signature("symbol=BTCUSDT&timestamp=1000").unwrap();
        assert_eq!(params[2].1, expected);
    }

    // ==================== Query String Tests ====================

    #[test]
    fn test_query_string_preserves_order() {
        let params = vec![
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ];
        assert_eq!(build_query_string(&params), "b=2&a=1");
    }

    #[test]
    fn test_query_string_percent_encodes_values() {
        let params = vec![("note".to_string(), "a b&c".to_string())];
        assert_eq!(build_query_string(&params), "note=a+b%26c");
    }

    #[test]
    fn test_query_string_keeps_decimals_verbatim() {
        let params = vec![
            ("quantity".to_string(), "0.01".to_string()),
            ("price".to_string(), "42000.5".to_string()),
        ];
        assert_eq!(build_query_string(&params), "quantity=0.01&price=42000.5");
    }

    #[test]
    fn test_query_string_empty() {
        assert_eq!(build_query_string(&[]), "");
    }

    // ==================== Secret Handling Tests ====================

    #[test]
    fn test_debug_redacts_secret() {
        let signer = signer("super-secret-value");
        let debug_output = format!("{:?}", signer);
        assert!(!debug_output.contains("super-secret-value"));
        assert!(debug_output.contains("REDACTED"));
    }

    #[test]
    fn test_timestamp_is_milliseconds() {
        let ts = unix_timestamp_ms().unwrap();
        // 13 digits since 2001
        assert!(ts.to_string().len() >= 13);
    }
}
