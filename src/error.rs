//! Error types for the checkout bridge.

use crate::client::StripeError;

/// Result type for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors that can occur while wiring or driving the checkout page.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// No client secret was supplied for the payment session.
    #[error("client secret is empty")]
    MissingClientSecret,

    /// The return URL is not an absolute URL.
    #[error("invalid return url {url:?}: {source}")]
    InvalidReturnUrl {
        /// The rejected value.
        url: String,
        /// Why it was rejected.
        source: url::ParseError,
    },

    /// A required element is not present in the page.
    #[error("element #{0} not found in document")]
    MissingElement(String),

    /// A DOM call threw.
    #[error("dom error: {0}")]
    Dom(String),

    /// Stripe.js reported an error or threw.
    #[error("stripe error: {0}")]
    Provider(#[from] StripeError),

    /// Configuration JSON could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration object could not be read from JS.
    #[error("configuration error: {0}")]
    ConfigValue(String),
}

impl From<serde_wasm_bindgen::Error> for BridgeError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        BridgeError::ConfigValue(err.to_string())
    }
}
