//! Bridge configuration: the publishable key, Elements appearance and the ids of the
//! page elements the bridge reads from and writes to.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::client::PaymentElementOptions;
use crate::error::Result;

/// Where Stripe.js is loaded from. Stripe requires it to come from this origin.
pub const STRIPE_JS_SRC: &str = "https://js.stripe.com/v3/";

/// Ids of the elements the hosting page must provide.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementIds {
    /// Container the Payment Element is mounted into.
    pub payment_element: String,
    /// Form whose `submit` triggers confirmation.
    pub payment_form: String,
    /// Receives immediate confirmation errors.
    pub error_message: String,
    /// Receives the payment status message.
    pub message: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        ElementIds {
            payment_element: "payment-element".to_string(),
            payment_form: "payment-form".to_string(),
            error_message: "error-message".to_string(),
            message: "message".to_string(),
        }
    }
}

impl ElementIds {
    /// CSS selector for the Payment Element container, as `mount()` expects it.
    pub fn payment_element_selector(&self) -> String {
        format!("#{}", self.payment_element)
    }
}

/// Everything the checkout bridge needs besides the per-session client secret.
///
/// ```json
/// {
///   "publishableKey": "pk_test_...",
///   "appearance": { "theme": "stripe" },
///   "elementIds": { "message": "payment-status" },
///   "logLevel": "debug"
/// }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
    pub publishable_key: String,

    /// Stripe Elements appearance settings, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_element_options: Option<PaymentElementOptions>,

    #[serde(default)]
    pub element_ids: ElementIds,

    #[serde(default = "default_script_src")]
    pub script_src: String,

    #[serde(default = "default_log_level")]
    pub log_level: LevelFilter,
}

fn default_script_src() -> String {
    STRIPE_JS_SRC.to_string()
}

fn default_log_level() -> LevelFilter {
    LevelFilter::Info
}

impl BridgeConfig {
    pub fn new(publishable_key: impl Into<String>) -> Self {
        BridgeConfig {
            publishable_key: publishable_key.into(),
            appearance: None,
            payment_element_options: None,
            element_ids: ElementIds::default(),
            script_src: default_script_src(),
            log_level: default_log_level(),
        }
    }

    pub fn with_appearance(mut self, appearance: serde_json::Value) -> Self {
        self.appearance = Some(appearance);
        self
    }

    pub fn with_element_ids(mut self, element_ids: ElementIds) -> Self {
        self.element_ids = element_ids;
        self
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read the configuration from a plain JS object.
    pub fn from_js(value: JsValue) -> Result<Self> {
        Ok(serde_wasm_bindgen::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_page_defaults() {
        let config = BridgeConfig::from_json(r#"{"publishableKey":"pk_test_123"}"#).unwrap();
        assert_eq!(config, BridgeConfig::new("pk_test_123"));
        assert_eq!(config.element_ids.payment_form, "payment-form");
        assert_eq!(config.element_ids.payment_element_selector(), "#payment-element");
        assert_eq!(config.script_src, STRIPE_JS_SRC);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn element_ids_can_be_overridden_one_at_a_time() {
        let config = BridgeConfig::from_json(
            r#"{
                "publishableKey": "pk_test_123",
                "elementIds": { "message": "payment-status" },
                "appearance": { "theme": "night" },
                "logLevel": "debug"
            }"#,
        )
        .unwrap();
        assert_eq!(config.element_ids.message, "payment-status");
        assert_eq!(config.element_ids.error_message, "error-message");
        assert_eq!(config.appearance, Some(serde_json::json!({ "theme": "night" })));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn missing_publishable_key_is_rejected() {
        let err = BridgeConfig::from_json("{}").unwrap_err();
        assert!(err.to_string().starts_with("configuration error"));
    }
}
