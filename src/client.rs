//! yew_stripe_bridge/src/client.rs
//!
//! Typed Rust API over the Stripe.js Payment Element.
//!
//! This module provides:
//! - `ElementsOptions` to configure Stripe Elements with a PaymentIntent client secret.
//! - `PaymentElementOptions` to customize layout and fields of the Payment Element.
//! - `ConfirmPaymentParams` for the `confirmParams` of `stripe.confirmPayment`.
//! - `PaymentIntent` / `StripeError`, the shapes Stripe.js resolves with.
//! - `StripeJs`, the [`PaymentProvider`] backed by the real `window.Stripe`.
//!
//! # Example Usage
//! ```rust,ignore
//! use yew_stripe_bridge::client::{StripeJs, ElementsOptions, ConfirmPaymentParams};
//! use yew_stripe_bridge::provider::PaymentProvider;
//!
//! let stripe = StripeJs::new("pk_test_...")?;
//! let options = ElementsOptions { client_secret: cs, appearance: None };
//! let elements = stripe.elements(&options)?;
//! stripe.mount_payment_element(&elements, "#payment-element", None)?;
//! let params = ConfirmPaymentParams {
//!     return_url: Some("https://…".into()),
//!     ..Default::default()
//! };
//! if let Err(err) = stripe.confirm_payment(&elements, &params).await {
//!     log::error!("Error: {}", err.message);
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Object, Reflect};

use crate::bindings::{new_stripe, JsElements, JsStripe};
use crate::provider::PaymentProvider;
use crate::status::PaymentStatus;

/// Configuration for `stripe.elements({ clientSecret, appearance })`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ElementsOptions {
    /// The PaymentIntent client secret returned by your backend.
    #[serde(rename = "clientSecret")]
    pub client_secret: String,

    /// Optional Stripe Elements appearance settings.
    #[serde(rename = "appearance", skip_serializing_if = "Option::is_none")]
    pub appearance: Option<serde_json::Value>,
}

/// Optional layout/customization for the mounted Payment Element.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PaymentElementOptions {
    /// Layout mode: `"tabs"` or `"accordion"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    /// Any other JSON-serializable settings (e.g., fields).
    #[serde(flatten)]
    pub extra: Option<serde_json::Value>,
}

/// Parameters for `stripe.confirmPayment({ confirmParams, ... })`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ConfirmPaymentParams {
    /// Where Stripe sends the customer after any off-site authentication.
    #[serde(rename = "return_url", skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,

    /// Any additional confirm params (e.g. shipping info).
    #[serde(flatten)]
    pub extra: Option<serde_json::Value>,
}

/// The parts of a PaymentIntent the checkout page looks at.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PaymentIntent {
    /// Stripe's identifier, e.g. `pi_1Fxxxxxx`.
    #[serde(default)]
    pub id: Option<String>,
    pub status: PaymentStatus,
    /// Amount in the smallest currency unit.
    #[serde(default)]
    pub amount: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Representation of a Stripe.js error object.
#[derive(Clone, Debug, PartialEq, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct StripeError {
    /// Human-readable message.
    pub message: String,
    /// Stripe's error type, e.g. `"card_error"`.
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Optional Stripe error code, e.g. `"card_declined"`.
    #[serde(default)]
    pub code: Option<String>,
}

impl StripeError {
    /// An error raised on our side of the boundary rather than by Stripe.js.
    pub fn local(message: impl Into<String>) -> Self {
        StripeError {
            message: message.into(),
            error_type: None,
            code: None,
        }
    }
}

/// What `confirmPayment` resolves with when it does not redirect.
#[derive(Deserialize, Debug, Default)]
struct ConfirmOutcome {
    #[serde(default)]
    error: Option<StripeError>,
}

/// What `retrievePaymentIntent` resolves with.
#[derive(Deserialize, Debug)]
struct RetrieveOutcome {
    #[serde(rename = "paymentIntent", default)]
    payment_intent: Option<PaymentIntent>,
    #[serde(default)]
    error: Option<StripeError>,
}

/// A live `window.Stripe` instance.
#[derive(Debug, Clone)]
pub struct StripeJs {
    inner: JsStripe,
}

impl StripeJs {
    /// `Stripe(publishableKey)`. Fails when Stripe.js is not loaded yet.
    pub fn new(publishable_key: &str) -> Result<Self, StripeError> {
        let inner = new_stripe(publishable_key).map_err(js_to_stripe_error)?;
        Ok(StripeJs { inner })
    }
}

#[async_trait(?Send)]
impl PaymentProvider for StripeJs {
    type Elements = JsElements;

    fn elements(&self, options: &ElementsOptions) -> Result<JsElements, StripeError> {
        let opts_js = to_js_object(options)?;
        self.inner.elements(opts_js).map_err(js_to_stripe_error)
    }

    fn mount_payment_element(
        &self,
        elements: &JsElements,
        selector: &str,
        options: Option<&PaymentElementOptions>,
    ) -> Result<(), StripeError> {
        let pe_opts_js = match options {
            Some(opts) => to_js_object(opts)?,
            None => JsValue::undefined(),
        };
        let payment_element = elements
            .create_element("payment", pe_opts_js)
            .map_err(js_to_stripe_error)?;
        payment_element.mount(selector).map_err(js_to_stripe_error)
    }

    async fn confirm_payment(
        &self,
        elements: &JsElements,
        params: &ConfirmPaymentParams,
    ) -> Result<(), StripeError> {
        let opts = Object::new();
        let params_js = to_js_object(params)?;
        set_property(&opts, "elements", elements.as_ref())?;
        set_property(&opts, "confirmParams", &params_js)?;

        let promise = self
            .inner
            .confirm_payment(opts.into())
            .map_err(js_to_stripe_error)?;
        let resolved = JsFuture::from(promise).await.map_err(js_to_stripe_error)?;

        // Resolves with `undefined` or `{}` when no immediate error occurred.
        let outcome: ConfirmOutcome = if resolved.is_undefined() || resolved.is_null() {
            ConfirmOutcome::default()
        } else {
            from_value(resolved).map_err(serde_error_to_stripe_error)?
        };
        match outcome.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn retrieve_payment_intent(
        &self,
        client_secret: &str,
    ) -> Result<PaymentIntent, StripeError> {
        let promise = self
            .inner
            .retrieve_payment_intent(client_secret)
            .map_err(js_to_stripe_error)?;
        let resolved = JsFuture::from(promise).await.map_err(js_to_stripe_error)?;
        let outcome: RetrieveOutcome = from_value(resolved).map_err(serde_error_to_stripe_error)?;
        match (outcome.payment_intent, outcome.error) {
            (_, Some(err)) => Err(err),
            (Some(intent), None) => Ok(intent),
            (None, None) => Err(StripeError::local(
                "retrievePaymentIntent returned no paymentIntent",
            )),
        }
    }
}

/// Serialize into plain JS objects. Stripe.js reads options as properties, and the
/// default serializer would turn flattened structs and `serde_json` maps into `Map`s.
fn to_js_object<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, StripeError> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(serde_error_to_stripe_error)
}

fn set_property(target: &Object, key: &str, value: &JsValue) -> Result<(), StripeError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(js_to_stripe_error)
}

/// Convert any caught `JsValue` into a `StripeError` with best effort.
pub(crate) fn js_to_stripe_error(value: JsValue) -> StripeError {
    from_value::<StripeError>(value.clone()).unwrap_or_else(|_| {
        StripeError::local(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    })
}

/// Convert a `serde_wasm_bindgen::Error` into `StripeError`.
fn serde_error_to_stripe_error(err: serde_wasm_bindgen::Error) -> StripeError {
    StripeError::local(err.to_string())
}
