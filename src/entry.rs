//! JS-callable entry points for pages that drive checkout from plain script.
//!
//! ```js
//! import init, { setupPayment, handlePaymentStatus } from "./yew_stripe_bridge.js";
//!
//! await init();
//! const config = { publishableKey: "pk_test_..." };
//! setupPayment(config, clientSecret, "https://shop.example/checkout/complete");
//! // on the return page:
//! const status = await handlePaymentStatus(config);
//! ```

use wasm_bindgen::prelude::*;

use crate::bridge::CheckoutBridge;
use crate::client::StripeJs;
use crate::config::BridgeConfig;
use crate::error::Result;
use crate::logging;
use crate::page::WebPage;

/// The bridge wired to the live Stripe.js and document.
pub type WebCheckoutBridge = CheckoutBridge<StripeJs, WebPage>;

/// Build a [`WebCheckoutBridge`]. Stripe.js must already be loaded.
pub fn connect(config: BridgeConfig) -> Result<WebCheckoutBridge> {
    logging::init(config.log_level);
    let stripe = StripeJs::new(&config.publishable_key)?;
    Ok(CheckoutBridge::new(stripe, WebPage::new(), config))
}

/// `setupPayment(config, clientSecret, returnUrl)`
#[wasm_bindgen(js_name = setupPayment)]
pub fn setup_payment(
    config: JsValue,
    client_secret: &str,
    return_url: &str,
) -> std::result::Result<(), JsError> {
    let bridge = connect(BridgeConfig::from_js(config)?)?;
    bridge.setup_payment(client_secret, return_url)?;
    Ok(())
}

/// `handlePaymentStatus(config)`, resolving to the PaymentIntent status string.
#[wasm_bindgen(js_name = handlePaymentStatus)]
pub async fn handle_payment_status(config: JsValue) -> std::result::Result<String, JsError> {
    let bridge = connect(BridgeConfig::from_js(config)?)?;
    let status = bridge.handle_payment_status().await?;
    Ok(status.into())
}
