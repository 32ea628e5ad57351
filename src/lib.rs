pub mod bindings;
pub mod bridge;
pub mod client;
pub mod components;
pub mod config;
pub mod entry;
pub mod error;
pub mod interop;
pub mod logging;
pub mod page;
pub mod provider;
pub mod status;

pub use bindings::*;
pub use bridge::{CheckoutBridge, CLIENT_SECRET_PARAM};
pub use client::{
    ConfirmPaymentParams, ElementsOptions, PaymentElementOptions, PaymentIntent, StripeError,
    StripeJs,
};
pub use components::*;
pub use config::{BridgeConfig, ElementIds, STRIPE_JS_SRC};
pub use entry::{connect, WebCheckoutBridge};
pub use error::{BridgeError, Result};
pub use interop::use_stripejs;
pub use page::{CheckoutPage, SubmitEvent, SubmitHandler, WebPage};
pub use provider::PaymentProvider;
pub use status::PaymentStatus;
