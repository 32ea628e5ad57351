//! The seam between the bridge and the hosted-payments SDK.
//!
//! [`StripeJs`](crate::client::StripeJs) is the browser implementation. Tests drive
//! the bridge with an in-memory double instead.

use async_trait::async_trait;

use crate::client::{
    ConfirmPaymentParams, ElementsOptions, PaymentElementOptions, PaymentIntent, StripeError,
};

/// Operations the checkout bridge needs from the payment provider.
#[async_trait(?Send)]
pub trait PaymentProvider {
    /// Handle to an elements context created by [`elements`](Self::elements).
    type Elements: Clone + 'static;

    /// `stripe.elements(options)`
    fn elements(&self, options: &ElementsOptions) -> Result<Self::Elements, StripeError>;

    /// `elements.create("payment", options).mount(selector)`
    fn mount_payment_element(
        &self,
        elements: &Self::Elements,
        selector: &str,
        options: Option<&PaymentElementOptions>,
    ) -> Result<(), StripeError>;

    /// `stripe.confirmPayment({ elements, confirmParams })`.
    ///
    /// `Err` carries an immediate error. `Ok(())` means the browser is about to be
    /// sent to the provider (or to the return URL).
    async fn confirm_payment(
        &self,
        elements: &Self::Elements,
        params: &ConfirmPaymentParams,
    ) -> Result<(), StripeError>;

    /// `stripe.retrievePaymentIntent(clientSecret)`
    async fn retrieve_payment_intent(
        &self,
        client_secret: &str,
    ) -> Result<PaymentIntent, StripeError>;
}
