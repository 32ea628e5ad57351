//! The checkout bridge: mounts the Payment Element, forwards form submissions to
//! `confirmPayment` and renders the status Stripe reports after the redirect back.

use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use url::Url;

use crate::client::{ConfirmPaymentParams, ElementsOptions, StripeError};
use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};
use crate::page::{CheckoutPage, SubmitEvent, SubmitHandler};
use crate::provider::PaymentProvider;
use crate::status::{PaymentStatus, FALLBACK_MESSAGE};

/// Query parameter Stripe appends to the return URL.
pub const CLIENT_SECRET_PARAM: &str = "payment_intent_client_secret";

/// Connects a [`PaymentProvider`] to a [`CheckoutPage`].
pub struct CheckoutBridge<P, D> {
    provider: Rc<P>,
    page: Rc<D>,
    config: Rc<BridgeConfig>,
}

impl<P, D> Clone for CheckoutBridge<P, D> {
    fn clone(&self) -> Self {
        CheckoutBridge {
            provider: Rc::clone(&self.provider),
            page: Rc::clone(&self.page),
            config: Rc::clone(&self.config),
        }
    }
}

impl<P, D> CheckoutBridge<P, D>
where
    P: PaymentProvider + 'static,
    D: CheckoutPage + 'static,
{
    pub fn new(provider: P, page: D, config: BridgeConfig) -> Self {
        CheckoutBridge {
            provider: Rc::new(provider),
            page: Rc::new(page),
            config: Rc::new(config),
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Mount the Payment Element for `client_secret` and hook the checkout form.
    ///
    /// Each form submission prevents the browser's own navigation and asks Stripe to
    /// confirm the payment with `return_url`. An immediate error is written to the
    /// error element. Otherwise Stripe takes the browser away and the outcome is
    /// picked up later by [`handle_payment_status`](Self::handle_payment_status).
    ///
    /// Submissions are not deduplicated.
    pub fn setup_payment(&self, client_secret: &str, return_url: &str) -> Result<()> {
        if client_secret.trim().is_empty() {
            return Err(BridgeError::MissingClientSecret);
        }
        Url::parse(return_url).map_err(|source| BridgeError::InvalidReturnUrl {
            url: return_url.to_string(),
            source,
        })?;

        let ids = &self.config.element_ids;
        let options = ElementsOptions {
            client_secret: client_secret.to_string(),
            appearance: self.config.appearance.clone(),
        };
        let elements = self.provider.elements(&options)?;
        self.provider.mount_payment_element(
            &elements,
            &ids.payment_element_selector(),
            self.config.payment_element_options.as_ref(),
        )?;
        log::debug!("payment element mounted into #{}", ids.payment_element);

        let bridge = self.clone();
        let return_url = return_url.to_string();
        let handler: SubmitHandler = Rc::new(
            move |event: &dyn SubmitEvent| -> LocalBoxFuture<'static, ()> {
                event.prevent_default();
                let bridge = bridge.clone();
                let elements = elements.clone();
                let return_url = return_url.clone();
                async move { bridge.confirm(&elements, return_url).await }.boxed_local()
            },
        );
        self.page.on_submit(&ids.payment_form, handler)?;
        log::info!("checkout form #{} ready", ids.payment_form);
        Ok(())
    }

    async fn confirm(&self, elements: &P::Elements, return_url: String) {
        let params = ConfirmPaymentParams {
            return_url: Some(return_url),
            extra: None,
        };
        match self.provider.confirm_payment(elements, &params).await {
            Ok(()) => log::debug!("payment confirmation handed off to stripe"),
            Err(err) => {
                log::warn!(
                    "payment confirmation failed: {} (type: {:?}, code: {:?})",
                    err.message,
                    err.error_type,
                    err.code
                );
                let target = &self.config.element_ids.error_message;
                if let Err(dom_err) = self.page.set_text(target, &err.message) {
                    log::error!("could not show confirmation error: {}", dom_err);
                }
            }
        }
    }

    /// Resolve the PaymentIntent named in the current URL and show its status.
    ///
    /// A missing query parameter is looked up as an empty secret. The caller
    /// decides what to do on `RequiresPaymentMethod`; nothing is redirected here.
    pub async fn handle_payment_status(&self) -> Result<PaymentStatus> {
        let client_secret = self.page.query_param(CLIENT_SECRET_PARAM).unwrap_or_default();
        if client_secret.is_empty() {
            log::debug!("no {} in the current url", CLIENT_SECRET_PARAM);
        }
        let target = &self.config.element_ids.message;

        let intent = match self.provider.retrieve_payment_intent(&client_secret).await {
            Ok(intent) => intent,
            Err(err) => return Err(self.status_lookup_failed(target, err)),
        };
        if let PaymentStatus::Other(raw) = &intent.status {
            log::warn!("unexpected payment intent status {:?}", raw);
        }
        log::info!(
            "payment intent {} is {}",
            intent.id.as_deref().unwrap_or("<unknown>"),
            intent.status
        );
        self.page.set_text(target, intent.status.message())?;
        Ok(intent.status)
    }

    fn status_lookup_failed(&self, target: &str, err: StripeError) -> BridgeError {
        log::error!("could not retrieve payment intent: {}", err);
        if let Err(dom_err) = self.page.set_text(target, FALLBACK_MESSAGE) {
            log::error!("could not show payment status: {}", dom_err);
        }
        BridgeError::Provider(err)
    }
}
