//! In-memory stand-ins for Stripe.js and the hosting page.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use yew_stripe_bridge::{
    BridgeError, CheckoutPage, ConfirmPaymentParams, ElementIds, ElementsOptions,
    PaymentElementOptions, PaymentIntent, PaymentProvider, PaymentStatus, StripeError,
    SubmitEvent, SubmitHandler,
};

/// Ordered record of calls across the provider, the page and submit events.
pub type Journal = Rc<RefCell<Vec<String>>>;

#[derive(Clone, Debug, PartialEq)]
pub struct FakeElements {
    pub client_secret: String,
}

pub struct ProviderState {
    pub elements: Vec<ElementsOptions>,
    pub mounts: Vec<(String, Option<PaymentElementOptions>)>,
    pub confirmations: Vec<(FakeElements, ConfirmPaymentParams)>,
    pub retrievals: Vec<String>,
    pub confirm_result: Result<(), StripeError>,
    pub retrieve_result: Result<PaymentIntent, StripeError>,
}

#[derive(Clone)]
pub struct FakeProvider {
    pub state: Rc<RefCell<ProviderState>>,
    journal: Journal,
}

impl FakeProvider {
    pub fn new(journal: &Journal) -> Self {
        FakeProvider {
            state: Rc::new(RefCell::new(ProviderState {
                elements: Vec::new(),
                mounts: Vec::new(),
                confirmations: Vec::new(),
                retrievals: Vec::new(),
                confirm_result: Ok(()),
                retrieve_result: Ok(intent("succeeded")),
            })),
            journal: Rc::clone(journal),
        }
    }

    pub fn confirm_fails_with(&self, message: &str) {
        self.state.borrow_mut().confirm_result = Err(card_error(message));
    }

    pub fn retrieve_returns(&self, status: &str) {
        self.state.borrow_mut().retrieve_result = Ok(intent(status));
    }

    pub fn retrieve_fails_with(&self, message: &str) {
        self.state.borrow_mut().retrieve_result = Err(StripeError::local(message));
    }
}

#[async_trait(?Send)]
impl PaymentProvider for FakeProvider {
    type Elements = FakeElements;

    fn elements(&self, options: &ElementsOptions) -> Result<FakeElements, StripeError> {
        self.journal.borrow_mut().push("elements".into());
        self.state.borrow_mut().elements.push(options.clone());
        Ok(FakeElements {
            client_secret: options.client_secret.clone(),
        })
    }

    fn mount_payment_element(
        &self,
        _elements: &FakeElements,
        selector: &str,
        options: Option<&PaymentElementOptions>,
    ) -> Result<(), StripeError> {
        self.journal.borrow_mut().push(format!("mount {}", selector));
        self.state
            .borrow_mut()
            .mounts
            .push((selector.to_string(), options.cloned()));
        Ok(())
    }

    async fn confirm_payment(
        &self,
        elements: &FakeElements,
        params: &ConfirmPaymentParams,
    ) -> Result<(), StripeError> {
        self.journal.borrow_mut().push("confirm_payment".into());
        let mut state = self.state.borrow_mut();
        state.confirmations.push((elements.clone(), params.clone()));
        state.confirm_result.clone()
    }

    async fn retrieve_payment_intent(
        &self,
        client_secret: &str,
    ) -> Result<PaymentIntent, StripeError> {
        self.journal.borrow_mut().push("retrieve_payment_intent".into());
        let mut state = self.state.borrow_mut();
        state.retrievals.push(client_secret.to_string());
        state.retrieve_result.clone()
    }
}

pub struct PageState {
    /// Ids present in the document, with their current text.
    pub texts: HashMap<String, Option<String>>,
    pub query: HashMap<String, String>,
    pub listeners: Vec<(String, SubmitHandler)>,
}

#[derive(Clone)]
pub struct FakePage {
    pub state: Rc<RefCell<PageState>>,
    journal: Journal,
}

impl FakePage {
    /// A page carrying every element in `ids`.
    pub fn with_elements(ids: &ElementIds, journal: &Journal) -> Self {
        let texts = [
            &ids.payment_element,
            &ids.payment_form,
            &ids.error_message,
            &ids.message,
        ]
        .into_iter()
        .map(|id| (id.clone(), None))
        .collect();
        FakePage {
            state: Rc::new(RefCell::new(PageState {
                texts,
                query: HashMap::new(),
                listeners: Vec::new(),
            })),
            journal: Rc::clone(journal),
        }
    }

    pub fn without_element(self, id: &str) -> Self {
        self.state.borrow_mut().texts.remove(id);
        self
    }

    pub fn with_query(self, name: &str, value: &str) -> Self {
        self.state
            .borrow_mut()
            .query
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.state.borrow().texts.get(id).cloned().flatten()
    }

    pub fn listener_count(&self, form_id: &str) -> usize {
        self.state
            .borrow()
            .listeners
            .iter()
            .filter(|(id, _)| id == form_id)
            .count()
    }

    /// Dispatch a submit event to `form_id` and run the spawned work to completion.
    pub fn submit(&self, form_id: &str) -> FakeEvent {
        let handlers: Vec<SubmitHandler> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|(id, _)| id == form_id)
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        let event = FakeEvent {
            journal: Rc::clone(&self.journal),
            prevented: RefCell::new(false),
        };
        for handler in handlers {
            let pending = handler(&event);
            futures::executor::block_on(pending);
        }
        event
    }
}

impl CheckoutPage for FakePage {
    fn set_text(&self, id: &str, text: &str) -> Result<(), BridgeError> {
        self.journal.borrow_mut().push(format!("set_text {}", id));
        match self.state.borrow_mut().texts.get_mut(id) {
            Some(slot) => {
                *slot = Some(text.to_string());
                Ok(())
            }
            None => Err(BridgeError::MissingElement(id.to_string())),
        }
    }

    fn query_param(&self, name: &str) -> Option<String> {
        self.state.borrow().query.get(name).cloned()
    }

    fn on_submit(&self, form_id: &str, handler: SubmitHandler) -> Result<(), BridgeError> {
        let mut state = self.state.borrow_mut();
        if !state.texts.contains_key(form_id) {
            return Err(BridgeError::MissingElement(form_id.to_string()));
        }
        state.listeners.push((form_id.to_string(), handler));
        Ok(())
    }
}

pub struct FakeEvent {
    journal: Journal,
    pub prevented: RefCell<bool>,
}

impl SubmitEvent for FakeEvent {
    fn prevent_default(&self) {
        self.journal.borrow_mut().push("prevent_default".into());
        *self.prevented.borrow_mut() = true;
    }
}

pub fn intent(status: &str) -> PaymentIntent {
    PaymentIntent {
        id: Some("pi_3MtwBwLkdIwHu7ix28a3tqPa".into()),
        status: PaymentStatus::from(status),
        amount: Some(2000),
        currency: Some("usd".into()),
    }
}

pub fn card_error(message: &str) -> StripeError {
    StripeError {
        message: message.to_string(),
        error_type: Some("validation_error".into()),
        code: Some("incomplete_number".into()),
    }
}
