//! The hosting page as seen by the bridge: a few elements looked up by id, a form
//! submit hook and the current query string.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Event, UrlSearchParams};

use crate::error::{BridgeError, Result};

/// A submit event as the handler sees it.
pub trait SubmitEvent {
    fn prevent_default(&self);
}

impl SubmitEvent for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self)
    }
}

/// Runs synchronously inside the event dispatch; the returned future is spawned
/// afterwards.
pub type SubmitHandler = Rc<dyn Fn(&dyn SubmitEvent) -> LocalBoxFuture<'static, ()>>;

/// DOM and URL operations the bridge performs.
pub trait CheckoutPage {
    /// Replace the text content of the element with `id`.
    fn set_text(&self, id: &str, text: &str) -> Result<()>;

    /// Value of `name` in the current location's query string.
    fn query_param(&self, name: &str) -> Option<String>;

    /// Attach `handler` as a `submit` listener on the form with `id`.
    fn on_submit(&self, form_id: &str, handler: SubmitHandler) -> Result<()>;
}

/// [`CheckoutPage`] over the live `window.document`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebPage;

impl WebPage {
    pub fn new() -> Self {
        WebPage
    }

    fn element(&self, id: &str) -> Result<web_sys::Element> {
        gloo_utils::document()
            .get_element_by_id(id)
            .ok_or_else(|| BridgeError::MissingElement(id.to_string()))
    }
}

impl CheckoutPage for WebPage {
    fn set_text(&self, id: &str, text: &str) -> Result<()> {
        self.element(id)?.set_text_content(Some(text));
        Ok(())
    }

    fn query_param(&self, name: &str) -> Option<String> {
        let search = gloo_utils::window().location().search().ok()?;
        UrlSearchParams::new_with_str(&search).ok()?.get(name)
    }

    fn on_submit(&self, form_id: &str, handler: SubmitHandler) -> Result<()> {
        let form = self.element(form_id)?;
        let listener = Closure::<dyn Fn(Event)>::new(move |event: Event| {
            let fut = handler(&event);
            wasm_bindgen_futures::spawn_local(fut);
        });
        form.add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        // The listener lives as long as the page.
        listener.forget();
        Ok(())
    }
}

fn dom_error(value: JsValue) -> BridgeError {
    BridgeError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
