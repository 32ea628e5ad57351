//! interop.rs
//!
//! Custom Yew hook to load Stripe.js v3 at runtime (no inline JS).
//!
//! # Overview
//! `use_stripejs(src)` injects a single
//! `<script id="stripejs-sdk" src="https://js.stripe.com/v3/" defer>`
//! into `<head>` on first use, returns `false` until the
//! script's `load` event fires, then returns `true`.
//!
//! # Usage
//! ```rust,ignore
//! use yew::prelude::*;
//! use yew_stripe_bridge::{use_stripejs, STRIPE_JS_SRC};
//!
//! #[function_component(App)]
//! fn app() -> Html {
//!     let stripe_ready = use_stripejs(STRIPE_JS_SRC.to_string());
//!     html! {
//!         if stripe_ready {
//!             <p>{"Stripe.js loaded"}</p>
//!         } else {
//!             <p>{"Loading Stripe.js..."}</p>
//!         }
//!     }
//! }
//! ```

use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::js_sys::Reflect;
use web_sys::HtmlScriptElement;
use yew::functional::hook;
use yew::prelude::*;

const SCRIPT_ID: &str = "stripejs-sdk";

/// `true` once `window.Stripe` exists.
pub fn stripe_js_loaded() -> bool {
    web_sys::window()
        .and_then(|win| Reflect::has(&win, &JsValue::from_str("Stripe")).ok())
        .unwrap_or(false)
}

/// Custom hook: load Stripe.js from `src` exactly once per page and track readiness.
///
/// Several components may call this; only the first inserts the script, the others
/// pick up the same `load` event.
#[hook]
pub fn use_stripejs(src: String) -> bool {
    let loaded = use_state(stripe_js_loaded);

    {
        let loaded = loaded.clone();
        use_effect_with(src, move |src| {
            if !*loaded {
                if let Err(err) = inject_script(src, loaded) {
                    log::error!("could not load Stripe.js: {:?}", err);
                }
            }
            || ()
        });
    }

    *loaded
}

fn inject_script(src: &str, loaded: UseStateHandle<bool>) -> Result<(), JsValue> {
    let document = gloo_utils::document();

    let script: HtmlScriptElement = match document.get_element_by_id(SCRIPT_ID) {
        Some(existing) => existing.dyn_into()?,
        None => {
            let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
            script.set_id(SCRIPT_ID);
            script.set_src(src);
            script.set_defer(true);
            document
                .head()
                .ok_or_else(|| JsValue::from_str("document has no <head>"))?
                .append_child(&script)?;
            log::debug!("injected {}", src);
            script
        }
    };

    let onload = Closure::<dyn Fn()>::new(move || loaded.set(true));
    script.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    // Lives until the load event.
    onload.forget();
    Ok(())
}
