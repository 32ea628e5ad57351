//! A Yew checkout form for apps that render the page themselves.
//!
//! The component loads Stripe.js, renders the form, mount point and error element
//! under the configured ids, then hands them to [`CheckoutBridge::setup_payment`].
//!
//! [`CheckoutBridge::setup_payment`]: crate::bridge::CheckoutBridge::setup_payment

use yew::prelude::*;

use crate::config::BridgeConfig;
use crate::entry::connect;
use crate::error::Result;
use crate::interop::use_stripejs;

/// Properties for [`CheckoutForm`].
///
/// * `config` – publishable key, appearance and element ids.
/// * `client_secret` – the PaymentIntent client secret from your backend.
/// * `return_url` – absolute URL Stripe redirects to after confirmation.
/// * `button_label` – overrides the submit button text (default: `"Pay now"`).
/// * `on_setup_error` – called with a description when mounting fails.
/// * `children` – extra nodes (e.g. an order summary) rendered inside the form.
#[derive(Properties, PartialEq, Clone)]
pub struct CheckoutFormProps {
    pub config: BridgeConfig,
    pub client_secret: AttrValue,
    pub return_url: AttrValue,
    #[prop_or_default]
    pub button_label: Option<AttrValue>,
    #[prop_or_default]
    pub on_setup_error: Callback<String>,
    #[prop_or_default]
    pub children: Html,
}

/// Yew function component rendering the checkout form.
///
/// ```rust,ignore
/// html! {
///     <CheckoutForm
///         config={BridgeConfig::new("pk_test_123")}
///         client_secret={client_secret}
///         return_url="https://shop.example/checkout/complete"
///     >
///         <p>{ "Your order: Awesome T-shirt – $25.00" }</p>
///     </CheckoutForm>
/// }
/// ```
#[function_component(CheckoutForm)]
pub fn checkout_form(props: &CheckoutFormProps) -> Html {
    let stripe_ready = use_stripejs(props.config.script_src.clone());

    {
        let props = props.clone();
        let deps = (
            stripe_ready,
            props.client_secret.clone(),
            props.return_url.clone(),
        );
        use_effect_with(deps, move |(ready, _, _)| {
            if *ready {
                if let Err(err) = mount(&props) {
                    log::error!("checkout setup failed: {}", err);
                    props.on_setup_error.emit(err.to_string());
                }
            }
            || ()
        });
    }

    let ids = &props.config.element_ids;
    let label = props
        .button_label
        .clone()
        .unwrap_or_else(|| AttrValue::from("Pay now"));

    // A new PaymentIntent gets a fresh form, so the previous submit listener and
    // Payment Element go away with the old node.
    let key = format!("{}|{}", props.client_secret, props.return_url);

    html! {
        <form key={key} id={ids.payment_form.clone()}>
            { props.children.clone() }
            <div id={ids.payment_element.clone()} />
            <button type="submit" disabled={!stripe_ready}>{ label }</button>
            <div id={ids.error_message.clone()} role="alert" />
        </form>
    }
}

fn mount(props: &CheckoutFormProps) -> Result<()> {
    let bridge = connect(props.config.clone())?;
    bridge.setup_payment(&props.client_secret, &props.return_url)
}
