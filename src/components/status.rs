use yew::prelude::*;

use crate::config::BridgeConfig;
use crate::entry::connect;
use crate::interop::use_stripejs;
use crate::status::PaymentStatus;

/// Properties for [`PaymentStatusMessage`].
#[derive(Properties, PartialEq, Clone)]
pub struct PaymentStatusMessageProps {
    pub config: BridgeConfig,
    /// Receives the resolved status, e.g. to send the customer back to checkout
    /// on `RequiresPaymentMethod`.
    #[prop_or_default]
    pub on_status: Callback<PaymentStatus>,
}

/// Renders the status element for the return page and fills it once Stripe.js is
/// available.
#[function_component(PaymentStatusMessage)]
pub fn payment_status_message(props: &PaymentStatusMessageProps) -> Html {
    let stripe_ready = use_stripejs(props.config.script_src.clone());

    {
        let props = props.clone();
        use_effect_with(stripe_ready, move |ready| {
            if *ready {
                wasm_bindgen_futures::spawn_local(async move {
                    let bridge = match connect(props.config.clone()) {
                        Ok(bridge) => bridge,
                        Err(err) => {
                            log::error!("payment status unavailable: {}", err);
                            return;
                        }
                    };
                    match bridge.handle_payment_status().await {
                        Ok(status) => props.on_status.emit(status),
                        Err(err) => log::error!("payment status unavailable: {}", err),
                    }
                });
            }
            || ()
        });
    }

    html! {
        <div id={props.config.element_ids.message.clone()} role="status" />
    }
}
