mod checkout;
mod status;

pub use checkout::{CheckoutForm, CheckoutFormProps};
pub use status::{PaymentStatusMessage, PaymentStatusMessageProps};
