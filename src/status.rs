//! PaymentIntent status as reported by Stripe, and the text shown for it.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const SUCCEEDED_MESSAGE: &str = "Success! Payment received.";
pub const PROCESSING_MESSAGE: &str =
    "Payment processing. We'll update you when payment is received.";
pub const REQUIRES_PAYMENT_METHOD_MESSAGE: &str =
    "Payment failed. Please try another payment method.";
pub const FALLBACK_MESSAGE: &str = "Something went wrong.";

/// Status of a PaymentIntent.
///
/// Only the statuses the checkout page reacts to get their own variant. Anything
/// else Stripe reports (`canceled`, `requires_action`, ...) lands in `Other` with
/// the raw value kept for logging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Succeeded,
    Processing,
    RequiresPaymentMethod,
    Other(String),
}

impl PaymentStatus {
    /// The message written to the status element for this status.
    pub fn message(&self) -> &'static str {
        match self {
            PaymentStatus::Succeeded => SUCCEEDED_MESSAGE,
            PaymentStatus::Processing => PROCESSING_MESSAGE,
            PaymentStatus::RequiresPaymentMethod => REQUIRES_PAYMENT_METHOD_MESSAGE,
            PaymentStatus::Other(_) => FALLBACK_MESSAGE,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Succeeded => "succeeded",
            PaymentStatus::Processing => "processing",
            PaymentStatus::RequiresPaymentMethod => "requires_payment_method",
            PaymentStatus::Other(raw) => raw,
        }
    }
}

impl From<&str> for PaymentStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "succeeded" => PaymentStatus::Succeeded,
            "processing" => PaymentStatus::Processing,
            "requires_payment_method" => PaymentStatus::RequiresPaymentMethod,
            other => PaymentStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(raw: String) -> Self {
        PaymentStatus::from(raw.as_str())
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("succeeded", "Success! Payment received.")]
    #[case("processing", "Payment processing. We'll update you when payment is received.")]
    #[case("requires_payment_method", "Payment failed. Please try another payment method.")]
    #[case("canceled", "Something went wrong.")]
    #[case("requires_action", "Something went wrong.")]
    #[case("", "Something went wrong.")]
    fn status_maps_to_message(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(PaymentStatus::from(raw).message(), expected);
    }

    #[test]
    fn unknown_status_keeps_raw_value() {
        let status: PaymentStatus = serde_json::from_str("\"canceled\"").unwrap();
        assert_eq!(status, PaymentStatus::Other("canceled".into()));
        assert_eq!(status.to_string(), "canceled");
    }

    #[test]
    fn known_status_deserializes_from_wire_name() {
        let status: PaymentStatus = serde_json::from_str("\"requires_payment_method\"").unwrap();
        assert_eq!(status, PaymentStatus::RequiresPaymentMethod);
    }
}
