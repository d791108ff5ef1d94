use crate::constants::WIDGET_URL_SCHEME;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Static attributes of a live activity, fixed for its whole lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryTrackingAttributes {
    pub order_id: String,
    pub customer_name: String,
}

impl DeliveryTrackingAttributes {
    pub fn new(order_id: impl Into<String>, customer_name: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            customer_name: customer_name.into(),
        }
    }

    /// Deep link opened when the user taps the live activity.
    pub fn widget_url(&self) -> String {
        format!("{}://order/{}", WIDGET_URL_SCHEME, self.order_id)
    }
}

/// Identifier handed out by the live activity channel when a request succeeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ActivityId(pub String);

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_url_points_to_order() {
        let attributes = DeliveryTrackingAttributes::new("12345", "João Silva");
        assert_eq!(attributes.widget_url(), "deliveryapp://order/12345");
    }
}
