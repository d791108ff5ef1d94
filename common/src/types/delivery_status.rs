use crate::errors::UnknownStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enum representing the status of an order being tracked
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// The restaurant is preparing the order
    Preparing,
    /// A driver is picking the order up at the restaurant
    PickingUp,
    /// The driver is on the way to the customer
    OnTheWay,
    /// The order reached the customer
    Delivered,
    /// The order was cancelled
    Cancelled,
}

impl DeliveryStatus {
    /// Every status, in the order a delivery goes through them.
    pub const ALL: [DeliveryStatus; 5] = [
        DeliveryStatus::Preparing,
        DeliveryStatus::PickingUp,
        DeliveryStatus::OnTheWay,
        DeliveryStatus::Delivered,
        DeliveryStatus::Cancelled,
    ];

    /// Label shown next to the icon on the live activity.
    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryStatus::Preparing => "Preparando",
            DeliveryStatus::PickingUp => "Coletando",
            DeliveryStatus::OnTheWay => "A caminho",
            DeliveryStatus::Delivered => "Entregue",
            DeliveryStatus::Cancelled => "Cancelado",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DeliveryStatus::Preparing => "🍳",
            DeliveryStatus::PickingUp => "🚗",
            DeliveryStatus::OnTheWay => "🚚",
            DeliveryStatus::Delivered => "✅",
            DeliveryStatus::Cancelled => "❌",
        }
    }

    /// Fraction of the progress bar filled for this status, in `[0.0, 1.0]`.
    pub fn progress_percentage(&self) -> f64 {
        match self {
            DeliveryStatus::Preparing => 0.25,
            DeliveryStatus::PickingUp => 0.5,
            DeliveryStatus::OnTheWay => 0.75,
            DeliveryStatus::Delivered => 1.0,
            DeliveryStatus::Cancelled => 0.0,
        }
    }

    /// Name used on the wire and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Preparing => "preparing",
            DeliveryStatus::PickingUp => "picking_up",
            DeliveryStatus::OnTheWay => "on_the_way",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.display_name())
    }
}

impl FromStr for DeliveryStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        DeliveryStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == name)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_progress_percentage_per_status() {
        assert_eq!(DeliveryStatus::Preparing.progress_percentage(), 0.25);
        assert_eq!(DeliveryStatus::PickingUp.progress_percentage(), 0.5);
        assert_eq!(DeliveryStatus::OnTheWay.progress_percentage(), 0.75);
        assert_eq!(DeliveryStatus::Delivered.progress_percentage(), 1.0);
        assert_eq!(DeliveryStatus::Cancelled.progress_percentage(), 0.0);
    }

    #[test]
    fn test_progress_grows_along_the_delivery_except_cancelled() {
        let fractions: Vec<f64> = DeliveryStatus::ALL
            .iter()
            .filter(|s| **s != DeliveryStatus::Cancelled)
            .map(|s| s.progress_percentage())
            .collect();
        assert!(fractions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_labels_are_unique() {
        let labels: HashSet<&str> = DeliveryStatus::ALL
            .iter()
            .map(|s| s.display_name())
            .collect();
        assert_eq!(labels.len(), DeliveryStatus::ALL.len());
    }

    #[test]
    fn test_parse_status_names() {
        assert_eq!(
            "on_the_way".parse::<DeliveryStatus>().unwrap(),
            DeliveryStatus::OnTheWay
        );
        assert_eq!(
            " Picking_Up ".parse::<DeliveryStatus>().unwrap(),
            DeliveryStatus::PickingUp
        );
        assert!("lost".parse::<DeliveryStatus>().is_err());
    }

    #[test]
    fn test_serializes_with_snake_case_names() {
        let json = serde_json::to_string(&DeliveryStatus::PickingUp).unwrap();
        assert_eq!(json, "\"picking_up\"");
        let status: DeliveryStatus = serde_json::from_str("\"on_the_way\"").unwrap();
        assert_eq!(status, DeliveryStatus::OnTheWay);
    }
}
