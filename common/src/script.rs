use crate::constants::{MOCK_DRIVER_NAME, MOCK_ORDER_NUMBER, MOCK_RESTAURANT_NAME};
use crate::errors::ConfigError;
use crate::types::delivery_status::DeliveryStatus;
use crate::types::tracking_state::TrackingState;
use serde::{Deserialize, Serialize};

/// Ordered snapshots a simulated delivery walks through.
///
/// A script always has at least one step; step 0 is what a new session
/// shows first and what status lookups fall back to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<TrackingState>", into = "Vec<TrackingState>")]
pub struct DeliveryScript {
    steps: Vec<TrackingState>,
}

impl DeliveryScript {
    pub fn new(steps: Vec<TrackingState>) -> Result<Self, ConfigError> {
        if steps.is_empty() {
            return Err(ConfigError::EmptyScript);
        }
        Ok(Self { steps })
    }

    /// The five-step demo delivery from Pizza Express.
    pub fn mock() -> Self {
        let step = |status, driver: &str, eta: &str, location: &str| TrackingState {
            status,
            driver_name: driver.to_string(),
            estimated_time: eta.to_string(),
            current_location: location.to_string(),
            order_number: MOCK_ORDER_NUMBER.to_string(),
            restaurant_name: MOCK_RESTAURANT_NAME.to_string(),
            ..TrackingState::default()
        };

        Self {
            steps: vec![
                step(DeliveryStatus::Preparing, "", "25-30 min", ""),
                step(
                    DeliveryStatus::PickingUp,
                    MOCK_DRIVER_NAME,
                    "20-25 min",
                    "Restaurante Pizza Express",
                ),
                step(
                    DeliveryStatus::OnTheWay,
                    MOCK_DRIVER_NAME,
                    "12 min",
                    "Rua das Flores, 123",
                ),
                step(
                    DeliveryStatus::OnTheWay,
                    MOCK_DRIVER_NAME,
                    "5 min",
                    "Próximo ao destino",
                ),
                step(DeliveryStatus::Delivered, MOCK_DRIVER_NAME, "Entregue", "Entregue"),
            ],
        }
    }

    pub fn first(&self) -> &TrackingState {
        &self.steps[0]
    }

    pub fn step(&self, index: usize) -> Option<&TrackingState> {
        self.steps.get(index)
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// First step showing `status`, or step 0 when no step does.
    pub fn first_with_status(&self, status: DeliveryStatus) -> &TrackingState {
        self.steps
            .iter()
            .find(|step| step.status == status)
            .unwrap_or_else(|| self.first())
    }
}

impl Default for DeliveryScript {
    fn default() -> Self {
        Self::mock()
    }
}

impl TryFrom<Vec<TrackingState>> for DeliveryScript {
    type Error = ConfigError;

    fn try_from(steps: Vec<TrackingState>) -> Result<Self, Self::Error> {
        Self::new(steps)
    }
}

impl From<DeliveryScript> for Vec<TrackingState> {
    fn from(script: DeliveryScript) -> Self {
        script.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_script_walks_the_whole_delivery() {
        let script = DeliveryScript::mock();
        let statuses: Vec<DeliveryStatus> = (0..script.len())
            .filter_map(|i| script.step(i))
            .map(|s| s.status)
            .collect();
        assert_eq!(
            statuses,
            vec![
                DeliveryStatus::Preparing,
                DeliveryStatus::PickingUp,
                DeliveryStatus::OnTheWay,
                DeliveryStatus::OnTheWay,
                DeliveryStatus::Delivered,
            ]
        );
        assert_eq!(script.last_index(), 4);
    }

    #[test]
    fn test_mock_script_final_step() {
        let script = DeliveryScript::mock();
        let last = script.step(script.last_index()).unwrap();
        assert_eq!(last.order_number, "12345");
        assert_eq!(last.restaurant_name, "Pizza Express");
        assert_eq!(last.estimated_time, "Entregue");
        assert_eq!(last.driver_name, "Carlos Silva");
    }

    #[test]
    fn test_first_with_status_picks_first_match() {
        let script = DeliveryScript::mock();
        let on_the_way = script.first_with_status(DeliveryStatus::OnTheWay);
        assert_eq!(on_the_way.estimated_time, "12 min");
    }

    #[test]
    fn test_first_with_status_falls_back_to_first_step() {
        let script = DeliveryScript::mock();
        let fallback = script.first_with_status(DeliveryStatus::Cancelled);
        assert_eq!(fallback.status, DeliveryStatus::Preparing);
        assert_eq!(fallback.estimated_time, "25-30 min");
    }

    #[test]
    fn test_empty_script_is_rejected() {
        assert!(matches!(
            DeliveryScript::new(Vec::new()),
            Err(ConfigError::EmptyScript)
        ));
        let parsed: Result<DeliveryScript, _> = serde_json::from_str("[]");
        assert!(parsed.is_err());
    }
}
