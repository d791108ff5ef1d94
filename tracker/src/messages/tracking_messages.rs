use actix::Message;
use common::types::activity::ActivityId;
use common::types::delivery_status::DeliveryStatus;
use common::types::tracking_state::TrackingState;
use serde::{Deserialize, Serialize};

/////////////////////////////////////////////////////////////////////
// Mensajes hacia el TrackingManager
/////////////////////////////////////////////////////////////////////

/// Message to start tracking an order.
///
/// ## Purpose
/// Stops any session in progress, then opens a live activity for the order
/// and starts the step simulation.
///
/// ## Contents
/// - `order_id`: Identifier of the tracked order. May be empty.
/// - `customer_name`: Name shown with the order. May be empty.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct StartTracking {
    pub order_id: String,
    pub customer_name: String,
}

/// Message to start tracking the built-in test order.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct StartTestDelivery;

/// Message to stop the current session and end its live activity.
///
/// Does nothing when no session is active.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct StopTracking;

/// Message to move the session to the next step of the script.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct UpdateToNextStep;

/// Message to show the first script step with the given status.
///
/// ## Purpose
/// Jumps the displayed state freely, forward or backward. The step cursor
/// used by [`UpdateToNextStep`] is not moved.
///
/// ## Contents
/// - `status`: Status to look up in the script. Falls back to step 0.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct UpdateToStatus {
    pub status: DeliveryStatus,
}

/// Asks whether a session is active.
#[derive(Message, Debug, Clone)]
#[rtype(result = "bool")]
pub struct IsTracking;

/// Asks for a copy of the session state.
#[derive(Message, Debug, Clone)]
#[rtype(result = "TrackingSnapshot")]
pub struct GetSnapshot;

/// Copy of the session state returned by [`GetSnapshot`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingSnapshot {
    pub activity_id: Option<ActivityId>,
    pub current_step: usize,
    pub last_step: usize,
    /// State last pushed to the live activity.
    pub current_state: TrackingState,
}

impl TrackingSnapshot {
    pub fn is_tracking(&self) -> bool {
        self.activity_id.is_some()
    }
}
