pub mod console;
pub mod presentation;

use common::errors::ActivityError;
use common::types::activity::{ActivityId, DeliveryTrackingAttributes};
use common::types::tracking_state::TrackingState;

/// Surface that shows live activities outside the application, such as the
/// lock screen or the status area.
///
/// Updates and endings are fire-and-forget: the tracker never waits for the
/// surface to render and never retries.
pub trait LiveActivityChannel {
    /// Registers a new activity showing `initial_state`.
    fn request(
        &mut self,
        attributes: &DeliveryTrackingAttributes,
        initial_state: &TrackingState,
    ) -> Result<ActivityId, ActivityError>;

    /// Replaces the state shown by the activity `id`.
    fn update(&mut self, id: &ActivityId, state: &TrackingState);

    /// Removes the activity `id` from the surface.
    fn end(&mut self, id: &ActivityId);
}
