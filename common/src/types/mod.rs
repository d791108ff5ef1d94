pub mod activity;
pub mod delivery_status;
pub mod tracking_state;
