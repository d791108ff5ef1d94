pub mod live_activity;
pub mod messages;
pub mod shutdown;
pub mod tracker_actors;
