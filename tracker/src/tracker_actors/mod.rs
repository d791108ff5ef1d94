pub mod tracking_manager;
pub mod ui_handler;
