pub mod config;
pub mod constants;
pub mod errors;
pub mod logger;
pub mod script;
pub mod types;
