use actix::Actor;
use colored::Color;
use common::config::TrackerConfig;
use common::constants::CONFIG_PATH_ENV;
use common::logger::Logger;
use std::env;
use std::sync::Arc;
use tokio::sync::Notify;
use tracker::live_activity::console::ConsoleActivityCenter;
use tracker::shutdown::wait_for_shutdown;
use tracker::tracker_actors::tracking_manager::TrackingManager;
use tracker::tracker_actors::ui_handler::UIHandler;

#[actix::main]
async fn main() -> std::io::Result<()> {
    let logger = Logger::new("tracker", Color::Cyan);

    // Config path: first argument, then the environment
    let config_path = env::args().nth(1).or_else(|| env::var(CONFIG_PATH_ENV).ok());
    let config = match config_path {
        Some(path) => match TrackerConfig::from_file(&path) {
            Ok(config) => {
                logger.info(format!("Configuration loaded from {}", path));
                config
            }
            Err(e) => {
                logger.error(format!("Invalid configuration {}: {}", path, e));
                std::process::exit(1);
            }
        },
        None => TrackerConfig::default(),
    };

    logger.info(format!(
        "Simulating {} steps, one every {:?}; delivered activities end after {:?}",
        config.script.len(),
        config.advance_interval,
        config.auto_end_delay
    ));

    let channel = ConsoleActivityCenter::new(&config);
    let manager = TrackingManager::new(Box::new(channel), &config).start();

    let shutdown = Arc::new(Notify::new());
    UIHandler::new(
        manager.clone(),
        shutdown.clone(),
        Logger::new("panel", Color::Magenta),
    )
    .start();

    wait_for_shutdown(&manager, shutdown, &logger).await;
    actix::System::current().stop();
    Ok(())
}
