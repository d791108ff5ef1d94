use crate::messages::tracking_messages::StopTracking;
use crate::tracker_actors::tracking_manager::TrackingManager;
use actix::Addr;
use common::logger::Logger;
use std::sync::Arc;
use tokio::signal::ctrl_c;
use tokio::sync::Notify;

/// Waits for Ctrl-C or a `quit` from the panel, then ends any live activity.
pub async fn wait_for_shutdown(
    manager: &Addr<TrackingManager>,
    shutdown: Arc<Notify>,
    logger: &Logger,
) {
    tokio::select! {
        _ = ctrl_c() => {
            logger.info("Ctrl-C received, shutting down...");
        }
        _ = shutdown.notified() => {
            logger.info("Shutting down...");
        }
    }

    if let Err(e) = manager.send(StopTracking).await {
        logger.error(format!("Could not stop tracking cleanly: {}", e));
    }
}
