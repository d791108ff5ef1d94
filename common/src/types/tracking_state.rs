use crate::constants::DEFAULT_ESTIMATED_TIME;
use crate::types::delivery_status::DeliveryStatus;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Snapshot of an order shown on the live activity.
///
/// Snapshots are never patched field by field: every change replaces the
/// whole value that was last pushed to the channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackingState {
    /// Estado actual de la entrega.
    pub status: DeliveryStatus,
    /// Nombre del repartidor. Vacío mientras no hay uno asignado.
    #[serde(default)]
    pub driver_name: String,
    /// URL de la foto del repartidor, si la hay.
    #[serde(default)]
    pub driver_photo: Option<String>,
    /// Tiempo estimado, en texto libre ("12 min", "Entregue").
    #[serde(default = "default_estimated_time")]
    pub estimated_time: String,
    /// Ubicación actual, en texto libre.
    #[serde(default)]
    pub current_location: String,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub restaurant_name: String,
    /// Marca de tiempo de la última actualización.
    #[serde(default = "SystemTime::now")]
    pub last_update: SystemTime,
}

fn default_estimated_time() -> String {
    DEFAULT_ESTIMATED_TIME.to_string()
}

impl Default for TrackingState {
    fn default() -> Self {
        Self {
            status: DeliveryStatus::Preparing,
            driver_name: String::new(),
            driver_photo: None,
            estimated_time: default_estimated_time(),
            current_location: String::new(),
            order_number: String::new(),
            restaurant_name: String::new(),
            last_update: SystemTime::now(),
        }
    }
}

impl TrackingState {
    /// Same snapshot, stamped with the current time.
    pub fn refreshed(&self) -> Self {
        Self {
            last_update: SystemTime::now(),
            ..self.clone()
        }
    }

    pub fn has_driver(&self) -> bool {
        !self.driver_name.is_empty()
    }
}
