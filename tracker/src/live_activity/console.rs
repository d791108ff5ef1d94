use crate::live_activity::LiveActivityChannel;
use crate::live_activity::presentation::{compact, expanded, lock_screen, minimal, progress_color};
use colored::*;
use common::config::TrackerConfig;
use common::errors::ActivityError;
use common::logger::Logger;
use common::types::activity::{ActivityId, DeliveryTrackingAttributes};
use common::types::tracking_state::TrackingState;
use std::collections::HashMap;
use uuid::Uuid;

/// Live activity surface that prints every activity on the terminal.
pub struct ConsoleActivityCenter {
    /// Actividades visibles, con sus atributos.
    pub activities: HashMap<ActivityId, DeliveryTrackingAttributes>,
    pub activities_enabled: bool,
    pub max_activities: usize,
    /// Probabilidad de rechazar una nueva actividad.
    pub rejection_probability: f32,
    pub logger: Logger,
}

impl ConsoleActivityCenter {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            activities: HashMap::new(),
            activities_enabled: config.activities_enabled,
            max_activities: config.max_activities,
            rejection_probability: config.rejection_probability,
            logger: Logger::new("Live Activity", Color::Green),
        }
    }

    pub fn active_count(&self) -> usize {
        self.activities.len()
    }

    fn render(&self, attributes: &DeliveryTrackingAttributes, state: &TrackingState) {
        let color = progress_color(state.status);
        println!("{}", "┌────────────────────────────────────────────".dimmed());
        for (i, line) in lock_screen(attributes, state).iter().enumerate() {
            // the progress bar is the fourth line of the card
            let line = if i == 3 {
                line.color(color).to_string()
            } else {
                line.clone()
            };
            println!("{} {}", "│".dimmed(), line);
        }
        println!("{}", "└────────────────────────────────────────────".dimmed());

        // the status area always tints its progress bar green
        for line in expanded(state) {
            let line = if line.starts_with('[') {
                line.green().to_string()
            } else {
                line
            };
            println!("  {} {}", "◖".dimmed(), line);
        }
        self.logger.debug(format!(
            "Compact: {} | Minimal: {}",
            compact(state),
            minimal(state)
        ));
    }
}

impl LiveActivityChannel for ConsoleActivityCenter {
    fn request(
        &mut self,
        attributes: &DeliveryTrackingAttributes,
        initial_state: &TrackingState,
    ) -> Result<ActivityId, ActivityError> {
        if !self.activities_enabled {
            return Err(ActivityError::ActivitiesDisabled);
        }
        if self.activities.len() >= self.max_activities {
            return Err(ActivityError::TooManyActivities {
                limit: self.max_activities,
            });
        }
        if rand::random::<f32>() < self.rejection_probability {
            return Err(ActivityError::Rejected(
                "the system refused the activity".to_string(),
            ));
        }

        let id = ActivityId(Uuid::new_v4().to_string());
        self.logger.info(format!(
            "Activity {} requested for order {} ({})",
            id, attributes.order_id, attributes.customer_name
        ));
        self.render(attributes, initial_state);
        self.activities.insert(id.clone(), attributes.clone());
        Ok(id)
    }

    fn update(&mut self, id: &ActivityId, state: &TrackingState) {
        match self.activities.get(id) {
            Some(attributes) => {
                self.logger.info(format!(
                    "Activity {} updated to {}",
                    id,
                    state.status.display_name()
                ));
                self.render(attributes, state);
            }
            None => {
                self.logger
                    .warn(format!("No live activity with id {}, update dropped", id));
            }
        }
    }

    fn end(&mut self, id: &ActivityId) {
        match self.activities.remove(id) {
            Some(attributes) => {
                self.logger.info(format!(
                    "Activity {} for order {} ended",
                    id, attributes.order_id
                ));
            }
            None => {
                self.logger
                    .warn(format!("No live activity with id {} to end", id));
            }
        }
    }
}
