use crate::live_activity::LiveActivityChannel;
use crate::messages::tracking_messages::*;
use actix::prelude::*;
use colored::Color;
use common::config::TrackerConfig;
use common::constants::{TEST_CUSTOMER_NAME, TEST_ORDER_ID};
use common::logger::Logger;
use common::script::DeliveryScript;
use common::types::activity::{ActivityId, DeliveryTrackingAttributes};
use common::types::delivery_status::DeliveryStatus;
use common::types::tracking_state::TrackingState;
use std::sync::Arc;
use std::time::Duration;

/// Actor TrackingManager: owner of the single tracking session.
///
/// All session state (activity id, step cursor, displayed state and timers)
/// lives here, so timer callbacks and incoming messages never interleave.
pub struct TrackingManager {
    /// Superficie donde se muestran las actividades.
    pub channel: Box<dyn LiveActivityChannel>,
    /// Pasos simulados de la entrega.
    pub script: Arc<DeliveryScript>,
    pub advance_interval: Duration,
    pub auto_end_delay: Duration,
    /// Actividad en curso. Su presencia indica que hay una sesión activa.
    pub activity_id: Option<ActivityId>,
    /// Posición dentro del guion.
    pub current_step: usize,
    /// Último estado enviado a la actividad.
    pub current_state: TrackingState,
    pub simulation_timer: Option<SpawnHandle>,
    pub auto_end_timer: Option<SpawnHandle>,
    pub logger: Logger,
}

impl TrackingManager {
    pub fn new(channel: Box<dyn LiveActivityChannel>, config: &TrackerConfig) -> Self {
        Self {
            channel,
            script: Arc::new(config.script.clone()),
            advance_interval: config.advance_interval,
            auto_end_delay: config.auto_end_delay,
            activity_id: None,
            current_step: 0,
            current_state: TrackingState::default(),
            simulation_timer: None,
            auto_end_timer: None,
            logger: Logger::new("Tracking", Color::Cyan),
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.activity_id.is_some()
    }

    pub fn snapshot(&self) -> TrackingSnapshot {
        TrackingSnapshot {
            activity_id: self.activity_id.clone(),
            current_step: self.current_step,
            last_step: self.script.last_index(),
            current_state: self.current_state.clone(),
        }
    }

    pub fn start_tracking(
        &mut self,
        order_id: String,
        customer_name: String,
        ctx: &mut Context<Self>,
    ) {
        self.stop_tracking(ctx);

        let attributes = DeliveryTrackingAttributes::new(order_id, customer_name);
        let initial_state = self.script.first().refreshed();

        match self.channel.request(&attributes, &initial_state) {
            Ok(activity_id) => {
                self.logger.info(format!(
                    "Tracking order {} for {} with activity {}",
                    attributes.order_id, attributes.customer_name, activity_id
                ));
                self.activity_id = Some(activity_id);
                self.current_step = 0;
                self.current_state = initial_state;
                self.start_simulation(ctx);
            }
            Err(e) => {
                self.logger.error(format!(
                    "Failed to start live activity for order {}: {}",
                    attributes.order_id, e
                ));
            }
        }
    }

    fn start_simulation(&mut self, ctx: &mut Context<Self>) {
        let handle = ctx.run_interval(self.advance_interval, |act, ctx| {
            act.simulate_next_step(ctx);
        });
        self.simulation_timer = Some(handle);
    }

    pub fn simulate_next_step(&mut self, ctx: &mut Context<Self>) {
        let Some(activity_id) = &self.activity_id else {
            self.logger.debug("No active session, step ignored");
            return;
        };
        if self.current_step >= self.script.last_index() {
            self.logger.debug("Already at the last step, step ignored");
            return;
        }
        let Some(next_state) = self.script.step(self.current_step + 1) else {
            return;
        };

        self.current_step += 1;
        let next_state = next_state.refreshed();
        self.logger.info(format!(
            "Step {}/{}: {} ({})",
            self.current_step,
            self.script.last_index(),
            next_state.status.display_name(),
            next_state.estimated_time
        ));
        self.channel.update(activity_id, &next_state);
        self.current_state = next_state;

        if self.current_state.status == DeliveryStatus::Delivered {
            self.schedule_auto_end(ctx);
        }
    }

    fn schedule_auto_end(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.auto_end_timer.take() {
            ctx.cancel_future(handle);
        }
        self.logger.info(format!(
            "Order delivered, ending live activity in {:?}",
            self.auto_end_delay
        ));
        let handle = ctx.run_later(self.auto_end_delay, |act, ctx| {
            act.auto_end_timer = None;
            act.stop_tracking(ctx);
        });
        self.auto_end_timer = Some(handle);
    }

    pub fn update_to_status(&mut self, status: DeliveryStatus) {
        let Some(activity_id) = &self.activity_id else {
            self.logger
                .warn(format!("No active session, status {} ignored", status.as_str()));
            return;
        };

        let target_state = self.script.first_with_status(status).refreshed();
        if target_state.status != status {
            self.logger.warn(format!(
                "No step with status {} in the script, showing the first step",
                status.as_str()
            ));
        }
        self.channel.update(activity_id, &target_state);
        self.current_state = target_state;
    }

    pub fn stop_tracking(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.simulation_timer.take() {
            ctx.cancel_future(handle);
        }
        if let Some(handle) = self.auto_end_timer.take() {
            ctx.cancel_future(handle);
        }
        if let Some(activity_id) = self.activity_id.take() {
            self.channel.end(&activity_id);
            self.logger
                .info(format!("Stopped tracking, activity {} ended", activity_id));
        }
        self.current_step = 0;
        self.current_state = TrackingState::default();
    }
}

impl Actor for TrackingManager {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger.info(format!(
            "TrackingManager ready: {} steps, one every {:?}",
            self.script.len(),
            self.advance_interval
        ));
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(activity_id) = self.activity_id.take() {
            self.channel.end(&activity_id);
        }
    }
}

impl Handler<StartTracking> for TrackingManager {
    type Result = ();

    fn handle(&mut self, msg: StartTracking, ctx: &mut Self::Context) -> Self::Result {
        self.start_tracking(msg.order_id, msg.customer_name, ctx);
    }
}

impl Handler<StartTestDelivery> for TrackingManager {
    type Result = ();

    fn handle(&mut self, _msg: StartTestDelivery, ctx: &mut Self::Context) -> Self::Result {
        self.start_tracking(
            TEST_ORDER_ID.to_string(),
            TEST_CUSTOMER_NAME.to_string(),
            ctx,
        );
    }
}

impl Handler<StopTracking> for TrackingManager {
    type Result = ();

    fn handle(&mut self, _msg: StopTracking, ctx: &mut Self::Context) -> Self::Result {
        self.stop_tracking(ctx);
    }
}

impl Handler<UpdateToNextStep> for TrackingManager {
    type Result = ();

    fn handle(&mut self, _msg: UpdateToNextStep, ctx: &mut Self::Context) -> Self::Result {
        self.simulate_next_step(ctx);
    }
}

impl Handler<UpdateToStatus> for TrackingManager {
    type Result = ();

    fn handle(&mut self, msg: UpdateToStatus, _ctx: &mut Self::Context) -> Self::Result {
        self.update_to_status(msg.status);
    }
}

impl Handler<IsTracking> for TrackingManager {
    type Result = bool;

    fn handle(&mut self, _msg: IsTracking, _ctx: &mut Self::Context) -> Self::Result {
        self.is_tracking()
    }
}

impl Handler<GetSnapshot> for TrackingManager {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _msg: GetSnapshot, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.snapshot())
    }
}
