//! Text rendering of a live activity: the lock screen card and the expanded,
//! compact and minimal views of the status area.

use colored::Color;
use common::types::activity::DeliveryTrackingAttributes;
use common::types::delivery_status::DeliveryStatus;
use common::types::tracking_state::TrackingState;

pub const PROGRESS_BAR_WIDTH: usize = 20;
const LOCATION_MARKER: &str = "📍";

/// Color of the progress bar for each status.
pub fn progress_color(status: DeliveryStatus) -> Color {
    match status {
        DeliveryStatus::Preparing | DeliveryStatus::PickingUp => Color::Yellow,
        DeliveryStatus::OnTheWay => Color::Blue,
        DeliveryStatus::Delivered => Color::Green,
        DeliveryStatus::Cancelled => Color::Red,
    }
}

pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// The driver row is only shown while someone is actually carrying the order.
pub fn shows_driver(state: &TrackingState) -> bool {
    state.has_driver()
        && matches!(
            state.status,
            DeliveryStatus::PickingUp | DeliveryStatus::OnTheWay
        )
}

pub fn shows_location(state: &TrackingState) -> bool {
    state.status == DeliveryStatus::OnTheWay && !state.current_location.is_empty()
}

/// Lines of the lock screen card, without colors.
pub fn lock_screen(attributes: &DeliveryTrackingAttributes, state: &TrackingState) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Pedido #{}    {} (Tempo estimado)",
            state.order_number, state.estimated_time
        ),
        state.restaurant_name.clone(),
    ];

    let mut status_line = format!("{} {}", state.status.icon(), state.status.display_name());
    if shows_location(state) {
        status_line.push_str(&format!("    {} {}", LOCATION_MARKER, state.current_location));
    }
    lines.push(status_line);

    lines.push(format!(
        "[{}] {:>3}%",
        progress_bar(state.status.progress_percentage(), PROGRESS_BAR_WIDTH),
        (state.status.progress_percentage() * 100.0).round() as u32
    ));

    if shows_driver(state) {
        let photo = state.driver_photo.as_deref().unwrap_or("👤");
        lines.push(format!("{} {} · Seu entregador", photo, state.driver_name));
    }

    lines.push(attributes.widget_url());
    lines
}

/// Expanded status area: icon, label and driver on the left, ETA on the
/// right, then a progress bar with the order number and location.
pub fn expanded(state: &TrackingState) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {}    {} ETA",
        state.status.icon(),
        state.status.display_name(),
        state.estimated_time
    )];
    if state.has_driver() {
        lines.push(state.driver_name.clone());
    }
    lines.push(format!(
        "[{}]",
        progress_bar(state.status.progress_percentage(), PROGRESS_BAR_WIDTH)
    ));

    let mut order_line = format!("#{}", state.order_number);
    if !state.current_location.is_empty() {
        order_line.push_str(&format!("    {}", state.current_location));
    }
    lines.push(order_line);
    lines
}

/// Smallest presentation, when several activities share the status area.
pub fn minimal(state: &TrackingState) -> String {
    state.status.icon().to_string()
}

/// Single line used when the activity is collapsed next to the camera.
pub fn compact(state: &TrackingState) -> String {
    let leading = if state.status == DeliveryStatus::OnTheWay {
        format!("{} {}", state.status.icon(), LOCATION_MARKER)
    } else {
        state.status.icon().to_string()
    };
    format!("{} … {}", leading, state.estimated_time)
}
