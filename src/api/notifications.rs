use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;

use crate::api::AppState;
use crate::services::notifications::NotificationSummary;

/// Expiring and expired subsets plus their total, recomputed on every call
/// against the current record set and the current day.
async fn get_notifications(State(state): State<AppState>) -> Json<NotificationSummary> {
    let today = Utc::now().date_naive();
    Json(state.tracker.notifications(today))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/notifications", get(get_notifications))
}
