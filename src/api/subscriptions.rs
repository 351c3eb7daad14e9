use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::models::{Subscription, SubscriptionDraft};
use crate::services::status::{self, Status};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring filter against name or plan label.
    #[serde(default)]
    q: String,
}

/// Record enriched with its derived status for dashboard rendering. `today`
/// is taken once at the boundary so one response is internally consistent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionView {
    #[serde(flatten)]
    pub record: Subscription,
    pub status: Status,
    pub days_remaining: i64,
}

impl SubscriptionView {
    fn derive(record: Subscription, today: NaiveDate) -> Self {
        let days_remaining = status::days_remaining(record.end_date, today);
        Self {
            status: status::classify(days_remaining),
            days_remaining,
            record,
        }
    }
}

async fn list_subscriptions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<SubscriptionView>> {
    let today = Utc::now().date_naive();
    let views = state
        .tracker
        .list(&params.q)
        .into_iter()
        .map(|record| SubscriptionView::derive(record, today))
        .collect();
    Json(views)
}

async fn add_subscription(
    State(state): State<AppState>,
    Json(draft): Json<SubscriptionDraft>,
) -> Result<(StatusCode, Json<Subscription>)> {
    let record = state.tracker.add(draft)?;
    tracing::info!(id = record.id, name = %record.name, "Subscription added");
    Ok((StatusCode::CREATED, Json(record)))
}

async fn delete_subscription(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    if state.tracker.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("no subscription with id {id}")))
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/subscriptions",
            get(list_subscriptions).post(add_subscription),
        )
        .route("/subscriptions/:id", delete(delete_subscription))
}
