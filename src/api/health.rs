use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::api::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub dependencies: DependencyStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DependencyStatus {
    pub snapshot: ServiceHealth,
    pub sheet_webhook: ServiceHealth,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check endpoint. Nothing in this system is fatal — a missing
/// snapshot or an unconfigured sink only degrade — so this always returns
/// 200 and reports the degradations instead.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let snapshot = check_snapshot(&state);

    let sheet_webhook = if state.tracker.sheet_configured() {
        ServiceHealth {
            status: "configured".to_string(),
            error: None,
        }
    } else {
        ServiceHealth {
            status: "not_configured".to_string(),
            error: Some("Sheet webhook URL not configured, replication disabled".to_string()),
        }
    };

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dependencies: DependencyStatus {
            snapshot,
            sheet_webhook,
        },
    };

    (StatusCode::OK, Json(response))
}

fn check_snapshot(state: &AppState) -> ServiceHealth {
    match std::fs::metadata(&state.config.snapshot_path) {
        Ok(_) => ServiceHealth {
            status: "present".to_string(),
            error: None,
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => ServiceHealth {
            status: "empty".to_string(),
            error: None,
        },
        Err(e) => ServiceHealth {
            status: "unreadable".to_string(),
            error: Some(format!("Snapshot error: {}", e)),
        },
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
