use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::models::{Plan, Subscription};

/// Ships as the default in example configuration; treated the same as an
/// unset URL so the service never posts to it.
pub const PLACEHOLDER_WEBHOOK_URL: &str = "YOUR_SHEET_WEBHOOK_URL_HERE";

/// Upper bound on how long a replication may stay in flight.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum SheetSyncError {
    #[error("sheet webhook URL is not configured")]
    NotConfigured,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Fixed-shape row appended to the sheet for each newly created record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetRow {
    pub timestamp: String,
    pub name: String,
    pub plan: Plan,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: &'static str,
}

impl SheetRow {
    /// New records always replicate with status "Active"; the sheet is an
    /// append-only creation log, not a mirror of derived state.
    pub fn for_new_subscription(record: &Subscription, now: DateTime<Utc>) -> Self {
        Self {
            timestamp: now.to_rfc3339(),
            name: record.name.clone(),
            plan: record.plan,
            start_date: record.start_date,
            end_date: record.end_date,
            status: "Active",
        }
    }
}

/// One-way replication capability for the external sheet sink. There is no
/// read path back; the local store stays the source of truth.
#[derive(Debug, Clone)]
pub struct SheetSync {
    client: Client,
    endpoint: Option<Url>,
}

impl SheetSync {
    /// Unset, placeholder, or unparseable URLs leave the capability
    /// unconfigured; callers are expected to skip replication then.
    pub fn new(endpoint: Option<&str>) -> Self {
        let endpoint = endpoint
            .filter(|url| *url != PLACEHOLDER_WEBHOOK_URL)
            .and_then(|url| match Url::parse(url) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::warn!(error = %e, "Sheet webhook URL is not a valid URL, replication disabled");
                    None
                }
            });

        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Dispatch one row to the sink. Success means the request left without a
    /// local network-layer error; the response status and body are not
    /// interpreted, matching a sink that never echoes a usable confirmation.
    pub async fn replicate(&self, row: SheetRow) -> Result<(), SheetSyncError> {
        let endpoint = self.endpoint.as_ref().ok_or(SheetSyncError::NotConfigured)?;

        self.client
            .post(endpoint.clone())
            .timeout(REQUEST_TIMEOUT)
            .json(&row)
            .send()
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn record() -> Subscription {
        Subscription {
            id: 1700000000000,
            name: "Asha".to_string(),
            plan: Plan::Diamond,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        }
    }

    #[tokio::test]
    async fn replicate_posts_the_fixed_row_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_partial_json(serde_json::json!({
                "name": "Asha",
                "plan": "Diamond Plan ($100)",
                "startDate": "2026-01-01",
                "endDate": "2026-12-31",
                "status": "Active",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let sync = SheetSync::new(Some(&server.uri()));
        let row = SheetRow::for_new_subscription(&record(), Utc::now());
        sync.replicate(row).await.unwrap();
    }

    #[tokio::test]
    async fn sink_errors_are_not_interpreted_as_failures() {
        // The sink gives nothing usable back; a 500 still counts as a
        // successful dispatch.
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let sync = SheetSync::new(Some(&server.uri()));
        let row = SheetRow::for_new_subscription(&record(), Utc::now());
        assert!(sync.replicate(row).await.is_ok());
    }

    #[tokio::test]
    async fn network_failure_surfaces_as_http_error() {
        // Bind a port, then drop the server so the connection is refused.
        // A pooled `MockServer::start()` stays listening after drop, so use a
        // dedicated server that actually shuts down.
        let endpoint = {
            let server = MockServer::builder().start().await;
            server.uri()
        };

        let sync = SheetSync::new(Some(&endpoint));
        let row = SheetRow::for_new_subscription(&record(), Utc::now());
        assert!(matches!(
            sync.replicate(row).await,
            Err(SheetSyncError::Http(_))
        ));
    }

    #[tokio::test]
    async fn placeholder_url_leaves_capability_unconfigured() {
        let sync = SheetSync::new(Some(PLACEHOLDER_WEBHOOK_URL));
        assert!(!sync.is_configured());

        let row = SheetRow::for_new_subscription(&record(), Utc::now());
        assert!(matches!(
            sync.replicate(row).await,
            Err(SheetSyncError::NotConfigured)
        ));
    }

    #[test]
    fn invalid_url_leaves_capability_unconfigured() {
        let sync = SheetSync::new(Some("not a url"));
        assert!(!sync.is_configured());
    }
}
