use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed set of plan tiers. The serde representation is the display label so
/// that snapshot payloads and sheet rows carry the human-readable tier string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Plan {
    #[default]
    #[serde(rename = "Diamond Plan ($100)")]
    Diamond,
    #[serde(rename = "Platinum Plan ($60)")]
    Platinum,
    #[serde(rename = "Premium Plan ($20)")]
    Premium,
}

impl Plan {
    pub fn label(&self) -> &'static str {
        match self {
            Plan::Diamond => "Diamond Plan ($100)",
            Plan::Platinum => "Platinum Plan ($60)",
            Plan::Premium => "Premium Plan ($20)",
        }
    }
}

/// One subscription record. Created via the store's add operation, never
/// mutated in place, removed only by explicit deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Time-based id, strictly increasing within a process lifetime.
    pub id: u64,
    pub name: String,
    pub plan: Plan,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Add-request shape submitted by the presentation layer. `end_date` stays
/// optional so a missing value surfaces as a validation error instead of a
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDraft {
    pub name: String,
    #[serde(default)]
    pub plan: Plan,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}
