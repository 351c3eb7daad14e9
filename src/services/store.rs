use chrono::Utc;
use thiserror::Error;

use crate::models::{Subscription, SubscriptionDraft};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("end date is required")]
    MissingEndDate,
}

/// In-memory ordered record set. Insertion order is preserved for display;
/// callers exposing this to concurrent tasks must serialize mutations
/// themselves (see `tracker`).
#[derive(Debug, Default)]
pub struct SubscriptionStore {
    records: Vec<Subscription>,
    last_id: u64,
}

impl SubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a previously persisted record set, seeding the id
    /// watermark so fresh ids never collide with loaded ones.
    pub fn from_records(records: Vec<Subscription>) -> Self {
        let last_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        Self { records, last_id }
    }

    /// Validate a draft and append it as a new record with a fresh id.
    /// Rejection leaves the store untouched.
    pub fn add(&mut self, draft: SubscriptionDraft) -> Result<Subscription, ValidationError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let end_date = draft.end_date.ok_or(ValidationError::MissingEndDate)?;

        let record = Subscription {
            id: self.next_id(),
            name: name.to_string(),
            plan: draft.plan,
            start_date: draft.start_date,
            end_date,
        };
        self.records.push(record.clone());
        Ok(record)
    }

    /// Remove the record with the given id. Missing ids are an idempotent
    /// no-op, reported through the return value.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[Subscription] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive substring match against the name or the plan label.
    /// An empty or whitespace-only query matches everything.
    pub fn filter(&self, query: &str) -> Vec<Subscription> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.records.clone();
        }
        self.records
            .iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&needle)
                    || r.plan.label().to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Time-based id (epoch milliseconds), bumped past the last issued id so
    /// two adds in the same millisecond still get distinct, increasing ids.
    fn next_id(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let id = now.max(self.last_id + 1);
        self.last_id = id;
        id
    }
}
