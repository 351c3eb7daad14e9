use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{NaiveDate, Utc};

use crate::models::{Subscription, SubscriptionDraft};
use crate::services::notifications::{self, NotificationSummary};
use crate::services::sheet_sync::{SheetRow, SheetSync};
use crate::services::snapshot::SnapshotFile;
use crate::services::store::{SubscriptionStore, ValidationError};

/// Composition root of the subscription core. Owns the in-memory store behind
/// a single-writer lock, snapshots it after every mutation, and replicates
/// new records to the sheet sink fire-and-forget.
///
/// This is the whole surface the presentation layer sees: list, add, delete,
/// notifications.
pub struct SubscriptionTracker {
    store: Mutex<SubscriptionStore>,
    snapshot: SnapshotFile,
    sheet: SheetSync,
}

impl SubscriptionTracker {
    /// Load the snapshot once and take ownership of the collaborators.
    pub fn open(snapshot: SnapshotFile, sheet: SheetSync) -> Self {
        let records = snapshot.load();
        tracing::info!(
            count = records.len(),
            path = %snapshot.path().display(),
            "Loaded subscription snapshot"
        );

        Self {
            store: Mutex::new(SubscriptionStore::from_records(records)),
            snapshot,
            sheet,
        }
    }

    /// Filtered records in insertion order. An empty query returns all.
    pub fn list(&self, query: &str) -> Vec<Subscription> {
        self.store().filter(query)
    }

    /// Validate and append a record, snapshot the store, then kick off
    /// replication. The local mutation and the snapshot complete before the
    /// remote call's outcome is known; replication failure never rolls back.
    ///
    /// The snapshot write happens under the store lock: mutation and
    /// snapshot form one critical section, so concurrent callers cannot
    /// overwrite the file with a stale record set or interleave two writes.
    pub fn add(&self, draft: SubscriptionDraft) -> Result<Subscription, ValidationError> {
        let record = {
            let mut store = self.store();
            let record = store.add(draft)?;
            self.save_snapshot(store.all());
            record
        };

        self.spawn_replication(&record);

        Ok(record)
    }

    /// Remove a record by id. Missing ids are a no-op and skip the snapshot
    /// write. Deletion is local only: an already-replicated sheet row is
    /// never retracted. Like `add`, the snapshot write stays inside the
    /// store lock.
    pub fn delete(&self, id: u64) -> bool {
        let mut store = self.store();
        if store.remove(id) {
            self.save_snapshot(store.all());
            tracing::info!(id, "Subscription deleted");
            true
        } else {
            false
        }
    }

    /// Expiring/expired subsets and their total for the given day.
    pub fn notifications(&self, today: NaiveDate) -> NotificationSummary {
        notifications::summarize(self.store().all(), today)
    }

    pub fn sheet_configured(&self) -> bool {
        self.sheet.is_configured()
    }

    fn store(&self) -> MutexGuard<'_, SubscriptionStore> {
        // A poisoned lock only means a panic mid-read elsewhere; the record
        // set itself is still consistent, so keep serving it.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn save_snapshot(&self, records: &[Subscription]) {
        if let Err(e) = self.snapshot.save(records) {
            tracing::warn!(
                error = %e,
                path = %self.snapshot.path().display(),
                "Snapshot save failed, in-memory record set remains authoritative"
            );
        }
    }

    fn spawn_replication(&self, record: &Subscription) {
        if !self.sheet.is_configured() {
            tracing::warn!(
                id = record.id,
                "Sheet webhook not configured, skipping replication"
            );
            return;
        }

        let sheet = self.sheet.clone();
        let row = SheetRow::for_new_subscription(record, Utc::now());
        let id = record.id;
        tokio::spawn(async move {
            match sheet.replicate(row).await {
                Ok(()) => tracing::debug!(id, "Replicated subscription to sheet"),
                Err(e) => tracing::warn!(
                    id,
                    error = %e,
                    "Sheet replication failed, local record is unaffected"
                ),
            }
        });
    }
}
