use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Subscription;
use crate::services::status::{self, Status};

/// Notification payload consumed by the presentation layer. Derived on every
/// call, never cached, so it always reflects the current record set and the
/// caller's `today`.
#[derive(Debug, Serialize)]
pub struct NotificationSummary {
    pub expiring: Vec<Subscription>,
    pub expired: Vec<Subscription>,
    pub total: usize,
}

/// Records inside the warning window, in insertion order.
pub fn expiring(records: &[Subscription], today: NaiveDate) -> Vec<Subscription> {
    records
        .iter()
        .filter(|r| status::status_for(r.end_date, today) == Status::ExpiringSoon)
        .cloned()
        .collect()
}

/// Records past their end date, in insertion order.
pub fn expired(records: &[Subscription], today: NaiveDate) -> Vec<Subscription> {
    records
        .iter()
        .filter(|r| status::status_for(r.end_date, today) == Status::Expired)
        .cloned()
        .collect()
}

pub fn total_count(records: &[Subscription], today: NaiveDate) -> usize {
    expiring(records, today).len() + expired(records, today).len()
}

pub fn summarize(records: &[Subscription], today: NaiveDate) -> NotificationSummary {
    let expiring = expiring(records, today);
    let expired = expired(records, today);
    let total = expiring.len() + expired.len();
    NotificationSummary {
        expiring,
        expired,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Plan;
    use chrono::Duration;

    fn record(id: u64, name: &str, end_date: NaiveDate) -> Subscription {
        Subscription {
            id,
            name: name.to_string(),
            plan: Plan::Diamond,
            start_date: end_date - Duration::days(30),
            end_date,
        }
    }

    #[test]
    fn scenario_with_yesterday_today_and_far_future() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let records = vec![
            record(1, "A", today - Duration::days(1)),
            record(2, "B", today),
            record(3, "C", today + Duration::days(10)),
        ];

        let summary = summarize(&records, today);
        let expired_names: Vec<_> = summary.expired.iter().map(|r| r.name.as_str()).collect();
        let expiring_names: Vec<_> = summary.expiring.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(expired_names, vec!["A"]);
        assert_eq!(expiring_names, vec!["B"]);
        assert_eq!(summary.total, 2);
    }

    #[test]
    fn subsets_keep_insertion_order() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let records = vec![
            record(1, "first", today + Duration::days(2)),
            record(2, "second", today + Duration::days(1)),
            record(3, "third", today + Duration::days(3)),
        ];

        let names: Vec<_> = expiring(&records, today)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_record_set_yields_empty_summary() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let summary = summarize(&[], today);
        assert!(summary.expiring.is_empty());
        assert!(summary.expired.is_empty());
        assert_eq!(summary.total, 0);
    }
}
