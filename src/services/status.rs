use chrono::NaiveDate;
use serde::Serialize;

/// Records expiring within this many days (inclusive) are flagged as
/// expiring soon.
pub const EXPIRY_WARNING_DAYS: i64 = 3;

/// Derived lifecycle classification. Never stored; recomputed from the end
/// date and an injected `today` so it always reflects the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Active,
    #[serde(rename = "Expiring Soon")]
    ExpiringSoon,
    Expired,
}

/// Signed number of calendar days from `today` until `end_date`.
///
/// Rounding rule: dates carry no time-of-day component, so the difference is
/// an exact whole-day count. A record ending today yields 0, a record ending
/// tomorrow yields 1, and a record that ended yesterday yields -1. `today` is
/// always passed in, never read from the ambient clock.
pub fn days_remaining(end_date: NaiveDate, today: NaiveDate) -> i64 {
    (end_date - today).num_days()
}

/// Classify a day count: negative is expired, `0..=EXPIRY_WARNING_DAYS` is
/// expiring soon (both bounds inclusive), anything further out is active.
pub fn classify(days_remaining: i64) -> Status {
    if days_remaining < 0 {
        Status::Expired
    } else if days_remaining <= EXPIRY_WARNING_DAYS {
        Status::ExpiringSoon
    } else {
        Status::Active
    }
}

/// Convenience composition of `days_remaining` and `classify`.
pub fn status_for(end_date: NaiveDate, today: NaiveDate) -> Status {
    classify(days_remaining(end_date, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    #[test]
    fn ends_today_is_zero_days_and_expiring_soon() {
        assert_eq!(days_remaining(today(), today()), 0);
        assert_eq!(status_for(today(), today()), Status::ExpiringSoon);
    }

    #[test]
    fn ended_yesterday_is_minus_one_and_expired() {
        let yesterday = today() - Duration::days(1);
        assert_eq!(days_remaining(yesterday, today()), -1);
        assert_eq!(status_for(yesterday, today()), Status::Expired);
    }

    #[test]
    fn warning_window_boundary_is_inclusive_at_three() {
        assert_eq!(classify(3), Status::ExpiringSoon);
        assert_eq!(classify(4), Status::Active);
    }

    #[test]
    fn ends_tomorrow_is_one_day() {
        let tomorrow = today() + Duration::days(1);
        assert_eq!(days_remaining(tomorrow, today()), 1);
    }

    #[test]
    fn expired_iff_end_date_before_today() {
        for offset in -10..=10i64 {
            let end = today() + Duration::days(offset);
            let expired = status_for(end, today()) == Status::Expired;
            assert_eq!(expired, end < today(), "offset {offset}");
        }
    }
}
