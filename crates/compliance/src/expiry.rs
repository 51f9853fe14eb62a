use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use aerohse_core::{DomainError, DomainResult, ValueObject};

/// Longest accepted warning window, in days.
pub const MAX_WARNING_DAYS: u32 = 730;

/// Traffic-light status of an expiring record.
///
/// Ordered by urgency: `Valid < ExpiringSoon < Expired`. As the observation
/// date advances, a record's status only moves forward in this order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ExpiryStatus {
    Valid,
    ExpiringSoon,
    Expired,
}

impl ExpiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Valid => "valid",
            ExpiryStatus::ExpiringSoon => "expiring-soon",
            ExpiryStatus::Expired => "expired",
        }
    }
}

impl core::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validity window of a record: valid through `valid_until` inclusive,
/// flagged as expiring once the remaining days fall inside the warning
/// window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryWindow {
    valid_until: NaiveDate,
    warning_days: u32,
}

impl ValueObject for ExpiryWindow {}

impl ExpiryWindow {
    /// Build a window. `warning_days` is capped at [`MAX_WARNING_DAYS`];
    /// a window of 0 flags only the final valid day.
    pub fn new(valid_until: NaiveDate, warning_days: u32) -> DomainResult<Self> {
        if warning_days > MAX_WARNING_DAYS {
            return Err(DomainError::validation(format!(
                "warning window of {warning_days} days exceeds the maximum of {MAX_WARNING_DAYS}"
            )));
        }
        Ok(Self {
            valid_until,
            warning_days,
        })
    }

    pub fn valid_until(&self) -> NaiveDate {
        self.valid_until
    }

    pub fn warning_days(&self) -> u32 {
        self.warning_days
    }

    /// Days from `on` until expiry; negative once the window has passed.
    pub fn days_remaining(&self, on: NaiveDate) -> i64 {
        (self.valid_until - on).num_days()
    }

    /// Status as observed on the given date.
    pub fn status_on(&self, on: NaiveDate) -> ExpiryStatus {
        let remaining = self.days_remaining(on);
        if remaining < 0 {
            ExpiryStatus::Expired
        } else if remaining <= i64::from(self.warning_days) {
            ExpiryStatus::ExpiringSoon
        } else {
            ExpiryStatus::Valid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn status_transitions_across_the_window() {
        let window = ExpiryWindow::new(date(2025, 6, 30), 30).unwrap();

        assert_eq!(window.status_on(date(2025, 4, 1)), ExpiryStatus::Valid);
        assert_eq!(
            window.status_on(date(2025, 6, 1)),
            ExpiryStatus::ExpiringSoon
        );
        assert_eq!(window.status_on(date(2025, 7, 1)), ExpiryStatus::Expired);
    }

    #[test]
    fn final_day_is_still_usable() {
        // Valid through valid_until inclusive.
        let window = ExpiryWindow::new(date(2025, 6, 30), 30).unwrap();
        assert_eq!(
            window.status_on(date(2025, 6, 30)),
            ExpiryStatus::ExpiringSoon
        );
        assert_eq!(window.days_remaining(date(2025, 6, 30)), 0);
    }

    #[test]
    fn zero_width_warning_flags_only_the_final_day() {
        let window = ExpiryWindow::new(date(2025, 6, 30), 0).unwrap();
        assert_eq!(window.status_on(date(2025, 6, 29)), ExpiryStatus::Valid);
        assert_eq!(
            window.status_on(date(2025, 6, 30)),
            ExpiryStatus::ExpiringSoon
        );
        assert_eq!(window.status_on(date(2025, 7, 1)), ExpiryStatus::Expired);
    }

    #[test]
    fn oversized_warning_window_is_rejected() {
        let err = ExpiryWindow::new(date(2025, 6, 30), MAX_WARNING_DAYS + 1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    proptest! {
        /// Status only moves forward in urgency as the observation date
        /// advances.
        #[test]
        fn status_is_monotonic_in_time(
            offset_a in -400i64..400,
            offset_b in -400i64..400,
            warning in 0u32..120,
        ) {
            let window = ExpiryWindow::new(date(2025, 6, 30), warning).unwrap();
            let base = date(2025, 1, 1);
            let a = base + chrono::Duration::days(offset_a.min(offset_b));
            let b = base + chrono::Duration::days(offset_a.max(offset_b));
            prop_assert!(window.status_on(a) <= window.status_on(b));
        }
    }
}
