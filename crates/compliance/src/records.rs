use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use aerohse_core::{AssetId, EmployeeId, ValueObject};

use crate::expiry::{ExpiryStatus, ExpiryWindow};

/// Anything carrying a validity window.
///
/// The trait is the seam the reporting layer iterates over; records from
/// different modules share one renewal listing.
pub trait Expires {
    fn window(&self) -> &ExpiryWindow;

    fn status_on(&self, on: NaiveDate) -> ExpiryStatus {
        self.window().status_on(on)
    }

    fn is_expired(&self, on: NaiveDate) -> bool {
        self.status_on(on) == ExpiryStatus::Expired
    }
}

/// Medical exam result on file for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalExamRecord {
    pub employee_id: EmployeeId,
    /// Exam type code from the medical catalog (e.g. `audiometry`).
    pub exam_code: String,
    pub window: ExpiryWindow,
}

impl Expires for MedicalExamRecord {
    fn window(&self) -> &ExpiryWindow {
        &self.window
    }
}

impl ValueObject for MedicalExamRecord {}

/// Completed training with a recurrence deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingRecord {
    pub employee_id: EmployeeId,
    pub course_code: String,
    pub window: ExpiryWindow,
}

impl Expires for TrainingRecord {
    fn window(&self) -> &ExpiryWindow {
        &self.window
    }
}

impl ValueObject for TrainingRecord {}

/// PPE item issued to an employee, valid until its replacement date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PpeIssue {
    pub employee_id: EmployeeId,
    pub asset_id: AssetId,
    pub window: ExpiryWindow,
}

impl Expires for PpeIssue {
    fn window(&self) -> &ExpiryWindow {
        &self.window
    }
}

impl ValueObject for PpeIssue {}

/// Records that need attention on the given date: expiring soon or
/// already expired. Order of the input is preserved.
pub fn due_for_renewal<'a, T: Expires>(
    records: impl IntoIterator<Item = &'a T>,
    on: NaiveDate,
) -> Vec<&'a T> {
    records
        .into_iter()
        .filter(|record| record.status_on(on) != ExpiryStatus::Valid)
        .collect()
}
