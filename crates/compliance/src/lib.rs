//! `aerohse-compliance` — derived compliance status for expiring records.
//!
//! Medical exams, trainings and PPE issues all carry a validity window;
//! screens and reports show a traffic-light status derived from the
//! current date. This crate holds that derivation as pure date
//! arithmetic: no scheduler, no persistence, no I/O.

pub mod expiry;
pub mod records;

pub use expiry::{ExpiryStatus, ExpiryWindow};
pub use records::{Expires, MedicalExamRecord, PpeIssue, TrainingRecord, due_for_renewal};
