use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Functional area of the system subject to independent access control.
///
/// Closed set, extensible only by a catalog update plus a new variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Module {
    Employees,
    MedicalExams,
    Trainings,
    Incidents,
    Ppe,
    Equipment,
    Reports,
    Dashboard,
    Administrative,
    Users,
    Settings,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown module: {0}")]
pub struct UnknownModule(pub String);

impl Module {
    pub const ALL: [Module; 11] = [
        Module::Employees,
        Module::MedicalExams,
        Module::Trainings,
        Module::Incidents,
        Module::Ppe,
        Module::Equipment,
        Module::Reports,
        Module::Dashboard,
        Module::Administrative,
        Module::Users,
        Module::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Employees => "employees",
            Module::MedicalExams => "medical-exams",
            Module::Trainings => "trainings",
            Module::Incidents => "incidents",
            Module::Ppe => "ppe",
            Module::Equipment => "equipment",
            Module::Reports => "reports",
            Module::Dashboard => "dashboard",
            Module::Administrative => "administrative",
            Module::Users => "users",
            Module::Settings => "settings",
        }
    }
}

impl core::fmt::Display for Module {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Module {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Module::ALL
            .iter()
            .find(|m| m.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownModule(s.to_string()))
    }
}
