use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Functional role of a principal.
///
/// Closed set: roles are assigned at account provisioning (outside this
/// crate) and immutable for the lifetime of the account. The wire names
/// are the kebab-case forms (`system-admin`, `hr-manager`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    SystemAdmin,
    HseAdmin,
    HrManager,
    MedicalOfficer,
    TrainingCoordinator,
    SafetyOfficer,
    EquipmentManager,
    Management,
    Employee,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    /// Every role, in catalog order. Used for exhaustive sweeps in tests
    /// and admin listings.
    pub const ALL: [Role; 9] = [
        Role::SystemAdmin,
        Role::HseAdmin,
        Role::HrManager,
        Role::MedicalOfficer,
        Role::TrainingCoordinator,
        Role::SafetyOfficer,
        Role::EquipmentManager,
        Role::Management,
        Role::Employee,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SystemAdmin => "system-admin",
            Role::HseAdmin => "hse-admin",
            Role::HrManager => "hr-manager",
            Role::MedicalOfficer => "medical-officer",
            Role::TrainingCoordinator => "training-coordinator",
            Role::SafetyOfficer => "safety-officer",
            Role::EquipmentManager => "equipment-manager",
            Role::Management => "management",
            Role::Employee => "employee",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .find(|r| r.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_round_trips_through_from_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn serde_names_match_as_str() {
        for role in Role::ALL {
            let value = serde_json::to_value(role).unwrap();
            assert_eq!(value, serde_json::Value::String(role.as_str().to_string()));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "superuser".parse::<Role>().unwrap_err();
        assert_eq!(err.0, "superuser");
    }
}
