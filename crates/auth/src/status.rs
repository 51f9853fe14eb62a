use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of a principal's account.
///
/// Mutated by HR processes outside this crate; the gate only reads it.
/// A status change takes effect on the next evaluation, since every query
/// receives a fresh principal snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccountStatus {
    Active,
    Inactive,
    Candidate,
    Archived,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown account status: {0}")]
pub struct UnknownStatus(pub String);

impl AccountStatus {
    pub const ALL: [AccountStatus; 4] = [
        AccountStatus::Active,
        AccountStatus::Inactive,
        AccountStatus::Candidate,
        AccountStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
            AccountStatus::Candidate => "candidate",
            AccountStatus::Archived => "archived",
        }
    }
}

impl core::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountStatus::ALL
            .iter()
            .find(|st| st.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Override the account status imposes on catalog grants.
///
/// Precedence over the catalog is absolute: the evaluator resolves the
/// override first and only falls through to the catalog on
/// [`StatusOverride::Unrestricted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOverride {
    /// No module accessible, no permission granted, regardless of role.
    DenyAll,
    /// Only the `employees` module, and only `read`.
    CandidateReadOnly,
    /// `read` only, on every module the role's catalog entry is non-empty
    /// for.
    ArchivedReadOnly,
    /// No override; defer to the permission catalog.
    Unrestricted,
}

/// Resolve the override for an account status.
pub fn status_override(status: AccountStatus) -> StatusOverride {
    match status {
        AccountStatus::Inactive => StatusOverride::DenyAll,
        AccountStatus::Candidate => StatusOverride::CandidateReadOnly,
        AccountStatus::Archived => StatusOverride::ArchivedReadOnly,
        AccountStatus::Active => StatusOverride::Unrestricted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_defers_to_catalog() {
        for status in AccountStatus::ALL {
            let unrestricted = status_override(status) == StatusOverride::Unrestricted;
            assert_eq!(unrestricted, status == AccountStatus::Active);
        }
    }

    #[test]
    fn inactive_denies_everything() {
        assert_eq!(
            status_override(AccountStatus::Inactive),
            StatusOverride::DenyAll
        );
    }

    #[test]
    fn as_str_round_trips_through_from_str() {
        for status in AccountStatus::ALL {
            assert_eq!(status.as_str().parse::<AccountStatus>().unwrap(), status);
        }
    }
}
