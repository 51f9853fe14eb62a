use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use aerohse_core::EmployeeId;

use crate::{AccountStatus, Role};

/// Identity of an authenticated principal (human user or service account).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(Uuid);

impl PrincipalId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PrincipalId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for PrincipalId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<PrincipalId> for Uuid {
    fn from(value: PrincipalId) -> Self {
        value.0
    }
}

impl FromStr for PrincipalId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// Snapshot of the authenticated actor for one evaluation.
///
/// Constructed by the session boundary on successful authentication and
/// discarded on logout; never persisted by this crate. Evaluation is a
/// pure function of this snapshot plus the static catalog, so a stale
/// snapshot can never leak a newer status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: PrincipalId,
    pub role: Role,
    pub status: AccountStatus,
    /// Employee record this account is tied to, when one exists. Drives
    /// self-service scoping; candidates and service accounts may have none.
    pub linked_employee_id: Option<EmployeeId>,
}

impl Principal {
    pub fn new(id: PrincipalId, role: Role, status: AccountStatus) -> Self {
        Self {
            id,
            role,
            status,
            linked_employee_id: None,
        }
    }

    pub fn with_linked_employee(mut self, employee_id: EmployeeId) -> Self {
        self.linked_employee_id = Some(employee_id);
        self
    }
}
