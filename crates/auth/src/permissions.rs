use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named capability that can be granted per module.
///
/// `FullAccess` is the wildcard: granted on a module, it implies every
/// other permission for that module. The catalog stores it verbatim;
/// expansion happens in [`crate::evaluate::has_permission`] only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Permission {
    Read,
    Create,
    Update,
    Delete,
    Export,
    Configure,
    AssignPpe,
    ReadSign,
    Ocr,
    GenerateReports,
    FullAccess,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown permission: {0}")]
pub struct UnknownPermission(pub String);

impl Permission {
    pub const ALL: [Permission; 11] = [
        Permission::Read,
        Permission::Create,
        Permission::Update,
        Permission::Delete,
        Permission::Export,
        Permission::Configure,
        Permission::AssignPpe,
        Permission::ReadSign,
        Permission::Ocr,
        Permission::GenerateReports,
        Permission::FullAccess,
    ];

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Permission::FullAccess)
    }

    /// Whether this permission changes records.
    ///
    /// The read-only check counts exactly `create`, `update`, `delete` and
    /// `full-access` as mutating; operational grants such as `assign-ppe`,
    /// `read-sign` or `ocr` do not make a module writable on their own.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Permission::Create | Permission::Update | Permission::Delete | Permission::FullAccess
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Read => "read",
            Permission::Create => "create",
            Permission::Update => "update",
            Permission::Delete => "delete",
            Permission::Export => "export",
            Permission::Configure => "configure",
            Permission::AssignPpe => "assign-ppe",
            Permission::ReadSign => "read-sign",
            Permission::Ocr => "ocr",
            Permission::GenerateReports => "generate-reports",
            Permission::FullAccess => "full-access",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}
