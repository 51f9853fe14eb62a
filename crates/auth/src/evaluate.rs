//! Access evaluation: point queries against catalog + account status.
//!
//! Every operation here is pure and total. There is no hidden state and
//! nothing to go stale: the answer is a function of the caller-supplied
//! [`Principal`] snapshot, the query pair and the immutable catalog. A
//! malformed or absent principal degrades to a denial, never a panic.

use serde::Serialize;

use crate::{
    Module, Permission, PermissionCatalog, Principal, Role, StatusOverride, status_override,
};

/// Check whether `principal` holds `permission` on `module`.
///
/// Precedence: absent principal, then the account-status gate, then the
/// catalog. A catalog entry containing `full-access` grants every
/// permission for its module; this is the only place the wildcard is
/// expanded.
pub fn has_permission(
    catalog: &PermissionCatalog,
    principal: Option<&Principal>,
    module: Module,
    permission: Permission,
) -> bool {
    let Some(principal) = principal else {
        return false;
    };

    match status_override(principal.status) {
        StatusOverride::DenyAll => false,
        // Candidates see the employees module (their own record) and
        // nothing else, whatever their role says.
        StatusOverride::CandidateReadOnly => {
            module == Module::Employees && permission == Permission::Read
        }
        // Archived accounts keep read on every module their role had any
        // grant for; all mutating and operational grants are gone.
        StatusOverride::ArchivedReadOnly => {
            permission == Permission::Read
                && !catalog.permissions_for(principal.role, module).is_empty()
        }
        StatusOverride::Unrestricted => {
            let granted = catalog.permissions_for(principal.role, module);
            granted.contains(&Permission::FullAccess) || granted.contains(&permission)
        }
    }
}

/// True iff [`has_permission`] holds for at least one of `permissions`.
///
/// An empty slice denies.
pub fn has_any_permission(
    catalog: &PermissionCatalog,
    principal: Option<&Principal>,
    module: Module,
    permissions: &[Permission],
) -> bool {
    permissions
        .iter()
        .any(|p| has_permission(catalog, principal, module, *p))
}

/// Whether the module is visible at all to the principal.
///
/// Distinct from [`has_permission`]: a module can be visible through
/// `read` alone, with no mutating rights. True iff the effective
/// permission set after the status override is non-empty.
pub fn can_access_module(
    catalog: &PermissionCatalog,
    principal: Option<&Principal>,
    module: Module,
) -> bool {
    let Some(principal) = principal else {
        return false;
    };

    match status_override(principal.status) {
        StatusOverride::DenyAll => false,
        StatusOverride::CandidateReadOnly => module == Module::Employees,
        StatusOverride::ArchivedReadOnly | StatusOverride::Unrestricted => {
            !catalog.permissions_for(principal.role, module).is_empty()
        }
    }
}

/// Whether `(role, module)` carries no mutating grant (none of `create`,
/// `update`, `delete`, `full-access`).
///
/// Caller contract: this is a property of the role/module pair alone and
/// deliberately does **not** consult account status. It exists for UI
/// affordance decisions ("render this screen without edit controls");
/// callers that need a status-aware denial must combine it with
/// [`has_permission`].
pub fn is_read_only(catalog: &PermissionCatalog, role: Role, module: Module) -> bool {
    !catalog
        .permissions_for(role, module)
        .iter()
        .any(|p| p.is_mutating())
}

// ─────────────────────────────────────────────────────────────────────────────
// Decision Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Why an access decision came out the way it did.
///
/// Serializable so the admin surface can answer "why was this denied?"
/// without re-deriving policy. [`explain_permission`] always agrees with
/// [`has_permission`] on `granted`.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionExplanation {
    pub module: Module,
    pub permission: Permission,
    pub granted: bool,
    pub reason: String,
    pub denial: Option<DenialKind>,
}

/// Machine-readable denial category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialKind {
    MissingPrincipal,
    AccountInactive,
    CandidateRestricted,
    ArchivedReadOnly,
    MissingPermission,
}

/// Explain the decision [`has_permission`] would make for the same query.
pub fn explain_permission(
    catalog: &PermissionCatalog,
    principal: Option<&Principal>,
    module: Module,
    permission: Permission,
) -> DecisionExplanation {
    let denied = |reason: String, kind: DenialKind| DecisionExplanation {
        module,
        permission,
        granted: false,
        reason,
        denial: Some(kind),
    };
    let granted = |reason: String| DecisionExplanation {
        module,
        permission,
        granted: true,
        reason,
        denial: None,
    };

    let Some(principal) = principal else {
        return denied(
            "no authenticated principal".to_string(),
            DenialKind::MissingPrincipal,
        );
    };

    match status_override(principal.status) {
        StatusOverride::DenyAll => denied(
            "account is inactive; all access is suspended".to_string(),
            DenialKind::AccountInactive,
        ),
        StatusOverride::CandidateReadOnly => {
            if module == Module::Employees && permission == Permission::Read {
                granted("candidate accounts may read their employee record".to_string())
            } else {
                denied(
                    "candidate accounts are limited to reading the employees module".to_string(),
                    DenialKind::CandidateRestricted,
                )
            }
        }
        StatusOverride::ArchivedReadOnly => {
            let entry = catalog.permissions_for(principal.role, module);
            if entry.is_empty() {
                denied(
                    format!("role '{}' has no grants on '{module}'", principal.role),
                    DenialKind::MissingPermission,
                )
            } else if permission == Permission::Read {
                granted("archived accounts retain read on modules their role covers".to_string())
            } else {
                denied(
                    "archived accounts are read-only".to_string(),
                    DenialKind::ArchivedReadOnly,
                )
            }
        }
        StatusOverride::Unrestricted => {
            let entry = catalog.permissions_for(principal.role, module);
            if entry.contains(&Permission::FullAccess) {
                granted(format!(
                    "role '{}' holds full-access on '{module}'",
                    principal.role
                ))
            } else if entry.contains(&permission) {
                granted(format!(
                    "role '{}' holds '{permission}' on '{module}'",
                    principal.role
                ))
            } else {
                denied(
                    format!(
                        "role '{}' does not hold '{permission}' on '{module}'",
                        principal.role
                    ),
                    DenialKind::MissingPermission,
                )
            }
        }
    }
}
