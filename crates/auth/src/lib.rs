//! `aerohse-auth` — pure authorization boundary for the safety/HR
//! administration system.
//!
//! This crate is intentionally decoupled from HTTP, storage and session
//! transport. External collaborators (route guards, the query layer, the
//! session provider) present a [`Principal`] snapshot and a
//! `(module, permission)` pair; every answer is a plain boolean computed
//! from the immutable [`PermissionCatalog`] and the account-status gate.
//! Denial is a normal outcome here, never an error.

pub mod catalog;
pub mod claims;
pub mod evaluate;
pub mod modules;
pub mod permissions;
pub mod principal;
pub mod roles;
pub mod scope;
pub mod status;

pub use catalog::{CatalogBuilder, PermissionCatalog, default_policy};
pub use claims::{SessionClaims, TokenValidationError, validate_claims};
pub use evaluate::{
    DecisionExplanation, DenialKind, can_access_module, explain_permission, has_any_permission,
    has_permission, is_read_only,
};
pub use modules::Module;
pub use permissions::Permission;
pub use principal::{Principal, PrincipalId};
pub use roles::Role;
pub use scope::{SELF_SCOPED_MODULES, ScopeFilter, is_self_scoped, scope_filter};
pub use status::{AccountStatus, StatusOverride, status_override};
