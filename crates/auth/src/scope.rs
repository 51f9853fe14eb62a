//! Self-service data scoping.
//!
//! Scoping is orthogonal to module permission: it never grants or denies
//! access by itself. The query layer consults it after
//! [`crate::evaluate::has_permission`] or
//! [`crate::evaluate::can_access_module`] already passed, to narrow result
//! sets to records owned by the principal.

use aerohse_core::EmployeeId;

use crate::{Module, Principal, Role};

/// Modules where an `employee` principal only sees records linked to their
/// own employee record.
pub const SELF_SCOPED_MODULES: [Module; 3] = [
    Module::Employees,
    Module::MedicalExams,
    Module::Trainings,
];

/// Whether result sets for `(principal, module)` must be narrowed to the
/// principal's own records. Only the `employee` role is ever self-scoped.
pub fn is_self_scoped(principal: &Principal, module: Module) -> bool {
    principal.role == Role::Employee && SELF_SCOPED_MODULES.contains(&module)
}

/// Row filter the query layer must apply for `(principal, module)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeFilter {
    /// No narrowing; module-level permission is the only gate.
    Unrestricted,
    /// Keep rows whose owning employee equals the given id.
    OwnedBy(EmployeeId),
    /// Keep no rows. Produced when scoping applies but the principal has
    /// no linked employee record: missing ownership matches nothing,
    /// never everything.
    MatchNothing,
}

impl ScopeFilter {
    /// Apply the filter to a row's owner field.
    pub fn allows(&self, owner: Option<EmployeeId>) -> bool {
        match self {
            ScopeFilter::Unrestricted => true,
            ScopeFilter::OwnedBy(id) => owner == Some(*id),
            ScopeFilter::MatchNothing => false,
        }
    }
}

/// Resolve the row filter for `(principal, module)`.
///
/// An absent principal matches nothing.
pub fn scope_filter(principal: Option<&Principal>, module: Module) -> ScopeFilter {
    let Some(principal) = principal else {
        return ScopeFilter::MatchNothing;
    };

    if !is_self_scoped(principal, module) {
        return ScopeFilter::Unrestricted;
    }

    match principal.linked_employee_id {
        Some(employee_id) => ScopeFilter::OwnedBy(employee_id),
        None => ScopeFilter::MatchNothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccountStatus, PrincipalId};

    fn employee_principal() -> Principal {
        Principal::new(PrincipalId::new(), Role::Employee, AccountStatus::Active)
    }

    #[test]
    fn only_the_employee_role_is_self_scoped() {
        let p = employee_principal();
        assert!(is_self_scoped(&p, Module::Trainings));
        assert!(is_self_scoped(&p, Module::Employees));
        assert!(is_self_scoped(&p, Module::MedicalExams));
        assert!(!is_self_scoped(&p, Module::Incidents));

        for role in Role::ALL {
            if role == Role::Employee {
                continue;
            }
            let p = Principal::new(PrincipalId::new(), role, AccountStatus::Active);
            for module in Module::ALL {
                assert!(!is_self_scoped(&p, module), "{role} on {module}");
            }
        }
    }

    #[test]
    fn linked_employee_becomes_an_equality_filter() {
        let employee_id = EmployeeId::new();
        let p = employee_principal().with_linked_employee(employee_id);

        let filter = scope_filter(Some(&p), Module::MedicalExams);
        assert_eq!(filter, ScopeFilter::OwnedBy(employee_id));
        assert!(filter.allows(Some(employee_id)));
        assert!(!filter.allows(Some(EmployeeId::new())));
        assert!(!filter.allows(None));
    }

    #[test]
    fn missing_link_matches_nothing() {
        let p = employee_principal();
        let filter = scope_filter(Some(&p), Module::Trainings);
        assert_eq!(filter, ScopeFilter::MatchNothing);
        assert!(!filter.allows(Some(EmployeeId::new())));
    }

    #[test]
    fn unscoped_queries_are_unrestricted() {
        let p = employee_principal();
        assert_eq!(
            scope_filter(Some(&p), Module::Incidents),
            ScopeFilter::Unrestricted
        );

        let manager = Principal::new(PrincipalId::new(), Role::HrManager, AccountStatus::Active);
        assert_eq!(
            scope_filter(Some(&manager), Module::Employees),
            ScopeFilter::Unrestricted
        );
    }

    #[test]
    fn absent_principal_matches_nothing() {
        assert_eq!(scope_filter(None, Module::Employees), ScopeFilter::MatchNothing);
    }
}
