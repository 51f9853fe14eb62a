use std::collections::{HashMap, HashSet};

use crate::{Module, Permission, Role};

/// Immutable role/module permission grants.
///
/// The catalog is authored data: built once at process start, then shared
/// by reference for the life of the process. It performs no inference
/// beyond direct lookup; in particular it does **not** expand the
/// `full-access` wildcard. Expansion lives in exactly one place,
/// [`crate::evaluate::has_permission`], so every call site sees the same
/// semantics.
#[derive(Debug, Clone)]
pub struct PermissionCatalog {
    grants: HashMap<Role, HashMap<Module, HashSet<Permission>>>,
    empty: HashSet<Permission>,
}

impl PermissionCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Declared permission set for `(role, module)`.
    ///
    /// Total: a role or module without an entry yields the empty set,
    /// which downstream reads as "no access" (fail closed).
    pub fn permissions_for(&self, role: Role, module: Module) -> &HashSet<Permission> {
        self.grants
            .get(&role)
            .and_then(|modules| modules.get(&module))
            .unwrap_or(&self.empty)
    }

    /// Number of `(role, module)` entries carrying at least one grant.
    pub fn entry_count(&self) -> usize {
        self.grants
            .values()
            .map(|modules| modules.values().filter(|set| !set.is_empty()).count())
            .sum()
    }
}

/// Builder for authoring a catalog.
///
/// Repeated `grant` calls for the same `(role, module)` accumulate.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    grants: HashMap<Role, HashMap<Module, HashSet<Permission>>>,
}

impl CatalogBuilder {
    pub fn grant(
        mut self,
        role: Role,
        module: Module,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Self {
        self.grants
            .entry(role)
            .or_default()
            .entry(module)
            .or_default()
            .extend(permissions);
        self
    }

    pub fn build(self) -> PermissionCatalog {
        let catalog = PermissionCatalog {
            grants: self.grants,
            empty: HashSet::new(),
        };
        tracing::debug!(entries = catalog.entry_count(), "permission catalog built");
        catalog
    }
}

/// Default grants for the airport operator deployment.
///
/// Authored table mirroring the operator's staffing model; deployments
/// with different staffing author their own catalog through the builder.
pub fn default_policy() -> PermissionCatalog {
    use Module::*;
    use Permission::*;

    let mut builder = PermissionCatalog::builder();

    // System administration owns every module outright.
    for module in Module::ALL {
        builder = builder.grant(Role::SystemAdmin, module, [FullAccess]);
    }

    builder
        // HSE administration: full control of the safety domain, plus
        // configuration of checklists and incident categories.
        .grant(Role::HseAdmin, Employees, [FullAccess])
        .grant(Role::HseAdmin, MedicalExams, [FullAccess])
        .grant(Role::HseAdmin, Trainings, [FullAccess])
        .grant(Role::HseAdmin, Incidents, [FullAccess])
        .grant(Role::HseAdmin, Ppe, [FullAccess])
        .grant(Role::HseAdmin, Equipment, [FullAccess])
        .grant(Role::HseAdmin, Reports, [Read, Export, GenerateReports])
        .grant(Role::HseAdmin, Dashboard, [Read])
        .grant(
            Role::HseAdmin,
            Administrative,
            [Read, Create, Update, Delete, Export],
        )
        .grant(Role::HseAdmin, Settings, [Read, Configure])
        // HR: owns employee records and the administrative archive, files
        // scanned medical certificates.
        .grant(Role::HrManager, Employees, [FullAccess])
        .grant(
            Role::HrManager,
            MedicalExams,
            [Read, Create, Update, Export, Ocr],
        )
        .grant(Role::HrManager, Trainings, [Read, Export])
        .grant(Role::HrManager, Incidents, [Read])
        .grant(Role::HrManager, Ppe, [Read])
        .grant(Role::HrManager, Reports, [Read, Export, GenerateReports])
        .grant(Role::HrManager, Dashboard, [Read])
        .grant(Role::HrManager, Administrative, [FullAccess])
        // Medical office: owns exam records, reads the roster.
        .grant(Role::MedicalOfficer, MedicalExams, [FullAccess])
        .grant(Role::MedicalOfficer, Employees, [Read])
        .grant(Role::MedicalOfficer, Trainings, [Read])
        .grant(Role::MedicalOfficer, Reports, [Read, GenerateReports])
        .grant(Role::MedicalOfficer, Dashboard, [Read])
        // Training coordination: owns course records.
        .grant(Role::TrainingCoordinator, Trainings, [FullAccess])
        .grant(Role::TrainingCoordinator, Employees, [Read])
        .grant(Role::TrainingCoordinator, Incidents, [Read])
        .grant(
            Role::TrainingCoordinator,
            Reports,
            [Read, Export, GenerateReports],
        )
        .grant(Role::TrainingCoordinator, Dashboard, [Read])
        // Safety office: owns incidents, hands out PPE.
        .grant(Role::SafetyOfficer, Incidents, [FullAccess])
        .grant(Role::SafetyOfficer, Ppe, [Read, AssignPpe])
        .grant(Role::SafetyOfficer, Employees, [Read])
        .grant(Role::SafetyOfficer, Trainings, [Read])
        .grant(Role::SafetyOfficer, Equipment, [Read])
        .grant(Role::SafetyOfficer, Reports, [Read, GenerateReports])
        .grant(Role::SafetyOfficer, Dashboard, [Read])
        // Equipment management: owns assets and the PPE stock.
        .grant(Role::EquipmentManager, Equipment, [FullAccess])
        .grant(Role::EquipmentManager, Ppe, [FullAccess])
        .grant(Role::EquipmentManager, Employees, [Read])
        .grant(Role::EquipmentManager, Reports, [Read, Export])
        .grant(Role::EquipmentManager, Dashboard, [Read])
        // Management: read/export oversight, no mutations.
        .grant(Role::Management, Employees, [Read, Export])
        .grant(Role::Management, MedicalExams, [Read])
        .grant(Role::Management, Trainings, [Read, Export])
        .grant(Role::Management, Incidents, [Read, Export])
        .grant(Role::Management, Ppe, [Read])
        .grant(Role::Management, Equipment, [Read])
        .grant(Role::Management, Reports, [Read, Export, GenerateReports])
        .grant(Role::Management, Dashboard, [Read, Export])
        .grant(Role::Management, Administrative, [Read])
        // Self-service: own record, own documents to read and sign, and
        // incident reporting (create only; employees do not browse the
        // incident register).
        .grant(Role::Employee, Employees, [Read])
        .grant(Role::Employee, MedicalExams, [Read, ReadSign])
        .grant(Role::Employee, Trainings, [Read, ReadSign])
        .grant(Role::Employee, Incidents, [Create])
        .grant(Role::Employee, Ppe, [Read, ReadSign])
        .grant(Role::Employee, Dashboard, [Read])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entry_yields_empty_set() {
        let catalog = PermissionCatalog::builder().build();
        assert!(
            catalog
                .permissions_for(Role::Employee, Module::Incidents)
                .is_empty()
        );
    }

    #[test]
    fn grants_accumulate_per_entry() {
        let catalog = PermissionCatalog::builder()
            .grant(Role::Management, Module::Reports, [Permission::Read])
            .grant(Role::Management, Module::Reports, [Permission::Export])
            .build();

        let granted = catalog.permissions_for(Role::Management, Module::Reports);
        assert!(granted.contains(&Permission::Read));
        assert!(granted.contains(&Permission::Export));
        assert_eq!(granted.len(), 2);
    }

    #[test]
    fn lookup_does_not_expand_the_wildcard() {
        let catalog = default_policy();
        let granted = catalog.permissions_for(Role::HrManager, Module::Employees);
        assert!(granted.contains(&Permission::FullAccess));
        assert!(!granted.contains(&Permission::Delete));
    }

    #[test]
    fn default_policy_covers_every_role() {
        let catalog = default_policy();
        for role in Role::ALL {
            let has_any = Module::ALL
                .into_iter()
                .any(|m| !catalog.permissions_for(role, m).is_empty());
            assert!(has_any, "role {role} has no grants at all");
        }
    }

    #[test]
    fn only_system_admin_reaches_users_and_settings_fully() {
        let catalog = default_policy();
        for role in Role::ALL {
            if role == Role::SystemAdmin {
                continue;
            }
            assert!(
                catalog.permissions_for(role, Module::Users).is_empty(),
                "role {role} should have no grants on users"
            );
            assert!(
                !catalog
                    .permissions_for(role, Module::Settings)
                    .contains(&Permission::FullAccess),
                "role {role} should not fully own settings"
            );
        }
    }

    #[test]
    fn employee_reports_incidents_without_reading_them() {
        let catalog = default_policy();
        let granted = catalog.permissions_for(Role::Employee, Module::Incidents);
        assert!(granted.contains(&Permission::Create));
        assert!(!granted.contains(&Permission::Read));
    }
}
