use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use aerohse_auth::{
    AccountStatus, Module, Permission, Principal, PrincipalId, Role, can_access_module,
    default_policy, has_permission,
};

fn bench_point_queries(c: &mut Criterion) {
    let catalog = default_policy();
    let principals: Vec<Principal> = Role::ALL
        .into_iter()
        .map(|role| Principal::new(PrincipalId::new(), role, AccountStatus::Active))
        .collect();

    let queries = Role::ALL.len() * Module::ALL.len() * Permission::ALL.len();

    let mut group = c.benchmark_group("authz_point_queries");
    group.throughput(Throughput::Elements(queries as u64));
    group.bench_function("has_permission_full_grid", |b| {
        b.iter(|| {
            let mut granted = 0usize;
            for principal in &principals {
                for module in Module::ALL {
                    for permission in Permission::ALL {
                        if has_permission(
                            black_box(&catalog),
                            Some(black_box(principal)),
                            module,
                            permission,
                        ) {
                            granted += 1;
                        }
                    }
                }
            }
            black_box(granted)
        })
    });
    group.finish();
}

fn bench_navigation_sweep(c: &mut Criterion) {
    // The route guard's hot path: one can_access_module call per nav entry.
    let catalog = default_policy();
    let principal = Principal::new(
        PrincipalId::new(),
        Role::SafetyOfficer,
        AccountStatus::Active,
    );

    let mut group = c.benchmark_group("authz_navigation");
    group.throughput(Throughput::Elements(Module::ALL.len() as u64));
    group.bench_function("can_access_module_sweep", |b| {
        b.iter(|| {
            let visible = Module::ALL
                .into_iter()
                .filter(|m| can_access_module(black_box(&catalog), Some(&principal), *m))
                .count();
            black_box(visible)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_point_queries, bench_navigation_sweep);
criterion_main!(benches);
