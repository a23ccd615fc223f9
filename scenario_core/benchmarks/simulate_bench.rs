use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use scenario_core::{builtin_locations, project, simulate};
use scenario_schema::ScenarioParameters;

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for horizon in [12i64, 60, 240, 1200] {
        let params = ScenarioParameters {
            horizon_months: horizon,
            ..ScenarioParameters::default()
        };
        group.bench_with_input(BenchmarkId::new("horizon", horizon), &params, |b, params| {
            b.iter(|| simulate(params))
        });
    }

    group.finish();
}

fn bench_project(c: &mut Criterion) {
    let snapshots = simulate(&ScenarioParameters::default());
    let locations = builtin_locations();
    c.bench_function("project/builtin_locations", |b| {
        b.iter(|| project(&snapshots, &locations))
    });
}

criterion_group!(simulate_benches, bench_simulate, bench_project);
criterion_main!(simulate_benches);
