//! Benchmarks for the dashboard queries
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use spacex_dash::dashboard::{DashboardController, InputId, SliderBounds};
use spacex_dash::data::{LaunchRecord, LaunchTable, Outcome, PayloadRange};
use spacex_dash::query::{payload_scatter, site_summary, FilterState, SiteSelection};
use std::sync::Arc;

const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];
const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn create_test_table(count: usize) -> LaunchTable {
    let records = (0..count)
        .map(|i| {
            let outcome = if i % 3 == 0 {
                Outcome::Failure
            } else {
                Outcome::Success
            };
            LaunchRecord::new(
                SITES[i % SITES.len()],
                (i * 37 % 10_000) as f64,
                BOOSTERS[i % BOOSTERS.len()],
                outcome,
            )
        })
        .collect();
    LaunchTable::from_records(records).unwrap()
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    for size in [56, 1000, 100_000] {
        let table = create_test_table(size);
        let range = PayloadRange::new(2000.0, 8000.0).unwrap();
        let site = SiteSelection::parse("KSC LC-39A");

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("site_summary_all_{}", size), |b| {
            b.iter(|| site_summary(black_box(&table), &SiteSelection::All))
        });

        group.bench_function(format!("site_summary_one_{}", size), |b| {
            b.iter(|| site_summary(black_box(&table), &site))
        });

        group.bench_function(format!("payload_scatter_{}", size), |b| {
            b.iter(|| payload_scatter(black_box(&table), &site, range))
        });
    }

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let controller =
        DashboardController::new(Arc::new(create_test_table(1000)), SliderBounds::default());
    let state = FilterState::initial(controller.table());

    c.bench_function("dispatch_site_change_1000", |b| {
        b.iter(|| controller.dispatch(black_box(&state), InputId::SiteDropdown))
    });
}

criterion_group!(benches, bench_queries, bench_dispatch);
criterion_main!(benches);
