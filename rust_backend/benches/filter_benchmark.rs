use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use chrono::NaiveDate;
use gantt_rust::core::domain::{DateWindow, ScheduleRow};
use gantt_rust::dataset::ScheduleDataset;
use gantt_rust::engine::{derive_options, filter_dataset, FilterPolicy, FilterSelection};

fn synthetic_rows(count: usize) -> Vec<ScheduleRow> {
    let mains = ["Engineering", "Science", "Operations", "Facilities"];
    let subs = ["Mechanical", "Electrical", "Software", "Integration", "Support"];
    let areas = ["Design", "Review", "Fabrication", "Test", "Deployment", "Handover"];
    let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    (0..count)
        .map(|i| {
            let start = base + chrono::Duration::days((i % 300) as i64);
            let end = start + chrono::Duration::days((i % 45) as i64 + 1);
            // Every 17th row has no dates, like real exports tend to.
            let dated = i % 17 != 0;
            ScheduleRow {
                main_domain: mains[i % mains.len()].to_string(),
                sub_domain: subs[i % subs.len()].to_string(),
                subject_area: areas[i % areas.len()].to_string(),
                task: format!("Task {:05}", i),
                start_date: dated.then_some(start),
                end_date: dated.then_some(end),
            }
        })
        .collect()
}

fn synthetic_dataset(count: usize) -> ScheduleDataset {
    ScheduleDataset::from_rows(synthetic_rows(count))
}

fn bench_filter_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_dataset");

    for size in [100usize, 1_000, 5_000] {
        let dataset = synthetic_dataset(size);
        let policy = FilterPolicy::default();

        let mut selection = FilterSelection::default();
        selection.main_domains.insert("Engineering".to_string());
        selection.main_domains.insert("Science".to_string());
        selection.date_window = Some(DateWindow::new(
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
        ));

        group.bench_with_input(
            BenchmarkId::new("selection_and_window", size),
            &dataset,
            |b, dataset| {
                b.iter(|| {
                    filter_dataset(black_box(dataset), black_box(&selection), black_box(&policy))
                });
            },
        );

        let unrestricted = FilterSelection::default();
        group.bench_with_input(
            BenchmarkId::new("unrestricted", size),
            &dataset,
            |b, dataset| {
                b.iter(|| {
                    filter_dataset(
                        black_box(dataset),
                        black_box(&unrestricted),
                        black_box(&policy),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_derive_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_options");

    for size in [100usize, 1_000, 5_000] {
        let dataset = synthetic_dataset(size);
        let policy = FilterPolicy::default();

        let mut selection = FilterSelection::default();
        selection.main_domains.insert("Engineering".to_string());

        group.bench_with_input(
            BenchmarkId::new("conditioned", size),
            &dataset,
            |b, dataset| {
                b.iter(|| {
                    derive_options(black_box(dataset), black_box(&selection), black_box(&policy))
                });
            },
        );
    }

    group.finish();
}

fn bench_dataset_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset_construction");

    for size in [1_000usize, 5_000] {
        let rows = synthetic_rows(size);

        group.bench_with_input(BenchmarkId::new("from_rows", size), &rows, |b, rows| {
            b.iter(|| ScheduleDataset::from_rows(black_box(rows.clone())));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_filter_dataset,
    bench_derive_options,
    bench_dataset_construction
);
criterion_main!(benches);
