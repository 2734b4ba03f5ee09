//! Benchmarks for the history filter and sort engine.
//!
//! These benchmarks measure filtering and sorting throughput over
//! synthetic histories of increasing size, to keep the listing pipeline
//! comfortably interactive for the largest retained histories.

use chrono::{DateTime, FixedOffset, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use query_history::history::{
    filter_and_sort_at, filter_by_search, sort_entries, HistoryEntry, SortOrder, SubQuery,
};

const DATASOURCES: &[&str] = &["Prometheus", "Loki", "Tempo", "Mimir", "Postgres"];

const EXPRESSIONS: &[&str] = &[
    "rate(http_requests_total[5m])",
    "histogram_quantile(0.99, sum(rate(request_duration_seconds_bucket[5m])) by (le))",
    "node_load1",
    "{job=\"app\"} |= \"timeout\"",
    "sum by (instance) (process_resident_memory_bytes)",
];

fn bench_now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
        .unwrap()
}

/// Generates a deterministic history spread over the two weeks before
/// the benchmark's reference instant.
fn generate_history(len: usize) -> Vec<HistoryEntry> {
    let newest = bench_now().timestamp_millis();
    let two_weeks = 14 * 24 * 60 * 60 * 1000;

    (0..len)
        .map(|i| {
            let query = SubQuery::new()
                .with_field("refId", "A")
                .with_field("expr", EXPRESSIONS[i % EXPRESSIONS.len()]);
            let mut entry =
                HistoryEntry::new(DATASOURCES[i % DATASOURCES.len()], vec![query]);
            entry.ts = newest - (i as i64 * two_weeks / len as i64);
            if i % 7 == 0 {
                entry.comment = format!("investigation {}", i);
            }
            entry
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_search");

    for size in [1_000, 10_000, 50_000] {
        let entries = generate_history(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| filter_by_search(black_box("timeout"), entries));
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_entries");
    let entries = generate_history(10_000);

    for order in SortOrder::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(order.as_str()),
            &entries,
            |b, entries| {
                b.iter(|| sort_entries(black_box(order), entries));
            },
        );
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_and_sort");
    let now = bench_now();
    let filters = vec!["Prometheus".to_string(), "Loki".to_string()];

    for size in [1_000, 10_000, 50_000] {
        let entries = generate_history(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| {
                filter_and_sort_at(
                    black_box(SortOrder::Descending),
                    &filters,
                    black_box("rate"),
                    Some([0, 7]),
                    entries,
                    &now,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search, bench_sort, bench_pipeline);
criterion_main!(benches);
