use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tempfile::TempDir;
use thub_domain::{Candidate, CandidateName, Email, Phone, Roster};
use thub_persistence::{Encoding, RosterStorage};

fn roster_with(candidates: usize) -> Roster {
    let entries = (0..candidates)
        .map(|i| {
            Candidate::new(
                CandidateName::try_from(format!("Candidate {i}")).unwrap(),
                Phone::try_from("94351253").unwrap(),
                Email::try_from(format!("candidate{i}@example.com")).unwrap(),
                Vec::new(),
            )
        })
        .collect();
    Roster::from_candidates(entries).unwrap()
}

// ============================================================================
// Benchmark: Roster Construction (duplicate scan)
// ============================================================================

fn bench_roster_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("roster_construction");

    for (name, size) in [("10", 10), ("100", 100), ("1k", 1000)] {
        let candidates: Vec<Candidate> = roster_with(size).candidates().to_vec();

        group.bench_with_input(
            BenchmarkId::new("from_candidates", name),
            &candidates,
            |b, candidates| {
                b.iter(|| {
                    black_box(Roster::from_candidates(candidates.clone()).unwrap());
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Benchmark: Save / Load Operations
// ============================================================================

fn bench_save_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("save_load");
    group.measurement_time(Duration::from_secs(10));

    let temp = TempDir::new().unwrap();
    let rt = tokio::runtime::Runtime::new().unwrap();

    for (name, size) in [("10", 10), ("100", 100), ("1k", 1000)] {
        let roster = roster_with(size);

        for (flavor, encoding) in [("pretty", Encoding::Pretty), ("compact", Encoding::Compact)] {
            let storage = RosterStorage::builder()
                .file_path(temp.path().join(format!("bench_{name}_{flavor}.json")))
                .encoding(encoding)
                .build()
                .unwrap();

            group.bench_with_input(
                BenchmarkId::new(format!("save_{flavor}"), name),
                &roster,
                |b, roster| {
                    b.to_async(&rt).iter(|| async {
                        storage.save(roster).await.unwrap();
                    });
                },
            );

            rt.block_on(async {
                storage.save(&roster).await.unwrap();
            });

            group.bench_function(BenchmarkId::new(format!("load_{flavor}"), name), |b| {
                b.to_async(&rt).iter(|| async {
                    black_box(storage.load().await.unwrap());
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_roster_construction, bench_save_load);

criterion_main!(benches);
