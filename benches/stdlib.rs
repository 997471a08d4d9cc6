use criterion::{criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use rand::thread_rng;
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let n = 100000;
    let mut input: Vec<usize> = (0..n).collect();
    input.shuffle(&mut thread_rng());

    c.bench_function("stdlib insert 100k", |b| {
        b.iter(|| {
            let mut btreeset = std::collections::BTreeSet::new();

            input.iter().for_each(|item| {
                black_box(btreeset.insert(item));
            });

            assert_eq!(btreeset.len(), n);
        })
    });
    c.bench_function("bucketset insert 100k", |b| {
        b.iter(|| {
            let mut set = bucketset::SortedSet::new();

            input.iter().for_each(|item| {
                black_box(set.insert(*item));
            });

            assert_eq!(set.len(), n);
        })
    });
    c.bench_function("bucketset from_vec 100k", |b| {
        b.iter(|| {
            let set = bucketset::SortedSet::from_vec(black_box(input.clone()));

            assert_eq!(set.len(), n);
        })
    });

    let stdlib = std::collections::BTreeSet::from_iter(input.iter().copied());
    let set = bucketset::SortedSet::from_vec(input.clone());

    c.bench_function("stdlib contains 100k", |b| {
        b.iter(|| {
            input.iter().for_each(|item| {
                stdlib.contains(black_box(item));
            })
        })
    });
    c.bench_function("bucketset contains 100k", |b| {
        b.iter(|| {
            input.iter().for_each(|item| {
                set.contains(black_box(item));
            })
        })
    });

    c.bench_function("stdlib successor 100k", |b| {
        b.iter(|| {
            input.iter().for_each(|item| {
                black_box(stdlib.range(item + 1..).next());
            })
        })
    });
    c.bench_function("bucketset successor 100k", |b| {
        b.iter(|| {
            input.iter().for_each(|item| {
                black_box(set.gt(black_box(item)));
            })
        })
    });

    c.bench_function("bucketset get i-th 100k", |b| {
        b.iter(|| {
            input.iter().for_each(|item| {
                black_box(set.get(black_box(*item as isize)).ok());
            })
        })
    });
    c.bench_function("bucketset count_lt 100k", |b| {
        b.iter(|| {
            input.iter().for_each(|item| {
                black_box(set.count_lt(black_box(item)));
            })
        })
    });

    c.bench_function("stdlib collect 100k into vec", |b| {
        b.iter(|| black_box(stdlib.iter().collect::<Vec<&usize>>()))
    });
    c.bench_function("bucketset collect 100k into vec", |b| {
        b.iter(|| black_box(set.iter().collect::<Vec<&usize>>()))
    });

    c.bench_function("bucketset build then remove 100k", |b| {
        b.iter(|| {
            let mut churn = bucketset::SortedSet::from_vec(input.clone());
            input.iter().for_each(|item| {
                black_box(churn.remove(item));
            });

            assert!(churn.is_empty());
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
