#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names,
    clippy::cast_possible_wrap
)]
use std::collections::HashMap;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::seq::SliceRandom;
use tridict::{AvlHashMap, ChainingTable, Dictionary, OpenAddressingTable};

const ITEMS_AMOUNT: usize = 10_000;
const SAMPLE_SIZE: usize = 10;

/// Unique keys in shuffled order, paired with arbitrary values.
fn dataset(amount: usize) -> Vec<(i64, i64)> {
    let mut rng = rand::rng();
    let mut keys: Vec<i64> = (0..amount as i64).collect();
    keys.shuffle(&mut rng);
    keys.into_iter().map(|key| (key, key.wrapping_mul(0x9e37_79b9))).collect()
}

fn dictionary_benches(c: &mut Criterion) {
    let items = dataset(ITEMS_AMOUNT);

    let mut group = c.benchmark_group("Dictionary strategy comparison");
    group.sample_size(SAMPLE_SIZE);

    group.bench_function("open addressing insert+remove", |b| {
        b.iter(|| {
            let mut table = OpenAddressingTable::with_capacity(ITEMS_AMOUNT * 2);
            for &(key, value) in &items {
                table.insert(key, value).unwrap();
            }
            for &(key, _) in &items {
                table.remove(key);
            }
        });
    });
    group.bench_function("chaining insert+remove", |b| {
        b.iter(|| {
            let mut table = ChainingTable::with_capacity(ITEMS_AMOUNT);
            for &(key, value) in &items {
                table.insert(key, value).unwrap();
            }
            for &(key, _) in &items {
                table.remove(key);
            }
        });
    });
    group.bench_function("avl buckets insert+remove", |b| {
        b.iter(|| {
            let mut table = AvlHashMap::with_capacity(16);
            for &(key, value) in &items {
                table.insert(key, value).unwrap();
            }
            for &(key, _) in &items {
                table.remove(key);
            }
        });
    });
    group.bench_function("rust std insert+remove", |b| {
        b.iter(|| {
            let mut table = HashMap::new();
            for &(key, value) in &items {
                table.insert(key, value);
            }
            for &(key, _) in &items {
                table.remove(&key);
            }
        });
    });

    let mut avl_map = AvlHashMap::with_capacity(16);
    let mut std_map = HashMap::new();
    for &(key, value) in &items {
        avl_map.insert(key, value).unwrap();
        std_map.insert(key, value);
    }
    group.bench_function("avl buckets lookup", |b| {
        b.iter(|| {
            for &(key, _) in &items {
                let _ = avl_map.contains(key);
            }
        });
    });
    group.bench_function("rust std lookup", |b| {
        b.iter(|| {
            for &(key, _) in &items {
                let _ = std_map.contains_key(&key);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, dictionary_benches);

criterion_main!(benches);
