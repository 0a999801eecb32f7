use chain_hashmap::{ChainHashMap, HashStrategy};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

const STRATEGIES: [(&str, HashStrategy); 3] = [
    ("native", HashStrategy::Native),
    ("fnv1a32", HashStrategy::Fnv1a32),
    ("fnv1a64", HashStrategy::Fnv1a64),
];

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn filled(strategy: HashStrategy, seed: u64, n: usize) -> (ChainHashMap<String, u64>, Vec<String>) {
    let mut m = ChainHashMap::with_strategy(strategy);
    let keys: Vec<String> = lcg(seed).take(n).map(key).collect();
    for (i, k) in keys.iter().enumerate() {
        m.put(k.clone(), i as u64);
    }
    (m, keys)
}

fn bench_put_fresh_100k(c: &mut Criterion) {
    for (name, strategy) in STRATEGIES {
        c.bench_function(&format!("{}::put_fresh_100k", name), |b| {
            b.iter_batched(
                || ChainHashMap::<String, u64>::with_strategy(strategy),
                |mut m| {
                    for (i, x) in lcg(1).take(100_000).enumerate() {
                        m.put(key(x), i as u64);
                    }
                    black_box(m)
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_put_presized_100k(c: &mut Criterion) {
    for (name, strategy) in STRATEGIES {
        c.bench_function(&format!("{}::put_presized_100k", name), |b| {
            b.iter_batched(
                || ChainHashMap::<String, u64>::with_capacity_and_strategy(1 << 18, strategy),
                |mut m| {
                    for (i, x) in lcg(3).take(100_000).enumerate() {
                        m.put(key(x), i as u64);
                    }
                    black_box(m)
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_get_hit_10k(c: &mut Criterion) {
    for (name, strategy) in STRATEGIES {
        c.bench_function(&format!("{}::get_hit_10k_on_100k", name), |b| {
            let (m, keys) = filled(strategy, 7, 100_000);
            // Precompute 10k random query keys using LCG
            let n = keys.len();
            let mut s = 0x9e3779b97f4a7c15u64;
            let queries: Vec<String> = (0..10_000)
                .map(|_| {
                    s = s.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
                    keys[(s as usize) % n].clone()
                })
                .collect();
            b.iter(|| {
                for k in &queries {
                    black_box(m.get(k.as_str()));
                }
            })
        });
    }
}

fn bench_get_miss_10k(c: &mut Criterion) {
    for (name, strategy) in STRATEGIES {
        c.bench_function(&format!("{}::get_miss_10k_on_100k", name), |b| {
            let (m, _keys) = filled(strategy, 11, 100_000);
            let misses: Vec<String> = lcg(0xdead_beef).take(10_000).map(key).collect();
            b.iter(|| {
                for k in &misses {
                    black_box(m.get(k.as_str()));
                }
            })
        });
    }
}

fn bench_remove_random_10k(c: &mut Criterion) {
    c.bench_function("native::remove_random_10k_of_110k", |b| {
        b.iter_batched(
            || {
                let (m, keys) = filled(HashStrategy::Native, 5, 110_000);
                let n = keys.len();
                let mut sel = std::collections::HashSet::with_capacity(10_000);
                let mut s = 0x9e3779b97f4a7c15u64;
                while sel.len() < 10_000 {
                    s = s.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
                    sel.insert((s as usize) % n);
                }
                let to_remove: Vec<String> = sel.into_iter().map(|i| keys[i].clone()).collect();
                (m, to_remove)
            },
            |(mut m, to_remove)| {
                for k in &to_remove {
                    black_box(m.remove(k.as_str()));
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_iter_all_100k(c: &mut Criterion) {
    c.bench_function("native::iter_all_100k", |b| {
        let (m, _keys) = filled(HashStrategy::Native, 999, 100_000);
        b.iter(|| {
            let mut sum = 0u64;
            for (_k, v) in m.iter() {
                sum = sum.wrapping_add(*v);
            }
            black_box(sum)
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches_put;
    config = bench_config();
    targets = bench_put_fresh_100k, bench_put_presized_100k
}
criterion_group! {
    name = benches_ops;
    config = bench_config();
    targets = bench_get_hit_10k,
              bench_get_miss_10k,
              bench_remove_random_10k,
              bench_iter_all_100k
}
criterion_main!(benches_put, benches_ops);
