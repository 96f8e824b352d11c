use criterion::{criterion_group, criterion_main, Criterion};

mod common;

use invindex::{build_inverted_index, StorageStrategy, Strategy};

pub fn indexing(c: &mut Criterion) {
    let dataset = common::dataset();

    let mut g = c.benchmark_group("Indexing");
    g.bench_function("build", |g| g.iter(|| build_inverted_index(&dataset)));

    let index = build_inverted_index(&dataset);
    for strategy in [Strategy::Json, Strategy::Binary] {
        g.bench_function(format!("dump {strategy}"), |g| {
            g.iter(|| {
                let mut buffer = Vec::new();
                strategy.dump(&index, &mut buffer).unwrap();
                buffer
            })
        });

        let mut dump = Vec::new();
        strategy.dump(&index, &mut dump).unwrap();
        g.bench_function(format!("load {strategy}"), |g| {
            g.iter(|| strategy.load(dump.as_slice()).unwrap())
        });
    }
}

criterion_group!(benches, indexing);
criterion_main!(benches);
