use criterion::{Criterion, black_box, criterion_group, criterion_main};

mod common;

fn parsing_benchmark(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let engine = common::engine();
    let numbers = common::setup_numbers();

    let mut group = c.benchmark_group("Parsing");
    group.bench_function("parse", |b| {
        b.iter(|| {
            for (input, region_code) in &numbers {
                let _ = engine.parse(black_box(input), black_box(Some(*region_code)));
            }
        })
    });
    group.bench_function("normalize", |b| {
        b.iter(|| {
            for (input, _) in &numbers {
                let _ = engine.normalize(black_box(input));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
