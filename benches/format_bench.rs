use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rtelephone::{ParsedNumber, PhoneEngine, PhoneNumberFormat};

mod common;

fn parse_numbers(engine: &PhoneEngine) -> Vec<ParsedNumber> {
    common::setup_numbers()
        .iter()
        .map(|(input, region_code)| engine.parse(input, Some(*region_code)).unwrap())
        .collect()
}

fn formatting_benchmark(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let engine = common::engine();
    let numbers = parse_numbers(&engine);

    let mut group = c.benchmark_group("Formatting");
    for number_format in [
        PhoneNumberFormat::E164,
        PhoneNumberFormat::International,
        PhoneNumberFormat::National,
    ] {
        group.bench_function(format!("format({:?})", number_format), |b| {
            b.iter(|| {
                for number in &numbers {
                    engine
                        .format(black_box(number), black_box(number_format))
                        .unwrap();
                }
            })
        });
    }
    group.finish();
}

fn as_you_type_benchmark(c: &mut Criterion) {
    let engine = common::engine();
    c.bench_function("as you type (+44 20 8765 4321)", |b| {
        b.iter(|| {
            let mut formatter = engine.as_you_type_formatter();
            for next_char in black_box("+442087654321").chars() {
                formatter.input_digit(next_char);
            }
        })
    });
}

criterion_group!(benches, formatting_benchmark, as_you_type_benchmark);
criterion_main!(benches);
