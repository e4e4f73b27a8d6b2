use criterion::{black_box, criterion_group, criterion_main, Criterion};
use subject_clean::metadata::Subject;
use subject_clean::schemes::{Rules, Scheme};

pub fn rules_benchmark(c: &mut Criterion) {
    let rules = Rules::builtin().unwrap();
    let ddc = rules.table(Scheme::Ddc).unwrap();
    let bepress = rules.table(Scheme::Bepress).unwrap();
    let values = ["610", "004.1", "ddc 780", "930.1", "no match at all"];

    let mut group = c.benchmark_group("ddc");
    group.bench_function("regex set", |b| {
        b.iter(|| {
            for v in values.iter() {
                black_box(ddc.first_match(black_box(v)));
            }
        })
    });
    group.bench_function("linear scan", |b| {
        b.iter(|| {
            for v in values.iter() {
                black_box(ddc.scan(black_box(v)));
            }
        })
    });
    group.finish();

    let subject = Subject::new("Other Medical Specialties").with_scheme("bepress");
    c.bench_function("bepress resolve", |b| {
        b.iter(|| bepress.resolve(black_box(&subject)))
    });
}

criterion_group!(benches, rules_benchmark);
criterion_main!(benches);
