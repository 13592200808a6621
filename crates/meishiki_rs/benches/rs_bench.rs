use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use meishiki_rs::{BirthProfile, ReadingConfig, parse_birth, reading};

fn reading_bench(c: &mut Criterion) {
    let moment = parse_birth("1990-08-15", Some("23:30")).unwrap();
    let profile = BirthProfile::new(moment, "花子");
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let config = ReadingConfig::default();

    let mut group = c.benchmark_group("reading");
    group.bench_function("parse_birth", |b| {
        b.iter(|| parse_birth(black_box("1990-08-15"), black_box(Some("23:30"))))
    });
    group.bench_function("reading", |b| {
        b.iter(|| reading(black_box(&profile), today, &config))
    });
    group.bench_function("summary_text", |b| {
        let r = reading(&profile, today, &config);
        b.iter(|| black_box(&r).summary_text())
    });
    group.finish();
}

criterion_group!(benches, reading_bench);
criterion_main!(benches);
