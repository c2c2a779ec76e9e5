use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use relaxed_json::{find_matching_close, normalize, validate, validate_with_options, ValidatorOptions};

fn car_list(size: usize) -> String {
    let cars: Vec<String> = (0..size)
        .map(|i| format!("{{\"model\": \"Model {}\", \"mpg\": {}.5, \"used\": True}}", i, 20 + i % 10))
        .collect();
    format!("{{\"owner\": \"John\", \"cars\": [{}],}}", cars.join(", "))
}

fn nested(depth: usize) -> String {
    format!("{{\"a\": {}1{}}}", "[".repeat(depth), "]".repeat(depth))
}

fn benchmark_validate_simple(c: &mut Criterion) {
    let doc = r#"{"name":"John","age":30,"pets":None,"cars":[{"model":"BMW","mpg":27.5},{"model":"Ford","mpg":24.1}]}"#;

    c.bench_function("validate_simple_document", |b| {
        b.iter(|| validate(black_box(doc)))
    });
}

fn benchmark_validate_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_array");

    for size in [10, 50, 100, 500].iter() {
        let doc = car_list(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| validate(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_validate_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_nested");
    let options = ValidatorOptions::new().with_max_depth(1024);

    for depth in [8, 64, 512].iter() {
        let doc = nested(*depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &doc, |b, doc| {
            b.iter(|| validate_with_options(black_box(doc), &options))
        });
    }
    group.finish();
}

fn benchmark_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let doc = car_list(100);
    let compact = normalize(&doc).into_string();

    group.bench_function("normalize", |b| b.iter(|| normalize(black_box(&doc))));

    group.bench_function("match_root", |b| {
        b.iter(|| find_matching_close(black_box(&compact), 0))
    });

    let options = ValidatorOptions::new().with_whitespace_normalization(false);
    group.bench_function("validate_compact", |b| {
        b.iter(|| validate_with_options(black_box(&compact), &options))
    });

    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let doc = r#"{"name":"John","age":30,"pets":null,"cars":[{"model":"BMW","mpg":27.5},{"model":"Ford","mpg":24.1}]}"#;
    let relaxed = doc.replace("null", "None");

    let mut group = c.benchmark_group("comparison");

    group.bench_function("relaxed_validate", |b| {
        b.iter(|| validate(black_box(&relaxed)))
    });

    group.bench_function("json_parse", |b| {
        b.iter(|| serde_json::from_str::<serde_json::Value>(black_box(doc)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_validate_simple,
    benchmark_validate_array,
    benchmark_validate_nested,
    benchmark_stages,
    benchmark_comparison_with_json
);
criterion_main!(benches);
