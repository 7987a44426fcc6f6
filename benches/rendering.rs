use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hash2stuff::{
    render_php, render_xml, to_php, to_xml, value, PhpOptions, Value, ValueMap, VariableRecord,
    XmlOptions,
};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct Database {
    host: String,
    port: u16,
    replicas: Vec<String>,
}

#[derive(Serialize, Clone)]
struct Settings {
    site_name: String,
    debug: bool,
    database: Database,
}

fn sample_settings() -> Settings {
    Settings {
        site_name: "example".to_string(),
        debug: false,
        database: Database {
            host: "db.internal".to_string(),
            port: 5432,
            replicas: vec!["r1".to_string(), "r2".to_string(), "r3".to_string()],
        },
    }
}

fn benchmark_php_simple(c: &mut Criterion) {
    let settings = sample_settings();

    c.bench_function("php_simple_struct", |b| {
        b.iter(|| to_php(black_box(&settings)))
    });
}

fn benchmark_xml_simple(c: &mut Criterion) {
    let doc = value!({
        "properties": {
            "foo": "bar",
            "entries": { "entry": ["one", "two", "three"] }
        }
    });

    c.bench_function("xml_simple_document", |b| b.iter(|| to_xml(black_box(&doc))));
}

fn benchmark_php_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("php_records");
    let options = PhpOptions::default();

    for size in [10, 50, 100, 500].iter() {
        let records: Vec<VariableRecord> = (0..*size)
            .map(|i| VariableRecord::new(format!("var{}", i), value!(["one", 2, true])))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| render_php(black_box(&records), &options))
        });
    }
    group.finish();
}

fn benchmark_xml_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("xml_sequence");
    let options = XmlOptions::default();

    for size in [10, 50, 100, 500].iter() {
        let entries: Vec<Value> = (0..*size).map(|i| Value::from(format!("entry {}", i))).collect();
        let mut doc = ValueMap::new();
        doc.insert(
            "entries".to_string(),
            Value::Mapping(ValueMap::from([("entry", Value::from(entries))])),
        );

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| render_xml(black_box(&doc), &options))
        });
    }
    group.finish();
}

fn benchmark_deep_nesting(c: &mut Criterion) {
    let mut nested = value!("leaf");
    for depth in 0..16 {
        nested = Value::Mapping(ValueMap::from([(format!("level{}", depth), nested)]));
    }
    let records = vec![VariableRecord::new("deep", nested.clone())];
    let doc = nested.as_mapping().cloned().unwrap_or_default();

    c.bench_function("php_deep_nesting", |b| {
        b.iter(|| render_php(black_box(&records), &PhpOptions::default()))
    });
    c.bench_function("xml_deep_nesting", |b| {
        b.iter(|| render_xml(black_box(&doc), &XmlOptions::default()))
    });
}

criterion_group!(
    benches,
    benchmark_php_simple,
    benchmark_xml_simple,
    benchmark_php_records,
    benchmark_xml_sequence,
    benchmark_deep_nesting
);
criterion_main!(benches);
