//! Parsing and classification benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use recsift::{Sifter, parse_record_line};

/// Generate a document with `records` records and `classes` class lines.
fn generate_document(records: usize, classes: usize) -> String {
    let mut doc = String::new();

    for i in 0..records {
        doc.push_str(&format!(
            "Item{}: color = [{}, {}], size = [{}, {}, {}], weight = [{}]\n",
            i,
            i % 7,
            i % 3,
            i % 100,
            (i * 3) % 100,
            (i * 7) % 100,
            i
        ));
    }
    doc.push('\n');

    for i in 0..classes {
        let line = match i % 4 {
            0 => format!("Class{}: has property \"weight\"\n", i),
            1 => format!("Class{}: property \"size\" has 3 values\n", i),
            2 => format!("Class{}: property \"color\" contains value {}\n", i, i % 7),
            3 => format!("Class{}: property \"color\" = [{}, {}]\n", i, i % 7, i % 3),
            _ => unreachable!(),
        };
        doc.push_str(&line);
    }

    doc
}

fn bench_record_line(c: &mut Criterion) {
    let line = "Wardrobe: color = [1, 2, 3, 4], size = [10, 40, 60], coating = [44, 21], weight = [12]";
    c.bench_function("parse_record_line", |b| {
        b.iter(|| parse_record_line(black_box(line)))
    });
}

fn bench_sift(c: &mut Criterion) {
    let mut group = c.benchmark_group("sift");
    let sifter = Sifter::new();

    for &records in &[100usize, 1_000, 10_000] {
        let doc = generate_document(records, 20);
        group.throughput(Throughput::Elements(records as u64));
        group.bench_with_input(BenchmarkId::from_parameter(records), &doc, |b, doc| {
            b.iter(|| sifter.sift(black_box(doc)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_record_line, bench_sift);
criterion_main!(benches);
