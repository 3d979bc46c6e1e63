use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rcf::normalize;

fn dataset_short() -> &'static str {
    "Știința și învățământul, déjà vu"
}

fn dataset_medium() -> String {
    let base = "Văzând că se înserează, țăranul își mână boii spre casă"; // Romanian pangram-ish
    let mut s = String::with_capacity(8192);
    for _ in 0..128 {
        s.push_str(base);
        s.push(' ');
    }
    s
}

fn dataset_large() -> String {
    // Mixed accents from neighbouring languages
    let chunk = "Şcoală cu cedilă, naïve façade, Tiếng Việt, Ελληνικά άέή, Łódź, ÎNGER ȘES ȚARĂ";
    let mut s = String::with_capacity(64 * 1024);
    for _ in 0..512 {
        s.push_str(chunk);
        s.push(' ');
    }
    s
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("short", |b| b.iter(|| normalize(black_box(dataset_short()))));

    let med = dataset_medium();
    c.bench_function("medium", |b| b.iter(|| normalize(black_box(&med))));

    let large = dataset_large();
    c.bench_function("large", |b| b.iter(|| normalize(black_box(&large))));

    let ascii = "The quick brown fox jumps over the lazy dog ".repeat(256);
    c.bench_function("ascii", |b| b.iter(|| normalize(black_box(&ascii))));
}

criterion_group!(name=normalize_benches; config=Criterion::default().sample_size(40); targets=bench_normalize);
criterion_main!(normalize_benches);
