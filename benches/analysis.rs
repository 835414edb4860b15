//! Benchmarks for chatstats parsing, extraction and report output.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench analysis -- parse_line`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatstats::Analyzer;
use chatstats::config::Locale;
use chatstats::extract::{WordFilter, extract_emojis, extract_words};
use chatstats::output::{to_csv, to_json, to_text};
use chatstats::parser::parse_line;

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_transcript(count: usize) -> String {
    let bodies = [
        "merhaba bugün akşam yemeğe gelir misin",
        "özür dilerim geç kaldım 🙏",
        "seni seviyorum canım ❤️",
        "tamam görüşürüz",
        "hahaha 😂😂 çok komik",
    ];
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 3 == 0 { "Alice" } else { "Bob" };
        let day = (i / 1440) % 28 + 1;
        let hour = (i / 60) % 24;
        let minute = i % 60;
        lines.push(format!(
            "{:02}.01.24, {:02}:{:02} - {}: {}",
            day,
            hour,
            minute,
            sender,
            bodies[i % bodies.len()]
        ));
    }
    lines.join("\n")
}

// =============================================================================
// Line-level Benchmarks
// =============================================================================

fn bench_parse_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_line");

    let cases = [
        ("message", "12.05.2024, 22:15 - Alice: See you tomorrow"),
        ("continuation", "and this line continues the previous message"),
        ("invalid_date", "31.02.23, 09:00 - Alice: impossible"),
    ];
    for (name, line) in cases {
        group.bench_function(name, |b| b.iter(|| black_box(parse_line(black_box(line)))));
    }
    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let filter = WordFilter::new(3, Locale::Turkish.stopwords());
    let body = "Merhaba dünya, bugün çok güzel bir gün ❤️😂 tamam evet görüşürüz 👍🏽";

    group.bench_function("words", |b| {
        b.iter(|| black_box(extract_words(black_box(body), &filter)))
    });
    group.bench_function("emojis", |b| b.iter(|| black_box(extract_emojis(black_box(body)))));
    group.finish();
}

// =============================================================================
// Full Pass Benchmarks
// =============================================================================

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let analyzer = Analyzer::new().unwrap();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let text = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| black_box(analyzer.analyze_str(black_box(text))));
        });
    }
    group.finish();
}

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let report = Analyzer::new()
        .unwrap()
        .analyze_str(&generate_transcript(10_000));

    group.bench_function("json", |b| b.iter(|| black_box(to_json(&report).unwrap())));
    group.bench_function("csv", |b| b.iter(|| black_box(to_csv(&report).unwrap())));
    group.bench_function("text", |b| b.iter(|| black_box(to_text(&report))));
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(benches, bench_parse_line, bench_extract, bench_analyze, bench_output);

criterion_main!(benches);
