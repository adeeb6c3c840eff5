//! Benchmarks for Nordic event parsing
//!
//! Generates synthetic events programmatically: a full header block with
//! a configurable number of phase-pick lines, parsed and validated per
//! iteration.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nordic_processor::config::NordicConfig;
use nordic_processor::parser::parse_event;
use nordic_processor::processor::reader::split_event_blocks;
use nordic_processor::validation::{DiagnosticCollector, validate_event};

fn line(fields: &[(usize, &str)], marker: char) -> String {
    let mut chars = vec![' '; 80];
    for (offset, text) in fields {
        for (i, c) in text.chars().enumerate() {
            chars[offset + i] = c;
        }
    }
    chars[79] = marker;
    chars.into_iter().collect()
}

/// One event with every header type and `picks` phase lines
fn synthetic_event(picks: usize) -> Vec<String> {
    let mut lines = vec![
        line(
            &[
                (1, "2022"),
                (6, "03"),
                (8, "14"),
                (11, "22"),
                (13, "41"),
                (16, "12.7"),
                (21, "L"),
                (23, "61.702"),
                (31, "4.881"),
                (39, "10.0"),
                (45, "BER"),
                (49, "25"),
                (51, "0.8"),
                (56, "3.2"),
                (59, "L"),
                (60, "BER"),
            ],
            '1',
        ),
        line(&[(5, "Sogn"), (28, "5"), (30, "MM")], '2'),
        line(&[(5, "110"), (17, "0.6"), (25, "2.1"), (32, "2.8"), (40, "4.0")], '5'),
        line(&[(1, "2022-03-14-2241-12.NSN___025")], '6'),
        line(&[(1, "Located by duty seismologist (OPR)")], '3'),
    ];

    for i in 0..picks {
        let second = format!("{:5.2}", 20.0 + i as f64 * 0.37);
        lines.push(line(
            &[
                (1, "STA"),
                (6, "S"),
                (7, "Z"),
                (10, if i % 2 == 0 { "P" } else { "S" }),
                (18, "22"),
                (20, "41"),
                (23, second.as_str()),
                (71, "120"),
                (76, "045"),
            ],
            ' ',
        ));
    }

    lines
}

fn bench_parse_event(c: &mut Criterion) {
    let config = NordicConfig::default();
    let mut group = c.benchmark_group("parse_event");

    for picks in [0, 10, 100] {
        let event = synthetic_event(picks);
        group.throughput(Throughput::Elements(event.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(picks), &event, |b, event| {
            b.iter(|| parse_event(black_box(event), &config))
        });
    }

    group.finish();
}

fn bench_parse_and_validate(c: &mut Criterion) {
    let config = NordicConfig::default();
    let event = synthetic_event(20);

    c.bench_function("parse_and_validate", |b| {
        b.iter(|| {
            let parsed = parse_event(black_box(&event), &config);
            let mut collector = DiagnosticCollector::new();
            validate_event(&parsed.event, &mut collector)
        })
    });
}

fn bench_bulletin(c: &mut Criterion) {
    let config = NordicConfig::default();
    let text: String = (0..200)
        .map(|_| synthetic_event(15).join("\n") + "\n\n")
        .collect();

    c.bench_function("bulletin_200_events", |b| {
        b.iter(|| {
            split_event_blocks(black_box(&text))
                .iter()
                .map(|block| parse_event(&block.lines, &config).event.phase_data.len())
                .sum::<usize>()
        })
    });
}

criterion_group!(
    benches,
    bench_parse_event,
    bench_parse_and_validate,
    bench_bulletin
);
criterion_main!(benches);
