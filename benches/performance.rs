// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for PitchBender
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Continued-fraction ratio approximation
//! - Ratio and cents parsing
//! - Pitch-class lookup per detector sample
//! - Scala file parsing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pitchbender::music::{
    approximate_ratio, convert_decimal_to_ratio, convert_ratio_to_cents,
    parse_decimal_from_scala_line, parse_pitch_class_from_frequency, ScalaScale,
    TWELVE_TET_PITCH_FREQUENCIES,
};
use pitchbender::music::pitch::NoteSpelling;
use pitchbender::PitchTracker;

/// Benchmark decimal-to-ratio approximation
fn bench_ratio_approximation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ratio_approximation");

    for (name, decimal) in [
        ("fifth", 1.5),
        ("pi", std::f64::consts::PI),
        ("semitone", 1.059_463_094_359_295_3),
    ] {
        group.bench_with_input(BenchmarkId::new("default", name), &decimal, |b, &d| {
            b.iter(|| convert_decimal_to_ratio(black_box(d)))
        });
        group.bench_with_input(BenchmarkId::new("loose", name), &decimal, |b, &d| {
            b.iter(|| approximate_ratio(black_box(d), 1.0e-3))
        });
    }

    group.finish();
}

/// Benchmark ratio string to cents
fn bench_ratio_to_cents(c: &mut Criterion) {
    c.bench_function("ratio_to_cents", |b| {
        b.iter(|| convert_ratio_to_cents(black_box("81/64")))
    });
}

/// Benchmark Scala line parsing
fn bench_scala_lines(c: &mut Criterion) {
    let lines = ["701.95500 ! fifth", "5/4 major third", "!comment", " 1200.0"];

    c.bench_function("scala_line", |b| {
        b.iter(|| {
            for line in &lines {
                let _ = black_box(parse_decimal_from_scala_line(black_box(line)));
            }
        })
    });
}

/// Benchmark whole Scala file parsing
fn bench_scala_file(c: &mut Criterion) {
    let mut text = String::from("! 53edo.scl\n53 equal divisions of the octave\n53\n");
    for step in 1..53 {
        text.push_str(&format!("{:.5}\n", step as f64 * 1200.0 / 53.0));
    }
    text.push_str("2/1\n");

    c.bench_function("scala_file_53edo", |b| {
        b.iter(|| ScalaScale::parse(black_box(&text)))
    });
}

/// Benchmark pitch-class lookup across the table range
fn bench_pitch_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("pitch_lookup");

    for frequency in [30.0, 440.0, 4000.0, 10.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(frequency),
            &frequency,
            |b, &f| {
                b.iter(|| {
                    parse_pitch_class_from_frequency(black_box(f), &TWELVE_TET_PITCH_FREQUENCIES)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark the tracker over a detector-rate sample stream
fn bench_tracker_stream(c: &mut Criterion) {
    // ~1 second of YIN output at 22050 Hz with 1024-sample buffers
    let samples: Vec<f64> = (0..22)
        .map(|i| if i % 7 == 0 { -1.0 } else { 440.0 + (i as f64 * 0.1) })
        .collect();

    c.bench_function("tracker_stream", |b| {
        b.iter(|| {
            let mut tracker = PitchTracker::new(4, NoteSpelling::Sharps);
            let mut count = 0;
            for &hz in &samples {
                if tracker.process(black_box(hz)).is_some() {
                    count += 1;
                }
            }
            black_box(count)
        })
    });
}

criterion_group!(
    benches,
    bench_ratio_approximation,
    bench_ratio_to_cents,
    bench_scala_lines,
    bench_scala_file,
    bench_pitch_lookup,
    bench_tracker_stream,
);
criterion_main!(benches);
