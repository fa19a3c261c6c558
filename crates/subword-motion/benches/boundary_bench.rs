use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use subword_motion::{line_stops, next_boundary_left, next_boundary_right};
use subword_text::{Buffer, Position, TextDocument};

fn long_identifier_line() -> String {
    // ~4k columns of mixed camelCase, acronyms, digits and underscores.
    "parseHTTPResponse_v2Header ".repeat(150)
}

fn scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("subword_scan");

    let buf = Buffer::from_text(&long_identifier_line());
    let len = buf.line_at(0).map_or(0, |line| line.len());

    group.bench_function("walk_right_full_line", |b| {
        b.iter(|| {
            let mut pos = Position::ZERO;
            loop {
                let next = next_boundary_right(&buf, pos).unwrap();
                if next == pos {
                    break;
                }
                pos = black_box(next);
            }
        });
    });

    group.bench_function("walk_left_full_line", |b| {
        b.iter(|| {
            let mut pos = Position::new(0, len);
            loop {
                let next = next_boundary_left(&buf, pos).unwrap();
                if next == pos {
                    break;
                }
                pos = black_box(next);
            }
        });
    });

    group.bench_function("line_stops", |b| {
        b.iter(|| black_box(line_stops(&buf, 0).unwrap()));
    });

    group.finish();
}

fn single_word(c: &mut Criterion) {
    let mut group = c.benchmark_group("subword_single_word");

    // One enormous identifier: every scan walks the whole word range.
    let ident = "a".repeat(10_000) + "B";
    let buf = Buffer::from_text(&ident);

    group.bench_function("right_from_start", |b| {
        b.iter(|| black_box(next_boundary_right(&buf, Position::ZERO).unwrap()));
    });

    group.bench_function("left_from_end", |b| {
        b.iter(|| black_box(next_boundary_left(&buf, Position::new(0, 10_001)).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, scans, single_word);
criterion_main!(benches);
