/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use namefmt_processor::{compile, ComponentKind, NameComponents, NameFormatter};

fn bench_formatting(c: &mut Criterion) {
    let formatter = NameFormatter::builtin().unwrap();

    let name = NameComponents::new("John", "Smith")
        .with(ComponentKind::Title, "Dr.")
        .with(ComponentKind::Middle, "Michael")
        .with(ComponentKind::Generational, "Jr.")
        .with(ComponentKind::Credentials, "PhD");

    let names: Vec<NameComponents> = (0..10)
        .map(|i| NameComponents::new("Given", &format!("Family{}", i)))
        .collect();

    // Benchmark Pattern Compilation
    c.bench_function("Compile default pattern", |b| {
        b.iter(|| compile(black_box("((((t+ig)+im)+if)+is)+jc")).unwrap())
    });

    // Benchmark Single Name (cached pattern)
    c.bench_function("Format name (default)", |b| {
        b.iter(|| formatter.format(black_box(&name), None).unwrap())
    });

    // Benchmark List Formatting
    c.bench_function("Format list (oxford, 10 names)", |b| {
        b.iter(|| {
            formatter
                .format_list(black_box(&names), Some("given-family"), Some("oxford"))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_formatting);
criterion_main!(benches);
