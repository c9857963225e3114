use criterion::{black_box, criterion_group, criterion_main, Criterion};
use varcase::{render, tokenize, Scheme};

const INPUTS: &[&str] = &[
    "user first name",
    "HTTPServer2Client",
    "already_snake_case_identifier",
    "  Mixed-delimiters and_CamelCase XMLHttpRequest v1.2.3  ",
];

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(tokenize(black_box(input)));
            }
        })
    });
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    for scheme in Scheme::ALL {
        group.bench_function(scheme.as_str(), |b| {
            b.iter(|| {
                for input in INPUTS {
                    black_box(render(&tokenize(black_box(input)), scheme));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_convert);
criterion_main!(benches);
