use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use folio::{
    domain::text::{ellipsize, truncate_text, wrap_text},
    infrastructure::content_provider,
};

fn benchmark(c: &mut Criterion) {
    let content = content_provider::embedded().expect("embedded content");
    let descriptions: Vec<&str> = content
        .projects
        .iter()
        .map(|project| project.long_description.as_str())
        .collect();

    c.bench_function("wrap-bio", |b| {
        b.iter(|| wrap_text(black_box(&content.profile.bio), black_box(40)))
    });

    c.bench_function("wrap-truncate-projects", |b| {
        b.iter(|| {
            for description in &descriptions {
                let wrapped = wrap_text(black_box(description), black_box(60));
                black_box(truncate_text(&wrapped, 4));
            }
        })
    });

    c.bench_function("ellipsize-projects", |b| {
        b.iter(|| {
            for description in &descriptions {
                black_box(ellipsize(black_box(description), black_box(50)));
            }
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
