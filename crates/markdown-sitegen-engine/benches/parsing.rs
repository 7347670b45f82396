use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use markdown_sitegen_engine::{
    HtmlNode, parse_to_tree, parsing::inline::tokenize, parsing::parse_document, serialize,
};

mod common;

fn bench_block_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("blocks");
    group.sample_size(10);

    for size in [10, 100, 1000] {
        let content = common::generate_markdown_content(size);
        group.bench_with_input(BenchmarkId::new("parse_document", size), &content, |b, s| {
            b.iter(|| std::hint::black_box(parse_document(s)))
        });
    }

    group.finish();
}

fn bench_inline_tokenizing(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");
    group.sample_size(10);

    for spans in [10, 100] {
        let paragraph = common::generate_inline_heavy_paragraph(spans);
        group.bench_with_input(BenchmarkId::new("tokenize", spans), &paragraph, |b, s| {
            b.iter(|| std::hint::black_box(tokenize(s).unwrap()))
        });
    }

    group.finish();
}

fn bench_full_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let content = common::generate_complex_markdown(50, 4);
    group.bench_function("parse_and_serialize", |b| {
        b.iter(|| {
            let tree = parse_to_tree(&content, "div").unwrap();
            std::hint::black_box(serialize(&HtmlNode::from(tree)).unwrap())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_block_parsing,
    bench_inline_tokenizing,
    bench_full_render
);
criterion_main!(benches);
