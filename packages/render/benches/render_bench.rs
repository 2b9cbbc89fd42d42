use blockpress_model::{Block, BlockType, PageContent, Theme};
use blockpress_render::{render_block, render_page_html};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn full_page() -> PageContent {
    let blocks = BlockType::ALL
        .iter()
        .enumerate()
        .map(|(i, block_type)| Block::from_template(format!("bench-{}", i + 1), *block_type))
        .collect();

    PageContent {
        blocks,
        theme: Theme::default(),
    }
}

fn render_single_block(c: &mut Criterion) {
    let block = Block::from_template("bench-1".to_string(), BlockType::Pricing);
    let theme = Theme::default();

    c.bench_function("render_single_block", |b| {
        b.iter(|| render_block(black_box(&block), black_box(&theme)))
    });
}

fn render_full_page_html(c: &mut Criterion) {
    let content = full_page();

    c.bench_function("render_full_page_html", |b| {
        b.iter(|| render_page_html(black_box(&content)))
    });
}

criterion_group!(benches, render_single_block, render_full_page_html);
criterion_main!(benches);
