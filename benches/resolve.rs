//! Candidate resolution and text rendering benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use emoji_kit::{EmojiMap, EmojiStyle, EmojiToken, Resolver, ResolverConfig, TextRenderer};
use std::hint::black_box;

fn resolution(c: &mut Criterion) {
    let resolver = Resolver::default();
    let heart = EmojiToken::native("❤️");
    let family = EmojiToken::native("👨‍👩‍👧");
    let shortcode = EmojiToken::shortcode("fire");

    for style in [EmojiStyle::Apple, EmojiStyle::Flexhunt] {
        c.bench_function(&format!("candidates_heart_{style}"), |b| {
            b.iter(|| resolver.candidates(black_box(&heart), black_box(style)))
        });
    }

    c.bench_function("candidates_zwj_sequence", |b| {
        b.iter(|| resolver.candidates(black_box(&family), EmojiStyle::Google))
    });

    c.bench_function("candidates_shortcode", |b| {
        b.iter(|| resolver.candidates(black_box(&shortcode), EmojiStyle::Twitter))
    });

    let map = EmojiMap::builtin();
    let config = ResolverConfig::default();
    c.bench_function("popular_preload_urls", |b| {
        b.iter(|| map.popular_preload_urls(black_box(&config)))
    });
}

fn rendering(c: &mut Criterion) {
    let renderer = TextRenderer::default();
    let text = "release day 🎉 :rocket: thanks everyone 🙏 ❤️ :100:".repeat(4);

    c.bench_function("render_text_apple", |b| {
        b.iter(|| renderer.render(black_box(&text), EmojiStyle::Apple))
    });

    c.bench_function("render_text_native", |b| {
        b.iter(|| renderer.render(black_box(&text), EmojiStyle::Native))
    });
}

criterion_group!(benches, resolution, rendering);
criterion_main!(benches);
