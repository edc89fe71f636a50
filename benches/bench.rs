// Criterion benchmarks for City News Relay

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use city_news_relay::core::relevance::{filter_articles, filter_response};
use city_news_relay::models::Article;
use serde_json::{json, Value};

fn create_article(id: usize) -> Value {
    let mentions = vec!["tokyo"; id % 8].join(" ");
    let title = if id % 5 == 0 { format!("Tokyo story {}", id) } else { format!("Story {}", id) };

    json!({
        "source": { "id": null, "name": format!("Source {}", id) },
        "author": "Staff",
        "title": title,
        "description": format!("Local reporting {} from the region", mentions),
        "content": "Lorem ipsum dolor sit amet, consectetur adipiscing elit. [+1200 chars]",
        "url": format!("https://example.com/{}", id),
        "publishedAt": "2024-05-01T10:00:00Z"
    })
}

fn create_articles(count: usize) -> Vec<Article> {
    (0..count)
        .map(|i| serde_json::from_value(create_article(i)).unwrap())
        .collect()
}

fn bench_filter_articles(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_articles");

    for size in [5, 20, 100].iter() {
        let articles = create_articles(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| filter_articles(black_box(articles.clone()), black_box("Tokyo")));
        });
    }

    group.finish();
}

fn bench_filter_response(c: &mut Criterion) {
    let body = json!({
        "status": "ok",
        "totalResults": 100,
        "articles": (0..100).map(create_article).collect::<Vec<_>>()
    });

    c.bench_function("filter_response_100", |b| {
        b.iter(|| filter_response(black_box(body.clone()), black_box("Tokyo")));
    });
}

criterion_group!(benches, bench_filter_articles, bench_filter_response);
criterion_main!(benches);
