use criterion::{black_box, criterion_group, criterion_main, Criterion};
use test_fixtures::{product, MemoryCatalog, MemoryProfiles, StaticVerifier};
use vitrine_core::config::RecommendConfig;
use vitrine_core::models::{ProductId, UserId};
use vitrine_core::traits::IProfileStore;
use vitrine_recommend::RecommendationEngine;

const CATEGORIES: [&str; 5] = ["Electronics", "Sports", "Home", "Office", "Garden"];

fn big_catalog(size: usize) -> MemoryCatalog {
    let products = (0..size)
        .map(|n| {
            product(
                &format!("p{n}"),
                &format!("Product {n}"),
                CATEGORIES[n % CATEGORIES.len()],
                (n % 50) as f64 / 10.0,
            )
        })
        .collect();
    MemoryCatalog::new(products)
}

fn bench_recommend(c: &mut Criterion) {
    let catalog = big_catalog(1_000);
    let profiles = MemoryProfiles::new();
    let verifier = StaticVerifier::new();

    let user = UserId::from("bench-user");
    let token = verifier.grant(&user);
    for n in 0..20 {
        profiles
            .append_view(&user, &ProductId(format!("p{n}")))
            .unwrap();
    }

    let engine =
        RecommendationEngine::new(&catalog, &profiles, &verifier, RecommendConfig::default());

    c.bench_function("recommend_personalized", |b| {
        b.iter(|| engine.recommend(black_box(Some(&token)), None).unwrap())
    });

    c.bench_function("recommend_fallback", |b| {
        b.iter(|| engine.recommend(None, None).unwrap())
    });

    c.bench_function("recommend_query", |b| {
        b.iter(|| {
            engine
                .recommend(black_box(Some(&token)), black_box(Some("Product 42")))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_recommend);
criterion_main!(benches);
