use proptest::prelude::*;
use test_fixtures::{product, MemoryCatalog, MemoryProfiles, StaticVerifier};
use vitrine_core::config::RecommendConfig;
use vitrine_core::models::{ProductId, UserId};
use vitrine_core::traits::IProfileStore;
use vitrine_recommend::RecommendationEngine;

const CATEGORIES: [&str; 4] = ["Electronics", "Sports", "Home", "Office"];

fn arb_catalog() -> impl Strategy<Value = Vec<(usize, f64)>> {
    // (category index, rating) per product.
    prop::collection::vec((0..CATEGORIES.len(), 0.0f64..=5.0), 0..40)
}

fn build_catalog(shape: &[(usize, f64)]) -> MemoryCatalog {
    let products = shape
        .iter()
        .enumerate()
        .map(|(n, (cat, rating))| {
            product(&format!("p{n}"), &format!("Product {n}"), CATEGORIES[*cat], *rating)
        })
        .collect();
    MemoryCatalog::new(products)
}

proptest! {
    // Result size bound: never more than 8 products, whatever the input.
    #[test]
    fn result_never_exceeds_eight(
        shape in arb_catalog(),
        query in prop::option::of("[a-zA-Z ]{0,12}"),
        viewed in prop::collection::vec(0usize..40, 0..30),
    ) {
        let catalog = build_catalog(&shape);
        let profiles = MemoryProfiles::new();
        let verifier = StaticVerifier::new();

        let user = UserId::from("u1");
        let token = verifier.grant(&user);
        for n in &viewed {
            profiles.append_view(&user, &ProductId(format!("p{n}"))).unwrap();
        }

        let engine = RecommendationEngine::new(
            &catalog, &profiles, &verifier, RecommendConfig::default(),
        );
        let result = engine.recommend(Some(&token), query.as_deref()).unwrap();

        prop_assert!(result.products.len() <= 8);
    }

    // Favorites exclusion: the affinity path never recommends a product
    // the caller has already favorited.
    #[test]
    fn affinity_result_excludes_favorites(
        shape in arb_catalog(),
        favorited in prop::collection::vec(0usize..40, 0..20),
        viewed in prop::collection::vec(0usize..40, 1..20),
    ) {
        let catalog = build_catalog(&shape);
        let profiles = MemoryProfiles::new();
        let verifier = StaticVerifier::new();

        let user = UserId::from("u1");
        let token = verifier.grant(&user);
        for n in &viewed {
            profiles.append_view(&user, &ProductId(format!("p{n}"))).unwrap();
        }
        let mut favorite_ids = Vec::new();
        for n in &favorited {
            let id = ProductId(format!("p{n}"));
            if profiles.toggle_favorite(&user, &id).unwrap() {
                favorite_ids.push(id);
            } else {
                favorite_ids.retain(|f| f != &id);
            }
        }

        let engine = RecommendationEngine::new(
            &catalog, &profiles, &verifier, RecommendConfig::default(),
        );
        let result = engine.recommend(Some(&token), None).unwrap();

        if result.personalized {
            for p in &result.products {
                prop_assert!(!favorite_ids.contains(&p.id));
            }
        }
    }

    // Fallback ordering: the general path is rating-descending.
    #[test]
    fn fallback_is_rating_descending(shape in arb_catalog()) {
        let catalog = build_catalog(&shape);
        let profiles = MemoryProfiles::new();
        let verifier = StaticVerifier::new();

        let engine = RecommendationEngine::new(
            &catalog, &profiles, &verifier, RecommendConfig::default(),
        );
        let result = engine.recommend(None, None).unwrap();

        prop_assert!(!result.personalized);
        for pair in result.products.windows(2) {
            prop_assert!(pair[0].rating.value() >= pair[1].rating.value());
        }
    }

    // Double toggle is an identity on the favorites set.
    #[test]
    fn double_toggle_is_identity(n in 0usize..40) {
        let profiles = MemoryProfiles::new();
        let user = UserId::from("u1");
        let id = ProductId(format!("p{n}"));

        let first = profiles.toggle_favorite(&user, &id).unwrap();
        let second = profiles.toggle_favorite(&user, &id).unwrap();

        prop_assert!(first);
        prop_assert!(!second);
        let profile = profiles.get(&user).unwrap().unwrap();
        prop_assert!(!profile.favorites.contains(&id));
    }
}
