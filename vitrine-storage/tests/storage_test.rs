use std::collections::HashSet;

use test_fixtures::{product, sample_products};
use vitrine_core::models::{
    CatalogFilter, CatalogSort, PageRequest, ProductId, Rating, Review, UserId,
};
use vitrine_core::traits::{IProductRepository, IProfileStore, IReviewStore};
use vitrine_storage::StoreEngine;

fn seeded_engine() -> StoreEngine {
    let engine = StoreEngine::open_in_memory().unwrap();
    for p in sample_products() {
        engine.create(&p).unwrap();
    }
    engine
}

// ── Products ─────────────────────────────────────────────────────────────

#[test]
fn product_round_trip() {
    let engine = StoreEngine::open_in_memory().unwrap();
    let p = product("p1", "Wireless Headphones", "Electronics", 4.8);

    engine.create(&p).unwrap();
    let loaded = IProductRepository::get(&engine, &p.id).unwrap().unwrap();

    assert_eq!(loaded.name, p.name);
    assert_eq!(loaded.category, p.category);
    assert_eq!(loaded.rating, p.rating);
}

#[test]
fn missing_product_is_none() {
    let engine = StoreEngine::open_in_memory().unwrap();
    assert!(IProductRepository::get(&engine, &ProductId::from("nope"))
        .unwrap()
        .is_none());
}

#[test]
fn top_rated_orders_by_rating_descending() {
    let engine = seeded_engine();

    let top = engine.top_rated(8).unwrap();

    assert_eq!(top.len(), 8);
    assert_eq!(top[0].id, ProductId::from("p10"));
    for pair in top.windows(2) {
        assert!(pair[0].rating.value() >= pair[1].rating.value());
    }
}

#[test]
fn rating_ties_break_by_insertion_order() {
    let engine = StoreEngine::open_in_memory().unwrap();
    engine.create(&product("a", "First", "Home", 4.0)).unwrap();
    engine.create(&product("b", "Second", "Home", 4.0)).unwrap();
    engine.create(&product("c", "Third", "Home", 4.0)).unwrap();

    let top = engine.top_rated(3).unwrap();
    let ids: Vec<&str> = top.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn find_by_categories_filters_and_excludes() {
    let engine = seeded_engine();

    let categories: HashSet<String> = ["Electronics".to_string()].into_iter().collect();
    let excluding: HashSet<ProductId> = [ProductId::from("p1")].into_iter().collect();

    let hits = engine.find_by_categories(&categories, &excluding, 8).unwrap();

    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|p| p.category == "Electronics"));
    assert!(hits.iter().all(|p| p.id != ProductId::from("p1")));
    assert_eq!(hits[0].id, ProductId::from("p2"));
}

#[test]
fn search_matches_name_category_description_case_insensitively() {
    let engine = seeded_engine();

    assert_eq!(engine.search_text("WIRELESS", 8).unwrap().len(), 1);
    assert_eq!(engine.search_text("sports", 8).unwrap().len(), 2);
    assert!(engine.search_text("zzz", 8).unwrap().is_empty());
    assert!(engine.search_text("   ", 8).unwrap().is_empty());
}

#[test]
fn like_wildcards_in_search_terms_stay_literal() {
    let engine = seeded_engine();
    assert!(engine.search_text("%", 8).unwrap().is_empty());
    assert!(engine.search_text("_", 8).unwrap().is_empty());
}

#[test]
fn listing_filters_sorts_and_paginates() {
    let engine = seeded_engine();

    let filter = CatalogFilter {
        min_rating: Some(4.5),
        sort: CatalogSort::RatingDesc,
        ..CatalogFilter::default()
    };
    let page = engine.list(&filter, PageRequest::new(1, 3)).unwrap();

    assert_eq!(page.total, 5);
    assert_eq!(page.page_count(), 2);
    assert_eq!(page.products.len(), 3);
    assert_eq!(page.products[0].id, ProductId::from("p10"));

    let second = engine.list(&filter, PageRequest::new(2, 3)).unwrap();
    assert_eq!(second.products.len(), 2);
}

#[test]
fn price_filter_bounds_are_inclusive() {
    let engine = StoreEngine::open_in_memory().unwrap();
    let mut cheap = product("cheap", "Cheap", "Home", 4.0);
    cheap.price = 5.0;
    let mut steep = product("steep", "Steep", "Home", 4.0);
    steep.price = 50.0;
    engine.create(&cheap).unwrap();
    engine.create(&steep).unwrap();

    let filter = CatalogFilter {
        min_price: Some(5.0),
        max_price: Some(5.0),
        ..CatalogFilter::default()
    };
    let page = engine.list(&filter, PageRequest::default()).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.products[0].id, ProductId::from("cheap"));
}

#[test]
fn update_rating_persists() {
    let engine = seeded_engine();
    let id = ProductId::from("p7");

    engine.update_rating(&id, Rating::new(4.95)).unwrap();

    let top = engine.top_rated(1).unwrap();
    assert_eq!(top[0].id, id);
}

// ── Profiles ─────────────────────────────────────────────────────────────

#[test]
fn unknown_profile_is_none() {
    let engine = StoreEngine::open_in_memory().unwrap();
    assert!(IProfileStore::get(&engine, &UserId::from("ghost"))
        .unwrap()
        .is_none());
}

#[test]
fn view_history_caps_at_twenty_most_recent_first() {
    let engine = StoreEngine::open_in_memory().unwrap();
    let user = UserId::from("u1");

    for n in 0..25 {
        engine
            .append_view(&user, &ProductId(format!("p{n}")))
            .unwrap();
    }

    let profile = IProfileStore::get(&engine, &user).unwrap().unwrap();
    assert_eq!(profile.view_history.len(), 20);
    assert_eq!(profile.view_history[0].product_id, ProductId::from("p24"));
    assert_eq!(profile.view_history[19].product_id, ProductId::from("p5"));
}

#[test]
fn search_history_caps_at_twenty() {
    let engine = StoreEngine::open_in_memory().unwrap();
    let user = UserId::from("u1");

    for n in 0..23 {
        engine.append_search(&user, &format!("term {n}")).unwrap();
    }

    let profile = IProfileStore::get(&engine, &user).unwrap().unwrap();
    assert_eq!(profile.search_history.len(), 20);
    assert_eq!(profile.search_history[0].term, "term 22");
    assert_eq!(profile.search_history[19].term, "term 3");
}

#[test]
fn toggle_favorite_flips_and_reports_state() {
    let engine = StoreEngine::open_in_memory().unwrap();
    let user = UserId::from("u1");
    let id = ProductId::from("p1");

    assert!(engine.toggle_favorite(&user, &id).unwrap());
    let profile = IProfileStore::get(&engine, &user).unwrap().unwrap();
    assert!(profile.favorites.contains(&id));

    assert!(!engine.toggle_favorite(&user, &id).unwrap());
    let profile = IProfileStore::get(&engine, &user).unwrap().unwrap();
    assert!(profile.favorites.is_empty());
}

// ── Reviews ──────────────────────────────────────────────────────────────

#[test]
fn review_ratings_accumulate_in_order() {
    let engine = seeded_engine();
    let id = ProductId::from("p1");

    for stars in [5u8, 3, 4] {
        let review = Review::new(id.clone(), UserId::from("u1"), stars, String::new());
        engine.add(&review).unwrap();
    }

    assert_eq!(engine.ratings_for(&id).unwrap(), vec![5, 3, 4]);
}

// ── Persistence ──────────────────────────────────────────────────────────

#[test]
fn data_survives_reopen() {
    let dir = std::env::temp_dir().join(format!("vitrine-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("store.db");

    {
        let engine = StoreEngine::open(&path).unwrap();
        engine
            .create(&product("p1", "Wireless Headphones", "Electronics", 4.8))
            .unwrap();
        engine
            .append_view(&UserId::from("u1"), &ProductId::from("p1"))
            .unwrap();
    }

    let engine = StoreEngine::open(&path).unwrap();
    assert!(IProductRepository::get(&engine, &ProductId::from("p1"))
        .unwrap()
        .is_some());
    let profile = IProfileStore::get(&engine, &UserId::from("u1"))
        .unwrap()
        .unwrap();
    assert_eq!(profile.view_history.len(), 1);

    drop(engine);
    let _ = std::fs::remove_dir_all(&dir);
}
