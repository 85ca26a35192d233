use proptest::prelude::*;
use vitrine_core::constants::HISTORY_CAP;
use vitrine_core::models::{ProductId, UserId};
use vitrine_core::traits::IProfileStore;
use vitrine_storage::StoreEngine;

proptest! {
    // The stored view history never exceeds the cap and always holds the
    // most recent appends in reverse-chronological order.
    #[test]
    fn view_history_cap_holds(ids in prop::collection::vec(0u32..1000, 1..60)) {
        let engine = StoreEngine::open_in_memory().unwrap();
        let user = UserId::from("u1");

        for id in &ids {
            engine.append_view(&user, &ProductId(format!("p{id}"))).unwrap();
        }

        let profile = IProfileStore::get(&engine, &user).unwrap().unwrap();
        prop_assert!(profile.view_history.len() <= HISTORY_CAP);

        let expected: Vec<ProductId> = ids
            .iter()
            .rev()
            .take(HISTORY_CAP)
            .map(|id| ProductId(format!("p{id}")))
            .collect();
        let stored: Vec<ProductId> = profile
            .view_history
            .iter()
            .map(|v| v.product_id.clone())
            .collect();
        prop_assert_eq!(stored, expected);
    }

    // Any even number of toggles on one product leaves the favorites set
    // exactly where it started.
    #[test]
    fn even_toggles_are_identity(toggles in 1u8..6) {
        let engine = StoreEngine::open_in_memory().unwrap();
        let user = UserId::from("u1");
        let id = ProductId::from("p1");

        for _ in 0..toggles {
            let now_favorite = engine.toggle_favorite(&user, &id).unwrap();
            let flipped_back = engine.toggle_favorite(&user, &id).unwrap();
            prop_assert!(now_favorite);
            prop_assert!(!flipped_back);
        }

        let profile = IProfileStore::get(&engine, &user).unwrap().unwrap();
        prop_assert!(profile.favorites.is_empty());
    }
}
