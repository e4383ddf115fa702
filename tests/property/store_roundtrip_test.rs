//! Property-based tests for the SQLite recent-list store.
//!
//! These tests verify that for arbitrary valid lists, saving and then
//! loading yields the same entries in the same order.

use std::sync::Arc;

use proptest::prelude::*;

use taqyeem::database::Database;
use taqyeem::managers::recent_store::{RecentStore, SqliteRecentStore};
use taqyeem::types::company::CompanyDescriptor;

/// Strategy for generating company descriptors with arbitrary display data.
fn arb_company() -> impl Strategy<Value = CompanyDescriptor> {
    (
        "[a-z0-9-]{1,12}",
        "[a-zA-Z ]{1,24}",
        0.0f64..=5.0,
        "[a-z]{3,10}",
    )
        .prop_map(|(id, name, rating, domain)| CompanyDescriptor {
            logo: format!("https://cdn.example.com/logos/{}.png", id),
            id,
            name,
            rating,
            domain,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// For any list of descriptors, save followed by load returns an equal
    /// list: same ids, same order, same display fields.
    #[test]
    fn save_then_load_round_trips(
        list in proptest::collection::vec(arb_company(), 0..15),
    ) {
        let db = Arc::new(Database::open_in_memory().expect("open_in_memory failed"));
        let store = SqliteRecentStore::new(db);

        store.save(&list).expect("save should succeed");
        let loaded = store.load();

        prop_assert_eq!(loaded, list);
    }

    /// Saving twice keeps only the second list: the store holds exactly one
    /// document per key.
    #[test]
    fn save_replaces_previous_document(
        first in proptest::collection::vec(arb_company(), 0..10),
        second in proptest::collection::vec(arb_company(), 0..10),
    ) {
        let db = Arc::new(Database::open_in_memory().expect("open_in_memory failed"));
        let store = SqliteRecentStore::new(db);

        store.save(&first).expect("first save should succeed");
        store.save(&second).expect("second save should succeed");

        prop_assert_eq!(store.load(), second);
    }
}
