// tests/store_properties.rs

use proptest::prelude::*;

use launchpad::errors::LaunchpadError;
use launchpad::profile::ProfileStore;
use launchpad_test_utils::builders::{delay, mock_store};

fn store_with(len: usize) -> ProfileStore {
    let (store, _fs) = mock_store("/props.json");
    store.create_profile("p").unwrap();
    for i in 0..len {
        store.append_task("p", delay(&format!("t{i}"), "0")).unwrap();
    }
    store
}

fn names(store: &ProfileStore) -> Vec<String> {
    store
        .snapshot("p")
        .unwrap()
        .iter()
        .map(|t| t.name().to_string())
        .collect()
}

// (len, from, to) with both indices in range.
fn valid_move() -> impl Strategy<Value = (usize, usize, usize)> {
    (1..12usize).prop_flat_map(|len| (Just(len), 0..len, 0..len))
}

proptest! {
    #[test]
    fn move_preserves_tasks_and_lands_at_target((len, from, to) in valid_move()) {
        let store = store_with(len);
        let before = names(&store);

        store.move_task("p", from, to).unwrap();
        let after = names(&store);

        let mut sorted_before = before.clone();
        let mut sorted_after = after.clone();
        sorted_before.sort();
        sorted_after.sort();
        prop_assert_eq!(sorted_before, sorted_after);
        prop_assert_eq!(&after[to], &before[from]);
    }

    #[test]
    fn out_of_range_move_changes_nothing(
        len in 0..8usize,
        from in 0..16usize,
        to in 0..16usize,
    ) {
        prop_assume!(from >= len || to >= len);
        let store = store_with(len);
        let before = store.snapshot("p").unwrap();

        let result = store.move_task("p", from, to);

        let is_out_of_range = matches!(result, Err(LaunchpadError::IndexOutOfRange { .. }));
        prop_assert!(is_out_of_range);
        prop_assert_eq!(store.snapshot("p").unwrap(), before);
    }

    #[test]
    fn create_then_get_is_empty(name in "[A-Za-z0-9 _-]{0,16}") {
        let (store, _fs) = mock_store("/props.json");
        store.create_profile(&name).unwrap();
        let profile = store.get_profile(&name).unwrap();
        prop_assert!(profile.tasks().is_empty());
    }
}
