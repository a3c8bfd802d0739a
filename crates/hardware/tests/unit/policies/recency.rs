//! LRU ordering tests.

use pagesim::core::policies::{RecencyPolicy, ReplacementPolicy};
use pretty_assertions::assert_eq;

use crate::common::page;

fn tracked(ids: &[&str]) -> RecencyPolicy {
    let mut policy = RecencyPolicy::new();
    for id in ids {
        policy.track(page(id)).unwrap();
    }
    policy
}

#[test]
fn test_tracked_lists_lru_first() {
    let policy = tracked(&["A", "B", "C"]);
    assert_eq!(policy.tracked(), vec![page("A"), page("B"), page("C")]);
}

#[test]
fn test_touch_moves_to_mru() {
    let mut policy = tracked(&["A", "B", "C"]);
    policy.touch(&page("A")).unwrap();

    assert_eq!(policy.tracked(), vec![page("B"), page("C"), page("A")]);
    assert_eq!(policy.select_victim().unwrap(), page("B"));
}

#[test]
fn test_touch_preserves_order_of_others() {
    let mut policy = tracked(&["A", "B", "C", "D", "E"]);
    policy.touch(&page("C")).unwrap();

    assert_eq!(
        policy.tracked(),
        vec![page("A"), page("B"), page("D"), page("E"), page("C")]
    );
}

#[test]
fn test_repeated_touch_of_mru_is_stable() {
    let mut policy = tracked(&["A", "B"]);
    policy.touch(&page("B")).unwrap();
    policy.touch(&page("B")).unwrap();

    assert_eq!(policy.tracked(), vec![page("A"), page("B")]);
}

#[test]
fn test_untouched_ages_like_touched_once() {
    // B is tracked after A is touched, so A is older.
    let mut policy = tracked(&["A"]);
    policy.touch(&page("A")).unwrap();
    policy.track(page("B")).unwrap();

    assert_eq!(policy.select_victim().unwrap(), page("A"));
}

#[test]
fn test_victim_sequence_follows_recency() {
    let mut policy = tracked(&["A", "B", "C"]);
    policy.touch(&page("B")).unwrap();
    policy.touch(&page("A")).unwrap();

    assert_eq!(policy.select_victim().unwrap(), page("C"));
    assert_eq!(policy.select_victim().unwrap(), page("B"));
    assert_eq!(policy.select_victim().unwrap(), page("A"));
}
