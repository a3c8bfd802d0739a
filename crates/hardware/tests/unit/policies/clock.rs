//! Second chance tests.

use pagesim::core::policies::{ClockPolicy, ReplacementPolicy};
use pretty_assertions::assert_eq;

use crate::common::page;

fn tracked(ids: &[&str]) -> ClockPolicy {
    let mut policy = ClockPolicy::new();
    for id in ids {
        policy.track(page(id)).unwrap();
    }
    policy
}

#[test]
fn test_track_sets_reference_bit() {
    let policy = tracked(&["A"]);
    assert_eq!(policy.reference_bit(&page("A")), Some(true));
    assert_eq!(policy.reference_bit(&page("B")), None);
}

#[test]
fn test_first_eviction_clears_bits_and_takes_oldest() {
    let mut policy = tracked(&["A", "B", "C"]);

    assert_eq!(policy.select_victim().unwrap(), page("A"));
    assert_eq!(policy.reference_bit(&page("B")), Some(false));
    assert_eq!(policy.reference_bit(&page("C")), Some(false));
    assert_eq!(policy.tracked(), vec![page("B"), page("C")]);
}

#[test]
fn test_touch_sets_bit_without_moving() {
    let mut policy = tracked(&["A", "B", "C"]);
    policy.select_victim().unwrap();
    policy.touch(&page("C")).unwrap();

    assert_eq!(policy.reference_bit(&page("C")), Some(true));
    assert_eq!(policy.tracked(), vec![page("B"), page("C")]);
}

#[test]
fn test_referenced_entry_gets_second_chance() {
    let mut policy = tracked(&["A", "B", "C"]);
    // Leaves B and C with cleared bits.
    assert_eq!(policy.select_victim().unwrap(), page("A"));

    policy.track(page("D")).unwrap();
    policy.touch(&page("B")).unwrap();

    // B is under the hand but referenced, so C goes instead.
    assert_eq!(policy.select_victim().unwrap(), page("C"));
    assert_eq!(policy.reference_bit(&page("B")), Some(false));
    assert_eq!(policy.tracked(), vec![page("D"), page("B")]);
}

#[test]
fn test_unreferenced_entry_under_hand_is_taken_immediately() {
    let mut policy = tracked(&["A", "B", "C"]);
    assert_eq!(policy.select_victim().unwrap(), page("A"));

    // B is under the hand with a clear bit.
    assert_eq!(policy.select_victim().unwrap(), page("B"));
    assert_eq!(policy.tracked(), vec![page("C")]);
}

#[test]
fn test_single_resident_referenced() {
    let mut policy = tracked(&["A"]);
    policy.touch(&page("A")).unwrap();

    assert_eq!(policy.select_victim().unwrap(), page("A"));
    assert!(policy.is_empty());
}

#[test]
fn test_all_referenced_again_falls_to_oldest_in_ring() {
    let mut policy = tracked(&["A", "B", "C"]);
    assert_eq!(policy.select_victim().unwrap(), page("A"));
    policy.track(page("D")).unwrap();
    for id in ["B", "C", "D"] {
        policy.touch(&page(id)).unwrap();
    }

    assert_eq!(policy.select_victim().unwrap(), page("B"));
    assert_eq!(policy.tracked(), vec![page("C"), page("D")]);
}
