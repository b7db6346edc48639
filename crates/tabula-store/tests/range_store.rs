use std::collections::HashSet;

use pretty_assertions::assert_eq;
use tabula_model::{Coord, Range};
use tabula_store::{RangeStore, StoreError, TreeRangeStore};

fn range(a1: &str) -> Range {
    Range::from_a1(a1).unwrap()
}

fn coord(a1: &str) -> Coord {
    Coord::from_a1(a1).unwrap()
}

fn sorted(mut values: Vec<&str>) -> Vec<&str> {
    values.sort_unstable();
    values
}

#[test]
fn add_then_load_exact_and_stab() {
    let mut store = TreeRangeStore::new();
    store.add_value(range("A1:B2"), "x").unwrap();

    assert_eq!(store.load_exact(range("A1:B2")), vec!["x"]);
    assert_eq!(store.values_containing(coord("A1")), HashSet::from(["x"]));
    assert_eq!(store.values_containing(coord("B2")), HashSet::from(["x"]));
    assert_eq!(store.values_containing(coord("C3")), HashSet::new());
    assert_eq!(
        store.ranges_containing(coord("A2")),
        HashSet::from([range("A1:B2")])
    );
}

#[test]
fn every_contained_cell_sees_the_value() {
    let mut store = TreeRangeStore::new();
    let r = range("B2:D5");
    store.add_value(r, "v").unwrap();

    for cell in r.cells() {
        assert!(
            store.values_containing(cell).contains("v"),
            "missing at {cell}"
        );
    }
    for outside in ["A1", "B1", "A3", "E2", "D6", "E6"] {
        assert!(!r.contains(coord(outside)));
        assert_eq!(store.values_containing(coord(outside)), HashSet::new());
    }
}

#[test]
fn add_is_idempotent() {
    let mut store = TreeRangeStore::new();
    store.add_value(range("A1:B2"), "x").unwrap();
    store.add_value(range("A1:B2"), "x").unwrap();

    assert_eq!(store.load_exact(range("A1:B2")), vec!["x"]);
    assert_eq!(store.count(), 1);
}

#[test]
fn multiple_values_per_range() {
    // Scenario B: two values against the same exact range.
    let mut store = TreeRangeStore::new();
    store.add_value(range("A1:B2"), "x").unwrap();
    store.add_value(range("A1:B2"), "y").unwrap();

    let loaded = store.load_exact(range("A1:B2"));
    assert_eq!(loaded.len(), 2);
    assert_eq!(sorted(loaded.clone()), vec!["x", "y"]);
    assert_eq!(store.count(), 2);
}

#[test]
fn ranges_sharing_a_begin_corner_stay_distinct() {
    // Scenario C: same begin corner, different end corners.
    let mut store = TreeRangeStore::new();
    store.add_value(range("A1:C3"), "x").unwrap();
    store.add_value(range("A1:B2"), "y").unwrap();

    assert_eq!(store.load_exact(range("A1:C3")), vec!["x"]);
    assert_eq!(store.load_exact(range("A1:B2")), vec!["y"]);
    assert_eq!(
        store.values_containing(coord("C3")),
        HashSet::from(["x"]),
        "C3 is only inside A1:C3"
    );
    assert_eq!(
        store.values_containing(coord("B2")),
        HashSet::from(["x", "y"])
    );
}

#[test]
fn ranges_sharing_an_end_corner_stay_distinct() {
    let mut store = TreeRangeStore::new();
    store.add_value(range("A1:C3"), "x").unwrap();
    store.add_value(range("B2:C3"), "y").unwrap();

    assert_eq!(store.load_exact(range("A1:C3")), vec!["x"]);
    assert_eq!(store.load_exact(range("B2:C3")), vec!["y"]);
    assert_eq!(
        store.values_containing(coord("A1")),
        HashSet::from(["x"]),
        "A1 is only inside A1:C3"
    );
}

#[test]
fn remove_value_clears_range_and_count() {
    // Scenario D.
    let mut store = TreeRangeStore::new();
    let r = range("A1:B2");
    store.add_value(r, "x").unwrap();
    assert!(store.remove_value(r, "x").unwrap());

    assert_eq!(store.load_exact(r), Vec::<&str>::new());
    assert_eq!(store.count(), 0);
    for cell in r.cells() {
        assert_eq!(store.ranges_containing(cell), HashSet::new());
    }
}

#[test]
fn remove_value_of_absent_association_is_a_noop() {
    let mut store = TreeRangeStore::new();
    store.add_value(range("A1:B2"), "x").unwrap();

    assert!(!store.remove_value(range("A1:B2"), "y").unwrap());
    assert!(!store.remove_value(range("A1:C3"), "x").unwrap());
    assert_eq!(store.count(), 1);
}

#[test]
fn removing_one_value_keeps_the_others() {
    let mut store = TreeRangeStore::new();
    let r = range("A1:B2");
    store.add_value(r, "x").unwrap();
    store.add_value(r, "y").unwrap();

    assert!(store.remove_value(r, "x").unwrap());
    assert_eq!(store.load_exact(r), vec!["y"]);
    assert_eq!(store.values_containing(coord("A1")), HashSet::from(["y"]));
    assert_eq!(store.count(), 1);
}

#[test]
fn delete_removes_all_values_in_one_step() {
    // Scenario E.
    let mut store = TreeRangeStore::new();
    let r = range("A1:B2");
    store.add_value(r, "x").unwrap();
    store.add_value(r, "y").unwrap();

    store.delete(r).unwrap();
    assert_eq!(store.load_exact(r), Vec::<&str>::new());
    assert_eq!(store.count(), 0);
    assert_eq!(store.values_containing(coord("A1")), HashSet::new());
}

#[test]
fn delete_of_absent_range_is_a_noop() {
    let mut store = TreeRangeStore::new();
    store.add_value(range("A1:B2"), "x").unwrap();

    store.delete(range("A1:C3")).unwrap();
    assert_eq!(store.count(), 1);
}

#[test]
fn replace_swaps_only_when_old_value_present() {
    let mut store = TreeRangeStore::new();
    let r = range("A1:B2");
    store.add_value(r, "old").unwrap();

    assert!(!store.replace_value(r, "new", "missing").unwrap());
    assert_eq!(store.load_exact(r), vec!["old"]);

    assert!(store.replace_value(r, "new", "old").unwrap());
    assert_eq!(store.load_exact(r), vec!["new"]);
    assert_eq!(store.values_containing(coord("B1")), HashSet::from(["new"]));
    assert_eq!(store.count(), 1);
}

#[test]
fn replace_with_identical_value_is_a_noop() {
    let mut store = TreeRangeStore::new();
    let r = range("A1:B2");
    store.add_value(r, "x").unwrap();

    assert!(!store.replace_value(r, "x", "x").unwrap());
    assert_eq!(store.load_exact(r), vec!["x"]);
}

#[test]
fn overlapping_ranges_merge_their_values_at_shared_cells() {
    let mut store = TreeRangeStore::new();
    store.add_value(range("A1:C3"), "a").unwrap();
    store.add_value(range("B2:D4"), "b").unwrap();
    store.add_value(range("D4"), "c").unwrap();

    assert_eq!(
        store.values_containing(coord("B2")),
        HashSet::from(["a", "b"])
    );
    assert_eq!(
        store.values_containing(coord("C3")),
        HashSet::from(["a", "b"])
    );
    assert_eq!(
        store.values_containing(coord("D4")),
        HashSet::from(["b", "c"])
    );
    assert_eq!(store.values_containing(coord("A4")), HashSet::new());
    assert_eq!(
        store.ranges_containing(coord("D4")),
        HashSet::from([range("B2:D4"), range("D4")])
    );
}

#[test]
fn same_value_under_many_ranges_is_deduplicated_by_stab() {
    let mut store = TreeRangeStore::new();
    store.add_value(range("A1:C3"), "shared").unwrap();
    store.add_value(range("B2:D4"), "shared").unwrap();

    assert_eq!(store.count(), 2);
    assert_eq!(
        store.values_containing(coord("B2")),
        HashSet::from(["shared"])
    );
}

#[test]
fn many_ranges_sharing_one_corner() {
    // A corner shared as begin by some ranges and end by others.
    let mut store = TreeRangeStore::new();
    store.add_value(range("C3:E5"), "begin-here").unwrap();
    store.add_value(range("C3:C3"), "single").unwrap();
    store.add_value(range("A1:C3"), "end-here").unwrap();

    assert_eq!(
        store.values_containing(coord("C3")),
        HashSet::from(["begin-here", "single", "end-here"])
    );
    assert_eq!(store.load_exact(range("C3")), vec!["single"]);
    assert_eq!(store.count(), 3);
}

#[test]
fn query_results_are_snapshots() {
    let mut store = TreeRangeStore::new();
    store.add_value(range("A1:B2"), "x").unwrap();

    let loaded = store.load_exact(range("A1:B2"));
    let stabbed = store.values_containing(coord("A1"));
    store.delete(range("A1:B2")).unwrap();

    assert_eq!(loaded, vec!["x"]);
    assert_eq!(stabbed, HashSet::from(["x"]));
    assert_eq!(store.count(), 0);
}

#[test]
fn read_only_wrapper_serves_queries_and_rejects_mutation() {
    let mut store = TreeRangeStore::new();
    store.add_value(range("A1:B2"), "x").unwrap();

    let mut view = store.as_read_only();
    assert_eq!(view.load_exact(range("A1:B2")), vec!["x"]);
    assert_eq!(view.values_containing(coord("A1")), HashSet::from(["x"]));
    assert_eq!(view.count(), 1);

    assert_eq!(
        view.add_value(range("A1:B2"), "y"),
        Err(StoreError::ReadOnly)
    );
    assert_eq!(
        view.replace_value(range("A1:B2"), "y", "x"),
        Err(StoreError::ReadOnly)
    );
    assert_eq!(
        view.remove_value(range("A1:B2"), "x"),
        Err(StoreError::ReadOnly)
    );
    assert_eq!(view.delete(range("A1:B2")), Err(StoreError::ReadOnly));

    // Nothing changed underneath the view.
    assert_eq!(view.count(), 1);
    assert_eq!(view.load_exact(range("A1:B2")), vec!["x"]);
}
