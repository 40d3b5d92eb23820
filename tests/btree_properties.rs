//! # B-Tree Structural Properties
//!
//! Property-style coverage of the tree engine: for arbitrary insertion
//! sequences (duplicates included), after every single insertion the tree
//! must satisfy all structural invariants and its in-order traversal must
//! equal the sorted multiset of everything inserted so far.
//!
//! Concrete scenarios pin down the classic degree-3 behavior: where the
//! root splits, what the sample sequence produces, and how reset behaves.

use treelab::BTree;

/// Insert keys one by one, checking every invariant and the in-order
/// traversal after each insertion.
fn insert_all_checked(degree: usize, keys: &[i64]) -> BTree {
    let mut tree = BTree::new(degree).unwrap();
    let mut inserted: Vec<i64> = Vec::new();

    for &key in keys {
        tree.insert(key).unwrap();
        inserted.push(key);

        tree.check_invariants().unwrap();

        let mut expected = inserted.clone();
        expected.sort_unstable();
        assert_eq!(
            tree.in_order().unwrap(),
            expected,
            "traversal mismatch after inserting {key}"
        );
        assert_eq!(tree.key_count().unwrap(), inserted.len());
    }
    tree
}

/// Deterministic pseudo-random sequence without external crates.
fn lcg_sequence(seed: u64, len: usize, modulus: i64) -> Vec<i64> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as i64 % modulus
        })
        .collect()
}

#[test]
fn single_insert_creates_a_leaf_root() {
    let tree = insert_all_checked(3, &[10]);
    let root = tree.node(tree.root().unwrap()).unwrap();
    assert_eq!(root.keys, vec![10]);
    assert!(root.is_leaf());
    assert_eq!(tree.height().unwrap(), 1);
}

#[test]
fn sample_sequence_produces_the_reference_tree() {
    let tree = insert_all_checked(3, &[10, 20, 5, 6, 12, 30, 7, 17]);

    assert_eq!(tree.height().unwrap(), 2);
    let root = tree.node(tree.root().unwrap()).unwrap();
    assert_eq!(root.keys.len(), 1, "order-3 root ends with exactly 1 key");
    assert_eq!(
        tree.in_order().unwrap(),
        vec![5, 6, 7, 10, 12, 17, 20, 30]
    );
}

#[test]
fn root_stays_within_bounds_through_six_sequential_inserts() {
    let mut tree = BTree::new(3).unwrap();
    for key in 1..=6 {
        tree.insert(key).unwrap();
        let root = tree.node(tree.root().unwrap()).unwrap();
        assert!(root.keys.len() <= 5, "root exceeded max_keys");
        tree.check_invariants().unwrap();
    }

    // The sixth key overflowed the root: two children plus a 1-key root.
    assert_eq!(tree.height().unwrap(), 2);
    let root = tree.node(tree.root().unwrap()).unwrap();
    assert_eq!(root.keys.len(), 1);
    assert_eq!(root.children.len(), 2);
}

#[test]
fn duplicate_keys_coexist() {
    let tree = insert_all_checked(3, &[5, 1, 5]);
    assert_eq!(tree.in_order().unwrap(), vec![1, 5, 5]);
    assert_eq!(tree.key_count().unwrap(), 3);
}

#[test]
fn reset_after_any_sequence_empties_the_tree() {
    let mut tree = insert_all_checked(3, &[10, 20, 5, 6, 12, 30, 7, 17]);
    tree.clear();

    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert_eq!(tree.in_order().unwrap(), Vec::<i64>::new());

    // Next insert behaves as the first-ever insertion.
    tree.insert(1).unwrap();
    assert_eq!(tree.height().unwrap(), 1);
    assert_eq!(tree.in_order().unwrap(), vec![1]);
}

#[test]
fn random_sequences_hold_invariants_at_every_degree() {
    for degree in 2..=4 {
        for seed in [1, 0xbeef, 0x5eed] {
            let keys = lcg_sequence(seed, 300, 100);
            insert_all_checked(degree, &keys);
        }
    }
}

#[test]
fn sorted_and_reversed_sequences_stay_balanced() {
    let ascending: Vec<i64> = (0..500).collect();
    let tree = insert_all_checked(3, &ascending);
    // 500 keys in a degree-3 tree: height is logarithmic, not a list.
    assert!(tree.height().unwrap() <= 6);

    let descending: Vec<i64> = (0..500).rev().collect();
    let tree = insert_all_checked(3, &descending);
    assert!(tree.height().unwrap() <= 6);
}

#[test]
fn all_equal_keys_still_form_a_valid_tree() {
    let keys = vec![7; 60];
    let tree = insert_all_checked(3, &keys);
    assert_eq!(tree.key_count().unwrap(), 60);
    assert!(tree.height().unwrap() >= 2);
}
