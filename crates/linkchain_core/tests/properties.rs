//! Property-based tests for chain growth and indexing.
//!
//! These check the shape guarantees of the container over random sizes:
//! 1. Construction: `filled`/`filled_rectangular` produce exactly the requested shape
//! 2. Growth: `append`/`append_2d` grow by exactly one in the expected place
//! 3. Rejection: out-of-bounds requests fail without touching the chain

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use linkchain_core::{Axis, Chain, ChainError};
use proptest::prelude::*;

/// Walk the links and return (count, value at tail).
fn walk(chain: &Chain<i32>) -> (usize, Option<i32>) {
    let mut count = 0;
    let mut last = None;
    let mut cursor = chain.head();
    while let Some(node) = cursor {
        count += 1;
        last = node.value().copied();
        cursor = node.next();
    }
    (count, last)
}

proptest! {
    #[test]
    fn filled_has_requested_length(n in 0usize..200, pad in any::<i32>()) {
        let chain = Chain::filled(n, pad);
        prop_assert_eq!(chain.len(), n);
        for i in 0..n {
            prop_assert_eq!(chain.index(i).unwrap().value(), Some(&pad));
        }
        prop_assert_eq!(walk(&chain).0, n);
    }

    #[test]
    fn filled_rectangular_has_requested_shape(r in 0usize..20, c in 0usize..20, pad in any::<i32>()) {
        let table = Chain::filled_rectangular(r, c, pad);
        prop_assert_eq!(table.len(), r);
        for k in 0..r {
            prop_assert_eq!(table.row_size(k).unwrap(), c);
        }
    }

    #[test]
    fn append_grows_by_one_at_the_end(
        initial in proptest::collection::vec(any::<i32>(), 0..50),
        v in any::<i32>(),
    ) {
        let mut chain: Chain<i32> = initial.iter().copied().collect();
        let s = chain.len();
        chain.append(v);
        prop_assert_eq!(chain.len(), s + 1);
        prop_assert_eq!(chain.index(s).unwrap().value(), Some(&v));
        prop_assert_eq!(chain.tail().unwrap().value(), Some(&v));
        prop_assert_eq!(walk(&chain), (s + 1, Some(v)));
    }

    #[test]
    fn append_2d_keep_dims_stays_rectangular(
        (r, row) in (1usize..12).prop_flat_map(|r| (Just(r), 0..r)),
        c in 0usize..12,
        v in any::<i32>(),
        pad in any::<i32>(),
    ) {
        let mut table = Chain::filled_rectangular(r, c, 0);
        table.append_2d(v, row, true, pad).unwrap();
        prop_assert_eq!(table.len(), r);
        for k in 0..r {
            prop_assert_eq!(table.row_size(k).unwrap(), c + 1);
            let expected = if k == row { v } else { pad };
            prop_assert_eq!(table.index_2d(k, c).unwrap().value(), Some(&expected));
        }
        prop_assert!(table.is_rectangular());
    }

    #[test]
    fn append_2d_jagged_grows_only_target(
        (r, row) in (1usize..12).prop_flat_map(|r| (Just(r), 0..r)),
        c in 0usize..12,
    ) {
        let mut table = Chain::filled_rectangular(r, c, 0);
        let before = table.row_sizes();
        table.append_2d(1, row, false, -1).unwrap();
        let after = table.row_sizes();
        prop_assert_eq!(after.len(), r);
        for (k, (a, b)) in after.iter().zip(&before).enumerate() {
            prop_assert_eq!(*a, *b + usize::from(k == row));
        }
    }

    #[test]
    fn out_of_bounds_is_rejected_without_damage(
        initial in proptest::collection::vec(any::<i32>(), 0..30),
        extra in 0usize..10,
    ) {
        let chain: Chain<i32> = initial.iter().copied().collect();
        let n = chain.len();
        let err = chain.index(n + extra).unwrap_err();
        prop_assert_eq!(err, ChainError::IndexOutOfBounds { axis: Axis::Position, index: n + extra, len: n });
        prop_assert_eq!(walk(&chain).0, n);
        prop_assert_eq!(chain.tail().and_then(|t| t.value().copied()), initial.last().copied());
    }

    #[test]
    fn out_of_bounds_2d_is_rejected_without_damage(
        r in 0usize..8,
        c in 0usize..8,
        di in 0usize..4,
        dj in 0usize..4,
    ) {
        let mut table = Chain::filled_rectangular(r, c, 3);
        let snapshot = table.clone();
        prop_assert!(table.index_2d(r + di, 0).unwrap_err().is_out_of_bounds());
        if r > 0 {
            prop_assert!(table.index_2d(0, c + dj).unwrap_err().is_out_of_bounds());
        }
        prop_assert!(table.append_2d(1, r + di, true, 0).is_err());
        prop_assert_eq!(&table, &snapshot);
    }
}

#[test]
fn scenario_three_by_two_grow_middle_row() {
    let mut table = Chain::filled_rectangular(3, 2, 0);
    table.append_2d(9, 1, true, -1).unwrap();

    let rows: Vec<String> = table
        .iter()
        .map(|row| row.map(ToString::to_string).unwrap_or_default())
        .collect();
    assert_eq!(rows, vec!["0 0 -1", "0 0 9", "0 0 -1"]);
    assert_eq!(table.len(), 3);
    assert_eq!(
        (0..3).map(|k| table.row_size(k).unwrap()).collect::<Vec<_>>(),
        vec![3, 3, 3]
    );
}

#[test]
fn scenario_append_one_two_three() {
    let mut chain = Chain::new();
    for x in [1, 2, 3] {
        chain.append(x);
    }
    assert_eq!(chain.len(), 3);
    let seen: Vec<i32> = (0..3)
        .map(|i| *chain.index(i).unwrap().value().unwrap())
        .collect();
    assert_eq!(seen, vec![1, 2, 3]);
    let tail = chain.tail().unwrap();
    assert!(tail.is_tail());
    assert_eq!(tail.value(), Some(&3));
}
