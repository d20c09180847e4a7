use ordered_tree::{CountPolicy, OrderedTree, Traversal};

use std::collections::{BTreeSet, HashSet};

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: OrderedTree<i8> = xs.iter().copied().collect();
    let mut expected: BTreeSet<i8> = xs.iter().copied().collect();

    for delete in &deletes {
        // Only the first delete of a value finds it.
        if tree.delete(delete).is_ok() != expected.remove(delete) {
            return false;
        }
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && tree.iter().eq(expected.iter())
        && tree.len() == expected.len()
}

#[quickcheck]
fn traversals_visit_every_value_once(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<i16> = xs.iter().copied().collect();
    let expected: BTreeSet<i16> = xs.into_iter().collect();

    [Traversal::InOrder, Traversal::PreOrder, Traversal::PostOrder]
        .into_iter()
        .all(|order| {
            let values = tree.values(order);
            values.len() == expected.len()
                && values.iter().copied().collect::<BTreeSet<_>>()
                    == expected.iter().collect::<BTreeSet<_>>()
        })
}

#[quickcheck]
fn pre_order_rebuilds_the_same_tree(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<i16> = xs.into_iter().collect();
    let rebuilt: OrderedTree<i16> = tree
        .values(Traversal::PreOrder)
        .into_iter()
        .copied()
        .collect();

    rebuilt.values(Traversal::PreOrder) == tree.values(Traversal::PreOrder)
        && rebuilt.height() == tree.height()
}

#[quickcheck]
fn per_call_count_tracks_calls(xs: Vec<u8>, deletes: Vec<u8>) -> bool {
    let mut tree = OrderedTree::new().with_count_policy(CountPolicy::PerCall);
    tree.extend(xs.iter().copied());
    for x in &deletes {
        let _ = tree.delete(x);
    }

    // Every call moved the count by one, and it stopped at zero.
    tree.len() == xs.len().saturating_sub(deletes.len())
}
