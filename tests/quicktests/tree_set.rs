use treeset::{OrderedSet, TreeSet};

use quickcheck_macros::quickcheck;
use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree set and a model set, checking that
/// every operation reports the same result on both.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same elements in both.
fn do_ops<T, S, M>(ops: &[Op<T>], set: &mut S, model: &mut M) -> bool
where
    T: Ord + Clone,
    S: OrderedSet<T>,
    M: OrderedSet<T>,
{
    ops.iter().all(|op| match op {
        Op::Add(x) => set.add(x.clone()) == model.add(x.clone()),
        Op::Remove(x) => set.remove(x) == model.remove(x),
        Op::Subset(min, max) => set.subset(min, max) == model.subset(min, max),
    })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = TreeSet::new();
    let mut model = BTreeSet::new();

    do_ops(&ops, &mut set, &mut model)
        && set.len() == model.len()
        && OrderedSet::to_vec_in_order(&set) == OrderedSet::to_vec_in_order(&model)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let set: TreeSet<_> = xs.iter().copied().collect();
    let distinct: HashSet<_> = xs.iter().collect();

    set.len() == distinct.len() && xs.iter().all(|x| set.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let set: TreeSet<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !set.contains(x))
}

#[quickcheck]
fn add_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut set: TreeSet<_> = xs.into_iter().filter(|y| *y != x).collect();
    let before = set.len();

    set.add(x) && !set.add(x) && set.len() == before + 1
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut set: TreeSet<_> = xs.into_iter().collect();
    for delete in &deletes {
        set.remove(delete);
    }

    let elements = set.to_vec_in_order();
    elements.len() == set.len() && elements.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn traversals_cover_every_element(xs: Vec<i8>) -> bool {
    fn sorted<T: Ord>(mut elements: Vec<T>) -> Vec<T> {
        elements.sort();
        elements
    }

    let set: TreeSet<_> = xs.into_iter().collect();

    sorted(set.to_vec_pre_order()) == set.to_vec_in_order()
        && sorted(set.to_vec_post_order()) == set.to_vec_in_order()
}

#[quickcheck]
fn pre_order_rebuilds_same_shape(xs: Vec<i8>) -> bool {
    let set: TreeSet<_> = xs.into_iter().collect();
    let rebuilt: TreeSet<_> = set.to_vec_pre_order().into_iter().copied().collect();

    rebuilt.to_vec_pre_order() == set.to_vec_pre_order()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut set: TreeSet<_> = xs.iter().copied().collect();
    for delete in &deletes {
        let before = set.len();
        let was_present = set.contains(delete);
        let removed = set.remove(delete);
        if removed != was_present || set.len() + removed as usize != before {
            return false;
        }
    }

    let still_present: Vec<_> = xs.iter().filter(|x| !deletes.contains(x)).collect();

    deletes.iter().all(|x| !set.contains(x)) && still_present.iter().all(|x| set.contains(x))
}

#[quickcheck]
fn removing_everything_empties(xs: Vec<i8>, seed: Vec<u8>) -> bool {
    let mut set: TreeSet<_> = xs.iter().copied().collect();

    // Remove in an order unrelated to insertion.
    let keys = seed.iter().copied().chain(std::iter::repeat(0));
    let mut order: Vec<(u8, i8)> = keys.zip(xs.iter().copied()).collect();
    order.sort();
    for (_, x) in order {
        set.remove(&x);
    }

    set.is_empty() && set.len() == 0 && set.to_vec_in_order().is_empty()
}

#[quickcheck]
fn subset_matches_filter(xs: Vec<i8>, min: i8, max: i8) -> bool {
    let set: TreeSet<_> = xs.into_iter().collect();
    let expected: Vec<_> = set
        .to_vec_in_order()
        .into_iter()
        .filter(|x| min <= **x && **x < max)
        .collect();

    set.subset(&min, &max) == expected
}
