use inorder_bst::Tree;
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and copies we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                if bst.insert(x.clone()) != set.insert(x.clone()) {
                    return false;
                }
            }
            Op::Reclone => {
                let copy = bst.clone();
                *bst = copy;
            }
            Op::Iter => {
                if !bst.iter().eq(set.iter()) {
                    return false;
                }
            }
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(first: i8, ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new(first);
    let mut set = BTreeSet::from([first]);

    do_ops(&ops, &mut tree, &mut set) && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(first: i8, xs: Vec<i8>) -> bool {
    let mut tree = Tree::new(first);
    tree.extend(xs.iter().copied());

    xs.iter().all(|x| tree.contains(x)) && tree.contains(&first)
}

#[quickcheck]
fn contains_not(first: i8, xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new(first);
    tree.extend(xs.iter().copied());

    let mut added: BTreeSet<_> = xs.into_iter().collect();
    added.insert(first);
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn clone_is_unaffected_by_later_inserts(first: i8, before: Vec<i8>, after: Vec<i8>) -> bool {
    let mut tree = Tree::new(first);
    tree.extend(before);
    let copy = tree.clone();
    let expected = copy.to_string();

    tree.extend(after);

    copy.to_string() == expected && copy.begin() != tree.begin()
}

#[quickcheck]
fn clone_from_matches_source(first: i8, xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let mut source = Tree::new(first);
    source.extend(xs);
    let mut target = Tree::new(first.wrapping_add(1));
    target.extend(ys);

    target.clone_from(&source);
    target == source && target.to_string() == source.to_string()
}

#[quickcheck]
fn min_max_match_iteration(first: i8, xs: Vec<i8>) -> bool {
    let mut tree = Tree::new(first);
    tree.extend(xs);

    tree.iter().next() == Some(tree.min()) && tree.iter().last() == Some(tree.max())
}

#[test]
fn smoke_test() {
    let mut sample = Tree::new(5);
    sample.insert(3);
    let sample2 = sample.clone();
    sample.insert(7);

    assert_eq!(sample.to_string(), "3 5 7");
    assert_eq!(sample2.to_string(), "3 5");
    assert_eq!(sample.iter().copied().collect::<Vec<_>>(), [3, 5, 7]);
}

#[test]
fn duplicate_root_is_rejected() {
    let mut tree = Tree::new(5);
    assert!(!tree.insert(5));
    assert_eq!(tree.iter().collect::<Vec<_>>(), [&5]);
}
