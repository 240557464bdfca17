use ordtree::tree::{Comparable, Node};

use std::cmp::Ordering;
use std::collections::HashSet;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Wrapper giving quicktest keys the `Comparable` capability, ordered
/// the same way as the underlying `i8`.
#[derive(Copy, Clone, Debug)]
struct Key(i8);

impl Comparable for Key {
    fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and lookups the tree and the set agree on membership.
fn do_ops(ops: &[Op<i8>], tree: &mut Node<Key>, set: &mut HashSet<i8>) {
    for op in ops {
        match op {
            Op::Insert(k) => {
                // The tree rejects duplicates, the set reports them.
                assert_eq!(tree.add(Key(*k)).is_ok(), set.insert(*k));
            }
            Op::Find(k) => {
                assert_eq!(tree.find(&Key(*k)).is_some(), set.contains(k));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(root: i8, ops: Vec<Op<i8>>) -> bool {
    let mut tree = Node::new(Key(root));
    let mut set = HashSet::new();
    set.insert(root);

    do_ops(&ops, &mut tree, &mut set);
    tree.size() == set.len() && set.iter().all(|k| tree.find(&Key(*k)).is_some())
}

#[quickcheck]
fn contains(root: i8, xs: Vec<i8>) -> bool {
    let mut tree = Node::new(Key(root));
    for x in &xs {
        let _ = tree.add(Key(*x));
    }

    xs.iter()
        .chain(std::iter::once(&root))
        .all(|x| tree.find(&Key(*x)).map(|found| found.0) == Some(*x))
}

#[quickcheck]
fn contains_not(root: i8, xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Node::new(Key(root));
    for x in &xs {
        let _ = tree.add(Key(*x));
    }
    let mut added: HashSet<_> = xs.into_iter().collect();
    added.insert(root);
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(&Key(*x)).is_none())
}

#[quickcheck]
fn duplicates_rejected_without_change(root: i8, xs: Vec<i8>) -> bool {
    let mut tree = Node::new(Key(root));
    for x in &xs {
        let _ = tree.add(Key(*x));
    }
    let size = tree.size();
    let height = tree.height();

    // Everything is in the tree by now, so every re-insert must fail
    // and hand the value back.
    let all_rejected = std::iter::once(&root)
        .chain(xs.iter())
        .all(|x| match tree.add(Key(*x)) {
            Err(err) => err.into_value().0 == *x,
            Ok(()) => false,
        });

    all_rejected && tree.size() == size && tree.height() == height
}

#[quickcheck]
fn ordering_invariant(root: i8, xs: Vec<i8>) -> bool {
    let mut tree = Node::new(Key(root));
    for x in xs {
        let _ = tree.add(Key(x));
    }

    invariant_holds(&tree)
}

/// Checks, through the public accessors, that a node compares `Less`
/// against everything in its left subtree and `Greater` against
/// everything in its right subtree.
fn invariant_holds(node: &Node<Key>) -> bool {
    let left_ok = node.left().map_or(true, |left| {
        subtree_all(left, &|v| node.value().compare(v) == Ordering::Less) && invariant_holds(left)
    });
    let right_ok = node.right().map_or(true, |right| {
        subtree_all(right, &|v| node.value().compare(v) == Ordering::Greater)
            && invariant_holds(right)
    });

    left_ok && right_ok
}

fn subtree_all(node: &Node<Key>, pred: &dyn Fn(&Key) -> bool) -> bool {
    pred(node.value())
        && node.left().map_or(true, |left| subtree_all(left, pred))
        && node.right().map_or(true, |right| subtree_all(right, pred))
}
