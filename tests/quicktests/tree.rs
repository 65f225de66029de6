use bst_algos::{count_trees, count_trees_with, same_tree, CountStrategy, Tree};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::{nth_key_mut, AnyTree, Shape};

#[quickcheck]
fn size_is_children_plus_one(tree: AnyTree) -> bool {
    let tree = tree.0;
    match tree.root() {
        None => tree.size() == 0,
        Some(root) => {
            let left: usize = bst_algos::size(root.left.as_deref());
            let right: usize = bst_algos::size(root.right.as_deref());
            tree.size() == left + 1 + right
        }
    }
}

#[quickcheck]
fn depth_is_positive_iff_present(tree: AnyTree) -> bool {
    let tree = tree.0;
    (tree.max_depth() >= 1) == !tree.is_empty() && tree.max_depth() <= tree.size()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    xs.iter().all(|x| tree.lookup(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.lookup(x))
}

#[quickcheck]
fn inserted_trees_are_bsts(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.into_iter().collect();
    tree.is_bst() && tree.is_bst_efficient()
}

#[quickcheck]
fn in_order_of_inserted_tree_is_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort();

    tree.in_order().copied().collect::<Vec<_>>() == sorted
}

#[quickcheck]
fn validity_checks_agree(shape: Shape) -> bool {
    let tree = shape.build();
    tree.is_bst() == tree.is_bst_efficient()
}

#[quickcheck]
fn mirror_twice_is_identity(tree: AnyTree) -> bool {
    let original = tree.0;
    let mut tree = original.clone();
    tree.mirror();
    let (size, depth) = (tree.size(), tree.max_depth());
    tree.mirror();

    tree == original && size == original.size() && depth == original.max_depth()
}

#[quickcheck]
fn copies_are_same_tree(tree: AnyTree, n: usize) -> TestResult {
    let original = tree.0;
    let mut copy = original.clone();
    if !same_tree(original.root(), copy.root()) {
        return TestResult::failed();
    }

    let size = copy.size();
    if size == 0 {
        return TestResult::discard();
    }
    if let Some(key) = nth_key_mut(&mut copy, n % size) {
        *key = key.wrapping_add(1);
    }

    TestResult::from_bool(!same_tree(original.root(), copy.root()) && original != copy)
}

#[quickcheck]
fn double_tree_doubles_size(tree: AnyTree) -> bool {
    let mut tree = tree.0;
    let size = tree.size();
    let depth = tree.max_depth();
    let right_spine = right_spine_len(&tree);
    tree.double_tree();

    tree.size() == 2 * size
        && right_spine_len(&tree) == right_spine
        && (size == 0 || tree.max_depth() > depth)
}

#[quickcheck]
fn paths_end_at_leaves(tree: AnyTree) -> bool {
    let tree = tree.0;
    let paths: Vec<Vec<i8>> = tree.paths().collect();

    paths.len() == count_leaves(&tree)
        && paths.iter().all(|path| path.first() == tree.root().map(|n| &n.key))
        && paths.iter().map(Vec::len).max().unwrap_or(0) == tree.max_depth()
}

#[quickcheck]
fn count_strategies_agree(n: u8) -> bool {
    let n = usize::from(n % 10);
    let naive = count_trees(n);
    count_trees_with(n, CountStrategy::Naive) == Ok(naive)
        && count_trees_with(n, CountStrategy::Memoized) == Ok(naive)
}

fn right_spine_len(tree: &Tree<i8>) -> usize {
    let mut len = 0;
    let mut current = tree.root();
    while let Some(node) = current {
        len += 1;
        current = node.right.as_deref();
    }
    len
}

fn count_leaves(tree: &Tree<i8>) -> usize {
    let mut stack: Vec<_> = tree.root().into_iter().collect();
    let mut leaves = 0;
    while let Some(node) = stack.pop() {
        if node.is_leaf() {
            leaves += 1;
        }
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }
    leaves
}
