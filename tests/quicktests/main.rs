mod tree;

use bst_algos::{new_node, Link, Tree};
use quickcheck::{Arbitrary, Gen};

/// A binary tree of arbitrary shape. Unlike trees built with `insert` these
/// are usually *not* BSTs, which is what the validity checks need to see.
#[derive(Clone, Debug)]
pub(crate) struct AnyTree(pub(crate) Tree<i8>);

impl Arbitrary for AnyTree {
    /// Drops each key into the first empty slot of a random walk from the root.
    fn arbitrary(g: &mut Gen) -> Self {
        let keys: Vec<i8> = Arbitrary::arbitrary(g);
        let mut root: Link<i8> = None;
        for key in keys {
            let mut slot = &mut root;
            while let Some(node) = slot {
                slot = if bool::arbitrary(g) {
                    &mut node.left
                } else {
                    &mut node.right
                };
            }
            *slot = Some(new_node(key));
        }

        AnyTree(root.map(Tree::from).unwrap_or_default())
    }
}

/// An enum for the various shapes of tree the validity checks are compared on.
#[derive(Clone, Debug)]
pub(crate) enum Shape {
    /// Keys inserted in the given order. Always a BST.
    Inserted(Vec<i8>),
    /// A BST with a single key overwritten. Sometimes still a BST.
    Corrupted(Vec<i8>, usize, i8),
    /// Any shape at all.
    Any(AnyTree),
}

impl Shape {
    pub(crate) fn build(&self) -> Tree<i8> {
        match self {
            Shape::Inserted(keys) => keys.iter().copied().collect(),
            Shape::Corrupted(keys, index, key) => {
                let mut tree: Tree<i8> = keys.iter().copied().collect();
                let size = tree.size();
                if size > 0 {
                    if let Some(slot) = nth_key_mut(&mut tree, index % size) {
                        *slot = *key;
                    }
                }
                tree
            }
            Shape::Any(tree) => tree.0.clone(),
        }
    }
}

impl Arbitrary for Shape {
    /// Tells quickcheck how to randomly choose a shape
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Shape::Inserted(Vec::arbitrary(g)),
            1 => Shape::Corrupted(Vec::arbitrary(g), usize::arbitrary(g), i8::arbitrary(g)),
            2 => Shape::Any(AnyTree::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// The key of the `n`th node in pre-order, if the tree has that many nodes.
pub(crate) fn nth_key_mut(tree: &mut Tree<i8>, n: usize) -> Option<&mut i8> {
    let mut stack: Vec<_> = tree.root_mut().into_iter().collect();
    let mut seen = 0;
    while let Some(node) = stack.pop() {
        if seen == n {
            return Some(&mut node.key);
        }
        seen += 1;
        stack.extend(node.right.as_deref_mut());
        stack.extend(node.left.as_deref_mut());
    }

    None
}
