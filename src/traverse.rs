//! Lazy traversals.
//!
//! Each iterator owns an explicit stack instead of recursing, so walking a
//! skewed tree costs heap memory proportional to its depth and no call stack.

use std::iter::FusedIterator;

use crate::node::Node;

/// Returns an iterator over every root-to-leaf path of the tree.
///
/// Each item is the sequence of keys from the root down to one leaf. Leaves
/// are reached depth first, left before right. An absent tree has no paths.
///
/// # Examples
///
/// ```
/// use bst_algos::{insert, print_paths};
///
/// let mut root = insert(None, 5);
/// for key in [3, 8, 1, 4] {
///     root = insert(Some(root), key);
/// }
///
/// let paths: Vec<Vec<i32>> = print_paths(Some(&root)).collect();
/// assert_eq!(paths, vec![vec![5, 3, 1], vec![5, 3, 4], vec![5, 8]]);
/// ```
pub fn print_paths<K>(root: Option<&Node<K>>) -> Paths<'_, K>
where
    K: Clone,
{
    Paths {
        stack: root.map(|n| (n, 0)).into_iter().collect(),
        path: Vec::new(),
    }
}

/// Iterator returned by [`print_paths`].
///
/// A single path buffer is shared by the whole walk. Before a node's key is
/// pushed the buffer is truncated back to the node's depth, discarding the
/// tail of the previously yielded path.
pub struct Paths<'a, K> {
    /// Nodes still to visit with the number of ancestors above each.
    stack: Vec<(&'a Node<K>, usize)>,
    path: Vec<K>,
}

impl<'a, K> Iterator for Paths<'a, K>
where
    K: Clone,
{
    type Item = Vec<K>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth)) = self.stack.pop() {
            self.path.truncate(depth);
            self.path.push(node.key.clone());

            if node.is_leaf() {
                return Some(self.path.clone());
            }

            // Right is pushed first so the left subtree's leaves come out first.
            self.stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
            self.stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
        }

        None
    }
}

impl<'a, K> FusedIterator for Paths<'a, K> where K: Clone {}

/// Returns an iterator over the keys in in-order sequence: left subtree,
/// node, right subtree. For a BST this is sorted order.
///
/// # Examples
///
/// ```
/// use bst_algos::{in_order, insert};
///
/// let mut root = insert(None, 4);
/// for key in [2, 5, 1, 3] {
///     root = insert(Some(root), key);
/// }
///
/// let keys: Vec<_> = in_order(Some(&root)).copied().collect();
/// assert_eq!(keys, vec![1, 2, 3, 4, 5]);
/// ```
pub fn in_order<K>(root: Option<&Node<K>>) -> InOrder<'_, K> {
    let mut iter = InOrder { stack: Vec::new() };
    iter.push_left_spine(root);
    iter
}

/// Iterator returned by [`in_order`].
pub struct InOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

impl<'a, K> FusedIterator for InOrder<'a, K> {}

/// Returns an iterator over the keys in post-order ("bottom-up") sequence:
/// left subtree, right subtree, then the node itself.
///
/// # Examples
///
/// ```
/// use bst_algos::{build_sample_tree, post_order};
///
/// let root = build_sample_tree();
/// let keys: Vec<_> = post_order(Some(&root)).copied().collect();
/// assert_eq!(keys, vec![5, 3, 2]);
/// ```
pub fn post_order<K>(root: Option<&Node<K>>) -> PostOrder<'_, K> {
    PostOrder {
        stack: root.map(|n| (n, false)).into_iter().collect(),
    }
}

/// Iterator returned by [`post_order`].
pub struct PostOrder<'a, K> {
    /// Each node is pushed twice: once unexpanded, and once more beneath its
    /// children when expanded. It is yielded on the second pop.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.key);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }

        None
    }
}

impl<'a, K> FusedIterator for PostOrder<'a, K> {}
