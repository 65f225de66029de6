//! In-place structural transforms.
//!
//! Neither transform preserves the BST ordering in general.

use tracing::trace;

use crate::node::{new_node, Node};

/// Changes a tree so that the roles of the left and right children are
/// swapped at every node.
///
/// So the tree...
///
/// ```text
///        4
///       / \
///      2   5
///     / \
///    1   3
/// ```
///
/// is changed to...
///
/// ```text
///        4
///       / \
///      5   2
///         / \
///        3   1
/// ```
///
/// Every node is swapped exactly once and no swap depends on another, so the
/// nodes are visited from an explicit stack rather than strictly bottom-up.
/// Size and depth are unchanged.
pub fn mirror<K>(root: Option<&mut Node<K>>) {
    let mut stack: Vec<&mut Node<K>> = root.into_iter().collect();
    let mut swapped = 0usize;
    while let Some(node) = stack.pop() {
        std::mem::swap(&mut node.left, &mut node.right);
        swapped += 1;
        stack.extend(node.left.as_deref_mut());
        stack.extend(node.right.as_deref_mut());
    }
    trace!(swapped, "mirrored tree");
}

/// For every node, creates a duplicate node with the same key and inserts
/// it as the original's left child. The duplicate adopts the original left
/// subtree.
///
/// So the tree...
///
/// ```text
///     2
///    / \
///   1   3
/// ```
///
/// is changed to...
///
/// ```text
///        2
///       / \
///      2   3
///     /   /
///    1   3
///   /
///  1
/// ```
///
/// Only original nodes are doubled: after a node gains its twin the walk
/// continues below the twin, in the adopted subtree. The size of the tree
/// exactly doubles.
pub fn double_tree<K>(root: Option<&mut Node<K>>)
where
    K: Clone,
{
    let mut stack: Vec<&mut Node<K>> = root.into_iter().collect();
    let mut doubled = 0usize;
    while let Some(node) = stack.pop() {
        let mut twin = new_node(node.key.clone());
        twin.left = node.left.take();
        node.left = Some(twin);
        doubled += 1;

        if let Some(twin) = node.left.as_deref_mut() {
            stack.extend(twin.left.as_deref_mut());
        }
        stack.extend(node.right.as_deref_mut());
    }
    trace!(doubled, "doubled tree");
}
