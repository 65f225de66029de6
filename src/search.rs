//! Binary search and insertion.
//!
//! Both walk a single root-to-leaf path with a loop, so they cost
//! `O(depth)` time and constant stack regardless of how skewed the tree is.

use std::cmp::Ordering;

use tracing::trace;

use crate::node::{new_node, Link, Node};

/// Returns `true` if a node with `target` as its key is found in the tree.
///
/// At each node the target is compared to the node's key: equal means found,
/// less goes left and greater goes right. Running out of tree means the key
/// isn't there. The result is only meaningful if `root` is a valid BST; this
/// function doesn't check that.
///
/// # Examples
///
/// ```
/// use bst_algos::{insert, lookup};
///
/// let mut root = insert(None, 5);
/// root = insert(Some(root), 3);
///
/// assert!(lookup(Some(&root), &3));
/// assert!(!lookup(Some(&root), &4));
/// assert!(!lookup(None, &4));
/// ```
pub fn lookup<K>(root: Option<&Node<K>>, target: &K) -> bool
where
    K: Ord,
{
    let mut current = root;
    while let Some(node) = current {
        current = match target.cmp(&node.key) {
            Ordering::Equal => return true,
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
        };
    }

    false
}

/// Inserts a new node holding `key` in the correct place in the tree and
/// returns the root, which the caller should rebind.
///
/// Ownership of the (possibly absent) subtree moves in and the root handle
/// moves back out. If `root` is `None` the returned root is the new node.
///
/// A key goes left when `key <= node.key` and right otherwise, so duplicates
/// always land in the left subtree. Note that [`is_bst`][crate::is_bst] uses a
/// different, strict-right rule; the two contracts are independent.
///
/// # Examples
///
/// ```
/// use bst_algos::{insert, size};
///
/// let mut root = insert(None, 2);
/// root = insert(Some(root), 2);
///
/// // The duplicate went left.
/// assert_eq!(root.left.as_ref().map(|n| n.key), Some(2));
/// assert!(root.right.is_none());
/// assert_eq!(size(Some(&root)), 2);
/// ```
pub fn insert<K>(root: Link<K>, key: K) -> Box<Node<K>>
where
    K: Ord,
{
    let Some(mut root) = root else {
        trace!(depth = 1, "inserted new root");
        return new_node(key);
    };

    let mut depth = 2;
    let mut slot = if key <= root.key {
        &mut root.left
    } else {
        &mut root.right
    };
    while let Some(node) = slot {
        slot = if key <= node.key {
            &mut node.left
        } else {
            &mut node.right
        };
        depth += 1;
    }
    *slot = Some(new_node(key));
    trace!(depth, "inserted key");

    root
}
