//! BST validity checks.
//!
//! Both checks enforce the same rule: every key in a node's left subtree is
//! `<=` the node's key and every key in its right subtree is strictly `>`.
//!
//! This is a separate contract from [`insert`][crate::insert], which sends
//! ties left. Trees grown by `insert` always pass, but a tree assembled by
//! hand with an equal key in a right subtree is rejected.

use tracing::debug;

use crate::key::Key;
use crate::node::Node;
use crate::query::{max_value, min_value};

/// Returns `true` if the tree is a binary search tree.
///
/// At every node the largest key of the left subtree must be `<=` the
/// node's key and the smallest key of the right subtree must be `>` it, and
/// both subtrees must themselves be BSTs. The extreme keys are found by
/// walking the subtree's outer spine, which re-scans the same nodes for every
/// ancestor, so this costs `O(n^2)` in the worst case. See
/// [`is_bst_efficient`] for a linear version.
///
/// # Examples
///
/// ```
/// use bst_algos::{build_sample_tree, is_bst};
///
/// assert!(!is_bst(Some(&build_sample_tree())));
/// assert!(is_bst::<i64>(None));
/// ```
pub fn is_bst<K>(root: Option<&Node<K>>) -> bool
where
    K: Ord,
{
    let mut stack: Vec<&Node<K>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        if let Some(left) = node.left.as_deref() {
            if *max_value(left) > node.key {
                debug!("left subtree maximum exceeds its parent");
                return false;
            }
            stack.push(left);
        }
        if let Some(right) = node.right.as_deref() {
            if *min_value(right) <= node.key {
                debug!("right subtree minimum doesn't exceed its parent");
                return false;
            }
            stack.push(right);
        }
    }

    true
}

/// Returns `true` if the tree is a binary search tree whose keys all lie in
/// `min..=max`.
///
/// Each node only checks its own key against bounds handed down by its
/// ancestors. Descending left tightens the upper bound to the node's key and
/// descending right tightens the lower bound to the key's successor, so the
/// whole check is `O(n)`. If the key has no successor, i.e. it is
/// [`Key::MAX`], the right subtree must be empty.
///
/// Called with `K::MIN` and `K::MAX` this agrees with [`is_bst`] on every
/// tree.
///
/// # Examples
///
/// ```
/// use bst_algos::{insert, is_bst_efficient};
///
/// let mut root = insert(None, 5);
/// for key in [3, 8, 1, 4] {
///     root = insert(Some(root), key);
/// }
///
/// assert!(is_bst_efficient(Some(&root), i32::MIN, i32::MAX));
/// // 8 is out of range.
/// assert!(!is_bst_efficient(Some(&root), 0, 7));
/// ```
pub fn is_bst_efficient<K>(root: Option<&Node<K>>, min: K, max: K) -> bool
where
    K: Key,
{
    let mut stack: Vec<(&Node<K>, K, K)> = root.map(|n| (n, min, max)).into_iter().collect();
    while let Some((node, min, max)) = stack.pop() {
        if node.key < min || node.key > max {
            debug!(key = ?node.key, ?min, ?max, "key outside of its bounds");
            return false;
        }

        if let Some(left) = node.left.as_deref() {
            stack.push((left, min, node.key));
        }
        if let Some(right) = node.right.as_deref() {
            match node.key.successor() {
                Some(lower) => stack.push((right, lower, max)),
                None => {
                    debug!(key = ?node.key, "right child below the largest key");
                    return false;
                }
            }
        }
    }

    true
}
