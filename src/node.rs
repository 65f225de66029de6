//! The node representation shared by every algorithm in the crate.

use std::fmt;

use crate::compare::same_tree;

/// An owning child slot. `None` is an absent subtree.
pub type Link<K> = Option<Box<Node<K>>>;

/// One vertex of a binary tree. A `Node` exclusively owns both of its
/// children, so a tree can never contain sharing or cycles.
///
/// Fields are public so that tests and demos can assemble trees that are
/// *not* valid BSTs (see [`build_sample_tree`]). Trees grown only through
/// [`insert`][crate::insert] keep the BST ordering.
pub struct Node<K> {
    /// The key stored at this node.
    pub key: K,
    /// The left subtree.
    pub left: Link<K>,
    /// The right subtree.
    pub right: Link<K>,
}

impl<K> Node<K> {
    /// Constructs a `Node` with the given `key` and no children.
    pub fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Allocates a node holding `key` with both children absent.
///
/// # Examples
///
/// ```
/// use bst_algos::new_node;
///
/// let node = new_node(7);
/// assert_eq!(node.key, 7);
/// assert!(node.is_leaf());
/// ```
pub fn new_node<K>(key: K) -> Box<Node<K>> {
    Box::new(Node::new(key))
}

/// Builds the fixed three node tree
///
/// ```text
///     2
///    / \
///   5   3
/// ```
///
/// This is deliberately not a BST. It exists to exercise shape and traversal
/// algorithms independently of ordering.
pub fn build_sample_tree() -> Box<Node<i64>> {
    let mut root = new_node(2);
    root.left = Some(new_node(5));
    root.right = Some(new_node(3));
    root
}

impl<K> Drop for Node<K> {
    // The default drop glue recurses once per level which overflows the stack on long chains.
    // Detach every descendant onto the heap first so each `Box` is dropped childless.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Clone for Node<K>
where
    K: Clone,
{
    /// Deep copies the subtree rooted at `self` without recursion.
    ///
    /// Nodes are numbered breadth first so every child has a larger index
    /// than its parent. Copies are then assembled from the highest index
    /// down, at which point both children of a node are already built.
    fn clone(&self) -> Self {
        let mut order: Vec<&Node<K>> = vec![self];
        let mut children: Vec<(Option<usize>, Option<usize>)> = Vec::new();
        let mut i = 0;
        while i < order.len() {
            let node = order[i];
            let left = node.left.as_deref().map(|left| {
                order.push(left);
                order.len() - 1
            });
            let right = node.right.as_deref().map(|right| {
                order.push(right);
                order.len() - 1
            });
            children.push((left, right));
            i += 1;
        }

        let mut copies: Vec<Link<K>> = Vec::with_capacity(order.len());
        copies.resize_with(order.len(), || None);
        let take =
            |copies: &mut Vec<Link<K>>, idx: Option<usize>| idx.and_then(|i| copies[i].take());

        for idx in (1..order.len()).rev() {
            let (left, right) = children[idx];
            let mut copy = Node::new(order[idx].key.clone());
            copy.left = take(&mut copies, left);
            copy.right = take(&mut copies, right);
            copies[idx] = Some(Box::new(copy));
        }

        let (left, right) = children[0];
        let mut root = Node::new(self.key.clone());
        root.left = take(&mut copies, left);
        root.right = take(&mut copies, right);
        root
    }
}

impl<K> PartialEq for Node<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        same_tree(Some(self), Some(other))
    }
}

impl<K> Eq for Node<K> where K: Eq {}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    // TODO stack based Debug
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
