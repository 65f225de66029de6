//! An owning root handle with the crate's algorithms as methods.
//!
//! # Examples
//!
//! ```
//! use bst_algos::Tree;
//!
//! let mut tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
//!
//! assert!(tree.lookup(&4));
//! assert!(!tree.lookup(&9));
//! assert_eq!(tree.size(), 5);
//! assert_eq!(*tree.min_value(), 1);
//! assert_eq!(*tree.max_value(), 8);
//! assert!(tree.is_bst());
//!
//! tree.mirror();
//! assert!(!tree.is_bst());
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::compare::same_tree;
use crate::error::TreeError;
use crate::key::Key;
use crate::node::{new_node, Link, Node};
use crate::traverse::{in_order, post_order, print_paths, InOrder, Paths, PostOrder};
use crate::{query, search, transform, validate};

/// A binary tree owned through its (possibly absent) root.
///
/// Trees collected from an iterator, or grown with [`Tree::insert`], are
/// BSTs under the insertion rule: ties go left.
#[derive(Clone)]
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> From<Box<Node<K>>> for Tree<K> {
    fn from(root: Box<Node<K>>) -> Self {
        Self { root: Some(root) }
    }
}

impl<K> PartialEq for Tree<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        same_tree(self.root(), other.root())
    }
}

impl<K> Eq for Tree<K> where K: Eq {}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree from a heap-indexed level-order listing, mostly useful
    /// for writing down trees that aren't BSTs.
    ///
    /// Slot `0` is the root and the children of slot `i` are slots `2i + 1`
    /// and `2i + 2`. `None` marks an absent node. A key whose parent slot is
    /// `None` is reported as [`TreeError::OrphanedKey`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_algos::{build_sample_tree, Tree, TreeError};
    ///
    /// let tree = Tree::from_level_order(&[Some(2), Some(5), Some(3)]).unwrap();
    /// assert_eq!(tree, Tree::from(build_sample_tree()));
    ///
    /// let err = Tree::from_level_order(&[Some(2), None, Some(3), Some(1)]).unwrap_err();
    /// assert_eq!(err, TreeError::OrphanedKey { index: 3, parent: 1 });
    /// ```
    pub fn from_level_order(slots: &[Option<K>]) -> Result<Self, TreeError>
    where
        K: Clone,
    {
        for (index, slot) in slots.iter().enumerate().skip(1) {
            let parent = (index - 1) / 2;
            if slot.is_some() && slots[parent].is_none() {
                debug!(index, parent, "orphaned key in level-order listing");
                return Err(TreeError::OrphanedKey { index, parent });
            }
        }

        let mut built: Vec<Link<K>> = Vec::with_capacity(slots.len());
        built.resize_with(slots.len(), || None);
        for (index, slot) in slots.iter().enumerate().rev() {
            let Some(key) = slot else {
                continue;
            };
            let mut node = new_node(key.clone());
            node.left = built.get_mut(2 * index + 1).and_then(Option::take);
            node.right = built.get_mut(2 * index + 2).and_then(Option::take);
            built[index] = Some(node);
        }
        trace!(slots = slots.len(), "built tree from level order");

        Ok(Self {
            root: built.into_iter().next().flatten(),
        })
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// The root node, if any, for in-place edits.
    pub fn root_mut(&mut self) -> Option<&mut Node<K>> {
        self.root.as_deref_mut()
    }

    /// Gives up ownership of the root.
    pub fn into_root(self) -> Link<K> {
        self.root
    }

    /// Inserts `key` following the insertion rule of [`insert`][crate::insert]:
    /// keys `<=` a node go left.
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        self.root = Some(search::insert(self.root.take(), key));
    }

    /// See [`lookup`][crate::lookup].
    pub fn lookup(&self, target: &K) -> bool
    where
        K: Ord,
    {
        search::lookup(self.root(), target)
    }

    /// See [`size`][crate::size].
    pub fn size(&self) -> usize {
        query::size(self.root())
    }

    /// See [`max_depth`][crate::max_depth].
    pub fn max_depth(&self) -> usize {
        query::max_depth(self.root())
    }

    /// Returns the smallest key of a BST.
    ///
    /// # Panics
    ///
    /// If the tree is empty. Use [`Tree::try_min_value`] to check instead.
    pub fn min_value(&self) -> &K {
        match self.try_min_value() {
            Ok(key) => key,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the largest key of a BST.
    ///
    /// # Panics
    ///
    /// If the tree is empty. Use [`Tree::try_max_value`] to check instead.
    pub fn max_value(&self) -> &K {
        match self.try_max_value() {
            Ok(key) => key,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the smallest key of a BST, or [`TreeError::EmptyTree`].
    pub fn try_min_value(&self) -> Result<&K, TreeError> {
        self.root()
            .map(query::min_value)
            .ok_or(TreeError::EmptyTree {
                operation: "min_value",
            })
    }

    /// Returns the largest key of a BST, or [`TreeError::EmptyTree`].
    pub fn try_max_value(&self) -> Result<&K, TreeError> {
        self.root()
            .map(query::max_value)
            .ok_or(TreeError::EmptyTree {
                operation: "max_value",
            })
    }

    /// See [`has_path_sum`][crate::has_path_sum], including its behaviour at
    /// nodes with a single child.
    pub fn has_path_sum(&self, sum: K) -> bool
    where
        K: Key,
    {
        query::has_path_sum(self.root(), sum)
    }

    /// See [`print_paths`][crate::print_paths].
    pub fn paths(&self) -> Paths<'_, K>
    where
        K: Clone,
    {
        print_paths(self.root())
    }

    /// See [`in_order`][crate::in_order].
    pub fn in_order(&self) -> InOrder<'_, K> {
        in_order(self.root())
    }

    /// See [`post_order`][crate::post_order].
    pub fn post_order(&self) -> PostOrder<'_, K> {
        post_order(self.root())
    }

    /// See [`mirror`][crate::mirror].
    pub fn mirror(&mut self) {
        transform::mirror(self.root_mut());
    }

    /// See [`double_tree`][crate::double_tree].
    pub fn double_tree(&mut self)
    where
        K: Clone,
    {
        transform::double_tree(self.root_mut());
    }

    /// See [`is_bst`][crate::is_bst].
    pub fn is_bst(&self) -> bool
    where
        K: Ord,
    {
        validate::is_bst(self.root())
    }

    /// [`is_bst_efficient`][crate::is_bst_efficient] over the full range of
    /// the key type.
    pub fn is_bst_efficient(&self) -> bool
    where
        K: Key,
    {
        validate::is_bst_efficient(self.root(), K::MIN, K::MAX)
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
