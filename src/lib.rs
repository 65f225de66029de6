//! This crate implements the canonical binary search tree (BST) algorithms
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a binary tree built from `Node`s. Each `Node`
//! stores a key and owns up to two child `Node`s. The ordering invariant is:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than or equal to its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` where `height` is the number of
//! `Node`s on the longest path from the root to a leaf. Nothing here balances
//! the tree, so inserting keys in sorted order produces a chain whose height
//! equals its size. Every algorithm therefore walks the tree with a loop or
//! an explicit stack rather than recursion, and very deep trees are fine.
//!
//! ## Layout
//!
//! The algorithms are free functions over [`Node`] references, where an
//! absent subtree is `None`:
//!
//! - [`lookup`] and [`insert`] for searching and growing a BST.
//! - [`size`], [`max_depth`], [`min_value`], [`max_value`] and
//!   [`has_path_sum`] for shape queries.
//! - [`print_paths`], [`in_order`] and [`post_order`] for lazy traversals.
//! - [`mirror`] and [`double_tree`] for in-place transforms.
//! - [`same_tree`] and [`count_trees`] for comparing and counting shapes.
//! - [`is_bst`] and [`is_bst_efficient`] for checking the ordering.
//!
//! [`Tree`] wraps an owned root and exposes the same algorithms as methods.
//!
//! # Examples
//!
//! ```
//! use bst_algos::{insert, is_bst, lookup, max_value, min_value, size};
//!
//! let mut root = insert(None, 5);
//! for key in [3, 8, 1, 4] {
//!     root = insert(Some(root), key);
//! }
//!
//! assert!(lookup(Some(&root), &4));
//! assert!(!lookup(Some(&root), &9));
//! assert_eq!(*min_value(&root), 1);
//! assert_eq!(*max_value(&root), 8);
//! assert_eq!(size(Some(&root)), 5);
//! assert!(is_bst(Some(&root)));
//! ```
//!
//! ## Logging
//!
//! Operations emit [`tracing`] events at `trace` and `debug` level. The
//! crate never installs a subscriber.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod compare;
pub mod display;
mod error;
mod key;
mod node;
mod query;
mod search;
mod transform;
mod traverse;
mod tree;
mod validate;

pub use compare::{count_trees, count_trees_with, same_tree, CountStrategy};
pub use error::TreeError;
pub use key::Key;
pub use node::{build_sample_tree, new_node, Link, Node};
pub use query::{has_path_sum, max_depth, max_value, min_value, size};
pub use search::{insert, lookup};
pub use transform::{double_tree, mirror};
pub use traverse::{in_order, post_order, print_paths, InOrder, Paths, PostOrder};
pub use tree::Tree;
pub use validate::{is_bst, is_bst_efficient};
