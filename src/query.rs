//! Shape and aggregate queries: size, depth, extreme keys and path sums.

use crate::key::Key;
use crate::node::Node;

/// Counts the nodes in the tree. An absent tree has size 0.
///
/// # Examples
///
/// ```
/// use bst_algos::{build_sample_tree, size};
///
/// assert_eq!(size(Some(&build_sample_tree())), 3);
/// assert_eq!(size::<i64>(None), 0);
/// ```
pub fn size<K>(root: Option<&Node<K>>) -> usize {
    let mut stack: Vec<&Node<K>> = root.into_iter().collect();
    let mut count = 0;
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }

    count
}

/// The number of nodes along the longest path from the root down to the
/// farthest leaf. An absent tree has depth 0 and a single node has depth 1.
///
/// # Examples
///
/// ```
/// use bst_algos::{build_sample_tree, max_depth};
///
/// assert_eq!(max_depth(Some(&build_sample_tree())), 2);
/// ```
pub fn max_depth<K>(root: Option<&Node<K>>) -> usize {
    let mut stack: Vec<(&Node<K>, usize)> = root.map(|n| (n, 1)).into_iter().collect();
    let mut deepest = 0;
    while let Some((node, depth)) = stack.pop() {
        deepest = deepest.max(depth);
        stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
        stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
    }

    deepest
}

/// Returns the smallest key of a BST by following left children until none
/// remain. Only the left spine is visited, so on a tree that isn't a BST the
/// result is simply the leftmost key.
///
/// Taking `&Node` rather than an optional root makes "the tree is
/// non-empty" the caller's obligation. [`Tree::min_value`][crate::Tree::min_value]
/// panics on an empty tree and [`Tree::try_min_value`][crate::Tree::try_min_value]
/// reports it as an error.
pub fn min_value<K>(root: &Node<K>) -> &K {
    let mut current = root;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }

    &current.key
}

/// Returns the largest key of a BST by following right children until none
/// remain. See [`min_value`] for the non-empty precondition.
pub fn max_value<K>(root: &Node<K>) -> &K {
    let mut current = root;
    while let Some(right) = current.right.as_deref() {
        current = right;
    }

    &current.key
}

/// Returns `true` if some downward path adds up to `sum`.
///
/// Each node's key is subtracted from the remaining sum on the way down and
/// running out of tree succeeds if exactly zero is left. Subtraction wraps on
/// overflow.
///
/// Every absent child slot counts as "running out of tree", including the
/// missing side of a node with one child. Such a node can therefore succeed
/// through its absent sibling even though it isn't a leaf:
///
/// ```
/// use bst_algos::{has_path_sum, new_node};
///
/// let mut root = new_node(5);
/// root.left = Some(new_node(3));
///
/// assert!(has_path_sum(Some(&root), 8));
/// // 5 is not a leaf, but its right slot is empty.
/// assert!(has_path_sum(Some(&root), 5));
/// ```
///
/// An absent tree has a path sum of zero.
pub fn has_path_sum<K>(root: Option<&Node<K>>, sum: K) -> bool
where
    K: Key,
{
    let mut stack: Vec<(Option<&Node<K>>, K)> = vec![(root, sum)];
    while let Some((node, remaining)) = stack.pop() {
        match node {
            None => {
                if remaining == K::ZERO {
                    return true;
                }
            }
            Some(node) => {
                let remaining = remaining.wrapping_sub(node.key);
                stack.push((node.right.as_deref(), remaining));
                stack.push((node.left.as_deref(), remaining));
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_sample_tree, insert, new_node};

    fn from_keys(keys: &[i64]) -> Box<Node<i64>> {
        let mut root = None;
        for &key in keys {
            root = Some(insert(root, key));
        }
        root.unwrap()
    }

    #[test]
    fn test_size() {
        assert_eq!(size::<i64>(None), 0);
        assert_eq!(size(Some(&*new_node(1))), 1);
        assert_eq!(size(Some(&*from_keys(&[5, 3, 8, 1, 4]))), 5);
    }

    #[test]
    fn test_size_is_sum_of_children() {
        let root = from_keys(&[50, 20, 70, 10, 30, 60, 80, 25]);
        assert_eq!(
            size(Some(&root)),
            size(root.left.as_deref()) + 1 + size(root.right.as_deref())
        );
    }

    #[test]
    fn test_max_depth() {
        assert_eq!(max_depth::<i64>(None), 0);
        assert_eq!(max_depth(Some(&*new_node(1))), 1);
        assert_eq!(max_depth(Some(&*build_sample_tree())), 2);
        assert_eq!(max_depth(Some(&*from_keys(&[1, 2, 3, 4]))), 4);
        assert_eq!(max_depth(Some(&*from_keys(&[5, 3, 8, 1, 4]))), 3);
    }

    #[test]
    fn test_min_and_max_value() {
        let root = from_keys(&[5, 3, 8, 1, 4]);
        assert_eq!(*min_value(&root), 1);
        assert_eq!(*max_value(&root), 8);

        let single = new_node(9);
        assert_eq!(*min_value(&single), 9);
        assert_eq!(*max_value(&single), 9);
    }

    #[test]
    fn test_min_value_only_visits_left_spine() {
        // The sample tree isn't a BST, so the answers are just its outermost keys.
        let root = build_sample_tree();
        assert_eq!(*min_value(&root), 5);
        assert_eq!(*max_value(&root), 3);
    }

    #[test]
    fn test_has_path_sum_full_tree() {
        //       5
        //      / \
        //     4   8
        //    / \
        //   11  2
        let mut root = new_node(5);
        let mut four = new_node(4);
        four.left = Some(new_node(11));
        four.right = Some(new_node(2));
        root.left = Some(four);
        root.right = Some(new_node(8));

        assert!(has_path_sum(Some(&root), 20));
        assert!(has_path_sum(Some(&root), 11));
        assert!(has_path_sum(Some(&root), 13));
        assert!(!has_path_sum(Some(&root), 9));
        assert!(!has_path_sum(Some(&root), 5));
    }

    #[test]
    fn test_has_path_sum_succeeds_through_absent_sibling() {
        let mut root = new_node(5i64);
        root.left = Some(new_node(3));

        assert!(has_path_sum(Some(&root), 8));
        assert!(has_path_sum(Some(&root), 5));
        assert!(!has_path_sum(Some(&root), 3));
    }

    #[test]
    fn test_has_path_sum_empty() {
        assert!(has_path_sum::<i64>(None, 0));
        assert!(!has_path_sum::<i64>(None, 1));
    }

    #[test]
    fn test_has_path_sum_wraps() {
        let mut root = new_node(i8::MIN);
        root.left = Some(new_node(-1));
        root.right = Some(new_node(-1));

        // -128 + -1 wraps to 127.
        assert!(has_path_sum(Some(&root), 127i8));
    }
}
