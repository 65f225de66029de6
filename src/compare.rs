//! Structural comparison and counting of tree shapes.

use tracing::debug;

use crate::error::TreeError;
use crate::node::Node;

/// Returns `true` if both trees are absent, or both are present with equal
/// keys and structurally identical subtrees. No ordering is assumed.
///
/// # Examples
///
/// ```
/// use bst_algos::{build_sample_tree, same_tree};
///
/// let a = build_sample_tree();
/// let mut b = build_sample_tree();
/// assert!(same_tree(Some(&a), Some(&b)));
///
/// b.key = 7;
/// assert!(!same_tree(Some(&a), Some(&b)));
/// assert!(!same_tree(Some(&a), None));
/// ```
pub fn same_tree<K>(a: Option<&Node<K>>, b: Option<&Node<K>>) -> bool
where
    K: PartialEq,
{
    let mut stack = vec![(a, b)];
    while let Some(pair) = stack.pop() {
        match pair {
            (None, None) => {}
            (Some(a), Some(b)) => {
                if a.key != b.key {
                    return false;
                }
                stack.push((a.right.as_deref(), b.right.as_deref()));
                stack.push((a.left.as_deref(), b.left.as_deref()));
            }
            _ => return false,
        }
    }

    true
}

/// How [`count_trees_with`] computes its answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CountStrategy {
    /// Plain recursion, recomputing every sub-count. Exponential time.
    #[default]
    Naive,
    /// Bottom-up table of every count up to `n`. Quadratic time.
    Memoized,
}

/// Returns how many structurally unique BSTs can store the keys `1..=n`.
/// These are the Catalan numbers.
///
/// Each key in turn is considered as the root; the keys below it form the
/// left subtree and the keys above it the right, so the count for that root
/// is the product of the two sub-counts.
///
/// Sub-counts are recomputed on every call so the running time grows
/// exponentially with `n`. Use [`count_trees_with`] and
/// [`CountStrategy::Memoized`] for anything but small inputs.
///
/// # Examples
///
/// ```
/// use bst_algos::count_trees;
///
/// assert_eq!(count_trees(3), 5);
/// assert_eq!(count_trees(4), 14);
/// ```
pub fn count_trees(n: usize) -> u64 {
    if n <= 1 {
        return 1;
    }

    let mut sum = 0;
    for root in 1..=n {
        let left = count_trees(root - 1);
        let right = count_trees(n - root);

        // number of possible trees with this root == left * right
        sum += left * right;
    }

    sum
}

/// Counts unique BST shapes for `n` keys with the given strategy.
///
/// Returns [`TreeError::CountOverflow`] if the count doesn't fit in a `u64`,
/// which first happens at `n = 37`.
///
/// # Examples
///
/// ```
/// use bst_algos::{count_trees_with, CountStrategy, TreeError};
///
/// assert_eq!(count_trees_with(19, CountStrategy::Memoized), Ok(1_767_263_190));
/// assert_eq!(
///     count_trees_with(40, CountStrategy::Memoized),
///     Err(TreeError::CountOverflow { n: 40 })
/// );
/// ```
pub fn count_trees_with(n: usize, strategy: CountStrategy) -> Result<u64, TreeError> {
    debug!(n, ?strategy, "counting tree shapes");
    let count = match strategy {
        CountStrategy::Naive => checked_count_naive(n),
        CountStrategy::Memoized => checked_count_memoized(n),
    }
    .ok_or(TreeError::CountOverflow { n })?;
    debug!(n, count, "counted tree shapes");

    Ok(count)
}

fn checked_count_naive(n: usize) -> Option<u64> {
    if n <= 1 {
        return Some(1);
    }

    (1..=n).try_fold(0u64, |sum, root| {
        let product = checked_count_naive(root - 1)?.checked_mul(checked_count_naive(n - root)?)?;
        sum.checked_add(product)
    })
}

fn checked_count_memoized(n: usize) -> Option<u64> {
    // counts[i] is the number of shapes for i keys.
    let mut counts: Vec<u64> = Vec::with_capacity(n + 1);
    counts.push(1);
    for keys in 1..=n {
        let count = (1..=keys).try_fold(0u64, |sum, root| {
            sum.checked_add(counts[root - 1].checked_mul(counts[keys - root])?)
        })?;
        counts.push(count);
    }

    counts.pop()
}
