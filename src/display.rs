//! Text output for the traversals, one line per path or traversal.
//!
//! The algorithms themselves never print. This module is the thin adapter
//! for callers who want the classic console output.

use std::fmt;
use std::io;

use crate::node::Node;
use crate::traverse::{in_order, post_order, print_paths};

/// Formats a sequence of keys separated by single spaces.
///
/// # Examples
///
/// ```
/// use bst_algos::display::PathDisplay;
///
/// assert_eq!(PathDisplay(&[5, 3, 1]).to_string(), "5 3 1");
/// assert_eq!(PathDisplay::<i32>(&[]).to_string(), "");
/// ```
pub struct PathDisplay<'a, K>(pub &'a [K]);

impl<'a, K> fmt::Display for PathDisplay<'a, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

/// Writes every root-to-leaf path, one per line.
///
/// # Examples
///
/// ```
/// use bst_algos::{build_sample_tree, display::write_paths};
///
/// let mut out = Vec::new();
/// write_paths(&mut out, Some(&build_sample_tree())).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "2 5\n2 3\n");
/// ```
pub fn write_paths<W, K>(out: &mut W, root: Option<&Node<K>>) -> io::Result<()>
where
    W: io::Write,
    K: Clone + fmt::Display,
{
    for path in print_paths(root) {
        writeln!(out, "{}", PathDisplay(&path))?;
    }

    Ok(())
}

/// Writes the keys in in-order (sorted, for a BST) sequence on one line.
pub fn write_in_order<W, K>(out: &mut W, root: Option<&Node<K>>) -> io::Result<()>
where
    W: io::Write,
    K: fmt::Display,
{
    write_keys(out, in_order(root))
}

/// Writes the keys in post-order sequence on one line.
pub fn write_post_order<W, K>(out: &mut W, root: Option<&Node<K>>) -> io::Result<()>
where
    W: io::Write,
    K: fmt::Display,
{
    write_keys(out, post_order(root))
}

fn write_keys<'a, W, K>(out: &mut W, keys: impl Iterator<Item = &'a K>) -> io::Result<()>
where
    W: io::Write,
    K: fmt::Display + 'a,
{
    for (i, key) in keys.enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        write!(out, "{key}")?;
    }
    writeln!(out)
}
