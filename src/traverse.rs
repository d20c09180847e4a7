//! Walking every value of a tree in one of the classical orders.
//!
//! The visitor walks recurse once per level so they are bounded by the height
//! of the tree. [`Iter`] and [`IntoIter`] keep their own stack instead.

use std::convert::Infallible;
use std::fmt;

use crate::node::{Link, TreeNode};

/// The order in which a traversal visits a node relative to its subtrees.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Left subtree, node, right subtree. Yields values in sorted order.
    #[default]
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node. Children come before their parents.
    PostOrder,
}

/// Visits every value under `node` in `order`, stopping at the first error `f`
/// returns.
pub(crate) fn walk<'a, T, E, F>(
    node: Option<&'a TreeNode<T>>,
    order: Traversal,
    f: &mut F,
) -> Result<(), E>
where
    F: FnMut(&'a T) -> Result<(), E>,
{
    let Some(node) = node else {
        return Ok(());
    };

    match order {
        Traversal::InOrder => {
            walk(node.left(), order, f)?;
            f(&node.value)?;
            walk(node.right(), order, f)
        }
        Traversal::PreOrder => {
            f(&node.value)?;
            walk(node.left(), order, f)?;
            walk(node.right(), order, f)
        }
        Traversal::PostOrder => {
            walk(node.left(), order, f)?;
            walk(node.right(), order, f)?;
            f(&node.value)
        }
    }
}

/// Visits every value under `node` in `order`.
pub(crate) fn visit<'a, T>(
    node: Option<&'a TreeNode<T>>,
    order: Traversal,
    mut f: impl FnMut(&'a T),
) {
    let result: Result<(), Infallible> = walk(node, order, &mut |value| {
        f(value);
        Ok(())
    });
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Writes the values of a tree in a [`Traversal`] order, separated by single
/// spaces. Each value is written with its own [`fmt::Display`] implementation
/// and the formatter's flags.
///
/// Returned by [`OrderedTree::printed`][crate::OrderedTree::printed].
#[derive(Debug)]
pub struct Printed<'a, T> {
    pub(crate) root: Option<&'a TreeNode<T>>,
    pub(crate) order: Traversal,
}

impl<T: fmt::Display> fmt::Display for Printed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        walk(self.root, self.order, &mut |value: &T| {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            fmt::Display::fmt(value, f)
        })
    }
}

/// A borrowing iterator over the values of a tree in sorted order.
///
/// Returned by [`OrderedTree::iter`][crate::OrderedTree::iter].
#[derive(Debug)]
pub struct Iter<'a, T> {
    /// Nodes whose left subtree is done but whose value isn't yielded yet.
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a TreeNode<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

/// An owning iterator over the values of a tree in sorted order.
///
/// Returned by `OrderedTree::into_iter`. Values not yet yielded are dropped
/// with the iterator.
#[derive(Debug)]
pub struct IntoIter<T> {
    stack: Vec<Box<TreeNode<T>>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        Some(node.value)
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Draining one node at a time keeps deep right spines off the call stack.
        for _ in self.by_ref() {}
    }
}
