//! The behaviour a tree is built with: how values are ordered and how the
//! element counter is kept.

use std::cmp::Ordering;

/// A three-way total order over `T`.
///
/// Implementations must be consistent for the lifetime of a tree: if the answer
/// for two values changes after they were inserted, searches and deletes can
/// miss values that are still stored.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator.
///
/// # Examples
///
/// ```
/// use ordered_tree::OrderedTree;
///
/// // Largest first.
/// let mut tree = OrderedTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// tree.extend([1, 3, 2]);
///
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
pub trait Comparator<T> {
    /// Returns whether `a` is less than, equal to, or greater than `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders values by their own [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// How [`OrderedTree::len`][crate::OrderedTree::len] is maintained.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CountPolicy {
    /// The count is exactly the number of nodes in the tree.
    #[default]
    Live,
    /// The count moves on every call: each `insert` adds one even when the
    /// value was a duplicate and each `delete` subtracts one even when nothing
    /// was found. It never goes below zero.
    PerCall,
}

impl CountPolicy {
    /// The count after an insert that did (`created`) or didn't create a node.
    pub(crate) fn after_insert(self, count: usize, created: bool) -> usize {
        match self {
            Self::Live if !created => count,
            Self::Live | Self::PerCall => count + 1,
        }
    }

    /// The count after a delete that did (`removed`) or didn't remove a node.
    pub(crate) fn after_delete(self, count: usize, removed: bool) -> usize {
        match self {
            Self::Live if !removed => count,
            Self::Live | Self::PerCall => count.saturating_sub(1),
        }
    }
}
