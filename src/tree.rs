//! The tree itself.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, TreeError};
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Equal values are never stored twice.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&1), Ok(1));
//! assert_eq!(tree.delete(&1), Err(TreeError::NotFound));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::error::TreeError;
use crate::node::{Link, TreeNode};
use crate::policy::{Comparator, CountPolicy, NaturalOrder};
use crate::traverse::{self, IntoIter, Iter, Printed, Traversal};

/// An unbalanced Binary Search Tree of unique values ordered by `C`.
///
/// The tree owns its values. A value leaves the tree either through
/// [`delete`][Self::delete], which hands it back, or by being dropped when the
/// tree is [`clear`][Self::clear]ed or dropped.
pub struct OrderedTree<T, C = NaturalOrder> {
    root: Link<T>,
    count: usize,
    comparator: C,
    count_policy: CountPolicy,
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree` ordered by `T`'s [`Ord`]
    /// implementation.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> OrderedTree<T, C> {
    /// Generates a new, empty `OrderedTree` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// tree.insert("three");
    ///
    /// // Only the length matters to this tree.
    /// assert_eq!(tree.find(&"seven"), Some(&"three"));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            count: 0,
            comparator,
            count_policy: CountPolicy::default(),
        }
    }

    /// Sets how [`len`][Self::len] is maintained from now on.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{CountPolicy, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new().with_count_policy(CountPolicy::PerCall);
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.iter().count(), 1);
    /// ```
    pub fn with_count_policy(mut self, count_policy: CountPolicy) -> Self {
        self.count_policy = count_policy;
        self
    }

    /// The policy [`len`][Self::len] follows.
    pub fn count_policy(&self) -> CountPolicy {
        self.count_policy
    }

    /// The comparator this tree is ordered by.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// The element count. With [`CountPolicy::Live`] this is the number of
    /// values in the tree.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many nodes are on the longest path from the root to a leaf. An
    /// empty tree has a height of 0 and a single node a height of 1.
    pub fn height(&self) -> usize {
        self.root().map_or(0, TreeNode::height)
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// The value stored at the root, if there is one.
    pub fn root_value(&self) -> Option<&T> {
        self.root().map(TreeNode::value)
    }

    /// Calls `visit` with every value in the tree, in `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, Traversal};
    ///
    /// let tree: OrderedTree<i32> = [2, 1, 3].into_iter().collect();
    ///
    /// let mut seen = Vec::new();
    /// tree.traverse(Traversal::PostOrder, |value| seen.push(*value));
    /// assert_eq!(seen, vec![1, 3, 2]);
    /// ```
    pub fn traverse<'a>(&'a self, order: Traversal, visit: impl FnMut(&'a T)) {
        traverse::visit(self.root(), order, visit);
    }

    /// References to every value in the tree, in `order`.
    pub fn values(&self, order: Traversal) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.count);
        self.traverse(order, |value| values.push(value));
        values
    }

    /// Displays every value in the tree in `order`, separated by spaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, Traversal};
    ///
    /// let tree: OrderedTree<i32> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.printed(Traversal::PreOrder).to_string(), "2 1 3");
    /// ```
    pub fn printed(&self, order: Traversal) -> Printed<'_, T>
    where
        T: fmt::Display,
    {
        Printed {
            root: self.root(),
            order,
        }
    }

    /// Iterates over the values in the tree in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// Drops every value in the tree, children before parents, and resets the
    /// count. Clearing an empty tree does nothing.
    pub fn clear(&mut self) {
        let freed = teardown(self.root.take());
        self.count = 0;
        if freed > 0 {
            debug!("cleared tree, dropped {} nodes", freed);
        }
    }
}

impl<T, C> OrderedTree<T, C>
where
    C: Comparator<T>,
{
    /// Inserts `value` unless an equal value is already stored. Returns
    /// whether a node was created. A rejected value is dropped.
    ///
    /// The tree never rebalances, so inserting sorted values builds a chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for x in 1..=4 {
    ///     assert!(tree.insert(x));
    /// }
    /// assert!(!tree.insert(2));
    ///
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let created = self.insert_node(value);
        self.count = self.count_policy.after_insert(self.count, created);
        created
    }

    fn insert_node(&mut self, value: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match self.comparator.compare(&value, &node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!("insert rejected a duplicate value");
                    return false;
                }
            };
        }
        *link = Some(TreeNode::new_boxed(value));
        trace!("insert created a leaf");
        true
    }

    /// Potentially finds the stored value that compares equal to `key`. If no
    /// node has such a value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &T) -> Option<&T> {
        self.find_node(key).map(TreeNode::value)
    }

    /// Whether a value comparing equal to `key` is stored.
    pub fn contains(&self, key: &T) -> bool {
        self.find_node(key).is_some()
    }

    /// The node holding the value that compares equal to `key`, i.e. the root
    /// of that value's subtree.
    pub fn find_node(&self, key: &T) -> Option<&TreeNode<T>> {
        let mut node = self.root();
        while let Some(n) = node {
            node = match self.comparator.compare(key, &n.value) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(n),
                Ordering::Greater => n.right(),
            };
        }
        None
    }

    /// Deletes the node holding the value that compares equal to `key` and
    /// returns that value.
    ///
    /// A leaf is simply unlinked and a node with one child is replaced by that
    /// child. A node with two children keeps its place and takes the value of
    /// its in-order successor, whose own node is unlinked instead.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if no stored value compares equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, TreeError};
    ///
    /// let mut tree: OrderedTree<i32> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&5), Ok(5));
    /// assert_eq!(tree.root_value(), Some(&8));
    /// assert_eq!(tree.delete(&5), Err(TreeError::NotFound));
    /// ```
    pub fn delete(&mut self, key: &T) -> Result<T, TreeError> {
        let deleted = Self::delete_from(&mut self.root, key, &self.comparator);
        self.count = self.count_policy.after_delete(self.count, deleted.is_some());
        deleted.ok_or_else(|| {
            debug!("delete found no matching value");
            TreeError::NotFound
        })
    }

    /// Deletes the matching node from the subtree at `link`, returning its value.
    fn delete_from(link: &mut Link<T>, key: &T, comparator: &C) -> Option<T> {
        let node = link.as_mut()?;
        match comparator.compare(key, &node.value) {
            Ordering::Less => Self::delete_from(&mut node.left, key, comparator),
            Ordering::Greater => Self::delete_from(&mut node.right, key, comparator),
            Ordering::Equal if node.has_two_children() => {
                trace!("deleting a node with two children");
                let successor =
                    TreeNode::detach_min(&mut node.right).expect("Two children => right child");
                Some(mem::replace(&mut node.value, successor))
            }
            Ordering::Equal => {
                trace!(
                    "deleting a node with {} child",
                    if node.is_leaf() { "no" } else { "one" }
                );
                let deleted = link.take()?;
                let TreeNode { value, left, right } = *deleted;
                *link = left.or(right);
                Some(value)
            }
        }
    }
}

/// Drops every node of the subtree at `root` in post-order without recursing.
/// Returns how many nodes were dropped.
fn teardown<T>(root: Link<T>) -> usize {
    let mut pending: Vec<Box<TreeNode<T>>> = root.into_iter().collect();
    let mut detached = Vec::new();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
        detached.push(node);
    }

    // `detached` holds node, right subtree, left subtree. Backwards that's post-order.
    let freed = detached.len();
    for node in detached.into_iter().rev() {
        drop(node);
    }
    freed
}

impl<T, C> Drop for OrderedTree<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Clone for OrderedTree<T, C>
where
    T: Clone,
    C: Comparator<T> + Clone,
{
    fn clone(&self) -> Self {
        let mut tree = Self::with_comparator(self.comparator.clone());
        tree.count_policy = self.count_policy;

        // Inserting in pre-order rebuilds exactly the same shape.
        let mut stack: Vec<&TreeNode<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            tree.insert_node(node.value.clone());
            stack.extend(node.right());
            stack.extend(node.left());
        }

        tree.count = self.count;
        tree
    }
}

impl<T, C> fmt::Debug for OrderedTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("root", &self.root())
            .field("len", &self.count)
            .field("count_policy", &self.count_policy)
            .finish()
    }
}

impl<T, C> Extend<T> for OrderedTree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C> FromIterator<T> for OrderedTree<T, C>
where
    C: Comparator<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::with_comparator(C::default());
        tree.extend(iter);
        tree
    }
}

impl<T, C> IntoIterator for OrderedTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take())
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same values in both.
    fn do_ops<T>(ops: &[Op<T>], bst: &mut OrderedTree<T>, set: &mut BTreeSet<T>)
    where
        T: Ord + Clone + fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(x) => {
                    assert_eq!(bst.insert(x.clone()), set.insert(x.clone()));
                }
                Op::Remove(x) => {
                    assert_eq!(bst.delete(x).ok(), set.take(x));
                }
                Op::Iter => {
                    assert!(bst.iter().eq(set.iter()));
                }
            }
            assert_eq!(bst.len(), set.len());
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = OrderedTree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            set.iter().all(|x| tree.find(x) == Some(x))
                && tree.iter().eq(set.iter())
        }
    }

    quickcheck::quickcheck! {
        fn in_order_is_sorted(xs: Vec<i16>) -> bool {
            let tree: OrderedTree<i16> = xs.into_iter().collect();
            let values = tree.values(Traversal::InOrder);
            values.windows(2).all(|w| w[0] < w[1])
        }
    }

    quickcheck::quickcheck! {
        fn height_is_bounded(xs: Vec<u8>) -> bool {
            let tree: OrderedTree<u8> = xs.into_iter().collect();
            let n = tree.len();
            // ceil(log2(n + 1)) is the number of bits needed to write n.
            let lower = (usize::BITS - n.leading_zeros()) as usize;
            lower <= tree.height() && tree.height() <= n
        }
    }

    quickcheck::quickcheck! {
        fn deleted_values_are_gone(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
            let mut tree: OrderedTree<i8> = xs.iter().copied().collect();
            for x in &deletes {
                let _ = tree.delete(x);
            }

            deletes.iter().all(|x| !tree.contains(x))
                && xs.iter().filter(|x| !deletes.contains(*x)).all(|x| tree.contains(x))
        }
    }
}
