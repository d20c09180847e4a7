//! A single node of an [`OrderedTree`][crate::OrderedTree].
//!
//! Nodes only point down. Anything that needs a node's ancestors walks down
//! from the root along the search path instead.

/// An owning link to a subtree. `None` is an empty subtree.
pub(crate) type Link<T> = Option<Box<TreeNode<T>>>;

/// A `TreeNode` holds one value and owns up to two children.
///
/// Nodes are created by [`OrderedTree::insert`][crate::OrderedTree::insert]
/// and borrowed read-only through [`OrderedTree::root`][crate::OrderedTree::root]
/// and [`OrderedTree::find_node`][crate::OrderedTree::find_node].
#[derive(Debug)]
pub struct TreeNode<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> TreeNode<T> {
    /// Construct a new leaf holding `value`.
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of this node's left subtree, holding smaller values.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, holding larger values.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Whether exactly one of the two children is present.
    pub fn has_one_child(&self) -> bool {
        self.left.is_some() != self.right.is_some()
    }

    /// Whether both children are present.
    pub fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// The leftmost node of this subtree, i.e. the one holding its smallest
    /// value. Called on a right child this is the in-order successor of the
    /// child's parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// let eight = tree.find_node(&8).unwrap();
    ///
    /// assert_eq!(eight.find_min().value(), &7);
    /// ```
    pub fn find_min(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// How many nodes are on the longest path from this node down to a leaf,
    /// counting both ends. A leaf has a height of 1.
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        tallest
    }

    /// Unlinks the smallest node of the subtree at `link`, moving its right
    /// child into its place, and returns the unlinked value.
    pub(crate) fn detach_min(link: &mut Link<T>) -> Option<T> {
        match link {
            Some(node) if node.left.is_some() => Self::detach_min(&mut node.left),
            _ => {
                let min = link.take()?;
                let Self { value, right, .. } = *min;
                *link = right;
                Some(value)
            }
        }
    }
}
