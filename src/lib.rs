//! An unbalanced Binary Search Tree with pluggable ordering.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value and
//! may have up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. This tree never rebalances itself, so inserting
//! already sorted values builds a chain with `height == len`. BSTs naturally
//! support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree.
//!
//! "Less" and "greater" are decided by a [`Comparator`] fixed when the tree is
//! built. By default that is the value's own [`Ord`] implementation.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, Traversal};
//!
//! let mut tree: OrderedTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.find(&4), Some(&4));
//! assert_eq!(tree.height(), 3);
//!
//! // Deleting a node hands its value back.
//! assert_eq!(tree.delete(&5), Ok(5));
//! assert_eq!(tree.root_value(), Some(&7));
//!
//! assert_eq!(tree.printed(Traversal::InOrder).to_string(), "1 3 4 7 8 9");
//! ```
//!
//! ## Thread safety
//!
//! The tree has no interior mutability. It is `Send`/`Sync` whenever its values
//! and comparator are; sharing one across threads for mutation needs a lock
//! held by the caller.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod node;
pub mod policy;
pub mod traverse;
pub mod tree;


pub use error::TreeError;
pub use node::TreeNode;
pub use policy::{Comparator, CountPolicy, NaturalOrder};
pub use traverse::{IntoIter, Iter, Printed, Traversal};
pub use tree::OrderedTree;
