//! This crate exposes an ordered set backed by an unbalanced Binary Search
//! Tree (BST), mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for an element takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`) and visiting the left subtree,
//! then the subtree root, then the right subtree yields every element in
//! sorted order. The same invariants let a range query skip whole subtrees.
//!
//! [`TreeSet`] never rebalances. Its shape depends only on the order of
//! insertions and removals, and inserting sorted elements produces a chain.
//! The [`render`] module draws that shape for debugging.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod render;
mod set;
pub mod tree_set;

pub use render::{Layout, RenderError, RenderOptions};
pub use set::OrderedSet;
pub use tree_set::{Order, TreeSet};
