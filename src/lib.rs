//! A minimal ordered Binary Search Tree (BST) keyed by a user-supplied
//! comparator, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores one value and up to two
//! child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, its value compares as `Less` against
//!    every value in its left subtree.
//! 2. For every `Node` in a BST, its value compares as `Greater` against
//!    every value in its right subtree.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! These invariants let a lookup visit `O(height)` nodes (where `height`
//! is defined as the longest path from the root `Node` to a leaf `Node`).
//!
//! Unlike a map keyed by [`Ord`], the tree in this crate is ordered by the
//! [`Comparable`][tree::Comparable] capability: value types bring their own
//! three-way comparison, which may disagree with any ordering the type also
//! derives. The tree trusts the comparator completely.
//!
//! There is no balancing and no deletion. Insertion in an adversarial
//! order (for instance, already sorted) degrades the tree into a linked
//! list; that shape is documented behavior, not a bug.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod tree;
