//! An ordered BST whose shape is driven entirely by a caller-supplied
//! three-way comparator, the [`Comparable`] trait. There is no separate
//! tree wrapper: the root [`Node`] doubles as the tree handle, so a tree
//! always holds at least one value. Representing "no tree yet" is the
//! caller's job (an `Option<Node<T>>` works fine).
//!
//! Values are never removed, never overwritten, and never moved to a
//! different position. The only mutation the tree performs is attaching
//! a fresh leaf during [`Node::add`].
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//!
//! use ordtree::tree::{Comparable, Node};
//!
//! #[derive(Debug)]
//! struct Celsius(i32);
//!
//! impl Comparable for Celsius {
//!     fn compare(&self, other: &Self) -> Ordering {
//!         self.0.cmp(&other.0)
//!     }
//! }
//!
//! let mut tree = Node::new(Celsius(20));
//! tree.add(Celsius(5))?;
//! tree.add(Celsius(30))?;
//!
//! assert!(tree.find(&Celsius(5)).is_some());
//! assert!(tree.find(&Celsius(25)).is_none());
//!
//! // A second 5 is rejected and the value is handed back.
//! let err = tree.add(Celsius(5)).unwrap_err();
//! assert_eq!(err.into_value().0, 5);
//! # Ok::<(), ordtree::tree::DuplicateValueError<Celsius>>(())
//! ```

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

/// The capability a value type needs in order to live in a [`Node`] tree:
/// a three-way comparison against another value of the same type.
///
/// The tree trusts the implementation completely. It must be a pure
/// function of the two values and consistent with itself across calls,
/// but nothing checks transitivity. An implementation is also free to
/// disagree with the type's [`Ord`], or to order by only part of the
/// value; the tree only ever looks at the returned [`Ordering`].
pub trait Comparable {
    /// Compares `self` against `other`, returning [`Ordering::Less`] if
    /// `self` precedes `other`, [`Ordering::Equal`] if the two are
    /// interchangeable as keys, and [`Ordering::Greater`] otherwise.
    fn compare(&self, other: &Self) -> Ordering;
}

/// The error returned by [`Node::add`] when the comparator reports the
/// new value equal to one already in the tree. Carries the rejected
/// value so the caller can recover it.
///
/// A failed `add` leaves the tree completely untouched.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("value already exists in the tree")]
pub struct DuplicateValueError<T>(T);

impl<T> DuplicateValueError<T> {
    /// Borrows the value that was rejected.
    pub fn value(&self) -> &T {
        &self.0
    }

    /// Consumes the error, yielding the rejected value back to the caller.
    pub fn into_value(self) -> T {
        self.0
    }
}

/// A node of the tree: one owned value plus up to two owned children.
///
/// Each node partitions its subtrees by its comparator: everything in
/// the left subtree is a value `v` with `node.value().compare(v) ==
/// Ordering::Less`, everything in the right subtree compares `Greater`.
/// No two values in a tree compare `Equal`.
///
/// Both [`add`][Node::add] and [`find`][Node::find] are recursive
/// descents, so the stack depth they need equals the tree height. There
/// is no rebalancing: feeding values in an order the comparator already
/// agrees with builds a degenerate, list-shaped tree whose height equals
/// its size.
#[derive(Clone)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T: Comparable> Node<T> {
    /// Constructs the root of a new tree holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Looks for a value comparing [`Equal`][Ordering::Equal] to
    /// `needle` and returns a reference to the stored instance, so the
    /// caller observes the tree's canonical copy rather than its probe.
    ///
    /// A miss is an ordinary `None`, never an error, and lookups never
    /// change the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use ordtree::tree::{Comparable, Node};
    ///
    /// struct Id(u64);
    ///
    /// impl Comparable for Id {
    ///     fn compare(&self, other: &Self) -> Ordering {
    ///         self.0.cmp(&other.0)
    ///     }
    /// }
    ///
    /// let tree = Node::new(Id(4));
    /// assert!(tree.find(&Id(4)).is_some());
    /// assert!(tree.find(&Id(9)).is_none());
    /// ```
    pub fn find(&self, needle: &T) -> Option<&T> {
        match self.value.compare(needle) {
            Ordering::Equal => Some(&self.value),
            Ordering::Less => self.left.as_ref()?.find(needle),
            Ordering::Greater => self.right.as_ref()?.find(needle),
        }
    }

    /// Inserts `new_value` at the unique position the comparator path
    /// from this node dictates, creating exactly one new leaf.
    ///
    /// If any value along the descent compares [`Equal`][Ordering::Equal]
    /// to `new_value`, the insert fails with a [`DuplicateValueError`]
    /// carrying `new_value` and the tree is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use ordtree::tree::{Comparable, Node};
    ///
    /// #[derive(Debug)]
    /// struct Id(u64);
    ///
    /// impl Comparable for Id {
    ///     fn compare(&self, other: &Self) -> Ordering {
    ///         self.0.cmp(&other.0)
    ///     }
    /// }
    ///
    /// let mut tree = Node::new(Id(4));
    /// assert!(tree.add(Id(9)).is_ok());
    /// assert!(tree.add(Id(9)).is_err());
    /// ```
    pub fn add(&mut self, new_value: T) -> Result<(), DuplicateValueError<T>> {
        match self.value.compare(&new_value) {
            Ordering::Equal => Err(DuplicateValueError(new_value)),
            Ordering::Less => match self.left.as_mut() {
                Some(child) => child.add(new_value),
                None => {
                    self.left = Some(Box::new(Self::new(new_value)));
                    Ok(())
                }
            },
            Ordering::Greater => match self.right.as_mut() {
                Some(child) => child.add(new_value),
                None => {
                    self.right = Some(Box::new(Self::new(new_value)));
                    Ok(())
                }
            },
        }
    }
}

impl<T> Node<T> {
    /// Returns the value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the left child of this node, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child of this node, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// How many levels are in the subtree rooted at this node. A node
    /// with no children has a height of 1.
    ///
    /// With nothing rebalancing the tree, the height is also how deep
    /// [`find`][Node::find] and [`add`][Node::add] may recurse.
    pub fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.height());
        let right = self.right.as_ref().map_or(0, |n| n.height());
        left.max(right) + 1
    }

    /// How many values are in the subtree rooted at this node. Never
    /// zero, since a node always holds its own value.
    pub fn size(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.size());
        let right = self.right.as_ref().map_or(0, |n| n.size());
        left + right + 1
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
