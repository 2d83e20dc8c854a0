//! The `Coffer` container type
//!
//! `Coffer<T>` owns an ordered sequence of values. Ownership is exclusive:
//! no element storage is ever shared between two live instances. Copying
//! duplicates storage, moving transfers it and leaves the source empty but
//! fully usable.
//!
//! The copy and move lifecycles are exposed as distinctly named
//! constructors ([`Coffer::from_copy`], [`Coffer::from_move`]) instead of
//! relying on implicit moves alone, so the two operations read explicitly
//! at call sites. Plain Rust moves and `Clone` remain equivalent.

use std::fmt;
use std::mem;

use super::render::join_rendered;

/// An ordered, exclusively-owning value container.
///
/// Insertion order is preserved and duplicates are allowed. An empty
/// container is always valid: instances emptied by [`Coffer::from_move`] or
/// [`Coffer::reset`] can be reused freely.
///
/// # Example
/// ```ignore
/// let mut a = Coffer::from_list(["p", "q"]);
/// let b = Coffer::from_move(&mut a);
/// assert_eq!(b.render(), "p:q");
/// assert_eq!(a.render(), "[empty]");
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coffer<T> {
    /// Owned elements, in insertion order
    elements: Vec<T>,
}

impl<T> Coffer<T> {
    /// Create an empty container.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Create a container populated from `values`, in iteration order.
    pub fn from_list<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            elements: values.into_iter().collect(),
        }
    }

    /// Create a container by transferring ownership of `other`'s storage.
    ///
    /// No element is copied and the operation cannot fail. `other` is left
    /// with an empty sequence and stays fully usable.
    pub fn from_move(other: &mut Self) -> Self {
        Self {
            elements: mem::take(&mut other.elements),
        }
    }

    /// Replace this container's contents with `source`'s.
    ///
    /// The source is taken by value, so the caller's construction step has
    /// already decided between copy (`assign(other.clone())`) and move
    /// (`assign(other)` or `assign(Coffer::from_move(&mut other))`). The
    /// body only swaps storage; if building `source` failed, `self` was
    /// never touched. Assigning a clone of `self` to itself leaves the
    /// contents unchanged.
    pub fn assign(&mut self, mut source: Self) {
        mem::swap(&mut self.elements, &mut source.elements);
    }

    /// Empty the container, releasing element storage. Idempotent.
    pub fn reset(&mut self) {
        self.elements.clear();
    }

    /// Check whether the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements held.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// View the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }
}

impl<T: Clone> Coffer<T> {
    /// Create a deep, independent duplicate of `other`.
    ///
    /// The new instance owns its own storage; mutating either container
    /// afterward never affects the other. `other` is untouched.
    pub fn from_copy(other: &Self) -> Self {
        other.clone()
    }
}

impl<T: fmt::Display> Coffer<T> {
    /// Render the contents as a string.
    ///
    /// An empty container renders as the sentinel `"[empty]"`; otherwise
    /// the elements' textual representations are joined by `:` with no
    /// leading or trailing separator. Pure; repeated calls on unchanged
    /// contents give identical results.
    pub fn render(&self) -> String {
        join_rendered(&self.elements)
    }
}

impl<T> Default for Coffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Coffer<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for Coffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_list(iter)
    }
}

impl<T: fmt::Display> fmt::Display for Coffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
