//! Persistent (immutable) stack.
//!
//! This module provides [`Stack`], an immutable singly-linked stack whose
//! versions share structure. Pushing with [`Stack::cons`] leaves the
//! original untouched and shares every existing node with it.
//!
//! # Examples
//!
//! ```rust
//! use optika::persistent::Stack;
//!
//! let base = Stack::new().cons(3).cons(2);
//! let extended = base.cons(1);
//!
//! assert_eq!(base.head(), Some(&2));
//! assert_eq!(extended.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! let collected: Stack<char> = "abc".chars().collect();
//! assert_eq!(collected.head(), Some(&'a'));
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! base:     2 -> 3 -> nil
//! extended: 1 -> [2 -> 3 -> nil]  // shares [2, 3] with base
//! ```
//!
//! Dropping a stack releases its unshared nodes in a loop, so very long
//! stacks do not overflow the call stack.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::ReferenceCounter;

struct Node<T> {
    element: T,
    next: Option<ReferenceCounter<Self>>,
}

/// A persistent last-in, first-out stack.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`     | O(1)       |
/// | `cons`    | O(1)       |
/// | `head`    | O(1)       |
/// | `tail`    | O(1)       |
/// | `len`     | O(1)       |
/// | `get`     | O(n)       |
pub struct Stack<T> {
    head: Option<ReferenceCounter<Node<T>>>,
    length: usize,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a stack holding one element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head = None;
        while let Some(element) = elements.pop() {
            head = Some(ReferenceCounter::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }

    /// Pushes `element` on top, sharing the rest with `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optika::persistent::Stack;
    ///
    /// let stack = Stack::new().cons(2).cons(1);
    /// assert_eq!(stack.head(), Some(&1));
    /// assert_eq!(stack.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns the top element, or `None` if the stack is empty.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the stack below the top element. The tail of an empty stack
    /// is empty.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length - 1,
        })
    }

    /// Splits the stack into its top element and the rest.
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head().map(|head| (head, self.tail()))
    }

    /// Returns the element `index` positions below the top.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Iterates from the top of the stack down.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> StackIter<'_, T> {
        StackIter {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match ReferenceCounter::try_unwrap(node) {
                Ok(Node { next: rest, .. }) => next = rest,
                Err(_) => break,
            }
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`Stack`], top first.
pub struct StackIter<'a, T> {
    current: Option<&'a ReferenceCounter<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for StackIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for StackIter<'_, T> {}

/// An owning iterator over the elements of a [`Stack`], top first.
///
/// Nodes owned only by this iterator are moved out; nodes still shared with
/// another stack are cloned.
pub struct StackIntoIter<T> {
    stack: Stack<T>,
}

impl<T: Clone> Iterator for StackIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.head.take()?;
        self.stack.length -= 1;
        match ReferenceCounter::try_unwrap(node) {
            Ok(Node { element, next }) => {
                self.stack.head = next;
                Some(element)
            }
            Err(shared) => {
                self.stack.head.clone_from(&shared.next);
                Some(shared.element.clone())
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.length, Some(self.stack.length))
    }
}

impl<T: Clone> ExactSizeIterator for StackIntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// The first element yielded ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = StackIntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        StackIntoIter { stack: self }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = StackIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Hash> Hash for Stack<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Stack<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Stack<i32>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Stack<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct StackVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::de::Visitor<'de> for StackVisitor<T> {
    type Value = Stack<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence, top of the stack first")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Stack::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Stack<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(StackVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
