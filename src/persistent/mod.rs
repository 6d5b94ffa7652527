//! Persistent (immutable) data structures.
//!
//! - [`Stack`]: persistent last-in, first-out stack with structural sharing,
//!   the collection built by [`to_stack_of`](crate::optics::to_stack_of)
//!
//! # Examples
//!
//! ```rust
//! use optika::persistent::Stack;
//!
//! let stack = Stack::new().cons(2).cons(1);
//! let with_zero = stack.cons(0);
//!
//! assert_eq!(stack.len(), 2);
//! assert_eq!(with_zero.len(), 3);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`, and
/// persistent structures are `Send + Sync` when their elements are.
///
/// Otherwise it is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod stack;

pub use stack::Stack;
pub use stack::StackIntoIter;
pub use stack::StackIter;
