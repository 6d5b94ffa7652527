//! Traversal of containers whose type is only known at runtime.
//!
//! Static optics pick a container's [`Traversable`](crate::optics::Traversable)
//! implementation at compile time. When a container arrives type-erased as a
//! [`Dynamic`], a [`Registry`] looks up how to take it apart by its
//! [`TypeId`](std::any::TypeId) and hands back an [`Erased`] container that
//! every static optic can traverse. Kinds that were never registered fail
//! with [`OpticError::UnsupportedTraversable`](crate::error::OpticError).
//!
//! # Examples
//!
//! ```
//! use optika::dynamic::{Dynamic, Registry};
//! use optika::optics::{over, traverse};
//! use std::collections::BTreeSet;
//!
//! let registry = Registry::<u32>::with_std_collections();
//!
//! let erased = registry.split(Dynamic::new(BTreeSet::from([3_u32, 1, 2]))).unwrap();
//! let doubled = over(&traverse(), |x: u32| x * 2, erased).assemble().unwrap();
//!
//! assert_eq!(doubled.downcast::<BTreeSet<u32>>().unwrap(), BTreeSet::from([2, 4, 6]));
//!
//! let error = registry.split(Dynamic::new([1_u32, 2])).unwrap_err();
//! assert!(error.to_string().contains("[u32; 2]"));
//! ```

mod erased;
mod registry;
mod value;

pub use erased::Erased;
pub use registry::Registry;
pub use value::Dynamic;
