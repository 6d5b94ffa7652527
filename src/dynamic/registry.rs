use std::any::{Any, TypeId, type_name};
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::erased::Erased;
use super::value::Dynamic;
use crate::error::OpticError;
use crate::optics::{Rebuild, Shape, Traversable, over, traverse};

type Split<A> = fn(Box<dyn Any>) -> Result<Erased<A>, Box<dyn Any>>;
type ShapeOf = fn(&dyn Any) -> Option<Shape>;

struct Entry<A> {
    type_name: &'static str,
    split: Split<A>,
    shape_of: ShapeOf,
}

/// Runtime table of container kinds that can be traversed as elements of
/// type `A`.
///
/// Each registered kind is keyed by its [`TypeId`]. Registering a new kind
/// only adds an entry; nothing else changes.
///
/// # Examples
///
/// ```
/// use optika::dynamic::{Dynamic, Registry};
/// use optika::optics::{sum_of, traverse};
/// use std::collections::VecDeque;
///
/// let registry = Registry::<i32>::new()
///     .register::<Vec<i32>>()
///     .register::<VecDeque<i32>>();
///
/// let erased = registry.split(Dynamic::new(VecDeque::from([1, 2, 3]))).unwrap();
/// assert_eq!(sum_of(&traverse(), erased), 6);
///
/// let rejected = registry.split(Dynamic::new(Some(4)));
/// assert!(rejected.is_err());
/// ```
pub struct Registry<A> {
    entries: FxHashMap<TypeId, Entry<A>>,
}

impl<A: 'static> Registry<A> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Creates a registry that already knows the standard containers of
    /// `A`: `Vec`, `VecDeque`, `Option`, `BTreeSet`, `BTreeMap<String, _>`,
    /// `HashMap<String, _>` and, with the `persistent` feature, `Stack`.
    #[must_use]
    pub fn with_std_collections() -> Self
    where
        A: Clone + Ord + Hash,
    {
        let registry = Self::new()
            .register::<Vec<A>>()
            .register::<VecDeque<A>>()
            .register::<Option<A>>()
            .register::<BTreeSet<A>>()
            .register::<BTreeMap<String, A>>()
            .register::<HashMap<String, A>>();
        #[cfg(feature = "persistent")]
        let registry = registry.register::<crate::persistent::Stack<A>>();
        registry
    }

    /// Adds the container kind `S`. Registering a kind twice keeps one entry.
    #[must_use]
    pub fn register<S>(mut self) -> Self
    where
        S: Traversable<Item = A> + Rebuild<A, Output = S> + Any,
        S::Key: 'static,
        <S as Rebuild<A>>::Builder: 'static,
    {
        let kind = type_name::<S>();
        tracing::debug!(type_name = kind, element = type_name::<A>(), "registering traversable kind");
        self.entries.insert(
            TypeId::of::<S>(),
            Entry {
                type_name: kind,
                split: split_as::<S, A>,
                shape_of: shape_as::<S>,
            },
        );
        self
    }

    /// Returns `true` if the kind of `value` has been registered.
    #[must_use]
    pub fn is_registered(&self, value: &Dynamic) -> bool {
        self.entries.contains_key(&value.value_type_id())
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no kind has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reports the shape of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`OpticError::UnsupportedTraversable`] if its kind is not
    /// registered.
    pub fn shape_of(&self, value: &Dynamic) -> Result<Shape, OpticError> {
        let entry = self.entry_for(value)?;
        (entry.shape_of)(value.as_any()).ok_or_else(|| unsupported(value.type_name()))
    }

    /// Takes `value` apart into an [`Erased`] container of its elements.
    ///
    /// # Errors
    ///
    /// Returns [`OpticError::UnsupportedTraversable`] naming the concrete
    /// type if its kind is not registered.
    pub fn split(&self, value: Dynamic) -> Result<Erased<A>, OpticError> {
        let entry = self.entry_for(&value)?;
        let (name, value) = value.into_parts();
        let erased = (entry.split)(value).map_err(|_| unsupported(name))?;
        tracing::trace!(
            type_name = entry.type_name,
            shape = ?erased.container_shape(),
            elements = erased.values().len(),
            "split container"
        );
        Ok(erased)
    }

    /// Applies `function` to every element of `value` and rebuilds it.
    ///
    /// # Errors
    ///
    /// Returns [`OpticError::UnsupportedTraversable`] if the kind of `value`
    /// is not registered.
    pub fn over<G>(&self, function: G, value: Dynamic) -> Result<Dynamic, OpticError>
    where
        G: FnMut(A) -> A,
    {
        over(&traverse(), function, self.split(value)?).assemble()
    }

    fn entry_for(&self, value: &Dynamic) -> Result<&Entry<A>, OpticError> {
        self.entries.get(&value.value_type_id()).ok_or_else(|| {
            tracing::debug!(type_name = value.type_name(), "no traversal registered");
            unsupported(value.type_name())
        })
    }
}

impl<A: 'static> Default for Registry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Registry<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.entries.values().map(|entry| entry.type_name).collect();
        kinds.sort_unstable();
        formatter.debug_struct("Registry").field("kinds", &kinds).finish()
    }
}

const fn unsupported(type_name: &'static str) -> OpticError {
    OpticError::UnsupportedTraversable { type_name }
}

fn split_as<S, A>(value: Box<dyn Any>) -> Result<Erased<A>, Box<dyn Any>>
where
    S: Traversable<Item = A> + Rebuild<A, Output = S> + Any,
    S::Key: 'static,
    <S as Rebuild<A>>::Builder: 'static,
    A: 'static,
{
    let container = *value.downcast::<S>()?;
    let shape = container.shape();
    let (builder, entries) = container.into_parts();
    let (keys, values): (Vec<S::Key>, Vec<A>) = entries.unzip();
    let assemble = move |values: Vec<A>| {
        let builder = keys
            .into_iter()
            .zip(values)
            .fold(builder, |builder, (key, item)| S::rebuild(builder, key, item));
        Box::new(S::finish(builder)) as Box<dyn Any>
    };
    Ok(Erased::new(type_name::<S>(), shape, values, Box::new(assemble)))
}

fn shape_as<S>(value: &dyn Any) -> Option<Shape>
where
    S: Traversable + Any,
{
    value.downcast_ref::<S>().map(Traversable::shape)
}
