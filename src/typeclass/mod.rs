//! Type class traits and the carrier types optics run under.
//!
//! - [`Functor`], [`Contravariant`]: Mapping over (or behind) a carrier
//! - [`Apply`], [`Applicative`]: Combining independent carriers
//! - [`Settable`]: Applicatives whose effect can be stripped off again
//! - [`Semigroup`], [`Monoid`]: Associative combination with an identity
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have higher-kinded types. Each type constructor is
//! represented by a zero-sized *brand* implementing [`TypeConstructor`],
//! whose Generic Associated Type `Applied<A>` names the concrete container.
//! Capabilities are traits on the brand, and a brand value is passed
//! wherever the capability is needed.
//!
//! ## Carriers
//!
//! | Brand | Applied type | Capabilities |
//! |-------|--------------|--------------|
//! | [`IdentityBrand`] | [`Identity<A>`] | Functor, Applicative, Settable |
//! | [`ConstBrand<R>`] | [`Const<R, A>`] | Functor, Contravariant |
//! | [`ApplyConstBrand<M>`] | [`ApplyConst<M, A>`] | Functor, Contravariant, Applicative (for `M: Monoid`) |
//! | [`OptionBrand`] | `Option<A>` | Functor, Applicative |
//! | [`ResultBrand<E>`] | `Result<A, E>` | Functor, Applicative |
//!
//! ## Monoids
//!
//! - [`Sum`], [`Product`]: Numeric addition and multiplication
//! - [`First`], [`Last`]: Leftmost / rightmost present value
//! - [`Endo`]: Function composition
//!
//! # Examples
//!
//! ```rust
//! use optika::typeclass::{Apply, Functor, IdentityBrand, Identity};
//!
//! let mapped = IdentityBrand.fmap(Identity::new(2), |x| x * 10);
//! let combined = IdentityBrand.map2(mapped, Identity::new(1), |x, y| x + y);
//! assert_eq!(combined, Identity::new(21));
//! ```

mod applicative;
mod constant;
mod endo;
mod functor;
mod higher;
mod identity;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::{Applicative, Apply, Settable};
pub use constant::{ApplyConst, ApplyConstBrand, Const, ConstBrand};
pub use endo::Endo;
pub use functor::{Contravariant, Functor};
pub use higher::{OptionBrand, ResultBrand, TypeConstructor};
pub use identity::{Identity, IdentityBrand};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{First, Last, Product, Sum};
