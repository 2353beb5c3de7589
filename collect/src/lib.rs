//! Declarative reducers, ordered containers, and comparators for in-memory collections.
//!
//! Each operation is a small value built by a factory function and driven over a slice:
//! reducers through [Fold::fold_with], filters through [Fold::filter_with], and comparators
//! through [slice::sort_by].
//!
//! ```
//! use declarative_collect::{key::KeySource, map::new_map, reducer::group_by, Fold, MethodMap};
//!
//! let groups = ["a", "a", "b"]
//!     .fold_with(new_map(), group_by(KeySource::getter(|s: &&str| s.to_string())))
//!     .unwrap();
//! assert_eq!(groups.keys().unwrap(), vec!["a", "b"]);
//! ```
//!
//! # Status
//!
//! `declarative-collect` is **ALPHA** software and is not yet recommended for production use.
//! Developers should expect breaking changes and occasional instability.

mod error;
pub use error::Error;
pub mod filter;
pub mod fold;
pub use fold::{Filter, Fold, Reducer};
pub mod key;
pub mod map;
pub use map::MethodMap;
pub mod object;
pub use object::Object;
pub mod reducer;
pub mod sort;
pub mod value;
pub use value::Record;
