//! # ironseq
//!
//! A **lazy sequence-query library** for Rust. ironseq wraps any finite or
//! infinite source of values in an [`Enumerable`] and exposes a chainable set of
//! declarative operators (project, filter, partition, join, aggregate) with
//! deferred execution: nothing is pulled from the source until a terminal
//! operator runs.
//!
//! ## Key Features
//!
//! - **Deferred execution** - building a chain performs zero work
//! - **Single-pass discipline** - every operator consumes its receiver, so a
//!   consumed sequence cannot be iterated twice
//! - **Exact laziness** - `take(k)` pulls exactly `k` elements, even from an
//!   infinite source
//! - **Typed errors** - [`QueryError`] distinguishes invalid arguments,
//!   out-of-range lookups, missing and ambiguous matches
//! - **Explicit absence** - `_or_default` terminals return `Option<T>`, never a
//!   sentinel value
//!
//! ## Quick Start
//!
//! ```
//! use ironseq::*;
//!
//! # fn main() -> Result<()> {
//! let squares_of_evens = Enumerable::range(1, 10)?
//!     .filter(|n| n % 2 == 0)
//!     .select(|n| n * n)
//!     .to_list();
//! assert_eq!(squares_of_evens, vec![4, 16, 36, 64, 100]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Enumerable
//!
//! An [`Enumerable<'a, T>`] owns exactly one producer of `T`. It is created by a
//! factory and is either chained into a new `Enumerable` or consumed by a
//! terminal operator.
//!
//! ### Factories
//! - [`Enumerable::range`] - consecutive integers
//! - [`Enumerable::repeat`] - one value, `count` times
//! - [`Enumerable::empty`] - no elements
//! - [`Enumerable::new`], [`from_vec`], [`from_iter`] - wrap existing data
//!
//! ### Chainable operators (lazy)
//! - [`select`](Enumerable::select) / [`select_many`](Enumerable::select_many) - project and flatten
//! - [`filter`](Enumerable::filter) - keep matching elements (`where`)
//! - [`skip`](Enumerable::skip) / [`take`](Enumerable::take) - positional slicing
//! - [`skip_while`](Enumerable::skip_while) / [`take_while`](Enumerable::take_while) - predicate slicing
//! - [`reverse`](Enumerable::reverse) - back-to-front (buffers on first pull)
//! - [`join`](Enumerable::join) - inner equi-join with a re-iterable inner source
//! - [`inspect`](Enumerable::inspect), [`try_select`](Enumerable::try_select)
//!
//! ### Terminal operators
//! - [`element_at`](Enumerable::element_at), [`first`](Enumerable::first),
//!   [`single`](Enumerable::single) and their `_where` / `_or_default` variants
//! - [`all`](Enumerable::all), [`any`](Enumerable::any), [`count`](Enumerable::count)
//! - [`to_list`](Enumerable::to_list), [`run`](Enumerable::run),
//!   [`try_run`](Enumerable::try_run), [`group_by`](Enumerable::group_by)
//!
//! ### Joins
//!
//! ```
//! use ironseq::*;
//!
//! let inner = vec![2, 3, 4];
//! let pairs = from_vec(vec![1, 2, 3])
//!     .join(&inner, |o| *o, |i| **i, |o, i| (*o, **i))
//!     .to_list();
//! assert_eq!(pairs, vec![(2, 2), (3, 3)]);
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing` (default) - emit `tracing` events where sequences are materialized
//!   and when terminal lookups fail
//!
//! ## Module Overview
//!
//! - [`enumerable`] - The `Enumerable` handle
//! - [`producer`] - Hand-written producers behind `reverse` and `join`
//! - [`helpers`] - Factories and operator implementations
//! - [`error`] - `QueryError` and the crate `Result`
//! - [`validation`] - Argument checks shared by operators
//! - [`extensions`] - Reusable composite queries
//! - [`testing`] - Assertions, fixtures and debug helpers for tests

pub mod enumerable;
pub mod error;
pub mod extensions;
pub mod helpers;
pub mod producer;
pub mod testing;
pub mod validation;

// General re-exports
pub use enumerable::Enumerable;
pub use error::{QueryError, Result};
pub use extensions::CompositeQuery;
pub use helpers::*;
pub use producer::Producer;
